use shared::{Font, LineWidth, Rgba, Shadow, Stroke, TextAlign, TextBaseline};

/// The full set of style properties a drawing surface carries between draw
/// calls. Defaults match a freshly created canvas context.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub fill_color: Rgba,
    pub stroke: Stroke,
    pub shadow: Shadow,
    pub font: Font,
    pub text_align: TextAlign,
    pub text_baseline: TextBaseline,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            fill_color: Rgba::default(),
            stroke: Stroke::default(),
            shadow: Shadow::NONE,
            font: Font::default(),
            text_align: TextAlign::default(),
            text_baseline: TextBaseline::default(),
        }
    }
}

impl Style {
    pub fn set_fill_color(&mut self, c: Rgba) {
        self.fill_color.set(c);
    }

    pub fn set_stroke_color(&mut self, c: Rgba) {
        self.stroke.color.set(c);
    }

    pub fn set_line_width(&mut self, w: LineWidth) {
        self.stroke.width.set(w);
    }

    pub fn set_shadow(&mut self, s: Shadow) {
        self.shadow.set(s);
    }
}
