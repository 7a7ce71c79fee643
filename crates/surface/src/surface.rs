use anyhow::Result;
use lyon::math::Point;
use shared::{Font, LineWidth, Rgba, Shadow, TextAlign, TextBaseline};

use crate::style::Style;

/// The drawing-surface capability every presentation routine draws against:
/// style-property assignment plus direct-mode primitives. Bit-exact pixel
/// output is a backend concern, not part of this contract.
///
/// Style assignments persist on the surface until overwritten. Routines that
/// want their changes undone afterwards go through [`with_style`].
pub trait Surface {
    fn style(&self) -> Style;
    fn set_style(&mut self, style: Style);

    fn set_fill_color(&mut self, c: Rgba) {
        let mut s = self.style();
        s.set_fill_color(c);
        self.set_style(s);
    }

    fn set_stroke_color(&mut self, c: Rgba) {
        let mut s = self.style();
        s.set_stroke_color(c);
        self.set_style(s);
    }

    fn set_line_width(&mut self, w: LineWidth) {
        let mut s = self.style();
        s.set_line_width(w);
        self.set_style(s);
    }

    fn set_shadow(&mut self, shadow: Shadow) {
        let mut s = self.style();
        s.set_shadow(shadow);
        self.set_style(s);
    }

    fn set_font(&mut self, font: Font) {
        let mut s = self.style();
        s.font = font;
        self.set_style(s);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        let mut s = self.style();
        s.text_align = align;
        self.set_style(s);
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        let mut s = self.style();
        s.text_baseline = baseline;
        self.set_style(s);
    }

    fn fill_rect(&mut self, origin: Point, width: f32, height: f32);
    fn fill_circle(&mut self, center: Point, radius: f32);

    /// Discards any path under construction and starts a fresh one.
    fn begin_path(&mut self);
    fn move_to(&mut self, to: Point) -> Result<()>;
    fn line_to(&mut self, to: Point) -> Result<()>;
    /// Submits the path under construction as a single stroked path. An empty
    /// path is submitted as-is and draws nothing.
    fn stroke(&mut self) -> Result<()>;

    fn fill_text(&mut self, text: &str, at: Point);
}

/// Scoped style change: snapshot the current style, apply `style`, run the
/// draw closure, restore the snapshot.
pub fn with_style<S, R, F>(surface: &mut S, style: Style, f: F) -> R
where
    S: Surface + ?Sized,
    F: FnOnce(&mut S) -> R,
{
    let saved = surface.style();
    surface.set_style(style);
    let out = f(surface);
    surface.set_style(saved);
    out
}
