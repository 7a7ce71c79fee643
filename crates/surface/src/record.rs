use anyhow::Result;
use lyon::geom::LineSegment;
use lyon::math::Point;
use lyon::path::{Path, PathEvent};
use shared::{Font, Rgba, Shadow, Stroke, TextAlign, TextBaseline};

use crate::pen::Pen;
use crate::style::Style;
use crate::surface::Surface;

/// Everything a frame drew, in submission order, each item stamped with the
/// style in effect when it was submitted.
#[derive(Debug)]
pub enum DisplayItem {
    Rect {
        origin: Point,
        width: f32,
        height: f32,
        fill: Rgba,
        shadow: Shadow,
    },
    Circle {
        center: Point,
        radius: f32,
        fill: Rgba,
        shadow: Shadow,
    },
    StrokedPath {
        path: Path,
        stroke: Stroke,
        shadow: Shadow,
    },
    Text {
        text: String,
        at: Point,
        fill: Rgba,
        font: Font,
        align: TextAlign,
        baseline: TextBaseline,
        shadow: Shadow,
    },
}

/// Reference [`Surface`] implementation: records a display list instead of
/// producing pixels. Doubles as the test surface for every drawing routine in
/// the workspace.
#[derive(Default)]
pub struct RecordingSurface {
    style: Style,
    pen: Pen,
    items: Vec<DisplayItem>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        RecordingSurface::default()
    }

    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<DisplayItem> {
        self.items
    }
}

impl Surface for RecordingSurface {
    fn style(&self) -> Style {
        self.style.clone()
    }

    fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    fn fill_rect(&mut self, origin: Point, width: f32, height: f32) {
        self.items.push(DisplayItem::Rect {
            origin,
            width,
            height,
            fill: self.style.fill_color,
            shadow: self.style.shadow,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32) {
        self.items.push(DisplayItem::Circle {
            center,
            radius,
            fill: self.style.fill_color,
            shadow: self.style.shadow,
        });
    }

    fn begin_path(&mut self) {
        self.pen = Pen::default();
    }

    fn move_to(&mut self, to: Point) -> Result<()> {
        self.pen.move_to(to)
    }

    fn line_to(&mut self, to: Point) -> Result<()> {
        self.pen.line_to(to)
    }

    fn stroke(&mut self) -> Result<()> {
        let pen = std::mem::take(&mut self.pen);
        self.items.push(DisplayItem::StrokedPath {
            path: pen.finish(),
            stroke: self.style.stroke,
            shadow: self.style.shadow,
        });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, at: Point) {
        self.items.push(DisplayItem::Text {
            text: text.to_string(),
            at,
            fill: self.style.fill_color,
            font: self.style.font.clone(),
            align: self.style.text_align,
            baseline: self.style.text_baseline,
            shadow: self.style.shadow,
        });
    }
}

/// Flattens a recorded path into its line segments, in emission order.
pub fn line_segments(path: &Path) -> Vec<LineSegment<f32>> {
    path.iter()
        .filter_map(|event| match event {
            PathEvent::Line { from, to } => Some(LineSegment { from, to }),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use lyon::math::point;
    use shared::{LineWidth, Rgba, Shadow};

    use super::{line_segments, DisplayItem, RecordingSurface};
    use crate::surface::{with_style, Surface};
    use crate::Style;

    #[test]
    fn records_rect_with_current_style() {
        let mut surface = RecordingSurface::new();
        surface.set_fill_color(Rgba::opaque(78.0, 78.0, 78.0));
        surface.fill_rect(point(0.0, 0.0), 800.0, 5.0);
        match &surface.items()[0] {
            DisplayItem::Rect { fill, width, .. } => {
                assert_eq!(*fill, Rgba::opaque(78.0, 78.0, 78.0));
                assert_eq!(*width, 800.0);
            }
            other => panic!("expected rect, got {:?}", other),
        }
    }

    #[test]
    fn empty_stroke_is_recorded() {
        let mut surface = RecordingSurface::new();
        surface.begin_path();
        surface.stroke().unwrap();
        match &surface.items()[0] {
            DisplayItem::StrokedPath { path, .. } => {
                assert!(line_segments(path).is_empty());
            }
            other => panic!("expected stroked path, got {:?}", other),
        }
    }

    #[test]
    fn stroke_collects_all_pen_segments() {
        let mut surface = RecordingSurface::new();
        surface.begin_path();
        surface.move_to(point(50.0, 0.0)).unwrap();
        surface.line_to(point(50.0, 10.0)).unwrap();
        surface.move_to(point(50.0, 18.0)).unwrap();
        surface.line_to(point(50.0, 28.0)).unwrap();
        surface.stroke().unwrap();
        match &surface.items()[0] {
            DisplayItem::StrokedPath { path, .. } => {
                let segments = line_segments(path);
                assert_eq!(segments.len(), 2);
                assert_eq!(segments[0].from, point(50.0, 0.0));
                assert_eq!(segments[1].to, point(50.0, 28.0));
            }
            other => panic!("expected stroked path, got {:?}", other),
        }
    }

    #[test]
    fn with_style_restores_previous_style() {
        let mut surface = RecordingSurface::new();
        let before = surface.style();
        let mut loud = Style::default();
        loud.set_line_width(LineWidth::new(7.0));
        loud.set_shadow(Shadow::new(Rgba::new(0.0, 0.0, 0.0, 0.7), 3.0, 1.0, 10.0));
        with_style(&mut surface, loud.clone(), |s| {
            assert_eq!(s.style(), loud);
        });
        assert_eq!(surface.style(), before);
    }
}
