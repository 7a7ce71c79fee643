use crate::{LineWidth, Rgba};

/// Pen settings a stroked path is drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: LineWidth,
}

impl Default for Stroke {
    fn default() -> Self {
        Stroke {
            color: Rgba::default(),
            width: LineWidth::default(),
        }
    }
}

impl Stroke {
    pub fn new(color: Rgba, width: LineWidth) -> Self {
        Stroke { color, width }
    }
}
