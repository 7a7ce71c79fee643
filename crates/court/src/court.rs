use shared::{Height, Width};

/// Playfield dimensions plus the `unit` scale factor every font size and
/// margin in the original layout is expressed in.
#[derive(Debug, Clone, Copy)]
pub struct Court {
    pub width: Width,
    pub height: Height,
    pub unit: f32,
}

impl Court {
    pub fn new(width: f32, height: f32, unit: f32) -> Self {
        Court {
            width: Width::new(width),
            height: Height::new(height),
            unit,
        }
    }

    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }
}
