use crate::InvalidArgument;

/// On/off lengths of a dashed line. A non-positive dash would make the dash
/// stepping rule loop forever, so construction rejects it up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPattern {
    dash: f32,
    gap: f32,
}

impl DashPattern {
    pub fn new(dash: f32, gap: f32) -> Result<Self, InvalidArgument> {
        if dash <= 0.0 {
            return Err(InvalidArgument::NonPositiveDashLength(dash));
        }
        if gap < 0.0 {
            return Err(InvalidArgument::NegativeGapLength(gap));
        }
        Ok(DashPattern { dash, gap })
    }

    /// A gap of zero is valid: it draws a contiguous line out of unit dashes.
    pub fn solid(dash: f32) -> Result<Self, InvalidArgument> {
        DashPattern::new(dash, 0.0)
    }

    pub fn dash(&self) -> f32 {
        self.dash
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }

    /// Distance from one dash start to the next.
    pub fn period(&self) -> f32 {
        self.dash + self.gap
    }
}
