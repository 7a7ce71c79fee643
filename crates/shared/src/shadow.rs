use crate::Rgba;

/// Drop-shadow parameters. The default is the neutral state every routine
/// that resets style puts the surface back into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Rgba,
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
}

impl Shadow {
    pub const NONE: Shadow = Shadow {
        color: Rgba::TRANSPARENT,
        offset_x: 0.0,
        offset_y: 0.0,
        blur: 0.0,
    };

    pub fn new(color: Rgba, offset_x: f32, offset_y: f32, blur: f32) -> Self {
        Shadow {
            color,
            offset_x,
            offset_y,
            blur,
        }
    }

    pub fn set(&mut self, s: Shadow) {
        *self = s;
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Shadow::NONE
    }
}

#[cfg(test)]
mod test {
    use super::Shadow;

    #[test]
    fn default_is_neutral() {
        let s = Shadow::default();
        assert!(s.color.is_transparent());
        assert_eq!(s.offset_x, 0.0);
        assert_eq!(s.offset_y, 0.0);
        assert_eq!(s.blur, 0.0);
    }
}
