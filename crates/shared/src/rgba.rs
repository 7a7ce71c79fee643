mod test_utils;

/// Color channels are on the canvas 0-255 scale; alpha is 0-1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::opaque(0.0, 0.0, 0.0)
    }
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 0.0,
    };

    pub fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Rgba {
            red: Rgba::clamp_channel(red),
            green: Rgba::clamp_channel(green),
            blue: Rgba::clamp_channel(blue),
            alpha: Rgba::clamp_alpha(alpha),
        }
    }

    pub fn opaque(red: f32, green: f32, blue: f32) -> Self {
        Rgba::new(red, green, blue, 1.0)
    }

    pub fn set(&mut self, c: Rgba) {
        *self = c;
    }

    pub fn is_transparent(&self) -> bool {
        self.alpha == 0.0
    }

    fn clamp_channel(v: f32) -> f32 {
        if v > 255.0 {
            255.0
        } else if v < 0.0 {
            0.0
        } else {
            v
        }
    }

    fn clamp_alpha(v: f32) -> f32 {
        if v > 1.0 {
            1.0
        } else if v < 0.0 {
            0.0
        } else {
            v
        }
    }
}

#[cfg(test)]
mod test {
    use super::test_utils::assert_relative_eq_rgba;
    use super::Rgba;

    #[test]
    fn min_max() {
        let c = Rgba::new(256.0, -1.0, 130.0, 1.3);
        assert_relative_eq_rgba(c, Rgba::new(255.0, 0.0, 130.0, 1.0))
    }

    #[test]
    fn transparent() {
        assert!(Rgba::TRANSPARENT.is_transparent());
        assert!(!Rgba::opaque(78.0, 78.0, 78.0).is_transparent());
    }
}
