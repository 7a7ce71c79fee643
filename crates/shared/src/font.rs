use std::fmt;

/// A canvas font assignment, e.g. `40px 'Press Start 2P'`.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub px: f32,
    pub family: String,
}

impl Font {
    pub fn new(px: f32, family: &str) -> Self {
        Font {
            px,
            family: family.to_string(),
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px '{}'", self.px, self.family)
    }
}

impl Default for Font {
    fn default() -> Self {
        Font::new(10.0, "sans-serif")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl Default for TextAlign {
    fn default() -> Self {
        TextAlign::Left
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Alphabetic,
}

impl Default for TextBaseline {
    fn default() -> Self {
        TextBaseline::Alphabetic
    }
}

#[cfg(test)]
mod test {
    use super::Font;

    #[test]
    fn canvas_font_string() {
        let f = Font::new(40.0, "Press Start 2P");
        assert_eq!(f.to_string(), "40px 'Press Start 2P'");
    }
}
