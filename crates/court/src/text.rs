use lyon::math::point;
use shared::{Font, Rgba, Shadow, TextAlign, TextBaseline};
use surface::Surface;

use crate::court::Court;
use crate::sprites::reset_shadow;

pub const SCORE_FONT_FAMILY: &str = "Press Start 2P";

/// Semantic keys the instruction text is localized under.
pub const LEFT_HINT_KEY: &str = "w (up) s (down)";
pub const RIGHT_HINT_KEY: &str = "\u{2191} (up) \u{2193} (down)";

/// Localized display strings for semantic keys. The actual table lives with
/// the host application; the passthrough below suffices for tests and demos.
pub trait Labels {
    fn lookup(&self, key: &str) -> String;
}

/// Echoes the key back as the display string.
#[derive(Debug, Default)]
pub struct EchoLabels;

impl Labels for EchoLabels {
    fn lookup(&self, key: &str) -> String {
        key.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

fn shadow_tint() -> Rgba {
    Rgba::new(0.0, 0.0, 0.0, 0.7)
}

/// Score digits near the top center, nudged toward the scoring player's half.
/// The shadow leans away from the center on each side.
pub fn draw_score<S>(surface: &mut S, court: &Court, side: Side, score: u32)
where
    S: Surface + ?Sized,
{
    surface.set_font(Font::new(2.5 * court.unit, SCORE_FONT_FAMILY));
    surface.set_fill_color(Rgba::default());
    surface.set_text_baseline(TextBaseline::Top);
    let (offset_x, x) = match side {
        Side::Left => (1.0, court.width / 2.0 - court.width / 8.0),
        Side::Right => (-1.0, court.width / 2.0 + court.width / 8.5),
    };
    surface.set_shadow(Shadow::new(shadow_tint(), offset_x, 0.0, 3.0));
    surface.fill_text(&score.to_string(), point(x, 1.5 * court.unit));
    reset_shadow(surface);
}

/// Movement-key hint in the top corner of the given side, localized through
/// the label table and aligned toward its own edge.
pub fn draw_control_hint<S, L>(surface: &mut S, court: &Court, side: Side, labels: &L)
where
    S: Surface + ?Sized,
    L: Labels + ?Sized,
{
    surface.set_font(Font::new(1.5 * court.unit, SCORE_FONT_FAMILY));
    surface.set_shadow(Shadow::new(shadow_tint(), -1.0, 0.0, 3.0));
    surface.set_text_baseline(TextBaseline::Top);
    surface.set_fill_color(Rgba::default());
    let (align, key, x) = match side {
        Side::Left => (TextAlign::Left, LEFT_HINT_KEY, 2.0 * court.unit),
        Side::Right => (
            TextAlign::Right,
            RIGHT_HINT_KEY,
            court.width - 2.0 * court.unit,
        ),
    };
    surface.set_text_align(align);
    surface.fill_text(&labels.lookup(key), point(x, 1.5 * court.unit));
    reset_shadow(surface);
}
