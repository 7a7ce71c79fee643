mod court;
mod line;
mod page;
mod sprites;
mod text;

pub use crate::court::Court;
pub use crate::line::{center_line, goal_line, render_pattern_line, LineSpec, Segment, Segments};
pub use crate::page::{release_session, AiPage, GameSession, Page, SessionLauncher};
pub use crate::sprites::{
    draw_ball, draw_paddle, draw_walls, reset_shadow, Ball, Paddle, WALL_THICKNESS,
};
pub use crate::text::{
    draw_control_hint, draw_score, EchoLabels, Labels, Side, LEFT_HINT_KEY, RIGHT_HINT_KEY,
    SCORE_FONT_FAMILY,
};
pub use shared::InvalidArgument;
