use lyon::math::point;
use shared::{Rgba, Shadow};
use surface::Surface;

use crate::court::Court;

pub const WALL_THICKNESS: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: Rgba,
}

/// The semi-opaque black tint every sprite shadow uses.
fn shadow_tint() -> Rgba {
    Rgba::new(0.0, 0.0, 0.0, 0.7)
}

pub fn reset_shadow<S>(surface: &mut S)
where
    S: Surface + ?Sized,
{
    surface.set_shadow(Shadow::NONE);
}

pub fn draw_paddle<S>(surface: &mut S, paddle: &Paddle)
where
    S: Surface + ?Sized,
{
    surface.set_fill_color(paddle.color);
    surface.set_shadow(Shadow::new(shadow_tint(), 3.0, 1.0, 10.0));
    surface.fill_rect(point(paddle.x, paddle.y), paddle.width, paddle.height);
    reset_shadow(surface);
}

/// Draws the ball as a filled disc centered in its bounding square, with a
/// radius of two thirds of its size. Unlike the other sprites this leaves the
/// shadow state behind, matching the original; callers that care set their
/// own shadow before the next draw.
pub fn draw_ball<S>(surface: &mut S, ball: &Ball)
where
    S: Surface + ?Sized,
{
    surface.set_fill_color(ball.color);
    surface.set_shadow(Shadow::new(shadow_tint(), 0.0, 0.0, 6.0));
    surface.fill_circle(
        point(ball.x + ball.size / 2.0, ball.y + ball.size / 2.0),
        ball.size / 1.5,
    );
}

/// Top and bottom wall bars, full court width.
pub fn draw_walls<S>(surface: &mut S, court: &Court)
where
    S: Surface + ?Sized,
{
    surface.set_fill_color(Rgba::opaque(78.0, 78.0, 78.0));
    surface.set_shadow(Shadow::new(
        Rgba::new(128.0, 128.0, 128.0, 0.7),
        0.0,
        0.0,
        6.0,
    ));
    surface.fill_rect(point(0.0, 0.0), *court.width, WALL_THICKNESS);
    surface.fill_rect(
        point(0.0, court.height - WALL_THICKNESS),
        *court.width,
        WALL_THICKNESS,
    );
    reset_shadow(surface);
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use lyon::math::point;
    use shared::Rgba;
    use surface::{DisplayItem, RecordingSurface, Surface};

    use super::{draw_ball, draw_paddle, draw_walls, Ball, Paddle, WALL_THICKNESS};
    use crate::court::Court;

    #[test]
    fn paddle_fill_and_shadow_table() {
        let mut surface = RecordingSurface::new();
        let paddle = Paddle {
            x: 10.0,
            y: 40.0,
            width: 12.0,
            height: 80.0,
            color: Rgba::opaque(200.0, 40.0, 40.0),
        };
        draw_paddle(&mut surface, &paddle);
        match &surface.items()[0] {
            DisplayItem::Rect {
                origin,
                width,
                height,
                fill,
                shadow,
            } => {
                assert_eq!(*origin, point(10.0, 40.0));
                assert_relative_eq!(*width, 12.0);
                assert_relative_eq!(*height, 80.0);
                assert_eq!(*fill, paddle.color);
                assert_relative_eq!(shadow.offset_x, 3.0);
                assert_relative_eq!(shadow.offset_y, 1.0);
                assert_relative_eq!(shadow.blur, 10.0);
            }
            other => panic!("expected rect, got {:?}", other),
        }
        // Paddle drawing resets shadow state afterwards.
        assert!(surface.style().shadow.color.is_transparent());
    }

    #[test]
    fn ball_is_centered_and_leaves_shadow_behind() {
        let mut surface = RecordingSurface::new();
        let ball = Ball {
            x: 100.0,
            y: 60.0,
            size: 12.0,
            color: Rgba::default(),
        };
        draw_ball(&mut surface, &ball);
        match &surface.items()[0] {
            DisplayItem::Circle { center, radius, .. } => {
                assert_eq!(*center, point(106.0, 66.0));
                assert_relative_eq!(*radius, 8.0);
            }
            other => panic!("expected circle, got {:?}", other),
        }
        // No reset here, same as the original: the blur stays on the surface.
        assert_relative_eq!(surface.style().shadow.blur, 6.0);
    }

    #[test]
    fn walls_cover_both_edges() {
        let mut surface = RecordingSurface::new();
        let court = Court::new(800.0, 600.0, 16.0);
        draw_walls(&mut surface, &court);
        assert_eq!(surface.items().len(), 2);
        match (&surface.items()[0], &surface.items()[1]) {
            (
                DisplayItem::Rect { origin: top, .. },
                DisplayItem::Rect {
                    origin: bottom,
                    height,
                    ..
                },
            ) => {
                assert_eq!(*top, point(0.0, 0.0));
                assert_eq!(*bottom, point(0.0, 600.0 - WALL_THICKNESS));
                assert_relative_eq!(*height, WALL_THICKNESS);
            }
            other => panic!("expected two rects, got {:?}", other),
        }
        assert!(surface.style().shadow.color.is_transparent());
    }
}
