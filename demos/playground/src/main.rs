//! Draws one Pong court frame onto a recording surface and dumps the display
//! list, so the output of every routine can be eyeballed without a browser.

use anyhow::Result;
use court::{
    center_line, draw_ball, draw_control_hint, draw_paddle, draw_score, draw_walls, goal_line,
    render_pattern_line, Ball, Court, EchoLabels, Paddle, Side,
};
use shared::Rgba;
use surface::{line_segments, DisplayItem, RecordingSurface};

const COURT_WIDTH: f32 = 800.0;
const COURT_HEIGHT: f32 = 600.0;
const UNIT: f32 = 16.0;

fn main() -> Result<()> {
    env_logger::init();

    let court = Court::new(COURT_WIDTH, COURT_HEIGHT, UNIT);
    let mut surface = RecordingSurface::new();

    draw_walls(&mut surface, &court);
    render_pattern_line(&mut surface, &center_line(&court)?)?;
    render_pattern_line(&mut surface, &goal_line(&court, 40.0)?)?;
    render_pattern_line(&mut surface, &goal_line(&court, court.width - 40.0)?)?;

    let left_paddle = Paddle {
        x: 20.0,
        y: 260.0,
        width: 12.0,
        height: 80.0,
        color: Rgba::opaque(200.0, 40.0, 40.0),
    };
    let right_paddle = Paddle {
        x: COURT_WIDTH - 32.0,
        y: 260.0,
        width: 12.0,
        height: 80.0,
        color: Rgba::opaque(40.0, 40.0, 200.0),
    };
    draw_paddle(&mut surface, &left_paddle);
    draw_paddle(&mut surface, &right_paddle);

    draw_ball(
        &mut surface,
        &Ball {
            x: COURT_WIDTH / 2.0 - 6.0,
            y: COURT_HEIGHT / 2.0 - 6.0,
            size: 12.0,
            color: Rgba::default(),
        },
    );

    draw_score(&mut surface, &court, Side::Left, 3);
    draw_score(&mut surface, &court, Side::Right, 7);
    draw_control_hint(&mut surface, &court, Side::Left, &EchoLabels);
    draw_control_hint(&mut surface, &court, Side::Right, &EchoLabels);

    for (i, item) in surface.items().iter().enumerate() {
        match item {
            DisplayItem::Rect {
                origin,
                width,
                height,
                ..
            } => println!(
                "{:2}: rect   {}x{} at ({}, {})",
                i, width, height, origin.x, origin.y
            ),
            DisplayItem::Circle { center, radius, .. } => println!(
                "{:2}: circle r={} at ({}, {})",
                i, radius, center.x, center.y
            ),
            DisplayItem::StrokedPath { path, stroke, .. } => println!(
                "{:2}: path   {} segments, width {}",
                i,
                line_segments(path).len(),
                stroke.width
            ),
            DisplayItem::Text { text, at, .. } => {
                println!("{:2}: text   {:?} at ({}, {})", i, text, at.x, at.y)
            }
        }
    }

    log::info!("recorded {} display items", surface.items().len());
    Ok(())
}
