use anyhow::Result;
use lyon::math::point;
use shared::{DashPattern, Extent, InvalidArgument, LineWidth, Rgba, Stroke};
use surface::Surface;

use crate::court::Court;

/// A vertical pattern line: a dashed run of segments at a fixed horizontal
/// offset. Built fresh per draw call; validation happened when the extent and
/// pattern were constructed, so a `LineSpec` is always steppable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSpec {
    pub axis: f32,
    pub extent: Extent,
    pub pattern: DashPattern,
    pub stroke: Stroke,
}

impl LineSpec {
    pub fn new(axis: f32, extent: Extent, pattern: DashPattern, stroke: Stroke) -> Self {
        LineSpec {
            axis,
            extent,
            pattern,
            stroke,
        }
    }

    pub fn segments(&self) -> Segments {
        Segments {
            cursor: self.extent.start(),
            end: self.extent.end(),
            dash: self.pattern.dash(),
            period: self.pattern.period(),
        }
    }

    /// How many segments [`segments`](Self::segments) will yield.
    pub fn segment_count(&self) -> usize {
        (self.extent.span() / self.pattern.period()).ceil() as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: f32,
    pub end: f32,
}

/// Yields dash segments in strictly increasing order of `start`, each spaced
/// one period after the previous.
#[derive(Debug, Clone)]
pub struct Segments {
    cursor: f32,
    end: f32,
    dash: f32,
    period: f32,
}

impl Iterator for Segments {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        // The bound is checked before emitting, so the final segment may
        // overshoot the extent end. That is the original drawing behavior
        // and is kept, not fixed.
        if self.cursor >= self.end {
            return None;
        }
        let segment = Segment {
            start: self.cursor,
            end: self.cursor + self.dash,
        };
        self.cursor += self.period;
        Some(segment)
    }
}

/// Sets the spec's stroke state on the surface, emits every dash segment,
/// and submits them as one stroked path. A degenerate extent still submits
/// the (empty) path. Stroke state is left as assigned, not restored.
pub fn render_pattern_line<S>(surface: &mut S, spec: &LineSpec) -> Result<()>
where
    S: Surface + ?Sized,
{
    surface.set_stroke_color(spec.stroke.color);
    surface.set_line_width(spec.stroke.width);
    surface.begin_path();
    for segment in spec.segments() {
        surface.move_to(point(spec.axis, segment.start))?;
        surface.line_to(point(spec.axis, segment.end))?;
    }
    surface.stroke()
}

/// The dashed center line: dash of one unit, gap of 0.8 units, black, two
/// pixels wide, spanning the full court height.
pub fn center_line(court: &Court) -> Result<LineSpec, InvalidArgument> {
    let pattern = DashPattern::new(court.unit, court.unit * 0.8)?;
    let extent = Extent::new(0.0, *court.height)?;
    Ok(LineSpec::new(
        court.center_x(),
        extent,
        pattern,
        Stroke::new(Rgba::default(), LineWidth::new(2.0)),
    ))
}

/// A goal line at the given horizontal offset: half-unit dashes with equal
/// gaps, grey, one pixel wide.
pub fn goal_line(court: &Court, axis: f32) -> Result<LineSpec, InvalidArgument> {
    let dash = court.unit / 2.0;
    let pattern = DashPattern::new(dash, dash)?;
    let extent = Extent::new(0.0, *court.height)?;
    Ok(LineSpec::new(
        axis,
        extent,
        pattern,
        Stroke::new(Rgba::opaque(128.0, 128.0, 128.0), LineWidth::new(1.0)),
    ))
}
