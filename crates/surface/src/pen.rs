use anyhow::{Ok, Result};
use lyon::math::Point;
use lyon::path::Path;
use strum_macros::Display;
use thiserror::Error;

/// Tracks whether the path under construction has an open subpath. `line_to`
/// is only legal once `move_to` has begun one; the underlying builder would
/// panic otherwise, so the pen turns the misuse into an error instead.
pub(crate) struct Pen {
    state: State,
    builder: lyon::path::Builder,
}

impl Default for Pen {
    fn default() -> Self {
        Pen {
            state: State::Idle,
            builder: lyon::path::Builder::new(),
        }
    }
}

impl Pen {
    pub fn move_to(&mut self, to: Point) -> Result<()> {
        match self.state {
            State::Idle => {}
            State::Begun(_) | State::Drawing(_) => {
                self.builder.end(false);
            }
        }
        self.builder.begin(to);
        self.state = State::Begun(Begun { first: to });
        assert!(matches!(self.state, State::Begun(_)));
        Ok(())
    }

    pub fn line_to(&mut self, to: Point) -> Result<()> {
        let first = match self.state {
            State::Idle => {
                return Err(PenError::NoOpenSubpath("line_to").into());
            }
            State::Begun(s) => s.first,
            State::Drawing(s) => s.first,
        };
        self.builder.line_to(to);
        self.state = State::Drawing(Drawing { first, current: to });
        assert!(matches!(self.state, State::Drawing(_)));
        Ok(())
    }

    pub fn assert_is_idle(&self) -> Result<()> {
        match self.state {
            State::Idle => Ok(()),
            _ => Err(PenError::WrongState("Idle").into()),
        }
    }

    /// Ends any open subpath and builds the accumulated path. A pen that
    /// never begun a subpath builds an empty path, which is a valid no-op
    /// stroke.
    pub fn finish(self) -> Path {
        let mut builder = self.builder;
        match self.state {
            State::Idle => {}
            State::Begun(_) | State::Drawing(_) => {
                builder.end(false);
            }
        }
        builder.build()
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Begun {
    first: Point,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Drawing {
    first: Point,
    current: Point,
}

#[derive(Debug, Copy, Clone, Display)]
pub(crate) enum State {
    Idle,
    Begun(Begun),
    Drawing(Drawing),
}

#[derive(Error, Debug)]
pub enum PenError {
    #[error("{0} requires an open subpath")]
    NoOpenSubpath(&'static str),
    #[error("pen is not in state {0} but should be")]
    WrongState(&'static str),
}
