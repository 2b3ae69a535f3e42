//! Glyph outlines as pen strokes.
//!
//! Parses the `M`/`C` subset of SVG path data into [`PathCommand`]s and
//! flattens them into polylines by sampling every cubic segment at a fixed
//! number of steps.

pub mod bezier;
pub mod flatten;
pub mod parse;

pub use bezier::{eval_cubic, sample_cubic, SampleError, DEFAULT_STEPS};
pub use flatten::{flatten, FlattenError};
pub use parse::{parse_path, ParseError};

pub type Point = lyon_geom::Point<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    Move(Point),
    /// Cubic bezier starting at the current pen position.
    CubicCurve {
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
}

impl PathCommand {
    /// Pen position after this command.
    pub fn to(&self) -> Point {
        match *self {
            PathCommand::Move(to) | PathCommand::CubicCurve { to, .. } => to,
        }
    }
}

pub type Path = Vec<PathCommand>;
pub type SampledPath = Vec<Point>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Flatten(#[from] FlattenError),
}

/// Parse and flatten one `d` attribute.
pub fn path_to_points(d: &str, steps: usize) -> Result<SampledPath, PathError> {
    let path = parse_path(d)?;
    Ok(flatten(&path, steps)?)
}
