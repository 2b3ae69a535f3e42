use lyon_geom::CubicBezierSegment;
use tracing::trace;

use crate::{bezier::sample_cubic, PathCommand, Point, SampleError, SampledPath};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FlattenError {
    #[error("curve at command {index} has no starting point, the path must begin with a move")]
    MissingInitialMove { index: usize },
    #[error(transparent)]
    Sample(#[from] SampleError),
}

/// Replays `commands` with an explicit pen position and samples every curve
/// with `steps` steps.
///
/// Moves contribute their own point, curves contribute `steps + 1` points
/// starting at the pen position, so consecutive curves repeat the shared
/// anchor.
pub fn flatten(commands: &[PathCommand], steps: usize) -> Result<SampledPath, FlattenError> {
    if steps == 0 {
        return Err(SampleError::InvalidSampleCount(steps).into());
    }

    let curves = commands
        .iter()
        .filter(|c| matches!(c, PathCommand::CubicCurve { .. }))
        .count();
    // no reservation when the point count overflows
    let capacity = steps
        .checked_add(1)
        .and_then(|per_curve| per_curve.checked_mul(curves))
        .and_then(|sampled| sampled.checked_add(commands.len() - curves))
        .unwrap_or(0);

    let (_, points) = commands.iter().enumerate().try_fold(
        (None::<Point>, SampledPath::with_capacity(capacity)),
        |(pen, mut points), (index, command)| {
            match *command {
                PathCommand::Move(to) => points.push(to),
                PathCommand::CubicCurve { ctrl1, ctrl2, to } => {
                    let from = pen.ok_or(FlattenError::MissingInitialMove { index })?;
                    let segment = CubicBezierSegment {
                        from,
                        ctrl1,
                        ctrl2,
                        to,
                    };
                    points.extend(sample_cubic(&segment, steps)?);
                }
            }
            Ok::<_, FlattenError>((Some(command.to()), points))
        },
    )?;

    trace!(commands = commands.len(), points = points.len(), "flattened path");
    Ok(points)
}
