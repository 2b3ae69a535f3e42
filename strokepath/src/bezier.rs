use lyon_geom::CubicBezierSegment;

use crate::{Point, SampledPath};

/// Lowest step count that still draws a smooth stroke.
pub const DEFAULT_STEPS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SampleError {
    #[error("invalid sample count {0}, at least one step is required")]
    InvalidSampleCount(usize),
}

/// Cubic bernstein basis at `u`.
pub fn eval_cubic(segment: &CubicBezierSegment<f64>, u: f64) -> Point {
    let one_u = 1.0 - u;
    let b0 = one_u * one_u * one_u;
    let b1 = 3.0 * one_u * one_u * u;
    let b2 = 3.0 * one_u * u * u;
    let b3 = u * u * u;

    let CubicBezierSegment {
        from,
        ctrl1,
        ctrl2,
        to,
    } = *segment;
    Point::new(
        b0 * from.x + b1 * ctrl1.x + b2 * ctrl2.x + b3 * to.x,
        b0 * from.y + b1 * ctrl1.y + b2 * ctrl2.y + b3 * to.y,
    )
}

/// Samples `steps + 1` parameter-uniform points, both anchors included.
pub fn sample_cubic(
    segment: &CubicBezierSegment<f64>,
    steps: usize,
) -> Result<SampledPath, SampleError> {
    if steps == 0 {
        return Err(SampleError::InvalidSampleCount(steps));
    }
    Ok((0..=steps)
        .map(|i| eval_cubic(segment, i as f64 / steps as f64))
        .collect())
}
