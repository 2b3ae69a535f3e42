use strokepath::{flatten, Path, PathError, SampledPath, DEFAULT_STEPS};

use crate::{svg::GlyphEvent, Error};

pub trait PathSampler {
    type Sample;

    fn sample(&self, path: Path) -> Result<Self::Sample, PathError>;

    fn steps(&self) -> Option<usize> {
        None
    }
}

impl<S> crate::pipe::Pipe for S
where
    S: PathSampler,
{
    type Input = GlyphEvent<Result<Path, PathError>>;
    type Output = GlyphEvent<Result<S::Sample, PathError>>;
    type Error = Error;

    #[tracing::instrument(skip_all)]
    fn process(&mut self, input: Self::Input) -> Result<Option<Self::Output>, Self::Error> {
        Ok(Some(input.map_path(|path| -> Result<S::Sample, PathError> {
            let path = path?;
            let commands = path.len();
            let samples = self.sample(path);
            trace!(commands, steps = self.steps(), ok = samples.is_ok());
            samples
        })))
    }
}

/// Keeps the parsed commands.
#[derive(Debug, Default)]
pub struct IdSampler;

impl PathSampler for IdSampler {
    type Sample = Path;

    fn sample(&self, path: Path) -> Result<Self::Sample, PathError> {
        Ok(path)
    }
}

/// Flattens every path, each cubic segment into `steps + 1` points.
#[derive(Debug, Clone, Copy)]
pub struct BezierSampler {
    pub steps: usize,
}

impl Default for BezierSampler {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
        }
    }
}

impl PathSampler for BezierSampler {
    type Sample = SampledPath;

    fn sample(&self, path: Path) -> Result<Self::Sample, PathError> {
        Ok(flatten(&path, self.steps)?)
    }

    fn steps(&self) -> Option<usize> {
        Some(self.steps)
    }
}
