use std::path::Path;

use serde::{Deserialize, Serialize};
use strokepath::DEFAULT_STEPS;

use crate::{
    stroke::StrokeStyle,
    svg::{BezierSampler, DEFAULT_LABEL_ATTR},
    Error,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Steps per cubic segment.
    pub steps: usize,
    /// Group attribute holding the glyph label.
    pub label_attr: String,
    /// Fail the whole glyph on the first bad path.
    pub strict: bool,
    pub style: StrokeStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            label_attr: DEFAULT_LABEL_ATTR.to_string(),
            strict: false,
            style: StrokeStyle::default(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let file = std::fs::File::open(path.as_ref())?;
        let config: Config = serde_json::from_reader(std::io::BufReader::new(file))?;
        config.validate()
    }

    pub fn validate(self) -> Result<Self, Error> {
        if self.steps == 0 {
            return Err(strokepath::SampleError::InvalidSampleCount(self.steps).into());
        }
        Ok(self)
    }

    pub fn sampler(&self) -> BezierSampler {
        BezierSampler { steps: self.steps }
    }
}
