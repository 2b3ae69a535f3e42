use serde::{Deserialize, Serialize};
use strokepath::PathError;

use crate::{pipe::Pipe, svg::GlyphEvent, Error};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// A path that could not be turned into a sample, `index` counts every
/// path of the glyph in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct PathFailure {
    pub index: usize,
    pub error: PathError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Glyph<P> {
    pub label: Option<String>,
    pub size: Size,
    pub paths: Vec<P>,
    pub failures: Vec<PathFailure>,
}

impl<P> Glyph<P> {
    pub fn new(size: Size) -> Self {
        Self {
            label: None,
            size,
            paths: vec![],
            failures: vec![],
        }
    }
}

/// Assembles the events between `<svg>` and `</svg>` into a [`Glyph`].
///
/// Failed paths are logged and kept aside in [`Glyph::failures`] so one bad
/// outline doesn't lose the rest of the glyph, unless `strict` is set.
#[derive(Debug)]
pub struct GlyphCollector<S> {
    strict: bool,
    depth: usize,
    next_index: usize,
    current: Option<Glyph<S>>,
}

impl<S> GlyphCollector<S> {
    pub fn new() -> Self {
        Self {
            strict: false,
            depth: 0,
            next_index: 0,
            current: None,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl<S> Default for GlyphCollector<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Pipe for GlyphCollector<S> {
    type Input = GlyphEvent<Result<S, PathError>>;
    type Output = Glyph<S>;
    type Error = Error;

    fn process(&mut self, input: Self::Input) -> Result<Option<Self::Output>, Self::Error> {
        match input {
            GlyphEvent::Start(size) => {
                self.depth += 1;
                if self.depth == 1 {
                    self.next_index = 0;
                    self.current = Some(Glyph::new(size));
                } else {
                    debug!("ignoring nested svg element");
                }
                Ok(None)
            }
            GlyphEvent::End => {
                self.depth = self.depth.saturating_sub(1);
                if self.depth > 0 {
                    return Ok(None);
                }
                let glyph = self.current.take();
                if let Some(glyph) = &glyph {
                    info!(
                        label = glyph.label.as_deref().unwrap_or_default(),
                        paths = glyph.paths.len(),
                        failures = glyph.failures.len(),
                        "glyph collected"
                    );
                }
                Ok(glyph)
            }
            GlyphEvent::Label(label) => {
                if let Some(glyph) = &mut self.current {
                    glyph.label.get_or_insert(label);
                }
                Ok(None)
            }
            GlyphEvent::Path(sample) => {
                let Some(glyph) = &mut self.current else {
                    debug!("ignoring path outside of an svg element");
                    return Ok(None);
                };
                let index = self.next_index;
                self.next_index += 1;
                match sample {
                    Ok(sample) => glyph.paths.push(sample),
                    Err(source) if self.strict => return Err(Error::Path { index, source }),
                    Err(error) => {
                        warn!(index, "skipping path: {error}");
                        glyph.failures.push(PathFailure { index, error });
                    }
                }
                Ok(None)
            }
            GlyphEvent::NotSupported => Ok(None),
        }
    }
}
