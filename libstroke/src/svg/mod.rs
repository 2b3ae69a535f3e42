mod reader;
mod sampler;
pub mod parse;

pub use reader::{CommandParser, GlyphReader, DEFAULT_LABEL_ATTR};
pub use sampler::{BezierSampler, IdSampler, PathSampler};

use crate::glyph::Size;

/// What the reader extracted from one svg element.
#[derive(Debug, Clone, PartialEq)]
pub enum GlyphEvent<P> {
    Start(Size),
    Label(String),
    Path(P),
    End,
    NotSupported,
}

impl<P> GlyphEvent<P> {
    /// Maps the path payload, every other event passes through.
    pub fn map_path<Q>(self, f: impl FnOnce(P) -> Q) -> GlyphEvent<Q> {
        match self {
            GlyphEvent::Start(size) => GlyphEvent::Start(size),
            GlyphEvent::Label(label) => GlyphEvent::Label(label),
            GlyphEvent::Path(path) => GlyphEvent::Path(f(path)),
            GlyphEvent::End => GlyphEvent::End,
            GlyphEvent::NotSupported => GlyphEvent::NotSupported,
        }
    }
}
