//! Turns glyph svg files into ink drawings.
//!
//! The svg parser events go through a chain of [`pipe::Pipe`] stages:
//! [`svg::GlyphReader`] extracts size, label and path data,
//! [`svg::CommandParser`] and a [`svg::PathSampler`] flatten every path
//! with [`strokepath`], [`glyph::GlyphCollector`] assembles the glyph and
//! [`stroke::StrokeBuilder`] dresses it up as a [`stroke::Drawing`].

#[macro_use]
extern crate tracing;

use std::io::Write;

pub mod config;
pub mod glyph;
pub mod pipe;
pub mod ser;
pub mod stroke;
pub mod svg;

use strokepath::{PathError, SampleError};

pub use crate::config::Config;
use crate::{
    glyph::{Glyph, GlyphCollector},
    pipe::{CloneSplit, ConsumeLeft, Pipe, Producer, TryCollector},
    ser::{DrawingFormat, WriteDrawings},
    stroke::{Drawing, StrokeBuilder},
    svg::{CommandParser, GlyphReader, PathSampler},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    FlexSerialize(#[from] flexbuffers::SerializationError),
    #[error(transparent)]
    FlexDeserialize(#[from] flexbuffers::DeserializationError),
    #[error("malformed svg: {0}")]
    Svg(#[from] ::svg::parser::Error),
    #[error(transparent)]
    Sample(#[from] SampleError),
    #[error("path {index}: {source}")]
    Path { index: usize, source: PathError },
    #[error("document has no svg element")]
    EmptyDocument,
}

/// Reads the first glyph of an in-memory svg document.
pub fn read_glyph<S>(content: &str, config: &Config, sampler: S) -> Result<Glyph<S::Sample>, Error>
where
    S: PathSampler,
{
    let mut pipes = ::svg::read(content)?.feed(
        GlyphReader::new(config.label_attr.as_str())
            .pipe(CommandParser)
            .pipe(sampler)
            .pipe(GlyphCollector::new().strict(config.strict)),
    );
    pipes.produce().ok_or(Error::EmptyDocument)?
}

/// Converts the svg file at `path` and writes the resulting drawings to `output`.
///
/// Drawings are written before the emptiness check, pass a buffer when a
/// half written output matters.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display(), ?format))]
pub fn svg2drawings(
    path: impl AsRef<std::path::Path>,
    output: impl Write,
    format: DrawingFormat,
    config: &Config,
) -> Result<Vec<Drawing>, Error> {
    let mut buff = String::with_capacity(4096);

    let mut pipes = ::svg::open(path.as_ref(), &mut buff)?
        .feed(
            GlyphReader::new(config.label_attr.as_str())
                .pipe(CommandParser)
                .pipe(config.sampler())
                .pipe(GlyphCollector::new().strict(config.strict))
                .pipe(StrokeBuilder {
                    style: config.style,
                }),
        )
        .producer()
        .feed(
            TryCollector::new()
                .pipe(CloneSplit::new())
                .pipe(ConsumeLeft::new(WriteDrawings::new(output, format))),
        );

    let drawings: Vec<Drawing> = pipes.produce().ok_or(Error::EmptyDocument)??;
    if drawings.is_empty() {
        return Err(Error::EmptyDocument);
    }
    Ok(drawings)
}
