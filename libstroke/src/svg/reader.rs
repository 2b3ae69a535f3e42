use std::ops::Deref;

use strokepath::{parse_path, Path, PathError};
use svg::{node::element::tag::Type, parser::Event};

use crate::{
    glyph::Size,
    pipe::Pipe,
    svg::{parse::parse_length, GlyphEvent},
    Error,
};

/// Group attribute naming the character in KanjiVG files.
pub const DEFAULT_LABEL_ATTR: &str = "kvg:element";

/// Extracts glyph size, label and path data from svg parser events.
pub struct GlyphReader<'a> {
    label_attr: String,
    label_seen: bool,
    _s: std::marker::PhantomData<&'a ()>,
}

impl<'a> GlyphReader<'a> {
    pub fn new(label_attr: impl Into<String>) -> Self {
        Self {
            label_attr: label_attr.into(),
            label_seen: false,
            _s: std::marker::PhantomData,
        }
    }
}

impl<'a> Default for GlyphReader<'a> {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_ATTR)
    }
}

impl<'a> Pipe for GlyphReader<'a> {
    type Input = Event<'a>;
    type Output = GlyphEvent<String>;
    type Error = Error;

    fn process(&mut self, event: Self::Input) -> Result<Option<Self::Output>, Self::Error> {
        let event = match event {
            Event::Tag("svg", Type::Start | Type::Empty, attrs) => {
                let length = |name: &str| {
                    attrs
                        .get(name)
                        .and_then(|v| parse_length(v.deref()))
                        .unwrap_or_default()
                };
                let size = Size {
                    width: length("width"),
                    height: length("height"),
                };
                debug!(width = size.width, height = size.height, "new glyph");
                self.label_seen = false;
                GlyphEvent::Start(size)
            }
            Event::Tag("svg", Type::End, _) => GlyphEvent::End,
            Event::Tag("g", Type::Start, attrs) if !self.label_seen => {
                match attrs.get(self.label_attr.as_str()) {
                    Some(label) => {
                        self.label_seen = true;
                        trace!("glyph label: {}", label.deref());
                        GlyphEvent::Label(label.to_string())
                    }
                    None => GlyphEvent::NotSupported,
                }
            }
            Event::Tag("path", _, attrs) => match attrs.get("d") {
                Some(d) => GlyphEvent::Path(d.to_string()),
                None => {
                    debug!("skipping path without data, attributes: {attrs:?}");
                    GlyphEvent::NotSupported
                }
            },
            Event::Error(err) => {
                error!(%err, "malformed svg");
                return Err(Error::Svg(err));
            }
            _ => GlyphEvent::NotSupported,
        };
        Ok(Some(event))
    }
}

/// Parses the `d` attribute of every path event.
#[derive(Debug, Default)]
pub struct CommandParser;

impl Pipe for CommandParser {
    type Input = GlyphEvent<String>;
    type Output = GlyphEvent<Result<Path, PathError>>;
    type Error = Error;

    fn process(&mut self, input: Self::Input) -> Result<Option<Self::Output>, Self::Error> {
        Ok(Some(input.map_path(|d| parse_path(&d).map_err(PathError::from))))
    }
}
