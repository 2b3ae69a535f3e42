use std::{io::Write, path::Path};

use serde::{Deserialize, Serialize};

use crate::{stroke::Drawing, Error};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DrawingFormat {
    #[default]
    Json,
    /// FlexBuffers binary container.
    Flex,
}

impl DrawingFormat {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some("json") => DrawingFormat::Json,
            _ => DrawingFormat::Flex,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DrawingFormat::Json => "json",
            DrawingFormat::Flex => "flex",
        }
    }
}

pub fn write_drawings(
    writer: &mut impl Write,
    drawings: &[Drawing],
    format: DrawingFormat,
) -> Result<(), Error> {
    match format {
        DrawingFormat::Json => serde_json::to_writer_pretty(&mut *writer, drawings)?,
        DrawingFormat::Flex => {
            let mut s = flexbuffers::FlexbufferSerializer::new();
            drawings.serialize(&mut s)?;
            writer.write_all(s.view())?;
        }
    }
    Ok(writer.flush()?)
}

pub fn read_drawings(bytes: &[u8], format: DrawingFormat) -> Result<Vec<Drawing>, Error> {
    Ok(match format {
        DrawingFormat::Json => serde_json::from_slice(bytes)?,
        DrawingFormat::Flex => flexbuffers::from_slice(bytes)?,
    })
}

/// Sink writing every collection of drawings it receives.
#[derive(Debug)]
pub struct WriteDrawings<W> {
    writer: W,
    format: DrawingFormat,
}

impl<W> WriteDrawings<W> {
    pub fn new(writer: W, format: DrawingFormat) -> Self {
        Self { writer, format }
    }
}

impl<W: Write> crate::pipe::Pipe for WriteDrawings<W> {
    type Input = Vec<Drawing>;
    type Output = ();
    type Error = Error;

    fn process(&mut self, input: Self::Input) -> Result<Option<Self::Output>, Self::Error> {
        info!("writing {} drawings as {:?}", input.len(), self.format);
        write_drawings(&mut self.writer, &input, self.format)?;
        Ok(Some(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        glyph::Size,
        stroke::{Ink, Stroke, StrokePoint},
    };
    use pretty_assertions::assert_eq;

    fn drawings() -> Vec<Drawing> {
        let point = StrokePoint {
            x: 11.0,
            y: 54.25,
            time_offset: 0.0,
            size: Size {
                width: 4.0,
                height: 4.0,
            },
            opacity: 1.0,
            force: 1.0,
            azimuth: 0.8,
            altitude: 0.8,
        };
        vec![Drawing {
            label: Some("一".to_string()),
            size: Size {
                width: 109.0,
                height: 109.0,
            },
            strokes: vec![Stroke {
                ink: Ink::default(),
                points: vec![point, StrokePoint { x: 25.04, ..point }],
            }],
        }]
    }

    #[test]
    fn decodes_what_it_writes() {
        for format in [DrawingFormat::Json, DrawingFormat::Flex] {
            let mut bytes = vec![];
            write_drawings(&mut bytes, &drawings(), format).unwrap();
            assert_eq!(read_drawings(&bytes, format).unwrap(), drawings());
        }
    }

    #[test]
    fn json_layout() {
        let mut bytes = vec![];
        write_drawings(&mut bytes, &drawings(), DrawingFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let stroke = &value[0]["strokes"][0];
        assert!(value[0]["label"] == "一");
        assert!(stroke["ink"]["color"] == "#00ff00");
        assert!(stroke["ink"]["tool"] == "marker");
        assert!(stroke["points"][1]["x"] == 25.04);
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(DrawingFormat::from_path("out/05f37.json"), DrawingFormat::Json);
        assert_eq!(DrawingFormat::from_path("out/05f37.flex"), DrawingFormat::Flex);
        assert_eq!(DrawingFormat::Flex.extension(), "flex");
    }
}
