//! Sampled glyphs as ink strokes.
//!
//! Presentation values (ink, point size, force, tilt, timing) are constants
//! taken from a [`StrokeStyle`]; nothing here simulates a real pen.

use lyon_geom::{vector, Transform};
use serde::{Deserialize, Serialize};
use strokepath::{Point, SampledPath};

use crate::{
    glyph::{Glyph, Size},
    pipe::Pipe,
    svg::parse::Rgb,
    Error,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InkTool {
    Pen,
    Pencil,
    #[default]
    Marker,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ink {
    pub tool: InkTool,
    pub color: Rgb,
}

impl Default for Ink {
    fn default() -> Self {
        Self {
            tool: InkTool::Marker,
            color: Rgb::GREEN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    pub ink: Ink,
    pub point_size: Size,
    pub opacity: f64,
    pub force: f64,
    pub azimuth: f64,
    pub altitude: f64,
    /// Seconds between two consecutive points of a stroke.
    pub time_step: f64,
    pub scale: f64,
    /// Mirror y about the glyph height, for canvases with a bottom-left origin.
    pub flip_y: bool,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            ink: Ink::default(),
            point_size: Size {
                width: 4.0,
                height: 4.0,
            },
            opacity: 1.0,
            force: 1.0,
            azimuth: 0.8,
            altitude: 0.8,
            time_step: 0.0,
            scale: 1.0,
            flip_y: false,
        }
    }
}

impl StrokeStyle {
    /// Maps glyph coordinates onto the drawing canvas.
    pub fn transform(&self, glyph: Size) -> Transform<f64> {
        let scale = Transform::scale(self.scale, self.scale);
        if self.flip_y {
            scale
                .then_scale(1.0, -1.0)
                .then_translate(vector(0.0, glyph.height * self.scale))
        } else {
            scale
        }
    }

    fn point(&self, index: usize, location: Point) -> StrokePoint {
        StrokePoint {
            x: location.x,
            y: location.y,
            time_offset: index as f64 * self.time_step,
            size: self.point_size,
            opacity: self.opacity,
            force: self.force,
            azimuth: self.azimuth,
            altitude: self.altitude,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokePoint {
    pub x: f64,
    pub y: f64,
    pub time_offset: f64,
    pub size: Size,
    pub opacity: f64,
    pub force: f64,
    pub azimuth: f64,
    pub altitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub ink: Ink,
    pub points: Vec<StrokePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub label: Option<String>,
    pub size: Size,
    pub strokes: Vec<Stroke>,
}

impl Drawing {
    pub fn from_glyph(glyph: &Glyph<SampledPath>, style: &StrokeStyle) -> Self {
        let transform = style.transform(glyph.size);
        let strokes = glyph
            .paths
            .iter()
            .map(|path| Stroke {
                ink: style.ink,
                points: path
                    .iter()
                    .enumerate()
                    .map(|(i, p)| style.point(i, transform.transform_point(*p)))
                    .collect(),
            })
            .collect();
        Drawing {
            label: glyph.label.clone(),
            size: Size {
                width: glyph.size.width * style.scale,
                height: glyph.size.height * style.scale,
            },
            strokes,
        }
    }
}

/// One drawing per glyph, one stroke per sampled path.
#[derive(Debug, Default)]
pub struct StrokeBuilder {
    pub style: StrokeStyle,
}

impl Pipe for StrokeBuilder {
    type Input = Glyph<SampledPath>;
    type Output = Drawing;
    type Error = Error;

    fn process(&mut self, glyph: Self::Input) -> Result<Option<Self::Output>, Self::Error> {
        let drawing = Drawing::from_glyph(&glyph, &self.style);
        debug!(strokes = drawing.strokes.len(), "built drawing");
        Ok(Some(drawing))
    }
}
