//! Attribute values: colours and lengths.

use std::{fmt, str::FromStr};

use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, take_while_m_n},
    character::complete::{char, space0},
    combinator::{all_consuming, map_res},
    number::complete::recognize_float,
    sequence::{delimited, tuple},
    IResult,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
}

pub fn parse_rgb(s: &str) -> IResult<&str, Rgb> {
    let (s, _) = tag("rgb")(s)?;
    let (s, content) = delimited(char('('), is_not(")"), char(')'))(s)?;
    let (_, (r, _, g, _, b)) =
        all_consuming(tuple((channel, char(','), channel, char(','), channel)))(content)?;
    Ok((s, Rgb { r, g, b }))
}

fn channel(s: &str) -> IResult<&str, u8> {
    delimited(space0, nom::character::complete::u8, space0)(s)
}

fn hex_primary(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()), |h| {
        u8::from_str_radix(h, 16)
    })(input)
}

pub fn parse_hex_rgb(input: &str) -> IResult<&str, Rgb> {
    let (input, _) = tag("#")(input)?;
    let (input, (r, g, b)) = tuple((hex_primary, hex_primary, hex_primary))(input)?;
    Ok((input, Rgb { r, g, b }))
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid colour `{0}`, expected `#rrggbb` or `rgb(r,g,b)`")]
pub struct ColorError(pub String);

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_consuming(delimited(space0, alt((parse_hex_rgb, parse_rgb)), space0))(s)
            .map(|(_, rgb)| rgb)
            .map_err(|_| ColorError(s.to_string()))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_string()
    }
}

/// `width`/`height` attribute as a plain number, `None` for anything else.
pub fn parse_length(s: &str) -> Option<f64> {
    let parsed: IResult<&str, f64> = all_consuming(map_res(recognize_float, str::parse::<f64>))(s);
    parsed.ok().map(|(_, n)| n)
}
