use nom::{
    bytes::complete::take_while,
    character::complete::anychar,
    combinator::{map_res, verify},
    number::complete::recognize_float,
    IResult,
};

use crate::{Path, PathCommand, Point};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid operand `{token}` at offset {offset}")]
    InvalidOperand { token: String, offset: usize },
    #[error("unsupported path command `{command}` at offset {offset}")]
    UnsupportedCommand { command: char, offset: usize },
    #[error("expected a path command, found `{token}` at offset {offset}")]
    UnexpectedToken { token: String, offset: usize },
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

fn separators(s: &str) -> IResult<&str, &str> {
    take_while(is_separator)(s)
}

/// Text of the token starting at `s`, up to the next separator.
fn token(s: &str) -> &str {
    let end = s.find(is_separator).unwrap_or(s.len());
    &s[..end]
}

fn readf64(s: &str) -> IResult<&str, f64> {
    verify(map_res(recognize_float, str::parse::<f64>), |n: &f64| n.is_finite())(s)
}

/// Parses one command letter and its operands.
struct Operands<'a> {
    input: &'a str,
}

impl<'a> Operands<'a> {
    fn offset(&self, s: &str) -> usize {
        self.input.len() - s.len()
    }

    /// Reads one number, errors point at the start of its token.
    fn number(&self, s: &'a str) -> Result<(&'a str, f64), ParseError> {
        let (at, _) = separators(s).unwrap_or((s, ""));
        readf64(at).map_err(|_| ParseError::InvalidOperand {
            token: token(at).to_string(),
            offset: self.offset(at),
        })
    }

    fn point(&self, s: &'a str) -> Result<(&'a str, Point), ParseError> {
        let (s, x) = self.number(s)?;
        let (s, y) = self.number(s)?;
        Ok((s, Point::new(x, y)))
    }

    fn cubic(&self, s: &'a str) -> Result<(&'a str, PathCommand), ParseError> {
        let (s, ctrl1) = self.point(s)?;
        let (s, ctrl2) = self.point(s)?;
        let (s, to) = self.point(s)?;
        Ok((s, PathCommand::CubicCurve { ctrl1, ctrl2, to }))
    }

    fn command(&self, s: &'a str) -> Result<(&'a str, PathCommand), ParseError> {
        let offset = self.offset(s);
        let (s, letter) = anychar::<_, nom::error::Error<&str>>(s).map_err(|_| {
            ParseError::UnexpectedToken {
                token: String::new(),
                offset,
            }
        })?;
        match letter {
            'M' => self.point(s).map(|(s, to)| (s, PathCommand::Move(to))),
            'C' => self.cubic(s),
            c if c.is_alphabetic() => {
                Err(ParseError::UnsupportedCommand { command: c, offset })
            }
            _ => Err(ParseError::UnexpectedToken {
                token: token(&self.input[offset..]).to_string(),
                offset,
            }),
        }
    }
}

/// Parses absolute `M` and `C` commands of an svg `d` attribute.
///
/// Coordinates are kept verbatim. Anything outside of that subset is an
/// error and no partial path is returned.
pub fn parse_path(d: &str) -> Result<Path, ParseError> {
    let operands = Operands { input: d };
    let mut path = Path::new();

    let (mut s, _) = separators(d).unwrap_or((d, ""));
    while !s.is_empty() {
        let (rest, command) = operands.command(s)?;
        path.push(command);
        (s, _) = separators(rest).unwrap_or((rest, ""));
    }
    Ok(path)
}
