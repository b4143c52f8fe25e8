// Copyright 2025 the progress_ring Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circular arcs and their SVG path data.

use alloc::string::String;
use core::fmt::{self, Write};

use arrayvec::ArrayVec;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

use crate::Point;

/// Factor applied to the end angle of an arc, so that a full 360° sweep
/// does not end up with coincident endpoints.
///
/// SVG arcs whose endpoints coincide are not drawn at all.
pub const FULL_SWEEP_EPSILON: f64 = 0.9999;

/// Map an angle on a circle to a point.
///
/// Angles are in degrees, with 0° at the top of the circle (12 o'clock) and
/// increasing clockwise in Y-down screen coordinates.
///
/// # Examples
///
/// ```
/// use progress_ring::{polar_to_cartesian, Point};
///
/// let top = polar_to_cartesian(Point::new(50.0, 50.0), 45.0, 0.0);
/// assert!(top.is_near(Point::new(50.0, 5.0), 1e-9));
/// ```
#[inline]
pub fn polar_to_cartesian(center: Point, radius: f64, angle_degrees: f64) -> Point {
    let (s, c) = (angle_degrees - 90.0).to_radians().sin_cos();
    Point::new(center.x + radius * c, center.y + radius * s)
}

/// Build the arc path between two angles on a circle.
///
/// The path starts at the point for `end_angle` (scaled by
/// [`FULL_SWEEP_EPSILON`]) and ends at the point for `start_angle`. The
/// large-arc flag is set when the span exceeds 180°. The sweep flag is
/// always 0.
///
/// A zero span gives a [degenerate] path, which draws nothing.
///
/// [degenerate]: ArcPath::is_degenerate
pub fn circle_path(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> ArcPath {
    ArcPath {
        start: polar_to_cartesian(center, radius, end_angle * FULL_SWEEP_EPSILON),
        end: polar_to_cartesian(center, radius, start_angle),
        radius,
        large_arc: end_angle - start_angle > 180.0,
        sweep: false,
    }
}

/// A single circular arc, as an SVG `M … A …` path.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcPath {
    /// The point the path moves to first.
    pub start: Point,
    /// The point the arc ends at.
    pub end: Point,
    /// The circle radius.
    pub radius: f64,
    /// The SVG large-arc flag.
    pub large_arc: bool,
    /// The SVG sweep flag.
    pub sweep: bool,
}

impl ArcPath {
    /// Whether the endpoints coincide, in which case renderers draw nothing.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start.is_near(self.end, 1e-9)
    }

    /// Convert the arc to an SVG path string.
    ///
    /// Tokens are separated by single spaces, giving
    /// `M sx sy A r r 0 large sweep ex ey`.
    ///
    /// # Examples
    ///
    /// ```
    /// use progress_ring::{ArcPath, Point};
    ///
    /// let arc = ArcPath {
    ///     start: Point::new(95.0, 50.0),
    ///     end: Point::new(50.0, 5.0),
    ///     radius: 45.0,
    ///     large_arc: false,
    ///     sweep: false,
    /// };
    /// assert_eq!(arc.to_svg(), "M 95 50 A 45 45 0 0 0 50 5");
    /// ```
    pub fn to_svg(&self) -> String {
        let mut result = String::new();
        // Writing into a `String` only fails on allocation failure, which aborts.
        let _ = self.write_svg(&mut result);
        result
    }

    /// Write the SVG path string into `w`.
    pub fn write_svg(&self, w: &mut impl Write) -> fmt::Result {
        write!(
            w,
            "M {} {} A {} {} 0 {} {} {} {}",
            self.start.x,
            self.start.y,
            self.radius,
            self.radius,
            u8::from(self.large_arc),
            u8::from(self.sweep),
            self.end.x,
            self.end.y
        )
    }

    /// Parse a single circular arc path, `M x y A r r rot large sweep x y`.
    ///
    /// Commas may stand in for whitespace. Only absolute commands are
    /// accepted, and both radii must agree. The x-axis rotation has no
    /// effect on a circle and is ignored.
    ///
    /// # Errors
    ///
    /// Returns an [`SvgParseError`] if the input is not exactly one such arc.
    pub fn from_svg(data: &str) -> Result<Self, SvgParseError> {
        let mut lexer = SvgLexer::new(data);
        lexer.expect_cmd(b'M')?;
        let start = lexer.get_number_pair()?;
        lexer.expect_cmd(b'A')?;
        let mut args = ArrayVec::<f64, 3>::new();
        for _ in 0..3 {
            args.push(lexer.get_number()?);
            lexer.opt_comma();
        }
        let large_arc = lexer.get_flag()?;
        let sweep = lexer.get_flag()?;
        let end = lexer.get_number_pair()?;
        lexer.skip_ws();
        if let Some(c) = lexer.get_byte() {
            return Err(SvgParseError::UnknownCommand(char::from(c)));
        }
        let (rx, ry) = (args[0], args[1]);
        if rx != ry {
            return Err(SvgParseError::NotCircular);
        }
        Ok(Self {
            start,
            end,
            radius: rx,
            large_arc,
            sweep,
        })
    }
}

impl fmt::Display for ArcPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_svg(f)
    }
}

/// An error which can be returned when parsing an SVG arc path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SvgParseError {
    /// A number was expected.
    Wrong,
    /// The input string ended while still expecting input.
    UnexpectedEof,
    /// Encountered an unexpected command letter or trailing input.
    UnknownCommand(char),
    /// The two arc radii differ.
    NotCircular,
}

impl fmt::Display for SvgParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wrong => write!(f, "Unable to parse a number"),
            Self::UnexpectedEof => write!(f, "Unexpected EOF"),
            Self::UnknownCommand(letter) => write!(f, "Unknown command, \"{letter}\""),
            Self::NotCircular => write!(f, "Arc radii differ"),
        }
    }
}

impl core::error::Error for SvgParseError {}

struct SvgLexer<'a> {
    data: &'a str,
    ix: usize,
}

impl<'a> SvgLexer<'a> {
    fn new(data: &'a str) -> Self {
        SvgLexer { data, ix: 0 }
    }

    fn skip_ws(&mut self) {
        while let Some(&c) = self.data.as_bytes().get(self.ix) {
            if !(c == b' ' || c == 9 || c == 10 || c == 12 || c == 13) {
                break;
            }
            self.ix += 1;
        }
    }

    fn expect_cmd(&mut self, cmd: u8) -> Result<(), SvgParseError> {
        self.skip_ws();
        match self.get_byte() {
            Some(c) if c == cmd => Ok(()),
            Some(c) => Err(SvgParseError::UnknownCommand(char::from(c))),
            None => Err(SvgParseError::UnexpectedEof),
        }
    }

    fn get_byte(&mut self) -> Option<u8> {
        self.data.as_bytes().get(self.ix).map(|&c| {
            self.ix += 1;
            c
        })
    }

    fn unget(&mut self) {
        self.ix -= 1;
    }

    fn get_number(&mut self) -> Result<f64, SvgParseError> {
        self.skip_ws();
        let start = self.ix;
        let c = self.get_byte().ok_or(SvgParseError::UnexpectedEof)?;
        if !(c == b'-' || c == b'+') {
            self.unget();
        }
        let mut digit_count = 0;
        let mut seen_period = false;
        let mut seen_exp = false;
        while let Some(c) = self.get_byte() {
            if c.is_ascii_digit() {
                digit_count += 1;
            } else if c == b'.' && !seen_period && !seen_exp {
                seen_period = true;
            } else if (c == b'e' || c == b'E') && digit_count > 0 && !seen_exp {
                seen_exp = true;
                if let Some(sign) = self.get_byte() {
                    if !(sign == b'-' || sign == b'+') {
                        self.unget();
                    }
                }
            } else {
                self.unget();
                break;
            }
        }
        if digit_count > 0 {
            self.data[start..self.ix]
                .parse()
                .map_err(|_| SvgParseError::Wrong)
        } else {
            Err(SvgParseError::Wrong)
        }
    }

    fn get_number_pair(&mut self) -> Result<Point, SvgParseError> {
        let x = self.get_number()?;
        self.opt_comma();
        let y = self.get_number()?;
        self.opt_comma();
        Ok(Point::new(x, y))
    }

    fn get_flag(&mut self) -> Result<bool, SvgParseError> {
        self.skip_ws();
        let flag = match self.get_byte() {
            Some(b'0') => false,
            Some(b'1') => true,
            Some(_) => return Err(SvgParseError::Wrong),
            None => return Err(SvgParseError::UnexpectedEof),
        };
        self.opt_comma();
        Ok(flag)
    }

    fn opt_comma(&mut self) {
        self.skip_ws();
        if let Some(c) = self.get_byte() {
            if c != b',' {
                self.unget();
            }
        }
    }
}
