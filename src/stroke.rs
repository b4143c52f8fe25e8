// Copyright 2025 the progress_ring Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke cap styles.

use core::{fmt, str::FromStr};

/// Defines the shape to be drawn at the ends of a stroke.
///
/// The string forms are the SVG `stroke-linecap` keywords.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LineCap {
    /// Flat cap.
    Butt,
    /// Rounded cap with radius equal to half the stroke width.
    #[default]
    Round,
    /// Square cap with dimensions equal to half the stroke width.
    Square,
}

impl LineCap {
    /// The SVG keyword for this cap.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineCap {
    type Err = ParseLineCapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "butt" => Ok(Self::Butt),
            "round" => Ok(Self::Round),
            "square" => Ok(Self::Square),
            _ => Err(ParseLineCapError(())),
        }
    }
}

/// The error returned when a string is not one of `butt`, `round` or `square`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseLineCapError(());

impl fmt::Display for ParseLineCapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of \"butt\", \"round\" or \"square\"")
    }
}

impl core::error::Error for ParseLineCapError {}

#[cfg(test)]
mod tests {
    use super::LineCap;

    #[test]
    fn parse_keywords() {
        assert_eq!("butt".parse(), Ok(LineCap::Butt));
        assert_eq!("round".parse(), Ok(LineCap::Round));
        assert_eq!("square".parse(), Ok(LineCap::Square));
        assert!("Round".parse::<LineCap>().is_err());
        assert!("".parse::<LineCap>().is_err());
    }

    #[test]
    fn display_roundtrips() {
        for cap in [LineCap::Butt, LineCap::Round, LineCap::Square] {
            assert_eq!(cap.to_string().parse(), Ok(cap));
        }
        assert_eq!(LineCap::default(), LineCap::Round);
    }

    #[test]
    fn error_message() {
        let err = "bevel".parse::<LineCap>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected one of \"butt\", \"round\" or \"square\""
        );
    }
}
