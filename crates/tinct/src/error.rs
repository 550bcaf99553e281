//! Utility module with tinct's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

use crate::Float;

/// An out-of-range error.
///
/// This error indicates a numeric value that does not fit into the bounds of
/// a [`Bounded`](crate::Bounded) quantity, i.e., `0..=1` for a
/// [`Fraction`](crate::Fraction) and `0..=100` for a
/// [`Percentage`](crate::Percentage). Not-a-number and infinite values never
/// fit.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{value} does not fit into range {}..={}", .expected.start(), .expected.end())]
pub struct OutOfRangeError {
    pub value: Float,
    pub expected: std::ops::RangeInclusive<Float>,
}

impl OutOfRangeError {
    /// Create a new out-of-range error.
    pub fn new(value: Float, expected: std::ops::RangeInclusive<Float>) -> Self {
        Self { value, expected }
    }
}

#[cfg(feature = "pyffi")]
impl From<OutOfRangeError> for PyErr {
    fn from(value: OutOfRangeError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An erroneous color or angle format.
///
/// The variants carry no state, so that they remain cheap to compare. The
/// string that failed to parse is with the caller anyway.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A color format that is neither hashed hexadecimal, a known color
    /// function, nor a bare name. For example, `lab(1 2 3)` uses an unknown
    /// function.
    #[error("color format should start with `#`, `rgb(`, `hsv(`, `hsl(`, `hwb(`, or `cmyk(`")]
    UnknownFormat,

    /// A hashed hexadecimal color with an unexpected number of characters.
    /// For example, `#00` is missing a hexadecimal digit.
    #[error("hashed color format should have 3, 4, 6, or 8 hexadecimal digits")]
    UnexpectedCharacters,

    /// A hashed hexadecimal color with a character that is not a hexadecimal
    /// digit. For example, `#efg` has a malformed third digit.
    #[error("hashed color format should contain hexadecimal digits only")]
    MalformedHex,

    /// A color function without the closing parenthesis. For example,
    /// `rgb(1 2 3` is missing the closing parenthesis.
    #[error("color format should include a closing parenthesis but has none")]
    NoClosingParenthesis,

    /// A color function that is missing a coordinate. For example,
    /// `hsl(0 50%)` is missing the lightness.
    #[error("color format is missing a coordinate")]
    MissingCoordinate,

    /// A color function with too many coordinates. For example,
    /// `rgb(1, 2, 3, 4, 5)` has one coordinate too many even after counting
    /// the alpha channel.
    #[error("color format has more coordinates than its color space")]
    TooManyCoordinates,

    /// A coordinate that is not a finite floating point number. For example,
    /// `rgb(1 2..0 3)` has a malformed second coordinate.
    #[error("color format coordinates should be finite numbers but are not")]
    MalformedNumber,

    /// A coordinate that must be a percentage but is not. For example,
    /// `hsl(0, 0, 0)` has a saturation and lightness without `%`.
    #[error("color format coordinate should be a percentage but is not")]
    ExpectedPercentage,

    /// An angle with an unknown or missing unit. For example, `hsl(1rev 0%
    /// 0%)` uses an unknown unit.
    #[error("angle should have unit `deg`, `grad`, `rad`, or `turn`")]
    UnknownAngleUnit,

    /// An alpha channel in the wrong place. For example, `rgb(1, 2, 3 / 0.5)`
    /// mixes legacy commas with the modern slash.
    #[error("alpha should follow `/` in modern or `,` in legacy syntax")]
    MisplacedAlpha,
}

#[cfg(feature = "pyffi")]
impl From<FormatError> for PyErr {
    fn from(value: FormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An error while parsing a color string.
///
/// A string that looks like a color name but is not a known named color
/// produces [`ParseColorError::UnknownName`]. Every other failure is a
/// [`FormatError`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("`{0}` is not a known color name")]
    UnknownName(String),
}

impl ParseColorError {
    /// Determine whether this error is a format error.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// Determine whether this error is an unknown name.
    pub fn is_unknown_name(&self) -> bool {
        matches!(self, Self::UnknownName(_))
    }
}

#[cfg(feature = "pyffi")]
impl From<ParseColorError> for PyErr {
    fn from(value: ParseColorError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
