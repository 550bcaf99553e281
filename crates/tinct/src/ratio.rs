//! Bounded scalars: [`Fraction`] and [`Percentage`].
//!
//! Both types wrap a finite [`Float`] that must stay within inclusive bounds.
//! Checked construction and arithmetic fail with an [`OutOfRangeError`],
//! whereas saturating construction and arithmetic clamp to the nearest bound.
//! The shared behavior lives in the [`Bounded`] trait.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::{FormatError, OutOfRangeError};
use crate::Float;

/// A quantity bounded by an inclusive range.
/// <i class=rust-only>Rust only!</i>
///
/// Implementors provide the bounds and access to the raw value. Everything
/// else comes with default implementations.
pub trait Bounded: Copy + Sized {
    /// The lower bound.
    const MIN: Float;

    /// The upper bound.
    const MAX: Float;

    /// Wrap the value without checking it. Callers must ensure the value is
    /// within bounds.
    #[doc(hidden)]
    fn new_unchecked(value: Float) -> Self;

    /// Get the wrapped value.
    fn value(&self) -> Float;

    /// Get the bounds as a range.
    fn bounds() -> std::ops::RangeInclusive<Float> {
        Self::MIN..=Self::MAX
    }

    /// Create a new bounded quantity.
    ///
    /// This function fails if the value is not finite or falls outside the
    /// bounds.
    fn try_new(value: Float) -> Result<Self, OutOfRangeError> {
        if value.is_finite() && Self::bounds().contains(&value) {
            Ok(Self::new_unchecked(value))
        } else {
            Err(OutOfRangeError::new(value, Self::bounds()))
        }
    }

    /// Create a new bounded quantity, clamping the value to the bounds.
    /// Not-a-number becomes the lower bound.
    fn saturating(value: Float) -> Self {
        if value.is_nan() {
            Self::new_unchecked(Self::MIN)
        } else {
            Self::new_unchecked(value.clamp(Self::MIN, Self::MAX))
        }
    }

    /// Reflect this quantity within its bounds, i.e., `MAX - (value - MIN)`.
    #[must_use = "method returns a new quantity and does not mutate original value"]
    fn conjugate(&self) -> Self {
        Self::new_unchecked(Self::MAX - (self.value() - Self::MIN))
    }

    /// Add the amount, failing if the sum leaves the bounds.
    fn checked_add(&self, amount: Float) -> Result<Self, OutOfRangeError> {
        Self::try_new(self.value() + amount)
    }

    /// Subtract the amount, failing if the difference leaves the bounds.
    fn checked_sub(&self, amount: Float) -> Result<Self, OutOfRangeError> {
        Self::try_new(self.value() - amount)
    }

    /// Add the amount, clamping the sum to the bounds.
    #[must_use = "method returns a new quantity and does not mutate original value"]
    fn saturating_add(&self, amount: Float) -> Self {
        Self::saturating(self.value() + amount)
    }

    /// Subtract the amount, clamping the difference to the bounds.
    #[must_use = "method returns a new quantity and does not mutate original value"]
    fn saturating_sub(&self, amount: Float) -> Self {
        Self::saturating(self.value() - amount)
    }
}

// ====================================================================================================================

/// A fraction in unit range `0..=1`.
///
/// Fractions represent color channels, saturations, lightnesses, and opacity.
///
/// # Examples
///
/// ```
/// # use tinct::{Bounded, Fraction};
/// let quarter = Fraction::new(0.25)?;
/// assert_eq!(quarter.conjugate().value(), 0.75);
/// assert_eq!((quarter * quarter).value(), 0.0625);
/// assert!(quarter.checked_add(0.8).is_err());
/// assert_eq!(quarter.saturating_add(0.8), Fraction::ONE);
/// assert!(Fraction::new(1.5).is_err());
/// # Ok::<(), tinct::error::OutOfRangeError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "tinct"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Fraction(pub(crate) Float);

impl Fraction {
    /// The fraction 0.
    pub const ZERO: Fraction = Fraction(0.0);

    /// The fraction ½.
    pub const HALF: Fraction = Fraction(0.5);

    /// The fraction 1.
    pub const ONE: Fraction = Fraction(1.0);

    /// Convert to a percentage.
    #[inline]
    pub fn to_percentage(&self) -> Percentage {
        Percentage(self.0 * 100.0)
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Fraction {
    /// Create a new fraction, failing if the value is not in `0..=1`.
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn new(value: Float) -> Result<Self, OutOfRangeError> {
        Self::try_new(value)
    }

    /// Create a new fraction, failing if the value is not in `0..=1`.
    #[cfg(not(feature = "pyffi"))]
    pub fn new(value: Float) -> Result<Self, OutOfRangeError> {
        Self::try_new(value)
    }

    /// Get the fraction as a float.
    #[inline]
    pub fn get(&self) -> Float {
        self.0
    }

    /// Create a debug representation of this fraction. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("Fraction({})", self.0)
    }
}

impl Bounded for Fraction {
    const MIN: Float = 0.0;
    const MAX: Float = 1.0;

    #[inline]
    fn new_unchecked(value: Float) -> Self {
        Self(value)
    }

    #[inline]
    fn value(&self) -> Float {
        self.0
    }
}

impl std::ops::Mul for Fraction {
    type Output = Fraction;

    /// Multiply two fractions, which always yields another fraction.
    fn mul(self, rhs: Self) -> Self::Output {
        Fraction(self.0 * rhs.0)
    }
}

impl TryFrom<Float> for Fraction {
    type Error = OutOfRangeError;

    fn try_from(value: Float) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Percentage> for Fraction {
    fn from(value: Percentage) -> Self {
        Fraction(value.0 / 100.0)
    }
}

impl From<Fraction> for Float {
    fn from(value: Fraction) -> Self {
        value.0
    }
}

impl std::str::FromStr for Fraction {
    type Err = FormatError;

    /// Parse a fraction from either a plain number or a percentage. Values
    /// beyond the bounds saturate.
    ///
    /// ```
    /// # use tinct::Fraction;
    /// assert_eq!("0.5".parse::<Fraction>(), Ok(Fraction::HALF));
    /// assert_eq!(".5".parse::<Fraction>(), Ok(Fraction::HALF));
    /// assert_eq!("50%".parse::<Fraction>(), Ok(Fraction::HALF));
    /// assert_eq!("150%".parse::<Fraction>(), Ok(Fraction::ONE));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.ends_with('%') {
            let percentage: Percentage = s.parse()?;
            Ok(percentage.into())
        } else {
            parse_number(s).map(Self::saturating)
        }
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::core::write_rounded(self.0, f.precision().unwrap_or(3), f)
    }
}

// ====================================================================================================================

/// A percentage in range `0..=100`. <i class=rust-only>Rust only!</i>
///
/// # Examples
///
/// ```
/// # use tinct::{Bounded, Fraction, Percentage};
/// let forty = Percentage::new(40.0)?;
/// assert_eq!(forty.conjugate().value(), 60.0);
/// assert_eq!(Fraction::from(forty).value(), 0.4);
/// assert_eq!(forty.to_string(), "40%");
/// # Ok::<(), tinct::error::OutOfRangeError>(())
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Percentage(Float);

impl Percentage {
    /// Create a new percentage, failing if the value is not in `0..=100`.
    pub fn new(value: Float) -> Result<Self, OutOfRangeError> {
        Self::try_new(value)
    }

    /// Get the percentage as a float.
    #[inline]
    pub fn get(&self) -> Float {
        self.0
    }
}

impl Bounded for Percentage {
    const MIN: Float = 0.0;
    const MAX: Float = 100.0;

    #[inline]
    fn new_unchecked(value: Float) -> Self {
        Self(value)
    }

    #[inline]
    fn value(&self) -> Float {
        self.0
    }
}

impl From<Fraction> for Percentage {
    fn from(value: Fraction) -> Self {
        value.to_percentage()
    }
}

impl std::str::FromStr for Percentage {
    type Err = FormatError;

    /// Parse a percentage, which must end with `%`. Values beyond the bounds
    /// saturate.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s.strip_suffix('%').ok_or(FormatError::ExpectedPercentage)?;
        parse_number(number).map(Self::saturating)
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::core::write_rounded(self.0, f.precision().unwrap_or(3), f)?;
        f.write_str("%")
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse a finite floating point number.
///
/// Rust's float syntax accepts a leading or trailing `.`, which CSS also
/// accepts, but also `inf` and `NaN`, which CSS does not.
pub(crate) fn parse_number(s: &str) -> Result<Float, FormatError> {
    s.trim()
        .parse::<Float>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or(FormatError::MalformedNumber)
}

#[cfg(test)]
mod test {
    use super::{parse_number, Bounded, Fraction, Percentage};
    use crate::error::{FormatError, OutOfRangeError};
    use crate::Float;

    #[test]
    fn test_construction() {
        assert_eq!(Fraction::new(0.0), Ok(Fraction::ZERO));
        assert_eq!(Fraction::new(1.0), Ok(Fraction::ONE));
        assert_eq!(
            Fraction::new(-0.1),
            Err(OutOfRangeError::new(-0.1, 0.0..=1.0))
        );
        assert!(Fraction::new(Float::NAN).is_err());
        assert!(Fraction::new(Float::INFINITY).is_err());
        assert!(Percentage::new(100.5).is_err());

        assert_eq!(Fraction::saturating(-3.0), Fraction::ZERO);
        assert_eq!(Fraction::saturating(3.0), Fraction::ONE);
        assert_eq!(Fraction::saturating(Float::NAN), Fraction::ZERO);
        assert_eq!(Percentage::saturating(120.0).get(), 100.0);
    }

    #[test]
    fn test_arithmetic() -> Result<(), OutOfRangeError> {
        let fraction = Fraction::new(0.75)?;
        assert_eq!(fraction.conjugate().get(), 0.25);
        assert_eq!(fraction.checked_add(0.25)?, Fraction::ONE);
        assert_eq!(fraction.checked_sub(0.75)?, Fraction::ZERO);
        assert!(fraction.checked_add(0.5).is_err());
        assert!(fraction.checked_sub(1.0).is_err());
        assert_eq!(fraction.saturating_add(0.5), Fraction::ONE);
        assert_eq!(fraction.saturating_sub(1.0), Fraction::ZERO);
        assert_eq!((fraction * Fraction::HALF).get(), 0.375);

        let percentage = Percentage::new(30.0)?;
        assert_eq!(percentage.conjugate().get(), 70.0);
        assert_eq!(percentage.saturating_add(80.0).get(), 100.0);
        Ok(())
    }

    #[test]
    fn test_ordering() {
        assert!(Fraction::ZERO < Fraction::HALF);
        assert!(Fraction::HALF < Fraction::ONE);
        assert!(!(Fraction::HALF < Fraction::HALF));
        assert_eq!(Fraction::saturating(0.5), Fraction::HALF);
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse_number(" 12.5 "), Ok(12.5));
        assert_eq!(parse_number(".5"), Ok(0.5));
        assert_eq!(parse_number("inf"), Err(FormatError::MalformedNumber));
        assert_eq!(parse_number("NaN"), Err(FormatError::MalformedNumber));
        assert_eq!(parse_number("1..2"), Err(FormatError::MalformedNumber));

        assert_eq!("25%".parse::<Percentage>().map(|p| p.get()), Ok(25.0));
        assert_eq!("25".parse::<Percentage>(), Err(FormatError::ExpectedPercentage));
        assert_eq!("25%".parse::<Fraction>(), Ok(Fraction::saturating(0.25)));
        assert_eq!("-1".parse::<Fraction>(), Ok(Fraction::ZERO));
    }

    #[test]
    fn test_display() {
        assert_eq!(Fraction::saturating(0.1234567).to_string(), "0.123");
        assert_eq!(format!("{:.1}", Fraction::saturating(0.25)), "0.3");
        assert_eq!(Fraction::ONE.to_string(), "1");
        assert_eq!(Percentage::saturating(33.33333).to_string(), "33.333%");
    }
}
