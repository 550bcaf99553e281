//! Circular measures.
//!
//! An [`Angle`] stores its magnitude in turns, always normalized into the
//! half-open range `0..1`. Conversion to and from degrees, gradians, radians,
//! and turns happens at the boundary, with [`AngleUnit`] naming the unit.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{write_rounded, FloatExt};
use crate::error::FormatError;
use crate::ratio::parse_number;
use crate::Float;

/// The units of angular measurement.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "tinct")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    Degree,
    Gradian,
    Radian,
    Turn,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl AngleUnit {
    /// Get the number of units in one full turn.
    pub fn per_turn(&self) -> Float {
        match *self {
            Self::Degree => 360.0,
            Self::Gradian => 400.0,
            Self::Radian => <Float as FloatExt>::TAU,
            Self::Turn => 1.0,
        }
    }

    /// Get the CSS suffix for this unit.
    pub const fn suffix(&self) -> &'static str {
        match *self {
            Self::Degree => "deg",
            Self::Gradian => "grad",
            Self::Radian => "rad",
            Self::Turn => "turn",
        }
    }
}

impl AngleUnit {
    /// Split a trailing CSS unit off the given string.
    ///
    /// `grad` must be tested before `rad`, since the latter is a suffix of the
    /// former.
    pub(crate) fn split_suffix(s: &str) -> Option<(&str, Self)> {
        [Self::Degree, Self::Gradian, Self::Radian, Self::Turn]
            .into_iter()
            .find_map(|unit| s.strip_suffix(unit.suffix()).map(|number| (number, unit)))
    }
}

// ====================================================================================================================

/// An angle.
///
/// Angles are normalized into `0..1` turns with floor-mod semantics, so that
/// -90º becomes 270º and 370º becomes 10º. Equality and ordering are
/// approximate and account for the circle: 0.0 and 0.9999999999999 turns are
/// the same angle.
///
/// # Examples
///
/// ```
/// # use tinct::{Angle, AngleUnit};
/// let angle = Angle::from_degrees(-90.0);
/// assert_eq!(angle.turns(), 0.75);
/// assert_eq!(angle.to(AngleUnit::Gradian), 300.0);
/// assert_eq!(angle, Angle::from_degrees(270.0));
/// assert_eq!(angle.to_string(), "270deg");
///
/// let parsed: Angle = "0.5turn".parse()?;
/// assert_eq!(parsed + parsed, Angle::new(0.0));
/// # Ok::<(), tinct::error::FormatError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyclass(frozen, module = "tinct"))]
#[derive(Copy, Clone, Debug, Default)]
pub struct Angle(Float);

#[cfg_attr(feature = "pyffi", pymethods)]
impl Angle {
    /// Create a new angle from the given number of turns.
    ///
    /// Not-a-number and infinities have no position on the circle and
    /// become the zero angle.
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn new(turns: Float) -> Self {
        Self(normalize(turns))
    }

    /// Create a new angle from the given number of turns.
    ///
    /// Not-a-number and infinities have no position on the circle and
    /// become the zero angle.
    #[cfg(not(feature = "pyffi"))]
    pub fn new(turns: Float) -> Self {
        Self(normalize(turns))
    }

    /// Create a new angle from a value in the given unit.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_unit(value: Float, unit: AngleUnit) -> Self {
        Self::new(value / unit.per_turn())
    }

    /// Create a new angle from a value in the given unit.
    #[cfg(not(feature = "pyffi"))]
    pub fn from_unit(value: Float, unit: AngleUnit) -> Self {
        Self::new(value / unit.per_turn())
    }

    /// Parse an angle from its CSS representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Self, FormatError> {
        s.parse()
    }

    /// Convert this angle to the given unit.
    pub fn to(&self, unit: AngleUnit) -> Float {
        self.0 * unit.per_turn()
    }

    /// Get this angle in degrees.
    pub fn degrees(&self) -> Float {
        self.to(AngleUnit::Degree)
    }

    /// Get this angle in gradians.
    pub fn gradians(&self) -> Float {
        self.to(AngleUnit::Gradian)
    }

    /// Get this angle in radians.
    pub fn radians(&self) -> Float {
        self.to(AngleUnit::Radian)
    }

    /// Get this angle in turns.
    #[inline]
    pub fn turns(&self) -> Float {
        self.0
    }

    /// Scale this angle by the given factor.
    pub fn scale(&self, factor: Float) -> Self {
        Self::new(self.0 * factor)
    }

    /// Get the complementary angle, i.e., a quarter turn minus this angle.
    pub fn complement(&self) -> Self {
        Self::new(0.25 - self.0)
    }

    /// Get the supplementary angle, i.e., a half turn minus this angle.
    pub fn supplement(&self) -> Self {
        Self::new(0.5 - self.0)
    }

    /// Get the explementary angle, i.e., a full turn minus this angle.
    pub fn conjugate(&self) -> Self {
        Self::new(1.0 - self.0)
    }

    /// Compute the sine.
    pub fn sin(&self) -> Float {
        self.radians().sin()
    }

    /// Compute the cosine.
    pub fn cos(&self) -> Float {
        self.radians().cos()
    }

    /// Compute the tangent.
    pub fn tan(&self) -> Float {
        self.radians().tan()
    }

    /// Compute the cosecant.
    pub fn csc(&self) -> Float {
        self.sin().recip()
    }

    /// Compute the secant.
    pub fn sec(&self) -> Float {
        self.cos().recip()
    }

    /// Compute the cotangent.
    pub fn cot(&self) -> Float {
        self.tan().recip()
    }

    /// Determine whether two angles are approximately equal. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __eq__(&self, other: &Self) -> bool {
        self == other
    }

    /// Create a human-readable representation for this angle. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }

    /// Create a debug representation for this angle. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("Angle({})", self.0)
    }
}

impl Angle {
    /// Create a new angle from degrees.
    pub fn from_degrees(value: impl Into<Float>) -> Self {
        Self::from_unit(value.into(), AngleUnit::Degree)
    }

    /// Create a new angle from gradians.
    pub fn from_gradians(value: impl Into<Float>) -> Self {
        Self::from_unit(value.into(), AngleUnit::Gradian)
    }

    /// Create a new angle from radians.
    pub fn from_radians(value: impl Into<Float>) -> Self {
        Self::from_unit(value.into(), AngleUnit::Radian)
    }

    /// Create a new angle from turns.
    pub fn from_turns(value: impl Into<Float>) -> Self {
        Self::new(value.into())
    }

    /// Compute the distance along the circle, which is at most half a turn.
    fn circular_distance(&self, other: &Self) -> Float {
        let delta = (self.0 - other.0).abs();
        delta.min(1.0 - delta)
    }
}

/// Normalize the turns into `0..1`.
fn normalize(turns: Float) -> Float {
    if !turns.is_finite() {
        return 0.0;
    }

    // rem_euclid may round a tiny negative value up to 1.0.
    let turns = turns.rem_euclid(1.0);
    if turns >= 1.0 {
        0.0
    } else {
        turns
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.circular_distance(other) < <Float as FloatExt>::EPSILON
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self == other {
            Some(std::cmp::Ordering::Equal)
        } else {
            self.0.partial_cmp(&other.0)
        }
    }
}

impl std::ops::Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Self) -> Self::Output {
        Angle::new(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Self) -> Self::Output {
        Angle::new(self.0 - rhs.0)
    }
}

impl std::ops::Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Self::Output {
        Angle::new(-self.0)
    }
}

impl std::ops::Mul<Float> for Angle {
    type Output = Angle;

    fn mul(self, rhs: Float) -> Self::Output {
        self.scale(rhs)
    }
}

impl std::str::FromStr for Angle {
    type Err = FormatError;

    /// Parse an angle with a mandatory CSS unit, e.g., `90deg` or `1.5rad`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match AngleUnit::split_suffix(s) {
            Some((number, unit)) => Ok(Self::from_unit(parse_number(number)?, unit)),
            None => {
                // A well-formed number followed by letters, if any, has an
                // unknown or missing unit. Anything else is malformed.
                parse_number(s.trim_end_matches(|c: char| c.is_ascii_alphabetic()))?;
                Err(FormatError::UnknownAngleUnit)
            }
        }
    }
}

impl std::fmt::Display for Angle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_rounded(self.degrees(), f.precision().unwrap_or(3), f)?;
        f.write_str("deg")
    }
}

#[cfg(test)]
mod test {
    use super::{Angle, AngleUnit};
    use crate::assert_close_enough;
    use crate::error::FormatError;
    use crate::Float;

    #[test]
    fn test_normalization() {
        assert_eq!(Angle::new(-0.25).turns(), 0.75);
        assert_eq!(Angle::new(1.0).turns(), 0.0);
        assert_eq!(Angle::new(2.5).turns(), 0.5);
        assert_eq!(Angle::new(-1e-20).turns(), 0.0);
        assert_eq!(Angle::new(Float::NAN).turns(), 0.0);
        assert_eq!(Angle::new(Float::NEG_INFINITY).turns(), 0.0);
        assert!((Angle::from_degrees(370.0).degrees() - 10.0).abs() < 1e-9);
        assert_eq!(Angle::from_degrees(370.0), Angle::from_degrees(10.0));
    }

    #[test]
    fn test_units() {
        let right = Angle::from_degrees(90.0);
        assert_eq!(right.turns(), 0.25);
        assert_eq!(right.gradians(), 100.0);
        assert_close_enough!(right.radians(), std::f64::consts::FRAC_PI_2 as Float);
        assert_eq!(Angle::from_gradians(200.0).degrees(), 180.0);
        assert_eq!(Angle::from_turns(0.5), Angle::from_radians(std::f64::consts::PI as Float));
        assert_eq!(Angle::from_unit(45.0, AngleUnit::Degree).to(AngleUnit::Turn), 0.125);
    }

    #[test]
    fn test_equality() {
        assert_eq!(Angle::new(0.0), Angle::new(0.9999999999999));
        assert_eq!(Angle::new(0.9999999999999), Angle::new(0.0));
        assert_ne!(Angle::new(0.0), Angle::new(0.001));
        assert!(Angle::new(0.1) < Angle::new(0.2));
        assert!(!(Angle::new(0.0) < Angle::new(0.9999999999999)));
        assert!(!(Angle::new(0.9999999999999) > Angle::new(0.0)));
    }

    #[test]
    fn test_arithmetic() {
        let a = Angle::new(0.75);
        let b = Angle::new(0.5);
        assert_eq!((a + b).turns(), 0.25);
        assert_eq!((b - a).turns(), 0.75);
        assert_eq!((-a).turns(), 0.25);
        assert_eq!((a * 2.0).turns(), 0.5);
        assert_eq!(a.scale(-1.0).turns(), 0.25);

        let thirty = Angle::from_degrees(30.0);
        assert_eq!(thirty.complement(), Angle::from_degrees(60.0));
        assert_eq!(thirty.supplement(), Angle::from_degrees(150.0));
        assert_eq!(thirty.conjugate(), Angle::from_degrees(330.0));
        assert_eq!(Angle::new(0.0).conjugate().turns(), 0.0);
    }

    #[test]
    fn test_trigonometry() {
        let thirty = Angle::from_degrees(30.0);
        assert!((thirty.sin() - 0.5).abs() < 1e-6);
        assert!((thirty.csc() - 2.0).abs() < 1e-6);

        let sixty = Angle::from_degrees(60.0);
        assert!((sixty.cos() - 0.5).abs() < 1e-6);
        assert!((sixty.sec() - 2.0).abs() < 1e-6);

        let diagonal = Angle::from_degrees(45.0);
        assert!((diagonal.tan() - 1.0).abs() < 1e-6);
        assert!((diagonal.cot() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_parse() -> Result<(), FormatError> {
        assert_eq!("90deg".parse::<Angle>()?, Angle::new(0.25));
        assert_eq!("100grad".parse::<Angle>()?, Angle::new(0.25));
        assert_eq!(" .25turn ".parse::<Angle>()?, Angle::new(0.25));
        assert_close_enough!("3.14159265358979rad".parse::<Angle>()?.turns(), 0.5);
        assert_eq!("-90deg".parse::<Angle>()?, Angle::new(0.75));

        assert_eq!("90".parse::<Angle>(), Err(FormatError::UnknownAngleUnit));
        assert_eq!("90rev".parse::<Angle>(), Err(FormatError::UnknownAngleUnit));
        assert_eq!("9x0deg".parse::<Angle>(), Err(FormatError::MalformedNumber));
        assert_eq!("deg".parse::<Angle>(), Err(FormatError::MalformedNumber));
        assert_eq!("".parse::<Angle>(), Err(FormatError::MalformedNumber));
        Ok(())
    }

    #[test]
    fn test_display() {
        assert_eq!(Angle::from_degrees(90.0).to_string(), "90deg");
        assert_eq!(Angle::new(1.0 / 3.0).to_string(), "120deg");
        assert_eq!(Angle::new(0.123456).to_string(), "44.444deg");
        assert_eq!(format!("{:.1}", Angle::new(0.123456)), "44.4deg");
    }
}
