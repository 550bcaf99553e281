/// Extension trait carrying the precision-dependent constants for [`Float`].
///
/// [`Float`]: crate::Float
pub(crate) trait FloatExt {
    /// The factor for dropping the least significant digit before equality
    /// testing and hashing: 1e5 for `f32`, 1e14 for `f64`.
    const ROUNDING_FACTOR: Self;

    /// The tolerance for approximate comparisons of angles in turns.
    const EPSILON: Self;

    /// The largest per-channel difference of two colors that still compare
    /// equal.
    const CHANNEL_TOLERANCE: Self;

    /// A full circle in radians.
    const TAU: Self;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e5;
    const EPSILON: f32 = 1e-6;
    const CHANNEL_TOLERANCE: f32 = 1e-5;
    const TAU: f32 = core::f32::consts::TAU;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e14;
    const EPSILON: f64 = 1e-12;
    const CHANNEL_TOLERANCE: f64 = 1e-9;
    const TAU: f64 = core::f64::consts::TAU;
}

/// Round the value to the given number of decimals and write it without
/// trailing zeros.
///
/// CSS does not want trailing zeros. Rounding avoids most of them, but a
/// value without fractional part still needs an explicit precision of zero.
pub(crate) fn write_rounded(
    value: crate::Float,
    decimals: usize,
    f: &mut core::fmt::Formatter<'_>,
) -> core::fmt::Result {
    let factor = (10.0 as crate::Float).powi(decimals as i32);
    let mut c = (value * factor).round() / factor;
    if c == -0.0 {
        c = 0.0;
    }

    if c == c.trunc() {
        f.write_fmt(format_args!("{:.0}", c))
    } else {
        f.write_fmt(format_args!("{}", c))
    }
}

#[cfg(test)]
mod test {
    use super::write_rounded;
    use crate::Float;

    struct Rounded(Float, usize);

    impl core::fmt::Display for Rounded {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            write_rounded(self.0, self.1, f)
        }
    }

    #[test]
    fn test_write_rounded() {
        assert_eq!(Rounded(0.5, 3).to_string(), "0.5");
        assert_eq!(Rounded(12.0, 3).to_string(), "12");
        assert_eq!(Rounded(33.33333, 3).to_string(), "33.333");
        assert_eq!(Rounded(0.99996, 3).to_string(), "1");
        assert_eq!(Rounded(-0.0001, 2).to_string(), "0");
    }
}
