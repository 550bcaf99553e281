use crate::core::conversion::srgb_to_linear;
use crate::Float;

/// The coefficients for computing the relative luminance of sRGB
/// coordinates, per WCAG 2.
const SRGB_LUMINANCE: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// Compute the relative luminance for the given sRGB coordinates.
///
/// Alpha does not factor into the result. The color is treated as opaque.
pub(crate) fn to_relative_luminance(coordinates: &[Float; 3]) -> Float {
    let [c1, c2, c3] = *SRGB_LUMINANCE;
    let [r, g, b] = *coordinates;

    srgb_to_linear(r).mul_add(c1, srgb_to_linear(g).mul_add(c2, srgb_to_linear(b) * c3))
}

/// Compute the WCAG 2 contrast ratio between two relative luminances.
///
/// The arguments are interchangeable. The result ranges from 1 (no contrast)
/// to 21 (black and white).
pub(crate) fn to_contrast_ratio(luminance1: Float, luminance2: Float) -> Float {
    let (lighter, darker) = if luminance1 < luminance2 {
        (luminance2, luminance1)
    } else {
        (luminance1, luminance2)
    };

    (lighter + 0.05) / (darker + 0.05)
}

/// The relative luminance at which black and white text have the same
/// contrast ratio against a background, i.e., the solution of
/// `(1.05) / (L + 0.05) = (L + 0.05) / 0.05`.
pub(crate) const EQUAL_CONTRAST_LUMINANCE: Float = 0.17912878474779;
