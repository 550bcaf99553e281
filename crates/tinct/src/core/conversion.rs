use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert a unit-range channel to its 8-bit representation, rounding to the
/// nearest integer and clamping to `0x00..=0xff`.
#[inline]
pub(crate) fn to_byte(value: Float) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert the color coordinates to 24-bit representation.
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = *coordinates;
    [to_byte(r), to_byte(g), to_byte(b)]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert a gamma-corrected sRGB channel to linear light.
///
/// The threshold 0.03928 is the one used by WCAG 2's relative luminance, not
/// the 0.04045 of IEC 61966-2-1. The two curves agree to within rounding.
#[inline]
pub(crate) fn srgb_to_linear(value: Float) -> Float {
    if value <= 0.03928 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear-light channel back to gamma-corrected sRGB.
#[inline]
pub(crate) fn linear_to_srgb(value: Float) -> Float {
    if value <= 0.00304 {
        value * 12.92
    } else {
        value.powf(1.0 / 2.4).mul_add(1.055, -0.055)
    }
}

/// Convert coordinates from gamma-corrected sRGB to linear sRGB.
pub(crate) fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    [
        srgb_to_linear(value[0]),
        srgb_to_linear(value[1]),
        srgb_to_linear(value[2]),
    ]
}

/// Convert coordinates from linear sRGB to gamma-corrected sRGB.
pub(crate) fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    [
        linear_to_srgb(value[0]),
        linear_to_srgb(value[1]),
        linear_to_srgb(value[2]),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine the hue in turns for the given RGB coordinates.
///
/// The caller passes in the maximum and chroma it already computed. The
/// channel holding the maximum selects the formula, tested in the fixed order
/// red, green, blue, so that ties resolve deterministically.
pub(crate) fn rgb_to_hue(rgb: &[Float; 3], max: Float, chroma: Float) -> Float {
    let [r, g, b] = *rgb;

    if chroma == 0.0 {
        0.0
    } else if r == max {
        ((g - b) / chroma + 6.0).rem_euclid(6.0) / 6.0
    } else if g == max {
        ((b - r) / chroma + 2.0) / 6.0
    } else {
        ((r - g) / chroma + 4.0) / 6.0
    }
}

/// Map chroma, intermediate, and match values onto RGB by hue sector.
///
/// The hue is in turns. Each of the six 60º sectors places `c` and `x` into a
/// fixed pair of channels. Adding `m` may overshoot 1.0 by an ulp near sector
/// boundaries, hence the clamp.
fn from_cxm(hue: Float, c: Float, m: Float) -> [Float; 3] {
    let h = hue * 360.0 / 60.0;
    let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());

    let [r, g, b] = match (h.floor() as i64).rem_euclid(6) {
        0 => [c, x, 0.0],
        1 => [x, c, 0.0],
        2 => [0.0, c, x],
        3 => [0.0, x, c],
        4 => [x, 0.0, c],
        _ => [c, 0.0, x],
    };

    [(r + m).min(1.0), (g + m).min(1.0), (b + m).min(1.0)]
}

/// Convert HSV coordinates (hue in turns) to RGB.
pub(crate) fn hsv_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, v] = *value;
    let c = s * v;
    from_cxm(h, c, v - c)
}

/// Convert HSL coordinates (hue in turns) to RGB.
pub(crate) fn hsl_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, l] = *value;
    let c = s * (1.0 - (2.0 * l - 1.0).abs());
    from_cxm(h, c, l - c / 2.0)
}

/// Convert HWB coordinates (hue in turns) to RGB.
///
/// This function starts with the fully saturated hue and then blends each
/// channel towards the whiteness by `1 - w - b`.
pub(crate) fn hwb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, w, b] = *value;
    let factor = 1.0 - w - b;
    let [r, g, bl] = hsl_to_rgb(&[h, 1.0, 0.5]);

    [
        r.mul_add(factor, w).min(1.0),
        g.mul_add(factor, w).min(1.0),
        bl.mul_add(factor, w).min(1.0),
    ]
}

/// Convert CMYK coordinates to RGB.
pub(crate) fn cmyk_to_rgb(value: &[Float; 4]) -> [Float; 3] {
    let [c, m, y, k] = *value;
    let convert = |n: Float| 1.0 - n.mul_add(1.0 - k, k).min(1.0);
    [convert(c), convert(m), convert(y)]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert RGB coordinates to HSV with hue in turns.
pub(crate) fn rgb_to_hsv(rgb: &[Float; 3], max: Float, min: Float) -> [Float; 3] {
    let chroma = max - min;
    let saturation = if chroma == 0.0 { 0.0 } else { chroma / max };
    [rgb_to_hue(rgb, max, chroma), saturation, max]
}

/// Convert RGB coordinates to HSL with hue in turns.
pub(crate) fn rgb_to_hsl(rgb: &[Float; 3], max: Float, min: Float) -> [Float; 3] {
    let chroma = max - min;
    let lightness = (max + min) / 2.0;
    let saturation = if chroma == 0.0 {
        0.0
    } else {
        chroma / (1.0 - (2.0 * lightness - 1.0).abs())
    };
    [rgb_to_hue(rgb, max, chroma), saturation, lightness]
}

/// Convert RGB coordinates to HWB with hue in turns.
pub(crate) fn rgb_to_hwb(rgb: &[Float; 3], max: Float, min: Float) -> [Float; 3] {
    [rgb_to_hue(rgb, max, max - min), min, 1.0 - max]
}

/// Convert RGB coordinates to CMYK.
pub(crate) fn rgb_to_cmyk(rgb: &[Float; 3], max: Float) -> [Float; 4] {
    let k = 1.0 - max;
    if k == 1.0 {
        return [0.0, 0.0, 0.0, 1.0];
    }

    let [r, g, b] = *rgb;
    let convert = |n: Float| (1.0 - n - k) / (1.0 - k);
    [convert(r), convert(g), convert(b), k]
}

// ====================================================================================================================
