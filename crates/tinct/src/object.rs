use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::core::{
    channels_close, cmyk_to_rgb, format, format_hashed, from_24bit, hsl_to_rgb, hsv_to_rgb,
    hwb_to_rgb, linear_rgb_to_rgb, parse, rgb_to_cmyk, rgb_to_hsl, rgb_to_hsv, rgb_to_hue,
    rgb_to_hwb, rgb_to_linear_rgb, to_24bit, to_contrast_ratio, to_relative_luminance,
    ColorSpace, EQUAL_CONTRAST_LUMINANCE,
};
use crate::error::ParseColorError;
use crate::{named, Angle, Bounded, Fraction, Float};

/// Create a new opaque color from 24-bit integer channels.
/// <i class=rust-only>Rust only!</i>
///
/// Like [`Color::from_24bit`], this macro creates a new color from 24-bit
/// integer channels. However, it also is safe to use in const expressions.
///
/// Rust does not allow floating point comparisons in const functions on the
/// supported toolchains. That makes it impossible to write a const function
/// that clamps channels and determines their maximum and minimum. Integer
/// comparisons and floating point operations in const expressions are fine,
/// though. Hence, this macro computes the maximum and minimum on the bytes and
/// normalizes everything before passing the results to a const constructor.
///
/// ```
/// # use tinct::{rgb, Color};
/// const TEAL: Color = rgb!(0x00, 0x80, 0x80);
/// assert_eq!(TEAL, Color::from_24bit(0, 128, 128));
/// assert_eq!(TEAL.to_string(), "#008080");
/// ```
#[macro_export]
macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {{
        let (r, g, b): (u8, u8, u8) = ($r, $g, $b);
        let max = if r >= g && r >= b {
            r
        } else if g >= b {
            g
        } else {
            b
        };
        let min = if r <= g && r <= b {
            r
        } else if g <= b {
            g
        } else {
            b
        };

        $crate::Color::from_normalized_parts(
            [
                r as $crate::Float / 255.0,
                g as $crate::Float / 255.0,
                b as $crate::Float / 255.0,
            ],
            max as $crate::Float / 255.0,
            min as $crate::Float / 255.0,
            (max - min) as $crate::Float / 255.0,
        )
    }};
}

const BLACK: Color = rgb!(0, 0, 0);
const WHITE: Color = rgb!(255, 255, 255);

/// An immutable color.
///
/// Every color has red, green, and blue channels as well as an alpha channel
/// for opacity, all of them [fractions](Fraction) in unit range. The
/// constructors silently clamp out-of-range channels and turn not-a-number
/// into zero. All other color spaces, i.e., HSV, HSL, HWB, and CMYK, are
/// derived on demand. The maximum, minimum, and chroma of the RGB channels,
/// which all of them need, are computed once during construction.
///
/// All methods that transform a color return a new color. None of them
/// mutate the original.
///
/// ## Equality Testing and Hashing
///
/// A key requirement for data structures that implement the `Eq` and `Hash`
/// traits is that equal colors also have equal hashes. This type enforces
/// that invariant as follows:
///
///   * Two fully transparent colors, i.e., with alpha exactly zero, are equal,
///     whatever their RGB channels. A fully transparent color never equals a
///     color with nonzero alpha.
///   * Otherwise, two colors are equal if each of their four channels differs
///     by at most 1e-5 for `f32` or 1e-9 for `f64`.
///   * The hash only covers whether a color is fully transparent.
///
/// The tolerance is what makes inverting a color twice, rotating it by two
/// half turns, or wrapping its hue around by a full turn produce an equal
/// color, even though floating point error may leave the least significant
/// bits different. As a consequence, equality is not transitive for colors
/// that are just within tolerance of each other.
///
/// ```
/// # use tinct::Color;
/// let transparent_red = Color::new(1.0, 0.0, 0.0, 0.0);
/// assert_eq!(transparent_red, Color::default());
///
/// let steel = Color::srgb(0.275, 0.51, 0.706);
/// assert_eq!(steel.invert().invert(), steel);
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "tinct"))]
#[derive(Clone, Copy)]
pub struct Color {
    red: Fraction,
    green: Fraction,
    blue: Fraction,
    alpha: Fraction,
    max: Float,
    min: Float,
    chroma: Float,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Color {
    // The following constructors come in pairs, once for pyffi and once without
    // pyffi, since #[new] and #[staticmethod] do not work with #[cfg_attr()].

    /// Instantiate a new color with the given red, green, blue, and alpha
    /// channels.
    ///
    /// This constructor clamps each channel to unit range and replaces
    /// not-a-number with zero.
    ///
    /// ```
    /// # use tinct::{Bounded, Color};
    /// let orange = Color::new(1.0, 0.65, -3.0, 2.0);
    /// assert_eq!(orange.blue().value(), 0.0);
    /// assert_eq!(orange.alpha().value(), 1.0);
    /// assert_eq!(orange.to_string(), "#ffa600");
    /// ```
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn new(red: Float, green: Float, blue: Float, alpha: Float) -> Self {
        Self::from_fractions(
            Fraction::saturating(red),
            Fraction::saturating(green),
            Fraction::saturating(blue),
            Fraction::saturating(alpha),
        )
    }

    /// Instantiate a new color with the given red, green, blue, and alpha
    /// channels.
    ///
    /// This constructor clamps each channel to unit range and replaces
    /// not-a-number with zero.
    ///
    /// ```
    /// # use tinct::{Bounded, Color};
    /// let orange = Color::new(1.0, 0.65, -3.0, 2.0);
    /// assert_eq!(orange.blue().value(), 0.0);
    /// assert_eq!(orange.alpha().value(), 1.0);
    /// assert_eq!(orange.to_string(), "#ffa600");
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn new(red: Float, green: Float, blue: Float, alpha: Float) -> Self {
        Self::from_fractions(
            Fraction::saturating(red),
            Fraction::saturating(green),
            Fraction::saturating(blue),
            Fraction::saturating(alpha),
        )
    }

    /// Parse a color from its string representation. <i
    /// class=python-only>Python only!</i>
    ///
    /// This method implements the same functionality as `Color`'s [`Color as
    /// FromStr`](struct.Color.html#impl-FromStr-for-Color) and is available in
    /// Python only.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Color, ParseColorError> {
        Color::from_str(s)
    }

    /// Instantiate a new opaque color with the given red, green, and blue
    /// channels. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn srgb(red: Float, green: Float, blue: Float) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Instantiate a new color from channels between 0 and 255.
    ///
    /// This constructor clamps each of the red, green, and blue channels to
    /// `0..=255` before scaling it by 1/255.
    ///
    /// ```
    /// # use tinct::{Color, Fraction};
    /// let tomato = Color::from_rgb(255.0, 99.0, 71.0, Fraction::HALF);
    /// assert_eq!(tomato.to_string(), "#ff634780");
    /// assert_eq!(Color::from_rgb(300.0, -1.0, 0.0, Fraction::ONE).to_string(), "#ff0000");
    /// ```
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_rgb(red: Float, green: Float, blue: Float, alpha: Fraction) -> Self {
        let scale = |c: Float| c.clamp(0.0, 255.0) / 255.0;
        Self::from_fractions(
            Fraction::saturating(scale(red)),
            Fraction::saturating(scale(green)),
            Fraction::saturating(scale(blue)),
            alpha,
        )
    }

    /// Instantiate a new color from channels between 0 and 255.
    ///
    /// This constructor clamps each of the red, green, and blue channels to
    /// `0..=255` before scaling it by 1/255.
    ///
    /// ```
    /// # use tinct::{Color, Fraction};
    /// let tomato = Color::from_rgb(255.0, 99.0, 71.0, Fraction::HALF);
    /// assert_eq!(tomato.to_string(), "#ff634780");
    /// assert_eq!(Color::from_rgb(300.0, -1.0, 0.0, Fraction::ONE).to_string(), "#ff0000");
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn from_rgb(red: Float, green: Float, blue: Float, alpha: Fraction) -> Self {
        let scale = |c: Float| c.clamp(0.0, 255.0) / 255.0;
        Self::from_fractions(
            Fraction::saturating(scale(red)),
            Fraction::saturating(scale(green)),
            Fraction::saturating(scale(blue)),
            alpha,
        )
    }

    /// Instantiate a new opaque color from its 24-bit representation.
    ///
    /// The [`rgb`] macro does the same thing but is safe to use inside const
    /// expressions.
    ///
    /// ```
    /// # use tinct::Color;
    /// let tangerine = Color::from_24bit(0xff, 0x93, 0x00);
    /// assert_eq!(tangerine, Color::srgb(1.0, 0.5764705882352941, 0.0));
    /// ```
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    #[inline]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        let [r, g, b] = from_24bit(r, g, b);
        Self::new(r, g, b, 1.0)
    }

    /// Instantiate a new opaque color from its 24-bit representation.
    ///
    /// The [`rgb`] macro does the same thing but is safe to use inside const
    /// expressions.
    ///
    /// ```
    /// # use tinct::Color;
    /// let tangerine = Color::from_24bit(0xff, 0x93, 0x00);
    /// assert_eq!(tangerine, Color::srgb(1.0, 0.5764705882352941, 0.0));
    /// ```
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        let [r, g, b] = from_24bit(r, g, b);
        Self::new(r, g, b, 1.0)
    }

    /// Instantiate a new color from hue, saturation, and value.
    ///
    /// ```
    /// # use tinct::{Angle, Color, Fraction};
    /// let olive = Color::from_hsv(Angle::from_degrees(60.0), Fraction::ONE, Fraction::HALF, Fraction::ONE);
    /// assert_eq!(olive.to_string(), "#808000");
    /// ```
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_hsv(hue: Angle, saturation: Fraction, value: Fraction, alpha: Fraction) -> Self {
        let [r, g, b] = hsv_to_rgb(&[hue.turns(), saturation.value(), value.value()]);
        Self::new(r, g, b, alpha.value())
    }

    /// Instantiate a new color from hue, saturation, and value.
    ///
    /// ```
    /// # use tinct::{Angle, Color, Fraction};
    /// let olive = Color::from_hsv(Angle::from_degrees(60.0), Fraction::ONE, Fraction::HALF, Fraction::ONE);
    /// assert_eq!(olive.to_string(), "#808000");
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn from_hsv(hue: Angle, saturation: Fraction, value: Fraction, alpha: Fraction) -> Self {
        let [r, g, b] = hsv_to_rgb(&[hue.turns(), saturation.value(), value.value()]);
        Self::new(r, g, b, alpha.value())
    }

    /// Instantiate a new color from hue, saturation, and lightness.
    ///
    /// ```
    /// # use tinct::{Angle, Color, Fraction};
    /// let lime = Color::from_hsl(Angle::from_degrees(120.0), Fraction::ONE, Fraction::HALF, Fraction::ONE);
    /// assert_eq!(lime.to_string(), "#00ff00");
    /// ```
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_hsl(
        hue: Angle,
        saturation: Fraction,
        lightness: Fraction,
        alpha: Fraction,
    ) -> Self {
        let [r, g, b] = hsl_to_rgb(&[hue.turns(), saturation.value(), lightness.value()]);
        Self::new(r, g, b, alpha.value())
    }

    /// Instantiate a new color from hue, saturation, and lightness.
    ///
    /// ```
    /// # use tinct::{Angle, Color, Fraction};
    /// let lime = Color::from_hsl(Angle::from_degrees(120.0), Fraction::ONE, Fraction::HALF, Fraction::ONE);
    /// assert_eq!(lime.to_string(), "#00ff00");
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn from_hsl(
        hue: Angle,
        saturation: Fraction,
        lightness: Fraction,
        alpha: Fraction,
    ) -> Self {
        let [r, g, b] = hsl_to_rgb(&[hue.turns(), saturation.value(), lightness.value()]);
        Self::new(r, g, b, alpha.value())
    }

    /// Instantiate a new color from hue, whiteness, and blackness.
    ///
    /// ```
    /// # use tinct::{Angle, Bounded, Color, Fraction};
    /// let pink = Color::from_hwb(Angle::from_degrees(300.0), Fraction::HALF, Fraction::ZERO, Fraction::ONE);
    /// assert_eq!(pink.to_string(), "#ff80ff");
    /// ```
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_hwb(
        hue: Angle,
        whiteness: Fraction,
        blackness: Fraction,
        alpha: Fraction,
    ) -> Self {
        let [r, g, b] = hwb_to_rgb(&[hue.turns(), whiteness.value(), blackness.value()]);
        Self::new(r, g, b, alpha.value())
    }

    /// Instantiate a new color from hue, whiteness, and blackness.
    ///
    /// ```
    /// # use tinct::{Angle, Bounded, Color, Fraction};
    /// let pink = Color::from_hwb(Angle::from_degrees(300.0), Fraction::HALF, Fraction::ZERO, Fraction::ONE);
    /// assert_eq!(pink.to_string(), "#ff80ff");
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn from_hwb(
        hue: Angle,
        whiteness: Fraction,
        blackness: Fraction,
        alpha: Fraction,
    ) -> Self {
        let [r, g, b] = hwb_to_rgb(&[hue.turns(), whiteness.value(), blackness.value()]);
        Self::new(r, g, b, alpha.value())
    }

    /// Instantiate a new color from cyan, magenta, yellow, and key.
    ///
    /// ```
    /// # use tinct::{Color, Fraction};
    /// let navy = Color::from_cmyk(Fraction::ONE, Fraction::ONE, Fraction::ZERO, Fraction::HALF, Fraction::ONE);
    /// assert_eq!(navy.to_string(), "#000080");
    /// ```
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_cmyk(
        cyan: Fraction,
        magenta: Fraction,
        yellow: Fraction,
        key: Fraction,
        alpha: Fraction,
    ) -> Self {
        let [r, g, b] = cmyk_to_rgb(&[cyan.value(), magenta.value(), yellow.value(), key.value()]);
        Self::new(r, g, b, alpha.value())
    }

    /// Instantiate a new color from cyan, magenta, yellow, and key.
    ///
    /// ```
    /// # use tinct::{Color, Fraction};
    /// let navy = Color::from_cmyk(Fraction::ONE, Fraction::ONE, Fraction::ZERO, Fraction::HALF, Fraction::ONE);
    /// assert_eq!(navy.to_string(), "#000080");
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn from_cmyk(
        cyan: Fraction,
        magenta: Fraction,
        yellow: Fraction,
        key: Fraction,
        alpha: Fraction,
    ) -> Self {
        let [r, g, b] = cmyk_to_rgb(&[cyan.value(), magenta.value(), yellow.value(), key.value()]);
        Self::new(r, g, b, alpha.value())
    }

    /// Create a random color.
    ///
    /// The red, green, and blue channels are uniformly distributed in unit
    /// range. So is alpha if included, otherwise the color is opaque.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn random(include_alpha: bool) -> Self {
        let mut rng = rand::rng();
        let alpha = if include_alpha { rng.random() } else { 1.0 };
        Self::new(rng.random(), rng.random(), rng.random(), alpha)
    }

    /// Create a random color.
    ///
    /// The red, green, and blue channels are uniformly distributed in unit
    /// range. So is alpha if included, otherwise the color is opaque.
    #[cfg(not(feature = "pyffi"))]
    pub fn random(include_alpha: bool) -> Self {
        let mut rng = rand::rng();
        let alpha = if include_alpha { rng.random() } else { 1.0 };
        Self::new(rng.random(), rng.random(), rng.random(), alpha)
    }

    /// Pick a random named color.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn random_name() -> Self {
        Self::pick_named()
    }

    /// Pick a random named color.
    ///
    /// ```
    /// # use tinct::Color;
    /// let color = Color::random_name();
    /// assert!(color.name().is_some());
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn random_name() -> Self {
        Self::pick_named()
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Access the red channel.
    #[inline]
    pub fn red(&self) -> Fraction {
        self.red
    }

    /// Access the green channel.
    #[inline]
    pub fn green(&self) -> Fraction {
        self.green
    }

    /// Access the blue channel.
    #[inline]
    pub fn blue(&self) -> Fraction {
        self.blue
    }

    /// Access the alpha channel.
    #[inline]
    pub fn alpha(&self) -> Fraction {
        self.alpha
    }

    /// Get all four channels as floats, in order red, green, blue, and alpha.
    #[inline]
    pub fn to_channels(&self) -> [Float; 4] {
        [
            self.red.value(),
            self.green.value(),
            self.blue.value(),
            self.alpha.value(),
        ]
    }

    /// Determine the hue shared by HSV, HSL, and HWB.
    ///
    /// Achromatic colors have hue zero.
    ///
    /// ```
    /// # use tinct::{Angle, Color};
    /// assert_eq!(Color::srgb(0.0, 0.0, 1.0).hue(), Angle::from_degrees(240.0));
    /// assert_eq!(Color::srgb(0.5, 0.5, 0.5).hue(), Angle::new(0.0));
    /// ```
    pub fn hue(&self) -> Angle {
        Angle::new(rgb_to_hue(&self.rgb(), self.max, self.chroma))
    }

    /// Determine the HSV saturation.
    pub fn hsv_saturation(&self) -> Float {
        if self.chroma == 0.0 {
            0.0
        } else {
            self.chroma / self.max
        }
    }

    /// Determine the HSV value.
    #[inline]
    pub fn value(&self) -> Float {
        self.max
    }

    /// Determine the HSL saturation.
    ///
    /// This is not the same as the HSV saturation.
    pub fn hsl_saturation(&self) -> Float {
        if self.chroma == 0.0 {
            0.0
        } else {
            self.chroma / (1.0 - (2.0 * self.lightness() - 1.0).abs())
        }
    }

    /// Determine the HSL lightness.
    pub fn lightness(&self) -> Float {
        (self.max + self.min) / 2.0
    }

    /// Determine the HWB whiteness.
    #[inline]
    pub fn whiteness(&self) -> Float {
        self.min
    }

    /// Determine the HWB blackness.
    pub fn blackness(&self) -> Float {
        1.0 - self.max
    }

    /// Determine the CMYK cyan.
    pub fn cyan(&self) -> Float {
        self.to_cmyk()[0]
    }

    /// Determine the CMYK magenta.
    pub fn magenta(&self) -> Float {
        self.to_cmyk()[1]
    }

    /// Determine the CMYK yellow.
    pub fn yellow(&self) -> Float {
        self.to_cmyk()[2]
    }

    /// Determine the CMYK key, i.e., black.
    pub fn key(&self) -> Float {
        1.0 - self.max
    }

    /// Convert to HSV coordinates, with hue in turns.
    pub fn to_hsv(&self) -> [Float; 3] {
        rgb_to_hsv(&self.rgb(), self.max, self.min)
    }

    /// Convert to HSL coordinates, with hue in turns.
    pub fn to_hsl(&self) -> [Float; 3] {
        rgb_to_hsl(&self.rgb(), self.max, self.min)
    }

    /// Convert to HWB coordinates, with hue in turns.
    pub fn to_hwb(&self) -> [Float; 3] {
        rgb_to_hwb(&self.rgb(), self.max, self.min)
    }

    /// Convert to CMYK coordinates.
    ///
    /// ```
    /// # use tinct::Color;
    /// assert_eq!(Color::srgb(1.0, 0.5, 0.0).to_cmyk(), [0.0, 0.5, 1.0, 0.0]);
    /// assert_eq!(Color::srgb(0.0, 0.0, 0.0).to_cmyk(), [0.0, 0.0, 0.0, 1.0]);
    /// ```
    pub fn to_cmyk(&self) -> [Float; 4] {
        rgb_to_cmyk(&self.rgb(), self.max)
    }

    /// Convert this color to its 24-bit representation, ignoring alpha.
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(&self.rgb())
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Invert the red, green, and blue channels, keeping alpha.
    ///
    /// ```
    /// # use tinct::Color;
    /// assert_eq!(Color::srgb(1.0, 0.25, 0.0).invert(), Color::srgb(0.0, 0.75, 1.0));
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn invert(&self) -> Self {
        Self::from_fractions(
            self.red.conjugate(),
            self.green.conjugate(),
            self.blue.conjugate(),
            self.alpha,
        )
    }

    /// Rotate the hue by the given angle, keeping HSV saturation, value, and
    /// alpha.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn rotate(&self, angle: Angle) -> Self {
        let [hue, saturation, value] = self.to_hsv();
        let hue = Angle::new(hue) + angle;
        let [r, g, b] = hsv_to_rgb(&[hue.turns(), saturation, value]);
        Self::new(r, g, b, self.alpha.value())
    }

    /// Rotate the hue by half a turn.
    ///
    /// ```
    /// # use tinct::Color;
    /// let maroon = Color::srgb(0.5, 0.0, 0.0);
    /// assert_eq!(maroon.complement().to_string(), "#008080");
    /// assert_eq!(maroon.complement().complement(), maroon);
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn complement(&self) -> Self {
        self.rotate(Angle::new(0.5))
    }

    /// Increase the HSL saturation by the given amount, clamping the result to
    /// unit range. If relative, the amount is scaled by the current
    /// saturation first.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn saturate(&self, amount: Float, relative: bool) -> Self {
        let [hue, saturation, lightness] = self.to_hsl();
        let saturation = adjust(saturation, amount, relative);
        let [r, g, b] = hsl_to_rgb(&[hue, saturation, lightness]);
        Self::new(r, g, b, self.alpha.value())
    }

    /// Decrease the HSL saturation by the given amount. See
    /// [`Color::saturate`].
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn desaturate(&self, amount: Float, relative: bool) -> Self {
        self.saturate(-amount, relative)
    }

    /// Increase the HSL lightness by the given amount, clamping the result to
    /// unit range. If relative, the amount is scaled by the current lightness
    /// first.
    ///
    /// ```
    /// # use tinct::Color;
    /// let red = Color::srgb(1.0, 0.0, 0.0);
    /// assert_eq!(red.lighten(0.25, false).to_string(), "#ff8080");
    /// assert_eq!(red.darken(0.5, true).to_string(), "#800000");
    /// assert_eq!(red.lighten(1.0, false), Color::srgb(1.0, 1.0, 1.0));
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn lighten(&self, amount: Float, relative: bool) -> Self {
        let [hue, saturation, lightness] = self.to_hsl();
        let lightness = adjust(lightness, amount, relative);
        let [r, g, b] = hsl_to_rgb(&[hue, saturation, lightness]);
        Self::new(r, g, b, self.alpha.value())
    }

    /// Decrease the HSL lightness by the given amount. See [`Color::lighten`].
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn darken(&self, amount: Float, relative: bool) -> Self {
        self.lighten(-amount, relative)
    }

    /// Increase the alpha channel by the given amount, clamping the result to
    /// unit range. If relative, the amount is scaled by the current alpha
    /// first.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn fade_in(&self, amount: Float, relative: bool) -> Self {
        Self::from_fractions(
            self.red,
            self.green,
            self.blue,
            Fraction::saturating(adjust(self.alpha.value(), amount, relative)),
        )
    }

    /// Decrease the alpha channel by the given amount. See
    /// [`Color::fade_in`].
    ///
    /// ```
    /// # use tinct::{Bounded, Color};
    /// let blue = Color::srgb(0.0, 0.0, 1.0);
    /// assert_eq!(blue.fade_out(0.25, false).alpha().value(), 0.75);
    /// assert_eq!(blue.fade_out(2.0, false).alpha().value(), 0.0);
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn fade_out(&self, amount: Float, relative: bool) -> Self {
        self.fade_in(-amount, relative)
    }

    /// Replace the alpha channel with its conjugate.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn negate(&self) -> Self {
        Self::from_fractions(self.red, self.green, self.blue, self.alpha.conjugate())
    }

    /// Mix this color with the other color.
    ///
    /// Each channel is interpolated linearly, with a weight of 0 producing
    /// this color's channels and a weight of 1 the other color's channels.
    /// The alpha channels combine as compound opacity
    /// `1 - (1 - a1)^(1 - w) · (1 - a2)^w`, so two opaque colors always mix
    /// to an opaque color.
    ///
    /// ```
    /// # use tinct::{Bounded, Color, Fraction};
    /// let red = Color::srgb(1.0, 0.0, 0.0);
    /// let blue = Color::srgb(0.0, 0.0, 1.0);
    /// let purple = red.mix(&blue, Fraction::HALF);
    /// assert_eq!(purple.to_string(), "#800080");
    /// assert_eq!(purple.alpha(), Fraction::ONE);
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn mix(&self, other: &Self, weight: Fraction) -> Self {
        let [r, g, b] = interpolate(&self.rgb(), &other.rgb(), weight.value());
        Self::new(r, g, b, self.mix_alpha(other, weight))
    }

    /// Blur this color with the other color.
    ///
    /// This method is the same as [`Color::mix`], except that it interpolates
    /// linear light instead of gamma-corrected channels. Blurring produces
    /// brighter results than mixing.
    ///
    /// ```
    /// # use tinct::{Color, Fraction};
    /// let red = Color::srgb(1.0, 0.0, 0.0);
    /// let lime = Color::srgb(0.0, 1.0, 0.0);
    /// assert_eq!(red.mix(&lime, Fraction::HALF).to_string(), "#808000");
    /// assert_eq!(red.blur(&lime, Fraction::HALF).to_string(), "#bcbc00");
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn blur(&self, other: &Self, weight: Fraction) -> Self {
        let [r, g, b] = linear_rgb_to_rgb(&interpolate(
            &rgb_to_linear_rgb(&self.rgb()),
            &rgb_to_linear_rgb(&other.rgb()),
            weight.value(),
        ));
        Self::new(r, g, b, self.mix_alpha(other, weight))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine this color's relative luminance per WCAG 2.
    ///
    /// The alpha channel is ignored, i.e., the color is treated as opaque.
    pub fn relative_luminance(&self) -> Float {
        to_relative_luminance(&self.rgb())
    }

    /// Determine the contrast ratio between this and the other color per
    /// WCAG 2.
    ///
    /// The result ranges from 1 for identical luminance to 21 for black and
    /// white. It does not depend on the order of colors.
    ///
    /// ```
    /// # use tinct::Color;
    /// let black = Color::srgb(0.0, 0.0, 0.0);
    /// let white = Color::srgb(1.0, 1.0, 1.0);
    /// assert!((black.contrast_ratio(&white) - 21.0).abs() < 1e-9);
    /// ```
    pub fn contrast_ratio(&self, other: &Self) -> Float {
        to_contrast_ratio(self.relative_luminance(), other.relative_luminance())
    }

    /// Determine whether this color is light, i.e., black text has more
    /// contrast against it than white text.
    pub fn is_light(&self) -> bool {
        EQUAL_CONTRAST_LUMINANCE < self.relative_luminance()
    }

    /// Determine whether black or white text has more contrast against this
    /// color as background.
    ///
    /// ```
    /// # use tinct::Color;
    /// # use tinct::error::ParseColorError;
    /// let yellow: Color = "yellow".parse()?;
    /// assert_eq!(yellow.text_color().to_string(), "#000000");
    /// let navy: Color = "navy".parse()?;
    /// assert_eq!(navy.text_color().to_string(), "#ffffff");
    /// # Ok::<(), ParseColorError>(())
    /// ```
    pub fn text_color(&self) -> Self {
        if self.is_light() {
            BLACK
        } else {
            WHITE
        }
    }

    /// Look up the name of this color.
    ///
    /// This method formats the color in hashed hexadecimal notation and looks
    /// up the result in the table of CSS named colors. Where several names
    /// denote the same color, such as `aqua` and `cyan`, the first name in the
    /// table wins. Translucent colors have no name.
    ///
    /// ```
    /// # use tinct::Color;
    /// # use tinct::error::ParseColorError;
    /// let green: Color = "#98FB98".parse()?;
    /// assert_eq!(green.name(), Some("palegreen"));
    /// assert_eq!(Color::from_24bit(0x12, 0x34, 0x56).name(), None);
    /// # Ok::<(), ParseColorError>(())
    /// ```
    pub fn name(&self) -> Option<&'static str> {
        named::reverse_lookup(&self.to_string())
    }

    /// Format this color in the given color space's CSS function notation.
    pub fn to_string_in(&self, space: ColorSpace) -> String {
        self.display(space).to_string()
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its hashed hexadecimal representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

// --------------------------------------------------------------------------------------------------------------------

// Use separate block, so that methods are not exposed to Python.
// Use cfg(), so that methods are not documented again.
#[cfg(not(feature = "pyffi"))]
impl Color {
    /// Instantiate a new opaque color with the given red, green, and blue
    /// channels.
    ///
    /// ```
    /// # use tinct::Color;
    /// let fire_brick = Color::srgb(178.0/255.0, 34.0/255.0, 34.0/255.0);
    /// assert_eq!(fire_brick.to_string(), "#b22222");
    /// ```
    pub fn srgb(red: impl Into<Float>, green: impl Into<Float>, blue: impl Into<Float>) -> Self {
        Self::new(red.into(), green.into(), blue.into(), 1.0)
    }
}

impl Color {
    /// Instantiate a color from already normalized parts. This is an
    /// implementation detail of the [`rgb`] macro.
    #[doc(hidden)]
    pub const fn from_normalized_parts(
        rgb: [Float; 3],
        max: Float,
        min: Float,
        chroma: Float,
    ) -> Self {
        let [red, green, blue] = rgb;
        Self {
            red: Fraction(red),
            green: Fraction(green),
            blue: Fraction(blue),
            alpha: Fraction(1.0),
            max,
            min,
            chroma,
        }
    }

    fn from_fractions(red: Fraction, green: Fraction, blue: Fraction, alpha: Fraction) -> Self {
        let (r, g, b) = (red.value(), green.value(), blue.value());
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        Self {
            red,
            green,
            blue,
            alpha,
            max,
            min,
            chroma: max - min,
        }
    }

    fn pick_named() -> Self {
        named::table()
            .choose(&mut rand::rng())
            .and_then(|(_, hex)| Color::from_str(hex).ok())
            .unwrap_or_default()
    }

    #[inline]
    fn rgb(&self) -> [Float; 3] {
        [self.red.value(), self.green.value(), self.blue.value()]
    }

    fn mix_alpha(&self, other: &Self, weight: Fraction) -> Float {
        let w = weight.value();
        let a1 = self.alpha.value();
        let a2 = other.alpha.value();
        1.0 - (1.0 - a1).powf(1.0 - w) * (1.0 - a2).powf(w)
    }

    /// Determine whether this color is fully transparent for the purposes of
    /// equality testing and hashing.
    fn is_clear(&self) -> bool {
        self.alpha.value() == 0.0
    }

    /// Mix all colors evenly.
    /// <i class=rust-only>Rust only!</i>
    ///
    /// Each channel is the arithmetic mean of the colors' channels. The alpha
    /// channel is the [compound opacity](Color::compound_opacity). Folding
    /// [`Color::mix`] over the colors is not the same, since that weighs
    /// earlier colors less. This function returns `None` if there are no
    /// colors.
    ///
    /// ```
    /// # use tinct::Color;
    /// let red = Color::srgb(1.0, 0.0, 0.0);
    /// let lime = Color::srgb(0.0, 1.0, 0.0);
    /// let blue = Color::srgb(0.0, 0.0, 1.0);
    /// let gray = Color::mix_all(&[red, lime, blue]).unwrap();
    /// assert_eq!(gray.to_string(), "#555555");
    /// assert_eq!(Color::mix_all(&[]), None);
    /// ```
    pub fn mix_all(colors: &[Color]) -> Option<Self> {
        let [r, g, b] = mean(colors.iter().map(Color::rgb))?;
        Some(Self::from_fractions(
            Fraction::saturating(r),
            Fraction::saturating(g),
            Fraction::saturating(b),
            Self::compound_opacity(colors.iter().map(Color::alpha)),
        ))
    }

    /// Blur all colors evenly.
    /// <i class=rust-only>Rust only!</i>
    ///
    /// This function is the same as [`Color::mix_all`], except that it
    /// averages linear light instead of gamma-corrected channels.
    pub fn blur_all(colors: &[Color]) -> Option<Self> {
        let linear = mean(colors.iter().map(|c| rgb_to_linear_rgb(&c.rgb())))?;
        let [r, g, b] = linear_rgb_to_rgb(&linear);
        Some(Self::from_fractions(
            Fraction::saturating(r),
            Fraction::saturating(g),
            Fraction::saturating(b),
            Self::compound_opacity(colors.iter().map(Color::alpha)),
        ))
    }

    /// Compute the compound opacity of layering translucent colors.
    /// <i class=rust-only>Rust only!</i>
    ///
    /// The result is `1 - Π(1 - aᵢ)`, which stays in unit range. Without
    /// layers, the result is fully transparent.
    ///
    /// ```
    /// # use tinct::{Bounded, Color, Fraction};
    /// let half = Fraction::HALF;
    /// assert_eq!(Color::compound_opacity([half, half]).value(), 0.75);
    /// assert_eq!(Color::compound_opacity([half, Fraction::ONE]), Fraction::ONE);
    /// assert_eq!(Color::compound_opacity(Vec::new()), Fraction::ZERO);
    /// ```
    pub fn compound_opacity(alphas: impl IntoIterator<Item = Fraction>) -> Fraction {
        let transparency: Float = alphas.into_iter().map(|a| 1.0 - a.value()).product();
        Fraction::saturating(1.0 - transparency)
    }

    /// Create a formatter for this color in the given color space's CSS
    /// function notation. <i class=rust-only>Rust only!</i>
    ///
    /// The formatter writes RGB channels as integers between 0 and 255, hues
    /// in degrees, and all other coordinates as percentages. It respects the
    /// precision for all but RGB channels, defaulting to 3 decimals, and
    /// never writes trailing zeros. Alpha is included only if the color is
    /// translucent.
    ///
    /// ```
    /// # use tinct::{Color, ColorSpace};
    /// # use tinct::error::ParseColorError;
    /// let color: Color = "#ff800080".parse()?;
    /// assert_eq!(
    ///     color.display(ColorSpace::Rgb).to_string(),
    ///     "rgb(255 128 0 / 0.502)"
    /// );
    /// assert_eq!(
    ///     format!("{:.1}", color.display(ColorSpace::Hsl)),
    ///     "hsl(30.1deg 100% 50% / 0.5)"
    /// );
    /// assert_eq!(
    ///     Color::srgb(0.0, 0.5, 1.0).to_string_in(ColorSpace::Cmyk),
    ///     "cmyk(100% 50% 0% 0%)"
    /// );
    /// # Ok::<(), ParseColorError>(())
    /// ```
    pub fn display(&self, space: ColorSpace) -> ColorDisplay<'_> {
        ColorDisplay { color: self, space }
    }
}

/// Adjust the value by the amount, which is scaled by the value first if
/// relative. The result is clamped to unit range.
fn adjust(value: Float, amount: Float, relative: bool) -> Float {
    let delta = if relative { amount * value } else { amount };
    Fraction::saturating(value + delta).value()
}

/// Interpolate between two sets of coordinates.
fn interpolate(from: &[Float; 3], to: &[Float; 3], weight: Float) -> [Float; 3] {
    let [f1, f2, f3] = *from;
    let [t1, t2, t3] = *to;
    [
        f1.mul_add(1.0 - weight, t1 * weight),
        f2.mul_add(1.0 - weight, t2 * weight),
        f3.mul_add(1.0 - weight, t3 * weight),
    ]
}

/// Compute the arithmetic mean of the coordinates, returning `None` if there
/// are none.
fn mean(coordinates: impl Iterator<Item = [Float; 3]>) -> Option<[Float; 3]> {
    let (count, [s1, s2, s3]) = coordinates.fold((0_usize, [0.0; 3]), |(count, sum), c| {
        (count + 1, [sum[0] + c[0], sum[1] + c[1], sum[2] + c[2]])
    });

    if count == 0 {
        None
    } else {
        let n = count as Float;
        Some([s1 / n, s2 / n, s3 / n])
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A formatter for a color in some color space's CSS function notation.
/// <i class=rust-only>Rust only!</i>
///
/// This struct is created by [`Color::display`].
#[derive(Debug)]
pub struct ColorDisplay<'a> {
    color: &'a Color,
    space: ColorSpace,
}

impl std::fmt::Display for ColorDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let alpha = self.color.alpha.value();
        match self.space {
            ColorSpace::Rgb => format(self.space, &self.color.rgb(), alpha, f),
            ColorSpace::Hsv => format(self.space, &self.color.to_hsv(), alpha, f),
            ColorSpace::Hsl => format(self.space, &self.color.to_hsl(), alpha, f),
            ColorSpace::Hwb => format(self.space, &self.color.to_hwb(), alpha, f),
            ColorSpace::Cmyk => format(self.space, &self.color.to_cmyk(), alpha, f),
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

impl Default for Color {
    /// Create an instance of the default color, which is transparent black.
    ///
    /// ```
    /// # use tinct::{Color, Fraction};
    /// let default = Color::default();
    /// assert_eq!(default.alpha(), Fraction::ZERO);
    /// assert_eq!(default.to_string(), "#00000000");
    /// ```
    #[inline]
    fn default() -> Self {
        Self::from_fractions(Fraction::ZERO, Fraction::ZERO, Fraction::ZERO, Fraction::ZERO)
    }
}

impl std::str::FromStr for Color {
    type Err = ParseColorError;

    /// Instantiate a color from its string representation.
    ///
    /// Before parsing the string slice, this method trims any leading and
    /// trailing white space. An empty string is transparent black.
    ///
    /// This method recognizes the following formats:
    ///
    ///   * The *hashed hexadecimal notation* with 3, 4, 6, or 8 digits, e.g.,
    ///     `#e4f` or `#66aa4433`. The short forms repeat every digit, i.e., the
    ///     red channel of `#123` is 0x11/0xff. Digits are case-insensitive.
    ///   * The *functional notation* with `rgb()`, `hsv()`, `hsl()`,
    ///     `hwb()`, and `cmyk()` or the same names with an `a` suffix. The
    ///     arguments either are separated by commas, with alpha as optional
    ///     last argument, or by white space, with alpha following a slash.
    ///     RGB channels are numbers between 0 and 255 or percentages. Hues are
    ///     numbers in degrees or have a `deg`, `grad`, `rad`, or `turn` unit.
    ///     Saturation, value, lightness, whiteness, and blackness must be
    ///     percentages. CMYK coordinates and alpha are numbers in unit range
    ///     or percentages.
    ///   * The 148 *named colors* of CSS, e.g., `rebeccapurple`. Names are
    ///     case-sensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tinct::Color;
    /// # use tinct::error::{FormatError, ParseColorError};
    /// use std::str::FromStr;
    ///
    /// assert_eq!(Color::from_str("#e4f")?.to_string(), "#ee44ff");
    /// assert_eq!(Color::from_str("#6a43")?.to_string(), "#66aa4433");
    ///
    /// let purple: Color = str::parse("rgb(20%, 30, 40%, .5)")?;
    /// assert_eq!(purple.to_string(), "#331e6680");
    ///
    /// assert_eq!(
    ///     Color::from_str("hsl(0,0,0)"),
    ///     Err(ParseColorError::Format(FormatError::ExpectedPercentage))
    /// );
    /// assert!(Color::from_str("blanco").unwrap_err().is_unknown_name());
    /// # Ok::<(), ParseColorError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [r, g, b, a] = parse(s)?;
        Ok(Self::new(r, g, b, a))
    }
}

impl TryFrom<&str> for Color {
    type Error = ParseColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_str(value.as_str())
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.is_clear().hash(state);
    }
}

impl PartialEq for Color {
    /// Determine whether this color equals the other color.
    ///
    /// Two fully transparent colors are equal. Otherwise, the channels must
    /// be equal within a small tolerance. See
    /// [`Color`](struct.Color.html#equality-testing-and-hashing).
    fn eq(&self, other: &Self) -> bool {
        match (self.is_clear(), other.is_clear()) {
            (true, true) => true,
            (false, false) => channels_close(&self.to_channels(), &other.to_channels()),
            _ => false,
        }
    }
}

impl Eq for Color {}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b, a] = self.to_channels();
        f.write_fmt(format_args!("Color([{}, {}, {}, {}])", r, g, b, a))
    }
}

impl std::fmt::Display for Color {
    /// Format this color in hashed hexadecimal notation.
    ///
    /// Each channel is scaled by 255 and rounded. The alpha channel is
    /// included only if the color is translucent.
    ///
    /// ```
    /// # use tinct::Color;
    /// assert_eq!(Color::srgb(0.0, 0.5, 1.0).to_string(), "#0080ff");
    /// assert_eq!(Color::new(0.0, 0.5, 1.0, 0.5).to_string(), "#0080ff80");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_hashed(&self.to_channels(), f)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Color;
    use crate::error::{FormatError, ParseColorError};
    use crate::{
        assert_close_enough, assert_same_color, Angle, Bounded, ColorSpace, Float, Fraction,
    };
    use std::collections::HashSet;

    #[test]
    fn test_literals() -> Result<(), ParseColorError> {
        assert_eq!("#e4f".parse::<Color>()?.to_string(), "#ee44ff");
        assert_eq!("#6a43".parse::<Color>()?.to_string(), "#66aa4433");
        assert_eq!(
            "rgb(20%, 30, 40%, .5)".parse::<Color>()?.to_string(),
            "#331e6680"
        );
        assert_eq!(
            "hsl(0,0,0)".parse::<Color>(),
            Err(ParseColorError::Format(FormatError::ExpectedPercentage))
        );
        assert_eq!(Color::srgb(0.5, 0.0, 0.0).complement().to_string(), "#008080");
        assert_eq!("black".parse::<Color>()?.to_string(), "#000000");
        assert_eq!(
            "blanco".parse::<Color>(),
            Err(ParseColorError::UnknownName("blanco".to_string()))
        );
        assert_eq!("#98FB98".parse::<Color>()?.name(), Some("palegreen"));
        Ok(())
    }

    #[test]
    fn test_construction() -> Result<(), ParseColorError> {
        let color = Color::new(Float::NAN, 2.0, 0.5, -1.0);
        assert_eq!(color.to_channels(), [0.0, 1.0, 0.5, 0.0]);

        let color = Color::from_rgb(255.0, 127.5, 0.0, Fraction::ONE);
        assert_eq!(color.to_channels(), [1.0, 0.5, 0.0, 1.0]);

        assert_eq!(crate::rgb!(0xff, 0x80, 0x00), Color::from_24bit(0xff, 0x80, 0x00));
        assert_eq!(Color::default(), Color::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(Color::try_from("")?, Color::default());
        assert_eq!(Color::try_from("   ".to_string())?, Color::default());
        Ok(())
    }

    #[test]
    fn test_views() {
        let orange = Color::srgb(1.0, 0.5, 0.0);
        assert_eq!(orange.hue(), Angle::from_degrees(30.0));
        assert_eq!(orange.hsv_saturation(), 1.0);
        assert_eq!(orange.value(), 1.0);
        assert_eq!(orange.hsl_saturation(), 1.0);
        assert_eq!(orange.lightness(), 0.5);
        assert_eq!(orange.whiteness(), 0.0);
        assert_eq!(orange.blackness(), 0.0);
        assert_eq!(orange.cyan(), 0.0);
        assert_eq!(orange.magenta(), 0.5);
        assert_eq!(orange.yellow(), 1.0);
        assert_eq!(orange.key(), 0.0);

        let gray = Color::srgb(0.25, 0.25, 0.25);
        assert_eq!(gray.hue(), Angle::new(0.0));
        assert_eq!(gray.hsv_saturation(), 0.0);
        assert_eq!(gray.hsl_saturation(), 0.0);
        assert_eq!(gray.to_hwb(), [0.0, 0.25, 0.75]);

        let black = Color::srgb(0.0, 0.0, 0.0);
        assert_eq!(black.to_cmyk(), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(black.to_24bit(), [0, 0, 0]);

        // Ties go to red before green before blue.
        let yellow = Color::srgb(1.0, 1.0, 0.0);
        assert_eq!(yellow.hue(), Angle::from_degrees(60.0));
        let cyan = Color::srgb(0.0, 1.0, 1.0);
        assert_eq!(cyan.hue(), Angle::from_degrees(180.0));
    }

    #[test]
    fn test_factories() {
        let hue = Angle::from_degrees(370.0);
        let same_hue = Angle::from_degrees(10.0);
        let (s, l) = (Fraction::saturating(0.6), Fraction::saturating(0.4));
        assert_same_color!(
            Color::from_hsl(hue, s, l, Fraction::ONE),
            Color::from_hsl(same_hue, s, l, Fraction::ONE)
        );

        let red = Color::srgb(1.0, 0.0, 0.0);
        let zero = Angle::new(0.0);
        assert_same_color!(
            Color::from_hsv(zero, Fraction::ONE, Fraction::ONE, Fraction::ONE),
            red
        );
        assert_same_color!(
            Color::from_hsl(zero, Fraction::ONE, Fraction::HALF, Fraction::ONE),
            red
        );
        assert_same_color!(
            Color::from_hwb(zero, Fraction::ZERO, Fraction::ZERO, Fraction::ONE),
            red
        );
        assert_same_color!(
            Color::from_cmyk(
                Fraction::ZERO,
                Fraction::ONE,
                Fraction::ONE,
                Fraction::ZERO,
                Fraction::ONE
            ),
            red
        );

        // Whiteness plus blackness beyond one still yields valid channels.
        let muddy = Color::from_hwb(
            Angle::from_degrees(200.0),
            Fraction::saturating(0.8),
            Fraction::saturating(0.8),
            Fraction::ONE,
        );
        for channel in muddy.to_channels() {
            assert!((0.0..=1.0).contains(&channel));
        }
    }

    #[test]
    fn test_random() {
        for _ in 0..100 {
            let color = Color::random(false);
            assert_eq!(color.alpha(), Fraction::ONE);
            assert!((0.0..=1.0).contains(&color.red().value()));

            let color = Color::random(true);
            assert!((0.0..=1.0).contains(&color.alpha().value()));

            assert!(Color::random_name().name().is_some());
        }
    }

    #[test]
    fn test_transforms() {
        let color = Color::new(0.2, 0.4, 0.6, 0.8);
        assert_same_color!(color.invert(), Color::new(0.8, 0.6, 0.4, 0.8));
        assert_same_color!(color.invert().invert(), color);
        assert_same_color!(color.negate(), Color::new(0.2, 0.4, 0.6, 0.2));
        assert_same_color!(color.complement().complement(), color);
        assert_same_color!(color.rotate(Angle::new(0.25)).rotate(Angle::new(0.75)), color);

        let red = Color::srgb(1.0, 0.0, 0.0);
        assert_same_color!(red.desaturate(1.0, false), Color::srgb(0.5, 0.5, 0.5));
        assert_same_color!(red.desaturate(0.5, true), Color::srgb(0.75, 0.25, 0.25));
        assert_same_color!(red.saturate(0.5, false), red);
        assert_same_color!(red.darken(0.25, false), Color::srgb(0.5, 0.0, 0.0));
        assert_same_color!(red.darken(1.0, true), Color::srgb(0.0, 0.0, 0.0));

        let faded = red.fade_out(0.5, false);
        assert_eq!(faded.alpha(), Fraction::HALF);
        assert_eq!(faded.fade_in(1.0, true).alpha(), Fraction::ONE);
    }

    #[test]
    fn test_mix() {
        let red = Color::srgb(1.0, 0.0, 0.0);
        let blue = Color::new(0.0, 0.0, 1.0, 0.5);

        assert_same_color!(red.mix(&blue, Fraction::ZERO), red);
        assert_same_color!(red.mix(&blue, Fraction::ONE), blue);

        let clear = Color::new(0.0, 0.0, 1.0, 0.0);
        let half = Color::new(1.0, 0.0, 0.0, 0.5).mix(&clear, Fraction::HALF);
        assert_close_enough!(half.alpha().value(), 1.0 - (0.5 as Float).sqrt());

        // Folding pairwise mixes is not the same as mixing evenly.
        let lime = Color::srgb(0.0, 1.0, 0.0);
        let blue = Color::srgb(0.0, 0.0, 1.0);
        let folded = red.mix(&lime, Fraction::HALF).mix(&blue, Fraction::HALF);
        let even = Color::mix_all(&[red, lime, blue]);
        assert_ne!(Some(folded), even);

        let blurred = Color::blur_all(&[red, lime]);
        assert_eq!(blurred, Some(red.blur(&lime, Fraction::HALF)));
        assert_eq!(Color::blur_all(&[]), None);

        let translucent = Color::new(1.0, 0.0, 0.0, 0.5);
        let mixed = Color::mix_all(&[translucent, translucent, translucent]);
        assert_eq!(mixed.map(|c| c.alpha().value()), Some(0.875));
    }

    #[test]
    fn test_contrast() {
        let black = Color::srgb(0.0, 0.0, 0.0);
        let white = Color::srgb(1.0, 1.0, 1.0);
        assert_eq!(black.relative_luminance(), 0.0);
        assert_close_enough!(white.relative_luminance(), 1.0);
        assert_close_enough!(black.contrast_ratio(&white), 21.0);
        assert_close_enough!(white.contrast_ratio(&black), 21.0);
        assert_eq!(white.contrast_ratio(&white), 1.0);

        assert!(white.is_light());
        assert!(!black.is_light());
        assert_eq!(white.text_color(), black);
        assert_eq!(black.text_color(), white);
    }

    #[test]
    fn test_equality_and_hashing() {
        let c1 = Color::new(0.1, 0.2, 0.3, 0.0);
        let c2 = Color::new(0.9, 0.8, 0.7, 0.0);
        assert_eq!(c1, c2);
        assert_ne!(Color::new(0.1, 0.2, 0.3, 1.0), Color::new(0.1, 0.2, 0.31, 1.0));
        assert_eq!(
            Color::srgb(0.1 + 0.2, 0.5, 0.5),
            Color::srgb(0.3, 0.5, 0.5)
        );

        // Values on either side of a 14-digit rounding boundary.
        let red = Color::srgb(0.2179988949242554, 0.6, 0.9);
        assert_eq!(red, Color::srgb(0.21799889492425495, 0.6, 0.9));
        assert_eq!(red.complement().complement(), red);
        let (half, one) = (Fraction::HALF, Fraction::ONE);
        assert_eq!(
            Color::from_hsl(Angle::from_degrees(370.0), half, half, one),
            Color::from_hsl(Angle::from_degrees(10.0), half, half, one)
        );

        // Only an alpha of exactly zero is fully transparent.
        let faint = Color::new(0.0, 0.0, 0.0, 1e-15);
        assert_ne!(faint, Color::default());
        assert_eq!(faint, Color::new(0.0, 0.0, 0.0, 2e-15));

        let mut set = HashSet::new();
        set.insert(c1);
        set.insert(c2);
        set.insert(Color::srgb(0.1 + 0.2, 0.5, 0.5));
        set.insert(Color::srgb(0.3, 0.5, 0.5));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_format() -> Result<(), ParseColorError> {
        let color: Color = "#ff8000".parse()?;
        assert_eq!(color.to_string_in(ColorSpace::Rgb), "rgb(255 128 0)");
        assert_eq!(color.to_string_in(ColorSpace::Hsv), "hsv(30.118deg 100% 100%)");
        assert_eq!(color.to_string_in(ColorSpace::Hwb), "hwb(30.118deg 0% 0%)");
        assert_eq!(color.to_string_in(ColorSpace::Cmyk), "cmyk(0% 49.804% 100% 0%)");
        assert_eq!(
            format!("{:.0}", color.display(ColorSpace::Hsl)),
            "hsl(30deg 100% 50%)"
        );

        let translucent = Color::new(0.0, 0.0, 1.0, 0.25);
        assert_eq!(translucent.to_string_in(ColorSpace::Rgb), "rgb(0 0 255 / 0.25)");
        assert_eq!(translucent.to_string(), "#0000ff40");
        assert_eq!(translucent.name(), None);
        Ok(())
    }

    #[test]
    fn test_round_trip() -> Result<(), ParseColorError> {
        let color = Color::new(0.2, 0.4, 0.6, 0.8);
        for space in [
            ColorSpace::Hsv,
            ColorSpace::Hsl,
            ColorSpace::Hwb,
            ColorSpace::Cmyk,
        ] {
            let s = format!("{:.10}", color.display(space));
            let parsed: Color = s.parse()?;
            for (c1, c2) in parsed.to_channels().iter().zip(color.to_channels()) {
                assert!((c1 - c2).abs() < 1e-9, "{} does not round trip", s);
            }
        }
        Ok(())
    }
}
