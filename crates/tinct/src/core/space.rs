#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// The enumeration of color spaces a color can be viewed in.
///
/// # RGB
///
/// Every [`Color`](crate::Color) stores its red, green, and blue channels as
/// fractions in unit range, together with an alpha channel for opacity. All
/// other color spaces are derived from these channels on demand.
///
/// # HSV, HSL, and HWB
///
/// The three cylindrical color spaces share the same hue, measured in turns
/// and derived from whichever RGB channel is largest. They differ in the two
/// other coordinates:
///
/// | Color space | Coordinate 2 | Coordinate 3 |
/// | ----------- | :----------: | :----------: |
/// | HSV         | saturation   | value        |
/// | HSL         | saturation   | lightness    |
/// | HWB         | whiteness    | blackness    |
///
/// HSV and HSL both call their second coordinate saturation, but the two
/// quantities are not the same: HSV divides chroma by the value, whereas HSL
/// divides chroma by `1 - |2L - 1|`.
///
/// # CMYK
///
/// CMYK is the subtractive model of print. It has four coordinates: cyan,
/// magenta, and yellow relative to the non-black portion, plus the key (black).
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "tinct")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Rgb,
    Hsv,
    Hsl,
    Hwb,
    Cmyk,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorSpace {
    /// Determine whether this color space has a hue coordinate.
    pub const fn is_polar(&self) -> bool {
        matches!(*self, Self::Hsv | Self::Hsl | Self::Hwb)
    }

    /// Determine the number of coordinates, not counting alpha.
    pub const fn arity(&self) -> usize {
        match *self {
            Self::Cmyk => 4,
            _ => 3,
        }
    }

    /// Get the CSS function name for this color space.
    pub const fn css_name(&self) -> &'static str {
        match *self {
            Self::Rgb => "rgb",
            Self::Hsv => "hsv",
            Self::Hsl => "hsl",
            Self::Hwb => "hwb",
            Self::Cmyk => "cmyk",
        }
    }

    /// Create a human-readable representation for this color space. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl ColorSpace {
    /// Look up the color space for a CSS function name.
    ///
    /// Each color space is also known by its name with an `a` suffix, e.g.,
    /// `rgba` for `rgb`. The lookup ignores ASCII case.
    pub(crate) fn from_css_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        let name = name.strip_suffix('a').unwrap_or(&name);

        [Self::Rgb, Self::Hsv, Self::Hsl, Self::Hwb, Self::Cmyk]
            .into_iter()
            .find(|space| space.css_name() == name)
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ColorSpace::*;

        let s = match self {
            Rgb => "RGB",
            Hsv => "HSV",
            Hsl => "HSL",
            Hwb => "HWB",
            Cmyk => "CMYK",
        };

        f.write_str(s)
    }
}
