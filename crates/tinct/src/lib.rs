//! # Tinct
//!
//! Tinct implements immutable colors with HSV, HSL, HWB, and CMYK views as
//! well as a CSS color-string grammar.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Building with the `pyffi` feature adds Python integration. "
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**. "
)]
//!
//!
//! ## 1. Overview
//!
//! Tinct's main abstractions are:
//!
//!   * [`Color`] implements **immutable colors** with red, green, blue, and
//!     alpha channels. All other color spaces enumerated by [`ColorSpace`] are
//!     derived on demand. Its methods expose most of tinct's functionality,
//!     including inversion, hue rotation, adjustment of saturation, lightness,
//!     and opacity, mixing and blurring, as well as luminance and contrast.
//!   * [`Fraction`] and [`Percentage`] are **bounded scalars** with checked
//!     and saturating arithmetic through the [`Bounded`] trait.
//!   * [`Angle`] is a **circular measure** normalized to one turn, with
//!     conversions between the [`AngleUnit`]s of CSS and trigonometry.
//!   * Parsing colors with [`str::parse`] and formatting colors with
//!     [`Color::display`] implement the **color-string grammar**, i.e., hashed
//!     hexadecimal notation, the `rgb()`, `hsv()`, `hsl()`, `hwb()`, and
//!     `cmyk()` functions, and the [CSS named colors](named_colors).
//!
//! Errors live in the [`error`] module.
//!
//!
//! ## 2. Colors, Strings, and Back
//!
//! ```
//! # use tinct::{Angle, Color, ColorSpace, Fraction};
//! # use tinct::error::ParseColorError;
//! let coral: Color = "coral".parse()?;
//! assert_eq!(coral.to_string(), "#ff7f50");
//!
//! let shifted = coral.rotate(Angle::from_degrees(180.0));
//! assert_eq!(shifted.to_string_in(ColorSpace::Rgb), "rgb(80 208 255)");
//!
//! let translucent: Color = "hsl(16deg 100% 65.7% / 50%)".parse()?;
//! let mixed = coral.mix(&translucent, Fraction::HALF);
//! assert!(mixed.alpha() > Fraction::HALF);
//! # Ok::<(), ParseColorError>(())
//! ```
//!
//!
//! ## 3. Feature Flags
//!
//! Tinct supports two feature flags:
//!
//!   - `f64` selects the eponymous type as floating point type [`Float`] and
//!     `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as [`Bits`].
//!     This feature is enabled by default.
//!   - `pyffi` enables the Python integration through PyO3.
//!
//! Throughout the API documentation, items that are only available in Rust are
//! decorated with <i class=rust-only>Rust only!</i>.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod angle;
mod core;
pub mod error;
mod named;
mod object;
mod ratio;

#[cfg(feature = "pyffi")]
pub use core::close_enough;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use angle::{Angle, AngleUnit};
pub use core::ColorSpace;
pub use named::named_colors;
pub use object::{Color, ColorDisplay};
pub use ratio::{Bounded, Fraction, Percentage};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn tinct(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(close_enough, m)?)?;

    m.add_class::<Angle>()?;
    m.add_class::<AngleUnit>()?;
    m.add_class::<Color>()?;
    m.add_class::<ColorSpace>()?;
    m.add_class::<Fraction>()?;

    Ok(())
}
