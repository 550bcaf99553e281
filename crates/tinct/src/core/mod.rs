mod contrast;
mod conversion;
mod equality;
mod math;
mod space;
mod string;

// contrast
pub(crate) use contrast::{to_contrast_ratio, to_relative_luminance, EQUAL_CONTRAST_LUMINANCE};

// conversion
pub(crate) use conversion::{
    cmyk_to_rgb, from_24bit, hsl_to_rgb, hsv_to_rgb, hwb_to_rgb, linear_rgb_to_rgb,
    rgb_to_cmyk, rgb_to_hsl, rgb_to_hsv, rgb_to_hue, rgb_to_hwb, rgb_to_linear_rgb, to_24bit,
};

// equality
#[cfg(feature = "pyffi")]
pub use equality::close_enough;
pub use equality::to_eq_bits;
pub(crate) use equality::channels_close;

// math
pub(crate) use math::{write_rounded, FloatExt};

// space
pub use space::ColorSpace;

// string
pub(crate) use string::{format, format_hashed, parse};
