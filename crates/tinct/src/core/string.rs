use super::conversion::{cmyk_to_rgb, hsl_to_rgb, hsv_to_rgb, hwb_to_rgb, to_byte};
use super::math::write_rounded;
use crate::error::{FormatError, ParseColorError};
use crate::ratio::parse_number;
use crate::{named, Angle, ColorSpace, Float};

/// Parse a color in hashed hexadecimal format. If successful, this function
/// returns the red, green, blue, and alpha channels as unsigned bytes. It
/// transparently handles single-digit channels and a missing alpha channel.
fn parse_hashed(s: &str) -> Result<[u8; 4], FormatError> {
    let digits = s.strip_prefix('#').ok_or(FormatError::UnknownFormat)?;
    if !matches!(digits.len(), 3 | 4 | 6 | 8) {
        return Err(FormatError::UnexpectedCharacters);
    } else if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(FormatError::MalformedHex);
    }

    let width = if digits.len() <= 4 { 1 } else { 2 };
    let mut channels = [0xff_u8; 4];
    for (index, channel) in channels
        .iter_mut()
        .enumerate()
        .take(digits.len() / width)
    {
        // All digits are ASCII, so byte offsets fall on character boundaries.
        let t = &digits[width * index..width * (index + 1)];
        let n = u8::from_str_radix(t, 16).map_err(|_| FormatError::MalformedHex)?;
        *channel = if width == 1 { 16 * n + n } else { n };
    }

    Ok(channels)
}

/// Convert byte channels to floating point channels.
fn to_channels(bytes: [u8; 4]) -> [Float; 4] {
    let [r, g, b, a] = bytes;
    [
        r as Float / 255.0,
        g as Float / 255.0,
        b as Float / 255.0,
        a as Float / 255.0,
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse an RGB channel, which is a number between 0 and 255 or a percentage.
fn parse_rgb_channel(s: &str) -> Result<Float, FormatError> {
    match s.strip_suffix('%') {
        Some(number) => Ok(parse_number(number)? / 100.0),
        None => Ok(parse_number(s)? / 255.0),
    }
}

/// Parse a hue, which is a bare number in degrees or an angle with CSS unit.
/// The result is in turns.
fn parse_hue(s: &str) -> Result<Float, FormatError> {
    match parse_number(s) {
        Ok(degrees) => Ok(Angle::from_degrees(degrees).turns()),
        Err(_) => Ok(s.parse::<Angle>()?.turns()),
    }
}

/// Parse a mandatory percentage, clamped to unit range.
fn parse_percentage(s: &str) -> Result<Float, FormatError> {
    let number = s.strip_suffix('%').ok_or(FormatError::ExpectedPercentage)?;
    Ok((parse_number(number)? / 100.0).clamp(0.0, 1.0))
}

/// Parse a number in unit range or a percentage, clamped to unit range.
fn parse_fraction(s: &str) -> Result<Float, FormatError> {
    let value = match s.strip_suffix('%') {
        Some(number) => parse_number(number)? / 100.0,
        None => parse_number(s)?,
    };

    Ok(value.clamp(0.0, 1.0))
}

/// Split the body of a color function into coordinates and optional alpha.
///
/// With at least one comma, the body uses legacy syntax with comma-separated
/// coordinates and an optional alpha as last term. Otherwise, it uses modern
/// syntax with whitespace-separated coordinates and an optional alpha after a
/// slash.
fn split_terms(body: &str, arity: usize) -> Result<(Vec<&str>, Option<&str>), FormatError> {
    if body.contains(',') {
        if body.contains('/') {
            return Err(FormatError::MisplacedAlpha);
        }

        let mut terms: Vec<&str> = body.split(',').map(str::trim).collect();
        if terms.iter().any(|t| t.is_empty()) || terms.len() < arity {
            return Err(FormatError::MissingCoordinate);
        } else if arity + 1 < terms.len() {
            return Err(FormatError::TooManyCoordinates);
        }

        let alpha = if terms.len() == arity + 1 {
            terms.pop()
        } else {
            None
        };
        return Ok((terms, alpha));
    }

    let (coordinates, alpha) = match body.split_once('/') {
        Some((coordinates, alpha)) => {
            if alpha.contains('/') {
                return Err(FormatError::MisplacedAlpha);
            }

            let mut iter = alpha.split_whitespace();
            let alpha = iter.next().ok_or(FormatError::MissingCoordinate)?;
            if iter.next().is_some() {
                return Err(FormatError::TooManyCoordinates);
            }
            (coordinates, Some(alpha))
        }
        None => (body, None),
    };

    let terms: Vec<&str> = coordinates.split_whitespace().collect();
    if terms.len() < arity {
        return Err(FormatError::MissingCoordinate);
    } else if arity < terms.len() {
        return Err(FormatError::TooManyCoordinates);
    }

    Ok((terms, alpha))
}

/// Parse a color function, e.g., `rgb(255 0 0 / 50%)` or `hsl(0, 100%, 50%)`.
/// If successful, this function returns the red, green, blue, and alpha
/// channels.
fn parse_function(s: &str) -> Result<[Float; 4], FormatError> {
    let (name, rest) = s.split_once('(').ok_or(FormatError::UnknownFormat)?;
    let space = ColorSpace::from_css_name(name.trim_end()).ok_or(FormatError::UnknownFormat)?;
    let body = rest
        .strip_suffix(')')
        .ok_or(FormatError::NoClosingParenthesis)?;

    let (terms, alpha) = split_terms(body, space.arity())?;
    let alpha = alpha.map(parse_fraction).transpose()?.unwrap_or(1.0);

    let [r, g, b] = match space {
        ColorSpace::Rgb => [
            parse_rgb_channel(terms[0])?,
            parse_rgb_channel(terms[1])?,
            parse_rgb_channel(terms[2])?,
        ],
        ColorSpace::Cmyk => cmyk_to_rgb(&[
            parse_fraction(terms[0])?,
            parse_fraction(terms[1])?,
            parse_fraction(terms[2])?,
            parse_fraction(terms[3])?,
        ]),
        _ => {
            let coordinates = [
                parse_hue(terms[0])?,
                parse_percentage(terms[1])?,
                parse_percentage(terms[2])?,
            ];

            match space {
                ColorSpace::Hsv => hsv_to_rgb(&coordinates),
                ColorSpace::Hsl => hsl_to_rgb(&coordinates),
                _ => hwb_to_rgb(&coordinates),
            }
        }
    };

    Ok([r, g, b, alpha])
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the string into red, green, blue, and alpha channels.
///
/// This function recognizes hashed hexadecimal colors with 3, 4, 6, or 8
/// digits, the `rgb()`, `hsv()`, `hsl()`, `hwb()`, and `cmyk()` functions
/// including the variants with `a` suffix in legacy and modern syntax, and the
/// CSS named colors. Before parsing, it trims leading and trailing white
/// space. An empty string is transparent black.
pub(crate) fn parse(s: &str) -> Result<[Float; 4], ParseColorError> {
    let s = s.trim();

    if s.is_empty() {
        log::trace!("parsing empty string as transparent black");
        Ok([0.0; 4])
    } else if s.starts_with('#') {
        log::trace!("parsing {:?} as hashed hexadecimal", s);
        Ok(to_channels(parse_hashed(s)?))
    } else if s.contains('(') {
        log::trace!("parsing {:?} as color function", s);
        Ok(parse_function(s)?)
    } else {
        log::trace!("parsing {:?} as color name", s);
        match named::lookup(s) {
            Some(hex) => Ok(to_channels(parse_hashed(hex)?)),
            None => {
                log::debug!("{:?} is not a known color name", s);
                Err(ParseColorError::UnknownName(s.to_string()))
            }
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the channels in hashed hexadecimal notation, with the alpha
/// channel only if the color is not opaque.
pub(crate) fn format_hashed(
    channels: &[Float; 4],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let [r, g, b, a] = *channels;
    f.write_fmt(format_args!(
        "#{:02x}{:02x}{:02x}",
        to_byte(r),
        to_byte(g),
        to_byte(b)
    ))?;

    if a < 1.0 {
        f.write_fmt(format_args!("{:02x}", to_byte(a)))?;
    }
    Ok(())
}

/// Format the color as a CSS function.
///
/// The coordinates must belong to the given color space, with hue in turns
/// for polar spaces. This function writes RGB channels as integers between 0
/// and 255, hues in degrees, and all other coordinates as percentages. It
/// respects the formatter's precision for all but the RGB channels,
/// defaulting to 3 digits past the decimal, and never writes trailing zeros.
/// It only includes the alpha channel if the color is not opaque.
pub(crate) fn format(
    space: ColorSpace,
    coordinates: &[Float],
    alpha: Float,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let precision = f.precision().unwrap_or(3);

    f.write_str(space.css_name())?;
    f.write_str("(")?;

    for (index, coordinate) in coordinates.iter().enumerate() {
        if 0 < index {
            f.write_str(" ")?;
        }

        if space == ColorSpace::Rgb {
            f.write_fmt(format_args!("{}", to_byte(*coordinate)))?;
        } else if space.is_polar() && index == 0 {
            write_rounded(coordinate * 360.0, precision, f)?;
            f.write_str("deg")?;
        } else {
            write_rounded(coordinate * 100.0, precision, f)?;
            f.write_str("%")?;
        }
    }

    if alpha < 1.0 {
        f.write_str(" / ")?;
        write_rounded(alpha, precision, f)?;
    }

    f.write_str(")")
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse, parse_function, parse_hashed, split_terms};
    use crate::core::channels_close;
    use crate::error::{FormatError, ParseColorError};
    use crate::Float;

    fn assert_channels(actual: Result<[Float; 4], FormatError>, expected: [Float; 4]) {
        let actual = actual.expect("color function should parse");
        assert!(
            channels_close(&actual, &expected),
            "channels differ:\n{:?}\n{:?}",
            actual,
            expected
        );
    }

    #[test]
    fn test_parse_hashed() -> Result<(), FormatError> {
        assert_eq!(parse_hashed("#123")?, [0x11_u8, 0x22, 0x33, 0xff]);
        assert_eq!(parse_hashed("#1234")?, [0x11_u8, 0x22, 0x33, 0x44]);
        assert_eq!(parse_hashed("#112233")?, [0x11_u8, 0x22, 0x33, 0xff]);
        assert_eq!(parse_hashed("#11223344")?, [0x11_u8, 0x22, 0x33, 0x44]);
        assert_eq!(parse_hashed("#AbCdEf")?, [0xab_u8, 0xcd, 0xef, 0xff]);
        assert_eq!(parse_hashed("fff"), Err(FormatError::UnknownFormat));
        assert_eq!(parse_hashed("#ff"), Err(FormatError::UnexpectedCharacters));
        assert_eq!(parse_hashed("#fffff"), Err(FormatError::UnexpectedCharacters));
        assert_eq!(parse_hashed("#💩00"), Err(FormatError::MalformedHex));
        assert_eq!(parse_hashed("#0g0"), Err(FormatError::MalformedHex));
        assert_eq!(parse_hashed("#+1+1+1"), Err(FormatError::MalformedHex));

        Ok(())
    }

    #[test]
    fn test_split_terms() {
        assert_eq!(
            split_terms(" 1,2 , 3 ", 3),
            Ok((vec!["1", "2", "3"], None))
        );
        assert_eq!(
            split_terms("1, 2, 3, 0.5", 3),
            Ok((vec!["1", "2", "3"], Some("0.5")))
        );
        assert_eq!(
            split_terms("  1  2 3 /  50% ", 3),
            Ok((vec!["1", "2", "3"], Some("50%")))
        );
        assert_eq!(split_terms("1 2 3 4", 4), Ok((vec!["1", "2", "3", "4"], None)));

        assert_eq!(split_terms("1, 2", 3), Err(FormatError::MissingCoordinate));
        assert_eq!(split_terms("1, , 3", 3), Err(FormatError::MissingCoordinate));
        assert_eq!(split_terms("1 2", 3), Err(FormatError::MissingCoordinate));
        assert_eq!(split_terms("1 2 3 /", 3), Err(FormatError::MissingCoordinate));
        assert_eq!(
            split_terms("1, 2, 3, 4, 5", 3),
            Err(FormatError::TooManyCoordinates)
        );
        assert_eq!(split_terms("1 2 3 4", 3), Err(FormatError::TooManyCoordinates));
        assert_eq!(
            split_terms("1 2 3 / 4 5", 3),
            Err(FormatError::TooManyCoordinates)
        );
        assert_eq!(split_terms("1, 2, 3 / 4", 3), Err(FormatError::MisplacedAlpha));
        assert_eq!(split_terms("1 2 3 / 4 / 5", 3), Err(FormatError::MisplacedAlpha));
    }

    #[test]
    fn test_parse_function() {
        assert_channels(parse_function("rgb(255 0 0)"), [1.0, 0.0, 0.0, 1.0]);
        assert_channels(parse_function("RGBA(0%, 100%, 0%, 0)"), [0.0, 1.0, 0.0, 0.0]);
        assert_channels(parse_function("rgb (0 0 255 / 50%)"), [0.0, 0.0, 1.0, 0.5]);
        assert_channels(parse_function("hsl(120 100% 50%)"), [0.0, 1.0, 0.0, 1.0]);
        assert_channels(
            parse_function("hsla(0.5turn, 100%, 50%, .25)"),
            [0.0, 1.0, 1.0, 0.25],
        );
        assert_channels(parse_function("hsv(240deg 100% 100%)"), [0.0, 0.0, 1.0, 1.0]);
        assert_channels(parse_function("hsv(-120 100% 100%)"), [0.0, 0.0, 1.0, 1.0]);
        assert_channels(parse_function("hwb(0 0% 100%)"), [0.0, 0.0, 0.0, 1.0]);
        assert_channels(parse_function("hwb(0 100% 0%)"), [1.0, 1.0, 1.0, 1.0]);
        assert_channels(parse_function("cmyk(0 1 1 0)"), [1.0, 0.0, 0.0, 1.0]);
        assert_channels(
            parse_function("cmyka(0%, 0%, 0%, 100%, 1)"),
            [0.0, 0.0, 0.0, 1.0],
        );

        assert_eq!(parse_function("lab(1 2 3)"), Err(FormatError::UnknownFormat));
        assert_eq!(parse_function("rgb(1 2 3"), Err(FormatError::NoClosingParenthesis));
        assert_eq!(parse_function("rgb(1 2..0 3)"), Err(FormatError::MalformedNumber));
        assert_eq!(parse_function("rgb(1 inf 3)"), Err(FormatError::MalformedNumber));
        assert_eq!(parse_function("hsl(0,0,0)"), Err(FormatError::ExpectedPercentage));
        assert_eq!(parse_function("hsl(1rev 0% 0%)"), Err(FormatError::UnknownAngleUnit));
        assert_eq!(parse_function("cmyk(0 0 0)"), Err(FormatError::MissingCoordinate));
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse("   "), Ok([0.0; 4]));
        assert_eq!(parse(" black "), Ok([0.0, 0.0, 0.0, 1.0]));
        assert_eq!(
            parse("rebeccapurple"),
            Ok([0x66 as Float / 255.0, 0.2, 0x99 as Float / 255.0, 1.0])
        );
        assert_eq!(
            parse("blanco"),
            Err(ParseColorError::UnknownName("blanco".to_string()))
        );
        assert_eq!(
            parse("Black"),
            Err(ParseColorError::UnknownName("Black".to_string()))
        );
        assert_eq!(
            parse("#12"),
            Err(ParseColorError::Format(FormatError::UnexpectedCharacters))
        );
    }
}
