//! Packed 32-bit ARGB color
//!
//! Every stage of the pipeline exchanges colors as [`Argb`]: pixel samples,
//! quantizer centroids, scored candidates and scheme roles. The layout is
//! `0xAARRGGBB`, the same packing the Material color utilities use.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// A color packed as `0xAARRGGBB`.
///
/// Alpha is carried but never participates in color math: samples are
/// forced opaque before quantization and every derived color is opaque.
///
/// # Example
///
/// ```
/// use hct_scheme::Argb;
///
/// let red = Argb::from_rgb(255, 0, 0);
/// assert_eq!(red.as_u32(), 0xffff0000);
/// assert_eq!(red.to_string(), "#ff0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Argb(u32);

impl Argb {
    /// Create a color from its packed `0xAARRGGBB` representation.
    #[inline]
    pub const fn new(packed: u32) -> Self {
        Self(packed)
    }

    /// Create an opaque color from 8-bit channels.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(0xff00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Create a color from 8-bit channels including alpha.
    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Packed `0xAARRGGBB` value.
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Channels as `[R, G, B]`.
    #[inline]
    pub const fn to_rgb(self) -> [u8; 3] {
        [self.red(), self.green(), self.blue()]
    }

    /// The same color with alpha forced to 0xff.
    #[inline]
    pub const fn opaque(self) -> Self {
        Self(self.0 | 0xff00_0000)
    }

    /// Lowercase `#rrggbb`, alpha dropped.
    ///
    /// # Example
    /// ```
    /// use hct_scheme::Argb;
    /// assert_eq!(Argb::from_rgb(0x42, 0x85, 0xf4).to_hex(), "#4285f4");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.0 & 0x00ff_ffff)
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0x00ff_ffff)
    }
}

impl From<u32> for Argb {
    fn from(packed: u32) -> Self {
        Self(packed)
    }
}

impl From<Argb> for u32 {
    fn from(argb: Argb) -> Self {
        argb.0
    }
}

impl From<[u8; 3]> for Argb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_rgb(r, g, b)
    }
}

impl FromStr for Argb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` / `RRGGBB` - opaque 6-digit hex
    /// - `#RGB` / `RGB` - shorthand, each digit doubled
    /// - `#AARRGGBB` / `AARRGGBB` - 8-digit hex with alpha first
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use hct_scheme::Argb;
    ///
    /// let white: Argb = "#FFF".parse().unwrap();
    /// assert_eq!(white, Argb::from_rgb(255, 255, 255));
    ///
    /// let translucent: Argb = "#80ff0000".parse().unwrap();
    /// assert_eq!(translucent.alpha(), 0x80);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.is_empty() {
            return Err(ParseColorError::Empty);
        }

        let count = digits.chars().count();
        if !matches!(count, 3 | 6 | 8) {
            return Err(ParseColorError::DigitCount {
                input: input.to_string(),
                count,
            });
        }

        let mut nibbles = [0u8; 8];
        for (i, ch) in digits.chars().enumerate() {
            nibbles[i] = ch.to_digit(16).ok_or_else(|| ParseColorError::NotHex {
                input: input.to_string(),
                found: ch,
                position: i + 1,
            })? as u8;
        }

        Ok(match count {
            // Shorthand: each digit doubled (0xF -> 0xFF)
            3 => Self::from_rgb(nibbles[0] * 17, nibbles[1] * 17, nibbles[2] * 17),
            6 => Self(
                nibbles[..6]
                    .iter()
                    .fold(0xffu32, |acc, &n| acc << 4 | n as u32),
            ),
            _ => Self(nibbles.iter().fold(0u32, |acc, &n| acc << 4 | n as u32)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_accessors() {
        let color = Argb::from_argb(0x12, 0x34, 0x56, 0x78);
        assert_eq!(color.as_u32(), 0x12345678);
        assert_eq!(color.alpha(), 0x12);
        assert_eq!(color.red(), 0x34);
        assert_eq!(color.green(), 0x56);
        assert_eq!(color.blue(), 0x78);
        assert_eq!(color.to_rgb(), [0x34, 0x56, 0x78]);
        assert_eq!(color.opaque().alpha(), 0xff);
        assert_eq!(color.opaque().to_rgb(), color.to_rgb());
    }

    #[test]
    fn test_hex_is_lowercase_without_alpha() {
        let color = Argb::new(0x80ABCDEF);
        assert_eq!(color.to_hex(), "#abcdef");
        assert_eq!(color.to_string(), "#abcdef");
        assert_eq!(Argb::from_rgb(0, 0, 1).to_hex(), "#000001");
    }

    #[test]
    fn test_hex_parsing() {
        let red: Argb = "#FF0000".parse().unwrap();
        assert_eq!(red, Argb::from_rgb(255, 0, 0));

        let no_hash: Argb = "00ff00".parse().unwrap();
        assert_eq!(no_hash, Argb::from_rgb(0, 255, 0));

        let shorthand: Argb = "#ABC".parse().unwrap();
        assert_eq!(shorthand, Argb::from_rgb(0xAA, 0xBB, 0xCC));

        let with_alpha: Argb = "#00112233".parse().unwrap();
        assert_eq!(with_alpha.as_u32(), 0x00112233);

        let padded: Argb = "  #4285f4  ".parse().unwrap();
        assert_eq!(padded, Argb::new(0xff4285f4));
    }

    #[test]
    fn test_hex_parsing_errors() {
        assert_eq!(
            "#1G3".parse::<Argb>(),
            Err(ParseColorError::NotHex {
                input: "#1G3".to_string(),
                found: 'G',
                position: 2,
            })
        );
        assert_eq!(
            " #FFFF ".parse::<Argb>(),
            Err(ParseColorError::DigitCount {
                input: "#FFFF".to_string(),
                count: 4,
            })
        );
        assert_eq!("".parse::<Argb>(), Err(ParseColorError::Empty));
        assert_eq!("  # ".parse::<Argb>(), Err(ParseColorError::Empty));
        // Counted in characters, so multi-byte text reaches the digit check
        assert!(matches!(
            "#ééé".parse::<Argb>(),
            Err(ParseColorError::NotHex { found: 'é', position: 1, .. })
        ));
    }

    #[test]
    fn test_parse_error_messages_quote_input() {
        let err = "#12345".parse::<Argb>().unwrap_err();
        assert_eq!(err.to_string(), "\"#12345\" has 5 hex digits, expected 3, 6 or 8");
        let err = "00zz00".parse::<Argb>().unwrap_err();
        assert_eq!(err.to_string(), "\"00zz00\" has non-hex 'z' at digit 3");
    }

    #[test]
    fn test_hex_round_trip() {
        for packed in [0xff000000u32, 0xffffffff, 0xff4285f4, 0xff7f7f7f] {
            let color = Argb::new(packed);
            let parsed: Argb = color.to_hex().parse().unwrap();
            assert_eq!(parsed, color);
        }
    }
}
