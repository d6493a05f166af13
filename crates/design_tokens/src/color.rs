//! Hex color parsing used to validate theme overrides and derive tints.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons a string is not an accepted hex color.
pub enum ColorParseError {
    /// The value did not start with `#`.
    #[error("expected a leading `#` in {0:?}")]
    MissingHash(String),
    /// The value had a digit count other than 3, 6, or 8.
    #[error("expected 3, 6, or 8 hex digits, found {0}")]
    InvalidLength(usize),
    /// The value contained a non-hex character.
    #[error("invalid hex digit in {0:?}")]
    InvalidDigit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// An sRGB color with optional alpha, rendered as uppercase `#RRGGBB[AA]`.
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: Option<u8>,
}

impl HexColor {
    /// Parses `#rgb`, `#rrggbb`, or `#rrggbbaa`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] when the value is not one of the accepted forms.
    pub fn parse(raw: &str) -> Result<Self, ColorParseError> {
        let trimmed = raw.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(trimmed.to_string()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(trimmed.to_string()));
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => digits.to_string(),
            other => return Err(ColorParseError::InvalidLength(other)),
        };
        let channel = |index: usize| {
            u8::from_str_radix(&expanded[index..index + 2], 16)
                .map_err(|_| ColorParseError::InvalidDigit(trimmed.to_string()))
        };

        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: if expanded.len() == 8 {
                Some(channel(6)?)
            } else {
                None
            },
        })
    }

    /// Returns the same color at `percent` opacity (clamped to 100), rounded to the nearest byte.
    pub fn with_alpha_percent(self, percent: u8) -> Self {
        let percent = u32::from(percent.min(100));
        let alpha = (percent * 255 + 50) / 100;
        Self {
            a: Some(alpha as u8),
            ..self
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if let Some(alpha) = self.a {
            write!(f, "{alpha:02X}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn expands_short_form() {
        let color = HexColor::parse("#0af").expect("short form parses");
        assert_eq!(color.to_string(), "#00AAFF");
    }

    #[test]
    fn keeps_alpha_channel() {
        let color = HexColor::parse("#4600F214").expect("alpha form parses");
        assert_eq!(color.a, Some(0x14));
        assert_eq!(color.to_string(), "#4600F214");
    }

    #[test]
    fn rejects_malformed_values() {
        assert_eq!(
            HexColor::parse("4600F2"),
            Err(ColorParseError::MissingHash("4600F2".to_string()))
        );
        assert_eq!(HexColor::parse("#12345"), Err(ColorParseError::InvalidLength(5)));
        assert_eq!(
            HexColor::parse("#GG0000"),
            Err(ColorParseError::InvalidDigit("#GG0000".to_string()))
        );
    }

    #[test]
    fn alpha_percent_rounds_and_clamps() {
        let black = HexColor::parse("#000").expect("black parses");
        assert_eq!(black.with_alpha_percent(10).a, Some(0x1A));
        assert_eq!(black.with_alpha_percent(200).a, Some(0xFF));
        assert_eq!(black.with_alpha_percent(0).a, Some(0));
    }
}
