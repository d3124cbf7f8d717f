use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A validated `#RRGGBB` color string.
///
/// Case is accepted either way and kept as written: `#3b82f6` and
/// `#3B82F6` are both valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse and validate a hex color string.
    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        if s.len() != 7 || !s.starts_with('#') {
            return Err(ColorParseError::BadFormat(s.to_string()));
        }
        if !s[1..].bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red channel, 0–255.
    pub fn red(&self) -> u8 {
        self.channel(1)
    }

    /// Green channel, 0–255.
    pub fn green(&self) -> u8 {
        self.channel(3)
    }

    /// Blue channel, 0–255.
    pub fn blue(&self) -> u8 {
        self.channel(5)
    }

    fn channel(&self, offset: usize) -> u8 {
        // Validated at construction, so the slice is always two hex digits.
        u8::from_str_radix(&self.0[offset..offset + 2], 16).unwrap_or(0)
    }

    /// Black or white, whichever reads better over this color.
    ///
    /// Uses the ITU-R BT.601 luma weights (299/587/114) with the
    /// conventional 128 threshold.
    pub fn contrasting(&self) -> HexColor {
        let brightness = (self.red() as u32 * 299
            + self.green() as u32 * 587
            + self.blue() as u32 * 114)
            / 1000;
        if brightness > 128 {
            HexColor("#000000".to_string())
        } else {
            HexColor("#FFFFFF".to_string())
        }
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        HexColor::parse(&s)
    }
}

impl From<HexColor> for String {
    fn from(c: HexColor) -> String {
        c.0
    }
}

impl std::str::FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HexColor::parse(s)
    }
}

/// Errors from hex color validation.
#[derive(Debug, Clone, Error)]
pub enum ColorParseError {
    #[error("color must be a 7-character '#RRGGBB' string, got {0:?}")]
    BadFormat(String),

    #[error("color contains non-hex digits: {0:?}")]
    BadDigit(String),
}
