//! Style tokens for rendered documents.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// RGB color parsed from a `#RRGGBB` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse from a hex string (with or without #).
    /// Returns None if the format is invalid.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        // from_str_radix alone would take a sign, e.g. "+1".
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Convert to CSS hex string (#RRGGBB).
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Colors used by the renderers.
///
/// Every color a renderer emits comes from here. Unknown fields in a
/// theme file are rejected; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    /// Cell border color
    #[serde(alias = "borderColor")]
    pub border_color: String,

    /// Background of `header` cells
    #[serde(alias = "headerBackground")]
    pub header_background: String,

    /// Background of `title` cells
    #[serde(alias = "titleBackground")]
    pub title_background: String,

    /// Text color of all cells
    #[serde(alias = "textColor")]
    pub text_color: String,

    /// Background of the document banner
    pub banner_background: String,

    /// Text color of the document banner
    pub banner_text_color: String,

    /// Text color of placeholder cells
    pub muted_text_color: String,

    /// Page background used by the standalone page shell
    pub page_background: String,

    /// Background behind the table in the standalone page shell
    pub surface_background: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border_color: "#94A3B8".to_string(),
            header_background: "#F8FAFC".to_string(),
            title_background: "#B7DEE8".to_string(),
            text_color: "#334155".to_string(),
            banner_background: "#334155".to_string(),
            banner_text_color: "#FFFFFF".to_string(),
            muted_text_color: "#64748B".to_string(),
            page_background: "#E2E8F0".to_string(),
            surface_background: "#FFFFFF".to_string(),
        }
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a theme from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let theme: Theme = serde_json::from_str(json)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Check that every token is a `#RRGGBB` color.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in self.tokens() {
            if Rgb::from_hex(value).is_none() || !value.trim().starts_with('#') {
                return Err(Error::Theme {
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    fn tokens(&self) -> [(&'static str, &str); 9] {
        [
            ("border_color", self.border_color.as_str()),
            ("header_background", self.header_background.as_str()),
            ("title_background", self.title_background.as_str()),
            ("text_color", self.text_color.as_str()),
            ("banner_background", self.banner_background.as_str()),
            ("banner_text_color", self.banner_text_color.as_str()),
            ("muted_text_color", self.muted_text_color.as_str()),
            ("page_background", self.page_background.as_str()),
            ("surface_background", self.surface_background.as_str()),
        ]
    }

    /// Set the border color.
    pub fn with_border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = color.into();
        self
    }

    /// Set the header background.
    pub fn with_header_background(mut self, color: impl Into<String>) -> Self {
        self.header_background = color.into();
        self
    }

    /// Set the title background.
    pub fn with_title_background(mut self, color: impl Into<String>) -> Self {
        self.title_background = color.into();
        self
    }

    /// Set the text color.
    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = color.into();
        self
    }
}
