//! Theme configuration: validated overrides layered over the default token tree.
//!
//! A [`ThemeConfig`] is plain data loaded from TOML or JSON. [`ThemeConfig::resolve`] validates
//! every override and produces a [`ResolvedTheme`], the flat list of CSS custom properties a
//! renderer applies at the root of a themed subtree.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::{ColorParseError, HexColor};
use crate::css::{self, CssVariable};
use crate::{SecondaryTints, DESIGN_TOKENS};

/// Custom-property prefix used when a theme does not set one.
pub const DEFAULT_PREFIX: &str = "ds";

#[derive(Debug, Error)]
/// Errors raised while loading or resolving a theme configuration.
pub enum ThemeError {
    /// A color override is not a valid hex color.
    #[error("invalid color for `{token}`")]
    InvalidColor {
        /// Override key that failed validation.
        token: &'static str,
        /// Underlying parse failure.
        #[source]
        source: ColorParseError,
    },
    /// The custom-property prefix contains characters CSS identifiers cannot carry.
    #[error("invalid variable prefix {0:?}: use lowercase letters, digits, and dashes")]
    InvalidPrefix(String),
    /// A font-stack override was present but empty.
    #[error("font stack `{0}` must name at least one family")]
    EmptyFontStack(&'static str),
    /// TOML input could not be parsed (including unknown keys).
    #[error("TOML theme error: {0}")]
    Toml(#[from] toml::de::Error),
    /// JSON input could not be parsed, or the token tree could not be serialized.
    #[error("JSON theme error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Color overrides. Each value must be a hex color.
pub struct ColorOverrides {
    /// Brand base (shade 500). Secondary tints are re-derived from it.
    pub primary: Option<String>,
    pub background: Option<String>,
    pub surface: Option<String>,
    pub text_primary: Option<String>,
    pub text_secondary: Option<String>,
    pub border: Option<String>,
    pub success: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
    pub info: Option<String>,
}

impl ColorOverrides {
    fn entries(&self) -> [(&'static str, &'static str, Option<&str>); 10] {
        [
            ("primary", "colors.primary.500", self.primary.as_deref()),
            ("background", "colors.background", self.background.as_deref()),
            ("surface", "colors.surface", self.surface.as_deref()),
            ("text_primary", "colors.text.primary", self.text_primary.as_deref()),
            ("text_secondary", "colors.text.secondary", self.text_secondary.as_deref()),
            ("border", "colors.border", self.border.as_deref()),
            ("success", "colors.success", self.success.as_deref()),
            ("warning", "colors.warning", self.warning.as_deref()),
            ("error", "colors.error", self.error.as_deref()),
            ("info", "colors.info", self.info.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Font-stack overrides, most preferred family first.
pub struct TypographyOverrides {
    pub primary_font: Option<Vec<String>>,
    pub mono_font: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// User-facing theme configuration.
pub struct ThemeConfig {
    /// Display name; defaults to `"default"`.
    pub name: Option<String>,
    /// Custom-property prefix; defaults to [`DEFAULT_PREFIX`].
    pub prefix: Option<String>,
    pub colors: ColorOverrides,
    pub typography: TypographyOverrides,
}

impl ThemeConfig {
    /// Parses a TOML theme document.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Toml`] for malformed input or unknown keys.
    pub fn from_toml_str(raw: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(raw)?)
    }

    /// Parses a JSON theme document.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Json`] for malformed input or unknown keys.
    pub fn from_json_str(raw: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Effective custom-property prefix.
    pub fn prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or(DEFAULT_PREFIX)
    }

    /// Validates overrides and layers them over the default tokens.
    ///
    /// # Errors
    ///
    /// Returns the first invalid prefix, color, or font stack encountered.
    pub fn resolve(&self) -> Result<ResolvedTheme, ThemeError> {
        let prefix = self.prefix();
        validate_prefix(prefix)?;

        let mut theme = ResolvedTheme {
            name: self.name.clone().unwrap_or_else(|| "default".to_string()),
            prefix: prefix.to_string(),
            variables: css::css_variables(&DESIGN_TOKENS, prefix)?,
        };

        for (token, path, raw) in self.colors.entries() {
            let Some(raw) = raw else {
                continue;
            };
            let color = HexColor::parse(raw)
                .map_err(|source| ThemeError::InvalidColor { token, source })?;
            let path = path.split('.').collect::<Vec<_>>();
            theme.set(&path, color.to_string());

            if token == "primary" {
                for (tint, percent) in SecondaryTints::ALPHA_PERCENT {
                    theme.set(
                        &["colors", "secondary", tint],
                        color.with_alpha_percent(percent).to_string(),
                    );
                }
            }
        }

        let fonts = [
            ("primary_font", "primary", self.typography.primary_font.as_ref()),
            ("mono_font", "mono", self.typography.mono_font.as_ref()),
        ];
        for (token, stack, families) in fonts {
            let Some(families) = families else {
                continue;
            };
            if families.iter().all(|family| family.trim().is_empty()) {
                return Err(ThemeError::EmptyFontStack(token));
            }
            let value = families
                .iter()
                .map(|family| family.trim())
                .filter(|family| !family.is_empty())
                .map(css::font_family_name)
                .collect::<Vec<_>>()
                .join(", ");
            theme.set(&["typography", "fontFamily", stack], value);
        }

        Ok(theme)
    }
}

fn validate_prefix(prefix: &str) -> Result<(), ThemeError> {
    let valid = !prefix.is_empty()
        && !prefix.starts_with('-')
        && prefix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(ThemeError::InvalidPrefix(prefix.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Fully resolved theme: every token as a CSS custom property.
pub struct ResolvedTheme {
    pub name: String,
    pub prefix: String,
    pub variables: Vec<CssVariable>,
}

impl Default for ResolvedTheme {
    fn default() -> Self {
        ThemeConfig::default()
            .resolve()
            .unwrap_or_else(|_| Self {
                name: "default".to_string(),
                prefix: DEFAULT_PREFIX.to_string(),
                variables: Vec::new(),
            })
    }
}

impl ResolvedTheme {
    /// Value of the token at `path`, e.g. `["colors", "primary", "500"]`.
    pub fn value(&self, path: &[&str]) -> Option<&str> {
        let name = css::variable_name(&self.prefix, path);
        self.variables
            .iter()
            .find(|variable| variable.name == name)
            .map(|variable| variable.value.as_str())
    }

    /// `var(--…)` reference for the token at `path`.
    pub fn var(&self, path: &[&str]) -> String {
        format!("var({})", css::variable_name(&self.prefix, path))
    }

    /// Inline `style` attribute value declaring every variable.
    pub fn inline_style(&self) -> String {
        css::inline_style(&self.variables)
    }

    /// Stylesheet rule declaring every variable under `selector`.
    pub fn stylesheet(&self, selector: &str) -> String {
        css::stylesheet(selector, &self.variables)
    }

    fn set(&mut self, path: &[&str], value: String) {
        let name = css::variable_name(&self.prefix, path);
        match self.variables.iter_mut().find(|variable| variable.name == name) {
            Some(variable) => variable.value = value,
            None => self.variables.push(CssVariable { name, value }),
        }
    }
}
