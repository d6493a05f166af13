//! Bundled theme presets.

use design_tokens::ThemeConfig;
use leptos::logging;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ThemePreset {
    pub id: &'static str,
    pub label: &'static str,
    source: &'static str,
}

pub(crate) const DEFAULT_PRESET: &str = "default";

pub(crate) const PRESETS: [ThemePreset; 4] = [
    ThemePreset {
        id: DEFAULT_PRESET,
        label: "Default",
        source: include_str!("../themes/default.toml"),
    },
    ThemePreset {
        id: "ocean",
        label: "Ocean",
        source: include_str!("../themes/ocean.toml"),
    },
    ThemePreset {
        id: "forest",
        label: "Forest",
        source: include_str!("../themes/forest.toml"),
    },
    ThemePreset {
        id: "midnight",
        label: "Midnight",
        source: include_str!("../themes/midnight.toml"),
    },
];

/// Theme configuration for a preset id; unknown or malformed presets fall back to defaults.
pub(crate) fn preset_config(id: &str) -> ThemeConfig {
    let Some(preset) = PRESETS.iter().find(|preset| preset.id == id) else {
        logging::warn!("unknown theme preset `{id}`, using defaults");
        return ThemeConfig::default();
    };
    ThemeConfig::from_toml_str(preset.source).unwrap_or_else(|err| {
        logging::warn!("theme preset `{id}` failed to parse: {err}");
        ThemeConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_preset_parses_and_resolves() {
        for preset in PRESETS {
            let config = ThemeConfig::from_toml_str(preset.source).expect("preset parses");
            let theme = config.resolve().expect("preset resolves");
            assert_eq!(theme.name, preset.label);
        }
    }

    #[test]
    fn unknown_preset_uses_default_tokens() {
        assert_eq!(preset_config("sepia"), ThemeConfig::default());
    }

    #[test]
    fn ocean_overrides_brand_color() {
        let theme = preset_config("ocean").resolve().expect("ocean resolves");
        assert_eq!(theme.value(&["colors", "primary", "500"]), Some("#0066CC"));
    }
}
