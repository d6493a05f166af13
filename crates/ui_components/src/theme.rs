//! Theme context: resolves a [`ThemeConfig`] into CSS custom properties for a subtree.

use design_tokens::{ResolvedTheme, ThemeConfig};
use leptos::*;

use crate::id::IdGenerator;
use crate::primitives::merge_layout_class;

#[derive(Debug, Clone, Copy)]
/// Active theme for descendants of a [`ThemeProvider`].
pub struct ThemeContext {
    /// Resolved variables of the active theme.
    pub theme: Memo<ResolvedTheme>,
}

/// Resolves `config`, falling back to the default theme when it is invalid.
pub fn resolve_theme(config: &ThemeConfig) -> ResolvedTheme {
    match config.resolve() {
        Ok(theme) => theme,
        Err(err) => {
            logging::warn!(
                "theme `{}` rejected, using defaults: {err}",
                config.name.as_deref().unwrap_or("default")
            );
            ResolvedTheme::default()
        }
    }
}

/// Returns the nearest theme context, if a provider is mounted.
pub fn use_theme() -> Option<ThemeContext> {
    use_context::<ThemeContext>()
}

#[component]
/// Applies design tokens as CSS custom properties and provides the theme and id contexts.
pub fn ThemeProvider(
    /// Theme overrides; the default tokens apply when omitted.
    #[prop(optional, into)]
    config: MaybeSignal<ThemeConfig>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let theme = create_memo(move |_| config.with(resolve_theme));
    provide_context(ThemeContext { theme });
    provide_context(IdGenerator::new());

    view! {
        <div
            class=merge_layout_class("ui-theme", layout_class)
            data-ui-primitive="true"
            data-ui-kind="theme"
            data-ui-theme=move || theme.with(|theme| theme.name.clone())
            style=move || theme.with(ResolvedTheme::inline_style)
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let config = ThemeConfig {
            prefix: Some("Not Valid".to_string()),
            ..ThemeConfig::default()
        };
        assert_eq!(resolve_theme(&config), ResolvedTheme::default());
    }

    #[test]
    fn valid_config_is_applied() {
        let config = ThemeConfig {
            name: Some("dusk".to_string()),
            ..ThemeConfig::default()
        };
        assert_eq!(resolve_theme(&config).name, "dusk");
    }
}
