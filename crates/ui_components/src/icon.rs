//! Centralized Material Symbols icon catalog.
//!
//! Components never embed raw SVG markup; they name an [`IconName`] and render it through
//! [`Icon`], which keeps sizing and accessibility attributes consistent across the library.
//! Every glyph is drawn on a 24x24 grid with `currentColor` fill.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers.
pub enum IconName {
    /// Plus sign.
    Add,
    /// Minus sign.
    Remove,
    /// Dismiss cross.
    Close,
    /// Checkmark.
    Check,
    /// Right-pointing chevron.
    ChevronRight,
    /// Left-pointing chevron.
    ChevronLeft,
    /// Downward disclosure chevron.
    ExpandMore,
    /// Upward disclosure chevron.
    ExpandLess,
    /// Download tray.
    Download,
    /// Upload tray.
    Upload,
    /// Magnifier.
    Search,
    /// Envelope.
    Email,
    /// Open eye.
    Visibility,
    /// Struck-through eye.
    VisibilityOff,
    /// Vertical overflow dots.
    MoreVert,
    /// Gear.
    Settings,
    /// Circular arrow.
    Refresh,
    /// House.
    Home,
    /// Tile grid.
    Dashboard,
    /// Bar chart.
    Analytics,
    /// Closed folder.
    Folder,
    /// Document page.
    Description,
}

impl IconName {
    /// Every icon in catalog order.
    pub const ALL: [Self; 22] = [
        Self::Add,
        Self::Remove,
        Self::Close,
        Self::Check,
        Self::ChevronRight,
        Self::ChevronLeft,
        Self::ExpandMore,
        Self::ExpandLess,
        Self::Download,
        Self::Upload,
        Self::Search,
        Self::Email,
        Self::Visibility,
        Self::VisibilityOff,
        Self::MoreVert,
        Self::Settings,
        Self::Refresh,
        Self::Home,
        Self::Dashboard,
        Self::Analytics,
        Self::Folder,
        Self::Description,
    ];

    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Close => "close",
            Self::Check => "check",
            Self::ChevronRight => "chevron-right",
            Self::ChevronLeft => "chevron-left",
            Self::ExpandMore => "expand-more",
            Self::ExpandLess => "expand-less",
            Self::Download => "download",
            Self::Upload => "upload",
            Self::Search => "search",
            Self::Email => "email",
            Self::Visibility => "visibility",
            Self::VisibilityOff => "visibility-off",
            Self::MoreVert => "more-vert",
            Self::Settings => "settings",
            Self::Refresh => "refresh",
            Self::Home => "home",
            Self::Dashboard => "dashboard",
            Self::Analytics => "analytics",
            Self::Folder => "folder",
            Self::Description => "description",
        }
    }

    /// Looks an icon up by its [`token`](Self::token).
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.token() == token)
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::Add => r#"<path d="M11 13H5v-2h6V5h2v6h6v2h-6v6h-2v-6z"/>"#,
            Self::Remove => r#"<path d="M19 13H5v-2h14v2z"/>"#,
            Self::Close => {
                r#"<path d="M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z"/>"#
            }
            Self::Check => r#"<path d="M9 16.17L4.83 12l-1.42 1.41L9 19 21 7l-1.41-1.41L9 16.17z"/>"#,
            Self::ChevronRight => r#"<path d="M10 6L8.59 7.41 13.17 12l-4.58 4.59L10 18l6-6-6-6z"/>"#,
            Self::ChevronLeft => {
                r#"<path d="M15.41 7.41L14 6l-6 6 6 6 1.41-1.41L10.83 12l4.58-4.59z"/>"#
            }
            Self::ExpandMore => {
                r#"<path d="M16.59 8.59L12 13.17 7.41 8.59 6 10l6 6 6-6-1.41-1.41z"/>"#
            }
            Self::ExpandLess => r#"<path d="M12 8l-6 6 1.41 1.41L12 10.83l4.59 4.58L18 14l-6-6z"/>"#,
            Self::Download => r#"<path d="M5 20h14v-2H5v2zM19 9h-4V3H9v6H5l7 7 7-7z"/>"#,
            Self::Upload => r#"<path d="M9 16h6v-6h4l-7-7-7 7h4v6zm-4 2h14v2H5v-2z"/>"#,
            Self::Search => {
                r#"<path d="M15.5 14h-.79l-.28-.27C15.41 12.59 16 11.11 16 9.5 16 5.91 13.09 3 9.5 3S3 5.91 3 9.5 5.91 16 9.5 16c1.61 0 3.09-.59 4.23-1.57l.27.28v.79l5 4.99L20.49 19l-4.99-5zm-6 0C7.01 14 5 11.99 5 9.5S7.01 5 9.5 5 14 7.01 14 9.5 11.99 14 9.5 14z"/>"#
            }
            Self::Email => {
                r#"<path d="M20 4H4c-1.1 0-1.99.9-1.99 2L2 18c0 1.1.9 2 2 2h16c1.1 0 2-.9 2-2V6c0-1.1-.9-2-2-2zm0 4l-8 5-8-5V6l8 5 8-5v2z"/>"#
            }
            Self::Visibility => {
                r#"<path d="M12 4.5C7 4.5 2.73 7.61 1 12c1.73 4.39 6 7.5 11 7.5s9.27-3.11 11-7.5c-1.73-4.39-6-7.5-11-7.5zM12 17c-2.76 0-5-2.24-5-5s2.24-5 5-5 5 2.24 5 5-2.24 5-5 5zm0-8c-1.66 0-3 1.34-3 3s1.34 3 3 3 3-1.34 3-3-1.34-3-3-3z"/>"#
            }
            Self::VisibilityOff => {
                r#"<path d="M12 7c2.76 0 5 2.24 5 5 0 .65-.13 1.26-.36 1.83l2.92 2.92c1.51-1.26 2.7-2.89 3.43-4.75-1.73-4.39-6-7.5-11-7.5-1.4 0-2.74.25-3.98.7l2.16 2.16C10.74 7.13 11.35 7 12 7zM2 4.27l2.28 2.28.46.46C3.08 8.3 1.78 10.02 1 12c1.73 4.39 6 7.5 11 7.5 1.55 0 3.03-.3 4.38-.84l.42.42L19.73 22 21 20.73 3.27 3 2 4.27zM7.53 9.8l1.55 1.55c-.05.21-.08.43-.08.65 0 1.66 1.34 3 3 3 .22 0 .44-.03.65-.08l1.55 1.55c-.67.33-1.41.53-2.2.53-2.76 0-5-2.24-5-5 0-.79.2-1.53.53-2.2zm4.31-.78l3.15 3.15.02-.16c0-1.66-1.34-3-3-3l-.17.01z"/>"#
            }
            Self::MoreVert => {
                r#"<path d="M12 8c1.1 0 2-.9 2-2s-.9-2-2-2-2 .9-2 2 .9 2 2 2zm0 2c-1.1 0-2 .9-2 2s.9 2 2 2 2-.9 2-2-.9-2-2-2zm0 6c-1.1 0-2 .9-2 2s.9 2 2 2 2-.9 2-2-.9-2-2-2z"/>"#
            }
            Self::Settings => {
                r#"<path d="M19.14 12.94c.04-.3.06-.61.06-.94 0-.32-.02-.64-.07-.94l2.03-1.58c.18-.14.23-.41.12-.61l-1.92-3.32c-.12-.22-.37-.29-.59-.22l-2.39.96c-.5-.38-1.03-.7-1.62-.94l-.36-2.54c-.04-.24-.24-.41-.48-.41h-3.84c-.24 0-.43.17-.47.41l-.36 2.54c-.59.24-1.13.57-1.62.94l-2.39-.96c-.22-.08-.47 0-.59.22L2.74 8.87c-.12.21-.08.47.12.61l2.03 1.58c-.05.3-.07.63-.07.94s.02.64.07.94l-2.03 1.58c-.18.14-.23.41-.12.61l1.92 3.32c.12.22.37.29.59.22l2.39-.96c.5.38 1.03.7 1.62.94l.36 2.54c.05.24.24.41.48.41h3.84c.24 0 .44-.17.47-.41l.36-2.54c.59-.24 1.13-.56 1.62-.94l2.39.96c.22.08.47 0 .59-.22l1.92-3.32c.12-.22.07-.47-.12-.61l-2.01-1.58zM12 15.6c-1.98 0-3.6-1.62-3.6-3.6s1.62-3.6 3.6-3.6 3.6 1.62 3.6 3.6-1.62 3.6-3.6 3.6z"/>"#
            }
            Self::Refresh => {
                r#"<path d="M17.65 6.35C16.2 4.9 14.21 4 12 4c-4.42 0-7.99 3.58-7.99 8s3.57 8 7.99 8c3.73 0 6.84-2.55 7.73-6h-2.08c-.82 2.33-3.04 4-5.65 4-3.31 0-6-2.69-6-6s2.69-6 6-6c1.66 0 3.14.69 4.22 1.78L13 11h7V4l-2.35 2.35z"/>"#
            }
            Self::Home => r#"<path d="M10 20v-6h4v6h5v-8h3L12 3 2 12h3v8z"/>"#,
            Self::Dashboard => r#"<path d="M3 13h8V3H3v10zm0 8h8v-6H3v6zm10 0h8V11h-8v10zm0-18v6h8V3h-8z"/>"#,
            Self::Analytics => {
                r#"<path d="M19 3H5c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h14c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2zM9 17H7v-7h2v7zm4 0h-2V7h2v10zm4 0h-2v-4h2v4z"/>"#
            }
            Self::Folder => {
                r#"<path d="M10 4H4c-1.11 0-2 .89-2 2v12c0 1.11.89 2 2 2h16c1.11 0 2-.89 2-2V8c0-1.11-.89-2-2-2h-8l-2-2z"/>"#
            }
            Self::Description => {
                r#"<path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8l-6-6zm4 18H6V4h7v5h5v11z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 14px compact icon (small chips).
    Xs,
    /// 16px standard icon (small controls, menus).
    #[default]
    Sm,
    /// 20px medium icon (default controls).
    Md,
    /// 24px large icon (large controls).
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders a catalog icon as an inline, decorative SVG.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn tokens_are_unique_and_round_trip() {
        let tokens: HashSet<_> = IconName::ALL.iter().map(|icon| icon.token()).collect();
        assert_eq!(tokens.len(), IconName::ALL.len());
        for icon in IconName::ALL {
            assert_eq!(IconName::from_token(icon.token()), Some(icon));
        }
        assert_eq!(IconName::from_token("unknown"), None);
    }

    #[test]
    fn every_icon_is_a_single_path() {
        for icon in IconName::ALL {
            let body = icon.svg_body();
            assert!(body.starts_with("<path d=\""), "{}", icon.token());
            assert!(body.ends_with("\"/>"), "{}", icon.token());
        }
    }

    #[test]
    fn sizes_map_to_pixel_grid() {
        assert_eq!(IconSize::Xs.px(), 14);
        assert_eq!(IconSize::default(), IconSize::Sm);
        assert_eq!(IconSize::Lg.px(), 24);
    }
}
