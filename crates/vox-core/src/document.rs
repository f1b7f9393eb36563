use std::collections::BTreeMap;

use super::state::Theme;
use super::state::ThemeMode;

pub const PRIMARY_COLOR_PROPERTY: &str = "--primary-color";
pub const ACCENT_COLOR_PROPERTY: &str = "--accent-color";

/// In-process stand-in for the visible document root: a dark-mode flag and
/// a bag of custom style properties. Theme application is the only effect
/// the state container makes observable outside itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootDocument {
    dark: bool,
    custom_properties: BTreeMap<String, String>,
}

impl RootDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
    }

    pub fn set_custom_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.custom_properties.insert(name.into(), value.into());
    }

    pub fn custom_property(&self, name: &str) -> Option<&str> {
        self.custom_properties.get(name).map(String::as_str)
    }

    pub fn apply_theme(&mut self, theme: &Theme) {
        self.set_dark(theme.mode == ThemeMode::Dark);
        self.set_custom_property(PRIMARY_COLOR_PROPERTY, theme.primary_color.clone());
        self.set_custom_property(ACCENT_COLOR_PROPERTY, theme.accent_color.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::RootDocument;
    use super::ACCENT_COLOR_PROPERTY;
    use super::PRIMARY_COLOR_PROPERTY;
    use crate::state::Theme;
    use crate::state::ThemeMode;
    use pretty_assertions::assert_eq;

    #[test]
    fn apply_theme_sets_flag_and_both_properties() {
        let mut doc = RootDocument::new();
        doc.apply_theme(&Theme {
            mode: ThemeMode::Dark,
            primary_color: "#000".to_string(),
            accent_color: "#fff".to_string(),
        });

        assert!(doc.is_dark());
        assert_eq!(doc.custom_property(PRIMARY_COLOR_PROPERTY), Some("#000"));
        assert_eq!(doc.custom_property(ACCENT_COLOR_PROPERTY), Some("#fff"));

        doc.apply_theme(&Theme::default());
        assert!(!doc.is_dark());
        assert_eq!(doc.custom_property(PRIMARY_COLOR_PROPERTY), Some("#3B82F6"));
    }
}
