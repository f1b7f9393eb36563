use super::*;
use crate::state::AccessibilityPrefs;
use crate::state::NotificationPrefs;
use pretty_assertions::assert_eq;

#[test]
fn merge_replaces_present_keys_and_keeps_the_rest() {
    let mut state = state();

    let effects = reduce(
        &mut state,
        AppAction::MergeSettings(SettingsPatch {
            language: Some("hi".to_string()),
            ..SettingsPatch::default()
        }),
    );

    assert_eq!(state.settings.language, "hi");
    assert_eq!(state.settings.theme, Theme::default());
    assert!(state.settings.notifications.email);
    assert_eq!(
        effects,
        vec![AppEffect::PersistSettings(state.settings.clone())]
    );
}

#[test]
fn any_patch_sequence_leaves_settings_complete() {
    let mut state = state();

    let patches = vec![
        SettingsPatch {
            theme: Some(Theme {
                mode: ThemeMode::Dark,
                primary_color: "#111".to_string(),
                accent_color: "#222".to_string(),
            }),
            ..SettingsPatch::default()
        },
        SettingsPatch {
            accessibility: Some(AccessibilityPrefs {
                reduced_motion: true,
                ..AccessibilityPrefs::default()
            }),
            ..SettingsPatch::default()
        },
        SettingsPatch {
            notifications: Some(NotificationPrefs {
                push: false,
                ..NotificationPrefs::default()
            }),
            ..SettingsPatch::default()
        },
        SettingsPatch::default(),
    ];
    for patch in patches {
        reduce(&mut state, AppAction::MergeSettings(patch));
    }

    // Merge, never replace: every top-level key is still populated.
    assert_eq!(state.settings.language, "en");
    assert_eq!(state.settings.theme.mode, ThemeMode::Dark);
    assert!(state.settings.accessibility.reduced_motion);
    assert!(!state.settings.notifications.push);
    assert!(state.settings.notifications.email);
}

#[test]
fn set_language_keeps_the_theme_untouched() {
    let mut state = state();
    assert_eq!(state.settings.theme.mode, ThemeMode::Light);

    let effects = reduce(&mut state, AppAction::SetLanguage("hi".to_string()));

    assert_eq!(state.settings.language, "hi");
    assert_eq!(state.settings.theme, Theme::default());
    // The whole settings object is persisted, not a language fragment.
    assert_eq!(
        effects,
        vec![AppEffect::PersistSettings(state.settings.clone())]
    );
}

#[test]
fn set_theme_persists_and_applies_exactly_that_theme() {
    let mut state = state();
    let theme = Theme {
        mode: ThemeMode::Dark,
        primary_color: "#000".to_string(),
        accent_color: "#fff".to_string(),
    };

    let effects = reduce(&mut state, AppAction::SetTheme(theme.clone()));

    assert_eq!(state.settings.theme, theme);
    assert_eq!(
        effects,
        vec![
            AppEffect::PersistSettings(state.settings.clone()),
            AppEffect::ApplyTheme(theme),
        ]
    );
}

#[test]
fn merge_emits_apply_theme_only_when_the_patch_carried_one() {
    let mut state = state();

    let without_theme = reduce(
        &mut state,
        AppAction::MergeSettings(SettingsPatch {
            language: Some("ta".to_string()),
            ..SettingsPatch::default()
        }),
    );
    assert!(!without_theme
        .iter()
        .any(|effect| matches!(effect, AppEffect::ApplyTheme(_))));

    let theme = Theme {
        mode: ThemeMode::Dark,
        primary_color: "#123".to_string(),
        accent_color: "#456".to_string(),
    };
    let with_theme = reduce(
        &mut state,
        AppAction::MergeSettings(SettingsPatch {
            theme: Some(theme.clone()),
            ..SettingsPatch::default()
        }),
    );
    assert!(with_theme.contains(&AppEffect::ApplyTheme(theme)));
}
