pub(super) use super::reduce;
pub(super) use super::AppEffect;
pub(super) use crate::actions::AppAction;
pub(super) use crate::state::AppState;
pub(super) use crate::state::Project;
pub(super) use crate::state::ProjectPatch;
pub(super) use crate::state::ProjectStatus;
pub(super) use crate::state::SettingsPatch;
pub(super) use crate::state::Theme;
pub(super) use crate::state::ThemeMode;
pub(super) use crate::state::User;

mod project_list;
mod settings_merge;

fn state() -> AppState {
    AppState::default()
}

fn project(id: &str, kind: &str, status: ProjectStatus) -> Project {
    Project {
        id: id.to_string(),
        name: format!("{kind} project"),
        kind: kind.to_string(),
        status,
        created_at_ms: 1_000,
        updated_at_ms: 1_000,
        thumbnail: None,
        settings: None,
    }
}

fn run_silent(state: &mut AppState, action: AppAction) {
    let effects = reduce(state, action);
    assert!(effects.is_empty());
}
