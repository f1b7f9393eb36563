use super::actions::AppAction;
use super::state::apply_project_patch;
use super::state::merge_settings;
use super::state::AppSettings;
use super::state::AppState;
use super::state::Theme;
use super::state::User;

/// Side work owed after a committed transition. The reducer only describes
/// it; the store runs it once the new state is in place.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEffect {
    /// Serialize and overwrite the whole settings object in storage.
    PersistSettings(AppSettings),
    /// Serialize and overwrite the user in storage.
    PersistUser(User),
    /// Push the theme onto the visible document root.
    ApplyTheme(Theme),
}

/// Deterministic state transition. Applied in dispatch order, one complete
/// new state per action; no I/O, never fails.
pub fn reduce(state: &mut AppState, action: AppAction) -> Vec<AppEffect> {
    match action {
        AppAction::SetUser(user) => {
            let effects = match &user {
                Some(user) => vec![AppEffect::PersistUser(user.clone())],
                None => Vec::new(),
            };
            state.user = user;
            effects
        }
        AppAction::MergeSettings(patch) => {
            let theme_changed = patch.theme.is_some();
            state.settings = merge_settings(state.settings.clone(), patch);
            let mut effects = vec![AppEffect::PersistSettings(state.settings.clone())];
            if theme_changed {
                effects.push(AppEffect::ApplyTheme(state.settings.theme.clone()));
            }
            effects
        }
        AppAction::SetProjects(projects) => {
            state.projects = projects;
            Vec::new()
        }
        AppAction::AddProject(project) => {
            state.projects.insert(0, project);
            Vec::new()
        }
        AppAction::UpdateProject { id, patch } => {
            // Unknown ids fall through untouched.
            if let Some(project) = state.projects.iter_mut().find(|project| project.id == id) {
                apply_project_patch(project, patch);
            }
            Vec::new()
        }
        AppAction::SetLoading(is_loading) => {
            state.is_loading = is_loading;
            Vec::new()
        }
        AppAction::SetError(error) => {
            state.error = error;
            Vec::new()
        }
        AppAction::ToggleSidebar => {
            state.sidebar_collapsed = !state.sidebar_collapsed;
            Vec::new()
        }
        AppAction::SetTheme(theme) => {
            state.settings.theme = theme;
            vec![
                AppEffect::PersistSettings(state.settings.clone()),
                AppEffect::ApplyTheme(state.settings.theme.clone()),
            ]
        }
        AppAction::SetLanguage(language) => {
            state.settings.language = language;
            vec![AppEffect::PersistSettings(state.settings.clone())]
        }
    }
}

#[cfg(test)]
mod tests;
