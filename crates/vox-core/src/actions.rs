use super::state::Project;
use super::state::ProjectPatch;
use super::state::SettingsPatch;
use super::state::Theme;
use super::state::User;

/// One intended state transition. Every mutation of [`crate::state::AppState`]
/// flows through exactly one of these variants; the closed enum makes the
/// reducer total by construction.
#[derive(Debug, Clone)]
pub enum AppAction {
    /// Replace the user wholesale; `None` clears it. Last write wins.
    SetUser(Option<User>),
    /// Shallow-merge a partial settings update onto the current settings.
    MergeSettings(SettingsPatch),
    /// Replace the whole project list.
    SetProjects(Vec<Project>),
    /// Prepend one project; the list stays newest-first.
    AddProject(Project),
    /// Merge partial fields into the matching project only. Unknown ids
    /// are a silent no-op.
    UpdateProject { id: String, patch: ProjectPatch },
    SetLoading(bool),
    SetError(Option<String>),
    ToggleSidebar,
    /// Replace the theme sub-object within settings.
    SetTheme(Theme),
    /// Replace the language field within settings.
    SetLanguage(String),
}
