use serde::Deserialize;
use serde::Serialize;

const DEMO_AVATAR_URL: &str =
    "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=100&h=100&fit=crop";

/// Starting credit balance granted to a freshly seeded demo account.
pub const DEMO_STARTING_CREDITS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Free,
    Pro,
    Enterprise,
}

impl Plan {
    pub fn label(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
            Self::Enterprise => "enterprise",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub avatar: Option<String>,
    pub plan: Plan,
    pub credits: u32,
}

impl User {
    /// The fixed account seeded when no user has ever been persisted.
    pub fn demo() -> Self {
        Self {
            id: "1".to_string(),
            username: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            avatar: Some(DEMO_AVATAR_URL.to_string()),
            plan: Plan::Free,
            credits: DEMO_STARTING_CREDITS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub mode: ThemeMode,
    pub primary_color: String,
    pub accent_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Light,
            primary_color: "#3B82F6".to_string(),
            accent_color: "#10B981".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessibilityPrefs {
    pub screen_reader: bool,
    pub voice_assistant: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationPrefs {
    pub email: bool,
    pub push: bool,
    pub processing: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            processing: true,
        }
    }
}

/// Always a complete structure. Partial updates arrive as a
/// [`SettingsPatch`] and are merged via [`merge_settings`]; no key is ever
/// dropped by an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub language: String,
    pub theme: Theme,
    pub accessibility: AccessibilityPrefs,
    pub notifications: NotificationPrefs,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            theme: Theme::default(),
            accessibility: AccessibilityPrefs::default(),
            notifications: NotificationPrefs::default(),
        }
    }
}

/// Partial settings update. A persisted settings blob also parses into a
/// patch, so an older blob missing a key falls back to the current value
/// for that key instead of failing the whole load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    pub language: Option<String>,
    pub theme: Option<Theme>,
    pub accessibility: Option<AccessibilityPrefs>,
    pub notifications: Option<NotificationPrefs>,
}

/// Shallow merge: a present key replaces the whole sub-object, an absent
/// key keeps the current value.
pub fn merge_settings(current: AppSettings, patch: SettingsPatch) -> AppSettings {
    AppSettings {
        language: patch.language.unwrap_or(current.language),
        theme: patch.theme.unwrap_or(current.theme),
        accessibility: patch.accessibility.unwrap_or(current.accessibility),
        notifications: patch.notifications.unwrap_or(current.notifications),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Draft,
    Processing,
    Completed,
    Failed,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Free-form slug of the feature that produced the project.
    #[serde(rename = "type")]
    pub kind: String,
    pub status: ProjectStatus,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
    pub thumbnail: Option<String>,
    /// Opaque per-feature settings blob; the core never inspects it.
    pub settings: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub status: Option<ProjectStatus>,
    pub updated_at_ms: Option<i64>,
    pub thumbnail: Option<String>,
    pub settings: Option<serde_json::Value>,
}

/// Merge present fields of the patch into the project.
pub fn apply_project_patch(project: &mut Project, patch: ProjectPatch) {
    if let Some(name) = patch.name {
        project.name = name;
    }
    if let Some(status) = patch.status {
        project.status = status;
    }
    if let Some(updated_at_ms) = patch.updated_at_ms {
        project.updated_at_ms = updated_at_ms;
    }
    if let Some(thumbnail) = patch.thumbnail {
        project.thumbnail = Some(thumbnail);
    }
    if let Some(settings) = patch.settings {
        project.settings = Some(settings);
    }
}

/// The single source of truth for the whole client. Nothing outside the
/// store holds a divergent copy of user, settings or projects.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub user: Option<User>,
    pub settings: AppSettings,
    /// Insertion order at the head: newest project first.
    pub projects: Vec<Project>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub sidebar_collapsed: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            user: None,
            settings: AppSettings::default(),
            projects: Vec::new(),
            is_loading: false,
            error: None,
            sidebar_collapsed: false,
        }
    }
}

impl AppState {
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }
}
