use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::state::AppSettings;
use super::state::SettingsPatch;
use super::state::User;

const SETTINGS_KEY: &str = "appSettings";
const USER_KEY: &str = "user";

/// Key/value JSON storage for the persisted slice of the application state,
/// one file per key under an origin-scoped directory. There is no schema
/// version field; unreadable or malformed content loads as absent.
#[derive(Debug)]
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    pub fn open(dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// A persisted settings blob parses into a patch, so a blob written by
    /// an older client with missing keys still restores what it has.
    pub fn load_settings(&self) -> Option<SettingsPatch> {
        self.load_key(SETTINGS_KEY)
    }

    pub fn save_settings(&self, settings: &AppSettings) -> std::io::Result<()> {
        self.save_key(SETTINGS_KEY, settings)
    }

    pub fn load_user(&self) -> Option<User> {
        self.load_key(USER_KEY)
    }

    pub fn save_user(&self, user: &User) -> std::io::Result<()> {
        self.save_key(USER_KEY, user)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn load_key<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.key_path(key);
        if !path.exists() {
            return None;
        }
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::warn!("failed to read {key}: {err}");
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("failed to parse {key}: {err}");
                None
            }
        }
    }

    fn save_key<T: Serialize>(&self, key: &str, value: &T) -> std::io::Result<()> {
        let encoded = serde_json::to_vec(value)
            .map_err(|err| std::io::Error::other(format!("serialize {key}: {err}")))?;
        fs::write(self.key_path(key), encoded)
    }
}
