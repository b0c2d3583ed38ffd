use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;

pub const ENV_PREFIX: &str = "EMOJIFY_";
pub const DEFAULT_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_LOG: &str = "info";

/// Settings read from `EMOJIFY_*` environment variables. Command line flags
/// take precedence over these.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// `EMOJIFY_DICTIONARY`
    pub dictionary: Option<PathBuf>,
    /// `EMOJIFY_ADDR`
    pub addr: Option<String>,
    /// `EMOJIFY_LOG`, used when `RUST_LOG` is unset
    pub log: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed(ENV_PREFIX).from_env()
    }

    /// Emoji data to load, or `None` for the integrated data set.
    pub fn dictionary_path(&self, flag: Option<PathBuf>) -> Option<PathBuf> {
        self.resolve_dictionary(flag, user_dictionary)
    }

    fn resolve_dictionary(
        &self,
        flag: Option<PathBuf>,
        user: impl FnOnce() -> Option<PathBuf>,
    ) -> Option<PathBuf> {
        flag.or_else(|| self.dictionary.clone()).or_else(user)
    }

    pub fn addr(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.addr.clone())
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
    }

    pub fn log_filter(&self) -> &str {
        self.log.as_deref().unwrap_or(DEFAULT_LOG)
    }
}

fn user_dictionary() -> Option<PathBuf> {
    ProjectDirs::from("", "", "emojify")
        .map(|dirs| dirs.data_dir().join("emoji.json"))
        .filter(|path| path.is_file())
}
