// Runtime configuration read from the environment.
//
// - `GOOGLE_API_TOKEN` (required): Google Books developer key.
// - `GOOGLE_BOOKS_API_URL` (optional): API base, defaults to the public endpoint.
// - `LIGHTBRARIAN_HOME` (optional): data directory, defaults to `~/.lightbrarian`.

use std::path::PathBuf;

pub const API_TOKEN_VAR: &str = "GOOGLE_API_TOKEN";
pub const API_URL_VAR: &str = "GOOGLE_BOOKS_API_URL";
pub const HOME_VAR: &str = "LIGHTBRARIAN_HOME";

pub const DEFAULT_API_URL: &str = "https://www.googleapis.com/books/v1";
pub const DATA_DIR_NAME: &str = ".lightbrarian";
pub const READING_LIST_FILE: &str = "default_reading_list.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("The GOOGLE_API_TOKEN environment variable must be set. See the README.md for more details.")]
    MissingApiToken,
    #[error("Could not determine the home directory. Set LIGHTBRARIAN_HOME to choose where the reading list is kept.")]
    NoHomeDirectory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_token: String,
    pub api_base_url: String,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok(), dirs::home_dir())
    }

    /// Build the configuration from an arbitrary variable lookup and home
    /// directory. Empty values count as unset.
    pub fn from_vars<F>(lookup: F, home: Option<PathBuf>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_token = var(API_TOKEN_VAR).ok_or(ConfigError::MissingApiToken)?;
        let api_base_url = var(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let data_dir = match var(HOME_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => home
                .map(|h| h.join(DATA_DIR_NAME))
                .ok_or(ConfigError::NoHomeDirectory)?,
        };

        Ok(Config {
            api_token,
            api_base_url,
            data_dir,
        })
    }

    pub fn reading_list_path(&self) -> PathBuf {
        self.data_dir.join(READING_LIST_FILE)
    }
}
