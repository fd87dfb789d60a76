use crate::error::{JokeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name of the per-user config, placed directly in the home directory
pub const CONFIG_FILE_NAME: &str = ".jokeapp.yaml";

/// Contents of `~/.jokeapp.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JokeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deepseek_api_key: Option<String>,

    /// Keys this program does not interpret, written back as they were found
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Build the config path from a home directory lookup.
///
/// A failed lookup is reported and falls back to an empty base directory,
/// leaving a path relative to the working directory.
pub fn resolve_config_path<F>(home_dir: F) -> PathBuf
where
    F: FnOnce() -> Option<PathBuf>,
{
    let home = home_dir().unwrap_or_else(|| {
        tracing::warn!("Could not determine home directory");
        eprintln!("Error fetching user home directory");
        PathBuf::new()
    });
    home.join(CONFIG_FILE_NAME)
}

/// Reads and writes the API key at a fixed path
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the invoking user's `~/.jokeapp.yaml`
    pub fn for_current_user() -> Self {
        Self::new(resolve_config_path(dirs::home_dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<JokeConfig> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            JokeError::ConfigUnreadable(format!("{}: {}", self.path.display(), e))
        })?;

        // An empty document parses as null rather than an empty mapping
        if content.trim().is_empty() {
            return Ok(JokeConfig::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| JokeError::ConfigUnreadable(format!("{}: {}", self.path.display(), e)))
    }

    /// Load the configured API key. Missing file, bad YAML and an absent key
    /// all come back as `ConfigUnreadable`.
    pub fn load_credential(&self) -> Result<String> {
        tracing::debug!(path = %self.path.display(), "Loading config");

        self.read()?.deepseek_api_key.ok_or_else(|| {
            JokeError::ConfigUnreadable(format!(
                "{}: deepseek_api_key is not set",
                self.path.display()
            ))
        })
    }

    /// Overwrite the config with `api_key`, keeping any other keys that were
    /// readable from the existing file.
    pub fn save_credential(&self, api_key: &str) -> Result<()> {
        let mut config = self.read().unwrap_or_default();
        config.deepseek_api_key = Some(api_key.to_string());

        let write_err = |message: String| JokeError::ConfigWrite {
            path: self.path.clone(),
            message,
        };

        let yaml = serde_yaml::to_string(&config).map_err(|e| write_err(e.to_string()))?;

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options
            .open(&self.path)
            .map_err(|e| write_err(e.to_string()))?;
        file.write_all(yaml.as_bytes())
            .and_then(|_| file.sync_all())
            .map_err(|e| write_err(e.to_string()))?;

        Ok(())
    }
}
