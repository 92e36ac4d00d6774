//! Global daylist configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::codec::RecoveryPolicy;
use crate::error::{DayListError, DayListResult};
use crate::persistence::{DEFAULT_BLOB_NAME, FilePersistence};
use crate::store::{StoreOptions, TextPolicy, TodoStore};
use crate::week::WeekStart;

static DEFAULT_DATA_PATH: &str = "~/.daylist";

static ENV_PREFIX: &str = "DAYLIST";

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn default_blob_name() -> String {
    DEFAULT_BLOB_NAME.to_string()
}

/// Configuration at ~/.config/daylist/config.toml
///
/// Every key can also be set through a `DAYLIST_` environment variable,
/// e.g. `DAYLIST_DATA_DIR`.
#[derive(Debug, Deserialize, Clone)]
pub struct DayListConfig {
    #[serde(default = "default_data_path")]
    pub data_dir: PathBuf,

    #[serde(default = "default_blob_name")]
    pub blob_name: String,

    #[serde(default)]
    pub week_start: WeekStart,

    #[serde(default)]
    pub text_policy: TextPolicy,

    #[serde(default)]
    pub recovery: RecoveryPolicy,
}

impl Default for DayListConfig {
    fn default() -> Self {
        DayListConfig {
            data_dir: default_data_path(),
            blob_name: default_blob_name(),
            week_start: WeekStart::default(),
            text_policy: TextPolicy::default(),
            recovery: RecoveryPolicy::default(),
        }
    }
}

impl DayListConfig {
    pub fn config_path() -> DayListResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DayListError::Config("Could not determine config directory".into()))?
            .join("daylist");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file on first run.
    pub fn load() -> DayListResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> DayListResult<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// File values first, then `env` on top.
    fn load_with_env(path: &Path, env: Environment) -> DayListResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env)
            .build()
            .map_err(|e| DayListError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DayListError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DayListResult<()> {
        let contents = format!(
            "\
# daylist configuration

# Where your tasks are saved:
# data_dir = \"{}\"

# Name of the saved task file (without .json):
# blob_name = \"{}\"

# First day of the week strip:
# week_start = \"sunday\"

# Reject empty or whitespace-only tasks (\"permissive\" or \"reject-blank\"):
# text_policy = \"permissive\"

# What to do with partly corrupt saved data (\"salvage\" or \"discard\"):
# recovery = \"salvage\"
",
            DEFAULT_DATA_PATH, DEFAULT_BLOB_NAME
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DayListError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DayListError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            text_policy: self.text_policy,
            recovery: self.recovery,
        }
    }

    pub fn persistence(&self) -> FilePersistence {
        FilePersistence::new(&self.data_path(), &self.blob_name)
    }

    pub fn open_store(&self) -> TodoStore<FilePersistence> {
        TodoStore::load(self.persistence(), self.store_options())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("daylist").join("config.toml");

        DayListConfig::create_default_config(&path).unwrap();
        let config = DayListConfig::load_from(&path).unwrap();

        assert_eq!(config.blob_name, "todos");
        assert_eq!(config.week_start, WeekStart::Sunday);
        assert_eq!(config.text_policy, TextPolicy::Permissive);
        assert_eq!(config.recovery, RecoveryPolicy::Salvage);
    }

    #[test]
    fn reads_explicit_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
data_dir = "/tmp/daylist-data"
blob_name = "work"
week_start = "monday"
text_policy = "reject-blank"
recovery = "discard"
"#,
        )
        .unwrap();

        let config = DayListConfig::load_from(&path).unwrap();

        assert_eq!(config.week_start, WeekStart::Monday);
        assert_eq!(config.text_policy, TextPolicy::RejectBlank);
        assert_eq!(config.recovery, RecoveryPolicy::Discard);
        assert_eq!(
            config.persistence().path(),
            Path::new("/tmp/daylist-data/work.json")
        );
    }

    #[test]
    fn data_dir_env_var_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = \"/from/file\"\nblob_name = \"work\"\n").unwrap();

        let vars: config::Map<String, String> = [
            ("DAYLIST_DATA_DIR".to_string(), "/from/env".to_string()),
            ("DAYLIST_WEEK_START".to_string(), "monday".to_string()),
            ("OTHER_DATA_DIR".to_string(), "/ignored".to_string()),
        ]
        .into_iter()
        .collect();
        let env = Environment::with_prefix(ENV_PREFIX).source(Some(vars));

        let config = DayListConfig::load_with_env(&path, env).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/from/env"));
        assert_eq!(config.blob_name, "work");
        assert_eq!(config.week_start, WeekStart::Monday);
        assert_eq!(
            config.persistence().path(),
            Path::new("/from/env/work.json")
        );
    }

    #[test]
    fn rejects_unknown_policy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "text_policy = \"strict\"\n").unwrap();

        assert!(matches!(
            DayListConfig::load_from(&path),
            Err(DayListError::Config(_))
        ));
    }

    #[test]
    fn expands_tilde_in_data_dir() {
        let config = DayListConfig::default();
        assert!(!config.data_path().to_string_lossy().starts_with('~'));
    }
}
