//! User settings (`config.yaml`)
//!
//! Located at `$AC_CONFIG`, else `<config dir>/ac/config.yaml`. Every field is
//! optional; command-line flags and environment variables take precedence.
//!
//! ```yaml
//! source: ~/dotfiles/agents
//! merge: skip
//! platforms: [claude, amp]
//! user_level: false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::MergePolicy;
use crate::error::{Result, config::parse_failed, config::read_failed};

/// Environment variable overriding the settings file location
pub const CONFIG_ENV: &str = "AC_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Source root used when neither `--source` nor `AC_SOURCE` is given
    pub source: Option<PathBuf>,

    /// Merge policy used when `--merge` is not given
    pub merge: Option<MergePolicy>,

    /// Platforms used when none are given on the command line
    pub platforms: Vec<String>,

    pub user_level: bool,
}

impl Settings {
    /// Parse settings from YAML; an empty document yields defaults
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Self = serde_yaml::from_str(yaml)?;
        Ok(settings)
    }

    /// Load settings from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file");
                return Ok(Self::default());
            }
            Err(e) => return Err(read_failed(path.display().to_string(), e.to_string())),
        };

        let settings = Self::from_yaml(&content)
            .map_err(|e| parse_failed(path.display().to_string(), e.to_string()))?;
        debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Load settings from the default location
    pub fn load() -> Result<Self> {
        match settings_path(std::env::var_os(CONFIG_ENV).map(PathBuf::from)) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// `source` with a leading `~` expanded
    pub fn source_path(&self) -> Option<PathBuf> {
        let source = self.source.as_ref()?;
        match source.strip_prefix("~") {
            Ok(rest) => dirs::home_dir().map(|home| home.join(rest)),
            Err(_) => Some(source.clone()),
        }
    }
}

/// Settings file location: an explicit override, else the platform config dir
pub fn settings_path(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path.or_else(|| dirs::config_dir().map(|dir| dir.join("ac").join("config.yaml")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AcError;
    use crate::test_fixtures::{create_temp_dir, create_test_files};
    use serial_test::serial;

    #[test]
    fn test_from_yaml() {
        let settings =
            Settings::from_yaml("merge: skip\nplatforms: [claude, amp]\nuser_level: true\n")
                .unwrap();

        assert_eq!(settings.merge, Some(MergePolicy::Skip));
        assert_eq!(settings.platforms, vec!["claude", "amp"]);
        assert!(settings.user_level);
        assert!(settings.source.is_none());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Settings::from_yaml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_missing_file_is_default() {
        let temp = create_temp_dir();
        let settings = Settings::load_from(&temp.path().join("config.yaml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("config.yaml", "platforms: [claude\n")]);

        let result = Settings::load_from(&temp.path().join("config.yaml"));
        assert!(matches!(
            result,
            Err(AcError::ConfigParseFailed { ref path, .. }) if path.ends_with("config.yaml")
        ));
    }

    #[test]
    fn test_invalid_merge_value_is_parse_error() {
        assert!(matches!(
            Settings::from_yaml("merge: append"),
            Err(AcError::ConfigParseFailed { .. })
        ));
    }

    #[test]
    fn test_source_path_expands_home() {
        let settings = Settings {
            source: Some(PathBuf::from("~/agents")),
            ..Settings::default()
        };
        assert_eq!(
            settings.source_path(),
            dirs::home_dir().map(|h| h.join("agents"))
        );
    }

    #[test]
    fn test_settings_path_override() {
        assert_eq!(
            settings_path(Some(PathBuf::from("/tmp/ac.yaml"))),
            Some(PathBuf::from("/tmp/ac.yaml"))
        );
    }

    #[test]
    #[serial]
    fn test_load_honors_config_env() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("custom.yaml", "platforms: [droid]\n")]);

        let original = std::env::var_os(CONFIG_ENV);
        unsafe {
            std::env::set_var(CONFIG_ENV, temp.path().join("custom.yaml"));
        }

        let settings = Settings::load();

        unsafe {
            match original {
                Some(o) => std::env::set_var(CONFIG_ENV, o),
                None => std::env::remove_var(CONFIG_ENV),
            }
        }
        assert_eq!(settings.unwrap().platforms, vec!["droid"]);
    }
}
