//! Persistent settings.
//!
//! Settings are read from `settings.toml` in the platform config folder:
//! - macOS: ~/Library/Application Support/sdrf-mapper/
//! - Windows: %APPDATA%/sdrf-mapper/config/
//! - Linux: ~/.config/sdrf-mapper/
//!
//! ```toml
//! [ontology]
//! path = "/data/sdrf/terms.json"
//!
//! [matching]
//! rejected_targets = "release"
//!
//! [organism.extra_aliases]
//! "Rattus norvegicus" = ["rat", "Rat"]
//!
//! [export]
//! missing_value = "not available"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use sdrf_map::{MatchOptions, RejectedTargetPolicy};
use sdrf_output::TsvOptions;
use sdrf_standards::SynonymNormalizer;

const APP_QUALIFIER: &str = "";
const APP_ORG: &str = "";
const APP_NAME: &str = "sdrf-mapper";
const CONFIG_FILENAME: &str = "settings.toml";

/// Errors from loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Settings file exists but cannot be read.
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML for [`Settings`].
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// All user settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ontology: OntologySettings,
    pub matching: MatchingSettings,
    pub organism: OrganismSettings,
    pub export: ExportSettings,
}

/// Where ontology term sets are loaded from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OntologySettings {
    /// JSON term-set file or directory of term files.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingSettings {
    /// Whether targets of rejected pairs stay available.
    pub rejected_targets: RejectedTargetPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganismSettings {
    /// Extra aliases per canonical organism name, added after the built-in table.
    pub extra_aliases: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Text written for missing cells (empty by default).
    pub missing_value: String,
}

impl Settings {
    /// Organism normalizer: the built-in table plus configured extras.
    pub fn normalizer(&self) -> SynonymNormalizer {
        let mut normalizer = SynonymNormalizer::organisms();
        for (canonical, aliases) in &self.organism.extra_aliases {
            normalizer.extend(canonical, aliases);
        }
        normalizer
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            rejected_targets: self.matching.rejected_targets,
        }
    }

    pub fn tsv_options(&self) -> TsvOptions {
        TsvOptions::with_missing_value(self.export.missing_value.clone())
    }
}

/// Get the path to the default settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings.
///
/// An explicit path must exist. Without one, the default location is used
/// and a missing file yields defaults. A malformed file is always an error.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, SettingsError> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => match settings_path() {
            Some(path) => (path, false),
            None => {
                tracing::warn!("could not determine settings path, using defaults");
                return Ok(Settings::default());
            }
        },
    };

    match fs::read_to_string(&path) {
        Ok(content) => {
            let settings = parse_settings(&content, &path)?;
            tracing::debug!(path = %path.display(), "loaded settings");
            Ok(settings)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Settings::default())
        }
        Err(source) => Err(SettingsError::Read { path, source }),
    }
}

fn parse_settings(content: &str, path: &Path) -> Result<Settings, SettingsError> {
    toml::from_str(content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_settings_parse() {
        let content = r#"
[ontology]
path = "/data/terms.json"

[matching]
rejected_targets = "release"

[organism.extra_aliases]
"Rattus norvegicus" = ["rat", "Rat"]

[export]
missing_value = "not available"
"#;
        let settings = parse_settings(content, Path::new("settings.toml")).unwrap();
        assert_eq!(settings.ontology.path, Some(PathBuf::from("/data/terms.json")));
        assert_eq!(
            settings.match_options().rejected_targets,
            RejectedTargetPolicy::Release
        );
        assert_eq!(settings.tsv_options().missing_value, "not available");
        assert_eq!(settings.normalizer().normalize("rat"), "Rattus norvegicus");
        assert_eq!(settings.normalizer().normalize("mouse"), "Mus musculus");
    }

    #[test]
    fn test_partial_settings_use_defaults() {
        let settings = parse_settings("[export]\nmissing_value = \"NA\"\n", Path::new("s.toml")).unwrap();
        assert_eq!(settings.matching.rejected_targets, RejectedTargetPolicy::Consume);
        assert!(settings.ontology.path.is_none());
    }

    #[test]
    fn test_unknown_policy_is_an_error() {
        let err = parse_settings("[matching]\nrejected_targets = \"keep\"\n", Path::new("s.toml"))
            .unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn test_settings_round_trip() {
        let mut settings = Settings::default();
        settings.export.missing_value = "not applicable".to_string();
        let text = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_settings(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }
}
