//! Settings infrastructure for styled-css.
//!
//! Settings come from a `styled.toml` file. The host may also build them
//! directly and hand them to [`StyledTemplateService`](crate::StyledTemplateService).
//!
//! ```toml
//! validate = true
//!
//! [lint]
//! unknownProperties = "error"
//! emptyRules = "ignore"
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// File name searched for by [`discover_settings`].
pub const SETTINGS_FILE: &str = "styled.toml";

/// Errors that can occur while reading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML or has unexpected values.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Root settings structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Report diagnostics for templates (default: true).
    pub validate: Option<bool>,

    /// Lint rule levels keyed by rule name, e.g. `unknownProperties`.
    ///
    /// Forwarded as-is to the stylesheet engines; rules an engine does not
    /// know are ignored by it.
    #[serde(default)]
    pub lint: HashMap<String, LintLevel>,
}

/// Severity assigned to a lint rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LintLevel {
    Ignore,
    Warning,
    Error,
}

impl Settings {
    /// Whether diagnostics should be produced.
    pub fn validate(&self) -> bool {
        self.validate.unwrap_or(true)
    }

    /// Configured level for a lint rule, or `default` if unset.
    pub fn lint_level(&self, rule: &str, default: LintLevel) -> LintLevel {
        self.lint.get(rule).copied().unwrap_or(default)
    }
}

/// Parse settings from TOML text.
pub fn parse_settings(content: &str) -> Result<Settings, SettingsError> {
    Ok(toml::from_str(content)?)
}

/// Read and parse a settings file.
pub fn read_settings(path: &Path) -> Result<Settings, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_settings(&content)
}

/// Load settings from a file.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(path: &Path) -> Settings {
    match read_settings(path) {
        Ok(settings) => settings,
        Err(SettingsError::Io { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            Settings::default()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "using default settings");
            Settings::default()
        }
    }
}

/// Discover `styled.toml` by walking up from `start_dir`.
///
/// Returns the settings and the directory that contained the file. If no file
/// is found, returns `(Settings::default(), start_dir)`.
pub fn discover_settings(start_dir: &Path) -> (Settings, PathBuf) {
    let mut current = Some(start_dir);
    while let Some(dir) = current {
        let candidate = dir.join(SETTINGS_FILE);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "found settings");
            return (load_settings(&candidate), dir.to_path_buf());
        }
        current = dir.parent();
    }

    (Settings::default(), start_dir.to_path_buf())
}
