// -- std imports
use std::path::{Path, PathBuf};
use std::{fs, time::Duration};

// -- crate imports
use anyhow::{Context, Result};
use tracing::{info, warn};

// -- module imports
use crate::{serde_ext::humantime_serde_timeout, urgency::Urgency};

/// File name of the defaults file inside the application's XDG config directory.
pub const CONF_FILENAME: &str = "notify.yml";

/// Returns the path to the notification defaults file for the application `prefix`.
///
/// Resolves to a path like `~/.config/<prefix>/notify.yml`.
///
/// # Errors
/// - [`anyhow::Error`] if no such file exists in the XDG config directories.
pub fn conf_filepath(prefix: &str) -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix(prefix)
        .get_config_file(CONF_FILENAME)
        .context("Could not determine notification config file path")
}

/// Defaults for notifications sent without an explicit template.
///
/// Deserialized from YAML; every key is optional.
#[derive(Debug, PartialEq, Eq, Clone, serde::Deserialize)]
#[serde(default)]
pub struct Conf {
    /// Application name sent with each notification.
    ///
    /// Default: `""`.
    pub app_name: String,

    /// Icon name or path.
    ///
    /// Default: `""`.
    pub icon: String,

    /// Display duration; `never` and `default` are accepted besides humantime durations.
    ///
    /// Default: `3s`.
    #[serde(deserialize_with = "humantime_serde_timeout::deserialize")]
    pub timeout: Option<Duration>,

    /// One of `low`, `normal`, `critical`.
    ///
    /// Default: `normal`.
    pub urgency: Urgency,
}

impl Default for Conf {
    fn default() -> Self {
        Self {
            app_name: String::new(),
            icon: String::new(),
            timeout: Some(Duration::from_secs(3)),
            urgency: Urgency::Normal,
        }
    }
}

impl Conf {
    /// Loads the defaults for application `prefix` from [`conf_filepath`].
    ///
    /// Falls back to [`Conf::default`] if the file is missing or unreadable.
    pub fn load(prefix: &str) -> Self {
        match conf_filepath(prefix) {
            Ok(p) => Self::from_file(&p),
            Err(e) => {
                warn!("{}. Falling back to default notification settings.", e);
                Self::default()
            }
        }
    }

    /// Reads the defaults from the YAML file at `path`, falling back to [`Conf::default`] on any
    /// read or parse error.
    pub fn from_file(path: &Path) -> Self {
        Self::try_from_file(path)
            .map(|conf| {
                info!("Loaded notification settings from '{}'.", path.display());
                conf
            })
            .unwrap_or_else(|e| {
                warn!("{:#}. Falling back to default notification settings.", e);
                Self::default()
            })
    }

    /// Reads the defaults from the YAML file at `path`.
    ///
    /// # Errors
    /// - [`anyhow::Error`] if the file cannot be read or parsed.
    pub fn try_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file '{}'", path.display()))?;
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Could not parse config file '{}'", path.display()))
    }
}
