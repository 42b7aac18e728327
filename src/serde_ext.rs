// -- std imports
use std::time::Duration;

// -- crate imports
use serde::{Deserialize, Deserializer};

pub mod humantime_serde_timeout {
    use super::*;

    /// Parses a notification timeout.
    ///
    /// Accepts a humantime string (`"2500ms"`, `"3s"`), `"never"` for a notification that does not
    /// expire, or `"default"` to leave the choice to the daemon.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.trim() {
            "default" => Ok(None),
            "never" => Ok(Some(Duration::ZERO)),
            other => humantime::parse_duration(other)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
