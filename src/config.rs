//! Startup configuration, read from the environment.

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ConfigError;

pub const ACCESS_TOKEN_VAR: &str = "MAPBOX_ACCESS_TOKEN";
pub const BASE_URL_VAR: &str = "MAPBOX_BASE_URL";
pub const PROFILE_VAR: &str = "MAPBOX_PROFILE";
pub const TIMEOUT_VAR: &str = "MAPBOX_TIMEOUT_SECS";
pub const DATA_DIR_VAR: &str = "ROUTE_DATA_DIR";

#[derive(Clone)]
pub struct MapboxConfig {
    pub base_url: String,
    /// Directions profile, e.g. "driving" or "driving-traffic".
    pub profile: String,
    pub access_token: String,
    pub timeout_secs: u64,
}

impl Default for MapboxConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.mapbox.com".to_string(),
            profile: "driving".to_string(),
            access_token: String::new(),
            timeout_secs: 10,
        }
    }
}

// Keeps the token out of logs and panic messages.
impl std::fmt::Debug for MapboxConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxConfig")
            .field("base_url", &self.base_url)
            .field("profile", &self.profile)
            .field("access_token", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl MapboxConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let access_token = env::var(ACCESS_TOKEN_VAR)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::MissingVar(ACCESS_TOKEN_VAR))?;

        Ok(Self {
            base_url: env::var(BASE_URL_VAR)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            profile: env::var(PROFILE_VAR).unwrap_or(defaults.profile),
            access_token,
            timeout_secs: parse_var(TIMEOUT_VAR)?.unwrap_or(defaults.timeout_secs),
        })
    }
}

/// Location of the JSON data files.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub data_dir: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::new("src/data")
    }
}

impl DataPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn from_env() -> Self {
        env::var(DATA_DIR_VAR).map(Self::new).unwrap_or_default()
    }

    pub fn locations(&self) -> PathBuf {
        self.file("locations.json")
    }

    pub fn challenges(&self) -> PathBuf {
        self.file("challenges.json")
    }

    pub fn geocoded_locations(&self) -> PathBuf {
        self.file("geocoded_locations.json")
    }

    pub fn driving_routes(&self) -> PathBuf {
        self.file("driving_routes.json")
    }

    pub fn resampled_driving_routes(&self) -> PathBuf {
        self.file("resampled_driving_routes.json")
    }

    fn file(&self, name: impl AsRef<Path>) -> PathBuf {
        self.data_dir.join(name)
    }
}

fn parse_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidVar { name, value }),
        Err(_) => Ok(None),
    }
}
