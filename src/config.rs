//! Gateway configuration loaded from environment variables.

use std::fmt;

use serde::Deserialize;

use crate::error::{GatewayError, Result};

/// Gateway configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Listener ===
    /// Bind host.
    #[serde(default = "default_host")]
    pub app_host: String,

    /// Bind port.
    #[serde(default = "default_port")]
    pub app_port: u16,

    /// Verbose/development mode.
    #[serde(default)]
    pub app_debug: bool,

    // === API Versions ===
    /// API versions to mount, comma-separated (e.g. "v1,v2").
    #[serde(default = "default_api_versions")]
    pub app_api_versions: Vec<ApiVersion>,

    // === Telemetry ===
    /// Error-telemetry DSN. Telemetry stays disabled when absent.
    #[serde(default)]
    pub sentry_dsn: Option<String>,
}

/// A mountable API version.
///
/// `V1` is deprecated for security reasons and is not part of the default
/// mount set; enabling it is a configuration change, not a code change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    /// Path prefix the version's router is nested under.
    pub fn mount_path(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "/api/v1",
            ApiVersion::V2 => "/api/v2",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiVersion::V1 => write!(f, "v1"),
            ApiVersion::V2 => write!(f, "v2"),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    6644
}

fn default_api_versions() -> Vec<ApiVersion> {
    vec![ApiVersion::V2]
}

impl Config {
    /// Load configuration from environment, reading a `.env` file first.
    ///
    /// A missing `.env` file is not an error. Values already present in the
    /// process environment win over file entries.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env().map_err(GatewayError::Config)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        if self.app_api_versions.is_empty() {
            return Err(GatewayError::InvalidConfig(
                "APP_API_VERSIONS must name at least one version".to_string(),
            ));
        }

        for (i, version) in self.app_api_versions.iter().enumerate() {
            if self.app_api_versions[..i].contains(version) {
                return Err(GatewayError::InvalidConfig(format!(
                    "APP_API_VERSIONS lists {version} more than once"
                )));
            }
        }

        Ok(())
    }

    /// Check whether a version is in the mount set.
    pub fn version_enabled(&self, version: ApiVersion) -> bool {
        self.app_api_versions.contains(&version)
    }
}
