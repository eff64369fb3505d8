use crate::error::{BridgeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config path used when `TICKET_BRIDGE_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.sample.yml";

/// Header carrying the shared secret on webhook requests.
pub const TOKEN_HEADER: &str = "x-bridge-token";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Shared secret required on `/webhook` when set.
    #[serde(default)]
    pub bridge_token: Option<String>,
}

impl BridgeConfig {
    /// Load from `path`.
    ///
    /// A missing or blank file yields the default config (no token). Unknown
    /// keys are ignored.
    pub fn load(path: &Path) -> Result<Self> {
        let data = match std::fs::read_to_string(path) {
            Ok(d) => d,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(BridgeError::ConfigRead {
                    path: path.display().to_string(),
                    source,
                })
            }
        };
        Self::parse(&data).map_err(|source| BridgeError::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }

    fn parse(data: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Option<Self> = serde_yaml::from_str(data)?;
        Ok(config.unwrap_or_default())
    }

    /// The token, ignoring an empty string.
    pub fn token(&self) -> Option<&str> {
        self.bridge_token.as_deref().filter(|t| !t.is_empty())
    }
}
