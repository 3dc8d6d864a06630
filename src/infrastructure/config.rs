use crate::domain::ports::GatewayConfiguration;
use crate::error::{PaymentError, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Environment variable holding the capture flag.
pub const ENV_PERFORM_AUTHORIZE_AND_CAPTURE: &str = "PASSTHROUGH_PERFORM_AUTHORIZE_AND_CAPTURE";

/// Configuration of the passthrough gateway.
///
/// Capture is enabled unless configured otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassthroughConfig {
    /// Record callbacks as authorize-and-capture rather than authorize only.
    pub perform_authorize_and_capture: bool,
}

impl Default for PassthroughConfig {
    fn default() -> Self {
        Self {
            perform_authorize_and_capture: true,
        }
    }
}

impl PassthroughConfig {
    /// Loads the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the configuration through `lookup`, which resolves a variable
    /// name to its value. Unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(ENV_PERFORM_AUTHORIZE_AND_CAPTURE) {
            config.perform_authorize_and_capture =
                parse_flag(ENV_PERFORM_AUTHORIZE_AND_CAPTURE, &raw)?;
        }
        Ok(config)
    }

    /// Reads a JSON configuration document, e.g.
    /// `{"perform_authorize_and_capture": false}`. Missing keys keep their
    /// defaults.
    pub fn from_json_reader<R: Read>(source: R) -> Result<Self> {
        Ok(serde_json::from_reader(source)?)
    }
}

impl GatewayConfiguration for PassthroughConfig {
    fn perform_authorize_and_capture(&self) -> bool {
        self.perform_authorize_and_capture
    }
}

fn parse_flag(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(PaymentError::Configuration(format!(
            "{name} must be true or false, got '{raw}'"
        ))),
    }
}
