//! Environment-driven settings for the HTTP service
//!
//! Variables are read through `dotenvy`, so a `.env` file in the working
//! directory is honored after `dotenvy::dotenv()` has been called.
//!
//! | variable | required | default |
//! |---|---|---|
//! | `RPC_URL` | no | `http://127.0.0.1:7545` |
//! | `CONTRACT_ADDRESS` | yes | |
//! | `PRIVATE_KEY` | yes | |
//! | `PORT` | no | `3001` |
//! | `LOG_FORMAT` | no | text (`json` for structured output) |

use alloy_primitives::Address;
use dotenvy::var;
use url::Url;

use super::constants::{DEFAULT_PORT, DEFAULT_RPC_URL};
use crate::errors::ConfigError;

/// Settings the service binary needs at startup
#[derive(Clone)]
pub struct ServiceConfig {
    pub rpc_url: Url,
    pub contract_address: Address,
    /// Hex-encoded signing key for faucet transactions
    pub private_key: String,
    pub port: u16,
    pub json_logs: bool,
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("rpc_url", &self.rpc_url.as_str())
            .field("contract_address", &self.contract_address)
            .field("private_key", &"<redacted>")
            .field("port", &self.port)
            .field("json_logs", &self.json_logs)
            .finish()
    }
}

impl ServiceConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(var)
    }

    /// Read the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<String, dotenvy::Error>,
    {
        let rpc_url = lookup("RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());
        let rpc_url = rpc_url
            .parse::<Url>()
            .map_err(|e| ConfigError::invalid_value("RPC_URL", e.to_string()))?;

        let contract_address = lookup("CONTRACT_ADDRESS")
            .map_err(|e| ConfigError::MissingEnvVar("CONTRACT_ADDRESS", e))?
            .parse::<Address>()
            .map_err(|e| ConfigError::invalid_value("CONTRACT_ADDRESS", e.to_string()))?;

        let private_key =
            lookup("PRIVATE_KEY").map_err(|e| ConfigError::MissingEnvVar("PRIVATE_KEY", e))?;

        let port = match lookup("PORT") {
            Ok(port) => port
                .parse::<u16>()
                .map_err(|e| ConfigError::invalid_value("PORT", e.to_string()))?,
            Err(_) => DEFAULT_PORT,
        };

        let json_logs = lookup("LOG_FORMAT")
            .map(|format| format.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Ok(Self {
            rpc_url,
            contract_address,
            private_key,
            port,
            json_logs,
        })
    }
}
