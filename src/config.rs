//! Server configuration parsed from environment variables.
//!
//! The Leptos build settings in `Cargo.toml` provide the defaults; the
//! variables here only override them at deploy time.

use std::net::SocketAddr;
use std::sync::Arc;

use leptos::config::LeptosOptions;

pub const ADDR_VAR: &str = "FOLIO_ADDR";
pub const SITE_ROOT_VAR: &str = "FOLIO_SITE_ROOT";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The listen address could not be parsed.
    #[error("invalid {var} '{value}': expected host:port")]
    InvalidAddr { var: &'static str, value: String },

    /// The site root override was set but empty.
    #[error("{var} is set but empty")]
    EmptySiteRoot { var: &'static str },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: Option<SocketAddr>,
    pub site_root: Option<String>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `FOLIO_ADDR`: listen address, e.g. `0.0.0.0:8080`
    /// - `FOLIO_SITE_ROOT`: directory holding the built `pkg/` assets
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = std::env::var(ADDR_VAR).ok();
        let site_root = std::env::var(SITE_ROOT_VAR).ok();
        Self::parse(addr.as_deref(), site_root.as_deref())
    }

    /// Parse raw variable values. `None` means the variable is unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is present but malformed.
    pub fn parse(addr: Option<&str>, site_root: Option<&str>) -> Result<Self, ConfigError> {
        let addr = addr
            .map(|raw| {
                raw.trim()
                    .parse::<SocketAddr>()
                    .map_err(|_| ConfigError::InvalidAddr { var: ADDR_VAR, value: raw.to_string() })
            })
            .transpose()?;

        let site_root = match site_root.map(str::trim) {
            None => None,
            Some("") => return Err(ConfigError::EmptySiteRoot { var: SITE_ROOT_VAR }),
            Some(path) => Some(path.to_string()),
        };

        Ok(Self { addr, site_root })
    }

    /// Overlay the overrides onto Leptos options.
    #[must_use]
    pub fn apply(&self, mut options: LeptosOptions) -> LeptosOptions {
        if let Some(addr) = self.addr {
            options.site_addr = addr;
        }
        if let Some(root) = &self.site_root {
            options.site_root = Arc::from(root.as_str());
        }
        options
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
