// Runtime configuration, read once in the shell and handed to the workflow.
//
// Environment
// - REGISTRATION_ENDPOINT     Apps Script web app URL. Unset or placeholder disables dispatch.
// - REGISTRATION_LISTEN_ADDR  Address the HTTP shell binds to. Defaults to 0.0.0.0:8080.
// - REGISTRATION_TIMEOUT_MS   Upper bound on one outbound post. Defaults to 10000.

use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const ENDPOINT_PLACEHOLDER: &str = "PASTE_YOUR_GOOGLE_SCRIPT_URL_HERE";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid listen address {0:?}")]
    InvalidListenAddr(String),

    #[error("invalid dispatch timeout {0:?}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationConfig {
    pub endpoint: Option<String>,
    pub listen_addr: SocketAddr,
    pub modal_close_delay: Duration,
    pub toast_display: Duration,
    pub toast_exit: Duration,
    pub dispatch_timeout: Duration,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            modal_close_delay: Duration::from_millis(2_000),
            toast_display: Duration::from_millis(4_000),
            toast_exit: Duration::from_millis(300),
            dispatch_timeout: Duration::from_secs(10),
        }
    }
}

impl RegistrationConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into().trim().to_string()),
            ..Self::default()
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let endpoint = lookup("REGISTRATION_ENDPOINT").map(|value| value.trim().to_string());
        let listen_addr = lookup("REGISTRATION_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidListenAddr(listen_addr.clone()))?;
        let dispatch_timeout = match lookup("REGISTRATION_TIMEOUT_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|millis| *millis > 0)
                .map(Duration::from_millis)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw.clone()))?,
            None => Self::default().dispatch_timeout,
        };

        Ok(Self {
            endpoint,
            listen_addr,
            dispatch_timeout,
            ..Self::default()
        })
    }

    /// The endpoint to post to, or None when it is unset, blank or still the
    /// placeholder.
    pub fn dispatch_endpoint(&self) -> Option<&str> {
        self.endpoint
            .as_deref()
            .map(str::trim)
            .filter(|endpoint| !endpoint.is_empty() && !endpoint.contains(ENDPOINT_PLACEHOLDER))
    }
}
