//! Runtime configuration, read from the environment.

use thiserror::Error;

use storefront_invoicing::DEFAULT_PAYMENT_HOST;
use storefront_observability::{LogFormat, ParseLogFormatError};

pub const INVOICE_HOST_VAR: &str = "STOREFRONT_INVOICE_HOST";
pub const LOG_FORMAT_VAR: &str = "STOREFRONT_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("STOREFRONT_INVOICE_HOST is set but empty")]
    EmptyInvoiceHost,

    #[error("invalid STOREFRONT_LOG_FORMAT: {0}")]
    LogFormat(#[from] ParseLogFormatError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub invoice_host: String,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            invoice_host: DEFAULT_PAYMENT_HOST.to_owned(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let invoice_host = match lookup(INVOICE_HOST_VAR) {
            Some(host) if host.trim().is_empty() => return Err(ConfigError::EmptyInvoiceHost),
            Some(host) => host.trim().to_owned(),
            None => DEFAULT_PAYMENT_HOST.to_owned(),
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            invoice_host,
            log_format,
        })
    }
}
