//! Runtime configuration for the bakery API.
//!
//! Everything is read from the process environment exactly once, at startup,
//! and handed to the router as plain data. Request handlers never touch
//! `std::env` themselves.

use std::net::SocketAddr;
use std::num::NonZeroUsize;

use thiserror::Error;

/// Address the server binds when `BAKERY_BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Startup configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}

/// Database credentials as found in the environment.
///
/// Each field is optional: a missing value is not a startup error, it only
/// forces the read endpoints onto their fallback payloads and the contact
/// endpoint onto its in-band error.
#[derive(Debug, Clone, Default)]
pub struct DbSettings {
    pub url: Option<String>,
    pub user: Option<String>,
    pub pass: Option<String>,
}

impl DbSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Only an unset variable counts as missing; an empty `DB_PASS` is a
    /// valid MySQL password.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            url: lookup("DB_URL"),
            user: lookup("DB_USER"),
            pass: lookup("DB_PASS"),
        }
    }

    /// Build settings from explicit values.
    pub fn new(url: impl Into<String>, user: impl Into<String>, pass: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            user: Some(user.into()),
            pass: Some(pass.into()),
        }
    }

    /// True when all three credentials are present.
    pub fn is_complete(&self) -> bool {
        self.url.is_some() && self.user.is_some() && self.pass.is_some()
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub workers: usize,
    pub database: DbSettings,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// `BAKERY_BIND_ADDR` and `BAKERY_WORKERS` are optional; when set they
    /// must parse, otherwise startup fails.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = parse_bind_addr(non_empty_var("BAKERY_BIND_ADDR").as_deref())?;
        let workers = parse_workers(non_empty_var("BAKERY_WORKERS").as_deref())?;

        Ok(Self {
            bind_addr,
            workers,
            database: DbSettings::from_env(),
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_bind_addr(raw: Option<&str>) -> Result<SocketAddr, ConfigError> {
    raw.unwrap_or(DEFAULT_BIND_ADDR)
        .trim()
        .parse()
        .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
            var: "BAKERY_BIND_ADDR",
            reason: e.to_string(),
        })
}

fn parse_workers(raw: Option<&str>) -> Result<usize, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse::<NonZeroUsize>()
            .map(NonZeroUsize::get)
            .map_err(|e| ConfigError::InvalidValue {
                var: "BAKERY_WORKERS",
                reason: e.to_string(),
            }),
        None => Ok(default_workers()),
    }
}

/// One worker per available processor.
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}
