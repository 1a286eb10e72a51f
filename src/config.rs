//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and passed into the
//! request handlers as an explicit value. Handlers never read the process
//! environment.
//!
//! ## Variables
//!
//! ```bash
//! # Redirect targets (empty or unset means "not configured")
//! export APPSTORE_URL="https://apps.apple.com/app/example-app/id123456789"
//! export PLAYSTORE_URL="https://play.google.com/store/apps/details?id=com.example.app"
//! export FALLBACK="https://example.com"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! A missing `FALLBACK` does not abort startup: the condition is a
//! deployment error that must surface as a 500 on every request, exactly
//! as it would if the variable disappeared after the process came up.
//! Startup only logs a warning for it.

use anyhow::Result;
use std::env;
use url::Url;

/// Destination URLs for the redirect decision.
///
/// An empty string means the target is not configured; the selector falls
/// through to the next priority level rather than redirecting to an empty
/// `Location`.
#[derive(Debug, Clone, Default)]
pub struct RedirectTargets {
    /// iOS App Store destination (`APPSTORE_URL`).
    pub app_store_url: String,
    /// Android Play Store destination (`PLAYSTORE_URL`).
    pub play_store_url: String,
    /// Default destination for everything else (`FALLBACK`).
    pub fallback_url: String,
}

impl RedirectTargets {
    /// Returns whether the required fallback target is configured.
    pub fn has_fallback(&self) -> bool {
        !self.fallback_url.is_empty()
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub targets: RedirectTargets,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Absent variables fall back to their defaults; absent redirect
    /// targets become empty strings.
    pub fn from_env() -> Self {
        let targets = RedirectTargets {
            app_store_url: env::var("APPSTORE_URL").unwrap_or_default(),
            play_store_url: env::var("PLAYSTORE_URL").unwrap_or_default(),
            fallback_url: env::var("FALLBACK").unwrap_or_default(),
        };

        Self {
            listen_addr: env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string()),
            targets,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `LOG_FORMAT` is not `text` or `json`
    /// - `LISTEN` is not in `host:port` form
    /// - a non-empty redirect target is not an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // Validate listen address format
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        // Validate redirect targets (empty means "not configured" and is
        // handled at request time, so only non-empty values are checked)
        validate_target("APPSTORE_URL", &self.targets.app_store_url)?;
        validate_target("PLAYSTORE_URL", &self.targets.play_store_url)?;
        validate_target("FALLBACK", &self.targets.fallback_url)?;

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  App Store target: {}", describe(&self.targets.app_store_url));
        tracing::info!(
            "  Play Store target: {}",
            describe(&self.targets.play_store_url)
        );
        tracing::info!("  Fallback target: {}", describe(&self.targets.fallback_url));
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        if !self.targets.has_fallback() {
            tracing::warn!(
                "FALLBACK is not set; every request will be answered with 500 until it is provided"
            );
        }
    }
}

/// Validates that a non-empty redirect target is an absolute http(s) URL.
fn validate_target(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Ok(());
    }

    let url = Url::parse(value)
        .map_err(|e| anyhow::anyhow!("{} is not a valid URL: {} ('{}')", name, e, value))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => anyhow::bail!("{} must be an http(s) URL, got scheme '{}'", name, other),
    }
}

fn describe(target: &str) -> &str {
    if target.is_empty() { "(not set)" } else { target }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
