//! # Store Redirect
//!
//! A stateless User-Agent based redirect service built with Axum.
//!
//! Deployed at the edge in front of a marketing landing page, it inspects
//! the `User-Agent` header of each incoming request and issues a 302
//! redirect to the App Store (iOS), the Play Store (Android), or a
//! configured fallback page (everything else).
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Pure classification and target selection
//! - **API Layer** ([`api`]) - HTTP handlers, response types, and middleware
//! - **Configuration** ([`config`]) - Environment-driven redirect targets
//!
//! Every request is independent: the service holds no mutable state, no
//! cache, and no connection to any backing store. The redirect decision is
//! a single pass over the request method and headers.
//!
//! ## Quick Start
//!
//! ```bash
//! export APPSTORE_URL="https://apps.apple.com/app/example-app/id123456789"
//! export PLAYSTORE_URL="https://play.google.com/store/apps/details?id=com.example.app"
//! export FALLBACK="https://example.com"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Redirect targets and server settings are loaded from environment
//! variables via [`config::Config`]. See the [`config`] module for the
//! full list of variables and their defaults.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use error::AppError;
pub use state::AppState;
