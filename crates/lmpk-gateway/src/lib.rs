//! HTTP surface of the lmpk redirect service.
//!
//! The router exposes the token-protected management endpoints
//! (`/create`, `/delete`, `/modify`), the `/<name>` redirect, the index page
//! with its static assets, and a health probe.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use config::{load_auth_token, ConfigError, GatewayConfig};
pub use state::AppState;
