//! HTTP gateway for the wearables API.
//!
//! The gateway carries no business logic of its own: it loads configuration
//! from the environment, initializes best-effort error telemetry, applies a
//! permissive CORS policy to every route, and mounts the versioned API
//! routers that own the actual endpoints.
//!
//! # Startup sequence
//!
//! ```text
//! .env + environment -> Config
//! Config             -> telemetry (best-effort, failures discarded)
//! Config             -> router (root route + enabled version routers + CORS)
//! Config             -> listener (APP_HOST:APP_PORT, default 0.0.0.0:6644)
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`telemetry`]: Best-effort Sentry error reporting
//! - [`api`]: Router composition and versioned API mounting
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod utils;

pub use config::Config;
pub use error::{GatewayError, Result};
