//! gridwalk HTTP service
//!
//! Accepts path submissions, counts covered grid points with the configured
//! strategy, and stores one execution record per successful request.

pub mod config;
pub mod error;
pub mod http;
pub mod state;

pub use config::AppConfig;
pub use error::ApiError;
pub use http::router;
pub use state::AppState;
