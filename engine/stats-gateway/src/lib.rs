//! Stats Gateway
//!
//! HTTP front end for the stat engine: configuration, logging, the REST API
//! and the server lifecycle.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod rest_api;
pub mod service;
pub mod signals;

pub use config::GatewayConfig;
pub use error::{GatewayError, GatewayResult};
pub use logging::initialize_logging;
pub use service::{serve, StatsService};
