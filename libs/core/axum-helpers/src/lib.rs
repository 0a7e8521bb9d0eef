//! # Axum Helpers
//!
//! Utilities and middleware shared by Axum services:
//!
//! - **[`errors`]**: structured error responses ([`AppError`], [`ErrorResponse`])
//! - **[`extractors`]**: custom extractors ([`IdPath`], [`ValidatedJson`])
//! - **[`server`]**: router/app setup with OpenAPI docs, health endpoints,
//!   graceful shutdown

pub mod errors;
pub mod extractors;
pub mod server;

pub use errors::{AppError, ErrorResponse};
pub use extractors::{IdPath, ValidatedJson};
pub use server::{create_app, create_router, health_router, shutdown_signal, HealthResponse};
