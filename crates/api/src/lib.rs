//! Marquee API server library.
//!
//! Exposes the building blocks (config, telemetry, state, envelope, error
//! handling, routes) so integration tests and the binary entrypoint can
//! both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod telemetry;
