//! TaskQuote API: library crate for the request-pricing HTTP server.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `tq-e2e-tests`) can reach `AppState`, `build_router` and the
//! HTTP capability clients.

pub mod config;
pub mod error;
pub mod remote;
pub mod routes;
pub mod state;
