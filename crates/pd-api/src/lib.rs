//! Pipeline demo API: library crate for the HTTP service.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `pd-e2e-tests`) can reach `AppState`, `build_router` and `serve`.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod shutdown;
pub mod state;
