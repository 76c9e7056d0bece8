//! Pipeline demo dashboard: library crate.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `pd-e2e-tests`) can drive `ApiClient`, the poller and `render`.

pub mod client;
pub mod config;
pub mod error;
pub mod mock;
pub mod poller;
pub mod shutdown;
pub mod source;
pub mod view;

pub use client::ApiClient;
pub use mock::MockStatusSource;
pub use source::StatusSource;
pub use view::{SharedViewState, ViewState, render};
