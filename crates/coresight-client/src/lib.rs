#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Typed blocking Rust client for the Coresight multi-tenant messaging API
//!
//! Two API profiles are supported:
//!
//! - [`CoresightClient`] addresses projects and clients by explicit identifier
//! - [`ProjectClient`] lets the server infer the project from the API key
//!
//! Every call performs exactly one HTTP request. Successful bodies come back
//! as an [`ApiResponse`] (JSON or raw text); non-2xx statuses fail with
//! [`ApiError`], transport failures with [`CoresightError::Http`].

mod client;
pub mod config;
mod env;
pub mod error;
pub mod executor;
pub mod resources;
pub mod response;
pub mod scoped;
pub mod types;


pub use client::CoresightClient;
pub use config::ClientConfig;
pub use error::{ApiError, CoresightError, Result};
pub use executor::RequestExecutor;
pub use response::ApiResponse;
pub use scoped::ProjectClient;
pub use types::Package;
