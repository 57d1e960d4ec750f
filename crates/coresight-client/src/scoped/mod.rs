//! Project-scoped API profile
//!
//! Deployments of this profile infer the project from the `x-api-key`
//! header, so paths carry no project or client identifier. The profile is
//! chosen by constructing a [`ProjectClient`] instead of a
//! [`CoresightClient`](crate::CoresightClient); both share the same
//! [`RequestExecutor`].

mod feedback;
mod messages;
mod threads;
mod users;

pub use feedback::Feedback;
pub use messages::Messages;
pub use threads::Threads;
pub use users::Users;

use crate::config::ClientConfig;
use crate::error::{CoresightError, Result};
use crate::executor::RequestExecutor;
use crate::resources::projects::FROM_API_KEY_PATH;
use crate::response::ApiResponse;

/// Client whose scope is the project owning its API key
#[derive(Debug, Clone)]
pub struct ProjectClient {
    executor: RequestExecutor,
}

impl ProjectClient {
    /// Create a client for the project owning `api_key`
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the key is empty
    pub fn new(base_url: &str, api_key: String) -> Result<Self> {
        Self::from_config(ClientConfig::new(base_url, Some(api_key))?)
    }

    /// Create a client from a prepared configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration has no API key, since the key
    /// is what selects the project
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        if !config.has_api_key() {
            return Err(CoresightError::Config(
                "project-scoped client requires an API key".to_owned(),
            ));
        }

        Ok(Self {
            executor: RequestExecutor::new(config)?,
        })
    }

    /// Create a client from `CORESIGHT_BASE_URL` and `CORESIGHT_API_KEY`
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is missing or invalid
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    pub const fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    pub const fn config(&self) -> &ClientConfig {
        self.executor.config()
    }

    /// Project bound to the API key
    ///
    /// GET `/projects/from_api_key`
    pub fn project(&self) -> Result<ApiResponse> {
        self.executor.get(FROM_API_KEY_PATH)
    }

    /// GET `/health`
    pub fn health_check(&self) -> Result<ApiResponse> {
        self.executor.get("/health")
    }

    pub const fn users(&self) -> Users<'_> {
        Users::new(&self.executor)
    }

    pub const fn threads(&self) -> Threads<'_> {
        Threads::new(&self.executor)
    }

    pub const fn messages(&self) -> Messages<'_> {
        Messages::new(&self.executor)
    }

    pub const fn feedback(&self) -> Feedback<'_> {
        Feedback::new(&self.executor)
    }
}
