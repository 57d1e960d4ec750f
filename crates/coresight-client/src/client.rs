use crate::config::ClientConfig;
use crate::error::Result;
use crate::executor::RequestExecutor;
use crate::resources::{Clients, Feedback, Messages, Projects, Subscriptions, Threads, Users};
use crate::response::ApiResponse;
use crate::types::{ChatRequest, LoginRequest, Package, SignUpRequest};

/// Client for the global API profile
///
/// Resources are addressed with explicit project and client identifiers.
/// Cheap to clone; clones share the underlying connection handle.
#[derive(Debug, Clone)]
pub struct CoresightClient {
    executor: RequestExecutor,
}

impl CoresightClient {
    /// Create a client for the given base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the URL or API key is invalid
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(base_url, api_key)?)
    }

    /// Create a client from a prepared configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not a valid header value
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            executor: RequestExecutor::new(config)?,
        })
    }

    /// Create a client from `CORESIGHT_BASE_URL` and `CORESIGHT_API_KEY`
    ///
    /// # Errors
    ///
    /// Returns an error if the environment does not hold a valid configuration
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    pub const fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    pub const fn config(&self) -> &ClientConfig {
        self.executor.config()
    }

    // -- Account --

    /// Register a tenant and obtain its API key
    ///
    /// POST `/signup`
    pub fn sign_up(&self, name: &str, email: &str, password: &str, package: Package) -> Result<ApiResponse> {
        self.executor.post(
            "/signup",
            &SignUpRequest {
                name,
                email,
                password,
                package,
            },
        )
    }

    /// POST `/login`
    pub fn login(&self, email: &str, password: &str) -> Result<ApiResponse> {
        self.executor
            .post("/login", &LoginRequest { email, password })
    }

    // -- LLM --

    /// Send a prompt to the tenant's LLM
    ///
    /// POST `/clients/{client_id}/llm/chat`. `thread_id` is only sent when
    /// continuing an existing thread.
    pub fn chat(&self, client_id: &str, user_input: &str, thread_id: Option<&str>) -> Result<ApiResponse> {
        self.executor.post(
            &format!("/clients/{client_id}/llm/chat"),
            &ChatRequest {
                user_input,
                thread_id,
            },
        )
    }

    /// GET `/health`
    pub fn health_check(&self) -> Result<ApiResponse> {
        self.executor.get("/health")
    }

    // -- Resources --

    pub const fn clients(&self) -> Clients<'_> {
        Clients::new(&self.executor)
    }

    pub const fn projects(&self) -> Projects<'_> {
        Projects::new(&self.executor)
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

    pub const fn subscriptions(&self) -> Subscriptions<'_> {
        Subscriptions::new(&self.executor)
    }
}
