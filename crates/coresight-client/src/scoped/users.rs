use serde_json::{Map, Value};
use url::form_urlencoded;

use crate::error::Result;
use crate::executor::RequestExecutor;
use crate::response::ApiResponse;
use crate::types::{AnonymousUserRequest, AuthenticatedUserRequest};

/// Users of the key's project
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> Users<'a> {
    pub(crate) const fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// POST `/anonymous-users`
    pub fn create_anonymous(&self, session_id: &str) -> Result<ApiResponse> {
        self.executor
            .post("/anonymous-users", &AnonymousUserRequest { session_id })
    }

    /// POST `/authenticated-users`
    pub fn create_authenticated(
        &self,
        email: &str,
        name: &str,
        metadata: Option<&Map<String, Value>>,
    ) -> Result<ApiResponse> {
        let empty = Map::new();

        self.executor.post(
            "/authenticated-users",
            &AuthenticatedUserRequest {
                email,
                name,
                metadata: metadata.unwrap_or(&empty),
            },
        )
    }

    /// Users registered under an email address
    ///
    /// GET `/users?email={email}`, answered with a list
    pub fn get(&self, email: &str) -> Result<ApiResponse> {
        let email: String = form_urlencoded::byte_serialize(email.as_bytes()).collect();
        self.executor.get(&format!("/users?email={email}"))
    }

    /// GET `/users`
    pub fn list(&self) -> Result<ApiResponse> {
        self.executor.get("/users")
    }
}
