use serde_json::{Map, Value};

use crate::error::Result;
use crate::executor::RequestExecutor;
use crate::response::ApiResponse;
use crate::types::{AnonymousUserRequest, AuthenticatedUserRequest};

/// Anonymous and authenticated users of a project
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> Users<'a> {
    pub(crate) const fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// Create a user known only by its session
    ///
    /// POST `/projects/{project_id}/anonymous-users`
    pub fn create_anonymous(&self, project_id: &str, session_id: &str) -> Result<ApiResponse> {
        self.executor.post(
            &format!("/projects/{project_id}/anonymous-users"),
            &AnonymousUserRequest { session_id },
        )
    }

    /// Create a user with an identity
    ///
    /// POST `/projects/{project_id}/authenticated-users`. `metadata` is sent
    /// as an empty object when `None`.
    pub fn create_authenticated(
        &self,
        project_id: &str,
        email: &str,
        name: &str,
        metadata: Option<&Map<String, Value>>,
    ) -> Result<ApiResponse> {
        let empty = Map::new();

        self.executor.post(
            &format!("/projects/{project_id}/authenticated-users"),
            &AuthenticatedUserRequest {
                email,
                name,
                metadata: metadata.unwrap_or(&empty),
            },
        )
    }

    /// Look up an anonymous user through its owning client
    ///
    /// GET `/clients/{client_id}/anonymous-users/{user_id}`, the legacy
    /// client-addressed shape.
    pub fn get_anonymous(&self, client_id: &str, user_id: &str) -> Result<ApiResponse> {
        self.executor
            .get(&format!("/clients/{client_id}/anonymous-users/{user_id}"))
    }

    /// GET `/clients/{client_id}/authenticated-users/{user_id}` (legacy shape)
    pub fn get_authenticated(&self, client_id: &str, user_id: &str) -> Result<ApiResponse> {
        self.executor
            .get(&format!("/clients/{client_id}/authenticated-users/{user_id}"))
    }

    /// List every user of a project
    ///
    /// GET `/projects/{project_id}/users`
    pub fn list(&self, project_id: &str) -> Result<ApiResponse> {
        self.executor.get(&format!("/projects/{project_id}/users"))
    }
}
