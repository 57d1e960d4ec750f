use serde_json::Value;

use crate::error::Result;
use crate::executor::RequestExecutor;
use crate::response::ApiResponse;
use crate::types::CreateProjectRequest;

/// Path resolving the project that owns the configured API key
pub(crate) const FROM_API_KEY_PATH: &str = "/projects/from_api_key";

/// Tenant projects
#[derive(Debug, Clone, Copy)]
pub struct Projects<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> Projects<'a> {
    pub(crate) const fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// Create a project with its LLM settings
    ///
    /// POST `/projects`
    pub fn create(&self, name: &str, llm_config: &Value) -> Result<ApiResponse> {
        self.executor
            .post("/projects", &CreateProjectRequest { name, llm_config })
    }

    /// GET `/projects/{project_id}`
    pub fn get(&self, project_id: &str) -> Result<ApiResponse> {
        self.executor.get(&format!("/projects/{project_id}"))
    }

    /// GET `/projects`
    pub fn list(&self) -> Result<ApiResponse> {
        self.executor.get("/projects")
    }

    /// Project bound to the API key the client was built with
    ///
    /// GET `/projects/from_api_key`
    pub fn current(&self) -> Result<ApiResponse> {
        self.executor.get(FROM_API_KEY_PATH)
    }
}
