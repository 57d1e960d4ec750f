use crate::error::Result;
use crate::executor::RequestExecutor;
use crate::response::ApiResponse;
use crate::types::CreateThreadRequest;

/// Conversation threads of a project
#[derive(Debug, Clone, Copy)]
pub struct Threads<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> Threads<'a> {
    pub(crate) const fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// Open a thread for a user
    ///
    /// POST `/projects/{project_id}/threads`
    pub fn create(&self, project_id: &str, user_id: &str) -> Result<ApiResponse> {
        self.executor.post(
            &format!("/projects/{project_id}/threads"),
            &CreateThreadRequest { user_id },
        )
    }

    /// GET `/projects/{project_id}/threads/{thread_id}`
    pub fn get(&self, project_id: &str, thread_id: &str) -> Result<ApiResponse> {
        self.executor
            .get(&format!("/projects/{project_id}/threads/{thread_id}"))
    }

    /// GET `/projects/{project_id}/threads`
    pub fn list(&self, project_id: &str) -> Result<ApiResponse> {
        self.executor.get(&format!("/projects/{project_id}/threads"))
    }
}
