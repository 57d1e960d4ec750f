use crate::error::Result;
use crate::executor::RequestExecutor;
use crate::response::ApiResponse;
use crate::types::CreateThreadRequest;

/// Threads of the key's project
#[derive(Debug, Clone, Copy)]
pub struct Threads<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> Threads<'a> {
    pub(crate) const fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// POST `/threads`
    pub fn create(&self, user_id: &str) -> Result<ApiResponse> {
        self.executor
            .post("/threads", &CreateThreadRequest { user_id })
    }

    /// GET `/threads/{thread_id}`
    pub fn get(&self, thread_id: &str) -> Result<ApiResponse> {
        self.executor.get(&format!("/threads/{thread_id}"))
    }

    /// Threads opened by one user
    ///
    /// GET `/users/{user_id}/threads`
    pub fn list(&self, user_id: &str) -> Result<ApiResponse> {
        self.executor.get(&format!("/users/{user_id}/threads"))
    }
}
