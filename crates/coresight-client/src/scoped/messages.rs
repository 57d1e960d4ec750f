use crate::error::Result;
use crate::executor::RequestExecutor;
use crate::response::ApiResponse;
use crate::types::CreateMessageRequest;

/// Messages of a user's threads
#[derive(Debug, Clone, Copy)]
pub struct Messages<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> Messages<'a> {
    pub(crate) const fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// POST `/users/{user_id}/threads/{thread_id}/messages`
    pub fn create(&self, user_id: &str, thread_id: &str, sender_id: &str, content: &str) -> Result<ApiResponse> {
        self.executor.post(
            &format!("/users/{user_id}/threads/{thread_id}/messages"),
            &CreateMessageRequest { sender_id, content },
        )
    }

    /// GET `/users/{user_id}/threads/{thread_id}/messages`
    pub fn list(&self, user_id: &str, thread_id: &str) -> Result<ApiResponse> {
        self.executor
            .get(&format!("/users/{user_id}/threads/{thread_id}/messages"))
    }
}
