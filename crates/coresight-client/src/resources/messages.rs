use crate::error::Result;
use crate::executor::RequestExecutor;
use crate::response::ApiResponse;
use crate::types::CreateMessageRequest;

/// Messages posted to threads
#[derive(Debug, Clone, Copy)]
pub struct Messages<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> Messages<'a> {
    pub(crate) const fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// Post a message to a thread
    ///
    /// POST `/projects/{project_id}/threads/{thread_id}/messages`
    pub fn create(
        &self,
        project_id: &str,
        thread_id: &str,
        sender_id: &str,
        content: &str,
    ) -> Result<ApiResponse> {
        self.executor.post(
            &format!("/projects/{project_id}/threads/{thread_id}/messages"),
            &CreateMessageRequest { sender_id, content },
        )
    }

    /// Message history of a thread
    ///
    /// GET `/projects/{project_id}/threads/{thread_id}/messages`
    pub fn list(&self, project_id: &str, thread_id: &str) -> Result<ApiResponse> {
        self.executor
            .get(&format!("/projects/{project_id}/threads/{thread_id}/messages"))
    }

    /// Look up one message through its owning client
    ///
    /// GET `/clients/{client_id}/messages/{message_id}`, the legacy
    /// client-addressed shape.
    pub fn get(&self, client_id: &str, message_id: &str) -> Result<ApiResponse> {
        self.executor
            .get(&format!("/clients/{client_id}/messages/{message_id}"))
    }
}
