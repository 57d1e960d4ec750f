use crate::error::Result;
use crate::executor::RequestExecutor;
use crate::response::ApiResponse;
use crate::types::FeedbackRequest;

/// Ratings and comments attached to messages
#[derive(Debug, Clone, Copy)]
pub struct Feedback<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> Feedback<'a> {
    pub(crate) const fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// Rate a message
    ///
    /// POST `/projects/{project_id}/messages/{message_id}/feedback`. Pass an
    /// empty `comment` to leave none.
    pub fn add(
        &self,
        project_id: &str,
        message_id: &str,
        user_id: &str,
        rating: i32,
        comment: &str,
    ) -> Result<ApiResponse> {
        self.executor.post(
            &format!("/projects/{project_id}/messages/{message_id}/feedback"),
            &FeedbackRequest {
                user_id,
                rating,
                comment,
            },
        )
    }

    /// GET `/projects/{project_id}/messages/{message_id}/feedback`
    pub fn list(&self, project_id: &str, message_id: &str) -> Result<ApiResponse> {
        self.executor
            .get(&format!("/projects/{project_id}/messages/{message_id}/feedback"))
    }

    /// GET `/clients/{client_id}/feedback/{feedback_id}` (legacy client-addressed shape)
    pub fn get(&self, client_id: &str, feedback_id: &str) -> Result<ApiResponse> {
        self.executor
            .get(&format!("/clients/{client_id}/feedback/{feedback_id}"))
    }
}
