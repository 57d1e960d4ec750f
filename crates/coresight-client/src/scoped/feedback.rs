use crate::error::Result;
use crate::executor::RequestExecutor;
use crate::response::ApiResponse;
use crate::types::FeedbackRequest;

/// Feedback on messages of the key's project
#[derive(Debug, Clone, Copy)]
pub struct Feedback<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> Feedback<'a> {
    pub(crate) const fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// POST `/messages/{message_id}/feedback`
    pub fn add(&self, message_id: &str, user_id: &str, rating: i32, comment: &str) -> Result<ApiResponse> {
        self.executor.post(
            &format!("/messages/{message_id}/feedback"),
            &FeedbackRequest {
                user_id,
                rating,
                comment,
            },
        )
    }

    /// GET `/messages/{message_id}/feedback`
    pub fn list(&self, message_id: &str) -> Result<ApiResponse> {
        self.executor
            .get(&format!("/messages/{message_id}/feedback"))
    }
}
