use serde::Serialize;
use serde_json::{Map, Value};

/// Plan package offered to tenants
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display, strum::EnumString, strum::VariantNames,
)]
#[strum(ascii_case_insensitive)]
pub enum Package {
    Free,
    Basic,
    Premium,
}

// -- Account payloads --

/// Body of `POST /signup` and `POST /clients`
#[derive(Debug, Clone, Serialize)]
pub struct SignUpRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub package: Package,
}

/// Body of `POST /login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of `PUT /clients/{client_id}`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateClientRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub package: Package,
}

// -- Project payloads --

/// Body of `POST /projects`
#[derive(Debug, Clone, Serialize)]
pub struct CreateProjectRequest<'a> {
    pub name: &'a str,
    /// Free-form model settings, e.g. `{"model": "gpt-4", "temperature": 0.7}`
    pub llm_config: &'a Value,
}

// -- User payloads --

#[derive(Debug, Clone, Serialize)]
pub struct AnonymousUserRequest<'a> {
    pub session_id: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatedUserRequest<'a> {
    pub email: &'a str,
    pub name: &'a str,
    /// Always present, an empty object when the caller has none
    pub metadata: &'a Map<String, Value>,
}

// -- Conversation payloads --

#[derive(Debug, Clone, Serialize)]
pub struct CreateThreadRequest<'a> {
    pub user_id: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateMessageRequest<'a> {
    pub sender_id: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackRequest<'a> {
    pub user_id: &'a str,
    pub rating: i32,
    pub comment: &'a str,
}

/// Body of `POST /clients/{client_id}/llm/chat`
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub user_input: &'a str,
    /// Existing thread to continue; omitted to start a new one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<&'a str>,
}

// -- Billing payloads --

#[derive(Debug, Clone, Serialize)]
pub struct CreateSubscriptionRequest<'a> {
    pub price_id: &'a str,
    pub plan: Package,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateSubscriptionRequest<'a> {
    pub new_price_id: &'a str,
    pub new_plan: Package,
}
