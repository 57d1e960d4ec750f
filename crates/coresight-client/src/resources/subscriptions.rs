use crate::error::Result;
use crate::executor::RequestExecutor;
use crate::response::ApiResponse;
use crate::types::{CreateSubscriptionRequest, Package, UpdateSubscriptionRequest};

/// Billing subscriptions of a tenant
#[derive(Debug, Clone, Copy)]
pub struct Subscriptions<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> Subscriptions<'a> {
    pub(crate) const fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// POST `/clients/{client_id}/subscriptions`
    pub fn create(&self, client_id: &str, price_id: &str, plan: Package) -> Result<ApiResponse> {
        self.executor.post(
            &format!("/clients/{client_id}/subscriptions"),
            &CreateSubscriptionRequest { price_id, plan },
        )
    }

    /// Move a subscription to another price and plan
    ///
    /// PUT `/clients/{client_id}/subscriptions/{subscription_id}`
    pub fn update(
        &self,
        client_id: &str,
        subscription_id: &str,
        new_price_id: &str,
        new_plan: Package,
    ) -> Result<ApiResponse> {
        self.executor.put(
            &format!("/clients/{client_id}/subscriptions/{subscription_id}"),
            &UpdateSubscriptionRequest {
                new_price_id,
                new_plan,
            },
        )
    }

    /// DELETE `/clients/{client_id}/subscriptions/{subscription_id}`
    pub fn cancel(&self, client_id: &str, subscription_id: &str) -> Result<ApiResponse> {
        self.executor
            .delete(&format!("/clients/{client_id}/subscriptions/{subscription_id}"))
    }
}
