use crate::error::Result;
use crate::executor::RequestExecutor;
use crate::response::ApiResponse;
use crate::types::{Package, SignUpRequest, UpdateClientRequest};

/// Tenant accounts
#[derive(Debug, Clone, Copy)]
pub struct Clients<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> Clients<'a> {
    pub(crate) const fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// Create a tenant on behalf of an existing key holder
    ///
    /// POST `/clients`
    pub fn create(&self, name: &str, email: &str, password: &str, package: Package) -> Result<ApiResponse> {
        self.executor.post(
            "/clients",
            &SignUpRequest {
                name,
                email,
                password,
                package,
            },
        )
    }

    /// GET `/clients/{client_id}`
    pub fn get(&self, client_id: &str) -> Result<ApiResponse> {
        self.executor.get(&format!("/clients/{client_id}"))
    }

    /// PUT `/clients/{client_id}`
    pub fn update(&self, client_id: &str, name: &str, email: &str, package: Package) -> Result<ApiResponse> {
        self.executor.put(
            &format!("/clients/{client_id}"),
            &UpdateClientRequest {
                name,
                email,
                package,
            },
        )
    }
}
