use reqwest::Method;
use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{ApiError, CoresightError, Result};
use crate::response::ApiResponse;

/// Header carrying the tenant API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Single choke point for every outbound call
///
/// Builds headers from the configuration, issues exactly one blocking HTTP
/// request, and classifies the outcome into an [`ApiResponse`] or an
/// [`ApiError`]. No retries, no backoff.
#[derive(Debug, Clone)]
pub struct RequestExecutor {
    http: Client,
    config: ClientConfig,
    headers: HeaderMap,
}

impl RequestExecutor {
    /// Create an executor for the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key cannot be sent as a header value or
    /// the HTTP client cannot be built
    pub fn new(config: ClientConfig) -> Result<Self> {
        let headers = build_headers(&config)?;
        let http = Client::builder().build()?;

        Ok(Self {
            http,
            config,
            headers,
        })
    }

    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Headers attached to every request
    ///
    /// Always `Content-Type: application/json`, plus `x-api-key` when a
    /// non-empty key is configured.
    pub fn headers(&self) -> HeaderMap {
        self.headers.clone()
    }

    /// Absolute URL for a path relative to the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url())
    }

    /// Issue one request and classify the response
    ///
    /// The payload is sent as a JSON body for `POST` and `PUT` only.
    ///
    /// # Errors
    ///
    /// Returns [`CoresightError::Api`] for any status outside `200..300`, and
    /// [`CoresightError::Http`] when the transport fails
    pub fn request<P>(&self, method: Method, path: &str, payload: Option<&P>) -> Result<ApiResponse>
    where
        P: Serialize + ?Sized,
    {
        let url = self.url(path);
        let with_body = carries_body(&method);

        let span = tracing::debug_span!("coresight_request", method = %method, url = %url);
        let _guard = span.enter();

        tracing::debug!("sending request");

        let mut builder = self.http.request(method, &url).headers(self.headers());

        if let Some(payload) = payload
            && with_body
        {
            builder = builder.json(payload);
        }

        let response = builder.send()?;
        let status = response.status();
        let body = response.text()?;

        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "request succeeded");
            return Ok(ApiResponse::from_body(body));
        }

        tracing::warn!(status = status.as_u16(), "request rejected");

        Err(ApiError::from_body(status.as_u16(), body).into())
    }

    pub fn get(&self, path: &str) -> Result<ApiResponse> {
        self.request::<()>(Method::GET, path, None)
    }

    pub fn post<P>(&self, path: &str, payload: &P) -> Result<ApiResponse>
    where
        P: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(payload))
    }

    pub fn put<P>(&self, path: &str, payload: &P) -> Result<ApiResponse>
    where
        P: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, Some(payload))
    }

    pub fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.request::<()>(Method::DELETE, path, None)
    }
}

fn carries_body(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PUT
}

fn build_headers(config: &ClientConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(key) = config.api_key() {
        let mut value = HeaderValue::from_str(key)
            .map_err(|e| CoresightError::Config(format!("API key is not a valid header value: {e}")))?;
        value.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
    }

    Ok(headers)
}
