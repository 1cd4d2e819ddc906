//! HTTP client adapter
//!
//! Wraps `reqwest`, attaches the base URL and default headers, serializes
//! query parameters and normalizes every outcome into
//! `Result<ApiResponse<T>, ApiError>`. There are no retries and no caching.

use crate::code::ResponseCode;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::query::QueryParams;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// A request to issue through [`HttpClient::request`]
#[derive(Debug, Clone)]
pub struct RequestSpec {
    path: String,
    segments: Vec<String>,
    method: Method,
    params: QueryParams,
    data: Option<serde_json::Value>,
}

impl RequestSpec {
    /// Request with an explicit method
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            segments: Vec::new(),
            method,
            params: QueryParams::new(),
            data: None,
        }
    }

    /// `GET path`
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// `DELETE path`
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a percent-encoded path segment (path parameters such as ids)
    #[must_use]
    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Set the query parameters
    #[must_use]
    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }

    /// Set a JSON request body
    #[must_use]
    pub fn with_json(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// HTTP method
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Query parameters
    #[must_use]
    pub const fn params(&self) -> &QueryParams {
        &self.params
    }
}

/// A successful response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    /// HTTP status code
    pub status: u16,
    /// Decoded body
    pub data: T,
}

/// Error body returned by the backend; extra fields are ignored
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    code: i64,
    #[serde(default)]
    message: Option<String>,
}

/// Failure envelope carried by a 2xx response
///
/// Strict so that a data object with its own `code` field is not mistaken
/// for a failure.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FailureEnvelope {
    code: i64,
    #[serde(default)]
    message: Option<String>,
}

/// Admin backend HTTP client
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
}

impl HttpClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidConfig`] if the base URL does not parse, the
    /// timeout is zero, the token is not a valid header value, or the TLS
    /// backend fails to initialize.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidConfig(format!("base URL {:?}: {e}", config.base_url)))?;

        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidConfig(format!(
                "base URL {:?} cannot carry paths",
                config.base_url
            )));
        }

        if config.timeout.is_zero() {
            return Err(ApiError::InvalidConfig("timeout must be non-zero".into()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &config.access_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ApiError::InvalidConfig(format!("access token: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::InvalidConfig(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Create a client with configuration from the environment
    ///
    /// # Errors
    ///
    /// See [`ApiConfig::from_env`] and [`HttpClient::new`].
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(&ApiConfig::from_env()?)
    }

    /// The configured base URL
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a request's full URL, query string included
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidConfig`] if the path cannot be joined to the base URL.
    pub fn url_for(&self, spec: &RequestSpec) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| ApiError::InvalidConfig("base URL cannot carry paths".into()))?;
            segments.pop_if_empty();
            for part in spec.path.split('/').filter(|part| !part.is_empty()) {
                segments.push(part);
            }
            for segment in &spec.segments {
                segments.push(segment);
            }
        }

        if !spec.params.is_empty() {
            url.set_query(Some(&spec.params.to_query_string()));
        }

        Ok(url)
    }

    /// Issue a request and decode the body as `T`
    ///
    /// An empty success body decodes as JSON `null` (use `()` or
    /// [`serde::de::IgnoredAny`] when the body is irrelevant).
    ///
    /// # Errors
    ///
    /// - [`ApiError::Transport`] when no response arrives
    /// - [`ApiError::Api`] for non-2xx statuses or a 2xx error envelope with a non-OK code
    /// - [`ApiError::Decode`] when the body does not match `T`
    #[tracing::instrument(skip(self, spec), fields(method = %spec.method, path = %spec.path))]
    pub async fn request<T>(&self, spec: RequestSpec) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.url_for(&spec)?;
        tracing::debug!(%url, "Sending request");

        let mut builder = self.client.request(spec.method, url);
        if let Some(data) = &spec.data {
            builder = builder.json(data);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, "Request failed before a response arrived");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(ApiError::from)?;

        if !(200..300).contains(&status) {
            let error = error_from_body(status, &body);
            tracing::warn!(status, code = %error.code(), "Request rejected");
            return Err(error);
        }

        let value = if body.iter().all(u8::is_ascii_whitespace) {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))?
        };

        if let Ok(envelope) = serde_json::from_value::<FailureEnvelope>(value.clone()) {
            let code = ResponseCode::from_code(envelope.code);
            if !code.is_ok() {
                tracing::warn!(status, code = %code, "Request reported failure code");
                return Err(ApiError::api(code, status, envelope.message.unwrap_or_default()));
            }
        }

        let data = serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(ApiResponse { status, data })
    }
}

/// Normalize a non-2xx response body into an [`ApiError`]
fn error_from_body(status: u16, body: &[u8]) -> ApiError {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            let code = match ResponseCode::from_code(envelope.code) {
                // A failing status never maps to success
                ResponseCode::Ok => ResponseCode::from_http_status(status),
                code => code,
            };
            ApiError::api(code, status, envelope.message.unwrap_or_default())
        },
        Err(_) => ApiError::api(
            ResponseCode::from_http_status(status),
            status,
            String::from_utf8_lossy(body).trim().to_string(),
        ),
    }
}
