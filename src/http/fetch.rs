//! Single-request JSON client over `reqwest`.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http::error::FetchError;
use crate::http::query::{to_query_string, QueryParams, QueryValue};

/// What happens to the in-flight request when the timeout fires first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeoutPolicy {
    /// The caller gets `TimedOut`; the request keeps running in the
    /// background and its outcome is discarded.
    #[default]
    Detach,
    /// The caller gets `TimedOut` and the request task is aborted.
    Abort,
}

/// Options for one [`fetch_json`] call.
///
/// This is the complete set of knobs. Anything transport-specific that is
/// not listed here can only be expressed as an extra header.
#[derive(Debug, Clone, Default)]
pub struct FetchConfig {
    /// Explicit method. Defaults to GET, or POST when `body` is set.
    pub method: Option<Method>,
    /// JSON payload, sent with `content-type: application/json`.
    pub body: Option<Value>,
    /// Bearer token for the `authorization` header.
    pub token: Option<String>,
    /// Extra headers. Applied last, so they override the defaults above.
    pub headers: Vec<(String, String)>,
    pub query_params: QueryParams,
    /// Zero or `None` means no client-side timeout.
    pub timeout: Option<Duration>,
    pub on_timeout: TimeoutPolicy,
}

impl FetchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query_params.insert(key, value);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn on_timeout(mut self, policy: TimeoutPolicy) -> Self {
        self.on_timeout = policy;
        self
    }

    fn resolved_method(&self) -> Method {
        match (&self.method, &self.body) {
            (Some(method), _) => method.clone(),
            (None, Some(_)) => Method::POST,
            (None, None) => Method::GET,
        }
    }

    fn build_headers(&self) -> Result<HeaderMap, FetchError> {
        let mut headers = HeaderMap::new();

        if self.body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        if let Some(token) = &self.token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| FetchError::InvalidHeader("authorization".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        for (name, value) in &self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| FetchError::InvalidHeader(name.clone()))?;
            let header_value =
                HeaderValue::from_str(value).map_err(|_| FetchError::InvalidHeader(name.clone()))?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

/// Decoded response payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedBody {
    Json(Value),
    Text(String),
}

impl ParsedBody {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ParsedBody::Json(value) => Some(value),
            ParsedBody::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParsedBody::Text(text) => Some(text),
            ParsedBody::Json(_) => None,
        }
    }
}

/// A successful (2xx) response with its body already decoded.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: StatusCode,
    pub status_text: String,
    pub headers: HeaderMap,
    pub parsed_body: ParsedBody,
}

impl FetchResponse {
    /// Deserialize the parsed body into `T`.
    ///
    /// A text body is offered to `T` as a JSON string.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        let value = match &self.parsed_body {
            ParsedBody::Json(value) => value.clone(),
            ParsedBody::Text(text) => Value::String(text.clone()),
        };
        Ok(serde_json::from_value(value)?)
    }
}

/// Perform one request against `endpoint` and decode the answer.
///
/// The body is parsed as JSON when the response `content-type` says so and
/// kept as text otherwise. Non-2xx statuses become [`FetchError::Http`]. With
/// a timeout configured, the whole exchange (headers and body) races a timer.
pub async fn fetch_json(
    client: &Client,
    endpoint: &str,
    config: FetchConfig,
) -> Result<FetchResponse, FetchError> {
    let url = append_query(endpoint, &to_query_string(&config.query_params));
    let method = config.resolved_method();
    let headers = config.build_headers()?;

    let mut builder = client.request(method.clone(), &url).headers(headers);
    if let Some(body) = &config.body {
        builder = builder.body(body.to_string());
    }

    tracing::debug!(method = %method, url = %url, "Sending request");

    let exchange = async move {
        let response = builder.send().await?;
        read_response(response).await
    };

    let limit = match config.timeout {
        Some(limit) if !limit.is_zero() => limit,
        _ => return exchange.await,
    };

    let task = tokio::spawn(exchange);
    let abort = task.abort_handle();

    match tokio::time::timeout(limit, task).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_err)) if join_err.is_panic() => std::panic::resume_unwind(join_err.into_panic()),
        // Only reachable when the runtime shuts down under the request.
        Ok(Err(_)) => {
            tracing::warn!(url = %url, "Request task cancelled");
            Err(FetchError::Cancelled)
        }
        Err(_) => {
            if config.on_timeout == TimeoutPolicy::Abort {
                abort.abort();
            }
            tracing::warn!(
                url = %url,
                timeout_ms = limit.as_millis() as u64,
                policy = ?config.on_timeout,
                "Request timed out"
            );
            Err(FetchError::TimedOut { after: limit })
        }
    }
}

async fn read_response(response: reqwest::Response) -> Result<FetchResponse, FetchError> {
    let status = response.status();
    let status_text = status.canonical_reason().unwrap_or_default().to_string();
    let headers = response.headers().clone();
    let text = response.text().await?;

    if !status.is_success() {
        tracing::debug!(status = status.as_u16(), "Request failed with HTTP error");
        return Err(FetchError::Http {
            status: status.as_u16(),
            status_text,
            message: text,
        });
    }

    let parsed_body = if is_json_content_type(&headers) {
        if text.trim().is_empty() {
            ParsedBody::Json(Value::Null)
        } else {
            ParsedBody::Json(serde_json::from_str(&text)?)
        }
    } else {
        ParsedBody::Text(text)
    };

    Ok(FetchResponse {
        status,
        status_text,
        headers,
        parsed_body,
    })
}

/// True for `application/json` and structured-syntax `+json` media types.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}

fn append_query(endpoint: &str, query: &str) -> String {
    if query.is_empty() {
        return endpoint.to_string();
    }
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!("{}{}{}", endpoint, separator, query)
}
