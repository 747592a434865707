use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};

use crate::data::error::ServiceError;
use crate::data::service::CounterService;
use crate::domain::Counter;
use crate::http::{fetch_json, FetchConfig, FetchError};

/// Counter backend reached over HTTP.
///
/// Talks to `GET {base_url}/counter` and `PUT {base_url}/counter`, the
/// routes served by [`crate::server`].
pub struct HttpCounterService {
    client: Client,
    base_url: String,
    token: Option<String>,
    timeout: Option<Duration>,
}

impl HttpCounterService {
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()?;

        Ok(Self::with_client(client, base_url, token, timeout))
    }

    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Option<Duration>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            token,
            timeout,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/counter", self.base_url)
    }

    fn request_config(&self) -> FetchConfig {
        FetchConfig {
            token: self.token.clone(),
            timeout: self.timeout,
            ..FetchConfig::default()
        }
    }
}

#[async_trait]
impl CounterService for HttpCounterService {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn get_counter(&self) -> Result<Counter, ServiceError> {
        let response = fetch_json(&self.client, &self.endpoint(), self.request_config()).await?;
        Ok(response.json::<Counter>()?)
    }

    async fn update_counter(&self, counter: Counter) -> Result<Counter, ServiceError> {
        let config = self
            .request_config()
            .method(Method::PUT)
            .body(serde_json::json!({ "value": counter.value() }));

        let response = fetch_json(&self.client, &self.endpoint(), config).await?;
        Ok(response.json::<Counter>()?)
    }
}
