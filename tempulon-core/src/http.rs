use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

use crate::WeatherError;

/// Outbound GET capability shared by the resolver and the provider.
#[async_trait]
pub trait HttpClient: Send + Sync + Debug {
    /// Body of a successful response; non-2xx statuses are errors.
    async fn get_text(&self, url: &str, query: &[(&str, String)]) -> Result<String, WeatherError>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    http: Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get_text(&self, url: &str, query: &[(&str, String)]) -> Result<String, WeatherError> {
        tracing::debug!(url, "sending request");

        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| WeatherError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|source| WeatherError::Transport {
            url: url.to_string(),
            source,
        })?;

        if !status.is_success() {
            return Err(WeatherError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        Ok(body)
    }
}

/// GET `url` and decode the body as `T`.
pub async fn get_json<T: DeserializeOwned>(
    client: &dyn HttpClient,
    url: &str,
    query: &[(&str, String)],
) -> Result<T, WeatherError> {
    let body = client.get_text(url, query).await?;

    serde_json::from_str(&body).map_err(|source| WeatherError::Decode {
        url: url.to_string(),
        source,
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::{collections::HashMap, sync::Mutex};

    /// Serves canned bodies per URL and records every query it was sent.
    #[derive(Debug, Default)]
    pub(crate) struct CannedHttp {
        bodies: HashMap<String, Result<String, u16>>,
        pub(crate) requests: Mutex<Vec<(String, Vec<(String, String)>)>>,
    }

    impl CannedHttp {
        pub(crate) fn ok(mut self, url: &str, body: serde_json::Value) -> Self {
            self.bodies.insert(url.to_string(), Ok(body.to_string()));
            self
        }

        pub(crate) fn raw(mut self, url: &str, body: &str) -> Self {
            self.bodies.insert(url.to_string(), Ok(body.to_string()));
            self
        }

        pub(crate) fn status(mut self, url: &str, status: u16) -> Self {
            self.bodies.insert(url.to_string(), Err(status));
            self
        }

        pub(crate) fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        pub(crate) fn query_for(&self, url: &str) -> Vec<(String, String)> {
            self.requests
                .lock()
                .unwrap()
                .iter()
                .find(|(u, _)| u == url)
                .map(|(_, q)| q.clone())
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl HttpClient for CannedHttp {
        async fn get_text(
            &self,
            url: &str,
            query: &[(&str, String)],
        ) -> Result<String, WeatherError> {
            let recorded = query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect();
            self.requests
                .lock()
                .unwrap()
                .push((url.to_string(), recorded));

            match self.bodies.get(url) {
                Some(Ok(body)) => Ok(body.clone()),
                Some(Err(status)) => Err(WeatherError::Status {
                    url: url.to_string(),
                    status: *status,
                    body: String::new(),
                }),
                None => Err(WeatherError::Status {
                    url: url.to_string(),
                    status: 404,
                    body: "no canned response".to_string(),
                }),
            }
        }
    }
}
