// src/api/native.rs - reqwest-backed transport for desktop builds

use async_trait::async_trait;

use super::{HttpBounds, HttpProvider, NetworkRequest, NetworkResponse};
use crate::error::{Error, Result};

/// Native HTTP transport
pub struct ReqwestProvider {
    client: reqwest::Client,
}

impl ReqwestProvider {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpBounds for ReqwestProvider {}

#[async_trait]
impl HttpProvider for ReqwestProvider {
    async fn request(&self, request: NetworkRequest) -> Result<NetworkResponse> {
        let mut req = match request.method.as_str() {
            "GET" => self.client.get(&request.url),
            "POST" => self.client.post(&request.url),
            "PUT" => self.client.put(&request.url),
            "PATCH" => self.client.patch(&request.url),
            "DELETE" => self.client.delete(&request.url),
            other => {
                return Err(Error::network(
                    None,
                    &request.url,
                    format!("Unsupported HTTP method: {}", other),
                ))
            }
        };

        for (key, value) in request.headers {
            req = req.header(&key, &value);
        }

        if let Some(body) = request.body {
            req = req.body(body);
        }

        if let Some(timeout_ms) = request.timeout_ms {
            req = req.timeout(std::time::Duration::from_millis(timeout_ms));
        }

        let url = request.url.clone();
        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::timeout(format!("Request to {} timed out", url))
            } else {
                Error::network(None, &url, format!("HTTP request failed: {}", e))
            }
        })?;

        let status_code = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();

        let body = response
            .bytes()
            .await
            .map_err(|e| {
                Error::network(
                    Some(status_code),
                    &url,
                    format!("Failed to read response body: {}", e),
                )
            })?
            .to_vec();

        Ok(NetworkResponse {
            status_code,
            headers,
            body,
        })
    }
}
