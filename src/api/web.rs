// src/api/web.rs - Fetch API transport for wasm builds

use std::collections::HashMap;

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

use super::{HttpBounds, HttpProvider, NetworkRequest, NetworkResponse};
use crate::error::{Error, Result};

/// Browser fetch transport. Session cookies ride along via
/// `credentials: include`, matching the backend's cookie-based sessions.
pub struct FetchProvider;

impl FetchProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FetchProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpBounds for FetchProvider {}

#[async_trait(?Send)]
impl HttpProvider for FetchProvider {
    async fn request(&self, request: NetworkRequest) -> Result<NetworkResponse> {
        let window = web_sys::window()
            .ok_or_else(|| Error::network(None, &request.url, "No window object available"))?;

        let opts = RequestInit::new();
        opts.set_method(&request.method);
        opts.set_credentials(RequestCredentials::Include);

        if let Some(body) = &request.body {
            let uint8_array = js_sys::Uint8Array::from(&body[..]);
            opts.set_body(&uint8_array);
        }

        let req = Request::new_with_str_and_init(&request.url, &opts).map_err(|e| {
            Error::network(
                None,
                &request.url,
                format!("Failed to create request: {:?}", e),
            )
        })?;

        for (key, value) in &request.headers {
            req.headers().set(key, value).map_err(|e| {
                Error::network(None, &request.url, format!("Failed to set header: {:?}", e))
            })?;
        }

        let response_value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(|e| Error::network(None, &request.url, format!("Fetch failed: {:?}", e)))?;

        let response: Response = response_value
            .dyn_into()
            .map_err(|_| Error::network(None, &request.url, "Fetch returned a non-Response"))?;
        let status_code = response.status();

        let buffer = response
            .array_buffer()
            .map_err(|e| {
                Error::network(
                    Some(status_code),
                    &request.url,
                    format!("Failed to access response body: {:?}", e),
                )
            })?;
        let body_value = JsFuture::from(buffer).await.map_err(|e| {
            Error::network(
                Some(status_code),
                &request.url,
                format!("Failed to read response body: {:?}", e),
            )
        })?;

        let uint8_array = js_sys::Uint8Array::new(&body_value);

        Ok(NetworkResponse {
            status_code,
            headers: HashMap::new(),
            body: uint8_array.to_vec(),
        })
    }
}
