//! Outbound fetch of one batch of users from the mock data endpoint.
//!
//! The client owns transport and decoding only. It never retries or caches;
//! every call is one GET and either a full batch or one [`FetchError`].

use std::{error::Error as StdError, time::Duration};

use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::Value;
use shared::{domain::User, error::FetchError};
use tracing::{debug, info, warn};

use crate::config::ClientConfig;

#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError>;
}

pub struct UserDataClient {
    http: Client,
    config: ClientConfig,
}

impl UserDataClient {
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| FetchError::transport(error_chain(&err)))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl UserSource for UserDataClient {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        let url = self.config.request_url();
        debug!(%url, "fetching user batch");

        let response = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| map_transport_error(&err, self.config.timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::transport(format!(
                "Request failed with status code {}",
                status.as_u16()
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| map_transport_error(&err, self.config.timeout))?;
        let users = decode_users(&body)?;
        info!(count = users.len(), "fetched user batch");
        Ok(users)
    }
}

/// Strict decode of a response body into an ordered, non-empty batch.
///
/// Anything other than a JSON array of fully-formed users fails closed as
/// [`FetchError::InvalidData`]; the reason is logged, not surfaced.
pub fn decode_users(body: &[u8]) -> Result<Vec<User>, FetchError> {
    let value: Value = serde_json::from_slice(body).map_err(|err| {
        warn!("user payload is not json: {err}");
        FetchError::InvalidData
    })?;

    let Value::Array(items) = value else {
        warn!("user payload is not an array");
        return Err(FetchError::InvalidData);
    };
    if items.is_empty() {
        warn!("user payload is an empty array");
        return Err(FetchError::InvalidData);
    }

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<User>(item).map_err(|err| {
                warn!(index, "user record failed to decode: {err}");
                FetchError::InvalidData
            })
        })
        .collect()
}

fn map_transport_error(err: &reqwest::Error, timeout: Duration) -> FetchError {
    if err.is_timeout() {
        return FetchError::transport(format!("timeout of {}ms exceeded", timeout.as_millis()));
    }
    FetchError::transport(error_chain(err))
}

fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
#[path = "tests/user_client_tests.rs"]
mod tests;
