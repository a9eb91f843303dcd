use std::time::Duration;

use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://random-data-api.com/api/users/random_user";
/// Records requested per fetch. Fixed; not part of [`ClientConfig`].
pub const BATCH_SIZE: usize = 80;
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(DEFAULT_TIMEOUT_MS);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: Url,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Endpoint with the batch size appended as the `size` query parameter.
    pub fn request_url(&self) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("size", &BATCH_SIZE.to_string());
        url
    }
}

fn default_endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT).expect("DEFAULT_ENDPOINT is a valid absolute url")
}
