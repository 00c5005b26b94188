use std::time::Duration;

use reqwest::Client;

use crate::core::DiscoverError;

pub fn http_client() -> Result<Client, DiscoverError> {
    Client::builder()
        .timeout(Duration::from_secs(10))
        .user_agent("countryscout/0.1 (+reqwest)")
        .build()
        .map_err(|e| DiscoverError::FetchFailed(format!("HTTP client build failed: {e}")))
}
