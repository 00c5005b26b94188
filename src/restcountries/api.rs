use std::time::Instant;

use reqwest::Client;

use crate::core::{
    http::http_client,
    Country,
    DiscoverError,
};

pub const DEFAULT_ENDPOINT: &str =
    "https://restcountries.com/v3.1/all?fields=name,flags,capital,region,languages,currencies";

/// Anything that can produce the full country list. The selector depends only
/// on this, so tests can feed fixture data instead of hitting the network.
#[allow(async_fn_in_trait)]
pub trait DatasetSource {
    async fn fetch_all(&self) -> Result<Vec<Country>, DiscoverError>;
}

pub struct RestCountriesApi {
    client: Client,
    endpoint: String,
}

impl RestCountriesApi {
    pub fn new() -> Result<Self, DiscoverError> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, DiscoverError> {
        Ok(Self { client: http_client()?, endpoint: endpoint.into() })
    }
}

impl DatasetSource for RestCountriesApi {
    /// One GET per call, no caching and no retries. A new user-initiated
    /// discover is the only retry path.
    async fn fetch_all(&self) -> Result<Vec<Country>, DiscoverError> {
        let start = Instant::now();

        let response = self.client.get(&self.endpoint).send().await?;

        if !response.status().is_success() {
            return Err(DiscoverError::FetchFailed(format!(
                "HTTP error {} from {}",
                response.status(),
                response.url()
            )));
        }

        let countries: Vec<Country> = response.json().await?;
        println!("Fetched {} countries ({:.1}s)", countries.len(), start.elapsed().as_secs_f32());

        Ok(countries)
    }
}
