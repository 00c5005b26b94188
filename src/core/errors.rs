use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoverError {
    #[error("Failed to fetch countries: {0}")]
    FetchFailed(String),

    #[error("No countries match the current filters. Remove some items from the drop list to continue!")]
    NoCandidatesRemain,
}

impl From<reqwest::Error> for DiscoverError {
    fn from(error: reqwest::Error) -> Self {
        DiscoverError::FetchFailed(error.to_string())
    }
}
