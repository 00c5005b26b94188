pub mod api;

pub use api::{
    DatasetSource,
    RestCountriesApi,
    DEFAULT_ENDPOINT,
};
