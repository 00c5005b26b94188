pub mod errors;
pub mod http;
pub mod models;

pub use errors::DiscoverError;
pub use models::{ Country, Currency, HistoryEntry };
