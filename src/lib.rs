pub mod core;
pub mod restcountries;
pub mod selector;
pub mod session;

pub use crate::{
    core::{
        Country,
        DiscoverError,
        HistoryEntry,
    },
    restcountries::{
        DatasetSource,
        RestCountriesApi,
    },
    selector::{
        discover,
        extract_attribute,
        AttributeKind,
    },
    session::{
        DiscoverSession,
        ExclusionSet,
        Phase,
    },
};
