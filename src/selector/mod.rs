pub mod attributes;

pub use attributes::{
    extract_attribute,
    AttributeKind,
    MISSING_VALUE,
};

use rand::Rng;

use crate::{
    core::{
        Country,
        DiscoverError,
    },
    restcountries::DatasetSource,
    session::ExclusionSet,
};

/// A country is excluded when any of its four display values matches any
/// member of the exclusion set. Matching is exact string equality on the
/// derived value, never tagged by attribute kind.
pub fn is_excluded(country: &Country, exclusions: &ExclusionSet) -> bool {
    if exclusions.is_empty() {
        return false;
    }

    country.capital.first().is_some_and(|capital| exclusions.contains(capital))
        || exclusions.contains(&country.region)
        || country.languages.values().any(|language| exclusions.contains(language))
        || country.currencies.values().any(|currency| exclusions.contains(&currency.name))
}

/// Drop incomplete records, then drop everything the exclusion set rules out.
pub fn candidates(countries: Vec<Country>, exclusions: &ExclusionSet) -> Vec<Country> {
    countries
        .into_iter()
        .filter(|country| country.is_complete())
        .filter(|country| !is_excluded(country, exclusions))
        .collect()
}

/// Fetch the full dataset and pick one remaining candidate uniformly at
/// random. Fetch failures propagate unchanged; an exhausted candidate pool is
/// its own error so the caller can hint at clearing the drop list.
pub async fn discover<S: DatasetSource>(
    source: &S,
    exclusions: &ExclusionSet,
) -> Result<Country, DiscoverError> {
    let countries = source.fetch_all().await?;

    let mut pool = candidates(countries, exclusions);
    if pool.is_empty() {
        return Err(DiscoverError::NoCandidatesRemain);
    }

    let index = rand::rng().random_range(0..pool.len());
    Ok(pool.swap_remove(index))
}
