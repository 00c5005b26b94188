use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountryName {
    #[serde(default)]
    pub common: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Currency {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// One record from the REST Countries payload. Every field defaults so a
/// partial record still deserializes; `is_complete` decides whether it is
/// usable, and incomplete records are dropped during selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Country {
    #[serde(default)]
    pub name: CountryName,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub region: String,
    // BTreeMaps so "first language" / "first currency" is stable across fetches,
    // key order on the wire is not guaranteed.
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
}

impl Country {
    /// All six required fields present and non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name.common.is_empty()
            && !self.flags.png.is_empty()
            && self.capital.first().is_some_and(|c| !c.is_empty())
            && !self.region.is_empty()
            && !self.languages.is_empty()
            && !self.currencies.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub name: String,
    pub flag_url: String,
}

impl From<&Country> for HistoryEntry {
    fn from(country: &Country) -> Self {
        HistoryEntry { name: country.name.common.clone(), flag_url: country.flags.png.clone() }
    }
}
