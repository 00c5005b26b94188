use crate::core::Country;

/// Sentinel shown when a country lacks the requested field.
pub const MISSING_VALUE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Capital,
    Region,
    Language,
    Currency,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 4] = [
        AttributeKind::Capital,
        AttributeKind::Region,
        AttributeKind::Language,
        AttributeKind::Currency,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AttributeKind::Capital => "Capital",
            AttributeKind::Region => "Region",
            AttributeKind::Language => "Language",
            AttributeKind::Currency => "Currency",
        }
    }
}

/// The single display value for one attribute of a country. Used both to
/// render the draggable buttons and to compute the value that lands in the
/// drop list, so the two sides always agree.
///
/// Countries with multiple capitals are represented by their first capital
/// only; secondary capitals are invisible here and to the exclusion filter.
pub fn extract_attribute(country: &Country, kind: AttributeKind) -> String {
    let value = match kind {
        AttributeKind::Capital => country.capital.first().cloned(),
        AttributeKind::Region => {
            (!country.region.is_empty()).then(|| country.region.clone())
        }
        AttributeKind::Language => country.languages.values().next().cloned(),
        AttributeKind::Currency => country.currencies.values().next().map(|c| c.name.clone()),
    };

    value.unwrap_or_else(|| MISSING_VALUE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn france() -> Country {
        serde_json::from_value(serde_json::json!({
            "name": { "common": "France" },
            "flags": { "png": "https://flagcdn.com/w320/fr.png" },
            "capital": ["Paris"],
            "region": "Europe",
            "languages": { "fra": "French" },
            "currencies": { "EUR": { "name": "Euro", "symbol": "€" } }
        }))
        .unwrap()
    }

    #[test]
    fn extracts_each_kind() {
        let c = france();
        assert_eq!(extract_attribute(&c, AttributeKind::Capital), "Paris");
        assert_eq!(extract_attribute(&c, AttributeKind::Region), "Europe");
        assert_eq!(extract_attribute(&c, AttributeKind::Language), "French");
        assert_eq!(extract_attribute(&c, AttributeKind::Currency), "Euro");
    }

    #[test]
    fn first_capital_is_canonical() {
        let mut c = france();
        c.capital = vec!["Pretoria".to_string(), "Cape Town".to_string()];
        assert_eq!(extract_attribute(&c, AttributeKind::Capital), "Pretoria");
    }

    #[test]
    fn missing_fields_yield_sentinel() {
        let c = Country::default();
        for kind in AttributeKind::ALL {
            assert_eq!(extract_attribute(&c, kind), MISSING_VALUE);
        }
    }

    #[test]
    fn extraction_is_idempotent() {
        let c = france();
        for kind in AttributeKind::ALL {
            assert_eq!(extract_attribute(&c, kind), extract_attribute(&c, kind));
        }
    }
}
