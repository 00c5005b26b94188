/// The user-curated ban list: attribute display values filtered out of future
/// selections. Insertion-ordered so the drop zone renders in the order things
/// were dropped. In-memory only, one browsing session's lifetime.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    values: Vec<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the value was newly inserted.
    pub fn add(&mut self, value: &str) -> bool {
        if self.contains(value) {
            return false;
        }
        self.values.push(value.to_string());
        true
    }

    /// Returns true if the value was present and removed.
    pub fn remove(&mut self, value: &str) -> bool {
        if let Some(pos) = self.values.iter().position(|v| v == value) {
            self.values.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ExclusionSet::new();
        for value in iter {
            let value: String = value.into();
            set.add(&value);
        }
        set
    }
}
