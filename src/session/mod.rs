pub mod exclusions;

pub use exclusions::ExclusionSet;

use crate::{
    core::{
        Country,
        DiscoverError,
        HistoryEntry,
    },
    restcountries::DatasetSource,
    selector::{
        self,
        extract_attribute,
        AttributeKind,
    },
};

pub type RequestSeq = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Displaying,
    Errored,
}

/// The state container the view layer owns: current country, ban list,
/// append-only history, the per-country set of attributes still available to
/// drag out, and the request sequence that guards against stale responses.
///
/// The selector itself is stateless; everything mutable lives here and is
/// only touched by the single control flow reacting to user actions.
#[derive(Debug, Default)]
pub struct DiscoverSession {
    phase: Phase,
    current: Option<Country>,
    error: Option<String>,
    exclusions: ExclusionSet,
    history: Vec<HistoryEntry>,
    available: Vec<AttributeKind>,
    latest_seq: RequestSeq,
}

impl DiscoverSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current(&self) -> Option<&Country> {
        self.current.as_ref()
    }

    /// At most one human-readable message at a time.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    /// Attribute kinds the current country can still drag out.
    pub fn available_attributes(&self) -> &[AttributeKind] {
        &self.available
    }

    /// Start a new discover request and get its sequence number. The previous
    /// country stays displayed until the new result lands.
    pub fn begin_request(&mut self) -> RequestSeq {
        self.latest_seq += 1;
        self.phase = Phase::Loading;
        self.error = None;
        self.latest_seq
    }

    /// Feed a finished request back in. Returns false when the result belongs
    /// to a superseded request, in which case nothing changes; a slow response
    /// can never overwrite a newer one.
    ///
    /// On success the country is displayed, history grows, and all four
    /// attribute kinds become available again; the ban list persists across
    /// countries. On failure the previous country and history are untouched.
    pub fn apply_result(
        &mut self,
        seq: RequestSeq,
        result: Result<Country, DiscoverError>,
    ) -> bool {
        if seq != self.latest_seq {
            return false;
        }

        match result {
            Ok(country) => {
                self.history.push(HistoryEntry::from(&country));
                self.available = AttributeKind::ALL.to_vec();
                self.current = Some(country);
                self.error = None;
                self.phase = Phase::Displaying;
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.phase = Phase::Errored;
            }
        }

        true
    }

    /// One full round trip for the single-control-flow case: issue the
    /// request, run the selector against the current ban list, apply the
    /// result. A view layer juggling in-flight futures would instead call
    /// `begin_request` / `apply_result` around its own spawn.
    pub async fn discover<S: DatasetSource>(&mut self, source: &S) -> Phase {
        let seq = self.begin_request();
        let exclusions = self.exclusions.clone();

        let result = selector::discover(source, &exclusions).await;
        self.apply_result(seq, result);

        self.phase
    }

    /// Drop one of the current country's attributes into the ban list.
    /// Returns the display value that was banned, or None when nothing is
    /// displayed or the kind was already dropped.
    pub fn drop_attribute(&mut self, kind: AttributeKind) -> Option<String> {
        let country = self.current.as_ref()?;
        let pos = self.available.iter().position(|k| *k == kind)?;

        let value = extract_attribute(country, kind);
        self.available.remove(pos);
        self.exclusions.add(&value);

        Some(value)
    }

    pub fn add_exclusion(&mut self, value: &str) -> bool {
        self.exclusions.add(value)
    }

    pub fn remove_exclusion(&mut self, value: &str) -> bool {
        self.exclusions.remove(value)
    }

    pub fn clear_exclusions(&mut self) {
        self.exclusions.clear();
    }
}
