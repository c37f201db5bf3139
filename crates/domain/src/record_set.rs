use crate::dns_record::{RecordDefinition, RecordEntry, RecordType};
use crate::errors::DomainError;

/// The ordered set of local records active at a given time.
///
/// Built as a unit from one source snapshot and never mutated afterwards;
/// reloads produce a new set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    entries: Vec<RecordEntry>,
}

/// Entries rejected while building a set, with their position in the source.
#[derive(Debug, Default)]
pub struct Rejected {
    pub entries: Vec<(usize, DomainError)>,
}

impl RecordSet {
    pub fn new(entries: Vec<RecordEntry>) -> Self {
        Self { entries }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Converts every definition it can, keeping source order, and reports
    /// the rest.
    pub fn from_definitions(definitions: &[RecordDefinition]) -> (Self, Rejected) {
        let mut entries = Vec::with_capacity(definitions.len());
        let mut rejected = Rejected::default();

        for (index, definition) in definitions.iter().enumerate() {
            match RecordEntry::try_from(definition) {
                Ok(entry) => entries.push(entry),
                Err(e) => rejected.entries.push((index, e)),
            }
        }

        (Self { entries }, rejected)
    }

    /// First entry in stored order whose type equals `record_type` and whose
    /// pattern matches `domain`.
    pub fn find(&self, domain: &str, record_type: RecordType) -> Option<&RecordEntry> {
        self.entries
            .iter()
            .find(|entry| entry.matches(domain, record_type))
    }

    pub fn entries(&self) -> &[RecordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<RecordEntry> for RecordSet {
    fn from_iter<T: IntoIterator<Item = RecordEntry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
