use arc_swap::ArcSwap;
use relay_dns_domain::{RecordEntry, RecordSet, RecordType};
use std::sync::Arc;

/// Holds the active [`RecordSet`] behind an atomically swappable pointer.
///
/// Readers never block and always see one complete set; a reload replaces
/// the whole set in a single store.
pub struct RecordStore {
    current: ArcSwap<RecordSet>,
}

impl RecordStore {
    pub fn new(initial: RecordSet) -> Self {
        Self {
            current: ArcSwap::from_pointee(initial),
        }
    }

    pub fn empty() -> Self {
        Self::new(RecordSet::empty())
    }

    /// First matching entry of the set active at call time.
    pub fn lookup(&self, domain: &str, record_type: RecordType) -> Option<RecordEntry> {
        self.current.load().find(domain, record_type).cloned()
    }

    /// Installs `set` and returns the number of entries now active.
    pub fn replace(&self, set: RecordSet) -> usize {
        let len = set.len();
        self.current.store(Arc::new(set));
        len
    }

    pub fn snapshot(&self) -> Arc<RecordSet> {
        self.current.load_full()
    }

    pub fn len(&self) -> usize {
        self.current.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.load().is_empty()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::empty()
    }
}
