// Per-label edit counts
//
// A classifier can report every label it assigns to an `EditObserver`.
// `SharedTally` is the usual observer: a mutex-guarded `LabelTally` that can
// be shared between threads and read back once classification is done.

use std::io::{self, Write};
use std::sync::Mutex;

use errtag_core::edit::Edit;
use errtag_core::label::EditLabel;
use hashbrown::HashMap;

/// Receives every edit a classifier labels.
pub trait EditObserver: Send + Sync {
    fn observe(&self, edit: &Edit, label: &EditLabel);
}

/// Number of edits seen per label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTally {
    counts: HashMap<String, usize>,
}

impl LabelTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of a label given by name.
    pub fn add(&mut self, label: &str) {
        match self.counts.get_mut(label) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(label.to_string(), 1);
            }
        }
    }

    pub fn add_label(&mut self, label: &EditLabel) {
        self.add(&label.to_string());
    }

    /// Add all counts of `other` into this tally.
    pub fn merge(&mut self, other: LabelTally) {
        for (label, n) in other.counts {
            *self.counts.entry(label).or_insert(0) += n;
        }
    }

    /// Count for a label; zero when never seen.
    pub fn get(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Number of edits counted across all labels.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Labels with their counts, ordered by label.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> =
            self.counts.iter().map(|(k, &v)| (k.as_str(), v)).collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Write one `label<TAB>count` line per label, in `sorted` order.
    pub fn write_tsv<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (label, count) in self.sorted() {
            writeln!(out, "{label}\t{count}")?;
        }
        Ok(())
    }
}

/// A `LabelTally` that can be updated from several threads.
#[derive(Debug, Default)]
pub struct SharedTally {
    inner: Mutex<LabelTally>,
}

impl SharedTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the counts so far.
    pub fn snapshot(&self) -> LabelTally {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn into_inner(self) -> LabelTally {
        self.inner.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl EditObserver for SharedTally {
    fn observe(&self, _edit: &Edit, label: &EditLabel) {
        // A poisoned lock still holds valid counts
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .add_label(label);
    }
}
