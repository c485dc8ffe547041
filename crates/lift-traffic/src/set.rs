//! `SequenceSet` — the name-keyed collection of sequences for one run.

use std::collections::BTreeMap;

use lift_core::Tick;

use crate::{Sequence, TrafficError, TrafficResult};

/// All sequences of a run, keyed by unique name.
///
/// Backed by a `BTreeMap`, so iteration (and therefore call generation) is in
/// name order and independent of insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceSet {
    inner: BTreeMap<String, Sequence>,
}

impl SequenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from `sequences`, rejecting duplicate names.
    pub fn from_sequences(sequences: impl IntoIterator<Item = Sequence>) -> TrafficResult<Self> {
        let mut set = Self::new();
        for sequence in sequences {
            set.insert(sequence)?;
        }
        Ok(set)
    }

    /// The canonical morning-office traffic pattern used when the caller
    /// supplies no sequences.  Requires at least four floors.
    pub fn default_office() -> Self {
        let defaults = [
            Sequence::new("Sequence 1", 5,  Tick::from_hm(9, 0),  Tick::from_hm(11, 0),  [0], [2]),
            Sequence::new("Sequence 2", 10, Tick::from_hm(9, 0),  Tick::from_hm(10, 0),  [0], [1]),
            Sequence::new("Sequence 3", 20, Tick::from_hm(11, 0), Tick::from_hm(18, 20), [0], [1, 2, 3]),
            Sequence::new("Sequence 4", 4,  Tick::from_hm(14, 0), Tick::from_hm(15, 0),  [1, 2, 3], [0]),
        ];
        Self {
            inner: defaults.into_iter().map(|s| (s.name.clone(), s)).collect(),
        }
    }

    /// Add `sequence`.  Fails if a sequence with the same name already exists.
    pub fn insert(&mut self, sequence: Sequence) -> TrafficResult<()> {
        if self.inner.contains_key(&sequence.name) {
            return Err(TrafficError::DuplicateSequence(sequence.name));
        }
        self.inner.insert(sequence.name.clone(), sequence);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Sequence> {
        self.inner.get(name)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// All sequences in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Sequence> {
        self.inner.values()
    }

    /// Sequences that fire at `now`, in name order.
    pub fn firing_at(&self, now: Tick) -> impl Iterator<Item = &Sequence> {
        self.inner.values().filter(move |s| s.fires_at(now))
    }

    /// Validate every sequence against a building of `floor_count` floors.
    pub fn validate(&self, floor_count: u32) -> TrafficResult<()> {
        self.inner.values().try_for_each(|s| s.validate(floor_count))
    }
}

impl<'a> IntoIterator for &'a SequenceSet {
    type Item = &'a Sequence;
    type IntoIter = std::collections::btree_map::Values<'a, String, Sequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.values()
    }
}
