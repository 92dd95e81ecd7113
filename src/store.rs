//! Canonical store construction.
//!
//! `StoreBuilder` is the accumulating phase: it owns the per-record policy
//! (file-name discriminator, first-candidate-only, duplicate handling) and
//! is the sole writer. `finish()` freezes the result into a
//! [`CanonicalStore`], which only supports ordered reads. Keys are kept in a
//! `BTreeMap`, so emission order is ascending by construction and two runs
//! over the same inputs are byte-identical.

use crate::selector::Selector;
use crate::verify;
use log::{debug, warn};
use serde::Serialize;
use std::collections::BTreeMap;

/// What happened to a single input record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Verified and inserted under a fresh selector key.
    Accepted,
    /// Verified, but replaced an entry from an earlier file.
    Replaced,
    /// Failed verification; logged and skipped.
    Rejected,
    /// The file name is not exactly 4 bytes of hex, so the file is not a
    /// selector record at all.
    NotASelector,
}

#[derive(Debug, Default)]
pub struct StoreBuilder {
    entries: BTreeMap<String, String>,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a directory entry name as the record's declared selector.
    ///
    /// This is the discriminator separating signature files from unrelated
    /// files in the same directory: anything that is not exactly 8 hex
    /// characters is simply not a record.
    pub fn decode_record_name(name: &str) -> Option<Selector> {
        let bytes = hex::decode(name).ok()?;
        bytes.as_slice().try_into().ok()
    }

    /// Ingest one record: decode the file name, pick the first `;`-separated
    /// candidate, verify it, and insert on success.
    pub fn ingest(&mut self, file_name: &str, content: &str) -> RecordOutcome {
        let Some(declared) = Self::decode_record_name(file_name) else {
            debug!("{file_name}: not a selector record, skipping");
            return RecordOutcome::NotASelector;
        };

        let candidates: Vec<&str> = content.split(';').collect();
        if candidates.len() > 1 {
            warn!(
                "{file_name}: {} candidate signatures, using the first",
                candidates.len()
            );
            for candidate in &candidates {
                warn!("{file_name}:   - {}", candidate.trim());
            }
        }

        match verify::verify(declared, candidates[0]) {
            Ok(signature) => self.insert(declared, signature),
            Err(rejection) => {
                warn!("{file_name}: {rejection}");
                RecordOutcome::Rejected
            }
        }
    }

    /// Insert an already-verified pair. A duplicate key is replaced,
    /// last-write-wins, and the collision is logged with both signatures.
    pub fn insert(&mut self, selector: Selector, signature: String) -> RecordOutcome {
        let key = hex::encode(selector);
        match self.entries.insert(key.clone(), signature.clone()) {
            Some(previous) => {
                if previous != signature {
                    warn!("duplicate selector {key}: `{previous}` replaced by `{signature}`");
                }
                RecordOutcome::Replaced
            }
            None => RecordOutcome::Accepted,
        }
    }

    /// Freeze the accumulated entries. No further mutation is possible.
    pub fn finish(self) -> CanonicalStore {
        CanonicalStore {
            entries: self.entries,
        }
    }
}

/// The finalized selector -> signature mapping. Iteration and serialization
/// are always in ascending key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CanonicalStore {
    entries: BTreeMap<String, String>,
}

impl CanonicalStore {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}
