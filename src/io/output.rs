//! Stable JSON emission for the canonical store.

use crate::store::CanonicalStore;
use anyhow::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;

/// Render the store as a JSON object with one entry per line and no
/// indentation of nested content. Keys come out ascending because the store
/// iterates in sorted order.
pub fn to_json(store: &CanonicalStore) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    store.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

/// Serialize the store to the given path, overwriting any existing file.
pub fn write_database(store: &CanonicalStore, path: &Path) -> Result<()> {
    crate::io::write_file(path, &to_json(store)?)
}
