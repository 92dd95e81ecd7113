use crate::io;
use crate::store::{CanonicalStore, RecordOutcome, StoreBuilder};
use anyhow::{bail, Context, Result};
use log::{info, warn};
use std::path::PathBuf;
use walkdir::WalkDir;

/// Explicit pipeline configuration: where to read records from and where to
/// write the database. No ambient process state is consulted.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Per-run tally of record outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Verified and stored under a fresh key.
    pub accepted: usize,
    /// Verified, but overwrote an entry from an earlier file.
    pub replaced: usize,
    /// Failed verification.
    pub rejected: usize,
    /// Not a selector record, or unreadable.
    pub skipped: usize,
}

impl BuildReport {
    /// Entries that made it into the emitted database.
    pub fn stored(&self) -> usize {
        self.accepted + self.replaced
    }
}

/// Run the whole pipeline: list the input directory, verify every record,
/// and emit the sorted database.
///
/// Only two failures are fatal: the input directory being unreadable and the
/// output file being unwritable. Everything per-record is logged and
/// skipped.
pub fn build_database(config: &BuildConfig) -> Result<BuildReport> {
    if !config.input.is_dir() {
        bail!(
            "input directory {} does not exist or is not a directory",
            config.input.display()
        );
    }

    let (store, report) = collect_entries(config);
    io::output::write_database(&store, &config.output)
        .with_context(|| format!("failed to write database to {}", config.output.display()))?;

    info!(
        "wrote {} entries to {} ({} rejected, {} skipped)",
        store.len(),
        config.output.display(),
        report.rejected,
        report.skipped
    );
    Ok(report)
}

fn collect_entries(config: &BuildConfig) -> (CanonicalStore, BuildReport) {
    let mut builder = StoreBuilder::new();
    let mut report = BuildReport::default();

    // Sorted listing keeps duplicate-key resolution independent of the OS
    // enumeration order.
    let walker = WalkDir::new(&config.input)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("unreadable directory entry: {err}");
                report.skipped += 1;
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        let content = match io::read_file(entry.path()) {
            Ok(content) => content,
            Err(err) => {
                warn!("{file_name}: {err:#}");
                report.skipped += 1;
                continue;
            }
        };

        match builder.ingest(&file_name, &content) {
            RecordOutcome::Accepted => report.accepted += 1,
            RecordOutcome::Replaced => report.replaced += 1,
            RecordOutcome::Rejected => report.rejected += 1,
            RecordOutcome::NotASelector => report.skipped += 1,
        }
    }

    (builder.finish(), report)
}
