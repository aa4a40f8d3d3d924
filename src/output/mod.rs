//! Run statistics and end-of-run reporting

use crate::store::CsvStore;
use std::path::Path;

/// Counters accumulated over one crawl run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Letter index pages successfully fetched
    pub letters: usize,

    /// Player pages successfully fetched
    pub players: usize,

    /// Interview links skipped because their id was already in the store
    pub skipped_known: usize,

    /// Fetches that failed at any level (each skips its subtree)
    pub fetch_failures: usize,

    /// Rows appended this run
    pub new_records: usize,
}

impl RunStats {
    /// Final console summary. The process is meant to be re-run until this
    /// reports zero new transcripts.
    pub fn print_summary(&self, csv_path: &Path) {
        println!(
            "Done. New transcripts written: {}. CSV: {}",
            self.new_records,
            csv_path.display()
        );
        if self.fetch_failures > 0 {
            println!(
                "{} fetches failed and were skipped; re-run to retry them.",
                self.fetch_failures
            );
        }
    }
}

/// Prints statistics for an existing store (`--stats` mode).
pub fn print_store_stats(store: &CsvStore) {
    let rows = store.row_count();
    let ids = store.known_ids();
    println!("CSV: {}", store.path().display());
    println!("Rows: {}", rows);
    println!("Distinct interview ids: {}", ids.len());
    if rows > ids.len() {
        println!("Duplicate rows: {}", rows - ids.len());
    }
}
