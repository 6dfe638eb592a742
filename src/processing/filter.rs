//! Readiness filtering.

use crate::models::EgressEntry;

/// Keep only entries the provider marks as ready, preserving feed order.
///
/// An empty result is valid: it is logged as a warning, not an error.
pub fn filter_ready(mut entries: Vec<EgressEntry>) -> Vec<EgressEntry> {
    let total = entries.len();
    entries.retain(|e| e.ready);

    log::info!(
        "Kept {} ready entries, dropped {} not ready",
        entries.len(),
        total - entries.len()
    );
    if entries.is_empty() {
        log::warn!("No ready entries left after filtering");
    }
    entries
}
