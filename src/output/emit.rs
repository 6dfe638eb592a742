//! Output document construction.

use crate::config::OutputMode;
use crate::models::{EgressEntry, OutputDocument};
use crate::processing::{filter_ready, summarize_entries};

/// Build the output document for `mode` from every parsed entry.
pub fn emit(entries: Vec<EgressEntry>, mode: OutputMode) -> OutputDocument {
    match mode {
        OutputMode::Detailed {
            include_not_ready: true,
        } => {
            log::info!("Detailed output including {} entries", entries.len());
            OutputDocument::Detailed { entries }
        }
        OutputMode::Detailed {
            include_not_ready: false,
        } => OutputDocument::Detailed {
            entries: filter_ready(entries),
        },
        OutputMode::Summarize => {
            OutputDocument::Summary(summarize_entries(&filter_ready(entries)))
        }
    }
}
