//! Entry processing logic.
//!
//! This module contains the business logic between parsing and output:
//! - [`filter`] - dropping entries that are not ready for use
//! - [`summarize`] - collapsing addresses into minimal CIDR blocks

mod filter;
mod summarize;

// Re-export public functions
pub use filter::filter_ready;
pub use summarize::{collapse, is_fixed_point, summarize, summarize_entries};
