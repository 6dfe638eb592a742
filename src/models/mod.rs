//! Domain models for the egress IP list.
//!
//! This module contains the core data structures used throughout the application:
//! - [`CidrBlock`] - IPv4/IPv6 network with prefix length
//! - [`EgressEntry`] - one published egress range with its metadata
//! - [`OutputDocument`] and [`CidrSummary`] - what gets written to disk

mod cidr;
mod document;
mod entry;

// Re-export public types
pub use cidr::{CidrBlock, CidrError};
pub use document::{CidrSummary, OutputDocument};
pub use entry::EgressEntry;
