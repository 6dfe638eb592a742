//! Egress IP record model.

use serde::{Deserialize, Serialize};

/// One egress address (or range) published by the provider, with the
/// metadata of the region it belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EgressEntry {
    /// IP address or CIDR range as published.
    pub ip_address: String,
    /// Provider region (continent) label.
    pub region: Option<String>,
    /// Data centre location within the region.
    pub location: Option<String>,
    /// True if the entry came from a multi-VIP group.
    pub multivip: bool,
    /// True if the provider marks the range as in use.
    pub ready: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}
