//! Output document models.

use super::{CidrBlock, EgressEntry};
use serde::{Deserialize, Serialize};

/// Collapsed CIDR blocks, one ascending list per address family.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CidrSummary {
    pub ipv4: Vec<CidrBlock>,
    pub ipv6: Vec<CidrBlock>,
}

impl CidrSummary {
    /// Total number of blocks across both families.
    pub fn len(&self) -> usize {
        self.ipv4.len() + self.ipv6.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The document written to the output file.
///
/// Serializes as `{"entries": [...]}` in detailed mode or
/// `{"ipv4": [...], "ipv6": [...]}` in summarize mode.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum OutputDocument {
    Detailed { entries: Vec<EgressEntry> },
    Summary(CidrSummary),
}

impl OutputDocument {
    /// Number of records (entries or blocks) in the document.
    pub fn len(&self) -> usize {
        match self {
            OutputDocument::Detailed { entries } => entries.len(),
            OutputDocument::Summary(summary) => summary.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_shape() {
        let doc = OutputDocument::Summary(CidrSummary {
            ipv4: vec![CidrBlock::new("203.0.113.2/31").unwrap()],
            ipv6: vec![],
        });
        assert_eq!(
            serde_json::to_string(&doc).unwrap(),
            r#"{"ipv4":["203.0.113.2/31"],"ipv6":[]}"#
        );
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_detailed_shape() {
        let doc = OutputDocument::Detailed { entries: vec![] };
        assert_eq!(serde_json::to_string(&doc).unwrap(), r#"{"entries":[]}"#);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_read_back_picks_variant() {
        let doc: OutputDocument =
            serde_json::from_str(r#"{"ipv4":[],"ipv6":["2400:7aa0::/32"]}"#).unwrap();
        match doc {
            OutputDocument::Summary(summary) => assert_eq!(summary.ipv6.len(), 1),
            other => panic!("expected summary, got {other:?}"),
        }
    }
}
