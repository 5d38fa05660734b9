//! Per-ASN netblock occurrence counts built from address records.

use std::collections::BTreeMap;

/// Organization and per-CIDR occurrence counts of one autonomous system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetblockSummary {
    /// Organization description from the first record seen for the ASN.
    pub name: String,
    /// CIDR -> number of address records inside it.
    pub netblocks: BTreeMap<String, usize>,
}

impl NetblockSummary {
    pub fn new(name: &str) -> NetblockSummary {
        NetblockSummary {
            name: name.to_string(),
            netblocks: BTreeMap::new(),
        }
    }
}
