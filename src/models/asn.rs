//! Per-ASN summary built from text facts.

use std::collections::BTreeSet;

/// Organization, netblocks and attributed names of one autonomous system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AsnSummary {
    /// Registry organization name.
    pub organization: String,
    /// Netblock CIDR strings.
    pub netblocks: BTreeSet<String>,
    /// FQDN labels attributed to this ASN.
    pub fqdns: BTreeSet<String>,
}

impl AsnSummary {
    /// New summary with empty netblock and FQDN sets.
    pub fn new(organization: &str) -> AsnSummary {
        AsnSummary {
            organization: organization.to_string(),
            ..Default::default()
        }
    }
}
