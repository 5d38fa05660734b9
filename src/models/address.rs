//! Structured discovery results: resolved names and their addresses.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// One resolved address with its routing attribution.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    /// The resolved IP address.
    pub address: IpAddr,
    /// Netblock containing the address, empty when unknown.
    #[serde(default)]
    pub cidr: String,
    /// Announcing autonomous system, 0 when unknown.
    #[serde(default)]
    pub asn: u32,
    /// Organization description reported for the ASN.
    #[serde(default)]
    pub description: String,
}

impl AddressRecord {
    pub fn has_netblock(&self) -> bool {
        !self.cidr.trim().is_empty()
    }
}

/// A discovered name together with everything it resolved to.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredName {
    pub name: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub addresses: Vec<AddressRecord>,
    /// Data sources that reported the name.
    #[serde(default)]
    pub sources: Vec<String>,
}
