//! Netblock occurrence counts built from resolved address records.

use crate::models::{AddressRecord, DiscoveredName, NetblockSummary};
use std::collections::BTreeMap;

/// ASN -> [`NetblockSummary`].
///
/// The first record seen for an ASN fixes its organization name; later
/// descriptions for the same ASN are ignored even when they disagree.
#[derive(Debug, Clone, Default)]
pub struct NetblockStats {
    pub asns: BTreeMap<u32, NetblockSummary>,
}

impl NetblockStats {
    pub fn new() -> NetblockStats {
        Default::default()
    }

    /// Count one address record. Records without a netblock are skipped.
    pub fn add_record(&mut self, record: &AddressRecord) {
        if !record.has_netblock() {
            log::trace!("skip {} without netblock", record.address);
            return;
        }

        let data = self.asns.entry(record.asn).or_insert_with(|| {
            log::debug!("ASN {} first seen as '{}'", record.asn, record.description);
            NetblockSummary::new(&record.description)
        });
        if data.name != record.description {
            log::trace!(
                "ASN {} keeps '{}', ignoring '{}'",
                record.asn,
                data.name,
                record.description
            );
        }
        *data.netblocks.entry(record.cidr.clone()).or_insert(0) += 1;
    }

    pub fn add_records<'a, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'a AddressRecord>,
    {
        for record in records {
            self.add_record(record);
        }
    }

    /// Count every address of a discovered name.
    pub fn add_name(&mut self, name: &DiscoveredName) {
        self.add_records(&name.addresses);
    }

    pub fn is_empty(&self) -> bool {
        self.asns.is_empty()
    }
}
