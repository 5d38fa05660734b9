//! Summary index rebuilt from flat text facts.
//!
//! Facts arrive unordered and untyped, so netblocks and names are attached to
//! every ASN known at the moment they are seen.

use crate::models::{AsnSummary, Entity, Kind, Relation};
use std::collections::BTreeMap;

/// ASN summaries plus the FQDN -> target map.
#[derive(Debug, Clone, Default)]
pub struct SummaryIndex {
    asns: BTreeMap<u32, AsnSummary>,
    fqdns: BTreeMap<String, Entity>,
}

impl SummaryIndex {
    pub fn new() -> SummaryIndex {
        Default::default()
    }

    /// Fold one text fact into the index. Lines that don't classify are dropped.
    pub fn add_relation(&mut self, line: &str) {
        match Relation::parse(line) {
            Some(relation) => self.apply(relation),
            None => log::trace!("skip malformed fact: {line:?}"),
        }
    }

    /// Fold every line of `lines`.
    pub fn add_relations<'a, I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for line in lines {
            self.add_relation(line);
        }
    }

    fn apply(&mut self, relation: Relation) {
        let Relation { left, right, .. } = relation;

        if right.is(Kind::Netblock) {
            log::debug!("netblock {} -> {} ASN(s)", right.label, self.asns.len());
            for summary in self.asns.values_mut() {
                summary.netblocks.insert(right.label.clone());
            }
        } else if left.is(Kind::Asn) {
            if !right.is(Kind::RirOrganization) {
                return;
            }
            match left.label.parse::<u32>() {
                Ok(asn) => {
                    log::debug!("ASN {asn} organization '{}'", right.label);
                    self.asns.insert(asn, AsnSummary::new(&right.label));
                }
                Err(_) => log::warn!("skip non-numeric ASN '{}'", left.label),
            }
        } else if left.is(Kind::Fqdn) {
            if right.is(Kind::IpAddress) {
                for summary in self.asns.values_mut() {
                    summary.fqdns.insert(left.label.clone());
                }
            }
            self.fqdns.insert(left.label, right);
        }
    }

    pub fn asns(&self) -> &BTreeMap<u32, AsnSummary> {
        &self.asns
    }

    pub fn asn(&self, asn: u32) -> Option<&AsnSummary> {
        self.asns.get(&asn)
    }

    /// FQDN label -> recorded target (IP address or alias name).
    pub fn fqdns(&self) -> &BTreeMap<String, Entity> {
        &self.fqdns
    }

    pub fn fqdn_count(&self) -> usize {
        self.fqdns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asns.is_empty()
    }

    /// Target to display for `fqdn`.
    ///
    /// An alias is followed one hop to its own target; an alias with no record
    /// resolves to itself.
    pub fn resolve(&self, fqdn: &str) -> Option<&Entity> {
        let target = self.fqdns.get(fqdn)?;
        if target.is(Kind::Fqdn) {
            return Some(self.fqdns.get(&target.label).unwrap_or(target));
        }
        Some(target)
    }

    /// Every known FQDN with its resolved target, in label order.
    pub fn resolved_fqdns(&self) -> impl Iterator<Item = (&str, &Entity)> + '_ {
        self.fqdns
            .keys()
            .filter_map(move |fqdn| self.resolve(fqdn).map(|t| (fqdn.as_str(), t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORG: &str = "15133 (ASN) --> managed_by --> Akamai Technologies (RIROrganization)";

    #[test]
    fn test_asn_then_netblock() {
        let mut index = SummaryIndex::new();
        index.add_relation(ORG);
        index.add_relation("15133 (ASN) --> announces --> 93.184.0.0/16 (Netblock)");

        let summary = index.asn(15133).expect("ASN 15133 known");
        assert_eq!(summary.organization, "Akamai Technologies");
        assert_eq!(
            summary.netblocks.iter().collect::<Vec<_>>(),
            vec!["93.184.0.0/16"]
        );
    }

    #[test]
    fn test_malformed_lines_leave_index_unchanged() {
        let mut index = SummaryIndex::new();
        index.add_relation(ORG);
        let before = index.asns().clone();

        index.add_relations([
            "93.184.0.0/16 (Netblock)",
            "15133 (ASN) -> managed_by -> Other (RIROrganization)",
            "only --> two",
            "",
        ]);
        assert_eq!(index.asns(), &before);
        assert_eq!(index.fqdn_count(), 0);
    }

    #[test]
    fn test_netblock_before_any_asn_is_lost() {
        let mut index = SummaryIndex::new();
        index.add_relation("x (ASN) --> announces --> 10.0.0.0/8 (Netblock)");
        index.add_relation(ORG);
        assert!(index.asn(15133).unwrap().netblocks.is_empty());
    }

    #[test]
    fn test_netblock_fans_out_to_all_known_asns() {
        let mut index = SummaryIndex::new();
        index.add_relation(ORG);
        index.add_relation("64512 (ASN) --> managed_by --> Private Use (RIROrganization)");
        index.add_relation("64512 (ASN) --> announces --> 10.0.0.0/24 (Netblock)");

        for (asn, summary) in index.asns() {
            assert!(
                summary.netblocks.contains("10.0.0.0/24"),
                "ASN {asn} should carry the fanned-out netblock"
            );
        }
    }

    #[test]
    fn test_org_relation_overwrites_summary() {
        let mut index = SummaryIndex::new();
        index.add_relation(ORG);
        index.add_relation("15133 (ASN) --> announces --> 93.184.0.0/16 (Netblock)");
        index.add_relation("15133 (ASN) --> managed_by --> EDGECAST (RIROrganization)");

        let summary = index.asn(15133).unwrap();
        assert_eq!(summary.organization, "EDGECAST");
        assert!(summary.netblocks.is_empty());
    }

    #[test]
    fn test_asn_without_organization_ignored() {
        let mut index = SummaryIndex::new();
        index.add_relation("15133 (ASN) --> peers_with --> 3356 (ASN)");
        index.add_relation("AS-X (ASN) --> managed_by --> Nobody (RIROrganization)");
        assert!(index.is_empty());
    }

    #[test]
    fn test_fqdn_address_attached_alias_not() {
        let mut index = SummaryIndex::new();
        index.add_relation(ORG);
        index.add_relation("example.com (FQDN) --> a_record --> 93.184.216.34 (IPAddress)");
        index.add_relation("www.example.com (FQDN) --> cname_record --> example.com (FQDN)");

        let summary = index.asn(15133).unwrap();
        assert!(summary.fqdns.contains("example.com"));
        assert!(!summary.fqdns.contains("www.example.com"));
        assert_eq!(index.fqdn_count(), 2);
    }

    #[test]
    fn test_fqdn_address_fans_out_to_all_known_asns() {
        let mut index = SummaryIndex::new();
        index.add_relation(ORG);
        index.add_relation("64512 (ASN) --> managed_by --> Private Use (RIROrganization)");
        index.add_relation("example.com (FQDN) --> a_record --> 93.184.216.34 (IPAddress)");

        assert_eq!(index.asns().len(), 2);
        for (asn, summary) in index.asns() {
            assert!(
                summary.fqdns.contains("example.com"),
                "ASN {asn} should carry the fanned-out name"
            );
        }
    }

    #[test]
    fn test_resolve_follows_alias_one_hop() {
        let mut index = SummaryIndex::new();
        index.add_relation("example.com (FQDN) --> a_record --> 93.184.216.34 (IPAddress)");
        index.add_relation("www.example.com (FQDN) --> cname_record --> example.com (FQDN)");
        index.add_relation("cdn.example.com (FQDN) --> cname_record --> edge.example.net (FQDN)");

        assert_eq!(
            index.resolve("www.example.com"),
            Some(&Entity::new("93.184.216.34", Kind::IpAddress))
        );
        assert_eq!(
            index.resolve("cdn.example.com"),
            Some(&Entity::new("edge.example.net", Kind::Fqdn))
        );
        assert_eq!(index.resolve("missing.example.com"), None);
        assert_eq!(index.resolved_fqdns().count(), 3);
    }
}
