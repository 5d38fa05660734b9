//! Per-name output lines for discovered names.

use super::redact::{censor_domain, censor_ip};
use crate::models::{AddressRecord, DiscoveredName};

/// Name and comma-joined addresses for one discovered name.
///
/// Addresses are left empty unless `addrs` is set. Demo mode masks the name
/// with [`censor_domain`] and every address with [`censor_ip`].
pub fn output_line_parts(out: &DiscoveredName, addrs: bool, demo: bool) -> (String, String) {
    let ips = if addrs {
        out.addresses
            .iter()
            .map(|a| {
                let ip = a.address.to_string();
                if demo {
                    censor_ip(&ip)
                } else {
                    ip
                }
            })
            .collect::<Vec<String>>()
            .join(",")
    } else {
        String::new()
    };

    let name = if demo {
        censor_domain(&out.name)
    } else {
        out.name.clone()
    };
    (name, ips)
}

/// Keep only the address families asked for.
pub fn desired_addr_types(addrs: &[AddressRecord], ipv4: bool, ipv6: bool) -> Vec<AddressRecord> {
    addrs
        .iter()
        .filter(|a| (ipv4 && a.address.is_ipv4()) || (ipv6 && a.address.is_ipv6()))
        .cloned()
        .collect()
}
