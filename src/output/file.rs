//! Plain-text report file.

use super::redact::{censor_all, censor_netblock};
use super::terminal::{display_name, display_target};
use crate::processing::SummaryIndex;
use chrono::NaiveDate;
use itertools::Itertools;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// `<target>_<YYYY-MM-DD>.txt`
pub fn report_file_name(target: &str, date: NaiveDate) -> String {
    format!("{}_{}.txt", target, date.format("%Y-%m-%d"))
}

/// Write the ASN details of `index` as plain text.
///
/// The `Subdomains:` count is the number of FQDNs in the whole index and is
/// repeated for every ASN, and every known FQDN is listed under each ASN.
pub fn write_asn_details<W: Write>(
    out: &mut W,
    index: &SummaryIndex,
    demo: bool,
) -> Result<(), Box<dyn Error>> {
    let total = index.fqdn_count();

    for (asn, details) in index.asns() {
        let (asn_str, org) = if demo && *asn > 0 {
            (censor_all(&asn.to_string()), censor_all(&details.organization))
        } else {
            (asn.to_string(), details.organization.clone())
        };
        let netblocks = details
            .netblocks
            .iter()
            .map(|n| if demo { censor_netblock(n) } else { n.clone() })
            .join(", ");
        write!(
            out,
            "ASN: {asn_str} - {org}\n\tNetblocks: {netblocks}\n\tSubdomains: {total}\n"
        )
        .map_err(|e| format!("failed to write ASN details: {e}"))?;

        for (fqdn, target) in index.resolved_fqdns() {
            writeln!(
                out,
                "{}: {}",
                display_name(fqdn, demo),
                display_target(target, demo)
            )
            .map_err(|e| format!("failed to write FQDN details: {e}"))?;
        }
    }
    Ok(())
}

/// Create (or truncate) `<dir>/<target>_<date>.txt` and write the report.
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the written file
/// * `Err` - If the file can't be created or written; a partial file may remain
pub fn save_asn_details_to_file(
    dir: &Path,
    target: &str,
    date: NaiveDate,
    index: &SummaryIndex,
    demo: bool,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.join(report_file_name(target, date));
    log::info!("Writing report for {} ASN(s) to {}", index.asns().len(), path.display());

    let file = File::create(&path)
        .map_err(|e| format!("failed to create file {}: {e}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_asn_details(&mut out, index, demo)?;
    out.flush()
        .map_err(|e| format!("failed to write file {}: {e}", path.display()))?;

    Ok(path)
}
