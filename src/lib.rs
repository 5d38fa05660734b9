//! Summaries of reconnaissance facts grouped by autonomous system.
//!
//! Text facts (`A --> B --> C`) fold into a [`SummaryIndex`]; resolved
//! address records fold into [`NetblockStats`]. Both are read-only once built
//! and are rendered to the console and to a dated report file.

pub mod config;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

use chrono::NaiveDate;
use models::DiscoveredName;
use output::{Palette, TerminalRenderer};
use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use processing::{NetblockStats, SummaryIndex};

/// Fold text facts into a new index.
pub fn build_summary_index<S: AsRef<str>>(lines: &[S]) -> SummaryIndex {
    let mut index = SummaryIndex::new();
    index.add_relations(lines.iter().map(|l| l.as_ref()));
    log::info!(
        "Summary index: {} fact(s) -> {} ASN(s), {} FQDN(s)",
        lines.len(),
        index.asns().len(),
        index.fqdn_count()
    );
    index
}

/// Count the netblocks of every discovered name's addresses.
pub fn build_netblock_stats(names: &[DiscoveredName]) -> NetblockStats {
    let mut stats = NetblockStats::new();
    for name in names {
        stats.add_name(name);
    }
    log::info!(
        "Netblock stats: {} name(s) -> {} ASN(s)",
        names.len(),
        stats.asns.len()
    );
    stats
}

/// Everything one report run renders.
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Names discovered in the run, or known FQDNs when only text facts exist.
    pub total: usize,
    pub index: SummaryIndex,
    pub stats: NetblockStats,
}

impl Report {
    pub fn new(lines: &[String], names: &[DiscoveredName]) -> Report {
        let index = build_summary_index(lines);
        let total = if names.is_empty() {
            index.fqdn_count()
        } else {
            names.len()
        };
        Report {
            total,
            index,
            stats: build_netblock_stats(names),
        }
    }

    /// Console view: netblock summary, then ASN details when text facts exist.
    pub fn print<W: Write>(
        &self,
        out: &mut W,
        palette: Palette,
        demo: bool,
    ) -> Result<(), Box<dyn Error>> {
        let renderer = TerminalRenderer::new(palette, demo);
        renderer.fprint_enumeration_summary(out, self.total, &self.stats)?;
        if !self.index.is_empty() {
            if self.stats.is_empty() {
                renderer.fprint_divider(out)?;
            }
            renderer.print_asn_details(out, &self.index)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Write `<dir>/<target>_<date>.txt`.
    pub fn save(
        &self,
        dir: &Path,
        target: &str,
        date: NaiveDate,
        demo: bool,
    ) -> Result<PathBuf, Box<dyn Error>> {
        output::save_asn_details_to_file(dir, target, date, &self.index, demo)
    }
}

/// Write the report file on its own thread while rendering the console view.
///
/// Neither output stops the other: a console write error is logged, and the
/// file result is returned for the caller to report.
pub fn generate_report<W: Write>(
    report: Arc<Report>,
    out: &mut W,
    palette: Palette,
    demo: bool,
    dir: &Path,
    target: &str,
    date: NaiveDate,
) -> Result<PathBuf, String> {
    let file_report = Arc::clone(&report);
    let dir = dir.to_path_buf();
    let target = target.to_string();
    let save = std::thread::spawn(move || {
        file_report
            .save(&dir, &target, date, demo)
            .map_err(|e| e.to_string())
    });

    if let Err(e) = report.print(out, palette, demo) {
        log::warn!("console report not written: {e}");
    }

    let saved = save
        .join()
        .map_err(|_| "report file thread panicked".to_string())
        .and_then(|r| r);
    match &saved {
        Ok(path) => log::info!("report saved to {}", path.display()),
        Err(e) => log::error!("report file not written: {e}"),
    }
    saved
}
