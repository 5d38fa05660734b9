//! Console views of the report.
//!
//! Colour comes from an explicit [`Palette`]; the text is identical with
//! colour on or off apart from escape codes.

use super::redact::{censor_all, censor_domain, censor_ip, censor_netblock};
use crate::config::{CIDR_COLUMN_WIDTH, COUNT_COLUMN_WIDTH, DIVIDER_WIDTH};
use crate::models::{Entity, Kind};
use crate::processing::{NetblockStats, SummaryIndex};
use colored::{Color, Colorize};
use itertools::Itertools;
use std::io::{self, Write};

/// Colours used by the console renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub enabled: bool,
    pub label: Color,
    pub value: Color,
    pub name: Color,
}

impl Palette {
    pub fn new(enabled: bool) -> Palette {
        Palette {
            enabled,
            label: Color::BrightBlue,
            value: Color::BrightYellow,
            name: Color::BrightGreen,
        }
    }

    pub fn plain() -> Palette {
        Palette::new(false)
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn label(&self, text: &str) -> String {
        self.paint(text, self.label)
    }

    pub fn value(&self, text: &str) -> String {
        self.paint(text, self.value)
    }

    pub fn name(&self, text: &str) -> String {
        self.paint(text, self.name)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::new(true)
    }
}

/// Renders the netblock summary to a console stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalRenderer {
    pub palette: Palette,
    pub demo: bool,
}

impl TerminalRenderer {
    pub fn new(palette: Palette, demo: bool) -> TerminalRenderer {
        TerminalRenderer { palette, demo }
    }

    fn divider(&self) -> String {
        self.palette.label(&"-".repeat(DIVIDER_WIDTH))
    }

    pub fn fprint_divider<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.divider())
    }

    /// Total count line, then one block per ASN with its netblock counts.
    pub fn fprint_enumeration_summary<W: Write>(
        &self,
        out: &mut W,
        total: usize,
        stats: &NetblockStats,
    ) -> io::Result<()> {
        let p = &self.palette;
        writeln!(
            out,
            "{}{}",
            p.value(&total.to_string()),
            p.name(" names discovered")
        )?;

        if stats.is_empty() {
            return Ok(());
        }
        self.fprint_divider(out)?;

        for (asn, data) in &stats.asns {
            let mut asn_str = asn.to_string();
            let mut name_str = data.name.clone();
            if self.demo && *asn > 0 {
                asn_str = censor_all(&asn_str);
                name_str = censor_all(&name_str);
            }
            writeln!(
                out,
                "{}{} {} {}",
                p.label("ASN: "),
                p.value(&asn_str),
                p.name("-"),
                p.name(&name_str)
            )?;

            for (cidr, count) in &data.netblocks {
                let cidr_str = if self.demo {
                    censor_netblock(cidr)
                } else {
                    cidr.clone()
                };
                let cidr_col = format!("\t{:<width$}", cidr_str, width = CIDR_COLUMN_WIDTH);
                let count_col = format!("\t{:<width$}", count, width = COUNT_COLUMN_WIDTH);
                writeln!(
                    out,
                    "{}{} {}",
                    p.value(&cidr_col),
                    p.value(&count_col),
                    p.label("Subdomain Name(s)")
                )?;
            }
        }
        Ok(())
    }

    /// Per-ASN view of the text-fact index followed by every known name.
    pub fn print_asn_details<W: Write>(&self, out: &mut W, index: &SummaryIndex) -> io::Result<()> {
        let p = &self.palette;
        let total = index.fqdn_count().to_string();

        for (asn, details) in index.asns() {
            let (asn_str, org) = if self.demo && *asn > 0 {
                (censor_all(&asn.to_string()), censor_all(&details.organization))
            } else {
                (asn.to_string(), details.organization.clone())
            };
            let netblocks = details
                .netblocks
                .iter()
                .map(|n| if self.demo { censor_netblock(n) } else { n.clone() })
                .join(", ");
            writeln!(
                out,
                "\n{}{} - {}\n\t{}\t{}{}",
                p.label("ASN: "),
                p.value(&asn_str),
                p.name(&org),
                p.value(&netblocks),
                p.value(&total),
                p.label(" Subdomain Name(s)")
            )?;

            for (fqdn, target) in index.resolved_fqdns() {
                writeln!(
                    out,
                    "{} --> {}",
                    p.name(&display_name(fqdn, self.demo)),
                    p.value(&display_target(target, self.demo))
                )?;
            }
        }
        Ok(())
    }
}

/// Name as shown in reports.
pub fn display_name(fqdn: &str, demo: bool) -> String {
    if demo {
        censor_domain(fqdn)
    } else {
        fqdn.to_string()
    }
}

/// Resolved target as shown in reports, masked by its kind in demo mode.
pub fn display_target(target: &Entity, demo: bool) -> String {
    if !demo {
        return target.label.clone();
    }
    match target.kind {
        Some(Kind::IpAddress) => censor_ip(&target.label),
        Some(Kind::Netblock) => censor_netblock(&target.label),
        _ => censor_domain(&target.label),
    }
}
