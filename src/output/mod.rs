//! Output formatting for the ASN summary.
//!
//! This module handles rendering the aggregated data:
//! - [`redact`] - Demo-mode masking
//! - [`terminal`] - Console output with colors
//! - [`file`] - Plain-text report file
//! - [`lines`] - Per-name output lines

mod file;
mod lines;
pub mod redact;
mod terminal;

pub use file::{report_file_name, save_asn_details_to_file, write_asn_details};
pub use lines::{desired_addr_types, output_line_parts};
pub use redact::{censor_domain, censor_ip, censor_netblock};
pub use terminal::{display_name, display_target, Palette, TerminalRenderer};
