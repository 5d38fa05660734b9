//! Domain models for the ASN netblock summary.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Relation`], [`Entity`] and [`Kind`] - typed text facts
//! - [`AsnSummary`] - per-ASN data reconstructed from text facts
//! - [`AddressRecord`] and [`DiscoveredName`] - structured discovery results
//! - [`NetblockSummary`] - per-ASN netblock occurrence counts

mod address;
mod asn;
mod netblock;
mod relation;

// Re-export public types
pub use address::{AddressRecord, DiscoveredName};
pub use asn::AsnSummary;
pub use netblock::NetblockSummary;
pub use relation::{Entity, Kind, Relation};
