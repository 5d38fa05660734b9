//! Aggregation of discovery facts.
//!
//! This module folds raw input into read-only report structures:
//! - [`summary_index`] - ASN summaries rebuilt from text facts
//! - [`netblock_stats`] - netblock occurrence counts from address records

mod netblock_stats;
mod summary_index;

// Re-export public types
pub use netblock_stats::NetblockStats;
pub use summary_index::SummaryIndex;
