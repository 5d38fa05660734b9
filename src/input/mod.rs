//! Loading discovery facts from disk.
//!
//! - [`text`] - `A --> B --> C` fact lines
//! - [`names`] - JSON array of discovered names

mod names;
mod text;

pub use names::{parse_discovered_names, read_discovered_names};
pub use text::read_text_facts;
