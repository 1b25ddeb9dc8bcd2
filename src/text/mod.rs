//! Text helpers shared by the distribution's scripts.
//!
//! # Modules
//!
//! - [`harvester`] - Cursor-based scanner for scraping text and markup
//! - [`insensitive`] - Case-insensitive keyed map and sorting

pub mod harvester;
pub mod insensitive;

pub use harvester::{strip_tags, TextHarvester};
pub use insensitive::{case_insensitive_sort, KeyInsensitiveMap};
