//! Ordered byte-trie dictionaries and a course registry built on them.

#[cfg(feature = "cli")]
pub mod dataset;
pub mod registry;
pub mod trie;

pub use registry::{Catalog, Registry};
pub use trie::Trie;
