//! An ordered dictionary keyed by byte strings.
//!
//! Every node has one child slot per byte value, so walking a key costs one
//! slot lookup per byte and a pre-order walk over ascending slots visits keys
//! in lexicographic byte order.

mod error;
pub mod iter;
mod keys;
mod node;
mod stats;
#[cfg(test)]
mod test;

pub use error::{Error, Result};
pub use keys::{Key, KeyBuf};
pub use stats::Stats;

use node::Node;

const CHILDREN: usize = 256;

/// Key bytes are buffered inline for keys up to this length.
const INLINE_KEY: usize = 32;

type KeyBytes = smallvec::SmallVec<[u8; INLINE_KEY]>;

/// Byte trie mapping keys of type `K` to values of type `V`.
///
/// The root node always exists and never holds a value, so the empty key is
/// never part of the dictionary.
pub struct Trie<K, V> {
    root: Node<V>,
    len: usize,
    _marker: std::marker::PhantomData<fn() -> K>,
}
