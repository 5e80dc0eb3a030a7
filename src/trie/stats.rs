use super::{Trie, node::Node};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Stats {
    /// Number of defined keys
    pub keys: usize,
    /// Number of nodes below the root
    pub nodes: usize,
    /// Nodes without children
    pub leaves: usize,
    /// Nodes with neither a value nor children, always 0 for a consistent trie
    pub dead: usize,
    /// Length of the longest key
    pub depth: usize,
}

impl Stats {
    fn new<K, V>(trie: &Trie<K, V>) -> Self {
        let mut stats = Self::default();
        let mut stack: Vec<(&Node<V>, usize)> = trie
            .root()
            .children
            .iter()
            .flatten()
            .map(|child| (&**child, 1))
            .collect();

        while let Some((node, depth)) = stack.pop() {
            stats.nodes += 1;
            stats.depth = stats.depth.max(depth);
            if node.value.is_some() {
                stats.keys += 1;
            }
            if node.is_childless() {
                stats.leaves += 1;
            }
            if node.is_dead() {
                stats.dead += 1;
            }
            stack.extend(
                node.children
                    .iter()
                    .flatten()
                    .map(|child| (&**child, depth + 1)),
            );
        }

        stats
    }
}

impl<K, V> From<&Trie<K, V>> for Stats {
    fn from(trie: &Trie<K, V>) -> Self {
        Self::new(trie)
    }
}

impl<K, V> Trie<K, V> {
    /// Walks the whole trie and summarises its shape.
    pub fn stats(&self) -> Stats {
        Stats::from(self)
    }
}
