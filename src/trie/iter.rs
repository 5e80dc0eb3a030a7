use super::{KeyBuf, Trie, node::Node};

/// Pre-order walk over the nodes that hold a value, keeping the path to the
/// current one.
struct Cursor<'a, V> {
    /// Nodes on the current path with the next child slot to visit in each.
    stack: Vec<(&'a Node<V>, usize)>,
    path: Vec<u8>,
    remaining: usize,
}

impl<'a, V> Cursor<'a, V> {
    fn new<K>(trie: &'a Trie<K, V>) -> Self {
        Self {
            stack: vec![(trie.root(), 0)],
            path: Vec::new(),
            remaining: trie.len(),
        }
    }

    /// Moves to the next node holding a value and returns that value.
    fn advance(&mut self) -> Option<&'a V> {
        loop {
            let frame = self.stack.last_mut()?;
            let node: &'a Node<V> = frame.0;
            match node.next_child(frame.1) {
                Some((byte, child)) => {
                    frame.1 = byte as usize + 1;
                    self.path.push(byte);
                    self.stack.push((child, 0));
                    if let Some(value) = child.value.as_ref() {
                        self.remaining -= 1;
                        return Some(value);
                    }
                }
                None => {
                    self.stack.pop();
                    self.path.pop();
                }
            }
        }
    }
}

/// Pre-order iterator over the entries of a [`Trie`], in ascending key order.
#[must_use]
pub struct Iter<'a, K, V> {
    cursor: Cursor<'a, V>,
    _marker: std::marker::PhantomData<fn() -> K>,
}

impl<'a, K: KeyBuf, V> Iter<'a, K, V> {
    pub(super) fn new(trie: &'a Trie<K, V>) -> Self {
        Self {
            cursor: Cursor::new(trie),
            _marker: std::marker::PhantomData,
        }
    }
}

impl<'a, K: KeyBuf, V> Iterator for Iter<'a, K, V> {
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.cursor.advance()?;
        Some((K::from_bytes(self.cursor.path.clone()), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cursor.remaining, Some(self.cursor.remaining))
    }
}

/// The values of a [`Trie`], in ascending key order.
#[must_use]
pub struct Values<'a, V> {
    cursor: Cursor<'a, V>,
}

impl<'a, V> Values<'a, V> {
    pub(super) fn new<K>(trie: &'a Trie<K, V>) -> Self {
        Self {
            cursor: Cursor::new(trie),
        }
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cursor.remaining, Some(self.cursor.remaining))
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}

impl<V> std::iter::FusedIterator for Values<'_, V> {}

impl<K: KeyBuf, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K: KeyBuf, V> std::iter::FusedIterator for Iter<'_, K, V> {}

impl<'a, K: KeyBuf, V> IntoIterator for &'a Trie<K, V> {
    type Item = (K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: KeyBuf, V> FromIterator<(K, V)> for Trie<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<K: KeyBuf, V> Extend<(K, V)> for Trie<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
