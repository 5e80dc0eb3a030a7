use super::{
    CHILDREN, Error, Key, KeyBuf, KeyBytes, Result, Trie,
    iter::{Iter, Values},
};
use std::any::type_name;
use std::borrow::Borrow;
use std::ops::Index;
use tracing::trace;

pub(super) struct Node<V> {
    pub(super) value: Option<V>,
    pub(super) children: [Option<Box<Node<V>>>; CHILDREN],
}

impl<V> Default for Node<V> {
    fn default() -> Self {
        Node::with_value(None)
    }
}

impl<V> Node<V> {
    fn with_value(value: Option<V>) -> Self {
        Node {
            value,
            children: std::array::from_fn(|_| None),
        }
    }

    pub(super) fn child(&self, byte: u8) -> Option<&Node<V>> {
        self.children[byte as usize].as_deref()
    }

    /// First occupied child slot at or after `from`.
    pub(super) fn next_child(&self, from: usize) -> Option<(u8, &Node<V>)> {
        self.children
            .iter()
            .enumerate()
            .skip(from)
            .find_map(|(byte, slot)| Some((byte as u8, slot.as_deref()?)))
    }

    pub(super) fn is_childless(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// A node that neither holds a value nor leads to one.
    pub(super) fn is_dead(&self) -> bool {
        self.value.is_none() && self.is_childless()
    }

    fn find(&self, key: &[u8]) -> Option<&Node<V>> {
        key.iter().try_fold(self, |node, &byte| node.child(byte))
    }

    fn find_mut(&mut self, key: &[u8]) -> Option<&mut Node<V>> {
        key.iter()
            .try_fold(self, |node, &byte| node.children[byte as usize].as_deref_mut())
    }

    /// Walks `key`, creating every missing node along the way.
    fn entry(&mut self, key: &[u8]) -> &mut Node<V> {
        key.iter().fold(self, |node, &byte| {
            &mut **node.children[byte as usize].get_or_insert_with(Box::default)
        })
    }

    /// Takes the value stored at `key` and prunes the branch left dead behind
    /// it. Returns the value and the number of nodes dropped.
    fn remove(&mut self, key: &[u8]) -> Option<(V, usize)> {
        let value = self.find_mut(key)?.value.take()?;
        Some((value, self.prune(key)))
    }

    /// Detaches the tail of `key`'s path once it holds no value and leads
    /// nowhere else. The cut is made below the deepest node on the path that
    /// must stay: the root, a node with a value, or a fork. Returns the number
    /// of nodes dropped.
    fn prune(&mut self, key: &[u8]) -> usize {
        let mut cut = 0;
        let mut node = &*self;
        for (depth, &byte) in key.iter().enumerate() {
            if node.value.is_some() || node.children.iter().flatten().nth(1).is_some() {
                cut = depth;
            }
            let Some(child) = node.child(byte) else {
                return 0;
            };
            node = child;
        }
        if key.is_empty() || !node.is_dead() {
            return 0;
        }
        let Some(parent) = self.find_mut(&key[..cut]) else {
            return 0;
        };
        parent.children[key[cut] as usize] = None;
        key.len() - cut
    }
}

// Drop, Clone and PartialEq keep their own stack: a key nests one node per byte.

impl<V> Drop for Node<V> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<V>>> =
            self.children.iter_mut().filter_map(Option::take).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

impl<V: Clone> Clone for Node<V> {
    fn clone(&self) -> Self {
        let mut root = Node::with_value(self.value.clone());
        let mut stack = vec![(self, &mut root)];
        while let Some((source, copy)) = stack.pop() {
            for (slot, child) in copy.children.iter_mut().zip(&source.children) {
                if let Some(child) = child.as_deref() {
                    let slot = slot.insert(Box::new(Node::with_value(child.value.clone())));
                    stack.push((child, &mut **slot));
                }
            }
        }
        root
    }
}

impl<V: PartialEq> PartialEq for Node<V> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((left, right)) = stack.pop() {
            if left.value != right.value {
                return false;
            }
            for (left, right) in left.children.iter().zip(&right.children) {
                match (left.as_deref(), right.as_deref()) {
                    (Some(left), Some(right)) => stack.push((left, right)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl<V: Eq> Eq for Node<V> {}

/// An entry whose value is out of the trie while `modify` computes the new
/// one. Dropping it unfilled removes the entry.
struct Vacancy<'a, K, V> {
    trie: &'a mut Trie<K, V>,
    key: &'a [u8],
    filled: bool,
}

impl<K, V> Vacancy<'_, K, V> {
    fn fill(mut self, value: V) {
        if let Some(node) = self.trie.root.find_mut(self.key) {
            node.value = Some(value);
            self.filled = true;
        }
    }
}

impl<K, V> Drop for Vacancy<'_, K, V> {
    fn drop(&mut self) {
        if self.filled {
            return;
        }
        let pruned = self.trie.root.prune(self.key);
        self.trie.len -= 1;
        trace!(
            key = %String::from_utf8_lossy(self.key),
            pruned,
            len = self.trie.len,
            "Dropped key after a failed update"
        );
    }
}

fn key_bytes<Q: Key + ?Sized>(key: &Q) -> KeyBytes {
    key.as_bytes().into_iter().collect()
}

impl<K, V> Default for Trie<K, V> {
    fn default() -> Self {
        Trie {
            root: Node::default(),
            len: 0,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<K, V: Clone> Clone for Trie<K, V> {
    fn clone(&self) -> Self {
        Trie {
            root: self.root.clone(),
            len: self.len,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<K, V: PartialEq> PartialEq for Trie<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.root == other.root
    }
}

impl<K, V: Eq> Eq for Trie<K, V> {}

impl<K: KeyBuf + std::fmt::Debug, V: std::fmt::Debug> std::fmt::Debug for Trie<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ", type_name::<Trie<K, V>>())?;
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Trie<K, V> {
    pub fn new() -> Self {
        Trie::default()
    }

    /// Number of defined keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(super) fn root(&self) -> &Node<V> {
        &self.root
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Key + ?Sized,
    {
        self.get(key).is_some()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Key + ?Sized,
    {
        self.root.find(&key_bytes(key))?.value.as_ref()
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Key + ?Sized,
    {
        self.root.find_mut(&key_bytes(key))?.value.as_mut()
    }

    /// Replaces the value of a defined key with `f` applied to it.
    ///
    /// `f` is not called when the key is undefined. If `f` panics the key is
    /// removed, as its old value was already moved into `f`.
    pub fn modify<Q>(&mut self, key: &Q, f: impl FnOnce(V) -> V) -> Result<()>
    where
        K: Borrow<Q>,
        Q: Key + ?Sized,
    {
        let bytes = key_bytes(key);
        let current = self
            .root
            .find_mut(&bytes)
            .and_then(|node| node.value.take())
            .ok_or_else(|| Error::Undefined(bytes.to_vec()))?;
        let vacancy = Vacancy {
            trie: self,
            key: &bytes,
            filled: false,
        };
        let value = f(current);
        vacancy.fill(value);
        Ok(())
    }

    /// Removes a defined key and returns its value, pruning the branch that
    /// only existed to reach it.
    ///
    /// The empty key is never defined, deleting it does nothing and returns
    /// `Ok(None)`.
    pub fn delete<Q>(&mut self, key: &Q) -> Result<Option<V>>
    where
        K: Borrow<Q>,
        Q: Key + ?Sized,
    {
        let bytes = key_bytes(key);
        if bytes.is_empty() {
            return Ok(None);
        }
        let (value, pruned) = self
            .root
            .remove(&bytes)
            .ok_or_else(|| Error::Undefined(bytes.to_vec()))?;
        self.len -= 1;
        trace!(key = %String::from_utf8_lossy(&bytes), pruned, len = self.len, "Deleted key");
        Ok(Some(value))
    }

    /// Iterates over every entry in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V>
    where
        K: KeyBuf,
    {
        Iter::new(self)
    }

    /// Every defined key in ascending byte order.
    pub fn keys(&self) -> Vec<K>
    where
        K: KeyBuf,
    {
        self.iter().map(|(key, _)| key).collect()
    }

    /// Every value, ordered by its key.
    pub fn values(&self) -> Vec<&V> {
        Values::new(self).collect()
    }
}

impl<K: Key, V> Trie<K, V> {
    /// Defines a new key.
    ///
    /// The empty key is silently ignored. Defining a key twice is an error and
    /// leaves the existing value untouched.
    pub fn define(&mut self, key: K, value: V) -> Result<()> {
        let bytes = key_bytes(&key);
        if bytes.is_empty() {
            return Ok(());
        }
        let node = self.root.entry(&bytes);
        if node.value.is_some() {
            return Err(Error::AlreadyDefined(bytes.to_vec()));
        }
        node.value = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Defines or redefines a key, returning the value it replaced.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let bytes = key_bytes(&key);
        if bytes.is_empty() {
            return None;
        }
        let replaced = self.root.entry(&bytes).value.replace(value);
        if replaced.is_none() {
            self.len += 1;
        }
        replaced
    }
}

impl<K, V, Q> Index<&Q> for Trie<K, V>
where
    K: Borrow<Q>,
    Q: Key + ?Sized,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        self.get(key).unwrap_or_else(|| {
            panic!(
                "The key '{}' is not defined",
                String::from_utf8_lossy(&key_bytes(key))
            )
        })
    }
}
