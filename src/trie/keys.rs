/// Anything that can be walked through a [`Trie`](super::Trie) byte by byte.
pub trait Key {
    fn as_bytes(&self) -> impl IntoIterator<Item = u8> + '_;
}

/// Owned key that can be rebuilt from the bytes of a path through the trie.
pub trait KeyBuf: Key + Sized {
    fn from_bytes(bytes: Vec<u8>) -> Self;
}

impl Key for str {
    fn as_bytes(&self) -> impl IntoIterator<Item = u8> + '_ {
        self.bytes()
    }
}

impl Key for String {
    fn as_bytes(&self) -> impl IntoIterator<Item = u8> + '_ {
        self.bytes()
    }
}

impl KeyBuf for String {
    /// Paths only ever come from `String` keys, so the bytes are valid UTF-8;
    /// anything else is replaced rather than trusted.
    fn from_bytes(bytes: Vec<u8>) -> Self {
        String::from_utf8(bytes)
            .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
    }
}

impl Key for [u8] {
    fn as_bytes(&self) -> impl IntoIterator<Item = u8> + '_ {
        self.iter().copied()
    }
}

impl Key for Vec<u8> {
    fn as_bytes(&self) -> impl IntoIterator<Item = u8> + '_ {
        self.iter().copied()
    }
}

impl KeyBuf for Vec<u8> {
    fn from_bytes(bytes: Vec<u8>) -> Self {
        bytes
    }
}
