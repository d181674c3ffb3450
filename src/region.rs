use {
    crate::{
        hash::{HASH_MAX, KeyHasher},
        key::Key,
        range::KeyRange,
    },
    std::fmt,
};

/// One shard's slice of the keyspace: a rectangle in (hash, key) space.
///
/// A region owns every key whose hash position lies in `[beg, end)` and
/// whose bytes lie in `inner`. The two axes are independent: the hash
/// interval says which shard the key routes to, the key interval restricts
/// which part of the ordered keyspace the shard serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashRegion {
    beg: u64,
    end: u64,
    inner: KeyRange,
}

impl HashRegion {
    /// Creates a region from a hash interval and a key range.
    ///
    /// # Panics
    ///
    /// Panics if `beg > end`.
    pub fn new(beg: u64, end: u64, inner: KeyRange) -> Self {
        assert!(beg <= end, "hash interval start must not exceed its end");
        Self { beg, end, inner }
    }

    /// The canonical empty region: zero-width hash interval, empty range.
    pub const fn empty() -> Self {
        Self {
            beg: 0,
            end: 0,
            inner: KeyRange::empty(),
        }
    }

    /// The whole keyspace: every hash position, every key.
    pub const fn universe() -> Self {
        Self {
            beg: 0,
            end: HASH_MAX,
            inner: KeyRange::universe(),
        }
    }

    /// Inclusive start of the hash interval.
    pub fn beg(&self) -> u64 {
        self.beg
    }

    /// Exclusive end of the hash interval.
    pub fn end(&self) -> u64 {
        self.end
    }

    /// The key interval of the region.
    pub fn key_range(&self) -> &KeyRange {
        &self.inner
    }

    /// Whether the region covers no keys at all.
    pub fn is_empty(&self) -> bool {
        self.beg == self.end || self.inner.is_empty()
    }

    /// Whether the region owns the given key under the given hasher.
    pub fn contains_key<H: KeyHasher>(&self, key: &Key, hasher: H) -> bool {
        let position = hasher.position(key);
        self.beg <= position && position < self.end && self.inner.contains(key)
    }
}

impl fmt::Display for HashRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}) x {}", self.beg, self.end, self.inner)
    }
}
