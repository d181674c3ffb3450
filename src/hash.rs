use {auto_impl::auto_impl, crate::key::Key, rapidhash::v3::rapidhash_v3};

/// Exclusive upper bound of the hash axis.
///
/// Key hashes are restricted to 63 bits so that signed arithmetic on hash
/// distances stays safe on 64-bit platforms.
pub const HASH_MAX: u64 = 1 << 63;

/// Maps keys onto the hash axis of the keyspace.
///
/// The mapping deliberately destroys key order: adjacent keys should land
/// far apart so that shard ownership is independent of key distribution.
/// Implementations must be pure and deterministic, and every position must
/// lie in `[0, HASH_MAX)`.
#[auto_impl(&)]
pub trait KeyHasher {
    /// Position of the key on the hash axis.
    fn position(&self, key: &Key) -> u64;
}

/// Default key hasher.
///
/// This uses the rapidhash V3 algorithm over the raw key bytes, relying on
/// the default seed and secrets, with the output masked to 63 bits.
///
/// The output is portable across platforms and major releases.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultKeyHasher;

impl KeyHasher for DefaultKeyHasher {
    fn position(&self, key: &Key) -> u64 {
        rapidhash_v3(key.as_bytes()) & (HASH_MAX - 1)
    }
}
