use crate::key::MAX_KEY_SIZE;

/// Structural errors in region metadata supplied by peer shards.
///
/// Either variant means the cluster's ownership metadata cannot be trusted;
/// callers must surface it as a hard configuration error rather than retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum JoinError {
    /// Two regions claim an overlapping portion of the space.
    #[error("Overlapping regions: shard ownership metadata is inconsistent")]
    BadJoin,

    /// The regions leave part of the claimed union uncovered.
    #[error("Gap between regions: shard ownership metadata is incomplete")]
    BadRegion,
}

pub type JoinResult<T> = Result<T, JoinError>;

/// Errors constructing a [`Key`](crate::Key) from raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    /// Byte string is longer than the fixed key capacity.
    #[error("Key length {actual} exceeds maximum {max}", max = MAX_KEY_SIZE)]
    TooLong {
        /// Length of the rejected byte string.
        actual: usize,
    },
}

/// Errors reading a serialized key or range back from bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Input ended before the encoded value did.
    #[error("Truncated input")]
    Truncated,

    /// Encoded key length is larger than the fixed key capacity.
    #[error("Encoded key length {len} exceeds maximum {max}", max = MAX_KEY_SIZE)]
    KeyTooLong {
        /// Length claimed by the encoding.
        len: usize,
    },

    /// Boundedness flag byte was neither 0 nor 1.
    #[error("Invalid bound tag: {0:#04x}")]
    InvalidTag(u8),
}
