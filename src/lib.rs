//! Key-range and shard-region algebra for distributed ordered key-value
//! stores.
//!
//! A sharded store splits its keyspace along two independent axes: the
//! ordered axis of raw key bytes, and a hash axis that assigns keys to
//! shards regardless of their order. This crate provides the value types
//! for both axes and the algorithms that higher layers are written in
//! terms of:
//!
//! - [`Key`]: a fixed-capacity byte-string key with successor and
//!   predecessor operations.
//! - [`KeyRange`]: a half-open interval of keys supporting containment,
//!   overlap, intersection and superset tests.
//! - [`HashRegion`]: one shard's claim, a rectangle in (hash, key) space.
//! - [`join_ranges`] / [`join_regions`]: verification that a set of claims
//!   from independent (possibly untrusted) shards exactly and disjointly
//!   tiles one larger region, yielding that region or a precise
//!   [`JoinError`].
//! - [`subtract_many`]: range subtraction for masking already-covered
//!   portions of the keyspace.
//!
//! Everything here is a plain value: pure, synchronous, freely copied, and
//! safe to use from any number of threads without coordination.

pub mod error;
pub mod hash;
pub mod join;
pub mod key;
pub mod range;
pub mod region;
pub mod set_ops;

pub use {
    error::{DecodeError, JoinError, JoinResult, KeyError},
    hash::{DefaultKeyHasher, HASH_MAX, KeyHasher},
    join::{join_ranges, join_regions},
    key::{Key, MAX_KEY_SIZE},
    range::{KeyRange, RightBound},
    region::HashRegion,
    set_ops::subtract_many,
};
