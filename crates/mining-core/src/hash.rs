//! SHA256 hash chaining for the mining loop.

use alloc::string::String;

use sha2::{Digest, Sha256};

/// Length in characters of a hex-encoded hash value.
pub const HASH_HEX_LEN: usize = 64;

/// Compute the next value in the hash chain.
///
/// Applies SHA256 to the UTF-8 bytes of `previous` and returns the
/// lowercase hex encoding of the digest. The empty string is a valid
/// input and seeds the chain.
#[inline]
pub fn next_hash(previous: &str) -> String {
    let digest = Sha256::digest(previous.as_bytes());
    hex::encode(digest)
}

/// The n-th element of the hash chain seeded from the empty string.
///
/// `nth_hash(0)` is the empty seed itself; `nth_hash(1)` is the first
/// value a freshly started miner produces.
pub fn nth_hash(n: u64) -> String {
    let mut value = String::new();
    for _ in 0..n {
        value = next_hash(&value);
    }
    value
}
