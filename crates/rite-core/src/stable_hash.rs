//! Stable hashing for content-derived identifiers.
//!
//! Pulse signatures must be a pure function of payload bytes, reproducible
//! across platforms and runs. FNV-1a 64-bit fits: stable, const-evaluable,
//! and a `u64` renders as exactly 16 hex characters.
//!
//! NOTE: FNV-1a is **not** cryptographically secure. Signatures identify
//! payloads; they do not authenticate them.

/// 64-bit FNV-1a offset basis.
pub const FNV1A_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
/// 64-bit FNV-1a prime.
pub const FNV1A_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Mix bytes into an existing FNV-1a hash state.
///
/// For each byte, XOR it into the hash and multiply by the FNV prime.
/// Start from [`FNV1A_OFFSET_BASIS`] for a fresh hash.
#[inline]
pub const fn fnv1a64_mix(mut hash: u64, bytes: &[u8]) -> u64 {
    let mut i = 0usize;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV1A_PRIME);
        i += 1;
    }
    hash
}

/// Hash a byte slice with FNV-1a 64-bit.
#[inline]
pub const fn fnv1a64(bytes: &[u8]) -> u64 {
    fnv1a64_mix(FNV1A_OFFSET_BASIS, bytes)
}
