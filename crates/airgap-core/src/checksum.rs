//! Base58Check payload checksums.
//!
//! A payload is followed by the first four bytes of its double SHA256. This is
//! the only integrity gate in the pipeline, so every decode path goes through
//! [`unwrap`] before it looks at a version byte.

use crate::error::{AirgapError, Result};
use crate::hash::double_sha256;

/// Number of checksum bytes appended to a payload.
pub const CHECKSUM_LEN: usize = 4;

/// Compute the 4-byte checksum of `payload`.
#[inline]
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = double_sha256(payload);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&hash[..CHECKSUM_LEN]);
    out
}

/// Return `payload || checksum(payload)`.
pub fn wrap(payload: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum(payload));
    data
}

/// Split off and verify the trailing checksum, returning the payload.
pub fn unwrap(data: &[u8]) -> Result<&[u8]> {
    if data.len() < CHECKSUM_LEN {
        return Err(AirgapError::PayloadTooShort {
            min: CHECKSUM_LEN,
            got: data.len(),
        });
    }

    let (payload, expected) = data.split_at(data.len() - CHECKSUM_LEN);
    if checksum(payload) != expected {
        return Err(AirgapError::ChecksumMismatch);
    }
    Ok(payload)
}
