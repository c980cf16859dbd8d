//! Base58 encoding with the Bitcoin alphabet.
//!
//! Leading zero bytes carry no magnitude, so they are counted separately and
//! written as leading `'1'` characters rather than folded into the big-integer
//! conversion. `decode(encode(b)) == b` for every byte string, including
//! all-zero and empty ones.

use crate::error::{AirgapError, Result};

/// Bitcoin's Base58 alphabet (no `0`, `O`, `I` or `l`).
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const INVALID: u8 = 0xff;

const DECODE_MAP: [u8; 128] = build_decode_map();

const fn build_decode_map() -> [u8; 128] {
    let mut map = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        map[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    map
}

#[inline]
fn digit_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match DECODE_MAP[c as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Encode bytes as a Base58 string.
pub fn encode(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|&&b| b == 0).count();

    // Base58 digits, least significant first. log(256)/log(58) < 1.38.
    let mut digits: Vec<u8> = Vec::with_capacity((data.len() - zeros) * 138 / 100 + 1);
    for &byte in &data[zeros..] {
        let mut carry = byte as u32;
        for digit in digits.iter_mut() {
            carry += (*digit as u32) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let mut out = String::with_capacity(zeros + digits.len());
    out.extend(core::iter::repeat(ALPHABET[0] as char).take(zeros));
    out.extend(digits.iter().rev().map(|&d| ALPHABET[d as usize] as char));
    out
}

/// Decode a Base58 string back into bytes.
///
/// Fails with [`AirgapError::InvalidCharacter`] on the first character that
/// is not in [`ALPHABET`].
pub fn decode(input: &str) -> Result<Vec<u8>> {
    let zeros = input.bytes().take_while(|&c| c == ALPHABET[0]).count();

    // Value bytes, least significant first.
    let mut bytes: Vec<u8> = Vec::with_capacity(input.len());
    for (position, character) in input.char_indices() {
        let value = digit_value(character)
            .ok_or(AirgapError::InvalidCharacter { character, position })?;

        let mut carry = value as u32;
        for byte in bytes.iter_mut() {
            carry += (*byte as u32) * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let mut out = vec![0u8; zeros];
    out.extend(bytes.iter().rev());
    Ok(out)
}
