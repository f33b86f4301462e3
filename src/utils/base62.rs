//! Base62 short-code codec.
//!
//! Encodes a store-assigned numeric identity into a compact alphanumeric
//! code. The mapping is a bijection between non-negative integers and
//! non-empty strings over the alphabet, so codes never collide as long as
//! identities are unique. Decoding is not needed anywhere: codes are looked
//! up by value.

/// Fixed 62-symbol alphabet: digits, then lowercase, then uppercase.
const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: u64 = ALPHABET.len() as u64;

/// Encodes a numeric identity as a Base62 string.
///
/// `encode(0)` yields `"0"`, the first symbol of the alphabet. There is no
/// leading-zero ambiguity because the zero symbol only ever appears alone.
///
/// # Examples
///
/// ```
/// use urlite::utils::base62::encode;
///
/// assert_eq!(encode(0), "0");
/// assert_eq!(encode(61), "Z");
/// assert_eq!(encode(62), "10");
/// ```
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    let mut buf = Vec::new();
    while n > 0 {
        buf.push(ALPHABET[(n % BASE) as usize]);
        n /= BASE;
    }
    buf.reverse();

    buf.into_iter().map(|b| b as char).collect()
}
