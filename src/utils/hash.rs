//! Short hash generation for original URLs.
//!
//! The hash is a pure function of the URL: SHA-1 over its UTF-8 bytes,
//! encoded as URL-safe base64 and truncated to [`HASH_LENGTH`] characters.
//! Collisions are not detected.

use base64::Engine as _;
use sha1::{Digest, Sha1};

/// Number of characters kept from the encoded digest.
pub const HASH_LENGTH: usize = 8;

/// Computes the short hash for `original`.
///
/// # Examples
///
/// ```
/// use linkhash::utils::hash::generate_hash;
///
/// assert_eq!(generate_hash("https://www.google.com"), "7378mDnD");
/// ```
pub fn generate_hash(original: &str) -> String {
    let digest = Sha1::digest(original.as_bytes());

    let mut encoded = base64::engine::general_purpose::URL_SAFE.encode(digest);
    encoded.truncate(HASH_LENGTH);
    encoded
}
