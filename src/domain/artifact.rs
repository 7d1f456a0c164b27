//! Content addressing for rendered compose artifacts.
//!
//! Naming an artifact directory by a digest of its contents means identical
//! content always lands in the same place, while changed content gets a new
//! directory and leaves the superseded rendering on disk until its project
//! is torn down.

use std::path::Path;

use sha2::{Digest, Sha256};

/// Base32 alphabet used for content addresses (omits e, o, t, u).
const BASE32_ALPHABET: &[u8; 32] = b"0123456789abcdfghijklmnpqrsvwxyz";

/// Encode bytes in the base32 alphabet above, most significant bits first.
/// Trailing bits are zero-padded; no padding characters are emitted.
#[must_use]
pub fn nix_base32_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity((bytes.len() * 8).div_ceil(5));
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;
    for &b in bytes {
        buffer = (buffer << 8) | u32::from(b);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(char::from(BASE32_ALPHABET[((buffer >> bits) & 0x1f) as usize]));
        }
    }
    if bits > 0 {
        out.push(char::from(BASE32_ALPHABET[((buffer << (5 - bits)) & 0x1f) as usize]));
    }
    out
}

/// Content address of a rendered compose text: SHA-256, base32-encoded.
/// Stable across runs for identical content.
#[must_use]
pub fn content_address(content: &str) -> String {
    nix_base32_encode(&Sha256::digest(content.as_bytes()))
}

/// Directory name for a rendered artifact: `{address}-{project_name}`.
#[must_use]
pub fn artifact_dir_name(content: &str, project_name: &str) -> String {
    format!("{}-{project_name}", content_address(content))
}

/// Whether `path` lies within `root`, component-wise. Both sides must
/// already be in canonical form; the artifact cleaner relies on this check
/// to never touch files outside the managed output root.
#[must_use]
pub fn is_within(path: &Path, root: &Path) -> bool {
    path.starts_with(root)
}
