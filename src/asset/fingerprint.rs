//! Content fingerprinting for cache busting.
//!
//! A fingerprint is the first 8 hex characters of the blake3 digest of a
//! file's exact byte content. When the content changes the fingerprint
//! changes, the file gets a new name, and browsers and CDNs re-fetch it
//! instead of serving a stale copy. Collision resistance here is a cache
//! invalidation convenience, not a security property.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Length of the hex fingerprint embedded in filenames.
///
/// Reference rewriting assumes exactly this many hex characters between
/// stem and extension, so every phase shares this constant.
pub const FINGERPRINT_LEN: usize = 8;

/// Fingerprint in-memory content.
#[inline]
#[allow(dead_code)]
pub fn content_fingerprint<T: AsRef<[u8]> + ?Sized>(content: &T) -> String {
    let hash = blake3::hash(content.as_ref());
    hex::encode(&hash.as_bytes()[..FINGERPRINT_LEN / 2])
}

/// Fingerprint a file's content (streaming, images can be large).
pub fn file_fingerprint(path: &Path) -> io::Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::with_capacity(64 * 1024, file);
    let mut hasher = blake3::Hasher::new();
    let mut buffer = [0u8; 64 * 1024];

    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => {
                hasher.update(&buffer[..n]);
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    let hash = hasher.finalize();
    Ok(hex::encode(&hash.as_bytes()[..FINGERPRINT_LEN / 2]))
}
