//! Content fingerprints used to identify partition payloads.

/// Computes the MD5 digest of the given data and returns it as a lowercase hex string.
///
/// MD5 is only used as an identity key into reference tables, not for integrity.
pub fn md5_digest(data: &[u8]) -> String {
    format!("{:x}", md5::compute(data))
}
