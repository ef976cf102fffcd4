// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Webhook signature verification.
//!
//! GitHub signs each delivery with HMAC-SHA256 over the raw request body
//! and sends the result as `X-Hub-Signature-256: sha256=<hex>`. The
//! comparison goes through `Mac::verify_slice`, which is constant-time;
//! the digest is never compared with `==`.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use octogram_core::AuthError;

type HmacSha256 = Hmac<Sha256>;

/// Verify a webhook delivery against the shared secret.
///
/// `header` is the raw `X-Hub-Signature-256` value if the request carried
/// one. An absent header is reported separately from a bad signature; any
/// malformed header (wrong prefix, bad hex) verifies as a mismatch.
pub fn verify_signature(
    body: &[u8],
    secret: &str,
    header: Option<&str>,
) -> Result<(), AuthError> {
    let header = header.ok_or(AuthError::MissingSignature)?;
    let digest_hex = header.strip_prefix("sha256=").ok_or(AuthError::Mismatch)?;
    let expected = hex::decode(digest_hex.trim()).map_err(|_| AuthError::Mismatch)?;

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| AuthError::Mismatch)?;
    mac.update(body);
    mac.verify_slice(&expected).map_err(|_| AuthError::Mismatch)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "hush";
    const BODY: &[u8] = br#"{"action":"opened","issue":{"number":1}}"#;

    fn sign(body: &[u8], secret: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(body);
        format!("sha256={}", hex::encode(mac.finalize().into_bytes()))
    }

    #[test]
    fn valid_signature_verifies() {
        let header = sign(BODY, SECRET);
        assert_eq!(verify_signature(BODY, SECRET, Some(&header)), Ok(()));
    }

    #[test]
    fn missing_header_is_its_own_failure() {
        assert_eq!(
            verify_signature(BODY, SECRET, None),
            Err(AuthError::MissingSignature)
        );
    }

    #[test]
    fn wrong_secret_fails() {
        let header = sign(BODY, "different-secret");
        assert_eq!(
            verify_signature(BODY, SECRET, Some(&header)),
            Err(AuthError::Mismatch)
        );
    }

    #[test]
    fn tampered_body_fails() {
        let header = sign(BODY, SECRET);
        let mut tampered = BODY.to_vec();
        tampered[0] ^= 1;
        assert_eq!(
            verify_signature(&tampered, SECRET, Some(&header)),
            Err(AuthError::Mismatch)
        );
    }

    #[test]
    fn single_flipped_hex_digit_fails() {
        let header = sign(BODY, SECRET);
        let mut bytes = header.into_bytes();
        let last = bytes.last_mut().unwrap();
        *last = if *last == b'0' { b'1' } else { b'0' };
        let flipped = String::from_utf8(bytes).unwrap();
        assert_eq!(
            verify_signature(BODY, SECRET, Some(&flipped)),
            Err(AuthError::Mismatch)
        );
    }

    #[test]
    fn malformed_headers_fail_as_mismatch() {
        for header in [
            "",
            "sha256=",
            "sha256=zzzz",
            "sha256=abc", // odd-length hex
            "sha1=0123456789abcdef",
            "0123456789abcdef",
        ] {
            assert_eq!(
                verify_signature(BODY, SECRET, Some(header)),
                Err(AuthError::Mismatch),
                "header {header:?} should be a mismatch"
            );
        }
    }

    #[test]
    fn truncated_digest_fails() {
        let header = sign(BODY, SECRET);
        let truncated = &header[..header.len() - 2];
        assert_eq!(
            verify_signature(BODY, SECRET, Some(truncated)),
            Err(AuthError::Mismatch)
        );
    }
}
