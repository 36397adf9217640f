//! Public-key fingerprinting.

use sha2::{Digest, Sha256};

use crate::codec::{self, KeyEncoding};
use crate::error::Error;
use crate::keypair::KeyPair;

/// SHA-256 fingerprint of the public half, as 64 lowercase hex characters.
///
/// The digest is computed over the canonical SPKI DER encoding, so the
/// container form a key was loaded from (PEM or DER) never changes its
/// fingerprint. Two pairs are the same key exactly when their fingerprints
/// match.
pub fn fingerprint(pair: &KeyPair) -> Result<String, Error> {
    let spki_der = codec::encode_public(pair, KeyEncoding::Der)?;
    Ok(hex::encode(Sha256::digest(&spki_der)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_shape() {
        let pair = crate::testutil::shared_pair();
        let fp = fingerprint(pair).unwrap();
        assert_eq!(fp.len(), 64);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_fingerprint_is_deterministic() {
        let pair = crate::testutil::shared_pair();
        assert_eq!(fingerprint(pair).unwrap(), fingerprint(pair).unwrap());
    }

    #[test]
    fn test_fingerprint_independent_of_container_form() {
        let pair = crate::testutil::shared_pair();
        let expected = fingerprint(pair).unwrap();

        let pem = codec::encode_public(pair, KeyEncoding::Pem).unwrap();
        let der = codec::encode_public(pair, KeyEncoding::Der).unwrap();

        let from_pem = KeyPair::load_public(&pem).unwrap();
        let from_der = KeyPair::load_public(&der).unwrap();

        assert_eq!(fingerprint(&from_pem).unwrap(), expected);
        assert_eq!(fingerprint(&from_der).unwrap(), expected);
    }

    #[test]
    fn test_distinct_keys_have_distinct_fingerprints() {
        let a = crate::testutil::shared_pair();
        let b = crate::testutil::other_pair();
        assert_ne!(fingerprint(a).unwrap(), fingerprint(b).unwrap());
    }
}
