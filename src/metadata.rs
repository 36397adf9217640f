//! Derived key facts: the metadata snapshot and backup records.

use std::path::PathBuf;

use base64::{engine::general_purpose, Engine as _};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::codec::{self, KeyEncoding};
use crate::error::Error;
use crate::fingerprint::fingerprint;
use crate::keypair::KeyPair;

/// Read-only snapshot of a key pair's public facts.
///
/// Computed on demand and never cached against the pair. `generated_time`
/// is the moment the snapshot was taken, not the moment the key was
/// generated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct KeyMetadata {
    /// Modulus size in bits.
    pub key_size: usize,
    /// Public exponent (65537 for generated keys).
    pub public_exponent: u64,
    /// Modulus `n` as a decimal string.
    pub modulus: String,
    /// Base64 of the SPKI DER public key.
    pub public_key_base64: String,
    /// SHA-256 SPKI fingerprint, 64 lowercase hex characters.
    pub fingerprint: String,
    /// RFC 3339 timestamp of this snapshot.
    pub generated_time: String,
}

impl KeyMetadata {
    /// Take a fresh snapshot of `pair`.
    pub fn from_key_pair(pair: &KeyPair) -> Result<Self, Error> {
        let spki_der = codec::encode_public(pair, KeyEncoding::Der)?;
        Ok(Self {
            key_size: pair.modulus_bits(),
            public_exponent: pair.public_exponent(),
            modulus: pair.modulus_decimal(),
            public_key_base64: general_purpose::STANDARD.encode(&spki_der),
            fingerprint: fingerprint(pair)?,
            generated_time: Utc::now().to_rfc3339(),
        })
    }
}

/// Where a timestamped backup pair landed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BackupRecord {
    /// Backed-up private key file.
    pub private_path: PathBuf,
    /// Backed-up public key file.
    pub public_path: PathBuf,
    /// RFC 3339 timestamp of the backup.
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose, Engine as _};

    #[test]
    fn test_snapshot_fields() {
        let pair = crate::testutil::shared_pair();
        let metadata = KeyMetadata::from_key_pair(pair).unwrap();

        assert_eq!(metadata.key_size, 2048);
        assert_eq!(metadata.public_exponent, 65537);
        assert_eq!(metadata.modulus, pair.modulus_decimal());
        assert_eq!(metadata.fingerprint.len(), 64);
        assert!(metadata.modulus.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_public_key_base64_decodes_to_spki() {
        let pair = crate::testutil::shared_pair();
        let metadata = KeyMetadata::from_key_pair(pair).unwrap();

        let spki = general_purpose::STANDARD
            .decode(&metadata.public_key_base64)
            .unwrap();
        let loaded = KeyPair::load_public(&spki).unwrap();
        assert_eq!(fingerprint(&loaded).unwrap(), metadata.fingerprint);
    }

    #[test]
    fn test_json_round_trip() {
        let pair = crate::testutil::shared_pair();
        let metadata = KeyMetadata::from_key_pair(pair).unwrap();

        let json = serde_json::to_string_pretty(&metadata).unwrap();
        let parsed: KeyMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, metadata);
    }

    #[test]
    fn test_generated_time_is_rfc3339() {
        let pair = crate::testutil::shared_pair();
        let metadata = KeyMetadata::from_key_pair(pair).unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&metadata.generated_time).is_ok());
    }
}
