//! Message signing and verification.
//!
//! Signatures are RSASSA-PSS over a SHA-256 message digest, with
//! MGF1-SHA256 and the maximum salt length the modulus permits. The
//! random salt makes signing non-deterministic: two signatures over the
//! same message differ in raw bytes, and both verify.
//!
//! A signature is bound to exactly one (message, public key) pair and
//! carries no embedded metadata; the message must be supplied again at
//! verification time.

use rand::rngs::OsRng;
use rsa::Pss;
use sha2::{Digest, Sha256};

use crate::error::Error;
use crate::keypair::KeyPair;

const HASH_LEN: usize = 32;

// Largest salt RSASSA-PSS permits for this modulus and digest.
fn max_salt_len(pair: &KeyPair) -> usize {
    pair.modulus_bytes() - HASH_LEN - 2
}

/// Sign `message` with the pair's private half.
///
/// The signature is `modulus_bytes` long.
///
/// # Errors
///
/// [`Error::NoPrivateKey`] for a public-only pair.
pub fn sign(pair: &KeyPair, message: &[u8]) -> Result<Vec<u8>, Error> {
    let private = pair.private()?;
    let digest = Sha256::digest(message);
    let padding = Pss::new_with_salt::<Sha256>(max_salt_len(pair));
    let mut rng = OsRng;
    private
        .sign_with_rng(&mut rng, padding, &digest)
        .map_err(|e| Error::Crypto(format!("signing failed: {}", e)))
}

/// Check `signature` against `message` under the pair's public half.
///
/// A cryptographic mismatch is `Ok(false)`, never an error, and the
/// outcome is deterministic for a fixed (key, message, signature) triple.
///
/// # Errors
///
/// [`Error::MalformedSignature`] when the signature length cannot match
/// the modulus — the only structurally implausible case.
pub fn verify(pair: &KeyPair, message: &[u8], signature: &[u8]) -> Result<bool, Error> {
    if signature.len() != pair.modulus_bytes() {
        return Err(Error::MalformedSignature(format!(
            "expected {} bytes, got {}",
            pair.modulus_bytes(),
            signature.len()
        )));
    }
    let digest = Sha256::digest(message);
    let padding = Pss::new_with_salt::<Sha256>(max_salt_len(pair));
    Ok(pair.public().verify(padding, &digest, signature).is_ok())
}
