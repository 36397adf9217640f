//! Bounded-payload encryption and decryption.
//!
//! RSAES-OAEP with SHA-256 and MGF1-SHA256, no label. Encryption is
//! randomized, so the same plaintext encrypted twice yields different
//! ciphertexts. Payloads are capped at [`max_plaintext_len`] — there is
//! no hybrid or chunked mode; callers with larger data need a symmetric
//! layer of their own.

use rand::rngs::OsRng;
use rsa::Oaep;
use sha2::Sha256;

use crate::error::Error;
use crate::keypair::KeyPair;

const HASH_LEN: usize = 32;

/// Largest plaintext the pair's modulus can carry under OAEP-SHA256:
/// `modulus_bytes - 2 * 32 - 2` (190 bytes for a 2048-bit key).
pub fn max_plaintext_len(pair: &KeyPair) -> usize {
    pair.modulus_bytes() - 2 * HASH_LEN - 2
}

/// Encrypt `plaintext` under the pair's public half.
///
/// The ciphertext is `modulus_bytes` long.
///
/// # Errors
///
/// [`Error::PlaintextTooLarge`] when `plaintext` exceeds
/// [`max_plaintext_len`], checked before any work is done.
pub fn encrypt(pair: &KeyPair, plaintext: &[u8]) -> Result<Vec<u8>, Error> {
    let max = max_plaintext_len(pair);
    if plaintext.len() > max {
        return Err(Error::PlaintextTooLarge {
            len: plaintext.len(),
            max,
        });
    }
    let mut rng = OsRng;
    pair.public()
        .encrypt(&mut rng, Oaep::new::<Sha256>(), plaintext)
        .map_err(|e| Error::Crypto(format!("encryption failed: {}", e)))
}

/// Decrypt `ciphertext` with the pair's private half.
///
/// Every decryption failure — wrong length, padding check, corrupt
/// bytes — collapses to the one generic [`Error::Decryption`] so the
/// error channel cannot act as a padding oracle.
///
/// # Errors
///
/// [`Error::NoPrivateKey`] for a public-only pair; [`Error::Decryption`]
/// for anything else.
pub fn decrypt(pair: &KeyPair, ciphertext: &[u8]) -> Result<Vec<u8>, Error> {
    let private = pair.private()?;
    private
        .decrypt(Oaep::new::<Sha256>(), ciphertext)
        .map_err(|_| Error::Decryption)
}
