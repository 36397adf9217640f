//! # keyforge
//!
//! RSA key lifecycle management and cryptographic operations.
//!
//! keyforge creates RSA key pairs, persists them in standard encodings,
//! and performs signing, verification, encryption, and decryption against
//! them, alongside key-identity (fingerprint) computation and versioned
//! backup.
//!
//! ## Features
//!
//! - **Key generation**: 2048/3072/4096-bit RSA key pairs with a fixed
//!   65537 public exponent
//! - **Canonical serialization**: PKCS#8 and SubjectPublicKeyInfo, PEM or
//!   DER, byte-stable round trips
//! - **Digital signatures**: RSASSA-PSS with SHA-256 and maximum salt
//! - **Encryption**: RSAES-OAEP with SHA-256 for bounded payloads
//! - **Fingerprints**: SHA-256 over the canonical SPKI encoding
//! - **Keystore**: atomic file persistence, append-only timestamped
//!   backups, JSON metadata export
//!
//! ## Quick Start
//!
//! ```rust
//! use keyforge::{cipher, fingerprint, signature, KeyPair};
//!
//! // Generate a new 2048-bit key pair
//! let pair = KeyPair::generate(2048).unwrap();
//!
//! // Sign some data and verify it
//! let message = b"Hello, World!";
//! let sig = signature::sign(&pair, message).unwrap();
//! assert!(signature::verify(&pair, message, &sig).unwrap());
//!
//! // Encrypt and decrypt a bounded payload
//! let ciphertext = cipher::encrypt(&pair, b"secret").unwrap();
//! assert_eq!(cipher::decrypt(&pair, &ciphertext).unwrap(), b"secret");
//!
//! // Stable identity for the public key
//! let fp = fingerprint::fingerprint(&pair).unwrap();
//! println!("fingerprint: {}", fp);
//! ```
//!
//! ## Security
//!
//! This implementation uses:
//! - RSASSA-PSS (MGF1-SHA256, maximum salt) for signatures
//! - RSAES-OAEP (SHA-256, no label) for encryption
//! - SHA-256 for hashing and fingerprints
//! - The operating system's secure random number generator
//!
//! Decryption failures collapse to a single generic error so the error
//! channel cannot act as a padding oracle, and verification reports a bad
//! signature as `Ok(false)` rather than an error.
//!
//! ## Error Handling
//!
//! All operations return `Result<T, Error>`. The [`Error`] enum keeps
//! recoverable conditions (decode failures, missing key material, payload
//! limits) as distinct typed variants.

pub mod cipher;
pub mod codec;
pub mod error;
pub mod fingerprint;
pub mod keypair;
pub mod metadata;
pub mod signature;
pub mod store;

pub use codec::KeyEncoding;
pub use error::Error;
pub use keypair::KeyPair;
pub use metadata::{BackupRecord, KeyMetadata};
