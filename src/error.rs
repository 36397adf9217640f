use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported key size: {0} bits (expected 2048, 3072, or 4096)")]
    InvalidParameter(usize),

    #[error("malformed key material: {0}")]
    Decode(String),

    #[error("private key is encrypted and the passphrase is missing or wrong")]
    WrongPassphrase,

    #[error("operation requires a private key")]
    NoPrivateKey,

    #[error("operation requires a public key")]
    NoPublicKey,

    #[error("malformed signature: {0}")]
    MalformedSignature(String),

    // Carries no detail: the reason a ciphertext was rejected must not be
    // observable through the error channel.
    #[error("decryption failed")]
    Decryption,

    #[error("plaintext is {len} bytes but this key accepts at most {max}")]
    PlaintextTooLarge { len: usize, max: usize },

    #[error("crypto error: {0}")]
    Crypto(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<rsa::pkcs8::Error> for Error {
    fn from(err: rsa::pkcs8::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<rsa::pkcs8::spki::Error> for Error {
    fn from(err: rsa::pkcs8::spki::Error) -> Self {
        Error::Decode(err.to_string())
    }
}
