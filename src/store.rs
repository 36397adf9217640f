//! Key persistence: save, load, backup, and metadata export.
//!
//! The cryptographic core never touches the filesystem; everything that
//! does lives here. Individual files are written atomically (temp file
//! plus rename), so a file is never left half-written. The private/public
//! pair as a whole is not transactional: a crash between the two renames
//! can leave a fresh private key beside a stale public key.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::codec::{self, KeyEncoding};
use crate::error::Error;
use crate::keypair::KeyPair;
use crate::metadata::{BackupRecord, KeyMetadata};

/// Save both halves of `pair` as PEM files, private first.
///
/// Both halves are encoded before either file is touched, so an encoding
/// failure leaves no partial output.
pub fn save_key_pair(
    pair: &KeyPair,
    private_path: &Path,
    public_path: &Path,
) -> Result<(), Error> {
    let private_pem = codec::encode_private(pair, KeyEncoding::Pem)?;
    let public_pem = codec::encode_public(pair, KeyEncoding::Pem)?;
    write_atomic(private_path, &private_pem)?;
    write_atomic(public_path, &public_pem)?;
    Ok(())
}

/// Load a full key pair from an unencrypted private-key file.
///
/// # Errors
///
/// [`Error::Io`] when the file cannot be read, [`Error::Decode`] when its
/// contents are malformed; never a partially-constructed pair.
pub fn load_key_pair(private_path: &Path) -> Result<KeyPair, Error> {
    let bytes = fs::read(private_path)?;
    KeyPair::load_private(&bytes, None)
}

/// Load a public-only pair from an SPKI file.
pub fn load_public_key(public_path: &Path) -> Result<KeyPair, Error> {
    let bytes = fs::read(public_path)?;
    KeyPair::load_public(&bytes)
}

/// Generate a fresh pair, persist both halves, and return its metadata.
pub fn generate_and_persist(
    bits: usize,
    private_path: &Path,
    public_path: &Path,
) -> Result<KeyMetadata, Error> {
    let pair = KeyPair::generate(bits)?;
    save_key_pair(&pair, private_path, public_path)?;
    KeyMetadata::from_key_pair(&pair)
}

/// Write a timestamped backup pair under `dir`, creating it if absent.
///
/// File names are `{private,public}_key_{YYYYMMDD_HHMMSS}.pem`. Backups
/// are append-only: an existing file is never overwritten, and a
/// same-second collision gets a `_1`, `_2`, … suffix instead. A
/// public-only pair is refused — a backup must hold both halves.
pub fn backup(pair: &KeyPair, dir: &Path) -> Result<BackupRecord, Error> {
    let private_pem = codec::encode_private(pair, KeyEncoding::Pem)?;
    let public_pem = codec::encode_public(pair, KeyEncoding::Pem)?;

    fs::create_dir_all(dir)?;
    let timestamp = Utc::now().format("%Y%m%d_%H%M%S").to_string();
    let (private_path, public_path) = backup_paths(dir, &timestamp);

    write_atomic(&private_path, &private_pem)?;
    write_atomic(&public_path, &public_pem)?;

    Ok(BackupRecord {
        private_path,
        public_path,
        created_at: Utc::now().to_rfc3339(),
    })
}

/// First `{private,public}_key_{timestamp}[_N].pem` pair where neither
/// file exists yet.
fn backup_paths(dir: &Path, timestamp: &str) -> (PathBuf, PathBuf) {
    let mut suffix = String::new();
    let mut n = 0u32;
    loop {
        let private = dir.join(format!("private_key_{}{}.pem", timestamp, suffix));
        let public = dir.join(format!("public_key_{}{}.pem", timestamp, suffix));
        if !private.exists() && !public.exists() {
            return (private, public);
        }
        n += 1;
        suffix = format!("_{}", n);
    }
}

/// Export the metadata snapshot as pretty-printed JSON and return it.
pub fn export_metadata(pair: &KeyPair, path: &Path) -> Result<KeyMetadata, Error> {
    let metadata = KeyMetadata::from_key_pair(pair)?;
    let json = serde_json::to_string_pretty(&metadata)?;
    write_atomic(path, format!("{}\n", json).as_bytes())?;
    Ok(metadata)
}

/// Metadata snapshot without touching the filesystem.
pub fn key_metadata(pair: &KeyPair) -> Result<KeyMetadata, Error> {
    KeyMetadata::from_key_pair(pair)
}

/// Write `data` to `path` atomically: temp file in the same directory,
/// fsync, rename over the target. Either the old or the new content
/// survives a crash, never a partial write. Parent directories are
/// created if absent.
fn write_atomic(path: &Path, data: &[u8]) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = random_tmp_path(path);
    let mut tmp = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)?;

    if let Err(e) = tmp.write_all(data).and_then(|_| tmp.sync_all()) {
        drop(tmp);
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    drop(tmp);

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    // fsync the directory so the rename itself is durable
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            File::open(parent)?.sync_all()?;
        }
    }

    Ok(())
}

/// Unique sibling path `name.tmp.<randomhex>` for the temp file.
fn random_tmp_path(path: &Path) -> PathBuf {
    let mut buf = [0u8; 8];
    OsRng.fill_bytes(&mut buf);
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "key".to_string());
    path.with_file_name(format!("{}.tmp.{}", file_name, hex::encode(buf)))
}
