use std::error::Error as StdError;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use base64::{engine::general_purpose, Engine as _};
use clap::{Parser, Subcommand};

use keyforge::{cipher, signature, store, KeyPair};

#[derive(Debug, Parser)]
#[command(name = "keyforge")]
#[command(
    version,
    about = "RSA key management: generate, sign, verify, encrypt, decrypt."
)]
struct Cli {
    /// Path to the private key file
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        default_value = "private_key.pem"
    )]
    private_key: PathBuf,

    /// Path to the public key file
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        default_value = "public_key.pem"
    )]
    public_key: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generates a key pair, exports its metadata, and writes a backup
    Generate {
        /// Modulus size in bits (2048, 3072, or 4096)
        #[arg(long, default_value_t = 2048)]
        key_size: usize,

        /// Metadata JSON output path
        #[arg(long, value_name = "PATH", default_value = "key_info.json")]
        info_file: PathBuf,

        /// Backup directory
        #[arg(long, value_name = "DIR", default_value = "key_backup")]
        backup_dir: PathBuf,
    },

    /// Signs a message with the private key
    #[command(arg_required_else_help = true)]
    Sign {
        /// Message to sign
        #[arg(long)]
        message: String,

        /// Write the raw signature to this file
        #[arg(long, value_name = "PATH")]
        signature_file: Option<PathBuf>,
    },

    /// Verifies a signature against a message
    #[command(arg_required_else_help = true)]
    Verify {
        /// Message the signature is claimed to cover
        #[arg(long)]
        message: String,

        /// Raw signature file to check
        #[arg(long, value_name = "PATH")]
        signature_file: PathBuf,
    },

    /// Encrypts a message with the public key
    #[command(arg_required_else_help = true)]
    Encrypt {
        /// Message to encrypt
        #[arg(long)]
        message: String,

        /// Write the base64 ciphertext here instead of stdout
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Decrypts base64 ciphertext with the private key
    #[command(arg_required_else_help = true)]
    Decrypt {
        /// Base64 ciphertext
        #[arg(long)]
        message: String,

        /// Write the plaintext here instead of stdout
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Shows key metadata as JSON
    Info,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn StdError>> {
    match cli.command {
        Commands::Generate {
            key_size,
            info_file,
            backup_dir,
        } => {
            println!("generating a {key_size}-bit RSA key pair...");
            let pair = KeyPair::generate(key_size)?;
            store::save_key_pair(&pair, &cli.private_key, &cli.public_key)?;
            let metadata = store::export_metadata(&pair, &info_file)?;
            let record = store::backup(&pair, &backup_dir)?;

            println!("private key saved to: {}", cli.private_key.display());
            println!("public key saved to: {}", cli.public_key.display());
            println!("key metadata exported to: {}", info_file.display());
            println!("backup written to: {}", record.private_path.display());
            println!();
            println!("key size: {} bits", metadata.key_size);
            println!("fingerprint: {}", metadata.fingerprint);
            println!("generated: {}", metadata.generated_time);
            println!("public key (base64):");
            println!("{}", metadata.public_key_base64);
            Ok(ExitCode::SUCCESS)
        }

        Commands::Sign {
            message,
            signature_file,
        } => {
            let pair = store::load_key_pair(&cli.private_key)?;
            let sig = signature::sign(&pair, message.as_bytes())?;
            if let Some(path) = &signature_file {
                fs::write(path, &sig)?;
                println!("signature saved to: {}", path.display());
            }
            println!(
                "signature (base64): {}",
                general_purpose::STANDARD.encode(&sig)
            );
            Ok(ExitCode::SUCCESS)
        }

        Commands::Verify {
            message,
            signature_file,
        } => {
            let pair = store::load_public_key(&cli.public_key)?;
            let sig = fs::read(&signature_file)?;
            if signature::verify(&pair, message.as_bytes(), &sig)? {
                println!("signature is valid");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("signature is INVALID");
                Ok(ExitCode::FAILURE)
            }
        }

        Commands::Encrypt { message, output } => {
            let pair = store::load_public_key(&cli.public_key)?;
            let ciphertext = cipher::encrypt(&pair, message.as_bytes())?;
            let encoded = general_purpose::STANDARD.encode(&ciphertext);
            match output {
                Some(path) => {
                    fs::write(&path, &encoded)?;
                    println!("ciphertext saved to: {}", path.display());
                }
                None => println!("ciphertext (base64): {encoded}"),
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Decrypt { message, output } => {
            let pair = store::load_key_pair(&cli.private_key)?;
            let ciphertext = general_purpose::STANDARD.decode(message.trim())?;
            let plaintext = cipher::decrypt(&pair, &ciphertext)?;
            let text = String::from_utf8(plaintext)?;
            match output {
                Some(path) => {
                    fs::write(&path, &text)?;
                    println!("plaintext saved to: {}", path.display());
                }
                None => println!("{text}"),
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Info => {
            let pair = store::load_key_pair(&cli.private_key)?;
            let metadata = store::key_metadata(&pair)?;
            println!("{}", serde_json::to_string_pretty(&metadata)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
