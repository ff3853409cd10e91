// src/bin/cyphergrid.rs
//! cyphergrid command-line harness: encrypt, decrypt, keygen, demo

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cyphergrid::config::{self, Config};
use cyphergrid::{generate_key, HillCipher, KeyMaterial};
use rpassword::read_password;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "cyphergrid")]
#[command(about = "Hill cipher over a configurable alphabet")]
#[command(version)]
struct Cli {
    /// Key specification, e.g. "3,5,1,4,5,6,7,5,2" (overrides config and CYPHERGRID_KEY)
    #[arg(long, global = true)]
    key: Option<String>,

    /// Read the key from the terminal without echo
    #[arg(long, global = true)]
    prompt_key: bool,

    /// Offset added to every character code
    #[arg(long, global = true, allow_hyphen_values = true)]
    start_index: Option<i64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt TEXT and print the ciphertext
    Encrypt { text: String },
    /// Decrypt TEXT and print the plaintext
    Decrypt { text: String },
    /// Print a random key that is invertible for the configured alphabet
    Keygen {
        /// Block size (the key has SIZE² elements)
        #[arg(long, default_value_t = 3)]
        size: usize,
    },
    /// Encrypt and decrypt a sample sentence with the configured key
    Demo {
        #[arg(default_value = "Use a")]
        text: String,
    },
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut conf = config::load().context("Failed to load configuration")?;

    if let Some(key) = cli.key {
        conf.key.matrix = KeyMaterial::new(key);
    }
    if cli.prompt_key {
        eprint!("Key: ");
        std::io::stderr().flush()?;
        let input = read_password().context("Failed to read key")?;
        conf.key.matrix = KeyMaterial::new(input.trim().to_owned());
    }
    if let Some(start_index) = cli.start_index {
        conf.key.start_index = start_index;
    }

    match cli.command {
        Commands::Encrypt { text } => {
            let cipher = build_cipher(&conf)?;
            println!("{}", cipher.encrypt(&text)?);
        }
        Commands::Decrypt { text } => {
            let cipher = build_cipher(&conf)?;
            println!("{}", cipher.decrypt(&text)?);
        }
        Commands::Keygen { size } => {
            let alphabet = conf.alphabet()?;
            let key = generate_key(&mut rand::rng(), size, alphabet.size())
                .context("Failed to generate key")?;
            println!("{}", key.to_key_spec());
        }
        Commands::Demo { text } => {
            let cipher = build_cipher(&conf)?;
            info!(
                block_size = cipher.block_size(),
                modulus = cipher.modulus(),
                "running demo"
            );
            let encrypted = cipher.encrypt(&text)?;
            println!("Encrypted: {}", encrypted.escape_debug());
            let decrypted = cipher.decrypt(&encrypted)?;
            println!("Decrypted: {decrypted}");
            anyhow::ensure!(decrypted == text, "round trip mismatch");
        }
    }

    Ok(())
}

fn build_cipher(conf: &Config) -> Result<HillCipher> {
    conf.build_cipher()
        .context("Invalid key: check --key, CYPHERGRID_KEY or the [key] section of the config")
}
