#![forbid(unsafe_code)]
//! Validate, corrupt, or generate chain documents from the command line

use chainguard::blockchain::{break_chain, validate_chain, Blockchain};
use chainguard::config::{load_config, DEFAULT_CONFIG_PATH};
use chainguard::crypto::KeyPair;
use chainguard::transaction::Transaction;
use clap::{Parser, Subcommand};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "chainguard", version, about = "Chain integrity checker")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a chain document and report the first violation found
    Validate { file: PathBuf },
    /// Forge the genesis previous hash so the chain no longer validates
    Break {
        file: PathBuf,
        /// Write the corrupted chain here instead of overwriting the input
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Write a valid sample chain signed by freshly generated keys
    Demo {
        file: PathBuf,
        /// Number of blocks after genesis
        #[arg(long, default_value_t = 3)]
        blocks: u32,
    },
}

fn read_chain(path: &Path) -> Result<Blockchain, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    Ok(Blockchain::from_json(&json)?)
}

fn write_chain(path: &Path, chain: &Blockchain) -> Result<(), Box<dyn std::error::Error>> {
    fs::write(path, chain.to_json()?)?;
    Ok(())
}

fn demo_chain(blocks: u32) -> Result<Blockchain, Box<dyn std::error::Error>> {
    let alice = KeyPair::generate();
    let bob = KeyPair::generate();
    let mut chain = Blockchain::new();
    for i in 0..blocks {
        let amount = (i64::from(i) + 1) * 10;
        chain.add_transactions(vec![
            Transaction::new(&alice, bob.identity(), amount),
            Transaction::new(&bob, alice.identity(), amount / 2),
        ])?;
    }
    Ok(chain)
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    tracing_subscriber::fmt()
        .with_max_level(config.logging.level()?)
        .with_writer(std::io::stderr)
        .init();
    if !config.output.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Command::Validate { file } => {
            let chain = read_chain(&file)?;
            info!("Validating {} ({} blocks)", file.display(), chain.blocks.len());
            match validate_chain(&chain) {
                Ok(()) => {
                    println!("{} {}", "VALID".bright_green().bold(), file.display());
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    println!("{} {}", "INVALID".bright_red().bold(), file.display());
                    println!("  {}", e.to_string().yellow());
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Break { file, output } => {
            let mut chain = read_chain(&file)?;
            if chain.blocks.is_empty() {
                warn!("{} has no blocks; nothing to break", file.display());
                return Ok(ExitCode::FAILURE);
            }
            break_chain(&mut chain);
            let target = output.unwrap_or(file);
            write_chain(&target, &chain)?;
            println!("{} {}", "Tampered".bright_magenta().bold(), target.display());
            Ok(ExitCode::SUCCESS)
        }
        Command::Demo { file, blocks } => {
            let chain = demo_chain(blocks)?;
            write_chain(&file, &chain)?;
            info!("Wrote demo chain with {} blocks", chain.blocks.len());
            println!(
                "{} {} ({} blocks)",
                "Created".bright_cyan().bold(),
                file.display(),
                chain.blocks.len()
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}
