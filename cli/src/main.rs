//! ProgPoW CLI
//!
//! Hash, verify and search nonces from the command line.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{
    hash_nonce, keccak, parse_hash256, parse_nonce, search_nonces, verify_seal, DatasetArgs,
};
use tracing_subscriber::EnvFilter;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "progpow")]
#[command(about = "ProgPoW 0.9.2 proof-of-work hashing", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Keccak-f[800] over header, nonce and mix (no dataset needed)
    Keccak {
        /// Header hash (64 hex chars)
        #[arg(long, value_parser = parse_hash256)]
        header: [u8; 32],

        /// Nonce (decimal, or hex with 0x prefix)
        #[arg(long, value_parser = parse_nonce, default_value = "0")]
        nonce: u64,

        /// Mix hash (64 hex chars)
        #[arg(long, value_parser = parse_hash256, default_value = ZERO_HASH)]
        mix: [u8; 32],
    },

    /// Compute the final and mix hash of one nonce
    Hash {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Block number (selects the period's program)
        #[arg(long, default_value_t = 0)]
        block: u64,

        /// Header hash (64 hex chars)
        #[arg(long, value_parser = parse_hash256)]
        header: [u8; 32],

        /// Nonce (decimal, or hex with 0x prefix)
        #[arg(long, value_parser = parse_nonce)]
        nonce: u64,
    },

    /// Verify a sealed header against a boundary
    Verify {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Block number (selects the period's program)
        #[arg(long, default_value_t = 0)]
        block: u64,

        /// Header hash (64 hex chars)
        #[arg(long, value_parser = parse_hash256)]
        header: [u8; 32],

        /// Nonce (decimal, or hex with 0x prefix)
        #[arg(long, value_parser = parse_nonce)]
        nonce: u64,

        /// Claimed mix hash (64 hex chars)
        #[arg(long, value_parser = parse_hash256)]
        mix: [u8; 32],

        /// Boundary, big-endian (64 hex chars)
        #[arg(long, value_parser = parse_hash256, default_value = OPEN_BOUNDARY)]
        boundary: [u8; 32],
    },

    /// Search for a nonce whose final hash meets the boundary
    Search {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Block number (selects the period's program)
        #[arg(long, default_value_t = 0)]
        block: u64,

        /// Header hash (64 hex chars)
        #[arg(long, value_parser = parse_hash256)]
        header: [u8; 32],

        /// Boundary, big-endian (64 hex chars)
        #[arg(long, value_parser = parse_hash256)]
        boundary: [u8; 32],

        /// First nonce to try (decimal, or hex with 0x prefix)
        #[arg(long, value_parser = parse_nonce, default_value = "0")]
        start_nonce: u64,

        /// Number of nonces to try
        #[arg(long, default_value_t = 1_000_000)]
        iterations: u64,

        /// Worker threads (0 = one per core)
        #[arg(long, default_value_t = 0)]
        threads: usize,
    },
}

const ZERO_HASH: &str = "0000000000000000000000000000000000000000000000000000000000000000";
const OPEN_BOUNDARY: &str = "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Keccak { header, nonce, mix } => keccak(&header, nonce, &mix),
        Commands::Hash {
            dataset,
            block,
            header,
            nonce,
        } => hash_nonce(&dataset.load()?, block, &header, nonce),
        Commands::Verify {
            dataset,
            block,
            header,
            nonce,
            mix,
            boundary,
        } => {
            if !verify_seal(&dataset.load()?, block, &header, nonce, &mix, &boundary) {
                std::process::exit(1);
            }
        }
        Commands::Search {
            dataset,
            block,
            header,
            boundary,
            start_nonce,
            iterations,
            threads,
        } => {
            let dataset = dataset.load()?;
            if !search_nonces(&dataset, block, &header, &boundary, start_nonce, iterations, threads)?
            {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
