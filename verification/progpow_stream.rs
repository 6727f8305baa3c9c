//! # `PractRand` Stream Generator
//!
//! Stream generator for `PractRand` testing.
//!
//! Hashes an incrementing 64-bit nonce against a fixed header and a synthetic
//! dataset and writes the raw digests to stdout.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use progpow::{MemoryDataset, ProgramCache};
use std::io::{self, Write};

/// Which digest goes into the stream.
#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Final hash of the full ProgPoW evaluation
    Final,
    /// Mix hash of the full ProgPoW evaluation
    Mix,
    /// `keccak_progpow_256` over the nonce alone (no dataset access)
    Keccak,
    /// Final hash, advancing the block number every 4096 nonces
    Periods,
}

#[derive(Parser)]
#[command(about = "Writes a ProgPoW digest stream to stdout")]
struct Args {
    #[arg(value_enum, default_value = "final")]
    mode: Mode,

    /// Synthetic dataset size in 2048-bit items
    #[arg(long, default_value_t = 1024)]
    items: u32,

    /// Synthetic dataset seed
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Starting block number
    #[arg(long, default_value_t = 0)]
    block: u64,
}

/// Entry point for the `PractRand` stream generator.
fn main() -> Result<()> {
    let args = Args::parse();
    anyhow::ensure!(args.items > 0, "--items must be at least 1");

    let dataset = MemoryDataset::synthetic(args.items, args.seed);
    let mut cache = ProgramCache::new();
    let header = [0u8; 32];

    let mut counter: u64 = 0;
    let stdout = io::stdout();
    let mut handle = io::BufWriter::new(stdout.lock());

    loop {
        let digest = match args.mode {
            Mode::Keccak => progpow::keccak_progpow_256(&header, counter, &[0u8; 32]),
            Mode::Final | Mode::Mix | Mode::Periods => {
                let block = match args.mode {
                    // New program every 4096 nonces
                    Mode::Periods => args.block.wrapping_add((counter >> 12) * 50),
                    _ => args.block,
                };
                let program = cache.get_or_build(&dataset, block);
                let result = progpow::hash_with_program(&dataset, program, &header, counter);
                if matches!(args.mode, Mode::Mix) {
                    result.mix_hash
                } else {
                    result.final_hash
                }
            }
        };

        // Broken pipe ends the stream
        if handle.write_all(&digest).is_err() {
            break;
        }

        counter = counter.wrapping_add(1);
    }

    Ok(())
}
