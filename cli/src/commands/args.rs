//! Shared Arguments
//!
//! Dataset selection and value parsers used by several commands.

use anyhow::{bail, Context, Result};
use clap::Args;
use progpow::MemoryDataset;
use std::path::PathBuf;
use tracing::info;

// =============================================================================
// DATASET
// =============================================================================

/// Where the epoch dataset comes from.
#[derive(Args, Debug)]
pub struct DatasetArgs {
    /// Raw dataset file (little-endian 32-bit words)
    #[arg(long, value_name = "FILE")]
    dataset: Option<PathBuf>,

    /// Items (2048-bit) of the synthetic dataset used without --dataset
    #[arg(long, value_name = "N", default_value_t = 1024)]
    synthetic_items: u32,

    /// Seed of the synthetic dataset
    #[arg(long, value_name = "S", default_value_t = 0)]
    synthetic_seed: u64,
}

impl DatasetArgs {
    /// Read the dataset file, or build the synthetic one.
    pub fn load(&self) -> Result<MemoryDataset> {
        if let Some(path) = &self.dataset {
            let bytes = std::fs::read(path)
                .with_context(|| format!("Failed to read: {}", path.display()))?;
            let dataset = MemoryDataset::from_le_bytes(&bytes)
                .with_context(|| format!("Invalid dataset: {}", path.display()))?;
            info!(path = %path.display(), bytes = dataset.size_bytes(), "loaded dataset");
            return Ok(dataset);
        }

        if self.synthetic_items == 0 {
            bail!("--synthetic-items must be at least 1");
        }
        let dataset = MemoryDataset::synthetic(self.synthetic_items, self.synthetic_seed);
        info!(
            items = self.synthetic_items,
            seed = self.synthetic_seed,
            "using synthetic dataset"
        );
        Ok(dataset)
    }
}

// =============================================================================
// VALUE PARSERS
// =============================================================================

/// Parse a 256-bit value from 64 hex characters (optional 0x prefix).
pub fn parse_hash256(s: &str) -> Result<[u8; 32], String> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(digits).map_err(|e| format!("invalid hex: {e}"))?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| format!("expected 32 bytes, got {len}"))
}

/// Parse a nonce: hex with a 0x prefix, decimal otherwise.
pub fn parse_nonce(s: &str) -> Result<u64, String> {
    match s.strip_prefix("0x") {
        Some(digits) => u64::from_str_radix(digits, 16),
        None => s.parse(),
    }
    .map_err(|e| format!("invalid nonce '{s}': {e}"))
}
