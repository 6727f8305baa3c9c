//! CLI Commands
//!
//! All progpow CLI commands organized as separate modules.

mod args;
mod hash;
mod search;
mod verify;

pub use args::{parse_hash256, parse_nonce, DatasetArgs};
pub use hash::{hash_nonce, keccak};
pub use search::search_nonces;
pub use verify::verify_seal;
