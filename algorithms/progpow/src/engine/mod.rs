//! Execution Engine
//!
//! Program generation, the round loop and nonce search.

pub mod mix;
pub mod parallel;
pub mod program;
