//! Token minting tool.
//!
//! Mints a fixed amount of an already-deployed token to the account that
//! signs the transaction, then waits for the network to confirm it.

pub mod amount;
pub mod config;
pub mod constants;
pub mod error;
pub mod mint;
pub mod signer;
