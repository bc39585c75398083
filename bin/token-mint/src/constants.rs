//! Constants for the minting run.

pub use token_mint_contracts::TOKEN_ADDRESS;

/// Whole-token amount minted on every run.
pub const MINT_AMOUNT: &str = "5000";

/// Decimal precision used to scale [`MINT_AMOUNT`] into base units.
pub const TOKEN_DECIMALS: u8 = 18;

/// Configuration defaults.
pub mod config {
    /// Solidity compiler version the project's contracts are built with.
    pub const SOLIDITY_VERSION: &str = "0.8.20";
    /// Network used when neither the CLI nor the config file selects one.
    pub const DEFAULT_NETWORK: &str = "sepolia";
    /// Public endpoint of the default network.
    pub const DEFAULT_NETWORK_URL: &str = "https://ethereum-sepolia-rpc.publicnode.com";
    /// Chain id of the default network.
    pub const DEFAULT_CHAIN_ID: u64 = 11_155_111;
    /// Environment variable holding the hex-encoded signing key.
    pub const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";
    /// Blocks that must include the mint before it counts as confirmed.
    pub const DEFAULT_CONFIRMATIONS: u64 = 1;

    /// Returns the Solidity version (for serde default).
    pub fn default_solidity() -> String {
        SOLIDITY_VERSION.to_string()
    }
    /// Returns the default network name (for serde default).
    pub fn default_network() -> String {
        DEFAULT_NETWORK.to_string()
    }
    /// Returns the private key variable (for serde default).
    pub fn default_private_key_env() -> String {
        PRIVATE_KEY_ENV.to_string()
    }
    /// Returns the confirmation count (for serde default).
    pub const fn default_confirmations() -> u64 {
        DEFAULT_CONFIRMATIONS
    }
}
