//! Error types for a minting run.

use alloy::{
    primitives::{Address, TxHash, utils::UnitsError},
    providers::PendingTransactionError,
    signers::local::LocalSignerError,
    transports::{RpcError, TransportErrorKind},
};
use thiserror::Error;

/// Errors that can abort a minting run.
///
/// None of the variants carry the signing key itself, only the name of the
/// variable it was read from.
#[derive(Debug, Error)]
pub enum Error {
    /// The variable that should hold the signing key is unset or empty.
    #[error("missing signing key: environment variable `{0}` is not set")]
    MissingCredential(String),
    /// The variable is set but does not hold a valid secp256k1 key.
    #[error("invalid signing key in environment variable `{var}`")]
    InvalidCredential {
        var: String,
        #[source]
        source: LocalSignerError,
    },
    /// Config file declares no networks at all.
    #[error("no networks configured")]
    NoNetworks,
    /// Requested network is not present in the config.
    #[error("unknown network `{name}`, configured networks: {available}")]
    UnknownNetwork { name: String, available: String },
    /// Network asks for zero confirmations.
    #[error("network `{0}` must require at least one confirmation")]
    ZeroConfirmations(String),
    /// Amount literal could not be scaled into base units.
    #[error("invalid mint amount `{amount}`")]
    InvalidAmount {
        amount: String,
        #[source]
        source: UnitsError,
    },
    /// Amount literal is negative.
    #[error("mint amount `{0}` must not be negative")]
    NegativeAmount(String),
    /// Node serves a different chain than the network pins.
    #[error("network `{network}` expects chain id {expected}, node reports {actual}")]
    ChainIdMismatch {
        network: String,
        expected: u64,
        actual: u64,
    },
    /// Nothing is deployed at the token address.
    #[error("no contract code at token address {0}")]
    NoContractCode(Address),
    /// The mint transaction was mined but reverted.
    #[error("mint transaction {0} reverted")]
    Reverted(TxHash),
    /// Call encoding, gas estimation or submission failed.
    #[error(transparent)]
    Contract(#[from] alloy::contract::Error),
    /// Plain JSON-RPC request failed.
    #[error(transparent)]
    Rpc(#[from] RpcError<TransportErrorKind>),
    /// Waiting for the receipt failed.
    #[error(transparent)]
    Confirmation(#[from] PendingTransactionError),
}
