//! The minting run: one `mint` call crediting the signer's own account.

use alloy::{
    network::ReceiptResponse,
    primitives::{Address, TxHash, U256},
    providers::{Provider, ProviderBuilder},
};
use eyre::WrapErr;
use std::fmt;
use token_mint_contracts::IMintableToken;
use tracing::{debug, info, instrument};

use crate::{
    amount,
    config::MintConfig,
    constants::TOKEN_ADDRESS,
    error::Error,
    signer,
};

/// What to mint, and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintRequest {
    /// Deployed token contract.
    pub token: Address,
    /// Amount in base units.
    pub amount: U256,
    /// Blocks that must include the transaction.
    pub confirmations: u64,
}

impl MintRequest {
    /// The fixed mint: 5000 tokens from [`TOKEN_ADDRESS`].
    pub fn fixed(confirmations: u64) -> Result<Self, Error> {
        Ok(Self {
            token: TOKEN_ADDRESS,
            amount: amount::mint_amount()?,
            confirmations,
        })
    }
}

/// A confirmed mint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintReceipt {
    pub recipient: Address,
    pub amount: U256,
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u64,
}

impl fmt::Display for MintReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Minted {} tokens to {}", self.amount, self.recipient)
    }
}

/// Resolve the signer for the selected network, connect, and mint.
pub async fn run(config: &MintConfig, network: Option<&str>) -> eyre::Result<MintReceipt> {
    let (name, network) = config.network(network)?;
    debug!(
        network = name,
        url = %network.url,
        solidity = %config.solidity,
        "resolved network"
    );

    let signer = signer::from_env(&network.private_key_env)?;
    let owner = signer.address();

    let provider = ProviderBuilder::new()
        .wallet(signer)
        .connect(network.url.as_str())
        .await
        .wrap_err_with(|| format!("failed to connect to network `{name}`"))?;

    if let Some(expected) = network.chain_id {
        check_chain_id(&provider, name, expected).await?;
    }

    let request = MintRequest::fixed(network.confirmations)?;
    mint(&provider, owner, &request)
        .await
        .wrap_err_with(|| format!("failed to mint on network `{name}`"))
}

/// Fail unless the node serves the chain the network pins.
pub async fn check_chain_id<P: Provider>(
    provider: &P,
    network: &str,
    expected: u64,
) -> Result<(), Error> {
    let actual = provider.get_chain_id().await?;
    if actual != expected {
        return Err(Error::ChainIdMismatch {
            network: network.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

/// Mint `request.amount` to `owner` and wait for confirmation.
///
/// The provider must sign as `owner`. Nothing is submitted if the token
/// address holds no code, since a call to a plain account would succeed
/// without minting.
#[instrument(
    skip_all,
    fields(token = %request.token, recipient = %owner, amount = %request.amount)
)]
pub async fn mint<P: Provider>(
    provider: &P,
    owner: Address,
    request: &MintRequest,
) -> Result<MintReceipt, Error> {
    let code = provider.get_code_at(request.token).await?;
    if code.is_empty() {
        return Err(Error::NoContractCode(request.token));
    }

    let token = IMintableToken::new(request.token, provider);
    let pending = token.mint(owner, request.amount).send().await?;
    let tx_hash = *pending.tx_hash();
    info!(%tx_hash, confirmations = request.confirmations, "mint submitted");

    let receipt = pending
        .with_required_confirmations(request.confirmations)
        .get_receipt()
        .await?;
    ensure_success(&receipt)?;

    let minted = MintReceipt {
        recipient: owner,
        amount: request.amount,
        tx_hash,
        block_number: receipt.block_number(),
        gas_used: receipt.gas_used(),
    };
    info!(
        block_number = ?minted.block_number,
        gas_used = minted.gas_used,
        "mint confirmed"
    );
    Ok(minted)
}

/// Reject receipts of transactions that were mined but reverted.
pub fn ensure_success<R: ReceiptResponse>(receipt: &R) -> Result<(), Error> {
    if receipt.status() {
        Ok(())
    } else {
        Err(Error::Reverted(receipt.transaction_hash()))
    }
}
