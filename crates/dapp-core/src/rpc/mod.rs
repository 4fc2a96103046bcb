//! Ledger RPC seam.
//!
//! [`LedgerRpc`] is everything the workflows (and a session's
//! sign-and-send) need from a Solana node. [`JsonRpcClient`] is the bundled
//! implementation over JSON-RPC 2.0; tests plug in their own.

use async_trait::async_trait;
use chain_sol::Address;

use crate::error::TransportError;

pub mod http;

pub use http::{JsonRpcClient, RpcClientError};

/// Final state of a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// Reached the configured commitment without error.
    Confirmed,
    /// Landed with an error, or never reached the commitment.
    Failed(String),
}

#[async_trait]
pub trait LedgerRpc: Send + Sync {
    /// Balance in lamports.
    async fn get_balance(&self, account: &Address) -> Result<u64, TransportError>;

    /// Ask the cluster faucet for `lamports`; returns the airdrop signature.
    async fn request_airdrop(&self, account: &Address, lamports: u64)
        -> Result<String, TransportError>;

    /// Wait for `signature` to settle.
    async fn confirm_transaction(&self, signature: &str) -> Result<Confirmation, TransportError>;

    /// Latest blockhash, decoded.
    async fn latest_blockhash(&self) -> Result<[u8; 32], TransportError>;

    /// Broadcast a signed wire transaction; returns its signature.
    async fn send_transaction(&self, wire: &[u8]) -> Result<String, TransportError>;
}
