//! Wallet session seam.
//!
//! A session is whatever owns the user's keys: a browser extension bridge,
//! a hardware wallet, a local keypair in tests. The workflows only ever see
//! the connected address and ask the session to sign; key material never
//! crosses this boundary.

use async_trait::async_trait;
use chain_sol::Address;

use crate::error::TransportError;
use crate::request::TransferRequest;
use crate::rpc::LedgerRpc;

/// Signs arbitrary bytes with the connected account's key.
#[async_trait]
pub trait MessageSigner: Send + Sync {
    /// Returns the raw 64-byte Ed25519 signature, or the wallet's error
    /// (user rejection included).
    async fn sign_message(&self, message: &[u8]) -> Result<Vec<u8>, TransportError>;
}

/// A connected (or not yet connected) wallet.
#[async_trait]
pub trait WalletSession: Send + Sync {
    /// The connected account, if any.
    fn connected_account(&self) -> Option<Address>;

    /// Message signing capability. Not every wallet offers one.
    fn message_signer(&self) -> Option<&dyn MessageSigner> {
        None
    }

    /// Build, sign and broadcast `request` through `rpc`, returning the
    /// transaction signature.
    async fn sign_and_send(
        &self,
        request: &TransferRequest,
        rpc: &dyn LedgerRpc,
    ) -> Result<String, TransportError>;
}
