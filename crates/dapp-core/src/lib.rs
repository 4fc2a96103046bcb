//! Client-side workflows for a Solana devnet dApp.
//!
//! Four independent workflows (airdrop, transfer, balance, message
//! signing) share one shape: validate input, build a request, hand it to
//! an external collaborator, and interpret the result as an [`Outcome`].
//! Collaborators are passed in explicitly:
//!
//! - [`LedgerRpc`]: balance, faucet, broadcast and confirmation
//!   ([`JsonRpcClient`] talks to a real node)
//! - [`WalletSession`] / [`MessageSigner`]: the connected wallet
//! - [`SignatureVerifier`]: checks message signatures ([`Ed25519Verifier`])
//!
//! No state survives between invocations and nothing is retried.

pub mod airdrop;
pub mod balance;
pub mod config;
pub mod error;
pub mod outcome;
pub mod request;
pub mod rpc;
pub mod session;
pub mod sign_message;
pub mod transfer;
pub mod validate;
pub mod verify;

#[cfg(test)]
mod test_support;

pub use airdrop::request_airdrop;
pub use balance::fetch_balance;
pub use config::{Cluster, Commitment, Config, RpcConfig};
pub use error::{ConfigError, TransportError, ValidationError, WorkflowError};
pub use outcome::{Artifact, Balance, Outcome};
pub use request::{AirdropRequest, MessagePayload, TransferRequest};
pub use rpc::{Confirmation, JsonRpcClient, LedgerRpc, RpcClientError};
pub use session::{MessageSigner, WalletSession};
pub use sign_message::sign_message;
pub use transfer::send_transfer;
pub use verify::{Ed25519Verifier, SignatureVerifier};

pub use chain_sol::Address;
