//! In-memory collaborators for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chain_sol::Address;
use ed25519_dalek::{Signer, SigningKey};

use crate::error::TransportError;
use crate::request::TransferRequest;
use crate::rpc::{Confirmation, LedgerRpc};
use crate::session::{MessageSigner, WalletSession};
use crate::verify::SignatureVerifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcCall {
    GetBalance(Address),
    RequestAirdrop(Address, u64),
    Confirm(String),
    LatestBlockhash,
    SendTransaction(usize),
}

/// Scripted ledger that records every call.
pub struct MockRpc {
    calls: Mutex<Vec<RpcCall>>,
    balance: Result<u64, TransportError>,
    airdrop: Result<String, TransportError>,
    confirmation: Result<Confirmation, TransportError>,
}

impl Default for MockRpc {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            balance: Ok(0),
            airdrop: Ok("airdrop-sig".into()),
            confirmation: Ok(Confirmation::Confirmed),
        }
    }
}

impl MockRpc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(mut self, lamports: u64) -> Self {
        self.balance = Ok(lamports);
        self
    }

    pub fn with_balance_error(mut self, message: &str) -> Self {
        self.balance = Err(TransportError::new(message));
        self
    }

    pub fn with_airdrop_error(mut self, message: &str) -> Self {
        self.airdrop = Err(TransportError::new(message));
        self
    }

    pub fn with_confirmation(mut self, confirmation: Confirmation) -> Self {
        self.confirmation = Ok(confirmation);
        self
    }

    pub fn calls(&self) -> Vec<RpcCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RpcCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl LedgerRpc for MockRpc {
    async fn get_balance(&self, account: &Address) -> Result<u64, TransportError> {
        self.record(RpcCall::GetBalance(*account));
        self.balance.clone()
    }

    async fn request_airdrop(
        &self,
        account: &Address,
        lamports: u64,
    ) -> Result<String, TransportError> {
        self.record(RpcCall::RequestAirdrop(*account, lamports));
        self.airdrop.clone()
    }

    async fn confirm_transaction(&self, signature: &str) -> Result<Confirmation, TransportError> {
        self.record(RpcCall::Confirm(signature.to_string()));
        self.confirmation.clone()
    }

    async fn latest_blockhash(&self) -> Result<[u8; 32], TransportError> {
        self.record(RpcCall::LatestBlockhash);
        Ok([0xAB; 32])
    }

    async fn send_transaction(&self, wire: &[u8]) -> Result<String, TransportError> {
        self.record(RpcCall::SendTransaction(wire.len()));
        Ok("sent-sig".into())
    }
}

/// Signer returning canned bytes (or an error) and recording its input.
pub struct StubSigner {
    response: Result<Vec<u8>, TransportError>,
    seen: Mutex<Vec<Vec<u8>>>,
}

impl StubSigner {
    pub fn returning(signature: Vec<u8>) -> Self {
        Self {
            response: Ok(signature),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(TransportError::new(message)),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<Vec<u8>> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageSigner for StubSigner {
    async fn sign_message(&self, message: &[u8]) -> Result<Vec<u8>, TransportError> {
        self.seen.lock().unwrap().push(message.to_vec());
        self.response.clone()
    }
}

/// Signer backed by a real Ed25519 key.
pub struct KeySigner(pub SigningKey);

impl KeySigner {
    pub fn from_seed(seed: u8) -> Self {
        Self(SigningKey::from_bytes(&[seed; 32]))
    }

    pub fn address(&self) -> Address {
        Address::new(self.0.verifying_key().to_bytes())
    }
}

#[async_trait]
impl MessageSigner for KeySigner {
    async fn sign_message(&self, message: &[u8]) -> Result<Vec<u8>, TransportError> {
        Ok(self.0.sign(message).to_bytes().to_vec())
    }
}

/// Verifier with a fixed answer.
pub struct StubVerifier(pub bool);

impl SignatureVerifier for StubVerifier {
    fn verify(&self, _signature: &[u8], _message: &[u8], _public_key: &[u8; 32]) -> bool {
        self.0
    }
}

/// Session that hands transfer requests back to the test instead of
/// signing them.
pub struct MockSession {
    account: Option<Address>,
    send_result: Result<String, TransportError>,
    submitted: Mutex<Vec<TransferRequest>>,
}

impl MockSession {
    pub fn connected(account: Address) -> Self {
        Self {
            account: Some(account),
            send_result: Ok("transfer-sig".into()),
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn disconnected() -> Self {
        Self {
            account: None,
            send_result: Ok("transfer-sig".into()),
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn with_send_result(mut self, result: Result<String, TransportError>) -> Self {
        self.send_result = result;
        self
    }

    pub fn submitted(&self) -> Vec<TransferRequest> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl WalletSession for MockSession {
    fn connected_account(&self) -> Option<Address> {
        self.account
    }

    async fn sign_and_send(
        &self,
        request: &TransferRequest,
        _rpc: &dyn LedgerRpc,
    ) -> Result<String, TransportError> {
        self.submitted.lock().unwrap().push(*request);
        self.send_result.clone()
    }
}
