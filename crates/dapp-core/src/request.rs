//! Request objects built from validated input.
//!
//! Each is created fresh per user action and dropped once the outcome is
//! rendered.

use chain_sol::transaction::{build_sol_transfer, system_transfer_instruction};
use chain_sol::{Address, SolError, SolInstruction, SolTransaction};

/// Faucet request for the connected account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AirdropRequest {
    pub account: Address,
    pub lamports: u64,
}

/// Native SOL transfer from the connected account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferRequest {
    pub source: Address,
    pub destination: Address,
    pub lamports: u64,
}

impl TransferRequest {
    /// The System Program `Transfer` instruction for this request.
    pub fn instruction(&self) -> SolInstruction {
        system_transfer_instruction(&self.source, &self.destination, self.lamports)
    }

    /// Compile into an unsigned transaction paid for by `source`.
    pub fn compile(&self, recent_blockhash: &[u8; 32]) -> Result<SolTransaction, SolError> {
        build_sol_transfer(&self.source, &self.destination, self.lamports, recent_blockhash)
    }
}

/// UTF-8 bytes of a user message, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagePayload {
    bytes: Vec<u8>,
}

impl MessagePayload {
    pub fn new(text: &str) -> Self {
        Self {
            bytes: text.as_bytes().to_vec(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
