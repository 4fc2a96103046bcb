//! Solana primitives for the dApp workflows.
//!
//! This crate covers the small slice of Solana the workflows actually touch:
//! Base58 addresses, SOL <-> lamport conversion, the System Program
//! `Transfer` instruction with its legacy message wire format, and Ed25519
//! message-signature checks. There is no `solana-sdk` dependency; the wire
//! format is written by hand on top of `ed25519-dalek` and `bs58`.

pub mod address;
pub mod error;
pub mod signature;
pub mod transaction;
pub mod units;

// Re-export key public types for ergonomic imports.
pub use address::{address_to_bytes, bytes_to_address, validate_address, Address};
pub use error::SolError;
pub use signature::{
    decode_signature, encode_signature, verify_message_signature, SIGNATURE_LEN,
};
pub use transaction::{
    blockhash_from_str, build_sol_transfer, compile_transaction, encode_compact_u16,
    serialize_message, sign_transaction, system_transfer_instruction, CompiledInstruction,
    SignedTransaction, SolAccountMeta, SolInstruction, SolTransaction, SYSTEM_PROGRAM_ID,
};
pub use units::{lamports_to_sol, sol_to_lamports, LAMPORTS_PER_SOL, SOL_DECIMALS};
