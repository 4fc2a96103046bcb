//! Ed25519 message signatures.
//!
//! Wallets return raw 64-byte Ed25519 signatures for `signMessage`. These
//! helpers check such a signature against the signer's address and move it
//! to and from its Base58 text form.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};

use crate::error::SolError;

/// Length of a raw Ed25519 signature.
pub const SIGNATURE_LEN: usize = 64;

/// Check `signature` over `message` against a 32-byte Ed25519 public key.
///
/// Returns `false` for anything malformed (wrong length, invalid point)
/// as well as for a well-formed signature that does not verify.
pub fn verify_message_signature(signature: &[u8], message: &[u8], public_key: &[u8; 32]) -> bool {
    let Ok(signature) = Signature::from_slice(signature) else {
        return false;
    };
    let Ok(verifying_key) = VerifyingKey::from_bytes(public_key) else {
        return false;
    };
    verifying_key.verify(message, &signature).is_ok()
}

/// Encode raw signature bytes as Base58.
pub fn encode_signature(signature: &[u8]) -> String {
    bs58::encode(signature).into_string()
}

/// Decode a Base58 signature string into its 64 raw bytes.
pub fn decode_signature(signature: &str) -> Result<[u8; SIGNATURE_LEN], SolError> {
    let bytes = bs58::decode(signature)
        .into_vec()
        .map_err(|e| SolError::InvalidSignature(format!("base58 decode failed: {e}")))?;

    bytes.try_into().map_err(|v: Vec<u8>| {
        SolError::InvalidSignature(format!("expected {SIGNATURE_LEN} bytes, got {}", v.len()))
    })
}
