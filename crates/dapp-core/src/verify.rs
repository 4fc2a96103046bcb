//! Signature verification primitive.

use chain_sol::signature::verify_message_signature;

/// Checks a detached signature over `message` against `public_key`.
pub trait SignatureVerifier: Send + Sync {
    fn verify(&self, signature: &[u8], message: &[u8], public_key: &[u8; 32]) -> bool;
}

/// Ed25519, as used by every Solana wallet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Verifier;

impl SignatureVerifier for Ed25519Verifier {
    fn verify(&self, signature: &[u8], message: &[u8], public_key: &[u8; 32]) -> bool {
        verify_message_signature(signature, message, public_key)
    }
}
