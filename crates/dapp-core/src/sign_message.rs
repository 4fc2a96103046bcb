//! Off-chain message signing with self-verification.
//!
//! The wallet's signature is checked against the message and the connected
//! account before it is shown. A signer that returns bytes which do not
//! verify produces `"signature invalid"`, never a success.

use chain_sol::signature::encode_signature;
use chain_sol::Address;

use crate::config::Config;
use crate::error::{ValidationError, WorkflowError};
use crate::outcome::{Artifact, Outcome};
use crate::session::MessageSigner;
use crate::validate::{require_account, require_message};
use crate::verify::SignatureVerifier;

/// Sign `message_text` with the wallet's signing capability and return the
/// Base58 signature.
pub async fn sign_message<V>(
    account: Option<&Address>,
    signer: Option<&dyn MessageSigner>,
    verifier: &V,
    message_text: &str,
    config: &Config,
) -> Outcome
where
    V: SignatureVerifier + ?Sized,
{
    let result = try_sign_message(account, signer, verifier, message_text, config).await;
    if let Err(err) = &result {
        tracing::warn!(kind = err.kind(), reason = %err, "message signing failed");
    }
    result.into()
}

async fn try_sign_message<V>(
    account: Option<&Address>,
    signer: Option<&dyn MessageSigner>,
    verifier: &V,
    message_text: &str,
    config: &Config,
) -> Result<Artifact, WorkflowError>
where
    V: SignatureVerifier + ?Sized,
{
    let account = require_account(account)?;
    let signer = signer.ok_or(ValidationError::SigningUnsupported)?;
    let payload = require_message(message_text)?;

    tracing::debug!(%account, bytes = payload.as_bytes().len(), "requesting message signature");
    let signature = signer.sign_message(payload.as_bytes()).await?;

    if config.verify_message_signatures {
        if !verifier.verify(&signature, payload.as_bytes(), account.as_bytes()) {
            tracing::error!(%account, "wallet returned a signature that does not verify");
            return Err(WorkflowError::Integrity);
        }
    } else {
        tracing::warn!("message signature self-verification is disabled");
    }

    let encoded = encode_signature(&signature);
    tracing::info!(%account, signature = %encoded, "message signed");
    Ok(Artifact::MessageSignature(encoded))
}
