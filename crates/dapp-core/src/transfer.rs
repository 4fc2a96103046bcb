//! Native SOL transfers signed by the connected wallet.

use chain_sol::Address;

use crate::error::{ValidationError, WorkflowError};
use crate::outcome::{Artifact, Outcome};
use crate::request::TransferRequest;
use crate::rpc::LedgerRpc;
use crate::session::WalletSession;
use crate::validate::{parse_amount, parse_destination, require_account, to_lamports};

/// Send `amount_text` SOL from `account` to `destination_text`.
///
/// Checks run in order (account, non-empty destination, decodable
/// destination, positive amount) and the first failure is returned without
/// building a request. A valid request is handed to the session's
/// sign-and-send exactly once; duplicates are the caller's concern.
pub async fn send_transfer<S, R>(
    session: &S,
    rpc: &R,
    account: Option<&Address>,
    destination_text: &str,
    amount_text: &str,
) -> Outcome
where
    S: WalletSession + ?Sized,
    R: LedgerRpc,
{
    let result = try_send_transfer(session, rpc, account, destination_text, amount_text).await;
    if let Err(err) = &result {
        tracing::warn!(kind = err.kind(), reason = %err, "transfer failed");
    }
    result.into()
}

async fn try_send_transfer<S, R>(
    session: &S,
    rpc: &R,
    account: Option<&Address>,
    destination_text: &str,
    amount_text: &str,
) -> Result<Artifact, WorkflowError>
where
    S: WalletSession + ?Sized,
    R: LedgerRpc,
{
    let request = build_request(account, destination_text, amount_text)?;
    tracing::debug!(
        source = %request.source,
        destination = %request.destination,
        lamports = request.lamports,
        "submitting transfer"
    );

    let signature = session.sign_and_send(&request, rpc).await?;
    tracing::info!(%signature, lamports = request.lamports, "transfer sent");
    Ok(Artifact::TransactionSignature(signature))
}

fn build_request(
    account: Option<&Address>,
    destination_text: &str,
    amount_text: &str,
) -> Result<TransferRequest, ValidationError> {
    let source = require_account(account)?;
    let destination = parse_destination(destination_text)?;
    let amount = parse_amount(amount_text)?;
    Ok(TransferRequest {
        source,
        destination,
        lamports: to_lamports(amount)?,
    })
}
