//! Devnet/testnet faucet requests.

use chain_sol::Address;

use crate::config::Config;
use crate::error::{TransportError, ValidationError, WorkflowError};
use crate::outcome::{Artifact, Outcome};
use crate::request::AirdropRequest;
use crate::rpc::{Confirmation, LedgerRpc};
use crate::validate::{parse_airdrop_amount, require_account, to_lamports};

/// Request `amount_text` SOL from the cluster faucet and wait for the
/// airdrop to confirm.
///
/// Rejects before any network call when no wallet is connected, the amount
/// is not a positive number, the amount exceeds
/// [`Config::airdrop_ceiling_sol`], or the cluster has no faucet. Faucet
/// and confirmation failures are reported verbatim.
pub async fn request_airdrop<R>(
    rpc: &R,
    account: Option<&Address>,
    amount_text: &str,
    config: &Config,
) -> Outcome
where
    R: LedgerRpc + ?Sized,
{
    let result = try_request_airdrop(rpc, account, amount_text, config).await;
    if let Err(err) = &result {
        tracing::warn!(kind = err.kind(), reason = %err, "airdrop failed");
    }
    result.into()
}

async fn try_request_airdrop<R>(
    rpc: &R,
    account: Option<&Address>,
    amount_text: &str,
    config: &Config,
) -> Result<Artifact, WorkflowError>
where
    R: LedgerRpc + ?Sized,
{
    let request = build_request(account, amount_text, config)?;
    tracing::debug!(account = %request.account, lamports = request.lamports, "requesting airdrop");

    let signature = rpc.request_airdrop(&request.account, request.lamports).await?;
    match rpc.confirm_transaction(&signature).await? {
        Confirmation::Confirmed => {
            tracing::info!(%signature, lamports = request.lamports, "airdrop confirmed");
            Ok(Artifact::TransactionSignature(signature))
        }
        Confirmation::Failed(reason) => Err(TransportError::new(reason).into()),
    }
}

fn build_request(
    account: Option<&Address>,
    amount_text: &str,
    config: &Config,
) -> Result<AirdropRequest, ValidationError> {
    let account = require_account(account)?;
    let amount = parse_airdrop_amount(amount_text, config.airdrop_ceiling_sol)?;
    if !config.cluster.supports_airdrop() {
        return Err(ValidationError::AirdropUnavailable {
            cluster: config.cluster.to_string(),
        });
    }
    Ok(AirdropRequest {
        account,
        lamports: to_lamports(amount)?,
    })
}
