//! Balance lookup for the connected account.

use chain_sol::Address;

use crate::error::WorkflowError;
use crate::outcome::{Artifact, Balance, Outcome};
use crate::rpc::LedgerRpc;
use crate::validate::require_account;

/// Query the current balance of `account`.
///
/// A pure read: safe to call again at any time, and each call reflects the
/// ledger as of that call. Without an account nothing is queried.
pub async fn fetch_balance<R>(rpc: &R, account: Option<&Address>) -> Outcome
where
    R: LedgerRpc + ?Sized,
{
    let result = try_fetch_balance(rpc, account).await;
    if let Err(err) = &result {
        tracing::warn!(kind = err.kind(), reason = %err, "balance query failed");
    }
    result.into()
}

async fn try_fetch_balance<R>(rpc: &R, account: Option<&Address>) -> Result<Artifact, WorkflowError>
where
    R: LedgerRpc + ?Sized,
{
    let account = require_account(account)?;
    let lamports = rpc.get_balance(&account).await?;
    let balance = Balance::from_lamports(lamports);
    tracing::debug!(%account, lamports, "balance fetched");
    Ok(Artifact::Balance(balance))
}
