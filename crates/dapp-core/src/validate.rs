//! Input validation shared by the workflows.
//!
//! Every check runs before any collaborator is touched and returns the
//! specific [`ValidationError`] that becomes the user-facing reason.

use chain_sol::units::{sol_to_lamports, SOL_DECIMALS};
use chain_sol::Address;
use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::request::MessagePayload;

/// The connected account, or `NotConnected`.
pub fn require_account(account: Option<&Address>) -> Result<Address, ValidationError> {
    account.copied().ok_or(ValidationError::NotConnected)
}

/// A non-empty destination that decodes to a 32-byte address.
///
/// Surrounding whitespace is ignored.
pub fn parse_destination(text: &str) -> Result<Address, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::MissingDestination);
    }
    text.parse().map_err(|_| ValidationError::InvalidDestination)
}

/// A strictly positive decimal SOL amount.
///
/// Accepts decimal notation (`"2.5"`, `" 1 "`, `".5"`, `"1e-1"`). Trailing
/// garbage, digit separators and non-numbers are rejected rather than
/// partially parsed.
pub fn parse_amount(text: &str) -> Result<Decimal, ValidationError> {
    let text = text.trim();
    if !text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-' | b'e' | b'E'))
    {
        return Err(ValidationError::InvalidAmount);
    }
    let amount: Decimal = text.parse().map_err(|_| ValidationError::InvalidAmount)?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidAmount);
    }
    Ok(amount)
}

/// Reject amounts above the per-request airdrop ceiling.
pub fn check_airdrop_ceiling(amount: Decimal, ceiling: Decimal) -> Result<(), ValidationError> {
    if amount > ceiling {
        return Err(ValidationError::AboveAirdropCeiling {
            ceiling: ceiling.normalize(),
        });
    }
    Ok(())
}

/// A positive airdrop amount no larger than `ceiling`.
///
/// Plain integers too large to parse at all are over any ceiling and are
/// reported as such.
pub fn parse_airdrop_amount(text: &str, ceiling: Decimal) -> Result<Decimal, ValidationError> {
    let amount = match parse_amount(text) {
        Err(ValidationError::InvalidAmount) if is_oversized_integer(text.trim()) => {
            return Err(ValidationError::AboveAirdropCeiling {
                ceiling: ceiling.normalize(),
            });
        }
        other => other?,
    };
    check_airdrop_ceiling(amount, ceiling)?;
    Ok(amount)
}

fn is_oversized_integer(text: &str) -> bool {
    !text.is_empty()
        && text.bytes().all(|b| b.is_ascii_digit())
        && text.bytes().any(|b| b != b'0')
}

/// Exact lamport value of a validated SOL amount.
pub fn to_lamports(amount: Decimal) -> Result<u64, ValidationError> {
    if amount.normalize().scale() > SOL_DECIMALS {
        return Err(ValidationError::ExcessPrecision {
            decimals: SOL_DECIMALS,
        });
    }
    sol_to_lamports(amount).map_err(|_| ValidationError::InvalidAmount)
}

/// A message with at least one non-whitespace character.
pub fn require_message(text: &str) -> Result<MessagePayload, ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyMessage);
    }
    Ok(MessagePayload::new(text))
}
