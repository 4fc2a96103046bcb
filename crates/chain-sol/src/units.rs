//! SOL <-> lamport conversion.
//!
//! Amounts are handled as [`Decimal`] so that user input like `"2.5"`
//! converts to exactly `2_500_000_000` lamports. Floating point never
//! enters the conversion.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::SolError;

/// Lamports in one SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Number of fractional digits a SOL amount can carry.
pub const SOL_DECIMALS: u32 = 9;

/// Convert a SOL amount to lamports without loss.
///
/// Fails if the amount is negative, carries more than [`SOL_DECIMALS`]
/// fractional digits, or does not fit in a `u64`. Zero converts to zero;
/// rejecting it is a policy decision left to the caller.
pub fn sol_to_lamports(sol: Decimal) -> Result<u64, SolError> {
    if sol.is_sign_negative() && !sol.is_zero() {
        return Err(SolError::InvalidAmount(format!("{sol} is negative")));
    }

    let lamports = sol
        .checked_mul(Decimal::from(LAMPORTS_PER_SOL))
        .ok_or_else(|| SolError::InvalidAmount(format!("{sol} SOL is out of range")))?;

    if !lamports.fract().is_zero() {
        return Err(SolError::InvalidAmount(format!(
            "{sol} has more than {SOL_DECIMALS} decimal places"
        )));
    }

    lamports
        .to_u64()
        .ok_or_else(|| SolError::InvalidAmount(format!("{sol} SOL is out of range")))
}

/// Convert lamports to SOL. Always exact.
pub fn lamports_to_sol(lamports: u64) -> Decimal {
    Decimal::from_i128_with_scale(i128::from(lamports), SOL_DECIMALS)
}
