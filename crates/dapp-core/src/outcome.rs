//! The tagged result every workflow hands back to the UI.

use std::fmt;

use chain_sol::units::lamports_to_sol;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::WorkflowError;

/// Final result of one workflow invocation. Never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Outcome {
    Success { artifact: Artifact },
    Failure { reason: String },
}

/// What a successful workflow produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Artifact {
    /// Base58 signature of a confirmed airdrop or a broadcast transfer.
    TransactionSignature(String),
    Balance(Balance),
    /// Base58 Ed25519 signature over a user message, already verified.
    MessageSignature(String),
}

/// Account balance as of the most recent successful query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub lamports: u64,
    pub sol: Decimal,
}

impl Balance {
    pub fn from_lamports(lamports: u64) -> Self {
        Self {
            lamports,
            sol: lamports_to_sol(lamports),
        }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .sol
            .round_dp_with_strategy(6, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{rounded:.6} SOL")
    }
}

impl Outcome {
    pub fn success(artifact: Artifact) -> Self {
        Outcome::Success { artifact }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Outcome::Failure {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn artifact(&self) -> Option<&Artifact> {
        match self {
            Outcome::Success { artifact } => Some(artifact),
            Outcome::Failure { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { reason } => Some(reason),
        }
    }
}

impl From<Result<Artifact, WorkflowError>> for Outcome {
    fn from(result: Result<Artifact, WorkflowError>) -> Self {
        match result {
            Ok(artifact) => Outcome::success(artifact),
            Err(err) => Outcome::failure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn error_becomes_failure_with_display_text() {
        let outcome = Outcome::from(Err(WorkflowError::from(ValidationError::NotConnected)));
        assert_eq!(outcome, Outcome::failure("connect wallet first"));
        assert_eq!(outcome.reason(), Some("connect wallet first"));
        assert!(outcome.artifact().is_none());
    }

    #[test]
    fn artifact_becomes_success() {
        let outcome = Outcome::from(Ok(Artifact::TransactionSignature("5xSig".into())));
        assert!(outcome.is_success());
        assert_eq!(
            outcome.artifact(),
            Some(&Artifact::TransactionSignature("5xSig".into()))
        );
        assert!(outcome.reason().is_none());
    }

    #[test]
    fn balance_renders_six_places() {
        assert_eq!(Balance::from_lamports(2_500_000_000).to_string(), "2.500000 SOL");
        assert_eq!(Balance::from_lamports(0).to_string(), "0.000000 SOL");
    }

    #[test]
    fn balance_rounds_to_six_places() {
        assert_eq!(Balance::from_lamports(1_234_567_890).to_string(), "1.234568 SOL");
        assert_eq!(Balance::from_lamports(999_999_999).to_string(), "1.000000 SOL");
        assert_eq!(Balance::from_lamports(1_000_000_500).to_string(), "1.000001 SOL");
        assert_eq!(Balance::from_lamports(1_000_000_499).to_string(), "1.000000 SOL");
    }

    #[test]
    fn outcome_serializes_tagged() {
        let json = serde_json::to_value(Outcome::failure("signature invalid")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "status": "failure", "reason": "signature invalid" })
        );

        let json =
            serde_json::to_value(Outcome::success(Artifact::MessageSignature("abc".into())))
                .unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["artifact"]["kind"], "messageSignature");
        assert_eq!(json["artifact"]["value"], "abc");
    }
}
