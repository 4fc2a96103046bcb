use rust_decimal::Decimal;
use thiserror::Error;

/// Input rejected before any collaborator is called.
///
/// The `Display` text is the reason shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("connect wallet first")]
    NotConnected,

    #[error("enter a receiver address")]
    MissingDestination,

    #[error("invalid receiver address")]
    InvalidDestination,

    #[error("enter a valid amount")]
    InvalidAmount,

    #[error("amount has more than {decimals} decimal places")]
    ExcessPrecision { decimals: u32 },

    #[error("maximum {ceiling} per request")]
    AboveAirdropCeiling { ceiling: Decimal },

    #[error("airdrops are not available on {cluster}")]
    AirdropUnavailable { cluster: String },

    #[error("wallet does not support message signing")]
    SigningUnsupported,

    #[error("enter a message to sign")]
    EmptyMessage,
}

/// Failure reported by an external collaborator (RPC node, faucet, wallet).
///
/// The message is passed through verbatim; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Everything that can stop a workflow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The signer returned bytes that do not verify against the account.
    #[error("signature invalid")]
    Integrity,
}

impl WorkflowError {
    /// Short category name used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            WorkflowError::Validation(_) => "validation",
            WorkflowError::Transport(_) => "transport",
            WorkflowError::Integrity => "integrity",
        }
    }
}

/// Configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid RPC url: {0}")]
    Url(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_reasons_are_user_facing() {
        assert_eq!(ValidationError::NotConnected.to_string(), "connect wallet first");
        assert_eq!(
            ValidationError::InvalidDestination.to_string(),
            "invalid receiver address"
        );
        assert_eq!(
            ValidationError::AboveAirdropCeiling {
                ceiling: Decimal::from(5)
            }
            .to_string(),
            "maximum 5 per request"
        );
        assert_eq!(
            ValidationError::ExcessPrecision { decimals: 9 }.to_string(),
            "amount has more than 9 decimal places"
        );
    }

    #[test]
    fn transport_error_is_verbatim() {
        let err = TransportError::new("429 Too Many Requests: airdrop limit reached");
        assert_eq!(err.to_string(), "429 Too Many Requests: airdrop limit reached");
        assert_eq!(err.message(), "429 Too Many Requests: airdrop limit reached");
    }

    #[test]
    fn workflow_error_is_transparent() {
        let err: WorkflowError = ValidationError::EmptyMessage.into();
        assert_eq!(err.to_string(), "enter a message to sign");
        assert_eq!(err.kind(), "validation");

        let err: WorkflowError = TransportError::new("User rejected the request.").into();
        assert_eq!(err.to_string(), "User rejected the request.");
        assert_eq!(err.kind(), "transport");

        assert_eq!(WorkflowError::Integrity.to_string(), "signature invalid");
    }
}
