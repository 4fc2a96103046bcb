//! [`LedgerRpc`] over Solana JSON-RPC 2.0.
//!
//! ## Error Handling
//!
//! Node-side JSON-RPC error objects become [`RpcClientError::Rpc`], whose
//! `Display` is the node's message and nothing else. Faucet rate limits
//! and preflight failures therefore reach the user exactly as the node
//! worded them.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chain_sol::transaction::blockhash_from_str;
use chain_sol::Address;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use url::Url;

use crate::config::{Commitment, Config};
use crate::error::{ConfigError, TransportError};
use crate::rpc::{Confirmation, LedgerRpc};

/// Errors that can occur while talking to a Solana RPC node.
#[derive(Debug, thiserror::Error)]
pub enum RpcClientError {
    #[error("HTTP error: {context}: {source}")]
    Http {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected HTTP status {status}: {context}: {body}")]
    HttpStatus {
        context: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("Failed to deserialize JSON: {context}: {source}")]
    JsonDeserialization {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// JSON-RPC error object returned by the node.
    #[error("{message}")]
    Rpc { code: i64, message: String },

    #[error("{context}: response carried neither result nor error")]
    MissingResult { context: &'static str },

    #[error("{context}: {reason}")]
    InvalidResponse { context: &'static str, reason: String },
}

impl From<RpcClientError> for TransportError {
    fn from(err: RpcClientError) -> Self {
        TransportError::new(err.to_string())
    }
}

#[derive(Serialize)]
struct RpcRequest<'a, P> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: P,
}

#[derive(Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// `{ context, value }` wrapper used by most read methods.
#[derive(Deserialize)]
struct WithContext<T> {
    value: T,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LatestBlockhash {
    blockhash: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignatureStatus {
    err: Option<Value>,
    confirmation_status: Option<Commitment>,
}

/// A JSON-RPC client for a single Solana endpoint.
#[derive(Debug)]
pub struct JsonRpcClient {
    url: Url,
    client: Client,
    commitment: Commitment,
    timeout: Option<Duration>,
    confirm_poll_interval: Duration,
    confirm_max_attempts: u32,
    next_id: AtomicU64,
}

impl JsonRpcClient {
    /// Client for `url` with default commitment and polling.
    pub fn new(url: Url) -> Self {
        let defaults = crate::config::RpcConfig::default();
        Self {
            url,
            client: Client::new(),
            commitment: defaults.commitment,
            timeout: defaults.timeout(),
            confirm_poll_interval: defaults.confirm_poll_interval(),
            confirm_max_attempts: defaults.confirm_max_attempts,
            next_id: AtomicU64::new(1),
        }
    }

    /// Client for the configured cluster (or explicit URL).
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let rpc = &config.rpc;
        Ok(Self::new(config.rpc_url()?)
            .with_commitment(rpc.commitment)
            .with_confirm_polling(rpc.confirm_poll_interval(), rpc.confirm_max_attempts)
            .with_optional_timeout(rpc.timeout()))
    }

    #[must_use]
    pub fn with_commitment(mut self, commitment: Commitment) -> Self {
        self.commitment = commitment;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn with_optional_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// How often and how many times `getSignatureStatuses` is polled while
    /// confirming.
    #[must_use]
    pub fn with_confirm_polling(mut self, interval: Duration, max_attempts: u32) -> Self {
        self.confirm_poll_interval = interval;
        self.confirm_max_attempts = max_attempts.max(1);
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn commitment(&self) -> Commitment {
        self.commitment
    }

    /// `getBalance`, in lamports.
    pub async fn get_balance(&self, account: &Address) -> Result<u64, RpcClientError> {
        let response: WithContext<u64> = self
            .call(
                "getBalance",
                json!([account.to_string(), { "commitment": self.commitment.as_str() }]),
            )
            .await?;
        Ok(response.value)
    }

    /// `requestAirdrop`; returns the airdrop transaction signature.
    pub async fn request_airdrop(
        &self,
        account: &Address,
        lamports: u64,
    ) -> Result<String, RpcClientError> {
        self.call(
            "requestAirdrop",
            json!([account.to_string(), lamports, { "commitment": self.commitment.as_str() }]),
        )
        .await
    }

    /// `getLatestBlockhash`, decoded to raw bytes.
    pub async fn latest_blockhash(&self) -> Result<[u8; 32], RpcClientError> {
        let response: WithContext<LatestBlockhash> = self
            .call(
                "getLatestBlockhash",
                json!([{ "commitment": self.commitment.as_str() }]),
            )
            .await?;
        blockhash_from_str(&response.value.blockhash).map_err(|e| {
            RpcClientError::InvalidResponse {
                context: "getLatestBlockhash",
                reason: e.to_string(),
            }
        })
    }

    /// `sendTransaction` with base64 wire encoding.
    pub async fn send_transaction(&self, wire: &[u8]) -> Result<String, RpcClientError> {
        self.call(
            "sendTransaction",
            json!([
                BASE64.encode(wire),
                { "encoding": "base64", "preflightCommitment": self.commitment.as_str() }
            ]),
        )
        .await
    }

    /// Poll `getSignatureStatuses` until the signature reaches the client's
    /// commitment, reports an error, or the attempt budget runs out.
    pub async fn confirm_transaction(
        &self,
        signature: &str,
    ) -> Result<Confirmation, RpcClientError> {
        for attempt in 1..=self.confirm_max_attempts {
            match self.signature_status(signature).await? {
                Some(SignatureStatus { err: Some(err), .. }) => {
                    return Ok(Confirmation::Failed(format!(
                        "transaction {signature} failed: {err}"
                    )));
                }
                Some(SignatureStatus {
                    confirmation_status: Some(status),
                    ..
                }) if status >= self.commitment => {
                    tracing::debug!(%signature, attempt, status = status.as_str(), "transaction confirmed");
                    return Ok(Confirmation::Confirmed);
                }
                _ => {}
            }
            if attempt < self.confirm_max_attempts {
                tokio::time::sleep(self.confirm_poll_interval).await;
            }
        }

        Ok(Confirmation::Failed(format!(
            "transaction {signature} was not confirmed after {} attempts",
            self.confirm_max_attempts
        )))
    }

    async fn signature_status(
        &self,
        signature: &str,
    ) -> Result<Option<SignatureStatus>, RpcClientError> {
        let response: WithContext<Vec<Option<SignatureStatus>>> = self
            .call("getSignatureStatuses", json!([[signature]]))
            .await?;
        Ok(response.value.into_iter().next().flatten())
    }

    /// Send one JSON-RPC request and unwrap its `result`.
    async fn call<P, R>(&self, method: &'static str, params: P) -> Result<R, RpcClientError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(method, id, url = %self.url, "rpc request");

        let body = RpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };
        let mut req = self.client.post(self.url.clone()).json(&body);
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }
        let http_response = req
            .send()
            .await
            .map_err(|e| RpcClientError::Http {
                context: method,
                source: e,
            })?;

        let status = http_response.status();
        if !status.is_success() {
            let body = http_response
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
            return Err(RpcClientError::HttpStatus {
                context: method,
                status,
                body,
            });
        }

        let response = http_response
            .json::<RpcResponse<R>>()
            .await
            .map_err(|e| RpcClientError::JsonDeserialization {
                context: method,
                source: e,
            })?;

        match response {
            RpcResponse {
                error: Some(error), ..
            } => {
                tracing::warn!(method, id, code = error.code, message = %error.message, "rpc error");
                Err(RpcClientError::Rpc {
                    code: error.code,
                    message: error.message,
                })
            }
            RpcResponse {
                result: Some(result),
                ..
            } => Ok(result),
            _ => Err(RpcClientError::MissingResult { context: method }),
        }
    }
}

#[async_trait]
impl LedgerRpc for JsonRpcClient {
    async fn get_balance(&self, account: &Address) -> Result<u64, TransportError> {
        Ok(JsonRpcClient::get_balance(self, account).await?)
    }

    async fn request_airdrop(
        &self,
        account: &Address,
        lamports: u64,
    ) -> Result<String, TransportError> {
        Ok(JsonRpcClient::request_airdrop(self, account, lamports).await?)
    }

    async fn confirm_transaction(&self, signature: &str) -> Result<Confirmation, TransportError> {
        Ok(JsonRpcClient::confirm_transaction(self, signature).await?)
    }

    async fn latest_blockhash(&self) -> Result<[u8; 32], TransportError> {
        Ok(JsonRpcClient::latest_blockhash(self).await?)
    }

    async fn send_transaction(&self, wire: &[u8]) -> Result<String, TransportError> {
        Ok(JsonRpcClient::send_transaction(self, wire).await?)
    }
}
