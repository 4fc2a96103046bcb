//! Runtime configuration.
//!
//! Every field has a default, so an empty JSON object (or
//! [`Config::default`]) yields a devnet setup with a 5 SOL airdrop ceiling
//! and message-signature self-verification switched on.

use std::fmt;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

/// Largest airdrop accepted per request, in SOL.
pub const DEFAULT_AIRDROP_CEILING_SOL: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Solana cluster the workflows talk to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cluster {
    #[default]
    Devnet,
    Testnet,
    MainnetBeta,
    Localnet,
}

impl Cluster {
    /// Public JSON-RPC endpoint.
    pub fn rpc_url(&self) -> &'static str {
        match self {
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Cluster::Localnet => "http://127.0.0.1:8899",
        }
    }

    /// Whether the cluster runs a faucet behind `requestAirdrop`.
    pub fn supports_airdrop(&self) -> bool {
        !matches!(self, Cluster::MainnetBeta)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
            Cluster::MainnetBeta => "mainnet-beta",
            Cluster::Localnet => "localnet",
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Commitment level used for reads and confirmations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl Commitment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Commitment::Processed => "processed",
            Commitment::Confirmed => "confirmed",
            Commitment::Finalized => "finalized",
        }
    }
}

/// Settings for the bundled JSON-RPC client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RpcConfig {
    /// Overrides the cluster's public endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
    pub commitment: Commitment,
    /// Per-request HTTP timeout. `None` keeps reqwest's default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
    pub confirm_poll_interval_ms: u64,
    pub confirm_max_attempts: u32,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: None,
            commitment: Commitment::default(),
            timeout_ms: None,
            confirm_poll_interval_ms: 500,
            // ~30s at the default interval.
            confirm_max_attempts: 60,
        }
    }
}

impl RpcConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    pub fn confirm_poll_interval(&self) -> Duration {
        Duration::from_millis(self.confirm_poll_interval_ms)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub cluster: Cluster,
    /// Per-request airdrop ceiling in SOL.
    pub airdrop_ceiling_sol: Decimal,
    /// Check wallet message signatures before reporting them.
    pub verify_message_signatures: bool,
    pub rpc: RpcConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cluster: Cluster::default(),
            airdrop_ceiling_sol: DEFAULT_AIRDROP_CEILING_SOL,
            verify_message_signatures: true,
            rpc: RpcConfig::default(),
        }
    }
}

impl Config {
    /// Parse a JSON document; missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Endpoint the RPC client should use.
    pub fn rpc_url(&self) -> Result<Url, ConfigError> {
        match &self.rpc.url {
            Some(url) => Ok(url.clone()),
            None => Ok(Url::parse(self.cluster.rpc_url())?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_devnet() {
        let config = Config::default();
        assert_eq!(config.cluster, Cluster::Devnet);
        assert_eq!(config.airdrop_ceiling_sol, Decimal::from(5));
        assert!(config.verify_message_signatures);
        assert_eq!(config.rpc.commitment, Commitment::Confirmed);
        assert_eq!(
            config.rpc_url().unwrap().as_str(),
            "https://api.devnet.solana.com/"
        );
    }

    #[test]
    fn empty_json_is_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn partial_json_overrides() {
        let config = Config::from_json(
            r#"{
                "cluster": "localnet",
                "airdropCeilingSol": "2.5",
                "rpc": { "url": "http://localhost:9000/", "confirmMaxAttempts": 3 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.cluster, Cluster::Localnet);
        assert_eq!(config.airdrop_ceiling_sol, "2.5".parse::<Decimal>().unwrap());
        assert!(config.verify_message_signatures);
        assert_eq!(config.rpc.confirm_max_attempts, 3);
        assert_eq!(config.rpc.confirm_poll_interval_ms, 500);
        assert_eq!(config.rpc_url().unwrap().as_str(), "http://localhost:9000/");
    }

    #[test]
    fn unknown_cluster_is_rejected() {
        let err = Config::from_json(r#"{ "cluster": "moon" }"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid config JSON"));
    }

    #[test]
    fn only_mainnet_lacks_a_faucet() {
        assert!(Cluster::Devnet.supports_airdrop());
        assert!(Cluster::Testnet.supports_airdrop());
        assert!(Cluster::Localnet.supports_airdrop());
        assert!(!Cluster::MainnetBeta.supports_airdrop());
        assert_eq!(Cluster::MainnetBeta.to_string(), "mainnet-beta");
    }
}
