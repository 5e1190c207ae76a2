//! Resolve the RPC endpoint and signing keypair for a task.

use std::{env, time::Duration};

use anyhow::{anyhow, bail, Context, Result};
use oft_supported_endpoints::EndpointId;
use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::{CommitmentConfig, CommitmentLevel},
    signature::{read_keypair_file, Keypair},
};

pub const MAINNET_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";

const RPC_URL_SOLANA: &str = "RPC_URL_SOLANA";
const RPC_URL_SOLANA_TESTNET: &str = "RPC_URL_SOLANA_TESTNET";
const SOLANA_PRIVATE_KEY: &str = "SOLANA_PRIVATE_KEY";
const DEFAULT_KEYPAIR_PATH: &str = "~/.config/solana/id.json";

/// Connection settings shared by every task.
#[derive(Debug, Clone, Default)]
pub struct ConnectionOpts {
    pub rpc_url: Option<String>,
    pub keypair: Option<String>,
    pub commitment: Option<CommitmentLevel>,
    pub rpc_timeout: Option<Duration>,
}

impl ConnectionOpts {
    pub fn commitment_config(&self) -> CommitmentConfig {
        CommitmentConfig {
            commitment: self.commitment.unwrap_or(CommitmentLevel::Confirmed),
        }
    }

    /// `--rpc-url`, then the per-network environment variable, then the public endpoint.
    pub fn rpc_url(&self, eid: EndpointId) -> Result<String> {
        if !eid.is_solana() {
            bail!(
                "{} is not a Solana endpoint; expected solana-mainnet (30168) or solana-testnet (40168)",
                eid
            );
        }
        if let Some(url) = &self.rpc_url {
            return Ok(url.clone());
        }

        let (var, fallback) = if eid.is_testnet() {
            (RPC_URL_SOLANA_TESTNET, DEVNET_RPC_URL)
        } else {
            (RPC_URL_SOLANA, MAINNET_RPC_URL)
        };
        Ok(env::var(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| fallback.to_owned()))
    }

    pub fn rpc_client(&self, eid: EndpointId) -> Result<RpcClient> {
        let url = self.rpc_url(eid)?;
        log::debug!("Using RPC {} for {}", url, eid);
        Ok(match self.rpc_timeout {
            Some(timeout) => {
                RpcClient::new_with_timeout_and_commitment(url, timeout, self.commitment_config())
            }
            None => RpcClient::new_with_commitment(url, self.commitment_config()),
        })
    }

    /// `--keypair` (or `SOLANA_KEYPAIR_PATH`), then a base58 secret in `SOLANA_PRIVATE_KEY`, then
    /// the keypair named in the Solana CLI config, then `~/.config/solana/id.json`.
    pub fn signer(&self) -> Result<Keypair> {
        if let Some(path) = &self.keypair {
            return read_keypair(path);
        }

        if let Ok(secret) = env::var(SOLANA_PRIVATE_KEY) {
            return keypair_from_base58(secret.trim())
                .with_context(|| format!("{SOLANA_PRIVATE_KEY} is not a base58 keypair"));
        }

        let path = (*solana_cli_config::CONFIG_FILE)
            .as_ref()
            .and_then(|file| solana_cli_config::Config::load(file).ok())
            .map(|config| config.keypair_path)
            .unwrap_or_else(|| DEFAULT_KEYPAIR_PATH.to_owned());
        read_keypair(&path)
    }
}

fn read_keypair(path: &str) -> Result<Keypair> {
    let expanded = shellexpand::tilde(path);
    read_keypair_file(&*expanded).map_err(|e| anyhow!("Unable to read keypair {}: {}", path, e))
}

fn keypair_from_base58(secret: &str) -> Result<Keypair> {
    let bytes = bs58::decode(secret).into_vec()?;
    Keypair::from_bytes(&bytes).map_err(|e| anyhow!(e.to_string()))
}
