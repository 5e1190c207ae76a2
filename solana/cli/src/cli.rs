//! CLI options

use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use oft_supported_endpoints::EndpointId;
use solana_sdk::{commitment_config::CommitmentLevel, pubkey::Pubkey};

use crate::{
    config::ConnectionOpts,
    confirm::{ConfirmationPolicy, DEFAULT_POLL_INTERVAL},
    tasks::create_mint_account::DEFAULT_DECIMALS,
};

#[derive(Parser, Debug)]
#[command(
    name = "oft-tasks",
    version,
    about = "Admin tasks for the Solana side of a LayerZero OFT deployment"
)]
pub struct Cli {
    /// Repeat for more output: none is info, -v is debug, -vv and up is trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print the task report as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// RPC URL; defaults to RPC_URL_SOLANA / RPC_URL_SOLANA_TESTNET or the public endpoint
    #[arg(long, global = true)]
    pub rpc_url: Option<String>,

    /// Keypair file paying for and signing transactions
    #[arg(long, global = true, env = "SOLANA_KEYPAIR_PATH")]
    pub keypair: Option<String>,

    /// Commitment used for reads and confirmation: processed, confirmed or finalized
    #[arg(long, global = true, default_value = "confirmed")]
    pub commitment: CommitmentLevel,

    /// Per-request RPC timeout in seconds
    #[arg(long, global = true)]
    pub rpc_timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub action: Action,
}

#[derive(Subcommand, Debug)]
pub enum Action {
    /// Creates a new mint account
    CreateMintAccount {
        /// Solana mainnet (30168) or testnet (40168)
        #[arg(long)]
        eid: EndpointId,
        #[arg(long, default_value_t = DEFAULT_DECIMALS)]
        decimals: u8,
        #[command(flatten)]
        confirm: ConfirmOpts,
    },
    /// Mint a token with a memo
    MintWithMemo {
        /// The mint address of the token
        #[arg(long)]
        mint: Pubkey,
        /// The wallet to mint the tokens to
        #[arg(long)]
        to: Pubkey,
        /// The amount of tokens to mint, in whole tokens
        #[arg(long)]
        amount: String,
        /// The data to include in the memo instruction
        #[arg(long)]
        data: String,
        /// Solana mainnet (30168) or testnet (40168)
        #[arg(long)]
        eid: EndpointId,
        /// The token program ID
        #[arg(long, default_value_t = spl_token::id())]
        token_program: Pubkey,
        /// Create the destination token account if it is missing
        #[arg(long)]
        create_ata: bool,
        #[command(flatten)]
        confirm: ConfirmOpts,
    },
    /// Sets the peer of an OFT store for a remote endpoint
    #[command(alias = "lz:oft:solana:set-peer")]
    SetPeer {
        /// The OFT program id
        #[arg(long)]
        program_id: Pubkey,
        /// Solana mainnet (30168) or testnet (40168)
        #[arg(long)]
        eid: EndpointId,
        /// The peer endpoint ID
        #[arg(long)]
        peer_eid: EndpointId,
        /// The OFTStore account
        #[arg(long)]
        oft_store: Pubkey,
        /// The peer address, hex (EVM) or base58 (Solana)
        #[arg(long)]
        peer_address: String,
        /// Skip submission when the stored peer already matches
        #[arg(long)]
        skip_if_set: bool,
        #[command(flatten)]
        confirm: ConfirmOpts,
    },
    /// Prints the peer config of an OFT store for a remote endpoint
    GetPeer {
        /// The OFT program id
        #[arg(long)]
        program_id: Pubkey,
        /// Solana mainnet (30168) or testnet (40168)
        #[arg(long)]
        eid: EndpointId,
        /// The peer endpoint ID
        #[arg(long)]
        peer_eid: EndpointId,
        /// The OFTStore account
        #[arg(long)]
        oft_store: Pubkey,
    },
}

#[derive(clap::Args, Debug, Clone, Copy)]
pub struct ConfirmOpts {
    /// Fixed wait after submission before polling for confirmation
    #[arg(long, default_value_t = 0)]
    pub settle_delay_secs: u64,
    /// Give up waiting for confirmation after this many seconds
    #[arg(long, default_value_t = 30)]
    pub confirm_timeout_secs: u64,
}

impl Cli {
    pub fn connection_opts(&self) -> ConnectionOpts {
        ConnectionOpts {
            rpc_url: self.rpc_url.clone(),
            keypair: self.keypair.clone(),
            commitment: Some(self.commitment),
            rpc_timeout: self.rpc_timeout_secs.map(Duration::from_secs),
        }
    }

    pub fn confirmation_policy(&self, opts: &ConfirmOpts) -> ConfirmationPolicy {
        ConfirmationPolicy {
            commitment: self.connection_opts().commitment_config(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            timeout: Duration::from_secs(opts.confirm_timeout_secs),
            settle_delay: Duration::from_secs(opts.settle_delay_secs),
        }
    }
}
