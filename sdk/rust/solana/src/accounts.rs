use {
    crate::OftError,
    solana_program::pubkey::Pubkey,
};

mod oft_store;
mod peer_config;

pub use {
    oft_store::{
        OftStore,
        OftType,
        OFT_SEED,
    },
    peer_config::{
        EnforcedOptions,
        PeerConfig,
        PeerConfigSeeds,
        RateLimiter,
        PEER_SEED,
    },
};

// Account provides helpers for deriving keys and decoding data of OFT program accounts fetched
// over RPC.
pub trait Account: Sized {
    type Seeds;
    type Output;

    fn key(program_id: &Pubkey, seeds: Self::Seeds) -> Self::Output;
    fn from_account_data(data: &[u8]) -> Result<Self, OftError>;
}
