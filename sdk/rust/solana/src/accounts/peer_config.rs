//! Per-remote-endpoint configuration of an OFT store.

use {
    super::Account,
    crate::{
        anchor_discriminator,
        deserialize_with_discriminator,
        DataDiscriminator,
        EndpointId,
        OftError,
        PeerAddress,
    },
    borsh::{
        BorshDeserialize,
        BorshSerialize,
    },
    serde::Serialize,
    solana_program::pubkey::Pubkey,
};

pub const PEER_SEED: &[u8] = b"Peer";

const PEER_CONFIG_DISCRIMINATOR: [u8; 8] = anchor_discriminator("account", "PeerConfig");

#[derive(Debug, Default, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize)]
pub struct EnforcedOptions {
    #[serde(with = "hex_bytes")]
    pub send:          Vec<u8>,
    #[serde(with = "hex_bytes")]
    pub send_and_call: Vec<u8>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize)]
pub struct RateLimiter {
    pub capacity:          u64,
    pub tokens:            u64,
    pub refill_per_second: u64,
    pub last_refill_time:  u64,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize)]
pub struct PeerConfig {
    /// The remote OFT, left zero padded to 32 bytes.
    #[serde(serialize_with = "peer_address_hex")]
    pub peer_address:          [u8; 32],
    pub enforced_options:      EnforcedOptions,
    pub outbound_rate_limiter: Option<RateLimiter>,
    pub inbound_rate_limiter:  Option<RateLimiter>,
    /// Overrides the store's `default_fee_bps` when set.
    pub fee_bps:               Option<u16>,
    pub bump:                  u8,
}

impl PeerConfig {
    pub fn peer(&self) -> PeerAddress {
        PeerAddress(self.peer_address)
    }
}

impl DataDiscriminator for PeerConfig {
    const DISCRIMINATOR: &'static [u8] = &PEER_CONFIG_DISCRIMINATOR;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeerConfigSeeds {
    pub oft_store:  Pubkey,
    pub remote_eid: EndpointId,
}

impl Account for PeerConfig {
    type Seeds = PeerConfigSeeds;
    type Output = (Pubkey, u8);

    fn key(program_id: &Pubkey, seeds: Self::Seeds) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                PEER_SEED,
                seeds.oft_store.as_ref(),
                &seeds.remote_eid.id().to_be_bytes(),
            ],
            program_id,
        )
    }

    fn from_account_data(data: &[u8]) -> Result<Self, OftError> {
        if !data.starts_with(Self::DISCRIMINATOR) {
            return Err(OftError::InvalidDiscriminator("PeerConfig"));
        }
        deserialize_with_discriminator(data).map_err(|_| OftError::DeserializeFailed("PeerConfig"))
    }
}

fn peer_address_hex<S: serde::Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
    PeerAddress(*bytes).serialize(s)
}

mod hex_bytes {
    pub fn serialize<T, S>(bytes: T, s: S) -> Result<S::Ok, S::Error>
    where
        T: AsRef<[u8]>,
        S: serde::Serializer,
    {
        s.serialize_str(&hex::encode(bytes))
    }
}
