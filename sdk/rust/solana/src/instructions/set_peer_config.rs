use {
    crate::{
        accounts::Account,
        anchor_discriminator,
        EndpointId,
        PeerAddress,
        PeerConfig,
        PeerConfigSeeds,
    },
    borsh::{
        BorshDeserialize,
        BorshSerialize,
    },
    solana_program::{
        instruction::{
            AccountMeta,
            Instruction as SolanaInstruction,
        },
        pubkey::Pubkey,
        system_program,
    },
};

const SET_PEER_CONFIG_DISCRIMINATOR: [u8; 8] = anchor_discriminator("global", "set_peer_config");

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct RateLimitParams {
    pub refill_per_second: Option<u64>,
    pub capacity:          Option<u64>,
}

/// One field of a `PeerConfig`. The program updates a single field per instruction.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum PeerConfigParam {
    PeerAddress([u8; 32]),
    FeeBps(Option<u16>),
    EnforcedOptions { send: Vec<u8>, send_and_call: Vec<u8> },
    OutboundRateLimit(Option<RateLimitParams>),
    InboundRateLimit(Option<RateLimitParams>),
}

impl From<PeerAddress> for PeerConfigParam {
    fn from(peer: PeerAddress) -> Self {
        PeerConfigParam::PeerAddress(peer.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct SetPeerConfigParams {
    pub remote_eid: u32,
    pub config:     PeerConfigParam,
}

/// Build `set_peer_config`. `admin` must be the store admin; it also pays for the peer account
/// the first time a remote endpoint is configured.
pub fn set_peer_config(
    program_id: Pubkey,
    admin: Pubkey,
    oft_store: Pubkey,
    remote_eid: EndpointId,
    config: PeerConfigParam,
) -> SolanaInstruction {
    let (peer, _) = PeerConfig::key(&program_id, PeerConfigSeeds {
        oft_store,
        remote_eid,
    });

    let params = SetPeerConfigParams {
        remote_eid: remote_eid.id(),
        config,
    };
    let mut data = SET_PEER_CONFIG_DISCRIMINATOR.to_vec();
    params
        .serialize(&mut data)
        .expect("serializing into a Vec cannot fail");

    SolanaInstruction {
        program_id,
        accounts: vec![
            AccountMeta::new(admin, true),
            AccountMeta::new(peer, false),
            AccountMeta::new_readonly(oft_store, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    }
}
