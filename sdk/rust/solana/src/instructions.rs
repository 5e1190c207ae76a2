//! Functions for creating OFT program instructions.

mod set_peer_config;

pub use set_peer_config::{
    set_peer_config,
    PeerConfigParam,
    RateLimitParams,
    SetPeerConfigParams,
};
