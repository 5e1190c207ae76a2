//! Crate providing client-side data types for the LayerZero OFT program on Solana.
//!
//! The OFT program itself is an Anchor program deployed per token. This crate mirrors the pieces
//! an admin client needs to talk to it directly: account layouts with their discriminators, PDA
//! derivation, the `set_peer_config` instruction, and the address and amount normalization the
//! program expects from its callers.

#![deny(warnings)]

mod accounts;
mod address;
mod amount;
mod discriminator;
mod error;

// Instruction builders are namespaced as a module, the way callers read them:
// `instructions::set_peer_config(..)`.
pub mod instructions;

pub use {
    accounts::{
        Account,
        EnforcedOptions,
        OftStore,
        OftType,
        PeerConfig,
        PeerConfigSeeds,
        RateLimiter,
        OFT_SEED,
        PEER_SEED,
    },
    address::{
        pad_address,
        PeerAddress,
        PEER_ADDRESS_LEN,
    },
    amount::parse_decimal_to_units,
    discriminator::{
        anchor_discriminator,
        deserialize_with_discriminator,
        DataDiscriminator,
    },
    error::OftError,
    oft_supported_endpoints::EndpointId,
};
