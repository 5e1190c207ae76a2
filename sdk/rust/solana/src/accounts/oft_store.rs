//! The store account of an OFT deployment.

use {
    super::Account,
    crate::{
        anchor_discriminator,
        deserialize_with_discriminator,
        DataDiscriminator,
        OftError,
    },
    borsh::{
        BorshDeserialize,
        BorshSerialize,
    },
    solana_program::pubkey::Pubkey,
};

pub const OFT_SEED: &[u8] = b"OFT";

const OFT_STORE_DISCRIMINATOR: [u8; 8] = anchor_discriminator("account", "OFTStore");

#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum OftType {
    Native,
    Adapter,
}

/// Leading fields of `OFTStore`. Later program versions append pauser and unpauser keys, which
/// this client does not read.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct OftStore {
    pub oft_type:         OftType,
    pub ld2sd_rate:       u64,
    pub token_mint:       Pubkey,
    pub token_escrow:     Pubkey,
    pub endpoint_program: Pubkey,
    pub bump:             u8,
    pub tvl_ld:           u64,
    pub admin:            Pubkey,
    pub default_fee_bps:  u16,
    pub paused:           bool,
}

impl DataDiscriminator for OftStore {
    const DISCRIMINATOR: &'static [u8] = &OFT_STORE_DISCRIMINATOR;
}

impl Account for OftStore {
    /// The token escrow the store was created for.
    type Seeds = Pubkey;
    type Output = (Pubkey, u8);

    fn key(program_id: &Pubkey, token_escrow: Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[OFT_SEED, token_escrow.as_ref()], program_id)
    }

    fn from_account_data(data: &[u8]) -> Result<Self, OftError> {
        if !data.starts_with(Self::DISCRIMINATOR) {
            return Err(OftError::InvalidDiscriminator("OFTStore"));
        }
        deserialize_with_discriminator(data).map_err(|_| OftError::DeserializeFailed("OFTStore"))
    }
}
