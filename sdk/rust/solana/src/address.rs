//! Chain-agnostic peer addresses.
//!
//! The OFT program stores every remote peer as 32 bytes. Addresses that are shorter, for example
//! 20 byte EVM addresses, are left zero padded to 32.

use {
    crate::OftError,
    serde::{
        Serialize,
        Serializer,
    },
    std::{
        fmt,
        str::FromStr,
    },
};

pub const PEER_ADDRESS_LEN: usize = 32;

// Length range of a base58 encoded 32 byte key.
const SOLANA_KEY_CHARS: std::ops::RangeInclusive<usize> = 32..=44;
const EVM_HEX_CHARS: usize = 40;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PeerAddress(pub [u8; PEER_ADDRESS_LEN]);

impl PeerAddress {
    /// Left pad `bytes` with zeroes to 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, OftError> {
        let l = bytes.len();
        if l > PEER_ADDRESS_LEN {
            return Err(OftError::InvalidAddressLength(l));
        }

        let mut out = [0u8; PEER_ADDRESS_LEN];
        out[PEER_ADDRESS_LEN - l..].copy_from_slice(bytes);
        Ok(PeerAddress(out))
    }

    pub fn to_bytes(self) -> [u8; PEER_ADDRESS_LEN] {
        self.0
    }

    /// Lowercase hex, always 64 characters, no `0x` prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for PeerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "{b:02x}")?;
        }

        Ok(())
    }
}

impl FromStr for PeerAddress {
    type Err = OftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PeerAddress::from_slice(&decode_native(s)?)
    }
}

impl From<[u8; PEER_ADDRESS_LEN]> for PeerAddress {
    fn from(bytes: [u8; PEER_ADDRESS_LEN]) -> Self {
        PeerAddress(bytes)
    }
}

impl Serialize for PeerAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Normalize a chain-native address into the 32 byte hex form the OFT program stores.
///
/// Input with a `0x` prefix is always hex and may have an odd number of digits. Unprefixed input
/// of 32 to 44 characters, other than a bare 40 digit EVM address, is read as base58 when it
/// decodes to exactly 32 bytes; this keeps Solana keys such as `1111..1111` from being taken for
/// hex. Other unprefixed input is hex when it can be, and base58 otherwise.
pub fn pad_address(address: &str) -> Result<String, OftError> {
    address.parse::<PeerAddress>().map(|a| a.to_hex())
}

fn decode_native(address: &str) -> Result<Vec<u8>, OftError> {
    let trimmed = address.trim();
    let (digits, prefixed) = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(rest) => (rest, true),
        None => (trimmed, false),
    };

    if digits.is_empty() {
        // A bare "0x" is an empty hex string; ethers pads it to the zero address.
        return if prefixed {
            Ok(Vec::new())
        } else {
            Err(OftError::InvalidAddressEncoding(address.into()))
        };
    }

    if !prefixed && SOLANA_KEY_CHARS.contains(&digits.len()) && digits.len() != EVM_HEX_CHARS {
        if let Ok(bytes) = bs58::decode(digits).into_vec() {
            if bytes.len() == PEER_ADDRESS_LEN {
                return Ok(bytes);
            }
        }
    }

    if digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return if digits.len() % 2 == 1 {
            hex::decode(format!("0{digits}"))
        } else {
            hex::decode(digits)
        }
        .map_err(|_| OftError::InvalidAddressEncoding(address.into()));
    }

    if prefixed {
        return Err(OftError::InvalidAddressEncoding(address.into()));
    }

    bs58::decode(digits)
        .into_vec()
        .map_err(|_| OftError::InvalidAddressEncoding(address.into()))
}
