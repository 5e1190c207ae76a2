//! Provide Types and Data about the LayerZero V2 endpoints the OFT tasks talk to.
//!
//! Endpoint IDs are `u32`s. The ones listed here have names; every other ID round-trips through
//! [`EndpointId::Unknown`] so callers never lose the value they were given.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid endpoint id: {0}")]
pub struct InvalidEndpointError(String);

/// V2 mainnet endpoint IDs live in `30000..40000`, testnets in `40000..50000`.
const TESTNET_RANGE: std::ops::Range<u32> = 40_000..50_000;

macro_rules! endpoints {
    ($($(#[$doc:meta])* $variant:ident = $id:literal => $name:literal,)*) => {
        /// A LayerZero V2 endpoint identifier.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum EndpointId {
            $($(#[$doc])* $variant,)*
            Unknown(u32),
        }

        impl From<u32> for EndpointId {
            fn from(other: u32) -> EndpointId {
                match other {
                    $($id => EndpointId::$variant,)*
                    other => EndpointId::Unknown(other),
                }
            }
        }

        impl From<EndpointId> for u32 {
            fn from(other: EndpointId) -> u32 {
                match other {
                    $(EndpointId::$variant => $id,)*
                    EndpointId::Unknown(v) => v,
                }
            }
        }

        impl EndpointId {
            /// Canonical lowercase name, `None` for unknown IDs.
            pub fn name(&self) -> Option<&'static str> {
                match self {
                    $(EndpointId::$variant => Some($name),)*
                    EndpointId::Unknown(_) => None,
                }
            }

            fn from_name(s: &str) -> Option<EndpointId> {
                $(
                    if s.eq_ignore_ascii_case($name)
                        || s.eq_ignore_ascii_case(stringify!($variant))
                        || s.replace('_', "-").eq_ignore_ascii_case($name)
                    {
                        return Some(EndpointId::$variant);
                    }
                )*
                None
            }
        }
    };
}

endpoints! {
    EthereumMainnet = 30101 => "ethereum-mainnet",
    BscMainnet = 30102 => "bsc-mainnet",
    AvalancheMainnet = 30106 => "avalanche-mainnet",
    PolygonMainnet = 30109 => "polygon-mainnet",
    ArbitrumMainnet = 30110 => "arbitrum-mainnet",
    OptimismMainnet = 30111 => "optimism-mainnet",
    /// Solana mainnet-beta.
    SolanaMainnet = 30168 => "solana-mainnet",
    BaseMainnet = 30184 => "base-mainnet",
    BscTestnet = 40102 => "bsc-testnet",
    FujiTestnet = 40106 => "fuji-testnet",
    SepoliaTestnet = 40161 => "sepolia-testnet",
    /// Solana devnet. LayerZero calls it the Solana testnet.
    SolanaTestnet = 40168 => "solana-testnet",
    ArbitrumSepoliaTestnet = 40231 => "arbitrum-sepolia-testnet",
    OptimismSepoliaTestnet = 40232 => "optimism-sepolia-testnet",
    BaseSepoliaTestnet = 40245 => "base-sepolia-testnet",
    AmoyTestnet = 40267 => "amoy-testnet",
}

impl EndpointId {
    pub fn id(&self) -> u32 {
        u32::from(*self)
    }

    pub fn is_solana(&self) -> bool {
        matches!(self, EndpointId::SolanaMainnet | EndpointId::SolanaTestnet)
    }

    pub fn is_testnet(&self) -> bool {
        TESTNET_RANGE.contains(&self.id())
    }
}

impl fmt::Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.id()),
        }
    }
}

/// Accepts a decimal ID (`40168`), a canonical name (`solana-testnet`), the variant name
/// (`SolanaTestnet`) or the upper snake case form (`SOLANA_TESTNET`).
impl FromStr for EndpointId {
    type Err = InvalidEndpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<u32>() {
            return Ok(EndpointId::from(id));
        }

        EndpointId::from_name(s).ok_or_else(|| InvalidEndpointError(s.into()))
    }
}

impl Serialize for EndpointId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32((*self).into())
    }
}

impl<'de> Deserialize<'de> for EndpointId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        <u32 as Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn isomorphic_from() {
        for i in 0u32..=60_000 {
            assert_eq!(i, u32::from(EndpointId::from(i)));
        }
        assert_eq!(u32::MAX, u32::from(EndpointId::from(u32::MAX)));
    }

    #[test]
    fn isomorphic_display() {
        for i in 29_000u32..=51_000 {
            let e = EndpointId::from(i);
            assert_eq!(e, e.to_string().parse().unwrap());
        }
    }

    #[test]
    fn name_forms() {
        for s in ["solana-testnet", "SolanaTestnet", "SOLANA_TESTNET", "40168"] {
            assert_eq!(EndpointId::SolanaTestnet, s.parse().unwrap());
        }
        assert!("solana-localnet".parse::<EndpointId>().is_err());
        assert!("".parse::<EndpointId>().is_err());
    }

    #[test]
    fn network_flags() {
        assert!(EndpointId::SolanaTestnet.is_testnet());
        assert!(EndpointId::SolanaTestnet.is_solana());
        assert!(!EndpointId::SolanaMainnet.is_testnet());
        assert!(EndpointId::SepoliaTestnet.is_testnet());
        assert!(!EndpointId::SepoliaTestnet.is_solana());
        assert!(!EndpointId::Unknown(30_999).is_testnet());
    }

    #[test]
    fn serde_as_number() {
        let json = serde_json::to_string(&EndpointId::SepoliaTestnet).unwrap();
        assert_eq!("40161", json);
        let back: EndpointId = serde_json::from_str("40161").unwrap();
        assert_eq!(EndpointId::SepoliaTestnet, back);
    }
}
