use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OftError {
    // Address Errors
    #[error("address is {0} bytes; a peer address is at most 32")]
    InvalidAddressLength(usize),
    #[error("address {0:?} is neither hex nor base58")]
    InvalidAddressEncoding(String),

    // Amount Errors
    #[error("amount {0:?} is not a non-negative decimal number")]
    InvalidAmount(String),
    #[error("amount {amount:?} has more than {decimals} fractional digits")]
    TooManyDecimals { amount: String, decimals: u8 },
    #[error("amount {0:?} does not fit in a u64 of base units")]
    AmountOverflow(String),

    // Account Errors
    #[error("account data does not start with the {0} discriminator")]
    InvalidDiscriminator(&'static str),
    #[error("failed to deserialize {0} account data")]
    DeserializeFailed(&'static str),
}
