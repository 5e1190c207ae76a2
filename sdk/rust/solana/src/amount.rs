use crate::OftError;

/// Convert a decimal string such as `"12.5"` into base units of a mint with `decimals` decimals.
///
/// Trailing zeroes in the fraction are ignored before the precision check, so `"1.50"` is valid
/// for a mint with one decimal. Signs, exponents and thousands separators are rejected.
pub fn parse_decimal_to_units(amount: &str, decimals: u8) -> Result<u64, OftError> {
    let s = amount.trim();
    let invalid = || OftError::InvalidAmount(amount.into());

    let (whole, fraction) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let fraction = fraction.trim_end_matches('0');
    if fraction.len() > usize::from(decimals) {
        return Err(OftError::TooManyDecimals {
            amount: amount.into(),
            decimals,
        });
    }

    let overflow = || OftError::AmountOverflow(amount.into());
    let scale = 10u128
        .checked_pow(u32::from(decimals))
        .ok_or_else(overflow)?;

    let whole = match whole.trim_start_matches('0') {
        "" => 0,
        w => w.parse::<u128>().map_err(|_| overflow())?,
    };
    let fraction = match fraction {
        "" => 0,
        f => {
            let pad = 10u128.pow(u32::from(decimals) - f.len() as u32);
            f.parse::<u128>().map_err(|_| overflow())? * pad
        }
    };

    let units = whole
        .checked_mul(scale)
        .and_then(|w| w.checked_add(fraction))
        .ok_or_else(overflow)?;
    u64::try_from(units).map_err(|_| overflow())
}
