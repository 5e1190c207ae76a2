//! Anchor discriminators.
//!
//! Anchor prefixes account data with the first 8 bytes of `sha256("account:<Name>")` and
//! instruction data with the first 8 bytes of `sha256("global:<name>")`.

use {
    borsh::{
        io,
        BorshDeserialize,
    },
    sha2_const_stable::Sha256,
};

pub const DISCRIMINATOR_LEN: usize = 8;

/// Compute the first 8 bytes of SHA256(namespace:name) in a `const fn`.
pub const fn anchor_discriminator(namespace: &str, name: &str) -> [u8; DISCRIMINATOR_LEN] {
    let hash = Sha256::new()
        .update(namespace.as_bytes())
        .update(b":")
        .update(name.as_bytes())
        .finalize();

    [
        hash[0], hash[1], hash[2], hash[3], hash[4], hash[5], hash[6], hash[7],
    ]
}

pub trait DataDiscriminator {
    const DISCRIMINATOR: &'static [u8];
}

/// Check the discriminator, then decode the body. Trailing bytes are ignored because Anchor
/// allocates accounts at their maximum size.
pub fn deserialize_with_discriminator<T: BorshDeserialize + DataDiscriminator>(
    data: &[u8],
) -> io::Result<T> {
    if data.len() < T::DISCRIMINATOR.len() || &data[..T::DISCRIMINATOR.len()] != T::DISCRIMINATOR {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "invalid discriminator",
        ));
    }

    T::deserialize(&mut &data[T::DISCRIMINATOR.len()..])
}

#[cfg(test)]
mod test {
    use {
        super::*,
        borsh::BorshSerialize,
    };

    #[derive(Debug, PartialEq, BorshSerialize, BorshDeserialize)]
    struct Counter {
        count: u64,
    }

    impl DataDiscriminator for Counter {
        const DISCRIMINATOR: &'static [u8] = &[1, 2, 3, 4, 5, 6, 7, 8];
    }

    #[test]
    fn known_anchor_values() {
        // sha256("global:initialize")[..8], the discriminator every Anchor template starts with.
        assert_eq!(
            [175, 175, 109, 31, 13, 152, 155, 237],
            anchor_discriminator("global", "initialize")
        );
    }

    #[test]
    fn namespaces_differ() {
        assert_ne!(
            anchor_discriminator("account", "PeerConfig"),
            anchor_discriminator("global", "PeerConfig")
        );
    }

    #[test]
    fn tolerates_trailing_bytes() {
        let mut data = Counter::DISCRIMINATOR.to_vec();
        data.extend(borsh::to_vec(&Counter { count: 9 }).unwrap());
        data.extend([0u8; 16]);

        let c: Counter = deserialize_with_discriminator(&data).unwrap();
        assert_eq!(Counter { count: 9 }, c);
    }

    #[test]
    fn rejects_wrong_discriminator() {
        let mut data = vec![0u8; 8];
        data.extend(9u64.to_le_bytes());
        assert!(deserialize_with_discriminator::<Counter>(&data).is_err());
        assert!(deserialize_with_discriminator::<Counter>(&[1, 2, 3]).is_err());
    }
}
