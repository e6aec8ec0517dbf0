use proptest::prelude::*;

use strata_types::{IdFormat, PublicKey, RecordId, CANONICAL_ID_LEN};

proptest! {
    /// PublicKey: textual form always parses back to the same key.
    #[test]
    fn public_key_text_roundtrip(bytes in prop::collection::vec(any::<u8>(), 33)) {
        let key = PublicKey::from_slice(&bytes).unwrap();
        let parsed: PublicKey = key.to_string().parse().unwrap();
        prop_assert_eq!(parsed, key);
    }

    /// PublicKey::from_slice accepts exactly 33 bytes.
    #[test]
    fn public_key_slice_length(len in 0usize..80) {
        let bytes = vec![7u8; len];
        prop_assert_eq!(PublicKey::from_slice(&bytes).is_ok(), len == 33);
    }

    /// Hex ids shorter than canonical are legacy, exactly canonical length is
    /// canonical, anything else has no format.
    #[test]
    fn id_format_by_length(id in "[0-9a-f]{0,80}") {
        let expected = match id.len() {
            0 => None,
            n if n < CANONICAL_ID_LEN => Some(IdFormat::Legacy),
            CANONICAL_ID_LEN => Some(IdFormat::Canonical),
            _ => None,
        };
        prop_assert_eq!(RecordId::new(id.clone()).format(), expected);
    }

    /// A 64-character id with any non-hex character is never canonical.
    #[test]
    fn non_hex_64_chars_is_not_canonical(
        prefix in "[0-9a-f]{0,63}",
        bad in "[g-zG-Z_.]",
    ) {
        let mut id = prefix;
        id.push_str(&bad);
        while id.len() < CANONICAL_ID_LEN {
            id.push('0');
        }
        prop_assert_eq!(IdFormat::of(&id), None);
    }
}
