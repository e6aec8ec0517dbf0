use proptest::prelude::*;

use strata_transactions::{
    decode_votes, encode_votes, ByteReader, CodecError, Payload, PayloadRegistry,
    TransactionKind, Vote, VoteDirection, VotePayload, MAX_VOTES, VOTE_LEN,
};
use strata_types::PublicKey;

fn arb_vote() -> impl Strategy<Value = Vote> {
    (any::<bool>(), prop::collection::vec(any::<u8>(), 33)).prop_map(|(add, key)| Vote {
        direction: if add {
            VoteDirection::Add
        } else {
            VoteDirection::Remove
        },
        delegate: PublicKey::from_slice(&key).unwrap(),
    })
}

fn arb_votes() -> impl Strategy<Value = Vec<Vote>> {
    prop::collection::vec(arb_vote(), 0..=MAX_VOTES)
}

proptest! {
    /// decode(encode(v)) == v for every representable payload.
    #[test]
    fn votes_roundtrip(votes in arb_votes()) {
        let bytes = encode_votes(&votes).unwrap();
        let decoded = decode_votes(&bytes).unwrap();
        prop_assert_eq!(decoded.votes(), votes.as_slice());
    }

    /// Encoded size is 1 + 34 * count.
    #[test]
    fn encoded_size_law(votes in arb_votes()) {
        let bytes = encode_votes(&votes).unwrap();
        prop_assert_eq!(bytes.len(), 1 + VOTE_LEN * votes.len());
        prop_assert_eq!(VotePayload::new(votes).unwrap().encoded_len(), bytes.len());
    }

    /// Any strict prefix of a non-empty encoding fails as a format error.
    #[test]
    fn truncation_always_fails(votes in prop::collection::vec(arb_vote(), 1..8), cut in any::<prop::sample::Index>()) {
        let bytes = encode_votes(&votes).unwrap();
        let len = cut.index(bytes.len());
        let err = decode_votes(&bytes[..len]).unwrap_err();
        prop_assert!(err.is_format());
    }

    /// Decoding arbitrary bytes either fails cleanly or yields a payload that
    /// re-encodes to the consumed prefix.
    #[test]
    fn arbitrary_bytes_never_panic(data in prop::collection::vec(any::<u8>(), 0..400)) {
        let mut reader = ByteReader::new(&data);
        if let Ok(payload) = VotePayload::read_from(&mut reader) {
            let consumed = reader.position();
            prop_assert_eq!(payload.to_bytes().unwrap(), data[..consumed].to_vec());
        }
    }

    /// Direction bytes other than 0x00 and 0x01 are rejected.
    #[test]
    fn invalid_direction_rejected(vote in arb_vote(), byte in 2u8..) {
        let mut bytes = encode_votes(&[vote]).unwrap();
        bytes[1] = byte;
        prop_assert_eq!(decode_votes(&bytes).unwrap_err(), CodecError::InvalidDirection(byte));
    }

    /// The registry path agrees with the direct codec.
    #[test]
    fn registry_matches_direct_codec(votes in prop::collection::vec(arb_vote(), 0..16)) {
        let registry = PayloadRegistry::core();
        let payload = Payload::Vote(VotePayload::new(votes.clone()).unwrap());
        let bytes = registry.encode(TransactionKind::VOTE, &payload).unwrap();
        prop_assert_eq!(&bytes, &encode_votes(&votes).unwrap());
    }
}
