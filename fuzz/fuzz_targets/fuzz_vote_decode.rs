#![no_main]

use libfuzzer_sys::fuzz_target;
use strata_transactions::{ByteReader, VotePayload, VOTE_LEN};

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes must never panic. When it succeeds, the
    // consumed prefix must re-encode byte for byte.
    let mut reader = ByteReader::new(data);
    if let Ok(payload) = VotePayload::read_from(&mut reader) {
        let consumed = reader.position();
        assert_eq!(consumed, 1 + VOTE_LEN * payload.len());
        let encoded = payload.to_bytes().expect("decoded payload must re-encode");
        assert_eq!(encoded, &data[..consumed]);
    }
});
