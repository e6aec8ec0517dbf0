#![no_main]

use libfuzzer_sys::fuzz_target;
use strata_transactions::{ByteReader, PayloadRegistry, TransactionKind};

fuzz_target!(|data: &[u8]| {
    // First six bytes pick a kind tag, the rest is the payload region.
    if data.len() < 6 {
        return;
    }
    let type_group = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let type_id = u16::from_le_bytes([data[4], data[5]]);
    let kind = TransactionKind::new(type_group, type_id);

    let registry = PayloadRegistry::core();
    let body = &data[6..];
    if let Ok(payload) = registry.decode(kind, &mut ByteReader::new(body)) {
        let encoded = registry.encode(kind, &payload).expect("decoded payload must re-encode");
        assert_eq!(encoded, &body[..encoded.len()]);
    }
});
