#![no_main]

use libfuzzer_sys::fuzz_target;
use strata_exceptions::{is_block_exception, is_transaction_exception, ExceptionConfig};
use strata_types::{BlockRecord, TransactionRecord};

fuzz_target!(|data: &[u8]| {
    // Arbitrary config documents either fail to load or yield a config the
    // predicates can read without panicking.
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(config) = ExceptionConfig::from_json_str(text) else {
        return;
    };

    for id in config.exceptions().blocks.iter().flatten() {
        let _ = is_block_exception(&BlockRecord::new(id.clone()), &config);
    }
    for id in config.exceptions().transactions.iter().flatten() {
        let _ = is_transaction_exception(&TransactionRecord::new(id.clone()), &config);
    }
});
