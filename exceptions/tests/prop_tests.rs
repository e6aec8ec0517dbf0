use proptest::prelude::*;

use strata_exceptions::{is_block_exception, ExceptionConfig, ExceptionTables};
use strata_types::{BlockRecord, NetworkId};

const BLOCK: &str = "83d9217c9b6a7328afa833586fdb19390c9c5e61b7801447428a5";

fn config_for(ids: &[String]) -> ExceptionConfig {
    ExceptionConfig::for_network(
        NetworkId::Devnet,
        ExceptionTables::default().with_block_transactions(BLOCK, ids.iter().cloned()),
    )
    .unwrap()
}

proptest! {
    /// Any permutation of the listed transactions still matches.
    #[test]
    fn block_match_ignores_order(
        (ids, shuffled) in prop::collection::hash_set("[0-9a-f]{64}", 0..12)
            .prop_map(|set| set.into_iter().collect::<Vec<_>>())
            .prop_flat_map(|ids| (Just(ids.clone()), Just(ids).prop_shuffle()))
    ) {
        let config = config_for(&ids);
        let block = BlockRecord::new(BLOCK).with_transactions(shuffled);
        prop_assert!(is_block_exception(&block, &config));
    }

    /// Dropping any listed transaction breaks the match, even though the
    /// remaining ids overlap.
    #[test]
    fn missing_transaction_breaks_match(
        ids in prop::collection::hash_set("[0-9a-f]{64}", 1..12)
            .prop_map(|set| set.into_iter().collect::<Vec<_>>()),
        drop in any::<prop::sample::Index>(),
    ) {
        let config = config_for(&ids);
        let mut actual = ids.clone();
        actual.remove(drop.index(ids.len()));
        let block = BlockRecord::new(BLOCK).with_transactions(actual);
        prop_assert!(!is_block_exception(&block, &config));
    }
}
