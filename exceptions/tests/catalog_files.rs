use std::io::Write;
use std::sync::Arc;
use std::thread;

use strata_exceptions::{
    check_block, is_block_exception, is_transaction_exception, ConfigError, ExceptionCatalog,
    ExceptionConfig, Verdict,
};
use strata_types::{BlockRecord, NetworkId, TransactionRecord};

const TX: &str = "d82ef1452ed61d9217c9b6a7328afa833586fdb19390c9c5e61b7801447428a5";
const BLOCK: &str = "74d9217c9b6a7328afa833586fdb19390c9c5e61b7801447428a5";
const B6: &str = "b6fdb54370ac2334790942738784063475db70d5564598dbd714681bb02e3034";
const B7: &str = "b7fdb54370ac2334790942738784063475db70d5564598dbd714681bb02e3034";
const B8: &str = "b8fdb54370ac2334790942738784063475db70d5564598dbd714681bb02e3034";

fn catalog_toml() -> String {
    format!(
        r#"
[devnet.network]
pubKeyHash = 30

[devnet.exceptions]
transactions = ["{TX}"]
blocks = ["{BLOCK}"]

[devnet.exceptions.blocksTransactions]
{BLOCK} = ["{B8}", "{B7}", "{B6}"]

[mainnet.exceptions]
blocks = ["5139199631254983076"]
"#
    )
}

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn catalog_file_drives_registry() {
    let file = write_temp(&catalog_toml());
    let catalog = ExceptionCatalog::from_toml_file(file.path()).expect("catalog should load");

    let devnet = catalog.select(NetworkId::Devnet).expect("devnet section");
    assert!(is_transaction_exception(&TransactionRecord::new(TX), devnet));

    let block = BlockRecord::new(BLOCK).with_transactions([B6, B8, B7]);
    assert!(is_block_exception(&block, devnet));

    // Tables are per network: mainnet does not know the devnet records.
    let mainnet = catalog.select(NetworkId::Mainnet).expect("mainnet section");
    assert!(!is_transaction_exception(&TransactionRecord::new(TX), mainnet));
    assert!(!is_block_exception(&block, mainnet));
    assert!(is_block_exception(&BlockRecord::new("5139199631254983076"), mainnet));
}

#[test]
fn json_config_matches_toml_config() {
    let json = format!(
        r#"{{
            "exceptions": {{
                "blocks": ["{BLOCK}"],
                "blocksTransactions": {{ "{BLOCK}": ["{B8}", "{B7}", "{B6}"] }}
            }},
            "network": {{ "pubKeyHash": 30 }}
        }}"#
    );
    let from_json = ExceptionConfig::from_json_str(&json).unwrap();
    let toml_file = write_temp(&from_json.to_toml_string().unwrap());
    let from_toml = ExceptionConfig::from_toml_file(toml_file.path()).unwrap();
    assert_eq!(from_json, from_toml);
}

#[test]
fn mismatched_pub_key_hash_is_rejected() {
    let toml = r#"
[testnet.network]
pubKeyHash = 30
"#;
    let err = ExceptionCatalog::from_toml_str(toml).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("pubKeyHash 30"));
}

#[test]
fn shared_snapshot_gives_same_answers_across_threads() {
    let catalog = ExceptionCatalog::from_toml_str(&catalog_toml()).unwrap();
    let config: Arc<ExceptionConfig> = catalog
        .select(NetworkId::Devnet)
        .cloned()
        .unwrap()
        .into_shared();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let config = Arc::clone(&config);
            thread::spawn(move || {
                let ids = if i % 2 == 0 { [B6, B7, B8] } else { [B8, B6, B7] };
                let block = BlockRecord::new(BLOCK).with_transactions(ids);
                check_block(&block, &config, |_| Err("normal rules reject legacy blocks"))
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(Verdict::Exception));
    }
}
