//! Strata CLI: encode and decode vote payloads, check records against the
//! exception catalog.

use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;

use strata_exceptions::{
    is_block_exception, is_transaction_exception, is_transaction_exception_in_block,
    ExceptionCatalog, ExceptionConfig,
};
use strata_transactions::{decode_votes, encode_vote_strings};
use strata_types::{BlockRecord, NetworkId, TransactionRecord};
use strata_utils::{init_logging, LogFormat};

#[derive(Parser)]
#[command(name = "strata", about = "Strata ledger payload and exception tool")]
struct Cli {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "warn", env = "STRATA_LOG_LEVEL", global = true)]
    log_level: String,

    /// Log format: "human" or "json".
    #[arg(long, default_value = "human", env = "STRATA_LOG_FORMAT", global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Vote payload codec.
    Votes {
        #[command(subcommand)]
        action: VotesAction,
    },
    /// Chain exception registry.
    Exceptions {
        #[command(subcommand)]
        action: ExceptionsAction,
    },
}

#[derive(clap::Subcommand)]
enum VotesAction {
    /// Encode votes ("+<key>" or "-<key>") and print the payload as hex.
    Encode {
        #[arg(required = true, allow_hyphen_values = true)]
        votes: Vec<String>,
    },
    /// Decode a hex payload and print one vote per line.
    Decode { hex: String },
}

#[derive(clap::Subcommand)]
enum ExceptionsAction {
    /// Report whether a block or transaction is a configured exception.
    ///
    /// With both `--block` and `--transaction`, the transaction is checked as
    /// carried by that block, which is the only way a legacy transaction id
    /// can match.
    Check {
        /// Path to the TOML exception catalog.
        #[arg(long, env = "STRATA_EXCEPTION_CATALOG")]
        catalog: PathBuf,

        /// Network whose tables apply: "mainnet", "devnet" or "testnet".
        #[arg(long, env = "STRATA_NETWORK")]
        network: NetworkId,

        /// Block record as JSON, e.g. '{"id":"123","transactions":[{"id":"ab.."}]}'.
        #[arg(long, required_unless_present = "transaction")]
        block: Option<String>,

        /// Transaction record as JSON, e.g. '{"id":"ab.."}'.
        #[arg(long)]
        transaction: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format, &cli.log_level)?;

    match cli.command {
        Command::Votes { action } => run_votes(action),
        Command::Exceptions { action } => run_exceptions(action),
    }
}

fn run_votes(action: VotesAction) -> anyhow::Result<()> {
    match action {
        VotesAction::Encode { votes } => {
            let bytes = encode_vote_strings(&votes).context("failed to encode votes")?;
            println!("{}", hex::encode(bytes));
        }
        VotesAction::Decode { hex: payload } => {
            let bytes = hex::decode(payload.trim()).context("payload is not valid hex")?;
            let votes = decode_votes(&bytes).context("failed to decode vote payload")?;
            for vote in &votes {
                println!("{vote}");
            }
        }
    }
    Ok(())
}

fn run_exceptions(action: ExceptionsAction) -> anyhow::Result<()> {
    let ExceptionsAction::Check {
        catalog,
        network,
        block,
        transaction,
    } = action;

    let catalog = ExceptionCatalog::from_toml_file(&catalog)
        .with_context(|| format!("failed to load catalog {}", catalog.display()))?;
    let fallback = ExceptionConfig::default();
    let config = catalog.select(network).unwrap_or_else(|| {
        tracing::warn!(%network, "catalog has no section for network, nothing is an exception");
        &fallback
    });

    let block = block
        .map(|json| serde_json::from_str::<BlockRecord>(&json))
        .transpose()
        .context("block is not a valid record")?;
    let tx = transaction
        .map(|json| serde_json::from_str::<TransactionRecord>(&json))
        .transpose()
        .context("transaction is not a valid record")?;

    let hit = match (block, tx) {
        (Some(block), Some(tx)) => is_transaction_exception_in_block(&tx, &block, config),
        (Some(block), None) => is_block_exception(&block, config),
        (None, Some(tx)) => is_transaction_exception(&tx, config),
        (None, None) => bail!("either --block or --transaction is required"),
    };

    println!("{}", if hit { "exception" } else { "not-exception" });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn remove_votes_parse_as_values() {
        let key = "02275d8577a0ec2b75fc8683282d53c5db76ebc54514a80c2854e419b793ea259a";
        let remove = format!("-{key}");
        let cli = Cli::try_parse_from(["strata", "votes", "encode", &remove]).unwrap();
        match cli.command {
            Command::Votes {
                action: VotesAction::Encode { votes },
            } => assert_eq!(votes, vec![remove]),
            _ => panic!("expected votes encode"),
        }
    }

    #[test]
    fn check_accepts_transaction_with_its_block() {
        let cli = Cli::try_parse_from([
            "strata",
            "exceptions",
            "check",
            "--catalog",
            "c.toml",
            "--network",
            "devnet",
            "--block",
            r#"{"id":"1"}"#,
            "--transaction",
            r#"{"id":"2"}"#,
        ])
        .unwrap();
        match cli.command {
            Command::Exceptions {
                action:
                    ExceptionsAction::Check {
                        block, transaction, ..
                    },
            } => {
                assert!(block.is_some());
                assert!(transaction.is_some());
            }
            _ => panic!("expected exceptions check"),
        }
    }

    #[test]
    fn check_requires_a_record() {
        let result = Cli::try_parse_from([
            "strata",
            "exceptions",
            "check",
            "--catalog",
            "c.toml",
            "--network",
            "devnet",
        ]);
        assert!(result.is_err());
    }
}
