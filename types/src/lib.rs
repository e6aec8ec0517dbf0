//! Fundamental types for the Strata ledger.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! delegate public keys, record ids and their formats, network identifiers, and
//! the block/transaction record shapes consumed by validation.

pub mod error;
pub mod id;
pub mod keys;
pub mod network;
pub mod record;

pub use error::StrataError;
pub use id::{IdFormat, RecordId, CANONICAL_ID_LEN};
pub use keys::{PublicKey, PUBLIC_KEY_LEN};
pub use network::NetworkId;
pub use record::{BlockRecord, TransactionRecord, TransactionRef};
