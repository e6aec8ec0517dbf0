//! Transaction payload codecs for the Strata ledger.
//!
//! - [`codec`]: bounds-checked byte cursors owned by each encode/decode call
//! - [`vote`]: the vote payload and its wire format
//! - [`payload`]: tagged payload variants and the kind → codec registry

pub mod codec;
pub mod error;
pub mod kind;
pub mod payload;
pub mod vote;

pub use codec::{ByteReader, ByteWriter};
pub use error::CodecError;
pub use kind::{KindInfo, TransactionKind, CORE_TYPE_GROUP};
pub use payload::{Payload, PayloadCodec, PayloadRegistry};
pub use vote::{
    decode_votes, encode_vote_strings, encode_votes, Vote, VoteDirection, VotePayload,
    MAX_VOTES, MAX_VOTE_PAYLOAD_LEN, VOTE_LEN,
};
