//! Tagged payloads and the registry mapping a kind tag to its codec.
//!
//! Each payload shape contributes one [`Payload`] variant and one
//! [`PayloadCodec`]. The envelope reads the kind tag, looks the codec up in a
//! [`PayloadRegistry`], and hands it a cursor positioned at the payload
//! region.

use std::collections::HashMap;

use crate::codec::{ByteReader, ByteWriter};
use crate::kind::{KindInfo, TransactionKind};
use crate::vote::{VotePayload, VOTE_CODEC};
use crate::CodecError;

/// The type-specific region of a transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    Vote(VotePayload),
}

impl Payload {
    /// The kind tag this payload is encoded under.
    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Vote(_) => TransactionKind::VOTE,
        }
    }
}

impl From<VotePayload> for Payload {
    fn from(votes: VotePayload) -> Self {
        Self::Vote(votes)
    }
}

pub type EncodeFn = fn(&Payload, &mut ByteWriter) -> Result<(), CodecError>;
pub type DecodeFn = fn(&mut ByteReader<'_>) -> Result<Payload, CodecError>;

/// Encode/decode pair for one payload kind.
#[derive(Clone, Copy, Debug)]
pub struct PayloadCodec {
    pub info: KindInfo,
    pub encode: EncodeFn,
    pub decode: DecodeFn,
}

/// Maps kind tags to payload codecs.
#[derive(Clone, Debug, Default)]
pub struct PayloadRegistry {
    codecs: HashMap<TransactionKind, PayloadCodec>,
}

impl PayloadRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every built-in payload kind.
    pub fn core() -> Self {
        let mut registry = Self::new();
        registry.register(TransactionKind::VOTE, VOTE_CODEC);
        registry
    }

    /// Register a codec, returning the one it replaced.
    pub fn register(&mut self, kind: TransactionKind, codec: PayloadCodec) -> Option<PayloadCodec> {
        let previous = self.codecs.insert(kind, codec);
        if previous.is_some() {
            tracing::debug!(%kind, key = codec.info.key, "replaced payload codec");
        }
        previous
    }

    pub fn codec(&self, kind: TransactionKind) -> Option<&PayloadCodec> {
        self.codecs.get(&kind)
    }

    /// Look a kind up by its stable key, e.g. `"vote"`.
    pub fn kind_by_key(&self, key: &str) -> Option<TransactionKind> {
        self.codecs
            .iter()
            .find(|(_, codec)| codec.info.key == key)
            .map(|(kind, _)| *kind)
    }

    fn require(&self, kind: TransactionKind) -> Result<&PayloadCodec, CodecError> {
        self.codec(kind).ok_or(CodecError::UnknownKind(kind))
    }

    /// Append `payload` to `writer` using the codec for `kind`. The caller's
    /// writer sets its own limit; see [`ByteWriter::bounded`].
    pub fn encode_into(
        &self,
        kind: TransactionKind,
        payload: &Payload,
        writer: &mut ByteWriter,
    ) -> Result<(), CodecError> {
        let codec = self.require(kind)?;
        if payload.kind() != kind {
            return Err(CodecError::KindMismatch {
                expected: kind,
                found: payload.kind(),
            });
        }
        (codec.encode)(payload, writer)
    }

    /// Encode `payload` into a fresh buffer capped at the kind's `max_len`.
    pub fn encode(&self, kind: TransactionKind, payload: &Payload) -> Result<Vec<u8>, CodecError> {
        let mut writer = ByteWriter::bounded(self.require(kind)?.info.max_len);
        self.encode_into(kind, payload, &mut writer)?;
        Ok(writer.into_bytes())
    }

    /// Decode the payload for `kind` at the reader's position.
    pub fn decode(
        &self,
        kind: TransactionKind,
        reader: &mut ByteReader<'_>,
    ) -> Result<Payload, CodecError> {
        let codec = self.require(kind)?;
        (codec.decode)(reader)
    }
}
