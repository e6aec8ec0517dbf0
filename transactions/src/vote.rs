//! Vote payload: an ordered list of add/remove instructions for delegates.
//!
//! Wire layout:
//!
//! ```text
//! count       1 byte (0..=255)
//! count × {
//!   direction 1 byte (0x00 remove, 0x01 add)
//!   key       33 bytes
//! }
//! ```
//!
//! The textual form of a vote is a sign (`+` add, `-` remove) followed by the
//! 66-character hex public key.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use strata_types::{PublicKey, PUBLIC_KEY_LEN};

use crate::codec::{ByteReader, ByteWriter};
use crate::kind::KindInfo;
use crate::payload::{Payload, PayloadCodec};
use crate::CodecError;

/// Maximum number of votes in one payload; the count is a single byte.
pub const MAX_VOTES: usize = u8::MAX as usize;

/// Encoded size of one vote: direction byte plus key.
pub const VOTE_LEN: usize = 1 + PUBLIC_KEY_LEN;

/// Encoded size of a full payload: 8,671 bytes.
pub const MAX_VOTE_PAYLOAD_LEN: usize = 1 + VOTE_LEN * MAX_VOTES;

pub const VOTE_INFO: KindInfo = KindInfo {
    key: "vote",
    version: 1,
    default_fee: 100_000_000,
    max_len: MAX_VOTE_PAYLOAD_LEN,
};

/// Registry entry for the vote payload.
pub const VOTE_CODEC: PayloadCodec = PayloadCodec {
    info: VOTE_INFO,
    encode: encode_payload,
    decode: decode_payload,
};

/// Whether a vote adds or removes support.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VoteDirection {
    Add,
    Remove,
}

impl VoteDirection {
    pub fn to_byte(self) -> u8 {
        match self {
            Self::Add => 0x01,
            Self::Remove => 0x00,
        }
    }

    pub fn from_byte(byte: u8) -> Result<Self, CodecError> {
        match byte {
            0x01 => Ok(Self::Add),
            0x00 => Ok(Self::Remove),
            other => Err(CodecError::InvalidDirection(other)),
        }
    }

    pub fn sign(self) -> char {
        match self {
            Self::Add => '+',
            Self::Remove => '-',
        }
    }

    pub fn from_sign(sign: char) -> Option<Self> {
        match sign {
            '+' => Some(Self::Add),
            '-' => Some(Self::Remove),
            _ => None,
        }
    }
}

/// A single vote for or against a delegate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vote {
    pub direction: VoteDirection,
    pub delegate: PublicKey,
}

impl Vote {
    pub fn add(delegate: PublicKey) -> Self {
        Self {
            direction: VoteDirection::Add,
            delegate,
        }
    }

    pub fn remove(delegate: PublicKey) -> Self {
        Self {
            direction: VoteDirection::Remove,
            delegate,
        }
    }

    fn write_to(&self, writer: &mut ByteWriter) -> Result<(), CodecError> {
        writer.write_u8(self.direction.to_byte())?;
        writer.write_bytes(self.delegate.as_bytes())
    }

    fn read_from(reader: &mut ByteReader<'_>) -> Result<Self, CodecError> {
        let direction = VoteDirection::from_byte(reader.read_u8()?)?;
        let delegate = PublicKey::new(reader.read_array::<PUBLIC_KEY_LEN>()?);
        Ok(Self {
            direction,
            delegate,
        })
    }
}

impl FromStr for Vote {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let sign = chars
            .next()
            .ok_or_else(|| CodecError::InvalidVote("empty vote".into()))?;
        let direction = VoteDirection::from_sign(sign)
            .ok_or_else(|| CodecError::InvalidVote(format!("unknown vote sign {sign:?}")))?;
        let delegate = chars
            .as_str()
            .parse::<PublicKey>()
            .map_err(|e| CodecError::InvalidVote(e.to_string()))?;
        Ok(Self {
            direction,
            delegate,
        })
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction.sign(), self.delegate)
    }
}

impl Serialize for Vote {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Vote {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// An ordered list of at most [`MAX_VOTES`] votes.
///
/// Serializes as the transaction asset `{"votes": ["+..", "-.."]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VoteAsset", into = "VoteAsset")]
pub struct VotePayload {
    votes: Vec<Vote>,
}

#[derive(Serialize, Deserialize)]
struct VoteAsset {
    votes: Vec<Vote>,
}

impl TryFrom<VoteAsset> for VotePayload {
    type Error = CodecError;

    fn try_from(asset: VoteAsset) -> Result<Self, Self::Error> {
        Self::new(asset.votes)
    }
}

impl From<VotePayload> for VoteAsset {
    fn from(payload: VotePayload) -> Self {
        Self {
            votes: payload.votes,
        }
    }
}

impl VotePayload {
    pub fn new(votes: Vec<Vote>) -> Result<Self, CodecError> {
        check_count(votes.len())?;
        Ok(Self { votes })
    }

    pub fn votes(&self) -> &[Vote] {
        &self.votes
    }

    pub fn len(&self) -> usize {
        self.votes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vote> {
        self.votes.iter()
    }

    /// Size of the encoded payload in bytes.
    pub fn encoded_len(&self) -> usize {
        1 + VOTE_LEN * self.votes.len()
    }

    /// Append the encoded payload to an envelope buffer.
    pub fn write_to(&self, writer: &mut ByteWriter) -> Result<(), CodecError> {
        write_votes(&self.votes, writer)
    }

    /// Read a payload at the reader's position, leaving any following bytes
    /// unread.
    pub fn read_from(reader: &mut ByteReader<'_>) -> Result<Self, CodecError> {
        let count = reader.read_u8()? as usize;
        reader.ensure(count * VOTE_LEN)?;

        let mut votes = Vec::with_capacity(count);
        for _ in 0..count {
            votes.push(Vote::read_from(reader)?);
        }
        tracing::trace!(count, "decoded vote payload");
        Ok(Self { votes })
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        let mut writer = ByteWriter::with_capacity(self.encoded_len());
        self.write_to(&mut writer)?;
        Ok(writer.into_bytes())
    }
}

impl<'a> IntoIterator for &'a VotePayload {
    type Item = &'a Vote;
    type IntoIter = std::slice::Iter<'a, Vote>;

    fn into_iter(self) -> Self::IntoIter {
        self.votes.iter()
    }
}

fn check_count(count: usize) -> Result<(), CodecError> {
    if count > MAX_VOTES {
        return Err(CodecError::Overflow {
            count,
            max: MAX_VOTES,
        });
    }
    Ok(())
}

fn write_votes(votes: &[Vote], writer: &mut ByteWriter) -> Result<(), CodecError> {
    check_count(votes.len())?;
    writer.write_u8(votes.len() as u8)?;
    for vote in votes {
        vote.write_to(writer)?;
    }
    tracing::trace!(count = votes.len(), "encoded vote payload");
    Ok(())
}

/// Encode votes in the given order. Fails with `Overflow` above 255 votes.
pub fn encode_votes(votes: &[Vote]) -> Result<Vec<u8>, CodecError> {
    let mut writer = ByteWriter::bounded(MAX_VOTE_PAYLOAD_LEN);
    write_votes(votes, &mut writer)?;
    Ok(writer.into_bytes())
}

/// Parse votes from their textual form and encode them.
pub fn encode_vote_strings<S: AsRef<str>>(votes: &[S]) -> Result<Vec<u8>, CodecError> {
    check_count(votes.len())?;
    let parsed = votes
        .iter()
        .map(|vote| vote.as_ref().parse())
        .collect::<Result<Vec<Vote>, _>>()?;
    encode_votes(&parsed)
}

/// Decode a vote payload from the start of `bytes`. Bytes after the payload
/// belong to the enclosing envelope and are ignored.
pub fn decode_votes(bytes: &[u8]) -> Result<VotePayload, CodecError> {
    VotePayload::read_from(&mut ByteReader::new(bytes))
}

fn encode_payload(payload: &Payload, writer: &mut ByteWriter) -> Result<(), CodecError> {
    match payload {
        Payload::Vote(votes) => votes.write_to(writer),
    }
}

fn decode_payload(reader: &mut ByteReader<'_>) -> Result<Payload, CodecError> {
    VotePayload::read_from(reader).map(Payload::Vote)
}
