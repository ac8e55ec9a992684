//! Serialization strategies used as the round-trip medium of a deep copy.
//!
//! An encoded buffer never carries storage addresses, so decoding it always
//! allocates fresh backing storage for every map and vector in the value.

use bincode::Options;
use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CopyError;
use crate::finite;

pub trait Codec {
    fn name(&self) -> &'static str;

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CopyError>;

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CopyError>;
}

/// MessagePack with named struct fields. Self-describing: decoding into a
/// struct whose required fields are not present in the buffer fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessagePackCodec;

impl Codec for MessagePackCodec {
    fn name(&self) -> &'static str {
        "msgpack"
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CopyError> {
        rmp_serde::to_vec_named(value).map_err(|err| CopyError::encoding(self.name(), err))
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CopyError> {
        rmp_serde::from_slice(bytes).map_err(|err| CopyError::decoding(self.name(), err))
    }
}

/// Positional bincode encoding. Not self-describing, so a shape mismatch is
/// only caught when the buffer runs short, holds invalid data, or has bytes
/// left over (trailing bytes are rejected).
#[derive(Debug, Clone, Copy, Default)]
pub struct BincodeCodec;

impl Codec for BincodeCodec {
    fn name(&self) -> &'static str {
        "bincode"
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CopyError> {
        bincode::options()
            .serialize(value)
            .map_err(|err| CopyError::encoding(self.name(), err))
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CopyError> {
        bincode::options()
            .deserialize(bytes)
            .map_err(|err| CopyError::decoding(self.name(), err))
    }
}

/// JSON text. Map keys must serialize as strings, and floats must be finite
/// (serde_json would otherwise write `NaN` and infinities as `null`).
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn name(&self) -> &'static str {
        "json"
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CopyError> {
        finite::check(value).map_err(|err| CopyError::encoding(self.name(), err))?;
        serde_json::to_vec(value).map_err(|err| CopyError::encoding(self.name(), err))
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CopyError> {
        serde_json::from_slice(bytes).map_err(|err| CopyError::decoding(self.name(), err))
    }
}

/// Codec picked at runtime, e.g. from the config file or `--codec`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CodecKind {
    /// MessagePack with named fields (default)
    #[default]
    #[serde(alias = "messagepack")]
    #[value(alias = "messagepack")]
    Msgpack,
    /// Compact positional bincode
    Bincode,
    /// JSON text
    Json,
}

impl CodecKind {
    pub const ALL: [CodecKind; 3] = [CodecKind::Msgpack, CodecKind::Bincode, CodecKind::Json];
}

impl Codec for CodecKind {
    fn name(&self) -> &'static str {
        match self {
            CodecKind::Msgpack => MessagePackCodec.name(),
            CodecKind::Bincode => BincodeCodec.name(),
            CodecKind::Json => JsonCodec.name(),
        }
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CopyError> {
        match self {
            CodecKind::Msgpack => MessagePackCodec.encode(value),
            CodecKind::Bincode => BincodeCodec.encode(value),
            CodecKind::Json => JsonCodec.encode(value),
        }
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CopyError> {
        match self {
            CodecKind::Msgpack => MessagePackCodec.decode(bytes),
            CodecKind::Bincode => BincodeCodec.decode(bytes),
            CodecKind::Json => JsonCodec.decode(bytes),
        }
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
