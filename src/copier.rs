//! Deep copy through a codec round-trip.
//!
//! The source is encoded into a buffer that holds values only, then a fresh
//! value is decoded from it. Every map and vector in the result is newly
//! allocated, so nothing reachable from the copy aliases the source.
//!
//! # Skipped fields
//!
//! A field the codec cannot see, i.e. one marked `#[serde(skip)]`, is not
//! part of the buffer and comes back as `Default::default()`. [`DeepCopier::copy`]
//! and [`DeepCopier::copy_into`] accept that silently; [`DeepCopier::copy_checked`]
//! compares the copy with the source and returns [`CopyError::Lossy`] instead.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::codec::{Codec, MessagePackCodec};
use crate::error::CopyError;

#[derive(Debug, Clone, Default)]
pub struct DeepCopier<C: Codec = MessagePackCodec> {
    codec: C,
}

impl<C: Codec> DeepCopier<C> {
    pub fn new(codec: C) -> Self {
        DeepCopier { codec }
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Returns an independent copy of `src`.
    pub fn copy<T>(&self, src: &T) -> Result<T, CopyError>
    where
        T: Serialize + DeserializeOwned,
    {
        let bytes = self.encode(src)?;
        self.decode(&bytes)
    }

    /// Overwrites `dst` with a copy of `src`.
    ///
    /// `dst` may be of a different type than `src`; when the encoded source
    /// cannot be read back as `D` this fails with [`CopyError::Decoding`].
    /// On any error `dst` is left as it was.
    pub fn copy_into<S, D>(&self, dst: &mut D, src: &S) -> Result<(), CopyError>
    where
        S: Serialize + ?Sized,
        D: DeserializeOwned,
    {
        let bytes = self.encode(src)?;
        *dst = self.decode(&bytes)?;
        Ok(())
    }

    /// Like [`copy`](Self::copy), but fails when the copy is not equal to
    /// the source, e.g. because a skipped field held a non-default value.
    ///
    /// The check is `PartialEq`, so a value that is not equal to itself is
    /// always reported as [`CopyError::Lossy`]. A record holding a `NaN`
    /// float is the common case; copy those with [`copy`](Self::copy).
    pub fn copy_checked<T>(&self, src: &T) -> Result<T, CopyError>
    where
        T: Serialize + DeserializeOwned + PartialEq,
    {
        let copy = self.copy(src)?;
        if copy != *src {
            warn!(codec = self.codec.name(), "deep copy dropped data");
            return Err(CopyError::Lossy {
                codec: self.codec.name(),
            });
        }
        Ok(copy)
    }

    fn encode<S: Serialize + ?Sized>(&self, src: &S) -> Result<Vec<u8>, CopyError> {
        match self.codec.encode(src) {
            Ok(bytes) => {
                debug!(codec = self.codec.name(), bytes = bytes.len(), "encoded source");
                Ok(bytes)
            }
            Err(err) => {
                warn!(error = %err, "deep copy failed while encoding");
                Err(err)
            }
        }
    }

    fn decode<D: DeserializeOwned>(&self, bytes: &[u8]) -> Result<D, CopyError> {
        self.codec.decode(bytes).map_err(|err| {
            warn!(error = %err, "deep copy failed while decoding");
            err
        })
    }
}

/// Overwrites `dst` with a deep copy of `src` using the default codec.
pub fn deep_copy<S, D>(dst: &mut D, src: &S) -> Result<(), CopyError>
where
    S: Serialize + ?Sized,
    D: DeserializeOwned,
{
    DeepCopier::new(MessagePackCodec).copy_into(dst, src)
}

/// Returns a deep copy of `src` using the default codec.
pub fn deep_copy_of<T>(src: &T) -> Result<T, CopyError>
where
    T: Serialize + DeserializeOwned,
{
    DeepCopier::new(MessagePackCodec).copy(src)
}
