/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub use serde::{
    Serialize,
    Deserialize,
};
pub use crate::errors::SerializationError;
#[cfg(feature = "to_bytes")]
use crate::curve::*;

///Implements functions to convert to (`to_bytes`) and from (`from_bytes`) bytes
///for most data types in this crate.
///
///Plain data types use bincode.
///Proofs and signatures override both methods with their fixed wire layout.
#[cfg(feature = "to_bytes")]
pub trait ToBytes<'a>: Sized + Serialize + Deserialize<'a> {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return match bincode::serialize(self) {
            Ok(bytes) => Ok(bytes),
            Err(_) => Err(SerializationError::EncodingError)
        }
    }

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, SerializationError> {
        return match bincode::deserialize(bytes) {
            Ok(value) => Ok(value),
            Err(_) => Err(SerializationError::DecodingError)
        }
    }
}

///Cursor over a fixed-layout byte string of points and scalars.
#[cfg(feature = "to_bytes")]
pub(crate) struct ByteReader<'a> {
    bytes: &'a [u8],
    position: usize

} #[cfg(feature = "to_bytes")] impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        return Self{bytes, position: 0}
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], SerializationError> {
        let end = self.position.checked_add(n).ok_or(SerializationError::InvalidLength)?;
        if end > self.bytes.len() {
            return Err(SerializationError::InvalidLength)
        }
        let slice = &self.bytes[self.position..end];
        self.position = end;
        return Ok(slice)
    }

    ///Read an uncompressed (65 byte) point.
    pub fn read_point(&mut self) -> Result<ProjectivePoint, SerializationError> {
        return decode_point(self.take(POINT_BYTES)?)
    }

    ///Read a canonical 32 byte scalar.
    pub fn read_scalar(&mut self) -> Result<Scalar, SerializationError> {
        return decode_scalar(self.take(SCALAR_BYTES)?)
    }

    ///Read 32 raw bytes.
    pub fn read_array(&mut self) -> Result<[u8; 32], SerializationError> {
        return self.take(32)?.try_into()
            .map_err(|_| SerializationError::InvalidLength)
    }

    ///Succeeds only if every byte has been consumed.
    pub fn finish(self) -> Result<(), SerializationError> {
        return match self.position == self.bytes.len() {
            true => Ok(()),
            false => Err(SerializationError::InvalidLength)
        }
    }
}
