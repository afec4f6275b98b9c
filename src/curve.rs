/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Elliptic curve functions and constants
//!
//! Everything in this crate lives on secp256k1.

use crate::errors::SerializationError;

pub use k256::{
    Scalar,
    NonZeroScalar,
    ProjectivePoint,
    AffinePoint,
    EncodedPoint,
    FieldBytes,
    U256,
    elliptic_curve::{
        Field,
        PrimeField,
        group::Group,
        ops::Reduce,
        sec1::{
            ToEncodedPoint,
            FromEncodedPoint
        }
    }
};
use rand::thread_rng;

///The basepoint of the elliptic curve.
pub const G_POINT: ProjectivePoint = ProjectivePoint::GENERATOR;

///The order `n` of the group generated by `G_POINT`, big-endian hex.
pub const ORDER_HEX: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141";

///Length of an uncompressed point: `0x04 || X || Y`.
pub const POINT_BYTES: usize = 65;
///Length of a scalar.
pub const SCALAR_BYTES: usize = 32;

///The order `n` of the group, as an integer.
///
///Scalars are always reduced mod `n`, so `n` itself can't be represented as a `Scalar`.
pub fn order() -> U256 {
    return U256::from_be_hex(ORDER_HEX)
}

///return a random scalar, uniform in `[1, n)`
pub fn random_scalar() -> Scalar {
    return *NonZeroScalar::random(&mut thread_rng());
}

///return a random point on the curve
pub fn random_point() -> ProjectivePoint {
    return G_POINT * random_scalar();
}

///Reflect a point across the x-axis, so that `p + negate_point(p)` is the identity.
pub fn negate_point(point: &ProjectivePoint) -> ProjectivePoint {
    return -*point
}

///Interpret 32 big-endian bytes as an integer and reduce it mod `n`.
pub fn scalar_from_digest(digest: &[u8; 32]) -> Scalar {
    return <Scalar as Reduce<U256>>::reduce(U256::from_be_slice(digest))
}

///Generate random values
pub trait Random {
    fn generate() -> Self;

} impl Random for Scalar {
    fn generate() -> Self {
        return random_scalar()
    }
}

///Encode a point as `0x04 || X || Y`, both coordinates 32 bytes big-endian.
///
///The identity has no coordinates, so it can't be encoded.
pub fn encode_point(point: &ProjectivePoint) -> Result<[u8; POINT_BYTES], SerializationError> {
    return point.to_affine().to_encoded_point(false).as_bytes()
        .try_into().map_err(|_| SerializationError::IdentityPoint)
}

///Decode a SEC1 encoded point (uncompressed or compressed).
pub fn decode_point(bytes: &[u8]) -> Result<ProjectivePoint, SerializationError> {
    let encoded = EncodedPoint::from_bytes(bytes)
        .map_err(|_| SerializationError::DecodingError)?;
    let affine: Option<AffinePoint> = AffinePoint::from_encoded_point(&encoded).into();
    return match affine {
        Some(point) => Ok(ProjectivePoint::from(point)),
        None => Err(SerializationError::DecodingError)
    }
}

///`X || Y` of a point, for hashing purposes.
///
///The identity maps to 64 zero bytes; `(0, 0)` is not on the curve, so this can't collide.
pub fn point_coordinates(point: &ProjectivePoint) -> [u8; 64] {
    let encoded = point.to_affine().to_encoded_point(false);
    let mut coordinates = [0u8; 64];
    if let (Some(x), Some(y)) = (encoded.x(), encoded.y()) {
        coordinates[..32].copy_from_slice(x);
        coordinates[32..].copy_from_slice(y);
    }
    return coordinates
}

///Encode a scalar as 32 big-endian bytes.
pub fn encode_scalar(scalar: &Scalar) -> [u8; SCALAR_BYTES] {
    return scalar.to_bytes().into()
}

///Decode 32 big-endian bytes into a scalar. Values `>= n` are rejected.
pub fn decode_scalar(bytes: &[u8]) -> Result<Scalar, SerializationError> {
    let bytes: [u8; SCALAR_BYTES] = bytes.try_into()
        .map_err(|_| SerializationError::InvalidLength)?;
    let scalar: Option<Scalar> = Scalar::from_repr(bytes.into()).into();
    return scalar.ok_or(SerializationError::DecodingError)
}

///serde support for fields holding a single point
pub(crate) mod point_serde {
    use serde::{Serializer, Deserializer, Deserialize, de::Error};
    use super::*;

    pub fn serialize<S: Serializer>(point: &ProjectivePoint, serializer: S) -> Result<S::Ok, S::Error> {
        return serializer.serialize_bytes(point.to_affine().to_encoded_point(false).as_bytes())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ProjectivePoint, D::Error> {
        let bytes: Vec<u8> = Vec::deserialize(deserializer)?;
        return decode_point(&bytes).map_err(D::Error::custom)
    }
}

