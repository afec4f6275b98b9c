/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::iter::Sum;
use std::ops::{Add, Sub};

use crate::tobytes::*;
use crate::curve::*;
use crate::pedersen::*;
use crate::errors::SignatureError;

///A pedersen commitment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Commitment(
    #[serde(with = "crate::curve::point_serde")]
    pub ProjectivePoint

); impl Commitment {
    ///create a commitment to `value` with blinding factor `blinding`
    pub fn commit(value: u64, blinding: Scalar) -> Self {
        //(a * G) + (v * H)
        return Self(
            (*PEDERSEN_G_POINT * blinding) + (*PEDERSEN_H_POINT * Scalar::from(value))
        )
    }

    ///Return the elliptic curve point which represents this commitment.
    ///To convert an elliptic curve point back into a commitment, use `Commitment(point)`.
    pub fn to_point(&self) -> ProjectivePoint {
        return self.0;
    }

    ///Given input commitments, output commitments, and "extra" output,
    ///check if the equation is balanced.
    ///
    ///`in == (out + extra)`
    pub fn is_balanced(in_commitments: Vec<Commitment>, out_commitments: Vec<Commitment>, extra: u64) -> bool {
        let out = [ out_commitments, vec!(Commitment(*PEDERSEN_H_POINT * Scalar::from(extra))) ].concat();
        return Commitment::sum(in_commitments.into_iter()) == Commitment::sum(out.into_iter())
    }

} impl Add for Commitment {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        return Self(self.0 + rhs.0)
    }

} impl Sub for Commitment {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        return Self(self.0 - rhs.0)
    }

} impl Sum for Commitment {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        return Commitment(iter.fold(ProjectivePoint::IDENTITY, |acc, com| acc + com.0))
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for Commitment {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(encode_point(&self.0)?.to_vec())
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        return Ok(Self(decode_point(bytes)?))
    }
}

///A Ring is the ordered list of public keys a ring signature is made over.
///
///Rings always have at least 2 members.
///Order matters: a signature only verifies against the exact ordering it was made with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring(
    Vec<ProjectivePoint>

); impl Ring {
    ///Create a ring from its members.
    pub fn new(keys: Vec<ProjectivePoint>) -> Result<Self, SignatureError> {
        if keys.len() < 2 {
            return Err(SignatureError::RingTooSmall)
        }
        return Ok(Self(keys))
    }

    ///The members of this ring.
    pub fn keys(&self) -> &[ProjectivePoint] {
        return &self.0
    }

    ///Number of members.
    pub fn len(&self) -> usize {
        return self.0.len()
    }

    ///Position of `key` within the ring, if present.
    pub fn position(&self, key: &ProjectivePoint) -> Option<usize> {
        return self.0.iter().position(|member| member == key)
    }
}
