/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! [Elliptic Curve Diffie Hellman (ECDH)](https://en.wikipedia.org/wiki/Elliptic-curve_Diffie%E2%80%93Hellman) related functions.

use std::ops::Add;

use crate::internal_common::*;
use zeroize::Zeroize;


///Shared secret between two keys, `A` and `B`.
///This can be calculated by having the private key of `A` and the public key of `B`,
///or the private key of `B` and the public key of `A`.
///Without the private key to at least one of these keys,
///it is impossible to determine the shared secret between `A` and `B`.
///
///The secret is `SHA256(X || Y)` of the Diffie-Hellman point.
///
///**This should not be publically shared.**
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SharedSecret(
    [u8; 32]

); impl SharedSecret {
    ///Hash a Diffie-Hellman point into a shared secret.
    pub(crate) fn from_point(point: &ProjectivePoint) -> Self {
        return Self(h_point(point))
    }

    ///Given a user's private key (`my_private`),
    ///and another user's public key (`other_public`),
    ///create a unique shared secret that only those 2 users know.
    pub(crate) fn get(my_private: Scalar, other_public: &ProjectivePoint) -> Self {
        return Self::from_point(&(*other_public * my_private))
    }

    ///Convert this shared secret to a scalar: the digest, read big-endian, mod `n`.
    pub fn as_scalar(&self) -> Scalar {
        return scalar_from_digest(&self.0)
    }

} impl Drop for SharedSecret {
    fn drop(&mut self) {
        self.0.zeroize()
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for SharedSecret {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(self.0.to_vec())
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        return match bytes.try_into() {
            Ok(secret) => Ok(Self(secret)),
            Err(_) => Err(SerializationError::DecodingError)
        }
    }
}


///Private key used in ECDH exchanges, such as a sender's ephemeral key `r`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ECDHPrivateKey (
    Scalar

); impl ECDHPrivateKey {
    ///Convert this private key into a public key.
    ///**These keys should never be reused.**
    pub fn to_public(&self) -> ECDHPublicKey {
        return ECDHPublicKey(G_POINT * self.as_scalar())
    }

    ///Given a public key, calculate the "shared secret" of these keys.
    pub fn shared_secret(&self, other_public: &ECDHPublicKey) -> SharedSecret {
        return SharedSecret::get(self.as_scalar(), &other_public.as_point())
    }

    ///Deterministically derive a unique one-time private key given a shared secret:
    ///`x + H(shared)`.
    ///**These keys should never be reused.**
    pub fn derive_key(&self, shared_secret: &SharedSecret) -> ECDHPrivateKey {
        return Self(self.as_scalar() + shared_secret.as_scalar())
    }

    ///Generate a random new private key.
    pub fn generate() -> Self {
        return Self(random_scalar())
    }

    ///Deterministically convert a scalar into a private key.
    pub fn from_scalar(scalar: Scalar) -> Self {
        return Self(scalar)
    }

    ///Convert this private key to a scalar.
    pub fn as_scalar(&self) -> Scalar {
        return self.0
    }

} impl Add for ECDHPrivateKey {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        return Self::from_scalar(self.as_scalar() + rhs.as_scalar())
    }

} impl Drop for ECDHPrivateKey {
    fn drop(&mut self) {
        self.0.zeroize()
    }
}


///Public key used in ECDH exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ECDHPublicKey (
    ProjectivePoint

); impl ECDHPublicKey {
    ///Given a private key, calculate the "shared secret" of these keys.
    pub fn shared_secret(&self, other_private: &ECDHPrivateKey) -> SharedSecret {
        return SharedSecret::get(other_private.as_scalar(), &self.as_point())
    }

    ///Derive the unique one-time public key given a shared secret:
    ///`P + H(shared)*G`.
    ///**These keys should never be reused.**
    pub fn derive_key(&self, shared_secret: &SharedSecret) -> ECDHPublicKey {
        return Self(self.as_point() + (G_POINT * shared_secret.as_scalar()))
    }

    ///Convert a point into a public key.
    pub fn from_point(point: ProjectivePoint) -> Self {
        return Self(point)
    }

    ///Convert this public key to an elliptic curve point.
    pub fn as_point(&self) -> ProjectivePoint {
        return self.0
    }

} impl Add for ECDHPublicKey {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        return Self::from_point(self.as_point() + rhs.as_point())
    }
}
