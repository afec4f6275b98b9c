/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Key pairs, WIF export, and plain message signatures (ECDSA)

use k256::ecdsa::{
    SigningKey,
    VerifyingKey,
    signature::{
        Signer,
        Verifier
    }
};
use rand::thread_rng;
use zeroize::Zeroizing;

use crate::internal_common::*;
use super::{
    Address,
    WIF_VERSION,
    encode_check,
    decode_check
};

///A signature over a plain message, made by an `Account`.
pub use k256::ecdsa::Signature as MessageSignature;

///A verify-only account: a public key, with no private key attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewAccount {
    verifying_key: VerifyingKey

} impl ViewAccount {
    ///Create a view account from a public point.
    ///
    ///The identity point is not a valid public key.
    pub fn from_point(point: &ProjectivePoint) -> Result<Self, SerializationError> {
        return match VerifyingKey::from_affine(point.to_affine()) {
            Ok(verifying_key) => Ok(Self{verifying_key}),
            Err(_) => Err(SerializationError::IdentityPoint)
        }
    }

    ///Create a view account from a SEC1 encoded public key (`0x04 || X || Y`, or compressed).
    pub fn from_pubkey_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        return match VerifyingKey::from_sec1_bytes(bytes) {
            Ok(verifying_key) => Ok(Self{verifying_key}),
            Err(_) => Err(SerializationError::InvalidKey)
        }
    }

    ///Create a view account from a hex encoded public key.
    pub fn from_pubkey(pubkey: &str) -> Result<Self, SerializationError> {
        let bytes = hex::decode(pubkey)
            .map_err(|_| SerializationError::DecodingError)?;
        return Self::from_pubkey_bytes(&bytes)
    }

    ///The public key as a point.
    pub fn public_point(&self) -> ProjectivePoint {
        return ProjectivePoint::from(*self.verifying_key.as_affine())
    }

    ///The public key as `0x04 || X || Y`.
    pub fn pubkey_bytes(&self) -> Vec<u8> {
        return self.verifying_key.to_encoded_point(false).as_bytes().to_vec()
    }

    ///The public key as uppercase hex.
    pub fn pubkey_hex(&self) -> String {
        return hex::encode_upper(self.pubkey_bytes())
    }

    ///The address of this public key.
    pub fn address(&self) -> Address {
        return Address::from_pubkey_bytes(&self.pubkey_bytes())
    }

    ///Check that `signature` was made over `msg` by this account's private key.
    pub fn verify(&self, msg: &[u8], signature: &MessageSignature) -> bool {
        return self.verifying_key.verify(msg, signature).is_ok()
    }

    ///Same as `verify`, for an encoded (64 byte `r || s`) signature.
    ///
    ///Malformed signatures are rejected, never panicked on.
    pub fn verify_bytes(&self, msg: &[u8], signature: &[u8]) -> bool {
        return match MessageSignature::from_slice(signature) {
            Ok(signature) => self.verify(msg, &signature),
            Err(_) => false
        }
    }

    ///Same as `verify_bytes`, for a UTF-8 message.
    pub fn verify_str(&self, msg: &str, signature: &[u8]) -> bool {
        return self.verify_bytes(msg.as_bytes(), signature)
    }
}

///A key pair: a private key, and the public key derived from it.
///
///The private key is erased from memory when this is dropped.
#[derive(Clone)]
pub struct Account {
    signing_key: SigningKey,
    view: ViewAccount

} impl Account {
    fn from_signing_key(signing_key: SigningKey) -> Self {
        let view = ViewAccount{verifying_key: signing_key.verifying_key().clone()};
        return Self{signing_key, view}
    }

    ///Generate an account with a random private key.
    pub fn generate() -> Self {
        return Self::from_signing_key(SigningKey::random(&mut thread_rng()))
    }

    ///Create an account from a private key, which must not be zero.
    pub fn from_secret(secret: Scalar) -> Result<Self, SerializationError> {
        let secret: Option<NonZeroScalar> = NonZeroScalar::new(secret).into();
        return match secret {
            Some(secret) => Ok(Self::from_signing_key(SigningKey::from(secret))),
            None => Err(SerializationError::InvalidKey)
        }
    }

    ///Create an account from a 32 byte big-endian private key.
    pub fn from_encoded_secret(bytes: &[u8]) -> Result<Self, SerializationError> {
        if bytes.len() != SCALAR_BYTES {
            return Err(SerializationError::InvalidLength)
        }
        return match SigningKey::from_slice(bytes) {
            Ok(signing_key) => Ok(Self::from_signing_key(signing_key)),
            Err(_) => Err(SerializationError::InvalidKey)
        }
    }

    ///Create an account from a hex encoded private key.
    pub fn from_secret_hex(secret: &str) -> Result<Self, SerializationError> {
        let bytes = Zeroizing::new(hex::decode(secret)
            .map_err(|_| SerializationError::DecodingError)?);
        return Self::from_encoded_secret(&bytes)
    }

    ///Create an account from an exported private key (see `export_wif`).
    pub fn from_wif(wif: &str) -> Result<Self, SerializationError> {
        let payload = Zeroizing::new(decode_check(wif, WIF_VERSION)?);
        if payload.len() != SCALAR_BYTES + 1 {
            return Err(SerializationError::InvalidLength)
        }
        return Self::from_encoded_secret(&payload[1..])
    }

    ///Export the private key: base58check of `0x80 || secret`.
    ///
    ///**This should not be publically shared.**
    pub fn export_wif(&self) -> String {
        let mut payload = Zeroizing::new(vec!(WIF_VERSION));
        payload.extend_from_slice(&self.signing_key.to_bytes());
        return encode_check(&payload)
    }

    ///The private key.
    pub fn secret(&self) -> Scalar {
        return **self.signing_key.as_nonzero_scalar()
    }

    ///The verify-only half of this account.
    pub fn view(&self) -> &ViewAccount {
        return &self.view
    }

    ///An owned copy of the verify-only half, safe to hand out.
    pub fn to_view(&self) -> ViewAccount {
        return self.view.clone()
    }

    ///The public key as a point.
    pub fn public_point(&self) -> ProjectivePoint {
        return self.view.public_point()
    }

    ///The public key as uppercase hex.
    pub fn pubkey_hex(&self) -> String {
        return self.view.pubkey_hex()
    }

    ///The address of this account.
    pub fn address(&self) -> Address {
        return self.view.address()
    }

    ///Sign a message (ECDSA over SHA-256).
    pub fn sign(&self, msg: &[u8]) -> MessageSignature {
        return self.signing_key.sign(msg)
    }

    ///Sign a UTF-8 message.
    pub fn sign_str(&self, msg: &str) -> MessageSignature {
        return self.sign(msg.as_bytes())
    }

    ///Check a signature against this account's public key.
    pub fn verify(&self, msg: &[u8], signature: &MessageSignature) -> bool {
        return self.view.verify(msg, signature)
    }

} impl std::fmt::Debug for Account {
    //never print the private key
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account").field("address", &self.address()).finish()
    }

} impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        return self.view == other.view
    }

} impl Eq for Account {}
