/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Accounts, base58check addresses, and one-time stealth addresses

use std::fmt::Display;
use std::str::FromStr;

use crate::internal_common::*;

mod ecdh;
mod account;
mod stealth;

pub use ecdh::{
    ECDHPrivateKey,
    ECDHPublicKey,
    SharedSecret
};
pub use account::{
    Account,
    ViewAccount,
    MessageSignature
};
pub use stealth::{
    StealthIdentity,
    StealthPublic,
    StealthViewKey
};

///Version byte of an address payload.
pub const ADDRESS_VERSION: u8 = 0x00;
///Version byte of an exported private key (WIF).
pub const WIF_VERSION: u8 = 0x80;

///base58 of `payload || first 4 bytes of SHA256(SHA256(payload))`
pub(crate) fn encode_check(payload: &[u8]) -> String {
    return bs58::encode(payload).with_check().into_string()
}

///Decode base58check, verifying the checksum and the leading version byte.
///
///The returned payload still starts with the version byte.
pub(crate) fn decode_check(encoded: &str, version: u8) -> Result<Vec<u8>, SerializationError> {
    return bs58::decode(encoded).with_check(Some(version)).into_vec()
        .map_err(|err| match err {
            bs58::decode::Error::InvalidChecksum{..} => SerializationError::ChecksumMismatch,
            bs58::decode::Error::InvalidVersion{..} => SerializationError::InvalidVersion,
            _ => SerializationError::DecodingError
        })
}

///A checksummed, one-way encoding of a public key:
///base58check of `0x00 || RIPEMD160(SHA256(0x04 || X || Y))`.
///
///Deserializing checks the version and checksum, the same as parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(
    String

); impl Address {
    ///Derive the address of a public point.
    ///
    ///The identity point has no address.
    pub fn from_point(point: &ProjectivePoint) -> Result<Self, SerializationError> {
        return Ok(Self::from_pubkey_bytes(&encode_point(point)?))
    }

    ///Derive the address of an already encoded public key.
    pub(crate) fn from_pubkey_bytes(pubkey: &[u8]) -> Self {
        let payload = [&[ADDRESS_VERSION][..], &hash160(pubkey)[..]].concat();
        return Self(encode_check(&payload))
    }

    ///Check the version and checksum, and return the 20 byte public key hash.
    pub fn decode(&self) -> Result<[u8; 20], SerializationError> {
        let payload = decode_check(&self.0, ADDRESS_VERSION)?;
        return payload[1..].try_into()
            .map_err(|_| SerializationError::InvalidLength)
    }

    ///The base58 string.
    pub fn as_str(&self) -> &str {
        return &self.0
    }

} impl Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }

} impl FromStr for Address {
    type Err = SerializationError;

    ///Parse an address, rejecting bad checksums and versions.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        return Self::try_from(s.to_string())
    }

} impl TryFrom<String> for Address {
    type Error = SerializationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        let address = Self(s);
        address.decode()?;
        return Ok(address)
    }

} impl From<Address> for String {
    fn from(address: Address) -> Self {
        return address.0
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for Address {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return match bincode::serialize(&self.0) {
            Ok(bytes) => Ok(bytes),
            Err(_) => Err(SerializationError::EncodingError)
        }
    }

    ///Decode an address, rejecting bad checksums and versions.
    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        let address: String = match bincode::deserialize(bytes) {
            Ok(address) => address,
            Err(_) => return Err(SerializationError::DecodingError)
        };
        return Self::try_from(address)
    }
}

///A one-time payment destination, broadcast publicly.
/// * `address`: the one-time address only the recipient can spend from
/// * `amount`: the amount sent, in the clear
/// * `ephemeral`: the sender's ephemeral public key `R`, which lets the recipient recognize the output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StealthOutput {
    pub address: Address,
    pub amount: u64,
    #[serde(with = "crate::curve::point_serde")]
    pub ephemeral: ProjectivePoint

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for StealthOutput {}
