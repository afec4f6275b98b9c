/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    error::Error,
    fmt::Display
};

///Encoding/serialization errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializationError {
    ///Failure to serialize.
    EncodingError,
    ///Failure to deserialize.
    DecodingError,
    ///The input has the wrong number of bytes.
    InvalidLength,
    ///The base58 checksum does not match the payload.
    ChecksumMismatch,
    ///The version byte is not the one expected for this kind of data.
    InvalidVersion,
    ///The bytes do not describe a valid private or public key.
    InvalidKey,
    ///The identity point has no byte encoding.
    IdentityPoint,

} impl Display for SerializationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::EncodingError => "Encoding error.",
            Self::DecodingError => "Decoding error.",
            Self::InvalidLength => "Wrong number of bytes.",
            Self::ChecksumMismatch => "Checksum mismatch.",
            Self::InvalidVersion => "Unexpected version byte.",
            Self::InvalidKey => "Invalid key.",
            Self::IdentityPoint => "The identity point cannot be encoded.",
        })
    }

} impl Error for SerializationError {}

///Rangeproof errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeProofError {
    ///The rangeproof is invalid.
    Invalid,
    ///The given rangeproof is malformed in some way,
    ///or the parameters are incorrect/inconsistent.
    Malformed,
    ///A given value is not in the valid range (0 <= `x` < 2<sup>`k`</sup>).
    OutOfRange,
    ///The bit range `k` is zero or larger than `MAX_BIT_RANGE`.
    InvalidBitRange,

} impl Display for RangeProofError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::Invalid => "This rangeproof is invalid.",
            Self::Malformed => "Malformed proof or parameters.",
            Self::OutOfRange => "Value is out of range.",
            Self::InvalidBitRange => "Unsupported bit range.",
        })
    }

} impl Error for RangeProofError {}

///Ring signature errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    ///The signature is invalid.
    Invalid,
    ///The given signature is malformed in some way,
    ///or the parameters are incorrect/inconsistent.
    Malformed,
    ///A ring needs at least 2 members.
    RingTooSmall,
    ///Signing requires the private key of one ring member.
    NoKnownSecret,
    ///More than one private key was supplied for a single ring.
    MultipleKnownSecrets,
    ///The signer's index is outside of the ring.
    IndexOutOfRange,
    ///The private key does not belong to the public key at the signer's index.
    KeyMismatch,
    ///A Borromean signature needs at least one ring.
    NoRings,

} impl Display for SignatureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::Invalid => "This signature is invalid.",
            Self::Malformed => "Malformed signature or parameters.",
            Self::RingTooSmall => "The ring has fewer than 2 members.",
            Self::NoKnownSecret => "No private key is known for this ring.",
            Self::MultipleKnownSecrets => "Exactly one private key per ring is allowed.",
            Self::IndexOutOfRange => "Signer index is out of range.",
            Self::KeyMismatch => "Private key does not match the ring member.",
            Self::NoRings => "No rings were given.",
        })
    }

} impl Error for SignatureError {}

///Ledger errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    ///A balance is already registered for this address.
    AccountExists,
    ///No balance is registered for this address.
    UnknownAccount,
    ///The commitments of a transfer do not add up.
    Unbalanced,
    ///One of the transfer's rangeproofs failed.
    RangeProof(RangeProofError),
    ///An address could not be derived or decoded.
    Address(SerializationError),

} impl Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AccountExists => write!(f, "Account already exists."),
            Self::UnknownAccount => write!(f, "Unknown account."),
            Self::Unbalanced => write!(f, "Transfer commitments are not balanced."),
            Self::RangeProof(err) => write!(f, "Rangeproof rejected: {}", err),
            Self::Address(err) => write!(f, "Address error: {}", err),
        }
    }

} impl Error for LedgerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::RangeProof(err) => Some(err),
            Self::Address(err) => Some(err),
            _ => None
        }
    }

} impl From<RangeProofError> for LedgerError {
    fn from(err: RangeProofError) -> Self {
        return Self::RangeProof(err)
    }

} impl From<SerializationError> for LedgerError {
    fn from(err: SerializationError) -> Self {
        return Self::Address(err)
    }
}

impl From<SignatureError> for RangeProofError {
    fn from(err: SignatureError) -> Self {
        return match err {
            SignatureError::Invalid => Self::Invalid,
            _ => Self::Malformed
        }
    }
}
