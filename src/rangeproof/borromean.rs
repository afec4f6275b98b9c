/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Borromean ring signature-based rangeproofs
//!
//! The value is split into bits, and each bit gets its own commitment `P_i`.
//! A 2-member ring `[P_i, P_i - 2^i*H]` per bit proves the bit is 0 or 1:
//! the signer knows the discrete log of exactly the member matching the bit.

use zeroize::Zeroizing;

use crate::internal_common::*;
use crate::signature::{
    RingSigner,
    BorromeanSignature
};
#[cfg(feature = "to_bytes")]
use crate::signature::Challenge;
#[cfg(feature = "to_bytes")]
use crate::tobytes::ByteReader;
use super::MAX_BIT_RANGE;

fn check_bit_range(bits: usize) -> Result<(), RangeProofError> {
    if bits == 0 || bits > MAX_BIT_RANGE {
        return Err(RangeProofError::InvalidBitRange)
    }
    return Ok(())
}

///The ring for bit `i`: "bit = 0" is `P_i`, "bit = 1" is `P_i - 2^i*H`.
fn bit_ring(commitment: &Commitment, i: usize) -> Result<Ring, RangeProofError> {
    let p_i = commitment.to_point();
    return Ok(Ring::new(vec!(p_i, p_i - PEDERSEN_H_POWERS[i]))?)
}

///Rangeproof based on Borromean ring signatures.
///
///Proves that a commitment `C = a*G + v*H` hides `0 <= v < 2^k`.
///The proof holds `k` bit commitments and one Borromean signature over `k` rings of 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorromeanRangeProof {
    bits: Vec<Commitment>, //P_i values
    sig: BorromeanSignature //signature

} impl BorromeanRangeProof {
    ///Create a Borromean rangeproof over `bits` bits, given a value and blinding factor.
    ///
    ///Return a commitment and a Borromean rangeproof if proving was successful,
    ///or `RangeProofError` if an error occurred.
    pub fn prove(value: u64, bits: usize, blinding: Scalar
    ) -> Result<(Commitment, Self), RangeProofError> {
        check_bit_range(bits)?;
        if bits < MAX_BIT_RANGE && value >> bits != 0 {
            return Err(RangeProofError::OutOfRange);
        }

        let mut blindings: Zeroizing<Vec<Scalar>> = Zeroizing::new(Vec::with_capacity(bits));
        let mut commitments: Vec<Commitment> = Vec::with_capacity(bits);
        let mut signers: Vec<RingSigner> = Vec::with_capacity(bits);

        for i in 0..bits {
            let bit = ((value >> i) & 1) as usize;

            //pick a_i; the last one makes them sum to the blinding factor
            let a_i = if i == bits - 1 {
                blinding - blindings.iter().fold(Scalar::ZERO, |total, a| total + *a)
            } else {
                random_scalar()
            };
            blindings.push(a_i);

            //P_i = a_i*G + 2^i*b_i*H
            let mut p_i = *PEDERSEN_G_POINT * a_i;
            if bit == 1 {
                p_i += PEDERSEN_H_POWERS[i];
            }
            let commitment = Commitment(p_i);

            signers.push(RingSigner::new(bit_ring(&commitment, i)?, bit, a_i)?);
            commitments.push(commitment);
        }

        //final commitment
        let commitment = Commitment::commit(value, blinding);
        assert!(commitments.iter().copied().sum::<Commitment>() == commitment,
            "bit commitments do not add up to the commitment");

        let sig = BorromeanSignature::sign(&signers, domains::RANGE_PROOF)?;

        return Ok((commitment, Self {
            bits: commitments,
            sig
        }))
    }

    ///Verify a Borromean rangeproof over `bits` bits given its associated commitment.
    ///
    ///Returns `Ok()` if the proof is valid,
    ///or `Err(RangeProofError)` if it's invalid.
    pub fn verify(&self, commitment: &Commitment, bits: usize) -> Result<(), RangeProofError> {
        check_bit_range(bits)?;
        if self.bits.len() != bits || self.sig.s().len() != bits {
            return Err(RangeProofError::Malformed)
        }

        //check if the bit-commitments equal the total commitment
        if self.bits.iter().copied().sum::<Commitment>() != *commitment {
            return Err(RangeProofError::Invalid)
        }

        let mut rings: Vec<Ring> = Vec::with_capacity(bits);
        for (i, bit) in self.bits.iter().enumerate() {
            rings.push(bit_ring(bit, i)?);
        }

        return Ok(self.sig.verify(&rings, domains::RANGE_PROOF)?)
    }

    ///Number of bits this proof covers.
    pub fn bit_range(&self) -> usize {
        return self.bits.len()
    }

    ///The per-bit commitments `P_0..P_{k-1}`.
    pub fn bit_commitments(&self) -> &[Commitment] {
        return &self.bits
    }

    ///The Borromean signature over the bit rings.
    pub fn signature(&self) -> &BorromeanSignature {
        return &self.sig
    }

    ///Decode a proof over `bits` bits from its wire layout (see `to_bytes`).
    #[cfg(feature = "to_bytes")]
    pub fn from_bytes_with_bits(bytes: &[u8], bits: usize) -> Result<Self, SerializationError> {
        if bits == 0 || bits > MAX_BIT_RANGE {
            return Err(SerializationError::InvalidLength)
        }
        if bytes.len() != Self::encoded_len(bits) {
            return Err(SerializationError::InvalidLength)
        }

        let mut reader = ByteReader::new(bytes);
        let mut commitments: Vec<Commitment> = Vec::with_capacity(bits);
        for _ in 0..bits {
            commitments.push(Commitment(reader.read_point()?));
        }
        let e_0 = Challenge::from(reader.read_array()?);
        let mut s: Vec<Vec<Scalar>> = Vec::with_capacity(bits);
        for _ in 0..bits {
            s.push(vec!(reader.read_scalar()?, reader.read_scalar()?));
        }
        reader.finish()?;

        return Ok(Self{
            bits: commitments,
            sig: BorromeanSignature::from_parts(e_0, s)
        })
    }

    ///`k` points, `e_0`, then `k` pairs of scalars
    #[cfg(feature = "to_bytes")]
    fn encoded_len(bits: usize) -> usize {
        return bits * POINT_BYTES + SCALAR_BYTES + bits * 2 * SCALAR_BYTES
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for BorromeanRangeProof {
    ///`P_0 || ... || P_{k-1} || e_0 || s_0 || ... || s_{k-1}`
    ///
    ///Points are 65 byte uncompressed, scalars are 32 bytes, and each `s_i` is the pair for ring `i`.
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        let mut bytes: Vec<u8> = Vec::with_capacity(Self::encoded_len(self.bits.len()));
        for commitment in &self.bits {
            bytes.extend_from_slice(&encode_point(&commitment.to_point())?);
        }
        bytes.extend_from_slice(self.sig.e_0().as_bytes());
        for ring in self.sig.s() {
            for s in ring {
                bytes.extend_from_slice(&encode_scalar(s));
            }
        }
        return Ok(bytes)
    }

    ///Decode a proof, inferring `k` from the length.
    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        let per_bit = POINT_BYTES + 2 * SCALAR_BYTES;
        if bytes.len() < SCALAR_BYTES || (bytes.len() - SCALAR_BYTES) % per_bit != 0 {
            return Err(SerializationError::InvalidLength)
        }
        return Self::from_bytes_with_bits(bytes, (bytes.len() - SCALAR_BYTES) / per_bit)
    }
}
