/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Abe-Ohkubo-Suzuki (AOS) ring signatures

use zeroize::{
    Zeroize,
    Zeroizing
};

use crate::internal_common::*;
#[cfg(feature = "to_bytes")]
use crate::tobytes::ByteReader;

///A challenge in the AOS hash chain.
///
///This is the raw SHA-256 digest, **not** reduced mod `n`.
///It is only reduced when it gets multiplied into a point,
///so two challenges are equal only if their digests are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Challenge(
    [u8; 32]

); impl Challenge {
    ///`H(P_0 || ... || P_k || msg)`
    pub(crate) fn from_points(points: &[ProjectivePoint], msg: &[u8]) -> Self {
        return Self(h_points(points, msg))
    }

    ///One step of the hash chain: `H(P || msg)`
    pub(crate) fn step(point: &ProjectivePoint, msg: &[u8]) -> Self {
        return Self::from_points(std::slice::from_ref(point), msg)
    }

    ///The challenge reduced mod `n`.
    pub fn as_scalar(&self) -> Scalar {
        return scalar_from_digest(&self.0)
    }

    ///The raw digest.
    pub fn as_bytes(&self) -> &[u8; 32] {
        return &self.0
    }

} impl From<[u8; 32]> for Challenge {
    fn from(digest: [u8; 32]) -> Self {
        return Self(digest)
    }
}

///`s*G + e*P`
pub(crate) fn chain_point(s: &Scalar, e: &Challenge, key: &ProjectivePoint) -> ProjectivePoint {
    return (G_POINT * *s) + (*key * e.as_scalar())
}

///Walk a ring forward from `e_0` and return the last point of the chain,
///the one which hashes back into `e_0`.
///
///`s` must have exactly one entry per ring member.
pub(crate) fn tail_point(ring: &Ring, e_0: &Challenge, s: &[Scalar], msg: &[u8]) -> ProjectivePoint {
    let keys = ring.keys();
    let last = keys.len() - 1;

    let mut e = *e_0;
    for i in 0..last {
        e = Challenge::step(&chain_point(&s[i], &e, &keys[i]), msg);
    }
    return chain_point(&s[last], &e, &keys[last])
}


///A ring, together with the one private key the signer knows.
///
///The private key is erased from memory when this is dropped.
pub struct RingSigner {
    ring: Ring,
    index: usize,
    secret: Scalar

} impl RingSigner {
    ///Create a signer for `ring`, knowing the private key of the member at `index`.
    pub fn new(ring: Ring, index: usize, secret: Scalar) -> Result<Self, SignatureError> {
        if index >= ring.len() {
            return Err(SignatureError::IndexOutOfRange)
        }
        if G_POINT * secret != ring.keys()[index] {
            return Err(SignatureError::KeyMismatch)
        }
        return Ok(Self{ring, index, secret})
    }

    ///Create a signer from `(private key, public key)` pairs.
    ///
    ///Exactly one pair must carry its private key.
    pub fn from_keys(mut keys: Vec<(Option<Scalar>, ProjectivePoint)>) -> Result<Self, SignatureError> {
        let known: Vec<usize> = keys.iter().enumerate()
            .filter_map(|(i, (secret, _))| secret.map(|_| i))
            .collect();
        let secret: Zeroizing<Option<Scalar>> = Zeroizing::new(match known.as_slice() {
            [index] => keys[*index].0,
            _ => None
        });

        let signer = Ring::new(keys.iter().map(|(_, key)| *key).collect())
            .and_then(|ring| match (known.len(), *secret) {
                (1, Some(secret)) => Self::new(ring, known[0], secret),
                (0, _) => Err(SignatureError::NoKnownSecret),
                _ => Err(SignatureError::MultipleKnownSecrets)
            });

        //the caller's copies of the private keys
        for (secret, _) in keys.iter_mut() {
            secret.zeroize();
        }
        return signer
    }

    ///The ring being signed for.
    pub fn ring(&self) -> &Ring {
        return &self.ring
    }

    ///First half of signing: start at `j + 1` and walk to the end of the ring.
    ///
    ///The returned `OpenRing` holds the point that will hash into `e_0`.
    ///A fresh nonce is drawn on every call.
    pub(crate) fn open(&self, msg: &[u8]) -> OpenRing<'_> {
        let keys = self.ring.keys();
        let nonce = random_scalar();
        let mut s = vec![Scalar::ZERO; keys.len()];

        let mut point = G_POINT * nonce;
        for i in (self.index + 1)..keys.len() {
            let e = Challenge::step(&point, msg);
            s[i] = random_scalar();
            point = chain_point(&s[i], &e, &keys[i]);
        }

        return OpenRing{
            signer: self,
            nonce,
            s,
            tail: point
        }
    }

} impl Drop for RingSigner {
    fn drop(&mut self) {
        self.secret.zeroize()
    }
}

///A ring which is halfway signed: waiting for `e_0`.
pub(crate) struct OpenRing<'a> {
    signer: &'a RingSigner,
    nonce: Scalar,
    s: Vec<Scalar>,
    tail: ProjectivePoint

} impl OpenRing<'_> {
    ///The last point of the chain, which hashes into `e_0`.
    pub fn tail(&self) -> &ProjectivePoint {
        return &self.tail
    }

    ///Second half of signing: walk from `e_0` up to `j`, then tie the ring with the private key.
    ///
    ///Consumes the ring, so a nonce can never close two chains.
    pub fn close(mut self, e_0: &Challenge, msg: &[u8]) -> Vec<Scalar> {
        let keys = self.signer.ring.keys();
        let j = self.signer.index;

        let mut e = *e_0;
        for i in 0..j {
            self.s[i] = random_scalar();
            e = Challenge::step(&chain_point(&self.s[i], &e, &keys[i]), msg);
        }

        //s_j = a - e_j * x_j
        self.s[j] = self.nonce - (e.as_scalar() * self.signer.secret);

        //s_j*G + e_j*P_j must land back on a*G, whatever e_0 was
        debug_assert!(chain_point(&self.s[j], &e, &keys[j]) == G_POINT * self.nonce);

        return std::mem::take(&mut self.s)
    }

} impl Drop for OpenRing<'_> {
    fn drop(&mut self) {
        self.nonce.zeroize()
    }
}


///An AOS ring signature: `(e_0, s_0..s_{m-1})`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingSignature {
    e_0: Challenge,
    s: Vec<Scalar>

} impl RingSignature {
    ///Sign `msg` with the signer's ring.
    pub fn sign(signer: &RingSigner, msg: &[u8]) -> Self {
        let open = signer.open(msg);
        //a lone ring closes onto its own tail
        let e_0 = Challenge::step(open.tail(), msg);
        let s = open.close(&e_0, msg);

        return Self{e_0, s}
    }

    ///Verify this signature against a ring.
    ///
    ///Returns `Ok()` if the signature is valid,
    ///or `Err(SignatureError)` if it's invalid.
    pub fn verify(&self, ring: &Ring, msg: &[u8]) -> Result<(), SignatureError> {
        if self.s.len() != ring.len() {
            return Err(SignatureError::Malformed)
        }

        let tail = tail_point(ring, &self.e_0, &self.s, msg);

        //check if we end up back where we started
        return match Challenge::step(&tail, msg) == self.e_0 {
            true => Ok(()),
            false => Err(SignatureError::Invalid)
        }
    }

    ///The challenge which starts the chain at index 0.
    pub fn e_0(&self) -> &Challenge {
        return &self.e_0
    }

    ///One response per ring member.
    pub fn s(&self) -> &[Scalar] {
        return &self.s
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for RingSignature {
    ///`e_0 || s_0 || ... || s_{m-1}`, 32 bytes each.
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        let mut bytes: Vec<u8> = Vec::with_capacity(SCALAR_BYTES * (self.s.len() + 1));
        bytes.extend_from_slice(self.e_0.as_bytes());
        for s in &self.s {
            bytes.extend_from_slice(&encode_scalar(s));
        }
        return Ok(bytes)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        //e_0 and at least 2 responses
        if bytes.len() % SCALAR_BYTES != 0 || bytes.len() < 3 * SCALAR_BYTES {
            return Err(SerializationError::InvalidLength)
        }

        let mut reader = ByteReader::new(bytes);
        let e_0 = Challenge(reader.read_array()?);
        let mut s: Vec<Scalar> = Vec::new();
        for _ in 1..(bytes.len() / SCALAR_BYTES) {
            s.push(reader.read_scalar()?);
        }
        reader.finish()?;

        return Ok(Self{e_0, s})
    }
}
