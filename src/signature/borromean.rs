/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Borromean ring signatures: many AOS rings sharing a single `e_0`

use crate::internal_common::*;
use super::aos::{
    Challenge,
    RingSigner,
    OpenRing,
    tail_point
};

///Drives the two signing phases over a fixed, ordered set of rings.
///
///Rings are always visited in order `0..k`,
///since the order of the tails determines the shared challenge.
struct Coordinator<'a> {
    msg: &'a [u8],
    open: Vec<OpenRing<'a>>

} impl<'a> Coordinator<'a> {
    fn new(msg: &'a [u8], rings: usize) -> Self {
        return Self{msg, open: Vec::with_capacity(rings)}
    }

    ///Phase 1: walk a ring from its signer up to its tail.
    fn open(&mut self, signer: &'a RingSigner) {
        self.open.push(signer.open(self.msg));
    }

    ///The shared challenge: `H(tail_0 || ... || tail_{k-1} || msg)`.
    fn challenge(&self) -> Challenge {
        let tails: Vec<ProjectivePoint> = self.open.iter()
            .map(|ring| *ring.tail()).collect();
        return Challenge::from_points(&tails, self.msg)
    }

    ///Phase 2: close every ring from the shared challenge.
    fn close(self, e_0: &Challenge) -> Vec<Vec<Scalar>> {
        let msg = self.msg;
        return self.open.into_iter()
            .map(|ring| ring.close(e_0, msg)).collect()
    }
}

///A Borromean ring signature: one shared `e_0`, and one list of responses per ring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorromeanSignature {
    e_0: Challenge,
    s: Vec<Vec<Scalar>>

} impl BorromeanSignature {
    ///Sign `msg` over every signer's ring at once.
    pub fn sign(signers: &[RingSigner], msg: &[u8]) -> Result<Self, SignatureError> {
        if signers.is_empty() {
            return Err(SignatureError::NoRings)
        }

        let mut coordinator = Coordinator::new(msg, signers.len());
        for signer in signers {
            coordinator.open(signer);
        }
        let e_0 = coordinator.challenge();
        let s = coordinator.close(&e_0);

        return Ok(Self{e_0, s})
    }

    ///Verify this signature against the rings, given in the same order they were signed in.
    ///
    ///Returns `Ok()` if the signature is valid,
    ///or `Err(SignatureError)` if it's invalid.
    pub fn verify(&self, rings: &[Ring], msg: &[u8]) -> Result<(), SignatureError> {
        if rings.is_empty() {
            return Err(SignatureError::NoRings)
        }
        if rings.len() != self.s.len() {
            return Err(SignatureError::Malformed)
        }

        let mut tails: Vec<ProjectivePoint> = Vec::with_capacity(rings.len());
        for (ring, s) in rings.iter().zip(&self.s) {
            if ring.len() != s.len() {
                return Err(SignatureError::Malformed)
            }
            tails.push(tail_point(ring, &self.e_0, s, msg));
        }

        //recreate e_0, the shared seed
        return match Challenge::from_points(&tails, msg) == self.e_0 {
            true => Ok(()),
            false => Err(SignatureError::Invalid)
        }
    }

    ///The shared challenge.
    pub fn e_0(&self) -> &Challenge {
        return &self.e_0
    }

    ///Responses, one list per ring.
    pub fn s(&self) -> &[Vec<Scalar>] {
        return &self.s
    }

    ///Build a signature from its parts, e.g. after decoding.
    #[cfg(feature = "to_bytes")]
    pub(crate) fn from_parts(e_0: Challenge, s: Vec<Vec<Scalar>>) -> Self {
        return Self{e_0, s}
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for BorromeanSignature {}
