/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use sha2::{
    Sha256,
    Digest
};
use ripemd::Ripemd160;
use crate::curve::*;

///Hash bytes to bytes (SHA-256).
pub fn h_bytes(msg: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(msg);
    return hasher.finalize().into();
}

///Hash the coordinates of a point to bytes: `SHA256(X || Y)`.
pub fn h_point(point: &ProjectivePoint) -> [u8; 32] {
    return h_bytes(&point_coordinates(point));
}

///Hash a sequence of points followed by a message:
///`SHA256(X_0 || Y_0 || ... || X_k || Y_k || msg)`.
///
///With a single point, this is the AOS hash step.
pub fn h_points(points: &[ProjectivePoint], msg: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for point in points {
        hasher.update(point_coordinates(point));
    }
    hasher.update(msg);
    return hasher.finalize().into();
}

///`SHA256(SHA256(msg))`, as used by base58check.
pub fn double_sha256(msg: &[u8]) -> [u8; 32] {
    return h_bytes(&h_bytes(msg));
}

///`RIPEMD160(SHA256(msg))`
pub fn hash160(msg: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(h_bytes(msg));
    return hasher.finalize().into();
}

pub mod domains {
    //! Pre-defined hash domains

    ///Message signed by every range proof's Borromean signature.
    pub const RANGE_PROOF: &[u8] =                      "signature".as_bytes();
}
