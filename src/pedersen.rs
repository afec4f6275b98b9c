/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!Pedersen commitments
//!
//!`C = a*G + v*H`, where `H` is the blinding base.
//!`H` is the fixed multiple `H_MULTIPLIER * G`, so its discrete log with respect to `G` is public:
//!commitments made with it are only hiding as long as `H` is treated as a given constant.
//!A production deployment needs an `H` with no known relation to `G`.

use crate::curve::*;

///`H = H_MULTIPLIER * G`
pub const H_MULTIPLIER: u64 = 100;

lazy_static! {
    pub static ref PEDERSEN_G_POINT: ProjectivePoint = pedersen_g_point();
    pub static ref PEDERSEN_H_POINT: ProjectivePoint = pedersen_h_point();
    ///`2^i * H` for every bit position a value can occupy.
    pub(crate) static ref PEDERSEN_H_POWERS: Vec<ProjectivePoint> = pedersen_h_powers();
}

///get `H`
fn pedersen_h_point() -> ProjectivePoint {
    return G_POINT * Scalar::from(H_MULTIPLIER);
}

///get `G`
fn pedersen_g_point() -> ProjectivePoint {
    return G_POINT;
}

///get `2^i * H` for `i` in `0..64`
fn pedersen_h_powers() -> Vec<ProjectivePoint> {
    let mut powers: Vec<ProjectivePoint> = Vec::with_capacity(64);
    let mut power = *PEDERSEN_H_POINT;
    for _ in 0..64 {
        powers.push(power);
        power = power.double();
    }
    return powers
}

///The Pedersen blinding base `H`.
pub fn blinding_base() -> ProjectivePoint {
    return *PEDERSEN_H_POINT
}
