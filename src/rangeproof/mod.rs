/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Cryptographic proofs which demonstrate that the amount committed to in a pedersen commitment is non-negative
//! and fits in `k` bits.

mod borromean;

pub use borromean::BorromeanRangeProof;

///Bit range used when none is specified: values up to 255.
pub const DEFAULT_BIT_RANGE: usize = 8;

///Largest supported bit range. Values never exceed `u64`.
//Proof size and proving/verification time grow linearly with the bit range.
pub const MAX_BIT_RANGE: usize = 64;

///Largest value which fits in `bits` bits: 2<sup>`bits`</sup> - 1
pub fn max_value(bits: usize) -> u64 {
    return ((1u128 << bits.min(MAX_BIT_RANGE)) - 1) as u64
}
