/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!Ring signatures
//!
//!Given a ring of public keys and the private key of one of them,
//!prove knowledge of that private key without revealing which member it belongs to.
//!
//! * `RingSignature` is a single AOS ring.
//! * `BorromeanSignature` ties many rings together with one shared challenge.

mod aos;
mod borromean;

pub use aos::{
    Challenge,
    RingSigner,
    RingSignature
};
pub use borromean::BorromeanSignature;
