// SPDX short identifier: Unlicense

use stealthring::{
    curve::{
        Scalar,
        Random
    },
    rangeproof::{
        BorromeanRangeProof,
        DEFAULT_BIT_RANGE
    }
};

fn main() {
    //See the pedersen commitment example before this

    //Create a rangeproof, proving that the given value fits in 8 bits (between 0 and 255)
    let (commitment, proof) = BorromeanRangeProof::prove(
        123,                //value of the Pedersen commitment
        DEFAULT_BIT_RANGE,  //number of bits
        Scalar::generate()  //blinding factor of the Pedersen commitment
    ).expect("Real software should have proper error handling.");

    //Verify the rangeproof
    proof.verify(&commitment, DEFAULT_BIT_RANGE)
        .expect("Real software should have proper error handling.");

    //Proofs grow linearly with the number of bits
    let (commitment, proof) = BorromeanRangeProof::prove(
        1234567890,
        32,
        Scalar::generate()
    ).expect("Real software should have proper error handling.");
    proof.verify(&commitment, 32)
        .expect("Real software should have proper error handling.");

    //A value too large for the bit range can't be proven
    assert!(BorromeanRangeProof::prove(256, DEFAULT_BIT_RANGE, Scalar::generate()).is_err());
}
