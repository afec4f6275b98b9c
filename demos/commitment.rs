// SPDX short identifier: Unlicense

use stealthring::{
    curve::{
        Scalar,
        random_scalar
    },
    Commitment,
};

fn main() {
    //Value of the Pedersen commitment
    let value: u64 = 123;
    //Blinding factor of the Pedersen commitment
    let blinding: Scalar = random_scalar();

    //Create a commitment
    let commitment = Commitment::commit(value, blinding);

    //Create another commitment with the same blinding factor, but different value
    let commitment2 = Commitment::commit(120, blinding);

    //Verify that the "equation" is balanced: c1 == c2 + extra.
    //Both the values and blinding factors must be perfectly balanced on each side.
    assert!(Commitment::is_balanced(vec!(commitment), vec!(commitment2), 3));


    //Commitments add up like the values they hide:
    //commit(v1, a1) + commit(v2, a2) == commit(v1 + v2, a1 + a2)
    let blinding1 = random_scalar();
    let blinding2 = random_scalar();
    let sum = Commitment::commit(1000, blinding1) + Commitment::commit(750, blinding2);
    assert!(sum == Commitment::commit(1750, blinding1 + blinding2));

    //and subtract the same way
    assert!(sum - Commitment::commit(750, blinding2) == Commitment::commit(1000, blinding1));


    //Split a balance into two parts, without revealing either part:
    let out_blinding_1 = random_scalar();
    let out_blinding_2 = blinding1 - out_blinding_1;

    let outs = vec!(
        Commitment::commit(600, out_blinding_1),
        Commitment::commit(400, out_blinding_2)
    );
    assert!(Commitment::is_balanced(vec!(Commitment::commit(1000, blinding1)), outs, 0));
}
