// SPDX short identifier: Unlicense

use stealthring::address::{
    ECDHPrivateKey,
    StealthIdentity
};

fn main() {
    //Create the recipient's keys, and publish the public half
    let recipient = StealthIdentity::generate();
    let public = recipient.to_public();

    //The sender draws an ephemeral key, and derives a one-time address from it
    let ephemeral = ECDHPrivateKey::generate();
    let output = public.derive_output_with_ephemeral(&ephemeral, 25)
        .expect("Real software should have proper error handling.");

    //Only the recipient can link the output back to them, and spend from it
    let one_time = recipient.receive(&output)
        .expect("Real software should have proper error handling.");
    assert!(one_time.address() == output.address);

    //Another payment to the same recipient lands on a different address
    let other = public.derive_output(25)
        .expect("Real software should have proper error handling.");
    assert!(other.address != output.address);


    //View-only key: can recognize all incoming payments, but does not control the private spending key.
    let view_only = recipient.to_view_only();
    assert!(view_only.to_public() == public);
    assert!(view_only.owns(&output));
    assert!(view_only.owns(&other));
}
