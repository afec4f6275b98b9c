// SPDX short identifier: Unlicense

use stealthring::{
    curve::{
        G_POINT,
        Scalar,
        Random,
        random_point
    },
    signature::{
        RingSigner,
        RingSignature
    }
};

fn main() {
    //The signer's own key pair
    let secret = Scalar::generate();
    let public = G_POINT * secret;

    //Hide it among other people's public keys. Only one private key is needed.
    let signer = RingSigner::from_keys(vec!(
        (None, random_point()),
        (None, random_point()),
        (Some(secret), public),
        (None, random_point())
    )).expect("Real software should have proper error handling.");

    //Sign a message
    let msg = "Hello world!".as_bytes();
    let signature = RingSignature::sign(&signer, msg);

    //Anyone with the ring can verify the signature,
    //but can't tell which of the 4 keys made it.
    signature.verify(signer.ring(), msg)
        .expect("Real software should have proper error handling.");

    //The signature only covers the message it was made over
    assert!(signature.verify(signer.ring(), "Hello world?".as_bytes()).is_err());
}
