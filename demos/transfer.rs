// SPDX short identifier: Unlicense

use stealthring::{
    curve::random_scalar,
    address::{
        Account,
        StealthIdentity
    },
    ledger::{
        Ledger,
        TransferBundle
    },
    Commitment
};

fn main() {
    let mut ledger = Ledger::default();

    //Alice deposits 100, keeping the blinding factor to herself
    let alice = Account::generate();
    let blinding = random_scalar();
    ledger.deposit(alice.address(), Commitment::commit(100, blinding))
        .expect("Real software should have proper error handling.");

    //Alice sends 30 to Bob.
    //Nobody but Alice learns the amount, or what she has left.
    let bob = Account::generate();
    let (bundle, value, blinding) = TransferBundle::create(100, blinding, 30, ledger.bit_range())
        .expect("Real software should have proper error handling.");
    ledger.send(&alice.address(), &bob.address(), &bundle)
        .expect("Real software should have proper error handling.");
    assert!(ledger.balance(&alice.address()) == Some(Commitment::commit(value, blinding)));

    //Spending more than the balance can't be proven
    assert!(TransferBundle::create(value, blinding, 71, ledger.bit_range()).is_err());


    //Pay Carol to a one-time address
    let carol = StealthIdentity::generate();
    ledger.derive_stealth_output(&carol.to_public(), 5)
        .expect("Real software should have proper error handling.");

    //Carol scans the published outputs for her own
    let received: Vec<Account> = ledger.outputs().iter()
        .filter_map(|output| carol.receive(output))
        .collect();
    assert!(received.len() == 1);
}
