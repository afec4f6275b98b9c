// SPDX short identifier: Unlicense

#![allow(unused, unused_mut)]

use stealthring::{
    common::*,
    address::{
        Account,
        StealthIdentity
    },
    rangeproof::{
        BorromeanRangeProof,
        DEFAULT_BIT_RANGE
    },
    ledger::{
        Ledger,
        TransferBundle
    }
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

///A ledger where `alice` holds `value`, committed to with `blinding`.
fn funded_ledger(value: u64, blinding: Scalar) -> (Ledger, Account) {
    let mut ledger = Ledger::default();
    let alice = Account::generate();
    ledger.deposit(alice.address(), Commitment::commit(value, blinding)).unwrap();
    return (ledger, alice)
}

#[test]
fn transfer_test() {
    init_logging();
    let blinding = random_scalar();
    let (mut ledger, alice) = funded_ledger(100, blinding);
    let bob = Account::generate();

    //alice -> bob
    let (bundle, alice_value, alice_blinding) = TransferBundle::create(100, blinding, 30, DEFAULT_BIT_RANGE).unwrap();
    assert_eq!(alice_value, 70);
    ledger.send(&alice.address(), &bob.address(), &bundle).unwrap();
    assert_eq!(ledger.balance(&alice.address()), Some(Commitment::commit(70, alice_blinding)));
    assert_eq!(ledger.balance(&bob.address()), Some(bundle.amount));

    //the sender hands the amount's blinding factor to the recipient
    let bob_blinding = blinding - alice_blinding;
    assert_eq!(bundle.amount, Commitment::commit(30, bob_blinding));

    //bob -> alice, into an existing balance
    let (bundle, bob_value, bob_new_blinding) = TransferBundle::create(30, bob_blinding, 10, DEFAULT_BIT_RANGE).unwrap();
    ledger.send(&bob.address(), &alice.address(), &bundle).unwrap();
    assert_eq!(bob_value, 20);
    assert_eq!(ledger.balance(&bob.address()), Some(Commitment::commit(20, bob_new_blinding)));
    assert_eq!(ledger.balance(&alice.address()),
        Some(Commitment::commit(80, alice_blinding + bob_blinding - bob_new_blinding)));

    //everything that's left
    let (bundle, value, empty_blinding) = TransferBundle::create(20, bob_new_blinding, 20, DEFAULT_BIT_RANGE).unwrap();
    assert_eq!(value, 0);
    ledger.send(&bob.address(), &alice.address(), &bundle).unwrap();
    assert_eq!(ledger.balance(&bob.address()), Some(Commitment::commit(0, empty_blinding)));
    assert_eq!(ledger.balance(&alice.address()), Some(Commitment::commit(100, blinding - empty_blinding)));
}

#[test]
fn rejected_transfer_test() {
    init_logging();
    let blinding = random_scalar();
    let (mut ledger, alice) = funded_ledger(100, blinding);
    let bob = Account::generate();
    let before = ledger.balance(&alice.address());

    //unknown sender
    let (bundle, _, _) = TransferBundle::create(100, blinding, 30, DEFAULT_BIT_RANGE).unwrap();
    assert_eq!(ledger.send(&bob.address(), &alice.address(), &bundle).unwrap_err(), LedgerError::UnknownAccount);

    //built from the wrong balance
    let (wrong, _, _) = TransferBundle::create(99, blinding, 30, DEFAULT_BIT_RANGE).unwrap();
    assert_eq!(ledger.send(&alice.address(), &bob.address(), &wrong).unwrap_err(), LedgerError::Unbalanced);

    //proofs swapped around
    let mut swapped = bundle.clone();
    std::mem::swap(&mut swapped.amount_proof, &mut swapped.new_balance_proof);
    assert_eq!(ledger.send(&alice.address(), &bob.address(), &swapped).unwrap_err(),
        LedgerError::RangeProof(RangeProofError::Invalid));

    //proofs over the wrong bit range
    let (wide, _, _) = TransferBundle::create(100, blinding, 30, 16).unwrap();
    assert_eq!(ledger.send(&alice.address(), &bob.address(), &wide).unwrap_err(),
        LedgerError::RangeProof(RangeProofError::Malformed));

    //nothing moved
    assert_eq!(ledger.balance(&alice.address()), before);
    assert_eq!(ledger.balance(&bob.address()), None);

    //the real one goes through, once
    ledger.send(&alice.address(), &bob.address(), &bundle).unwrap();
    assert_eq!(ledger.send(&alice.address(), &bob.address(), &bundle).unwrap_err(), LedgerError::Unbalanced);
    assert_eq!(ledger.balance(&bob.address()), Some(bundle.amount));
}

#[test]
fn negative_amount_test() {
    //sending "-10" would need a proof for a value that wraps around the group order
    let blinding = random_scalar();
    let (mut ledger, alice) = funded_ledger(100, blinding);
    let bob = Account::generate();

    let amount_blinding = random_scalar();
    let amount = Commitment::commit(0, amount_blinding) - Commitment::commit(10, Scalar::ZERO);
    let (new_balance, new_balance_proof) = BorromeanRangeProof::prove(110, DEFAULT_BIT_RANGE, blinding - amount_blinding).unwrap();
    let (_, amount_proof) = BorromeanRangeProof::prove(10, DEFAULT_BIT_RANGE, amount_blinding).unwrap();

    let bundle = TransferBundle{amount, amount_proof, new_balance, new_balance_proof};
    assert_eq!(ledger.send(&alice.address(), &bob.address(), &bundle).unwrap_err(),
        LedgerError::RangeProof(RangeProofError::Invalid));
    assert_eq!(ledger.balance(&bob.address()), None);
}

#[test]
fn create_errors_test() {
    let blinding = random_scalar();
    assert_eq!(TransferBundle::create(10, blinding, 11, DEFAULT_BIT_RANGE).unwrap_err(), RangeProofError::OutOfRange);
    //what's left doesn't fit in 8 bits
    assert_eq!(TransferBundle::create(1000, blinding, 1, DEFAULT_BIT_RANGE).unwrap_err(), RangeProofError::OutOfRange);
    assert_eq!(TransferBundle::create(10, blinding, 1, 0).unwrap_err(), RangeProofError::InvalidBitRange);
}

#[test]
fn deposit_test() {
    init_logging();
    let blinding = random_scalar();
    let (mut ledger, alice) = funded_ledger(5, blinding);
    assert_eq!(ledger.bit_range(), DEFAULT_BIT_RANGE);
    assert_eq!(ledger.balance(&alice.address()), Some(Commitment::commit(5, blinding)));

    assert_eq!(ledger.deposit(alice.address(), Commitment::commit(1, random_scalar())).unwrap_err(),
        LedgerError::AccountExists);
    assert_eq!(ledger.balance(&alice.address()), Some(Commitment::commit(5, blinding)));

    let wide = Ledger::new(32);
    assert_eq!(wide.bit_range(), 32);
}

#[test]
fn stealth_output_test() {
    init_logging();
    let mut ledger = Ledger::default();
    let identity = StealthIdentity::generate();
    let stranger = StealthIdentity::generate();

    let output = ledger.derive_stealth_output(&identity.to_public(), 25).unwrap();
    ledger.derive_stealth_output(&stranger.to_public(), 3).unwrap();
    assert_eq!(ledger.outputs().len(), 2);
    assert_eq!(ledger.outputs()[0], output);

    //the recipient finds their output, and only theirs
    let mine: Vec<Account> = ledger.outputs().iter()
        .filter_map(|output| identity.receive(output)).collect();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].address(), output.address);
    assert_eq!(output.amount, 25);

    //the one-time account can hold a balance like any other
    let blinding = random_scalar();
    ledger.deposit(mine[0].address(), Commitment::commit(output.amount, blinding)).unwrap();
}

#[cfg(feature = "to_bytes")]
#[test]
fn bundle_serialization_test() {
    let (bundle, _, _) = TransferBundle::create(50, random_scalar(), 5, DEFAULT_BIT_RANGE).unwrap();
    let serialized = bundle.to_bytes().unwrap();
    assert_eq!(TransferBundle::from_bytes(&serialized).unwrap(), bundle);
}
