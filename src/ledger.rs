/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! A minimal confidential ledger
//!
//! Balances are pedersen commitments keyed by address.
//! A transfer splits the sender's balance into the amount sent and the new balance,
//! and proves both are in range, so no value is created and nothing goes negative.

use std::collections::HashMap;

use log::{debug, info, warn};

use crate::internal_common::*;
use crate::rangeproof::{
    BorromeanRangeProof,
    DEFAULT_BIT_RANGE
};
use crate::address::{
    Address,
    StealthOutput,
    StealthPublic
};

///Everything a sender hands the ledger to move funds.
/// * `amount`: commitment to the amount sent, `T = α*G + t*H`
/// * `amount_proof`: rangeproof over `amount`
/// * `new_balance`: commitment to what the sender keeps, `B - T`
/// * `new_balance_proof`: rangeproof over `new_balance`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferBundle {
    pub amount: Commitment,
    pub amount_proof: BorromeanRangeProof,
    pub new_balance: Commitment,
    pub new_balance_proof: BorromeanRangeProof

} impl TransferBundle {
    ///Build a transfer of `amount` out of a balance with value `balance_value`
    ///and blinding factor `balance_blinding`, with rangeproofs over `bits` bits.
    ///
    ///Returns the bundle, and the sender's new balance value and blinding factor.
    pub fn create(balance_value: u64, balance_blinding: Scalar, amount: u64, bits: usize
    ) -> Result<(Self, u64, Scalar), RangeProofError> {
        if amount > balance_value {
            return Err(RangeProofError::OutOfRange)
        }

        let amount_blinding = random_scalar();
        let (amount_commitment, amount_proof) = BorromeanRangeProof::prove(amount, bits, amount_blinding)?;

        let new_value = balance_value - amount;
        let new_blinding = balance_blinding - amount_blinding;
        let (new_balance, new_balance_proof) = BorromeanRangeProof::prove(new_value, bits, new_blinding)?;

        return Ok((
            Self {
                amount: amount_commitment,
                amount_proof,
                new_balance,
                new_balance_proof
            },
            new_value,
            new_blinding
        ))
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for TransferBundle {}


///Balances, and the stealth outputs published so far.
#[derive(Debug, Clone)]
pub struct Ledger {
    bit_range: usize,
    balances: HashMap<Address, Commitment>,
    outputs: Vec<StealthOutput>

} impl Ledger {
    ///Create an empty ledger which checks rangeproofs over `bit_range` bits.
    pub fn new(bit_range: usize) -> Self {
        return Self {
            bit_range,
            balances: HashMap::new(),
            outputs: Vec::new()
        }
    }

    ///The bit range every transfer's rangeproofs must cover.
    pub fn bit_range(&self) -> usize {
        return self.bit_range
    }

    ///Register a new balance.
    pub fn deposit(&mut self, address: Address, commitment: Commitment) -> Result<(), LedgerError> {
        if self.balances.contains_key(&address) {
            warn!("deposit rejected: {} already has a balance", address);
            return Err(LedgerError::AccountExists)
        }

        info!("deposit to {}", address);
        self.balances.insert(address, commitment);
        return Ok(())
    }

    ///Move funds from `from` to `to`.
    ///
    ///A rejected transfer leaves every balance as it was.
    pub fn send(&mut self, from: &Address, to: &Address, bundle: &TransferBundle) -> Result<(), LedgerError> {
        if let Err(err) = self.check_transfer(from, bundle) {
            warn!("transfer from {} to {} rejected: {}", from, to, err);
            return Err(err)
        }

        self.balances.insert(from.clone(), bundle.new_balance);
        let credited = match self.balances.get(to) {
            Some(balance) => *balance + bundle.amount,
            None => bundle.amount
        };
        self.balances.insert(to.clone(), credited);

        info!("transfer from {} to {}", from, to);
        debug!("new balance of {}: {:?}", from, bundle.new_balance);
        return Ok(())
    }

    fn check_transfer(&self, from: &Address, bundle: &TransferBundle) -> Result<(), LedgerError> {
        let balance = self.balances.get(from).ok_or(LedgerError::UnknownAccount)?;

        //B - T == B'
        if *balance - bundle.amount != bundle.new_balance {
            return Err(LedgerError::Unbalanced)
        }

        bundle.amount_proof.verify(&bundle.amount, self.bit_range)?;
        bundle.new_balance_proof.verify(&bundle.new_balance, self.bit_range)?;
        return Ok(())
    }

    ///Derive a one-time output paying `amount` to `recipient`, and publish it.
    pub fn derive_stealth_output(&mut self, recipient: &StealthPublic, amount: u64
    ) -> Result<StealthOutput, LedgerError> {
        let output = recipient.derive_output(amount)?;
        info!("stealth output published to {}", output.address);
        self.outputs.push(output.clone());
        return Ok(output)
    }

    ///Every stealth output published so far, oldest first.
    pub fn outputs(&self) -> &[StealthOutput] {
        return &self.outputs
    }

    ///The balance commitment of `address`, if it has one.
    pub fn balance(&self, address: &Address) -> Option<Commitment> {
        return self.balances.get(address).copied()
    }

} impl Default for Ledger {
    fn default() -> Self {
        return Self::new(DEFAULT_BIT_RANGE)
    }
}
