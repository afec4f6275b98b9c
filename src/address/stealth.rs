/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Dual-key stealth addresses
//!
//! A recipient publishes two public keys, `Q_s` (spend) and `Q_v` (view).
//! For every payment the sender draws an ephemeral `r`, publishes `R = r*G`,
//! and pays to the one-time key `P = H(r*Q_v)*G + Q_s`.
//! Only the holder of `d_v` can recognize `P`, and only the holder of `d_s` as well can spend from it.

use crate::internal_common::*;
use super::{
    ecdh::*,
    Account,
    Address,
    StealthOutput
};

///Private keys of a stealth identity.
///
///These keys can view *and* spend funds sent to this identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StealthIdentity {
    spend: Account,
    view: Account

} impl StealthIdentity {
    ///Generate a random new identity.
    pub fn generate() -> Self {
        return Self {
            spend: Account::generate(),
            view: Account::generate()
        }
    }

    ///Create an identity from a spend secret `d_s` and a view secret `d_v`.
    pub fn from_secrets(spend: Scalar, view: Scalar) -> Result<Self, SerializationError> {
        return Ok(Self {
            spend: Account::from_secret(spend)?,
            view: Account::from_secret(view)?
        })
    }

    ///The spend key pair.
    pub fn spend(&self) -> &Account {
        return &self.spend
    }

    ///The view key pair.
    pub fn view(&self) -> &Account {
        return &self.view
    }

    ///Convert these private keys into the public identity `(Q_s, Q_v)`.
    pub fn to_public(&self) -> StealthPublic {
        return StealthPublic {
            spend: self.spend.public_point(),
            view: self.view.public_point()
        }
    }

    ///Convert these private keys into a view-only key.
    pub fn to_view_only(&self) -> StealthViewKey {
        return StealthViewKey {
            view: self.view.clone(),
            spend: self.spend.public_point()
        }
    }

    ///Given a sender's ephemeral public key `R`, calculate the shared secret `H(d_v*R)`.
    pub fn shared_secret(&self, ephemeral: &ProjectivePoint) -> SharedSecret {
        return SharedSecret::get(self.view.secret(), ephemeral)
    }

    ///Derive the key pair of the one-time address paid to with ephemeral key `R`:
    ///`d_p = H(d_v*R) + d_s`.
    pub fn one_time_account(&self, ephemeral: &ProjectivePoint) -> Result<Account, SerializationError> {
        let shared_secret = self.shared_secret(ephemeral);
        let owner = ECDHPrivateKey::from_scalar(self.spend.secret()).derive_key(&shared_secret);
        return Account::from_secret(owner.as_scalar())
    }

    ///"Receive" a payment.
    ///
    ///Returns `Some(Account)` able to spend the output if it belongs to these keys, or `None` if not.
    pub fn receive(&self, output: &StealthOutput) -> Option<Account> {
        let account = self.one_time_account(&output.ephemeral).ok()?;
        return match account.address() == output.address {
            true => Some(account),
            false => None
        }
    }
}


///Private view-only key of a stealth identity: `d_v` and `Q_s`.
///
///This key can only *recognize* funds sent to this identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StealthViewKey {
    view: Account,
    spend: ProjectivePoint

} impl StealthViewKey {
    ///Convert this view key into the public identity.
    pub fn to_public(&self) -> StealthPublic {
        return StealthPublic {
            spend: self.spend,
            view: self.view.public_point()
        }
    }

    ///Given a sender's ephemeral public key `R`, calculate the shared secret `H(d_v*R)`.
    pub fn shared_secret(&self, ephemeral: &ProjectivePoint) -> SharedSecret {
        return SharedSecret::get(self.view.secret(), ephemeral)
    }

    ///Check if an output was paid to this identity.
    pub fn owns(&self, output: &StealthOutput) -> bool {
        let shared_secret = self.shared_secret(&output.ephemeral);
        let owner = ECDHPublicKey::from_point(self.spend).derive_key(&shared_secret);
        return match Address::from_point(&owner.as_point()) {
            Ok(address) => address == output.address,
            Err(_) => false
        }
    }
}


///Public keys of a stealth identity: `(Q_s, Q_v)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StealthPublic {
    #[serde(with = "crate::curve::point_serde")]
    pub spend: ProjectivePoint,
    #[serde(with = "crate::curve::point_serde")]
    pub view: ProjectivePoint

} impl StealthPublic {
    ///Create a public identity from its spend and view public keys.
    pub fn new(spend: ProjectivePoint, view: ProjectivePoint) -> Self {
        return Self{spend, view}
    }

    ///Given an ephemeral private key `r`, calculate the shared secret `H(r*Q_v)`.
    ///
    ///**The private key should not be reused.**
    pub fn shared_secret(&self, ephemeral: &ECDHPrivateKey) -> SharedSecret {
        return ECDHPublicKey::from_point(self.view).shared_secret(ephemeral)
    }

    ///Derive the one-time public key `P = s*G + Q_s` given a shared secret.
    ///**These keys should never be reused.**
    pub fn derive_key(&self, shared_secret: &SharedSecret) -> ProjectivePoint {
        return ECDHPublicKey::from_point(self.spend).derive_key(shared_secret).as_point()
    }

    ///"Send" `amount` to this identity, where only the recipient can detect that the payment is for them.
    ///
    ///The ephemeral key is generated automatically.
    pub fn derive_output(&self, amount: u64) -> Result<StealthOutput, SerializationError> {
        return self.derive_output_with_ephemeral(&ECDHPrivateKey::generate(), amount)
    }

    ///"Send" `amount` to this identity, given the ephemeral private key `r`.
    pub fn derive_output_with_ephemeral(
        &self, ephemeral: &ECDHPrivateKey, amount: u64
    ) -> Result<StealthOutput, SerializationError> {
        let shared_secret = self.shared_secret(ephemeral);
        let owner = self.derive_key(&shared_secret);

        return Ok(StealthOutput {
            address: Address::from_point(&owner)?,
            amount,
            ephemeral: ephemeral.to_public().as_point()
        })
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for StealthPublic {}
