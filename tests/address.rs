// SPDX short identifier: Unlicense

#![allow(unused, unused_mut)]

use proptest::prelude::*;
use stealthring::{
    common::*,
    hashes::{
        hash160,
        double_sha256
    },
    address::*
};

const SECRET_HEX: &str = "D7A197FE28D4C50C89D7E78FA9329EDCCC0F3480038ECF22B286EE5BD31F1FA1";
const WIF: &str = "5KTFbGvR5hyWr5B2YQHbuXkLyyjKNLEwqKoyz1UTiC8X2SCWkY7";
const ADDRESS: &str = "1DdN2AEzUVbxsZs76R6iuSGM689MdX7Gbh";
const PUBKEY_HEX: &str = "0490E7EF5B8986F2BA83A6C6728A3C9EA3A9AC91AEA64F77CE1CF0FE19B0178725\
    CEC6C3E82EE1DD9DE9C795C3A2D164872A9EDED57FEA3A13AA26A7F8E90801E5";

#[test]
fn known_vector_test() {
    let account = Account::from_secret_hex(SECRET_HEX).unwrap();
    assert_eq!(account.export_wif(), WIF);
    assert_eq!(account.address().to_string(), ADDRESS);
    assert_eq!(account.pubkey_hex(), PUBKEY_HEX);

    let imported = Account::from_wif(WIF).unwrap();
    assert_eq!(imported.secret(), account.secret());
    assert_eq!(imported.address().as_str(), ADDRESS);

    let view = ViewAccount::from_pubkey(PUBKEY_HEX).unwrap();
    assert_eq!(view.address().as_str(), ADDRESS);
    assert_eq!(&view, account.view());

    //secret = 1, the generator itself
    let one = Account::from_secret(Scalar::ONE).unwrap();
    assert_eq!(one.public_point(), G_POINT);
    assert_eq!(one.address().as_str(), "1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm");
    assert_eq!(one.export_wif(), "5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDf");
}

#[test]
fn address_test() {
    let account = Account::generate();
    let address = account.address();
    assert_eq!(Address::from_point(&account.public_point()).unwrap(), address);

    //payload is the hash of the uncompressed public key
    let pubkey = encode_point(&account.public_point()).unwrap();
    assert_eq!(address.decode().unwrap(), hash160(&pubkey));

    //checksum is the first 4 bytes of SHA256(SHA256(payload))
    let raw = bs58::decode(address.as_str()).into_vec().unwrap();
    assert_eq!(raw.len(), 25);
    assert_eq!(raw[0], ADDRESS_VERSION);
    assert_eq!(&raw[21..], &double_sha256(&raw[..21])[..4]);

    let parsed: Address = address.to_string().parse().unwrap();
    assert_eq!(parsed, address);

    #[cfg(feature = "to_bytes")]
    {
        let serialized = address.to_bytes().unwrap();
        assert_eq!(Address::from_bytes(&serialized).unwrap(), address);
    }
}

#[test]
fn address_errors_test() {
    assert_eq!(Address::from_point(&ProjectivePoint::IDENTITY).unwrap_err(), SerializationError::IdentityPoint);

    //one character off
    let mut tampered = ADDRESS.to_string();
    tampered.replace_range(5..6, "B");
    assert_eq!(tampered.parse::<Address>().unwrap_err(), SerializationError::ChecksumMismatch);

    //a valid base58check string of the wrong kind
    assert_eq!(WIF.parse::<Address>().unwrap_err(), SerializationError::InvalidVersion);
    assert_eq!(Account::from_wif(ADDRESS).unwrap_err(), SerializationError::InvalidVersion);

    //not base58 at all
    assert_eq!("0OIl".parse::<Address>().unwrap_err(), SerializationError::DecodingError);
}

#[cfg(feature = "to_bytes")]
#[test]
fn address_decoding_errors_test() {
    let address: Address = ADDRESS.parse().unwrap();
    let serialized = address.to_bytes().unwrap();
    assert_eq!(Address::from_bytes(&serialized).unwrap(), address);

    //one character off, after the 8 byte length prefix
    let mut tampered = serialized.clone();
    tampered[8 + 5] = b'B';
    assert_eq!(Address::from_bytes(&tampered).unwrap_err(), SerializationError::ChecksumMismatch);

    //valid base58check, wrong kind
    let wif = bincode::serialize(WIF).unwrap();
    assert_eq!(Address::from_bytes(&wif).unwrap_err(), SerializationError::InvalidVersion);

    //not an address at all
    let text = bincode::serialize("not an address").unwrap();
    assert_eq!(Address::from_bytes(&text).unwrap_err(), SerializationError::DecodingError);

    //nested in an output, the address is checked as well
    let identity = StealthIdentity::generate();
    let output = identity.to_public().derive_output(1).unwrap();
    let serialized = output.to_bytes().unwrap();
    //the address string comes first
    let position = 8 + 5;
    let mut tampered = serialized.clone();
    tampered[position] = if tampered[position] == b'2' { b'3' } else { b'2' };
    assert_eq!(StealthOutput::from_bytes(&tampered).unwrap_err(), SerializationError::DecodingError);
    assert_eq!(StealthOutput::from_bytes(&serialized).unwrap(), output);
}

#[test]
fn account_errors_test() {
    assert_eq!(Account::from_secret(Scalar::ZERO).unwrap_err(), SerializationError::InvalidKey);
    assert_eq!(Account::from_encoded_secret(&[0u8; 32]).unwrap_err(), SerializationError::InvalidKey);
    assert_eq!(Account::from_encoded_secret(&[0xFFu8; 32]).unwrap_err(), SerializationError::InvalidKey);
    assert_eq!(Account::from_encoded_secret(&[1u8; 31]).unwrap_err(), SerializationError::InvalidLength);
    assert_eq!(Account::from_secret_hex("not hex").unwrap_err(), SerializationError::DecodingError);

    assert_eq!(ViewAccount::from_point(&ProjectivePoint::IDENTITY).unwrap_err(), SerializationError::IdentityPoint);
    assert_eq!(ViewAccount::from_pubkey("zz").unwrap_err(), SerializationError::DecodingError);
    assert_eq!(ViewAccount::from_pubkey_bytes(&[0u8; 65]).unwrap_err(), SerializationError::InvalidKey);
}

#[test]
fn message_signature_test() {
    let account = Account::generate();
    let view = account.to_view();
    let msg = "Hello world!";

    let signature = account.sign_str(msg);
    assert!(account.verify(msg.as_bytes(), &signature));
    assert!(view.verify(msg.as_bytes(), &signature));
    assert!(!view.verify("Hello world?".as_bytes(), &signature));

    //a verify-only account rebuilt from the public key alone
    let rebuilt = ViewAccount::from_pubkey(&account.pubkey_hex()).unwrap();
    let bytes = signature.to_bytes().to_vec();
    assert_eq!(bytes.len(), 64);
    assert!(rebuilt.verify_str(msg, &bytes));

    //any single bit flip is rejected
    for bit in (0..512).step_by(7) {
        let mut tampered = bytes.clone();
        tampered[bit / 8] ^= 1 << (bit % 8);
        assert!(!rebuilt.verify_str(msg, &tampered));
    }

    //someone else's key
    let other = Account::generate().to_view();
    assert!(!other.verify_str(msg, &bytes));

    //malformed signatures fail closed
    assert!(!rebuilt.verify_str(msg, &[]));
    assert!(!rebuilt.verify_str(msg, &bytes[..63]));
    assert!(!rebuilt.verify_str(msg, &[0u8; 64]));
    assert!(!rebuilt.verify_str(msg, &[0xFFu8; 64]));
}

#[test]
fn ecdh_test() {
    let alice = ECDHPrivateKey::generate();
    let bob = ECDHPrivateKey::generate();

    let shared = alice.shared_secret(&bob.to_public());
    assert_eq!(shared, bob.shared_secret(&alice.to_public()));
    assert_eq!(shared, bob.to_public().shared_secret(&alice));
    assert_ne!(shared, alice.shared_secret(&ECDHPrivateKey::generate().to_public()));

    //both sides derive the same one-time key
    let derived = alice.derive_key(&shared);
    assert_eq!(derived.to_public(), alice.to_public().derive_key(&shared));
    assert_eq!(derived.as_scalar(), alice.as_scalar() + shared.as_scalar());

    #[cfg(feature = "to_bytes")]
    {
        let serialized = shared.to_bytes().unwrap();
        assert_eq!(SharedSecret::from_bytes(&serialized).unwrap(), shared);
        assert_eq!(SharedSecret::from_bytes(&serialized[1..]).unwrap_err(), SerializationError::DecodingError);
    }
}

#[test]
fn stealth_known_scenario_test() {
    let identity = StealthIdentity::from_secrets(Scalar::from(5u64), Scalar::from(7u64)).unwrap();
    let ephemeral = ECDHPrivateKey::from_scalar(Scalar::from(11u64));

    //sender side
    let output = identity.to_public().derive_output_with_ephemeral(&ephemeral, 42).unwrap();
    assert_eq!(output.ephemeral, G_POINT * Scalar::from(11u64));
    assert_eq!(output.amount, 42);
    assert_eq!(output.address.as_str(), "1GXCXqveXLs5rJ3Av8b1qiQgwEjqRqJ4Ny");

    //recipient side: d_p = H(d_v*R) + d_s
    let shared = identity.shared_secret(&output.ephemeral);
    let one_time = Account::from_secret(shared.as_scalar() + Scalar::from(5u64)).unwrap();
    assert_eq!(one_time.address(), output.address);
    assert_eq!(hex::encode_upper(encode_scalar(&one_time.secret())),
        "7A154C515C5224D13C69F972ACC32A5CBDA8DDE56A102AB9D886FC9B2B82B7AB");

    let received = identity.receive(&output).unwrap();
    assert_eq!(received.secret(), one_time.secret());
    assert_eq!(received.public_point(), G_POINT * received.secret());
    assert_eq!(identity.one_time_account(&output.ephemeral).unwrap(), received);
    assert!(identity.to_view_only().owns(&output));
}

#[test]
fn stealth_test() {
    let identity = StealthIdentity::generate();
    let public = identity.to_public();
    let view_only = identity.to_view_only();
    assert_eq!(view_only.to_public(), public);
    assert_eq!(public, StealthPublic::new(identity.spend().public_point(), identity.view().public_point()));

    //two payments to the same identity are unlinkable
    let first = public.derive_output(1).unwrap();
    let second = public.derive_output(1).unwrap();
    assert_ne!(first.address, second.address);
    assert_ne!(first.address, identity.spend().address());

    for output in [&first, &second] {
        assert!(view_only.owns(output));
        let account = identity.receive(output).unwrap();
        assert_eq!(account.address(), output.address);
    }

    //someone else's payment
    let stranger = StealthIdentity::generate();
    let theirs = stranger.to_public().derive_output(1).unwrap();
    assert!(identity.receive(&theirs).is_none());
    assert!(!view_only.owns(&theirs));

    //right ephemeral key, wrong address
    let mut mismatched = first.clone();
    mismatched.address = second.address.clone();
    assert!(identity.receive(&mismatched).is_none());
    assert!(!view_only.owns(&mismatched));

    #[cfg(feature = "to_bytes")]
    {
        assert_eq!(StealthPublic::from_bytes(&public.to_bytes().unwrap()).unwrap(), public);
        assert_eq!(StealthOutput::from_bytes(&first.to_bytes().unwrap()).unwrap(), first);
    }
}

#[test]
fn curve_test() {
    let point = random_point();
    assert_eq!(point + negate_point(&point), ProjectivePoint::IDENTITY);
    assert_eq!(point * Scalar::ZERO, ProjectivePoint::IDENTITY);
    assert_eq!(decode_point(&encode_point(&point).unwrap()).unwrap(), point);
    assert_eq!(encode_point(&ProjectivePoint::IDENTITY).unwrap_err(), SerializationError::IdentityPoint);

    //n reduces to zero, n - 1 is the largest scalar
    let order_bytes: [u8; 32] = hex::decode(ORDER_HEX).unwrap().try_into().unwrap();
    assert_eq!(scalar_from_digest(&order_bytes), Scalar::ZERO);
    assert_eq!(hex::encode_upper(encode_scalar(&-Scalar::ONE)),
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364140");
    assert_eq!(decode_scalar(&order_bytes).unwrap_err(), SerializationError::DecodingError);
    assert_eq!(order(), U256::from_be_hex(ORDER_HEX));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn wif_roundtrip_test(bytes in any::<[u8; 32]>()) {
        let secret = scalar_from_digest(&bytes);
        prop_assume!(secret != Scalar::ZERO);

        let account = Account::from_secret(secret).unwrap();
        let imported = Account::from_wif(&account.export_wif()).unwrap();
        prop_assert_eq!(imported.address(), account.address());
        prop_assert_eq!(imported.secret(), secret);
    }
}
