use ed25519_dalek::{Signer, SigningKey};
use signature_verifier::contract::{SignatureVerifier, SignatureVerifierClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{Address, BytesN, Env};

const SIGNER_SEED: [u8; 32] = [7_u8; 32];
const OTHER_SEED: [u8; 32] = [9_u8; 32];

fn public_key(e: &Env, key: &SigningKey) -> BytesN<32> {
    BytesN::from_array(e, &key.verifying_key().to_bytes())
}

fn sign(e: &Env, key: &SigningKey, minter: &Address, phase: u32, count: u32) -> BytesN<64> {
    let mut msg = minter.clone().to_xdr(e);
    msg.extend_from_array(&phase.to_be_bytes());
    msg.extend_from_array(&count.to_be_bytes());

    let msg_bytes: Vec<u8> = msg.iter().collect();
    BytesN::from_array(e, &key.sign(&msg_bytes).to_bytes())
}

fn create_verifier<'a>(e: &'a Env) -> (Address, SignatureVerifierClient<'a>) {
    e.mock_all_auths();
    let admin = Address::generate(e);
    let signer = SigningKey::from_bytes(&SIGNER_SEED);
    let addr = e.register(SignatureVerifier, (admin.clone(), public_key(e, &signer)));
    (admin, SignatureVerifierClient::new(e, &addr))
}

#[test]
fn test_valid_claim_signature() {
    let e = Env::default();
    let (_admin, client) = create_verifier(&e);

    let minter = Address::generate(&e);
    let signature = sign(&e, &SigningKey::from_bytes(&SIGNER_SEED), &minter, 1, 3);

    assert!(client.verify(&minter, &1_u32, &3_u32, &signature));
}

#[test]
fn test_signer_getter() {
    let e = Env::default();
    let (_admin, client) = create_verifier(&e);

    let signer = SigningKey::from_bytes(&SIGNER_SEED);
    assert_eq!(client.signer(), public_key(&e, &signer));
}

#[test]
#[should_panic]
fn test_rejects_tampered_count() {
    let e = Env::default();
    let (_admin, client) = create_verifier(&e);

    let minter = Address::generate(&e);
    let signature = sign(&e, &SigningKey::from_bytes(&SIGNER_SEED), &minter, 1, 3);

    client.verify(&minter, &1_u32, &4_u32, &signature);
}

#[test]
#[should_panic]
fn test_rejects_foreign_signer() {
    let e = Env::default();
    let (_admin, client) = create_verifier(&e);

    let minter = Address::generate(&e);
    let signature = sign(&e, &SigningKey::from_bytes(&OTHER_SEED), &minter, 1, 3);

    client.verify(&minter, &1_u32, &3_u32, &signature);
}

#[test]
fn test_signer_rotation() {
    let e = Env::default();
    let (_admin, client) = create_verifier(&e);

    let new_signer = SigningKey::from_bytes(&OTHER_SEED);
    client.set_signer(&public_key(&e, &new_signer));
    assert_eq!(client.signer(), public_key(&e, &new_signer));

    let minter = Address::generate(&e);
    let signature = sign(&e, &new_signer, &minter, 2, 1);
    assert!(client.verify(&minter, &2_u32, &1_u32, &signature));
}

#[test]
#[should_panic]
fn test_old_signer_rejected_after_rotation() {
    let e = Env::default();
    let (_admin, client) = create_verifier(&e);

    let new_signer = SigningKey::from_bytes(&OTHER_SEED);
    client.set_signer(&public_key(&e, &new_signer));

    let minter = Address::generate(&e);
    let signature = sign(&e, &SigningKey::from_bytes(&SIGNER_SEED), &minter, 1, 1);
    client.verify(&minter, &1_u32, &1_u32, &signature);
}

#[test]
#[should_panic]
fn test_unauthorized_set_signer() {
    let e = Env::default();
    let (_admin, client) = create_verifier(&e);

    let new_signer = SigningKey::from_bytes(&OTHER_SEED);
    let new_key = public_key(&e, &new_signer);
    e.set_auths(&[]);
    client.set_signer(&new_key);
}
