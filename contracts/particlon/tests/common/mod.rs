#![allow(dead_code)]

use ed25519_dalek::{Signer, SigningKey};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{token, Address, BytesN, Env, String};

use charged_particles_mock::contract::{ChargedParticlesMock, ChargedParticlesMockClient};
use charged_state_mock::contract::{ChargedStateMock, ChargedStateMockClient};
use particlon::contract::{Particlon, ParticlonClient};
use particlon::data::ParticlonInitParams;
use particlon_utility_token::contract::{ParticlonUtilityToken, ParticlonUtilityTokenClient};
use signature_verifier::contract::{SignatureVerifier, SignatureVerifierClient};

// 0.15 units of the payment token, in stroops
pub const MINT_PRICE: i128 = 1_500_000;
// 1500 PUT charged into every particlon
pub const ASSET_AMOUNT_PER_TOKEN: i128 = 1_500 * 10_000_000;
// 15M PUT, the full reserve minted to the collection before the mint opens
pub const PUT_SUPPLY_CAP: i128 = 15_000_000 * 10_000_000;

const CLAIM_SIGNER_SEED: [u8; 32] = [7_u8; 32];

pub struct ParticlonSuite<'a> {
    pub admin: Address,
    pub user: Address,
    pub client: ParticlonClient<'a>,
    pub put: ParticlonUtilityTokenClient<'a>,
    pub verifier: SignatureVerifierClient<'a>,
    pub charged_particles: Option<ChargedParticlesMockClient<'a>>,
    pub charged_state: Option<ChargedStateMockClient<'a>>,
    pub payment_token: TokenClient<'a>,
    pub payment_token_admin: StellarAssetClient<'a>,
}

fn claim_signer() -> SigningKey {
    SigningKey::from_bytes(&CLAIM_SIGNER_SEED)
}

pub fn signer_public_key(e: &Env) -> BytesN<32> {
    BytesN::from_array(e, &claim_signer().verifying_key().to_bytes())
}

/// Signs a claim the way the off-chain allow-list issuer does: XDR of the
/// minter address, then phase and count as big-endian u32.
pub fn sign_claim(e: &Env, minter: &Address, phase: u32, count: u32) -> BytesN<64> {
    let mut msg = minter.clone().to_xdr(e);
    msg.extend_from_array(&phase.to_be_bytes());
    msg.extend_from_array(&count.to_be_bytes());

    let msg_bytes: Vec<u8> = msg.iter().collect();
    let signature = claim_signer().sign(&msg_bytes);
    BytesN::from_array(e, &signature.to_bytes())
}

/// Provisions the suite in the same fixed order as the production rollout:
/// verifier first, then the collection wired to it, then the utility token,
/// and finally the two protocol mocks when `with_mocks` is set (test networks
/// only).
pub fn create_particlon_suite<'a>(
    e: &'a Env,
    max_supply: u32,
    mint_price: i128,
    mint_limit: u32,
    asset_amount_per_token: i128,
    charge_lock_secs: u64,
    with_mocks: bool,
    mock_auths: bool,
) -> ParticlonSuite<'a> {
    e.mock_all_auths();

    let admin = Address::generate(e);
    let user = Address::generate(e);

    let sac = e.register_stellar_asset_contract_v2(admin.clone());
    let payment_token = token::Client::new(e, &sac.address());
    let payment_token_admin = token::StellarAssetClient::new(e, &sac.address());

    let verifier_addr = e.register(SignatureVerifier, (admin.clone(), signer_public_key(e)));
    let verifier = SignatureVerifierClient::new(e, &verifier_addr);

    let params = ParticlonInitParams {
        max_supply,
        mint_price,
        mint_limit,
        asset_amount_per_token,
        charge_lock_secs,
    };
    let particlon_addr = e.register(
        Particlon,
        (
            admin.clone(),
            verifier_addr.clone(),
            sac.address(),
            String::from_str(e, "https://particlon.example/api/v1/"),
            String::from_str(e, "Particlon"),
            String::from_str(e, "PRTCLN"),
            params,
        ),
    );
    let client = ParticlonClient::new(e, &particlon_addr);

    let put_addr = e.register(
        ParticlonUtilityToken,
        (
            admin.clone(),
            String::from_str(e, "Particlon Utility Token"),
            String::from_str(e, "PUT"),
            PUT_SUPPLY_CAP,
        ),
    );
    let put = ParticlonUtilityTokenClient::new(e, &put_addr);

    let (charged_particles, charged_state) = if with_mocks {
        let cp_addr = e.register(ChargedParticlesMock, ());
        let cs_addr = e.register(ChargedStateMock, ());
        (
            Some(ChargedParticlesMockClient::new(e, &cp_addr)),
            Some(ChargedStateMockClient::new(e, &cs_addr)),
        )
    } else {
        (None, None)
    };

    if !mock_auths {
        e.set_auths(&[]);
    }

    ParticlonSuite {
        admin,
        user,
        client,
        put,
        verifier,
        charged_particles,
        charged_state,
        payment_token,
        payment_token_admin,
    }
}

/// Owner-side configuration performed before a mint phase opens: seed the PUT
/// reserve on the collection, then wire the protocol dependencies.
pub fn configure_suite(s: &ParticlonSuite) {
    let cp = s.charged_particles.as_ref().unwrap();
    let cs = s.charged_state.as_ref().unwrap();

    s.put.mint(&s.client.address, &PUT_SUPPLY_CAP);
    s.client.set_charged_particles(&cp.address);
    s.client.set_charged_state(&cs.address);
    s.client.set_asset_token(&s.put.address);
}

pub fn fund_minter(s: &ParticlonSuite, addr: &Address, amount: i128) {
    s.payment_token_admin.mint(addr, &amount);
}
