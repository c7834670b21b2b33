use soroban_sdk::{contractclient, Address, BytesN, Env};

/// Claim-signer verification contract, deployed ahead of the collection.
#[contractclient(name = "SignatureVerifierClient")]
pub trait SignatureVerifier {
    fn verify(env: Env, minter: Address, phase: u32, count: u32, signature: BytesN<64>) -> bool;
}

/// The Charged Particles protocol entry point a particlon is energized through.
#[contractclient(name = "ChargedParticlesClient")]
pub trait ChargedParticles {
    fn energize(env: Env, nft_contract: Address, token_id: u32, asset_token: Address, amount: i128);

    fn mass_of(env: Env, nft_contract: Address, token_id: u32, asset_token: Address) -> i128;
}

/// Release-timelock state kept by the Charged Particles protocol.
#[contractclient(name = "ChargedStateClient")]
pub trait ChargedState {
    fn set_release_timelock(env: Env, nft_contract: Address, token_id: u32, unlock_ts: u64);

    fn is_release_locked(env: Env, nft_contract: Address, token_id: u32) -> bool;
}
