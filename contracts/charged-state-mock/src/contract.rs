use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    ReleaseTimelock(Address, u32),
}

/// Recording stand-in for the Charged Particles state contract. Keeps the
/// release timelock per NFT.
#[contract]
pub struct ChargedStateMock;

#[contractimpl]
impl ChargedStateMock {
    pub fn set_release_timelock(env: Env, nft_contract: Address, token_id: u32, unlock_ts: u64) {
        env.storage()
            .persistent()
            .set(&DataKey::ReleaseTimelock(nft_contract, token_id), &unlock_ts);
    }

    pub fn is_release_locked(env: Env, nft_contract: Address, token_id: u32) -> bool {
        let unlock_ts: u64 = env
            .storage()
            .persistent()
            .get(&DataKey::ReleaseTimelock(nft_contract, token_id))
            .unwrap_or(0_u64);

        unlock_ts > env.ledger().timestamp()
    }
}
