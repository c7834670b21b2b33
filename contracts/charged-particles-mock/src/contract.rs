use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env};

#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
#[contracterror]
pub enum Error {
    AmountMustBeGreaterThanZero = 1,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Mass(Address, u32, Address),
}

/// Recording stand-in for the Charged Particles protocol. Tracks the asset
/// mass energized into each NFT; the asset itself is expected to have been
/// transferred to this contract by the caller beforehand.
#[contract]
pub struct ChargedParticlesMock;

#[contractimpl]
impl ChargedParticlesMock {
    pub fn energize(
        env: Env,
        nft_contract: Address,
        token_id: u32,
        asset_token: Address,
        amount: i128,
    ) -> Result<(), Error> {
        if amount <= 0 {
            return Err(Error::AmountMustBeGreaterThanZero);
        }

        let key = DataKey::Mass(nft_contract, token_id, asset_token);
        let mass: i128 = env.storage().persistent().get(&key).unwrap_or(0_i128);
        env.storage().persistent().set(&key, &(mass + amount));
        Ok(())
    }

    pub fn mass_of(env: Env, nft_contract: Address, token_id: u32, asset_token: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Mass(nft_contract, token_id, asset_token))
            .unwrap_or(0_i128)
    }
}
