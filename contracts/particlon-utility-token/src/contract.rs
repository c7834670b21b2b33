use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, Address, Env, MuxedAddress, String,
};
use stellar_access::ownable::{self as ownable};
use stellar_macros::only_owner;
use stellar_tokens::fungible::{Base, FungibleToken};

// Stellar asset convention
const DECIMALS: u32 = 7;

#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
#[contracterror]
pub enum Error {
    SupplyCapMustBeGreaterThanZero = 1,
    SupplyCapExceeded = 2,
    AmountMustBeGreaterThanZero = 3,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    SupplyCap,
}

#[contract]
pub struct ParticlonUtilityToken;

#[contractimpl]
impl ParticlonUtilityToken {
    /// Initializes the utility token with its metadata and a hard supply cap.
    ///
    /// # Errors
    ///
    /// * `SupplyCapMustBeGreaterThanZero` if supply_cap is not positive.
    pub fn __constructor(
        env: Env,
        owner_addr: Address,
        name: String,
        symbol: String,
        supply_cap: i128,
    ) -> Result<(), Error> {
        owner_addr.require_auth();
        if supply_cap <= 0 {
            return Err(Error::SupplyCapMustBeGreaterThanZero);
        }

        ownable::set_owner(&env, &owner_addr);
        Base::set_metadata(&env, DECIMALS, name, symbol);
        env.storage().instance().set(&DataKey::SupplyCap, &supply_cap);
        Ok(())
    }

    /// Mints `amount` tokens to `to` (owner only).
    ///
    /// Used to seed the Particlon contract with the asset reserve that gets
    /// charged into minted tokens.
    ///
    /// # Errors
    ///
    /// * `AmountMustBeGreaterThanZero` if amount is not positive.
    /// * `SupplyCapExceeded` if the mint would push total supply past the cap.
    #[only_owner]
    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), Error> {
        if amount <= 0 {
            return Err(Error::AmountMustBeGreaterThanZero);
        }

        let cap: i128 = env
            .storage()
            .instance()
            .get(&DataKey::SupplyCap)
            .unwrap_or_else(|| panic!("Supply cap has expired"));
        if Base::total_supply(&env) + amount > cap {
            return Err(Error::SupplyCapExceeded);
        }

        Base::mint(&env, &to, amount);
        Ok(())
    }

    /// Returns the hard supply cap.
    pub fn supply_cap(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::SupplyCap)
            .unwrap_or_else(|| panic!("Supply cap has expired"))
    }
}

#[contractimpl(contracttrait)]
impl FungibleToken for ParticlonUtilityToken {
    type ContractType = Base;
}
