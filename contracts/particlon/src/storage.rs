use crate::{
    data::{ContractConfig, DataKey},
    mint::MintRecord,
    supply::SupplyLedger,
};
use soroban_sdk::{Address, Env};

const DAY_IN_LEDGERS: u32 = 17280;

// Instance storage: accessed frequently, moderate TTL
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS; // ~30 days
const INSTANCE_LIFETIME_THRESHOLD: u32 = 15 * DAY_IN_LEDGERS; // ~15 days

// Persistent storage: critical user data, long TTL for safety
const PERSISTENT_BUMP_AMOUNT: u32 = 180 * DAY_IN_LEDGERS; // ~6 months
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 90 * DAY_IN_LEDGERS; // ~3 months

pub fn get_config(e: &Env) -> ContractConfig {
    let config = e
        .storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic!("Contract config has expired"));

    bump_instance_ttl(e);
    config
}

pub fn update_config(e: &Env, config: &ContractConfig) {
    e.storage().instance().set(&DataKey::Config, config);
}

pub fn get_dependency(e: &Env, key: &DataKey) -> Option<Address> {
    e.storage().instance().get(key)
}

pub fn set_dependency(e: &Env, key: &DataKey, addr: &Address) {
    e.storage().instance().set(key, addr);
    bump_instance_ttl(e);
}

pub fn get_mint_record_or_new(e: &Env, addr: &Address) -> MintRecord {
    let key = DataKey::MintRecord(addr.clone());
    let record: Option<MintRecord> = e.storage().persistent().get(&key);

    if record.is_some() {
        bump_persistent_ttl(e, &key);
    }

    record.unwrap_or_default()
}

pub fn update_mint_record(e: &Env, addr: &Address, record: &MintRecord) {
    let key = DataKey::MintRecord(addr.clone());
    e.storage().persistent().set(&key, record);
    bump_persistent_ttl(e, &key);
}

pub fn get_supply_or_new(e: &Env) -> SupplyLedger {
    let key = DataKey::SupplyLedger;
    e.storage().instance().get(&key).unwrap_or_default()
}

pub fn update_supply(e: &Env, supply: &SupplyLedger) {
    e.storage().instance().set(&DataKey::SupplyLedger, supply);
    bump_instance_ttl(e);
}

fn bump_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent_ttl(e: &Env, key: &DataKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
