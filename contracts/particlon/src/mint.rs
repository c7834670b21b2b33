use crate::data::ContractConfig;
use soroban_sdk::{contracttype, Env};

#[contracttype]
#[derive(Copy, Clone)]
pub struct MintRecord {
    pub minted: u32,
    pub claimed: bool,
    pub last_mint_ts: u64,
}

impl Default for MintRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl MintRecord {
    pub fn new() -> Self {
        MintRecord {
            minted: 0_u32,
            claimed: false,
            last_mint_ts: 0_u64,
        }
    }

    pub fn register_mint(&mut self, env: &Env, count: u32) {
        self.minted += count;
        self.last_mint_ts = env.ledger().timestamp();
    }

    pub fn register_claim(&mut self, env: &Env, count: u32) {
        self.register_mint(env, count);
        self.claimed = true;
    }
}

#[contracttype]
#[derive(Copy, Clone)]
pub struct MintReceipt {
    pub first_token_id: u32,
    pub count: u32,
    pub paid: i128,
}

pub fn payment_due(config: &ContractConfig, count: u32) -> i128 {
    config.mint_price * count as i128
}
