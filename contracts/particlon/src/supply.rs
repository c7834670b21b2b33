use soroban_sdk::{contractevent, contracttype, Env};

#[contracttype]
pub struct SupplyLedger {
    pub total_minted: u32,
    pub claimed: u32,
    pub proceeds: i128,
    pub withdrawn: i128,
    pub charged_mass: i128,
    pub asset_withdrawals: i128,
}

#[contractevent(topics = ["SLUPDATED"])]
pub struct SupplyLedgerUpdated {
    pub total_minted: u32,
    pub claimed: u32,
    pub proceeds: i128,
    pub withdrawn: i128,
    pub charged_mass: i128,
    pub asset_withdrawals: i128,
}

impl Default for SupplyLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl SupplyLedger {
    pub fn new() -> Self {
        SupplyLedger {
            total_minted: 0_u32,
            claimed: 0_u32,
            proceeds: 0_i128,
            withdrawn: 0_i128,
            charged_mass: 0_i128,
            asset_withdrawals: 0_i128,
        }
    }

    pub fn remaining(&self, max_supply: u32) -> u32 {
        max_supply - self.total_minted
    }

    pub fn recalculate_from_mint(&mut self, count: u32, payment: &i128) {
        self.total_minted += count;
        self.proceeds += payment;
    }

    pub fn recalculate_from_claim(&mut self, count: u32, payment: &i128) {
        self.total_minted += count;
        self.claimed += count;
        self.proceeds += payment;
    }

    pub fn recalculate_from_charge(&mut self, mass: &i128) {
        self.charged_mass += mass;
    }

    pub fn recalculate_from_withdrawal(&mut self, amount: &i128) {
        self.withdrawn += amount;
    }

    pub fn recalculate_from_asset_withdrawal(&mut self, amount: &i128) {
        self.asset_withdrawals += amount;
    }

    /// Emits a SupplyLedgerUpdated event
    pub fn emit_event(&self, env: &Env) {
        SupplyLedgerUpdated {
            total_minted: self.total_minted,
            claimed: self.claimed,
            proceeds: self.proceeds,
            withdrawn: self.withdrawn,
            charged_mass: self.charged_mass,
            asset_withdrawals: self.asset_withdrawals,
        }
        .publish(env);
    }
}
