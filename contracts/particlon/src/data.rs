use soroban_sdk::{contractevent, contracttype, Address, Env};

pub trait FromNumber {
    fn from_number<N>(number: N) -> Option<Self>
    where
        Self: Sized,
        N: Into<u32>;
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
#[contracttype]
pub enum MintPhase {
    Closed = 0,
    Claim = 1,
    Allowlist = 2,
    Public = 3,
}

impl MintPhase {
    /// Emits a MintPhaseUpdated event
    pub fn emit_event(&self, env: &Env) {
        MintPhaseUpdated { new_phase: *self }.publish(env);
    }
}

impl FromNumber for MintPhase {
    fn from_number<N>(value: N) -> Option<MintPhase>
    where
        N: Into<u32>,
    {
        let value: u32 = value.into();
        match value {
            0 => Some(MintPhase::Closed),
            1 => Some(MintPhase::Claim),
            2 => Some(MintPhase::Allowlist),
            3 => Some(MintPhase::Public),
            _ => None,
        }
    }
}

#[contractevent(topics = ["MPUPDATED"])]
pub struct MintPhaseUpdated {
    pub new_phase: MintPhase,
}

#[contracttype]
pub struct ParticlonInitParams {
    pub max_supply: u32,
    pub mint_price: i128,
    pub mint_limit: u32,
    pub asset_amount_per_token: i128,
    pub charge_lock_secs: u64,
}

#[contracttype]
pub struct ContractConfig {
    pub verifier: Address,
    pub payment_token: Address,
    pub max_supply: u32,
    pub mint_price: i128,
    pub mint_limit: u32,
    pub asset_amount_per_token: i128,
    pub charge_lock_secs: u64,
    pub phase: MintPhase,
}

impl ContractConfig {
    pub fn from_particlon_init_params(
        params: &ParticlonInitParams,
        verifier: Address,
        payment_token: Address,
    ) -> Self {
        ContractConfig {
            verifier,
            payment_token,
            max_supply: params.max_supply,
            mint_price: params.mint_price,
            mint_limit: params.mint_limit,
            asset_amount_per_token: params.asset_amount_per_token,
            charge_lock_secs: params.charge_lock_secs,
            phase: MintPhase::Closed,
        }
    }
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    SupplyLedger,
    MintRecord(Address),
    AssetToken,
    ChargedParticles,
    ChargedState,
}
