use crate::data::{ContractConfig, MintPhase};
use crate::mint::MintRecord;
use crate::supply::SupplyLedger;
use soroban_sdk::contracterror;

#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
#[contracterror]
pub enum Error {
    AddressInsufficientBalance = 1,
    ContractInsufficientBalance = 2,
    MintCountMustBeGreaterThanZero = 3,
    MaxSupplyMustBeGreaterThanZero = 4,
    MintPriceMustBeGreaterThanZero = 5,
    MintLimitMustBeGreaterThanZero = 6,
    AssetAmountMustBeGreaterThanZero = 7,
    UnsupportedMintPhase = 8,
    MintPhaseIsClosed = 9,
    MintRequiresClaimSignature = 10,
    ClaimNotOpenInCurrentPhase = 11,
    WouldExceedMaxSupply = 12,
    WalletMintLimitExceeded = 13,
    AddressAlreadyClaimed = 14,
    InvalidClaimSignature = 15,
    AssetTokenNotSet = 16,
    ChargedParticlesNotSet = 17,
    ChargedStateNotSet = 18,
    AssetReserveInsufficient = 19,
    RecipientCannotReceivePayment = 20,
    InvalidPaymentData = 21,
    CannotEnergizeParticle = 22,
    CannotSetReleaseTimelock = 23,
    AmountMustBeGreaterThanZero = 24,
}

/// Macro for validation checks with early return on error
#[macro_export]
macro_rules! require {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
    ($($cond:expr, $err:expr),+) => {
        $(
            if !$cond {
                return Err($err);
            }
        )+
    };
}

/// Validates constructor parameters for contract initialization
pub fn validate_constructor_params(
    max_supply: u32,
    mint_price: i128,
    mint_limit: u32,
    asset_amount_per_token: i128,
) -> Result<(), Error> {
    require!(
        max_supply > 0, Error::MaxSupplyMustBeGreaterThanZero,
        mint_price > 0, Error::MintPriceMustBeGreaterThanZero,
        mint_limit > 0, Error::MintLimitMustBeGreaterThanZero,
        asset_amount_per_token > 0, Error::AssetAmountMustBeGreaterThanZero
    );
    Ok(())
}

/// Validates a paid public mint before any funds move
pub fn validate_public_mint(
    count: u32,
    config: &ContractConfig,
    record: &MintRecord,
    supply: &SupplyLedger,
    minter_balance: i128,
    payment: i128,
) -> Result<(), Error> {
    require!(
        count > 0, Error::MintCountMustBeGreaterThanZero,
        config.phase != MintPhase::Closed, Error::MintPhaseIsClosed,
        config.phase == MintPhase::Public, Error::MintRequiresClaimSignature,
        supply.total_minted + count <= config.max_supply, Error::WouldExceedMaxSupply,
        record.minted + count <= config.mint_limit, Error::WalletMintLimitExceeded,
        minter_balance >= payment, Error::AddressInsufficientBalance
    );
    Ok(())
}

/// Validates a signature-gated mint, before the signature itself is checked
pub fn validate_claim_mint(
    count: u32,
    config: &ContractConfig,
    record: &MintRecord,
    supply: &SupplyLedger,
) -> Result<(), Error> {
    require!(
        count > 0, Error::MintCountMustBeGreaterThanZero,
        config.phase != MintPhase::Closed, Error::MintPhaseIsClosed,
        config.phase != MintPhase::Public, Error::ClaimNotOpenInCurrentPhase,
        !record.claimed, Error::AddressAlreadyClaimed,
        supply.total_minted + count <= config.max_supply, Error::WouldExceedMaxSupply
    );
    Ok(())
}

/// Validates the paid leg of an allowlist claim
pub fn validate_allowlist_payment(
    count: u32,
    config: &ContractConfig,
    record: &MintRecord,
    minter_balance: i128,
    payment: i128,
) -> Result<(), Error> {
    require!(
        record.minted + count <= config.mint_limit, Error::WalletMintLimitExceeded,
        minter_balance >= payment, Error::AddressInsufficientBalance
    );
    Ok(())
}

/// Validates that the contract holds enough of the asset token to charge a batch
pub fn validate_charge_reserve(asset_balance: i128, required_mass: i128) -> Result<(), Error> {
    require!(
        asset_balance >= required_mass,
        Error::AssetReserveInsufficient
    );
    Ok(())
}

/// Validates a payment-token withdrawal against the contract's balance
pub fn validate_withdrawal(amount: i128, held: i128) -> Result<(), Error> {
    require!(
        amount > 0, Error::AmountMustBeGreaterThanZero,
        held >= amount, Error::ContractInsufficientBalance
    );
    Ok(())
}

/// Validates an asset-token sweep against the reserve still owed to unminted supply
pub fn validate_asset_withdrawal(
    amount: i128,
    asset_balance: i128,
    reserved: i128,
) -> Result<(), Error> {
    require!(
        amount > 0, Error::AmountMustBeGreaterThanZero,
        asset_balance - reserved >= amount, Error::AssetReserveInsufficient
    );
    Ok(())
}
