use soroban_sdk::token::TokenClient;
use soroban_sdk::{contract, contractimpl, token, Address, BytesN, Env, String};
use stellar_access::ownable::{self as ownable};
use stellar_contract_utils::pausable::{self as pausable, Pausable};
use stellar_macros::{only_owner, when_not_paused};
use stellar_tokens::non_fungible::{Base, NonFungibleToken};

use crate::data::{ContractConfig, DataKey, FromNumber, MintPhase, ParticlonInitParams};
use crate::interfaces::{ChargedParticlesClient, ChargedStateClient, SignatureVerifierClient};
use crate::mint::{self, MintReceipt};
use crate::supply::SupplyLedger;
use crate::validation::{self, Error};

use crate::{require, storage as Storage};

fn get_payment_token<'a>(env: &'a Env, config: &ContractConfig) -> TokenClient<'a> {
    token::Client::new(env, &config.payment_token)
}

#[contract]
pub struct Particlon;

#[contractimpl]
impl Particlon {
    /// Initializes the Particlon collection.
    ///
    /// Sets up ownership, collection metadata and the immutable mint
    /// parameters. The collection starts in the 'Closed' phase; the asset
    /// token and the two Charged Particles dependencies must be configured
    /// by the owner before any mint can succeed.
    ///
    /// # Parameters
    ///
    /// * `env` - The execution environment provided by Soroban.
    /// * `owner_addr` - The collection owner's address (requires authentication).
    /// * `verifier_addr` - The signature verifier contract checked on claim mints.
    /// * `payment_token_addr` - The token the mint price is collected in.
    /// * `uri` - Collection base URI.
    /// * `name` - Collection name.
    /// * `symbol` - Collection symbol.
    /// * `params` - Mint parameters (supply cap, price, wallet limit, charge amount, lock).
    ///
    /// # Errors
    ///
    /// * `MaxSupplyMustBeGreaterThanZero` if max_supply is 0.
    /// * `MintPriceMustBeGreaterThanZero` if mint_price is 0.
    /// * `MintLimitMustBeGreaterThanZero` if mint_limit is 0.
    /// * `AssetAmountMustBeGreaterThanZero` if asset_amount_per_token is 0.
    pub fn __constructor(
        env: Env,
        owner_addr: Address,
        verifier_addr: Address,
        payment_token_addr: Address,
        uri: String,
        name: String,
        symbol: String,
        params: ParticlonInitParams,
    ) -> Result<(), Error> {
        owner_addr.require_auth();
        validation::validate_constructor_params(
            params.max_supply,
            params.mint_price,
            params.mint_limit,
            params.asset_amount_per_token,
        )?;

        // Set the owner using OpenZeppelin Ownable
        ownable::set_owner(&env, &owner_addr);
        let config =
            ContractConfig::from_particlon_init_params(&params, verifier_addr, payment_token_addr);

        Base::set_metadata(&env, uri, name, symbol);
        Storage::update_config(&env, &config);
        Ok(())
    }

    /// Configures the Charged Particles protocol address (owner only).
    #[only_owner]
    pub fn set_charged_particles(env: Env, addr: Address) -> Result<(), Error> {
        Storage::set_dependency(&env, &DataKey::ChargedParticles, &addr);
        Ok(())
    }

    /// Configures the Charged State protocol address (owner only).
    #[only_owner]
    pub fn set_charged_state(env: Env, addr: Address) -> Result<(), Error> {
        Storage::set_dependency(&env, &DataKey::ChargedState, &addr);
        Ok(())
    }

    /// Configures the asset token charged into each minted particlon (owner only).
    #[only_owner]
    pub fn set_asset_token(env: Env, addr: Address) -> Result<(), Error> {
        Storage::set_dependency(&env, &DataKey::AssetToken, &addr);
        Ok(())
    }

    /// Replaces the collection base URI (owner only).
    #[only_owner]
    pub fn set_uri(env: Env, uri: String) -> Result<(), Error> {
        Base::set_metadata(&env, uri, Self::name(&env), Self::symbol(&env));
        Ok(())
    }

    /// Moves the collection to a new mint phase (owner only).
    ///
    /// Phase values follow the collection rollout: 0 = Closed, 1 = Claim,
    /// 2 = Allowlist, 3 = Public.
    ///
    /// # Errors
    ///
    /// * `UnsupportedMintPhase` if the value does not name a phase.
    #[only_owner]
    pub fn set_mint_phase(env: Env, phase: u32) -> Result<(), Error> {
        let new_phase = MintPhase::from_number(phase).ok_or(Error::UnsupportedMintPhase)?;
        let mut config = Storage::get_config(&env);
        config.phase = new_phase;
        Storage::update_config(&env, &config);

        new_phase.emit_event(&env);
        Ok(())
    }

    /// Mints `count` particlons to `minter` during the public phase.
    ///
    /// Collects `count * mint_price` of the payment token from the minter,
    /// mints sequential token ids and charges each one with the configured
    /// amount of the asset token through Charged Particles. The batch is
    /// atomic: if any token cannot be minted and charged, nothing happens.
    ///
    /// # Parameters
    ///
    /// * `env` - The execution environment.
    /// * `minter` - The receiving wallet (requires authentication).
    /// * `count` - Number of tokens to mint.
    ///
    /// # Returns
    ///
    /// * A `MintReceipt` with the first minted token id, the count and the amount paid.
    ///
    /// # Errors
    ///
    /// * `MintCountMustBeGreaterThanZero` if count is 0.
    /// * `MintPhaseIsClosed` if the phase is Closed.
    /// * `MintRequiresClaimSignature` if the phase is Claim or Allowlist.
    /// * `WouldExceedMaxSupply` if the batch crosses the supply cap.
    /// * `WalletMintLimitExceeded` if the wallet would exceed its mint limit.
    /// * `AddressInsufficientBalance` if the minter cannot cover the payment.
    /// * `AssetTokenNotSet`, `ChargedParticlesNotSet`, `ChargedStateNotSet` if
    ///   a dependency was not configured.
    /// * `AssetReserveInsufficient` if the contract does not hold enough of the
    ///   asset token to charge the batch.
    /// * `RecipientCannotReceivePayment` or `InvalidPaymentData` if the payment
    ///   transfer fails.
    #[when_not_paused]
    pub fn mint(env: Env, minter: Address, count: u32) -> Result<MintReceipt, Error> {
        minter.require_auth();
        let config = Storage::get_config(&env);
        let record = Storage::get_mint_record_or_new(&env, &minter);
        let supply = Storage::get_supply_or_new(&env);

        let payment = mint::payment_due(&config, count);
        let pay_tk = get_payment_token(&env, &config);
        validation::validate_public_mint(
            count,
            &config,
            &record,
            &supply,
            pay_tk.balance(&minter),
            payment,
        )?;

        pay_tk
            .try_transfer(&minter, &env.current_contract_address(), &payment)
            .map_err(|_| Error::RecipientCannotReceivePayment)?
            .map_err(|_| Error::InvalidPaymentData)?;

        mint_and_charge(&env, &minter, count, &config, payment, false)
    }

    /// Mints `count` particlons against a claim signature, during the Claim
    /// (free) or Allowlist (paid) phase.
    ///
    /// The signature must cover `(minter, phase, count)` and be valid for the
    /// signer registered in the verifier contract. Each wallet can claim once.
    ///
    /// # Parameters
    ///
    /// * `env` - The execution environment.
    /// * `minter` - The claiming wallet (requires authentication).
    /// * `count` - Number of tokens covered by the signature.
    /// * `signature` - ed25519 signature issued by the claim signer.
    ///
    /// # Returns
    ///
    /// * A `MintReceipt`; `paid` is 0 during the Claim phase.
    ///
    /// # Errors
    ///
    /// * `MintPhaseIsClosed` if the phase is Closed.
    /// * `ClaimNotOpenInCurrentPhase` if the phase is Public.
    /// * `AddressAlreadyClaimed` if the wallet has claimed before.
    /// * `InvalidClaimSignature` if the verifier rejects the signature.
    /// * `WouldExceedMaxSupply`, `WalletMintLimitExceeded`,
    ///   `AddressInsufficientBalance` and the charge errors as for `mint`.
    #[when_not_paused]
    pub fn claim_mint(
        env: Env,
        minter: Address,
        count: u32,
        signature: BytesN<64>,
    ) -> Result<MintReceipt, Error> {
        minter.require_auth();
        let config = Storage::get_config(&env);
        let record = Storage::get_mint_record_or_new(&env, &minter);
        let supply = Storage::get_supply_or_new(&env);

        validation::validate_claim_mint(count, &config, &record, &supply)?;

        let verifier = SignatureVerifierClient::new(&env, &config.verifier);
        let verified = verifier
            .try_verify(&minter, &(config.phase as u32), &count, &signature)
            .map_err(|_| Error::InvalidClaimSignature)?
            .map_err(|_| Error::InvalidClaimSignature)?;
        require!(verified, Error::InvalidClaimSignature);

        let payment = match config.phase {
            MintPhase::Allowlist => {
                let payment = mint::payment_due(&config, count);
                let pay_tk = get_payment_token(&env, &config);
                validation::validate_allowlist_payment(
                    count,
                    &config,
                    &record,
                    pay_tk.balance(&minter),
                    payment,
                )?;

                pay_tk
                    .try_transfer(&minter, &env.current_contract_address(), &payment)
                    .map_err(|_| Error::RecipientCannotReceivePayment)?
                    .map_err(|_| Error::InvalidPaymentData)?;
                payment
            }
            _ => 0_i128,
        };

        mint_and_charge(&env, &minter, count, &config, payment, true)
    }

    /// Withdraws mint proceeds to `to` (owner only).
    ///
    /// # Errors
    ///
    /// * `AmountMustBeGreaterThanZero` if amount is not positive.
    /// * `ContractInsufficientBalance` if the contract holds less than `amount`
    ///   of the payment token.
    /// * `RecipientCannotReceivePayment` or `InvalidPaymentData` if the transfer fails.
    #[only_owner]
    #[when_not_paused]
    pub fn withdraw(env: Env, to: Address, amount: i128) -> Result<bool, Error> {
        let config = Storage::get_config(&env);
        let pay_tk = get_payment_token(&env, &config);
        validation::validate_withdrawal(amount, pay_tk.balance(&env.current_contract_address()))?;

        pay_tk
            .try_transfer(&env.current_contract_address(), &to, &amount)
            .map_err(|_| Error::RecipientCannotReceivePayment)?
            .map_err(|_| Error::InvalidPaymentData)?;

        let mut supply = Storage::get_supply_or_new(&env);
        supply.recalculate_from_withdrawal(&amount);
        Storage::update_supply(&env, &supply);

        supply.emit_event(&env);
        Ok(true)
    }

    /// Sweeps surplus asset tokens to `to` (owner only).
    ///
    /// The portion of the asset-token balance still owed to unminted supply
    /// (`remaining supply * asset_amount_per_token`) can never be swept.
    ///
    /// # Errors
    ///
    /// * `AssetTokenNotSet` if the asset token was never configured.
    /// * `AmountMustBeGreaterThanZero` if amount is not positive.
    /// * `AssetReserveInsufficient` if the sweep would eat into the reserve.
    #[only_owner]
    #[when_not_paused]
    pub fn withdraw_asset_tokens(env: Env, to: Address, amount: i128) -> Result<bool, Error> {
        let config = Storage::get_config(&env);
        let asset_token =
            Storage::get_dependency(&env, &DataKey::AssetToken).ok_or(Error::AssetTokenNotSet)?;
        let asset_tk = token::Client::new(&env, &asset_token);

        let mut supply = Storage::get_supply_or_new(&env);
        let reserved = config.asset_amount_per_token * supply.remaining(config.max_supply) as i128;
        validation::validate_asset_withdrawal(
            amount,
            asset_tk.balance(&env.current_contract_address()),
            reserved,
        )?;

        asset_tk
            .try_transfer(&env.current_contract_address(), &to, &amount)
            .map_err(|_| Error::RecipientCannotReceivePayment)?
            .map_err(|_| Error::InvalidPaymentData)?;

        supply.recalculate_from_asset_withdrawal(&amount);
        Storage::update_supply(&env, &supply);

        supply.emit_event(&env);
        Ok(true)
    }

    /// Returns the current mint phase.
    pub fn mint_phase(env: Env) -> MintPhase {
        Storage::get_config(&env).phase
    }

    /// Returns the number of tokens minted so far.
    pub fn total_minted(env: Env) -> u32 {
        Storage::get_supply_or_new(&env).total_minted
    }

    /// Returns how many tokens `addr` has minted across all phases.
    pub fn minted_by(env: Env, addr: Address) -> u32 {
        Storage::get_mint_record_or_new(&env, &addr).minted
    }

    /// Retrieves the supply ledger (owner only).
    ///
    /// Returns the running totals of minted and claimed tokens, payment-token
    /// proceeds and withdrawals, and the asset mass charged into the
    /// collection.
    #[only_owner]
    pub fn get_supply_ledger(env: Env) -> Result<SupplyLedger, Error> {
        let supply: SupplyLedger = Storage::get_supply_or_new(&env);

        Ok(supply)
    }
}

fn mint_and_charge(
    env: &Env,
    minter: &Address,
    count: u32,
    config: &ContractConfig,
    payment: i128,
    is_claim: bool,
) -> Result<MintReceipt, Error> {
    let asset_token =
        Storage::get_dependency(env, &DataKey::AssetToken).ok_or(Error::AssetTokenNotSet)?;
    let charged_particles = Storage::get_dependency(env, &DataKey::ChargedParticles)
        .ok_or(Error::ChargedParticlesNotSet)?;
    let charged_state =
        Storage::get_dependency(env, &DataKey::ChargedState).ok_or(Error::ChargedStateNotSet)?;

    let asset_tk = token::Client::new(env, &asset_token);
    let required_mass = config.asset_amount_per_token * count as i128;
    validation::validate_charge_reserve(
        asset_tk.balance(&env.current_contract_address()),
        required_mass,
    )?;

    let charged = ChargedParticlesClient::new(env, &charged_particles);
    let state = ChargedStateClient::new(env, &charged_state);

    let mut first_token_id = 0_u32;
    for i in 0..count {
        let token_id = Base::sequential_mint(env, minter);
        if i == 0 {
            first_token_id = token_id;
        }

        // The asset moves into the protocol escrow before energize records it
        asset_tk
            .try_transfer(
                &env.current_contract_address(),
                &charged_particles,
                &config.asset_amount_per_token,
            )
            .map_err(|_| Error::RecipientCannotReceivePayment)?
            .map_err(|_| Error::InvalidPaymentData)?;

        charged
            .try_energize(
                &env.current_contract_address(),
                &token_id,
                &asset_token,
                &config.asset_amount_per_token,
            )
            .map_err(|_| Error::CannotEnergizeParticle)?
            .map_err(|_| Error::CannotEnergizeParticle)?;

        if config.charge_lock_secs > 0 {
            let unlock_ts = env.ledger().timestamp() + config.charge_lock_secs;
            state
                .try_set_release_timelock(&env.current_contract_address(), &token_id, &unlock_ts)
                .map_err(|_| Error::CannotSetReleaseTimelock)?
                .map_err(|_| Error::CannotSetReleaseTimelock)?;
        }
    }

    let mut record = Storage::get_mint_record_or_new(env, minter);
    if is_claim {
        record.register_claim(env, count);
    } else {
        record.register_mint(env, count);
    }
    Storage::update_mint_record(env, minter, &record);

    let mut supply = Storage::get_supply_or_new(env);
    if is_claim {
        supply.recalculate_from_claim(count, &payment);
    } else {
        supply.recalculate_from_mint(count, &payment);
    }
    supply.recalculate_from_charge(&required_mass);
    Storage::update_supply(env, &supply);

    supply.emit_event(env);

    Ok(MintReceipt {
        first_token_id,
        count,
        paid: payment,
    })
}

#[contractimpl(contracttrait)]
impl NonFungibleToken for Particlon {
    type ContractType = Base;
}

#[contractimpl]
impl Pausable for Particlon {
    #[only_owner]
    fn paused(e: &Env) -> bool {
        pausable::paused(e)
    }

    #[only_owner]
    fn pause(e: &Env, _caller: Address) {
        pausable::pause(e);
    }

    #[only_owner]
    fn unpause(e: &Env, _caller: Address) {
        pausable::unpause(e);
    }
}
