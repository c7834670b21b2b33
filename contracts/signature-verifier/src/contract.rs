use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{
    contract, contractevent, contractimpl, contracttype, Address, Bytes, BytesN, Env,
};
use stellar_access::ownable::{self as ownable};
use stellar_macros::only_owner;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Signer,
}

#[contractevent(topics = ["SGUPDATED"])]
pub struct SignerUpdated {
    pub new_signer: BytesN<32>,
}

/// Claim message layout: XDR-encoded minter address, then the phase and the
/// count as big-endian u32. Off-chain signers must produce exactly these bytes.
fn claim_message(env: &Env, minter: &Address, phase: u32, count: u32) -> Bytes {
    let mut msg = minter.clone().to_xdr(env);
    msg.extend_from_array(&phase.to_be_bytes());
    msg.extend_from_array(&count.to_be_bytes());
    msg
}

#[contract]
pub struct SignatureVerifier;

#[contractimpl]
impl SignatureVerifier {
    /// Initializes the verifier with the authorized claim-signer public key.
    pub fn __constructor(env: Env, owner_addr: Address, signer: BytesN<32>) {
        owner_addr.require_auth();
        ownable::set_owner(&env, &owner_addr);
        env.storage().instance().set(&DataKey::Signer, &signer);
    }

    /// Rotates the claim-signer key (owner only).
    #[only_owner]
    pub fn set_signer(env: Env, new_signer: BytesN<32>) {
        env.storage().instance().set(&DataKey::Signer, &new_signer);

        SignerUpdated { new_signer }.publish(&env);
    }

    /// Returns the active claim-signer public key.
    pub fn signer(env: Env) -> BytesN<32> {
        env.storage()
            .instance()
            .get(&DataKey::Signer)
            .unwrap_or_else(|| panic!("Signer key has expired"))
    }

    /// Checks an ed25519 claim signature over `(minter, phase, count)`.
    ///
    /// Traps when the signature does not verify against the active signer key
    /// (Soroban host-crypto semantics); callers are expected to invoke this
    /// through `try_verify` and map the trap to their own error.
    pub fn verify(
        env: Env,
        minter: Address,
        phase: u32,
        count: u32,
        signature: BytesN<64>,
    ) -> bool {
        let signer = Self::signer(env.clone());
        let msg = claim_message(&env, &minter, phase, count);
        env.crypto().ed25519_verify(&signer, &msg, &signature);
        true
    }
}
