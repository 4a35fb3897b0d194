use anchor_lang::prelude::*;

/// Seed tag for the per-owner vault state PDA.
pub const STATE_SEED: &[u8] = b"state";

/// Seed tag for the lamport-holding vault PDA.
pub const VAULT_SEED: &[u8] = b"vault";

/// Derive the vault state address for an owner.
///
/// Seeds: ["state", owner]. Any party who knows the owner key can compute
/// this without consulting the program. The returned bump is persisted in
/// the state account so later instructions re-verify the derivation
/// without re-searching the bump space.
pub fn derive_state_address(owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STATE_SEED, owner.as_ref()], &crate::ID)
}

/// Derive the vault address from its state address.
///
/// Seeds: ["vault", vault_state]. Chaining through the state PDA ties the
/// vault to exactly one owner.
pub fn derive_vault_address(vault_state: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, vault_state.as_ref()], &crate::ID)
}
