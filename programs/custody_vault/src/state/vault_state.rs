use anchor_lang::prelude::*;

/// Vault state PDA account.
///
/// Seeds: ["state", owner_pubkey]
/// One per owner. Records the owner and the bump seeds that produced both
/// PDAs, so every later instruction re-verifies the derivation against the
/// supplied accounts instead of re-searching.
///
/// The lamport-holding vault itself is a zero-data system account at
/// seeds ["vault", this account's key]; only this program can debit it,
/// via PDA-signed transfer.
///
/// Size calculation:
///   discriminator: 8
///   owner: 32
///   vault_bump: 1
///   state_bump: 1
///   TOTAL: 42
#[account]
pub struct VaultState {
    /// The sole authorized key holder; immutable after initialize
    pub owner: Pubkey,

    /// Bump seed for the vault PDA (["vault", state_key])
    pub vault_bump: u8,

    /// Bump seed for this state PDA (["state", owner])
    pub state_bump: u8,
}

impl VaultState {
    /// Account size for space allocation (includes discriminator)
    pub const SIZE: usize = 8 + // discriminator
        32 + // owner
        1 +  // vault_bump
        1;   // state_bump

    /// Ownership check applied by every post-initialize instruction.
    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.owner == *key
    }
}
