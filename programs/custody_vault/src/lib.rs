use anchor_lang::prelude::*;

pub mod derivation;
pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("EBhY54ZnWYFqJjy5co4Fr8vqNCXn1BzPMGmQajdgEWUz");

#[program]
pub mod custody_vault {
    use super::*;

    /// Create the vault for a user.
    /// Creates the state PDA (seeds = ["state", user]) and funds the vault
    /// PDA (seeds = ["vault", state]) to the rent-exempt minimum.
    /// One vault per user, enforced by PDA derivation.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Deposit SOL into the vault.
    /// Only the vault owner can deposit. A zero amount is a valid no-op.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Withdraw SOL from the vault.
    /// Only the vault owner can withdraw, up to the full vault balance.
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount)
    }

    /// Close the vault, returning the vault balance and the state
    /// account's rent to the owner. Both PDAs are deallocated and may be
    /// re-initialized later by the same owner.
    pub fn close(ctx: Context<Close>) -> Result<()> {
        instructions::close::handler(ctx)
    }
}
