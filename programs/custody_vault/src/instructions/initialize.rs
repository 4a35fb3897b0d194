use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::derivation::{self, STATE_SEED, VAULT_SEED};
use crate::errors::VaultError;
use crate::state::VaultState;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The user creating the vault (pays for account creation)
    #[account(mut)]
    pub user: Signer<'info>,

    /// The vault state PDA to initialize
    /// Seeds: ["state", user_pubkey]
    /// Constraint: one vault per user, enforced by PDA derivation; `init`
    /// rejects a second initialize while this account is live
    #[account(
        init,
        payer = user,
        space = VaultState::SIZE,
        seeds = [STATE_SEED, user.key().as_ref()],
        bump,
    )]
    pub vault_state: Account<'info, VaultState>,

    /// The lamport-holding vault PDA, a zero-data system account
    /// Seeds: ["vault", vault_state_pubkey]
    #[account(
        mut,
        seeds = [VAULT_SEED, vault_state.key().as_ref()],
        bump,
    )]
    pub vault: SystemAccount<'info>,

    /// System program for account creation and the funding transfer
    pub system_program: Program<'info, System>,
}

/// Lamports still needed to lift the vault to the rent floor.
///
/// The vault PDA is a plain system address anyone can transfer to before
/// the owner ever initializes, so lamports already sitting there count
/// toward the floor instead of blocking creation.
pub fn required_top_up(rent_floor: u64, current_balance: u64) -> u64 {
    rent_floor.saturating_sub(current_balance)
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    // Recompute both derivations from the signer alone and reject any
    // supplied account that does not match.
    let (state_key, state_bump) = derivation::derive_state_address(&ctx.accounts.user.key());
    let (vault_key, vault_bump) = derivation::derive_vault_address(&state_key);
    require_keys_eq!(
        ctx.accounts.vault_state.key(),
        state_key,
        VaultError::AddressMismatch
    );
    require_keys_eq!(ctx.accounts.vault.key(), vault_key, VaultError::AddressMismatch);

    let vault_state = &mut ctx.accounts.vault_state;
    vault_state.owner = ctx.accounts.user.key();
    vault_state.vault_bump = vault_bump;
    vault_state.state_bump = state_bump;

    // Bring the vault up to the rent-exempt minimum for a zero-data
    // account so the runtime retains it.
    let rent_floor = Rent::get()?.minimum_balance(0);
    let top_up = required_top_up(rent_floor, ctx.accounts.vault.lamports());
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.user.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        top_up,
    )?;

    msg!(
        "Vault initialized for owner {} with {} lamports rent floor",
        vault_state.owner,
        rent_floor
    );

    Ok(())
}
