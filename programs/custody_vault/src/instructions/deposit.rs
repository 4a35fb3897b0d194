use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::derivation::{STATE_SEED, VAULT_SEED};
use crate::errors::VaultError;
use crate::state::VaultState;

#[derive(Accounts)]
pub struct Deposit<'info> {
    /// The vault owner making the deposit
    #[account(mut)]
    pub user: Signer<'info>,

    /// The vault state PDA for this owner
    /// Seeds re-verify the derivation against the recorded bump
    #[account(
        seeds = [STATE_SEED, user.key().as_ref()],
        bump = vault_state.state_bump,
        constraint = vault_state.is_owner(&user.key()) @ VaultError::Unauthorized,
    )]
    pub vault_state: Account<'info, VaultState>,

    /// The lamport-holding vault PDA to deposit into
    #[account(
        mut,
        seeds = [VAULT_SEED, vault_state.key().as_ref()],
        bump = vault_state.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    /// System program for the SOL transfer
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    // A zero amount is a valid no-op; the system program accepts
    // zero-lamport transfers.
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.user.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        amount,
    )?;

    msg!(
        "Deposited {} lamports. Vault balance: {}",
        amount,
        ctx.accounts.vault.lamports()
    );

    Ok(())
}
