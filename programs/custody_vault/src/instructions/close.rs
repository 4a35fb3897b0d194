use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::derivation::{STATE_SEED, VAULT_SEED};
use crate::errors::VaultError;
use crate::state::VaultState;

#[derive(Accounts)]
pub struct Close<'info> {
    /// The vault owner closing the vault (receives all balances)
    #[account(mut)]
    pub user: Signer<'info>,

    /// The vault state PDA; rent is returned to the owner and the account
    /// is deallocated, so the same owner can initialize again later
    #[account(
        mut,
        seeds = [STATE_SEED, user.key().as_ref()],
        bump = vault_state.state_bump,
        constraint = vault_state.is_owner(&user.key()) @ VaultError::Unauthorized,
        close = user,
    )]
    pub vault_state: Account<'info, VaultState>,

    /// The lamport-holding vault PDA, drained to zero
    #[account(
        mut,
        seeds = [VAULT_SEED, vault_state.key().as_ref()],
        bump = vault_state.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    /// System program for the PDA-signed drain transfer
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Close>) -> Result<()> {
    let balance = ctx.accounts.vault.lamports();

    let vault_state_key = ctx.accounts.vault_state.key();
    let seeds = &[
        VAULT_SEED,
        vault_state_key.as_ref(),
        &[ctx.accounts.vault_state.vault_bump],
    ];
    let signer_seeds = &[&seeds[..]];

    // Drain the vault entirely; at zero lamports the runtime deallocates
    // the account. The state account is closed by the `close` constraint.
    system_program::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.user.to_account_info(),
            },
            signer_seeds,
        ),
        balance,
    )?;

    msg!(
        "Vault closed for owner {}. Returned {} lamports",
        ctx.accounts.vault_state.owner,
        balance
    );

    Ok(())
}
