use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::derivation::{STATE_SEED, VAULT_SEED};
use crate::errors::VaultError;
use crate::state::VaultState;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// The vault owner requesting the withdrawal
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

    /// The lamport-holding vault PDA to withdraw from
    #[account(
        mut,
        seeds = [VAULT_SEED, vault_state.key().as_ref()],
        bump = vault_state.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    /// System program (the vault is system-owned, so the debit is a
    /// PDA-signed system transfer)
    pub system_program: Program<'info, System>,
}

/// Overdraft guard: withdrawals cap at the full balance. No rent floor is
/// reserved, so a withdrawal may leave the vault below the rent-exempt
/// minimum without closing it.
pub fn check_withdraw(amount: u64, balance: u64) -> Result<()> {
    require!(amount <= balance, VaultError::InsufficientFunds);
    Ok(())
}

pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    check_withdraw(amount, ctx.accounts.vault.lamports())?;

    let vault_state_key = ctx.accounts.vault_state.key();
    let seeds = &[
        VAULT_SEED,
        vault_state_key.as_ref(),
        &[ctx.accounts.vault_state.vault_bump],
    ];
    let signer_seeds = &[&seeds[..]];

    system_program::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.user.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    msg!(
        "Withdrew {} lamports. Vault balance: {}",
        amount,
        ctx.accounts.vault.lamports()
    );

    Ok(())
}
