use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    /// A supplied account does not match the recomputed derived address
    #[msg("Supplied account does not match the derived address")]
    AddressMismatch,

    /// Unauthorized: signer is not the vault owner
    #[msg("Unauthorized: signer is not the vault owner")]
    Unauthorized,

    /// Withdraw amount exceeds vault balance
    #[msg("Withdraw amount exceeds vault balance")]
    InsufficientFunds,
}
