use anchor_lang::prelude::*;

#[error_code]
pub enum SolottoError {
    #[msg("Not authorized to perform this action")]
    NotAuthorized,
    #[msg("Transfer amount must be greater than zero")]
    InvalidAmount,
    #[msg("Token account does not belong to the lottery mint")]
    InvalidMint,
    #[msg("Token account is not owned by the expected wallet")]
    InvalidOwner,
    #[msg("Holder list is full")]
    HolderListFull,
    #[msg("Arithmetic overflow")]
    MathOverflow,
}
