use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::error::SolottoError;
use crate::state::SolottoState;

/// Lets a holder register (or refresh) its balance so it takes part in the
/// next draw.
#[derive(Accounts)]
pub struct UpdateHolderBalance<'info> {
    #[account(mut)]
    pub solotto: Account<'info, SolottoState>,

    pub holder: Signer<'info>,

    #[account(
        constraint = holder_token_account.mint == solotto.mint @ SolottoError::InvalidMint,
        constraint = holder_token_account.owner == holder.key() @ SolottoError::InvalidOwner,
    )]
    pub holder_token_account: Account<'info, TokenAccount>,
}

pub fn process_update_holder_balance(ctx: Context<UpdateHolderBalance>) -> Result<()> {
    let holder = ctx.accounts.holder.key();
    let balance = ctx.accounts.holder_token_account.amount;

    ctx.accounts.solotto.record_holder(holder, balance)?;

    msg!("Updated holder {} with balance {}", holder, balance);
    Ok(())
}
