use anchor_lang::prelude::*;

use crate::constants::SOLOTTO_SEED;
use crate::error::SolottoError;
use crate::state::SolottoState;

/// Accounts required to run a draw ahead of schedule.
///
/// Only the lottery authority may force a draw.
#[derive(Accounts)]
pub struct ForceDraw<'info> {
    #[account(
        mut,
        seeds = [SOLOTTO_SEED, solotto.authority.as_ref()],
        bump = solotto.bump,
        has_one = authority @ SolottoError::NotAuthorized,
    )]
    pub solotto: Account<'info, SolottoState>,

    pub authority: Signer<'info>,
}

pub fn process_force_draw(ctx: Context<ForceDraw>) -> Result<()> {
    let clock = Clock::get()?;
    ctx.accounts
        .solotto
        .draw(clock.slot, clock.unix_timestamp)?;
    Ok(())
}
