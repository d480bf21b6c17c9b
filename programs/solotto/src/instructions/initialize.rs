use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::SOLOTTO_SEED;
use crate::state::SolottoState;

/// Accounts required to create the lottery state for an authority.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Lottery state, one per authority.
    #[account(
        init,
        payer = authority,
        space = 8 + SolottoState::INIT_SPACE,
        seeds = [SOLOTTO_SEED, authority.key().as_ref()],
        bump
    )]
    pub solotto: Account<'info, SolottoState>,

    /// Creator of the lottery. Pays for the state account and receives the
    /// authority fee.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Mint of the token whose transfers are routed through the lottery.
    pub mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
}

pub fn process_initialize(ctx: Context<Initialize>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let solotto = &mut ctx.accounts.solotto;

    solotto.authority = ctx.accounts.authority.key();
    solotto.authority_wallet = ctx.accounts.authority.key();
    solotto.mint = ctx.accounts.mint.key();
    solotto.holders = Vec::new();
    solotto.current_winner = None;
    solotto.winner_fees_distributed = 0;
    solotto.authority_fees_distributed = 0;
    solotto.bump = ctx.bumps.solotto;
    solotto.schedule_next_draw(now)?;

    msg!(
        "Solotto initialized, next draw at {}",
        solotto.next_draw_time
    );
    msg!("Authority wallet: {}", solotto.authority_wallet);
    Ok(())
}
