use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::SOLOTTO_SEED;
use crate::error::SolottoError;
use crate::fees::FeeSplit;
use crate::state::SolottoState;

/// Accounts required to route a token transfer through the lottery.
///
/// The recipient gets the amount minus the winner and authority fees. A fee
/// whose destination account is not supplied falls back to the recipient;
/// with no winner drawn yet the winner fee stays with the sender.
#[derive(Accounts)]
pub struct ProcessTransfer<'info> {
    #[account(
        mut,
        seeds = [SOLOTTO_SEED, solotto.authority.as_ref()],
        bump = solotto.bump,
    )]
    pub solotto: Account<'info, SolottoState>,

    #[account(
        mut,
        constraint = from_token_account.mint == solotto.mint @ SolottoError::InvalidMint,
        constraint = from_token_account.owner == from.key() @ SolottoError::InvalidOwner,
    )]
    pub from_token_account: Account<'info, TokenAccount>,

    /// CHECK: Only used as the holder key of `from_token_account`.
    pub from: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = to_token_account.mint == solotto.mint @ SolottoError::InvalidMint,
        constraint = to_token_account.owner == to.key() @ SolottoError::InvalidOwner,
    )]
    pub to_token_account: Account<'info, TokenAccount>,

    /// CHECK: Only used as the holder key of `to_token_account`.
    pub to: UncheckedAccount<'info>,

    /// Owner or delegate of the source token account.
    pub authority: Signer<'info>,

    /// Token account of the current winner. Validated in the handler.
    #[account(mut)]
    pub winner_token_account: Option<Account<'info, TokenAccount>>,

    /// Token account of the authority wallet. Validated in the handler.
    #[account(mut)]
    pub authority_token_account: Option<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> ProcessTransfer<'info> {
    fn pay(&self, to: AccountInfo<'info>, amount: u64) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        token::transfer(
            CpiContext::new(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.from_token_account.to_account_info(),
                    to,
                    authority: self.authority.to_account_info(),
                },
            ),
            amount,
        )
    }

    fn pay_winner_fee(&mut self, fee: u64) -> Result<()> {
        if fee == 0 {
            return Ok(());
        }

        let Some(winner) = self.solotto.current_winner else {
            // no winner this period, the sender keeps the fee
            return Ok(());
        };

        match &self.winner_token_account {
            Some(account) => {
                require_keys_eq!(account.mint, self.solotto.mint, SolottoError::InvalidMint);
                require_keys_eq!(account.owner, winner, SolottoError::InvalidOwner);
                self.pay(account.to_account_info(), fee)?;
                self.solotto.add_winner_fees(fee)?;
                msg!("Paid {} to weekly winner", fee);
            }
            None => {
                self.pay(self.to_token_account.to_account_info(), fee)?;
                msg!("Winner fee {} sent to recipient", fee);
            }
        }
        Ok(())
    }

    fn pay_authority_fee(&mut self, fee: u64) -> Result<()> {
        if fee == 0 {
            return Ok(());
        }

        match &self.authority_token_account {
            Some(account) => {
                require_keys_eq!(account.mint, self.solotto.mint, SolottoError::InvalidMint);
                require_keys_eq!(
                    account.owner,
                    self.solotto.authority_wallet,
                    SolottoError::InvalidOwner
                );
                self.pay(account.to_account_info(), fee)?;
                self.solotto.add_authority_fees(fee)?;
                msg!("Paid {} to authority wallet", fee);
            }
            None => {
                self.pay(self.to_token_account.to_account_info(), fee)?;
                msg!("Authority fee {} sent to recipient", fee);
            }
        }
        Ok(())
    }
}

/// Moves `amount` tokens from the sender to the recipient, splitting off the
/// winner and authority fees, then refreshes both holders and runs the draw
/// when it is due.
pub fn process_fee_transfer(ctx: Context<ProcessTransfer>, amount: u64) -> Result<()> {
    require!(amount > 0, SolottoError::InvalidAmount);
    let split = FeeSplit::compute(amount)?;
    let accounts = ctx.accounts;

    accounts.pay(accounts.to_token_account.to_account_info(), split.net)?;
    accounts.pay_winner_fee(split.winner_fee)?;
    accounts.pay_authority_fee(split.authority_fee)?;

    msg!(
        "Transferred {} tokens, winner fee {}, authority fee {}",
        split.net,
        split.winner_fee,
        split.authority_fee
    );

    accounts.from_token_account.reload()?;
    accounts.to_token_account.reload()?;

    let from = accounts.from.key();
    let from_balance = accounts.from_token_account.amount;
    let to = accounts.to.key();
    let to_balance = accounts.to_token_account.amount;
    for (owner, balance) in [(from, from_balance), (to, to_balance)] {
        if !accounts.solotto.refresh_holder(owner, balance) {
            msg!("Holder list full, {} not tracked", owner);
        }
    }

    let clock = Clock::get()?;
    if accounts.solotto.draw_due(clock.unix_timestamp) {
        accounts.solotto.draw(clock.slot, clock.unix_timestamp)?;
    }

    Ok(())
}
