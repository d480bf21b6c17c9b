use anchor_lang::prelude::*;

use crate::constants::{DRAW_PERIOD_SECONDS, MAX_HOLDERS};
use crate::draw;
use crate::error::SolottoError;

#[account]
#[derive(InitSpace)]
pub struct SolottoState {
    /// Creator of the lottery; the only key allowed to force a draw.
    pub authority: Pubkey,

    /// Wallet whose token account receives the authority fee.
    pub authority_wallet: Pubkey,

    /// Mint of the token the lottery tracks.
    pub mint: Pubkey,

    /// UNIX timestamp of the last draw (or of initialization).
    pub last_draw_time: i64,

    /// UNIX timestamp at or after which the next transfer triggers a draw.
    pub next_draw_time: i64,

    /// Holders with a non-zero balance, each owner at most once.
    #[max_len(MAX_HOLDERS)]
    pub holders: Vec<Holder>,

    /// Wallet receiving the lottery fee until the next draw.
    pub current_winner: Option<Pubkey>,

    /// Total lottery fees paid to winners.
    pub winner_fees_distributed: u64,

    /// Total fees paid to the authority wallet.
    pub authority_fees_distributed: u64,

    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct Holder {
    pub owner: Pubkey,
    pub balance: u64,
}

impl SolottoState {
    /// Stores the latest observed balance of `owner`. A zero balance drops
    /// the holder. Fails when a new holder does not fit.
    pub fn record_holder(&mut self, owner: Pubkey, balance: u64) -> Result<()> {
        require!(
            self.refresh_holder(owner, balance),
            SolottoError::HolderListFull
        );
        Ok(())
    }

    /// Same as `record_holder`, but a new holder that does not fit is left
    /// out. Returns whether the balance was applied.
    pub fn refresh_holder(&mut self, owner: Pubkey, balance: u64) -> bool {
        match self.holders.iter().position(|h| h.owner == owner) {
            Some(index) if balance > 0 => self.holders[index].balance = balance,
            Some(index) => {
                self.holders.remove(index);
            }
            None if balance > 0 => {
                if self.holders.len() >= MAX_HOLDERS {
                    return false;
                }
                self.holders.push(Holder { owner, balance });
            }
            None => {}
        }
        true
    }

    pub fn schedule_next_draw(&mut self, now: i64) -> Result<()> {
        self.last_draw_time = now;
        self.next_draw_time = now
            .checked_add(DRAW_PERIOD_SECONDS)
            .ok_or(SolottoError::MathOverflow)?;
        Ok(())
    }

    pub fn draw_due(&self, now: i64) -> bool {
        now >= self.next_draw_time
    }

    /// Picks a new winner and starts the next draw period.
    pub fn draw(&mut self, slot: u64, now: i64) -> Result<Option<Pubkey>> {
        self.holders.retain(|h| h.balance > 0);
        self.current_winner = draw::select_winner(&self.holders, slot, now);
        self.schedule_next_draw(now)?;

        match self.current_winner {
            Some(winner) => {
                msg!("New winner drawn: {}", winner);
                msg!(
                    "Winner receives the lottery fee until {}",
                    self.next_draw_time
                );
            }
            None => msg!("No holders available for draw"),
        }

        Ok(self.current_winner)
    }

    pub fn add_winner_fees(&mut self, fee: u64) -> Result<()> {
        self.winner_fees_distributed = self
            .winner_fees_distributed
            .checked_add(fee)
            .ok_or(SolottoError::MathOverflow)?;
        Ok(())
    }

    pub fn add_authority_fees(&mut self, fee: u64) -> Result<()> {
        self.authority_fees_distributed = self
            .authority_fees_distributed
            .checked_add(fee)
            .ok_or(SolottoError::MathOverflow)?;
        Ok(())
    }
}
