use anchor_lang::prelude::*;

#[constant]
pub const SOLOTTO_SEED: &[u8] = b"solotto";

/// Seven days, in seconds.
#[constant]
pub const DRAW_PERIOD_SECONDS: i64 = 7 * 24 * 60 * 60;

pub const BPS_DENOMINATOR: u64 = 10_000;

/// Share of each transfer paid to the current winner.
#[constant]
pub const WINNER_FEE_BPS: u64 = 100;

/// Share of each transfer paid to the authority wallet.
#[constant]
pub const AUTHORITY_FEE_BPS: u64 = 100;

/// Holders sampled per draw.
pub const DRAW_CANDIDATES: usize = 4;

/// Upper bound on tracked holders; sizes the state account.
pub const MAX_HOLDERS: usize = 64;
