use anchor_lang::prelude::*;

use crate::constants::{AUTHORITY_FEE_BPS, BPS_DENOMINATOR, WINNER_FEE_BPS};
use crate::error::SolottoError;

/// How a routed transfer is divided between the recipient, the weekly
/// winner and the authority wallet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSplit {
    pub winner_fee: u64,
    pub authority_fee: u64,
    /// What the recipient receives before any fee falls back to it.
    pub net: u64,
}

impl FeeSplit {
    pub fn compute(amount: u64) -> Result<Self> {
        let winner_fee = bps_of(amount, WINNER_FEE_BPS)?;
        let authority_fee = bps_of(amount, AUTHORITY_FEE_BPS)?;
        let net = amount
            .checked_sub(winner_fee)
            .and_then(|rest| rest.checked_sub(authority_fee))
            .ok_or(SolottoError::MathOverflow)?;

        Ok(Self {
            winner_fee,
            authority_fee,
            net,
        })
    }
}

// Rounds down.
fn bps_of(amount: u64, bps: u64) -> Result<u64> {
    let fee = (amount as u128)
        .checked_mul(bps as u128)
        .ok_or(SolottoError::MathOverflow)?
        / BPS_DENOMINATOR as u128;
    u64::try_from(fee).map_err(|_| error!(SolottoError::MathOverflow))
}
