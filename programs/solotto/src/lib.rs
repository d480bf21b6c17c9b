#![allow(clippy::result_large_err)]

use anchor_lang::prelude::*;

/// Seeds, draw period and fee rates.
pub mod constants;
/// Winner selection.
pub mod draw;
/// Program error codes.
pub mod error;
/// Fee split of a routed transfer.
pub mod fees;
/// Instruction handlers and their account structs.
pub mod instructions;
/// The `SolottoState` account and holder bookkeeping.
pub mod state;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("J1SgiaWF6Mo64Ka6VHzPmk9ZSQzWGkWVpQwCbuJsQmMW");

/// Token lottery with a dual fee structure.
///
/// Every transfer routed through the program pays 1% to the authority wallet
/// and 1% to the current weekly winner. Once per draw period up to four
/// holders are sampled and the one holding the most tokens becomes the
/// winner for the next period.
#[program]
pub mod solotto {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        process_initialize(ctx)
    }

    pub fn process_transfer(ctx: Context<ProcessTransfer>, amount: u64) -> Result<()> {
        process_fee_transfer(ctx, amount)
    }

    pub fn update_holder_balance(ctx: Context<UpdateHolderBalance>) -> Result<()> {
        process_update_holder_balance(ctx)
    }

    pub fn force_draw(ctx: Context<ForceDraw>) -> Result<()> {
        process_force_draw(ctx)
    }
}
