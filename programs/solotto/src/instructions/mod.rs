pub mod force_draw;
pub mod initialize;
pub mod transfer;
pub mod update_holder_balance;

pub use force_draw::*;
pub use initialize::*;
pub use transfer::*;
pub use update_holder_balance::*;
