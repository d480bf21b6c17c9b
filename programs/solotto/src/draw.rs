//! Candidates are sampled from the holder list with a seed derived from the
//! current slot, the candidate position and the draw timestamp. The sampled
//! holder with the highest balance wins.

use anchor_lang::prelude::*;
use solana_program::hash::hashv;

use crate::constants::DRAW_CANDIDATES;
use crate::state::Holder;

/// Indices into a holder list of `len` entries, distinct, at most
/// `DRAW_CANDIDATES` of them, in selection order.
pub fn pick_candidates(len: usize, slot: u64, now: i64) -> Vec<usize> {
    let count = DRAW_CANDIDATES.min(len);
    let mut taken = vec![false; len];
    let mut picked = Vec::with_capacity(count);

    for i in 0..count {
        let seed = hashv(&[&slot.to_le_bytes(), &[i as u8], &now.to_le_bytes()]).to_bytes();
        let mut word = [0u8; 8];
        word.copy_from_slice(&seed[..8]);
        let mut index = (u64::from_le_bytes(word) % len as u64) as usize;

        // count <= len, so a free slot always exists
        while taken[index] {
            index = (index + 1) % len;
        }
        taken[index] = true;
        picked.push(index);
    }

    picked
}

/// Highest balance among the sampled candidates. Ties go to the candidate
/// picked first.
pub fn select_winner(holders: &[Holder], slot: u64, now: i64) -> Option<Pubkey> {
    pick_candidates(holders.len(), slot, now)
        .into_iter()
        .map(|index| holders[index])
        .fold(None, |best: Option<Holder>, candidate| match best {
            Some(current) if current.balance >= candidate.balance => Some(current),
            _ => Some(candidate),
        })
        .map(|winner| winner.owner)
}
