//! Deterministic record addresses.
//!
//! Every record lives at the program-derived address of a fixed label plus the
//! record's natural key, so finding a record and checking that it exists are the
//! same computation. The `#[account(seeds = ...)]` constraints in `lib.rs` use the
//! same labels and encodings; clients call these helpers to fill in instruction
//! accounts.

use anchor_lang::prelude::*;

use crate::constants::*;

/// Derives the address for `label` followed by `fields`, with its bump seed.
pub fn derive(label: &[u8], fields: &[&[u8]]) -> (Pubkey, u8) {
    let mut seeds = Vec::with_capacity(fields.len() + 1);
    seeds.push(label);
    seeds.extend_from_slice(fields);
    Pubkey::find_program_address(&seeds, &crate::ID)
}

pub fn poll_counter() -> (Pubkey, u8) {
    derive(POLL_COUNTER_SEED, &[])
}

pub fn registration_counter() -> (Pubkey, u8) {
    derive(REGISTRATION_COUNTER_SEED, &[])
}

pub fn vote_counter() -> (Pubkey, u8) {
    derive(VOTE_COUNTER_SEED, &[])
}

pub fn poll(poll_id: u64) -> (Pubkey, u8) {
    derive(POLL_SEED, &[&poll_id.to_le_bytes()])
}

pub fn candidate(poll_id: u64, cid: u64) -> (Pubkey, u8) {
    derive(CANDIDATE_SEED, &[&poll_id.to_le_bytes(), &cid.to_le_bytes()])
}

pub fn voter(poll_id: u64, owner: &Pubkey) -> (Pubkey, u8) {
    derive(VOTER_SEED, &[&poll_id.to_le_bytes(), owner.as_ref()])
}
