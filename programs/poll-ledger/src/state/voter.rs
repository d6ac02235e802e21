use anchor_lang::prelude::*;

/// One identity's ballot in one poll. Reused across close/re-cast cycles.
#[account]
#[derive(InitSpace, Debug, Default, PartialEq, Eq)]
pub struct Voter {
    /// PDA bump seed
    pub bump: u8,
    pub poll_id: u64,
    /// Candidate the live (or last) vote went to
    pub cid: u64,
    /// Identity the record is addressed by
    pub owner: Pubkey,
    pub has_voted: bool,
}
