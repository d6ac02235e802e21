use anchor_lang::prelude::*;

/// A candidacy in one poll. `cid` is drawn from a sequence shared by all polls.
#[account]
#[derive(InitSpace, Debug, Default, PartialEq, Eq)]
pub struct Candidate {
    /// PDA bump seed
    pub bump: u8,
    pub creator: Pubkey,
    pub poll_id: u64,
    pub cid: u64,
    /// Display name (max 32 bytes)
    #[max_len(32)]
    pub name: String,
    pub vote_count: u64,
    /// Cleared on withdrawal; the record itself is kept
    pub has_registered: bool,
}

impl Candidate {
    pub fn is_registered_in(&self, poll_id: u64) -> bool {
        self.has_registered && self.poll_id == poll_id
    }
}
