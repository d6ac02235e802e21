use anchor_lang::prelude::*;

/// A poll and its live tallies.
#[account]
#[derive(InitSpace, Debug, Default, PartialEq, Eq)]
pub struct Poll {
    /// PDA bump seed
    pub bump: u8,
    /// Sequential identifier, starting at 1
    pub id: u64,
    pub creator: Pubkey,
    /// Poll title (max 30 bytes)
    #[max_len(30)]
    pub title: String,
    /// Poll description (max 200 bytes)
    #[max_len(200)]
    pub description: String,
    /// Voting window is `[start, end)`, unix seconds
    pub start: i64,
    pub end: i64,
    /// Registered (not withdrawn) candidates
    pub candidate_count: u64,
    /// Live votes across all registered candidates
    pub vote_count: u64,
    /// Anyone may register a candidate; otherwise only the creator
    pub allow_candidate_adding: bool,
    /// The creator may withdraw candidates registered by others
    pub allow_candidate_withdraw: bool,
    /// The creator may close votes cast by others
    pub allow_vote_closing: bool,
    /// Set by `close_poll`
    pub closed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollPhase {
    Upcoming,
    Open,
    Ended,
    Closed,
}

impl Poll {
    pub fn phase(&self, now: i64) -> PollPhase {
        if self.closed {
            PollPhase::Closed
        } else if now < self.start {
            PollPhase::Upcoming
        } else if now < self.end {
            PollPhase::Open
        } else {
            PollPhase::Ended
        }
    }

    pub fn accepts_votes(&self, now: i64) -> bool {
        self.phase(now) == PollPhase::Open
    }

    /// Candidacies and vote withdrawals are accepted until the poll ends or is closed.
    pub fn is_live(&self, now: i64) -> bool {
        matches!(self.phase(now), PollPhase::Upcoming | PollPhase::Open)
    }
}
