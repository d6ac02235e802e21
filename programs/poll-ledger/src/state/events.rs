use anchor_lang::prelude::*;

#[event]
pub struct PollCreated {
    pub poll_id: u64,
    pub creator: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct PollClosed {
    pub poll_id: u64,
    pub closed_by: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct CandidateRegistered {
    pub poll_id: u64,
    pub cid: u64,
    pub creator: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct CandidateWithdrawn {
    pub poll_id: u64,
    pub cid: u64,
    pub withdrawn_by: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct VoteCast {
    pub poll_id: u64,
    pub cid: u64,
    pub voter: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct VoteClosed {
    pub poll_id: u64,
    pub cid: u64,
    pub voter: Pubkey,
    pub closed_by: Pubkey,
    pub timestamp: i64,
}
