//! Per-operation authorization predicates.

use anchor_lang::prelude::*;

use crate::state::{Candidate, Poll, Voter};

/// Open polls take candidates from anyone; otherwise only the creator adds them.
pub fn can_register_candidate(signer: &Pubkey, poll: &Poll) -> bool {
    poll.allow_candidate_adding || *signer == poll.creator
}

/// A candidate's registrant may always withdraw it. The poll creator may
/// withdraw anyone's candidate when the poll allows it.
pub fn can_withdraw_candidate(signer: &Pubkey, candidate: &Candidate, poll: &Poll) -> bool {
    *signer == candidate.creator || (poll.allow_candidate_withdraw && *signer == poll.creator)
}

/// A voter may always close their own vote. The poll creator may close
/// anyone's vote when the poll allows it.
pub fn can_close_vote(signer: &Pubkey, voter: &Voter, poll: &Poll) -> bool {
    *signer == voter.owner || (poll.allow_vote_closing && *signer == poll.creator)
}

pub fn can_close_poll(signer: &Pubkey, poll: &Poll) -> bool {
    *signer == poll.creator
}
