//! Ledger state transitions.
//!
//! Each operation receives exactly the records it touches, checks every
//! precondition first and only then writes. A call that returns `Err` leaves all
//! of its arguments as they were. Records that may be absent are passed as
//! `Option`; the caller decides presence from the derived address.

use anchor_lang::prelude::*;

use crate::{
    constants::*,
    error::ErrorCode,
    policy,
    state::{Candidate, Poll, PollCounter, RegistrationCounter, Tally, VoteCounter, Voter},
};

/// Who is calling and when, as vouched for by the host.
#[derive(Clone, Copy, Debug)]
pub struct Call {
    pub signer: Pubkey,
    pub now: i64,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Counters {
    pub polls: PollCounter,
    pub registrations: RegistrationCounter,
    pub votes: VoteCounter,
}

#[derive(Clone, Debug, Default)]
pub struct NewPoll {
    pub title: String,
    pub description: String,
    pub start: i64,
    pub end: i64,
    pub allow_candidate_adding: bool,
    pub allow_candidate_withdraw: bool,
    pub allow_vote_closing: bool,
}

/// Produces the three zeroed counters. `occupied` is true when any of their
/// addresses already holds a record.
pub fn initialize(occupied: bool) -> Result<Counters> {
    require!(!occupied, ErrorCode::AlreadyInitialized);
    Ok(Counters::default())
}

/// Builds the next poll. Its id is the poll counter's new total, which is also
/// the key its address was derived from.
pub fn create_poll(call: &Call, counter: &mut PollCounter, params: NewPoll) -> Result<Poll> {
    require!(params.title.len() <= MAX_TITLE_LEN, ErrorCode::TitleTooLong);
    require!(
        params.description.len() <= MAX_DESCRIPTION_LEN,
        ErrorCode::DescriptionTooLong
    );
    require!(params.start < params.end, ErrorCode::InvalidDates);

    let totals = counter.totals().opened()?;
    counter.set_totals(totals);

    Ok(Poll {
        bump: 0,
        id: totals.total,
        creator: call.signer,
        title: params.title,
        description: params.description,
        start: params.start,
        end: params.end,
        candidate_count: 0,
        vote_count: 0,
        allow_candidate_adding: params.allow_candidate_adding,
        allow_candidate_withdraw: params.allow_candidate_withdraw,
        allow_vote_closing: params.allow_vote_closing,
        closed: false,
    })
}

/// Builds a candidacy with the next global `cid`.
pub fn register_candidate(
    call: &Call,
    registrations: &mut RegistrationCounter,
    poll: Option<&mut Poll>,
    poll_id: u64,
    name: String,
) -> Result<Candidate> {
    let poll = poll
        .filter(|poll| poll.id == poll_id)
        .ok_or(ErrorCode::PollNotFound)?;
    require!(name.len() <= MAX_NAME_LEN, ErrorCode::NameTooLong);
    require!(poll.is_live(call.now), ErrorCode::PollNotActive);
    require!(
        policy::can_register_candidate(&call.signer, poll),
        ErrorCode::Unauthorized
    );

    let totals = registrations.totals().opened()?;
    let candidate_count = poll
        .candidate_count
        .checked_add(1)
        .ok_or(ErrorCode::CounterOverflow)?;

    registrations.set_totals(totals);
    poll.candidate_count = candidate_count;

    Ok(Candidate {
        bump: 0,
        creator: call.signer,
        poll_id,
        cid: totals.total,
        name,
        vote_count: 0,
        has_registered: true,
    })
}

pub fn unregister_candidate(
    call: &Call,
    registrations: &mut RegistrationCounter,
    poll: Option<&mut Poll>,
    candidate: Option<&mut Candidate>,
    poll_id: u64,
    cid: u64,
) -> Result<()> {
    let poll = poll
        .filter(|poll| poll.id == poll_id)
        .ok_or(ErrorCode::PollNotFound)?;
    let candidate = candidate
        .filter(|candidate| candidate.cid == cid && candidate.is_registered_in(poll_id))
        .ok_or(ErrorCode::CandidateNotFound)?;
    require!(!poll.closed, ErrorCode::PollNotActive);
    require!(
        policy::can_withdraw_candidate(&call.signer, candidate, poll),
        ErrorCode::Unauthorized
    );
    // Live votes must be closed first so poll and voter tallies stay in step.
    require!(candidate.vote_count == 0, ErrorCode::CandidateHasVotes);

    let totals = registrations.totals().released()?;
    let candidate_count = poll
        .candidate_count
        .checked_sub(1)
        .ok_or(ErrorCode::CounterUnderflow)?;

    registrations.set_totals(totals);
    poll.candidate_count = candidate_count;
    candidate.has_registered = false;

    Ok(())
}

/// Records `call.signer`'s vote. `voter` is the record at the signer's voter
/// address, freshly zeroed if this is their first ballot in the poll.
pub fn cast_vote(
    call: &Call,
    votes: &mut VoteCounter,
    poll: Option<&mut Poll>,
    candidate: Option<&mut Candidate>,
    voter: &mut Voter,
    poll_id: u64,
    cid: u64,
) -> Result<()> {
    let poll = poll
        .filter(|poll| poll.id == poll_id)
        .ok_or(ErrorCode::PollNotFound)?;
    require!(poll.accepts_votes(call.now), ErrorCode::PollNotActive);
    let candidate = candidate
        .filter(|candidate| candidate.cid == cid && candidate.is_registered_in(poll_id))
        .ok_or(ErrorCode::CandidateNotFound)?;
    require!(!voter.has_voted, ErrorCode::AlreadyVoted);

    let totals = votes.totals().opened()?;
    let candidate_votes = candidate
        .vote_count
        .checked_add(1)
        .ok_or(ErrorCode::CounterOverflow)?;
    let poll_votes = poll
        .vote_count
        .checked_add(1)
        .ok_or(ErrorCode::CounterOverflow)?;

    votes.set_totals(totals);
    candidate.vote_count = candidate_votes;
    poll.vote_count = poll_votes;
    voter.poll_id = poll_id;
    voter.cid = cid;
    voter.owner = call.signer;
    voter.has_voted = true;

    Ok(())
}

/// Withdraws the live vote held by `voter`, which may belong to someone other
/// than the signer when the poll lets its creator close votes.
pub fn close_vote(
    call: &Call,
    votes: &mut VoteCounter,
    poll: Option<&mut Poll>,
    candidate: Option<&mut Candidate>,
    voter: Option<&mut Voter>,
    poll_id: u64,
    cid: u64,
) -> Result<()> {
    let poll = poll
        .filter(|poll| poll.id == poll_id)
        .ok_or(ErrorCode::PollNotFound)?;
    let voter = voter
        .filter(|voter| voter.has_voted && voter.poll_id == poll_id)
        .ok_or(ErrorCode::VoteNotFound)?;
    require!(voter.cid == cid, ErrorCode::CandidateNotFound);
    let candidate = candidate
        .filter(|candidate| candidate.cid == cid && candidate.poll_id == poll_id)
        .ok_or(ErrorCode::CandidateNotFound)?;
    require!(
        policy::can_close_vote(&call.signer, voter, poll),
        ErrorCode::Unauthorized
    );
    require!(poll.is_live(call.now), ErrorCode::PollNotActive);

    let totals = votes.totals().released()?;
    let candidate_votes = candidate
        .vote_count
        .checked_sub(1)
        .ok_or(ErrorCode::CounterUnderflow)?;
    let poll_votes = poll
        .vote_count
        .checked_sub(1)
        .ok_or(ErrorCode::CounterUnderflow)?;

    votes.set_totals(totals);
    candidate.vote_count = candidate_votes;
    poll.vote_count = poll_votes;
    voter.has_voted = false;

    Ok(())
}

pub fn close_poll(
    call: &Call,
    counter: &mut PollCounter,
    poll: Option<&mut Poll>,
    poll_id: u64,
) -> Result<()> {
    let poll = poll
        .filter(|poll| poll.id == poll_id)
        .ok_or(ErrorCode::PollNotFound)?;
    require!(
        policy::can_close_poll(&call.signer, poll),
        ErrorCode::Unauthorized
    );
    require!(!poll.closed, ErrorCode::PollNotActive);

    let totals = counter.totals().released()?;

    counter.set_totals(totals);
    poll.closed = true;

    Ok(())
}
