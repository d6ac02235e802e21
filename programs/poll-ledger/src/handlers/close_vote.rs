use anchor_lang::prelude::*;

use crate::{
    engine::{self, Call},
    host,
    state::{Candidate, Poll, VoteClosed, Voter},
    CloseVote,
};

/// Closes the live vote held by `owner` in poll `poll_id`.
///
/// `owner` is normally the signer. The poll creator may pass another voter's
/// identity when the poll allows vote closing.
///
/// The candidate's and the poll's tallies drop by one and the voter record is
/// kept with `has_voted` cleared, ready for a later ballot. `VoteCounter.total`
/// is untouched. Fails with `PollNotActive` once the poll has ended or was closed.
///
/// # Arguments
/// * `poll_id` - The poll holding the vote
/// * `cid` - The candidate the vote went to; must match the voter record
pub fn close_vote(ctx: Context<CloseVote>, poll_id: u64, cid: u64) -> Result<()> {
    let call = Call {
        signer: ctx.accounts.signer.key(),
        now: Clock::get()?.unix_timestamp,
    };

    let mut poll = host::load::<Poll>(&ctx.accounts.poll)?;
    let mut candidate = host::load::<Candidate>(&ctx.accounts.candidate)?;
    let mut voter = host::load::<Voter>(&ctx.accounts.voter)?;
    engine::close_vote(
        &call,
        &mut ctx.accounts.vote_counter,
        poll.as_mut(),
        candidate.as_mut(),
        voter.as_mut(),
        poll_id,
        cid,
    )?;
    host::persist(&ctx.accounts.poll, poll.as_ref())?;
    host::persist(&ctx.accounts.candidate, candidate.as_ref())?;
    host::persist(&ctx.accounts.voter, voter.as_ref())?;

    msg!("Vote for candidate {} in poll {} closed", cid, poll_id);
    emit!(VoteClosed {
        poll_id,
        cid,
        voter: ctx.accounts.owner.key(),
        closed_by: call.signer,
        timestamp: call.now,
    });

    Ok(())
}
