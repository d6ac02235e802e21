use anchor_lang::prelude::*;

use crate::{
    engine::{self, Call},
    host,
    state::{Candidate, Poll, VoteCast},
    CastVote,
};

/// Casts the signer's vote for candidate `cid` in poll `poll_id`.
///
/// The voter account is created on the signer's first ballot in the poll and
/// updated in place on later ones, so each identity holds at most one live vote.
/// A voter who closed their vote may cast again, for any registered candidate.
///
/// Votes are only accepted inside the poll window, `start <= now < end`, and
/// never after the poll was closed by its creator.
///
/// # Arguments
/// * `poll_id` - The poll being voted in (also a seed of the poll, candidate and voter accounts)
/// * `cid` - The candidate receiving the vote; it must be registered in `poll_id`
pub fn cast_vote(ctx: Context<CastVote>, poll_id: u64, cid: u64) -> Result<()> {
    let call = Call {
        signer: ctx.accounts.signer.key(),
        now: Clock::get()?.unix_timestamp,
    };

    let mut poll = host::load::<Poll>(&ctx.accounts.poll)?;
    let mut candidate = host::load::<Candidate>(&ctx.accounts.candidate)?;
    engine::cast_vote(
        &call,
        &mut ctx.accounts.vote_counter,
        poll.as_mut(),
        candidate.as_mut(),
        &mut ctx.accounts.voter,
        poll_id,
        cid,
    )?;
    ctx.accounts.voter.bump = ctx.bumps.voter;
    host::persist(&ctx.accounts.poll, poll.as_ref())?;
    host::persist(&ctx.accounts.candidate, candidate.as_ref())?;

    msg!("Vote cast for candidate {} in poll {}", cid, poll_id);
    emit!(VoteCast {
        poll_id,
        cid,
        voter: call.signer,
        timestamp: call.now,
    });

    Ok(())
}
