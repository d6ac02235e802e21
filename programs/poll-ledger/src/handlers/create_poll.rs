use anchor_lang::prelude::*;

use crate::{
    engine::{self, Call, NewPoll},
    state::{Poll, PollCreated},
    CreatePoll,
};

/// Creates the next poll, owned by the signer.
///
/// The poll account is derived from `poll_counter.total + 1`, the same id the
/// engine assigns, so clients can compute the address before sending. Ids start
/// at 1 and are never reused, even after the poll is closed.
///
/// # Arguments
/// * `params.title` - Poll title, at most 30 bytes
/// * `params.description` - Poll description, at most 200 bytes
/// * `params.start` / `params.end` - Voting window `[start, end)` in unix seconds; `start` must be earlier
/// * `params.allow_candidate_adding` - Lets anyone register candidates, not only the creator
/// * `params.allow_candidate_withdraw` - Lets the creator withdraw candidates registered by others
/// * `params.allow_vote_closing` - Lets the creator close votes cast by others
pub fn create_poll(ctx: Context<CreatePoll>, params: NewPoll) -> Result<()> {
    msg!("Creating a new poll");

    let call = Call {
        signer: ctx.accounts.signer.key(),
        now: Clock::get()?.unix_timestamp,
    };

    let poll = engine::create_poll(&call, &mut ctx.accounts.poll_counter, params)?;
    let poll_id = poll.id;
    ctx.accounts.poll.set_inner(Poll {
        bump: ctx.bumps.poll,
        ..poll
    });

    emit!(PollCreated {
        poll_id,
        creator: call.signer,
        timestamp: call.now,
    });

    Ok(())
}
