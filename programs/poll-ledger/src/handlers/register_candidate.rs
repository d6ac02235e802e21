use anchor_lang::prelude::*;

use crate::{
    engine::{self, Call},
    host,
    state::{Candidate, CandidateRegistered, Poll},
    RegisterCandidate,
};

/// Registers the signer's candidate in `poll_id` under the next global cid.
pub fn register_candidate(
    ctx: Context<RegisterCandidate>,
    poll_id: u64,
    name: String,
) -> Result<()> {
    let call = Call {
        signer: ctx.accounts.signer.key(),
        now: Clock::get()?.unix_timestamp,
    };

    let mut poll = host::load::<Poll>(&ctx.accounts.poll)?;
    let candidate = engine::register_candidate(
        &call,
        &mut ctx.accounts.registration_counter,
        poll.as_mut(),
        poll_id,
        name,
    )?;
    host::persist(&ctx.accounts.poll, poll.as_ref())?;

    let cid = candidate.cid;
    ctx.accounts.candidate.set_inner(Candidate {
        bump: ctx.bumps.candidate,
        ..candidate
    });

    msg!("Registered candidate {} in poll {}", cid, poll_id);
    emit!(CandidateRegistered {
        poll_id,
        cid,
        creator: call.signer,
        timestamp: call.now,
    });

    Ok(())
}
