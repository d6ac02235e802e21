use anchor_lang::prelude::*;

use crate::{
    engine::{self, Call},
    host,
    state::{Candidate, CandidateWithdrawn, Poll},
    UnregisterCandidate,
};

/// Withdraws a candidacy. The record stays at its address, marked unregistered.
pub fn unregister_candidate(
    ctx: Context<UnregisterCandidate>,
    poll_id: u64,
    cid: u64,
) -> Result<()> {
    let call = Call {
        signer: ctx.accounts.signer.key(),
        now: Clock::get()?.unix_timestamp,
    };

    let mut poll = host::load::<Poll>(&ctx.accounts.poll)?;
    let mut candidate = host::load::<Candidate>(&ctx.accounts.candidate)?;
    engine::unregister_candidate(
        &call,
        &mut ctx.accounts.registration_counter,
        poll.as_mut(),
        candidate.as_mut(),
        poll_id,
        cid,
    )?;
    host::persist(&ctx.accounts.poll, poll.as_ref())?;
    host::persist(&ctx.accounts.candidate, candidate.as_ref())?;

    msg!("Withdrew candidate {} from poll {}", cid, poll_id);
    emit!(CandidateWithdrawn {
        poll_id,
        cid,
        withdrawn_by: call.signer,
        timestamp: call.now,
    });

    Ok(())
}
