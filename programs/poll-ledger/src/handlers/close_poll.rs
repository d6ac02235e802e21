use anchor_lang::prelude::*;

use crate::{
    engine::{self, Call},
    host,
    state::{Poll, PollClosed},
    ClosePoll,
};

/// Closes a poll. Only its creator can do this; the record is kept and no
/// further candidate or vote changes are accepted against it.
pub fn close_poll(ctx: Context<ClosePoll>, poll_id: u64) -> Result<()> {
    let call = Call {
        signer: ctx.accounts.signer.key(),
        now: Clock::get()?.unix_timestamp,
    };

    let mut poll = host::load::<Poll>(&ctx.accounts.poll)?;
    engine::close_poll(
        &call,
        &mut ctx.accounts.poll_counter,
        poll.as_mut(),
        poll_id,
    )?;
    host::persist(&ctx.accounts.poll, poll.as_ref())?;

    msg!("Closing poll with id {}", poll_id);
    emit!(PollClosed {
        poll_id,
        closed_by: call.signer,
        timestamp: call.now,
    });

    Ok(())
}
