use anchor_lang::{prelude::*, AccountSerialize, Space};

use crate::{
    constants::*,
    engine, host,
    state::{PollCounter, RegistrationCounter, VoteCounter},
    Initialize,
};

/// One-off job creating the three global counters, all zeroed.
///
/// Fails with `AlreadyInitialized` if any counter address already holds a record,
/// so the ledger can only ever be initialized once.
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let accounts = &ctx.accounts;
    let occupied = [
        &accounts.poll_counter,
        &accounts.registration_counter,
        &accounts.vote_counter,
    ]
    .into_iter()
    .any(|counter| host::is_occupied(counter));

    let counters = engine::initialize(occupied)?;

    open_counter(
        accounts,
        &accounts.poll_counter,
        POLL_COUNTER_SEED,
        ctx.bumps.poll_counter,
        &PollCounter {
            bump: ctx.bumps.poll_counter,
            ..counters.polls
        },
    )?;
    open_counter(
        accounts,
        &accounts.registration_counter,
        REGISTRATION_COUNTER_SEED,
        ctx.bumps.registration_counter,
        &RegistrationCounter {
            bump: ctx.bumps.registration_counter,
            ..counters.registrations
        },
    )?;
    open_counter(
        accounts,
        &accounts.vote_counter,
        VOTE_COUNTER_SEED,
        ctx.bumps.vote_counter,
        &VoteCounter {
            bump: ctx.bumps.vote_counter,
            ..counters.votes
        },
    )?;

    msg!("Initialized poll, registration and vote counters");
    Ok(())
}

fn open_counter<'info, T: AccountSerialize + Space>(
    accounts: &Initialize<'info>,
    target: &UncheckedAccount<'info>,
    seed: &[u8],
    bump: u8,
    record: &T,
) -> Result<()> {
    let bump = [bump];
    host::create(
        &accounts.signer,
        target,
        &accounts.system_program,
        &[seed, &bump],
        DISCRIMINATOR_SIZE + T::INIT_SPACE,
    )?;
    host::persist(target, Some(record))
}
