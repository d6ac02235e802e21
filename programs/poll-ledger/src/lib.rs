// Stops Rust Analyzer complaining about missing configs
// See https://solana.stackexchange.com/questions/17777
#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod address;
pub mod constants;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod host;
pub mod policy;
pub mod state;

use constants::*;
pub use error::ErrorCode;
pub use state::*;

declare_id!("5avbZ3Tbt4zemSbegjambTc57WcMqRu1S4mkRaZhuL8J");

#[program]
pub mod poll_ledger {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        handlers::initialize::initialize(ctx)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn create_poll(
        ctx: Context<CreatePoll>,
        title: String,
        description: String,
        start: i64,
        end: i64,
        allow_candidate_adding: bool,
        allow_candidate_withdraw: bool,
        allow_vote_closing: bool,
    ) -> Result<()> {
        handlers::create_poll::create_poll(
            ctx,
            engine::NewPoll {
                title,
                description,
                start,
                end,
                allow_candidate_adding,
                allow_candidate_withdraw,
                allow_vote_closing,
            },
        )
    }

    pub fn register_candidate(
        ctx: Context<RegisterCandidate>,
        poll_id: u64,
        name: String,
    ) -> Result<()> {
        handlers::register_candidate::register_candidate(ctx, poll_id, name)
    }

    pub fn unregister_candidate(
        ctx: Context<UnregisterCandidate>,
        poll_id: u64,
        cid: u64,
    ) -> Result<()> {
        handlers::unregister_candidate::unregister_candidate(ctx, poll_id, cid)
    }

    pub fn cast_vote(ctx: Context<CastVote>, poll_id: u64, cid: u64) -> Result<()> {
        handlers::cast_vote::cast_vote(ctx, poll_id, cid)
    }

    pub fn close_vote(ctx: Context<CloseVote>, poll_id: u64, cid: u64) -> Result<()> {
        handlers::close_vote::close_vote(ctx, poll_id, cid)
    }

    pub fn close_poll(ctx: Context<ClosePoll>, poll_id: u64) -> Result<()> {
        handlers::close_poll::close_poll(ctx, poll_id)
    }
}

// Account contexts. Every record a call reads or writes is listed here with its
// derived address, so the runtime can schedule non-overlapping calls in parallel.

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [POLL_COUNTER_SEED],
        bump,
    )]
    /// CHECK: poll_counter, created by the handler; an occupied address is rejected
    pub poll_counter: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [REGISTRATION_COUNTER_SEED],
        bump,
    )]
    /// CHECK: registration_counter, created by the handler; an occupied address is rejected
    pub registration_counter: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [VOTE_COUNTER_SEED],
        bump,
    )]
    /// CHECK: vote_counter, created by the handler; an occupied address is rejected
    pub vote_counter: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct CreatePoll<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [POLL_COUNTER_SEED],
        bump = poll_counter.bump,
    )]
    pub poll_counter: Account<'info, PollCounter>,

    #[account(
        init,
        payer = signer,
        space = DISCRIMINATOR_SIZE + Poll::INIT_SPACE,
        seeds = [POLL_SEED, (poll_counter.total + 1).to_le_bytes().as_ref()],
        bump,
    )]
    pub poll: Account<'info, Poll>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct RegisterCandidate<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRATION_COUNTER_SEED],
        bump = registration_counter.bump,
    )]
    pub registration_counter: Account<'info, RegistrationCounter>,

    #[account(
        mut,
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump,
    )]
    /// CHECK: poll, may be empty; loaded by the handler which reports a missing poll
    pub poll: UncheckedAccount<'info>,

    #[account(
        init,
        payer = signer,
        space = DISCRIMINATOR_SIZE + Candidate::INIT_SPACE,
        seeds = [
            CANDIDATE_SEED,
            poll_id.to_le_bytes().as_ref(),
            (registration_counter.total + 1).to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub candidate: Account<'info, Candidate>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(poll_id: u64, cid: u64)]
pub struct UnregisterCandidate<'info> {
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRATION_COUNTER_SEED],
        bump = registration_counter.bump,
    )]
    pub registration_counter: Account<'info, RegistrationCounter>,

    #[account(
        mut,
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump,
    )]
    /// CHECK: poll, may be empty; loaded by the handler
    pub poll: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [CANDIDATE_SEED, poll_id.to_le_bytes().as_ref(), cid.to_le_bytes().as_ref()],
        bump,
    )]
    /// CHECK: candidate, may be empty; loaded by the handler
    pub candidate: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(poll_id: u64, cid: u64)]
pub struct CastVote<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [VOTE_COUNTER_SEED],
        bump = vote_counter.bump,
    )]
    pub vote_counter: Account<'info, VoteCounter>,

    #[account(
        mut,
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump,
    )]
    /// CHECK: poll, may be empty; loaded by the handler
    pub poll: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [CANDIDATE_SEED, poll_id.to_le_bytes().as_ref(), cid.to_le_bytes().as_ref()],
        bump,
    )]
    /// CHECK: candidate, may be empty; loaded by the handler
    pub candidate: UncheckedAccount<'info>,

    // Reused in place when the signer re-votes after closing a vote
    #[account(
        init_if_needed,
        payer = signer,
        space = DISCRIMINATOR_SIZE + Voter::INIT_SPACE,
        seeds = [VOTER_SEED, poll_id.to_le_bytes().as_ref(), signer.key().as_ref()],
        bump,
    )]
    pub voter: Account<'info, Voter>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(poll_id: u64, cid: u64)]
pub struct CloseVote<'info> {
    pub signer: Signer<'info>,

    /// CHECK: owner, identity whose vote is closed; only used to derive the voter address
    pub owner: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [VOTE_COUNTER_SEED],
        bump = vote_counter.bump,
    )]
    pub vote_counter: Account<'info, VoteCounter>,

    #[account(
        mut,
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump,
    )]
    /// CHECK: poll, may be empty; loaded by the handler
    pub poll: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [CANDIDATE_SEED, poll_id.to_le_bytes().as_ref(), cid.to_le_bytes().as_ref()],
        bump,
    )]
    /// CHECK: candidate, may be empty; loaded by the handler
    pub candidate: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [VOTER_SEED, poll_id.to_le_bytes().as_ref(), owner.key().as_ref()],
        bump,
    )]
    /// CHECK: voter, may be empty; loaded by the handler which reports a missing vote
    pub voter: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct ClosePoll<'info> {
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [POLL_COUNTER_SEED],
        bump = poll_counter.bump,
    )]
    pub poll_counter: Account<'info, PollCounter>,

    #[account(
        mut,
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump,
    )]
    /// CHECK: poll, may be empty; loaded by the handler
    pub poll: UncheckedAccount<'info>,
}
