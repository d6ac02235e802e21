//! In-memory stand-in for the runtime.
//!
//! Records are keyed by their derived addresses, exactly as on chain. Each
//! operation works on copies of the records it names and writes them back only
//! when the engine succeeds, which is the all-or-nothing behaviour the runtime
//! gives a transaction.

#![allow(dead_code)]

use std::collections::BTreeMap;

use anchor_lang::{error::Error, prelude::*};
use poll_ledger::{
    address,
    engine::{self, Call, NewPoll},
    state::{Candidate, Poll, PollCounter, RegistrationCounter, VoteCounter, Voter},
    ErrorCode,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    PollCounter(PollCounter),
    RegistrationCounter(RegistrationCounter),
    VoteCounter(VoteCounter),
    Poll(Poll),
    Candidate(Candidate),
    Voter(Voter),
}

pub trait Stored: Clone {
    fn wrap(self) -> Record;
    fn peek(record: &Record) -> Option<&Self>;
}

macro_rules! stored {
    ($($kind:ident),+) => {
        $(
            impl Stored for $kind {
                fn wrap(self) -> Record {
                    Record::$kind(self)
                }

                fn peek(record: &Record) -> Option<&Self> {
                    match record {
                        Record::$kind(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )+
    };
}

stored!(PollCounter, RegistrationCounter, VoteCounter, Poll, Candidate, Voter);

pub type Snapshot = BTreeMap<Pubkey, Record>;

#[derive(Clone, Debug, Default)]
pub struct MemoryLedger {
    records: Snapshot,
    pub now: i64,
}

impl MemoryLedger {
    pub fn new(now: i64) -> Self {
        Self {
            records: BTreeMap::new(),
            now,
        }
    }

    /// A ledger with its counters already initialized.
    pub fn initialized(now: i64) -> Self {
        let mut ledger = Self::new(now);
        ledger.initialize().expect("fresh ledger initializes");
        ledger
    }

    pub fn snapshot(&self) -> Snapshot {
        self.records.clone()
    }

    pub fn get<T: Stored>(&self, address: &Pubkey) -> Option<T> {
        self.records.get(address).and_then(T::peek).cloned()
    }

    /// Stores `record` at `address` without going through an operation.
    pub fn put<T: Stored>(&mut self, address: Pubkey, record: T) {
        self.records.insert(address, record.wrap());
    }

    fn existing<T: Stored>(&self, address: &Pubkey) -> Result<T> {
        self.get(address)
            .ok_or_else(|| anchor_lang::error::ErrorCode::AccountNotInitialized.into())
    }

    fn ensure_vacant(&self, address: &Pubkey) -> Result<()> {
        if self.records.contains_key(address) {
            return Err(ProgramError::AccountAlreadyInitialized.into());
        }
        Ok(())
    }

    fn call(&self, signer: Pubkey) -> Call {
        Call {
            signer,
            now: self.now,
        }
    }

    // Reads, as a client would perform them.

    pub fn poll_counter(&self) -> PollCounter {
        self.get(&address::poll_counter().0).expect("poll counter")
    }

    pub fn registration_counter(&self) -> RegistrationCounter {
        self.get(&address::registration_counter().0)
            .expect("registration counter")
    }

    pub fn vote_counter(&self) -> VoteCounter {
        self.get(&address::vote_counter().0).expect("vote counter")
    }

    pub fn poll(&self, poll_id: u64) -> Option<Poll> {
        self.get(&address::poll(poll_id).0)
    }

    pub fn candidate(&self, poll_id: u64, cid: u64) -> Option<Candidate> {
        self.get(&address::candidate(poll_id, cid).0)
    }

    pub fn voter(&self, poll_id: u64, owner: &Pubkey) -> Option<Voter> {
        self.get(&address::voter(poll_id, owner).0)
    }

    // Operations, one per instruction.

    pub fn initialize(&mut self) -> Result<()> {
        let (polls_key, polls_bump) = address::poll_counter();
        let (registrations_key, registrations_bump) = address::registration_counter();
        let (votes_key, votes_bump) = address::vote_counter();
        let occupied = [polls_key, registrations_key, votes_key]
            .iter()
            .any(|key| self.records.contains_key(key));

        let counters = engine::initialize(occupied)?;

        self.put(
            polls_key,
            PollCounter {
                bump: polls_bump,
                ..counters.polls
            },
        );
        self.put(
            registrations_key,
            RegistrationCounter {
                bump: registrations_bump,
                ..counters.registrations
            },
        );
        self.put(
            votes_key,
            VoteCounter {
                bump: votes_bump,
                ..counters.votes
            },
        );
        Ok(())
    }

    pub fn create_poll(&mut self, signer: Pubkey, params: NewPoll) -> Result<u64> {
        let (counter_key, _) = address::poll_counter();
        let mut counter: PollCounter = self.existing(&counter_key)?;
        let (poll_key, bump) = address::poll(counter.total + 1);
        self.ensure_vacant(&poll_key)?;

        let poll = engine::create_poll(&self.call(signer), &mut counter, params)?;
        let poll_id = poll.id;

        self.put(counter_key, counter);
        self.put(poll_key, Poll { bump, ..poll });
        Ok(poll_id)
    }

    pub fn register_candidate(&mut self, signer: Pubkey, poll_id: u64, name: &str) -> Result<u64> {
        let (registrations_key, _) = address::registration_counter();
        let mut registrations: RegistrationCounter = self.existing(&registrations_key)?;
        let (poll_key, _) = address::poll(poll_id);
        let mut poll: Option<Poll> = self.get(&poll_key);
        let (candidate_key, bump) = address::candidate(poll_id, registrations.total + 1);
        self.ensure_vacant(&candidate_key)?;

        let candidate = engine::register_candidate(
            &self.call(signer),
            &mut registrations,
            poll.as_mut(),
            poll_id,
            name.to_owned(),
        )?;
        let cid = candidate.cid;

        self.put(registrations_key, registrations);
        self.commit(poll_key, poll);
        self.put(candidate_key, Candidate { bump, ..candidate });
        Ok(cid)
    }

    pub fn unregister_candidate(&mut self, signer: Pubkey, poll_id: u64, cid: u64) -> Result<()> {
        let (registrations_key, _) = address::registration_counter();
        let mut registrations: RegistrationCounter = self.existing(&registrations_key)?;
        let (poll_key, _) = address::poll(poll_id);
        let mut poll: Option<Poll> = self.get(&poll_key);
        let (candidate_key, _) = address::candidate(poll_id, cid);
        let mut candidate: Option<Candidate> = self.get(&candidate_key);

        engine::unregister_candidate(
            &self.call(signer),
            &mut registrations,
            poll.as_mut(),
            candidate.as_mut(),
            poll_id,
            cid,
        )?;

        self.put(registrations_key, registrations);
        self.commit(poll_key, poll);
        self.commit(candidate_key, candidate);
        Ok(())
    }

    pub fn cast_vote(&mut self, signer: Pubkey, poll_id: u64, cid: u64) -> Result<()> {
        let (votes_key, _) = address::vote_counter();
        let mut votes: VoteCounter = self.existing(&votes_key)?;
        let (poll_key, _) = address::poll(poll_id);
        let mut poll: Option<Poll> = self.get(&poll_key);
        let (candidate_key, _) = address::candidate(poll_id, cid);
        let mut candidate: Option<Candidate> = self.get(&candidate_key);
        let (voter_key, voter_bump) = address::voter(poll_id, &signer);
        let mut voter: Voter = self.get(&voter_key).unwrap_or_default();

        engine::cast_vote(
            &self.call(signer),
            &mut votes,
            poll.as_mut(),
            candidate.as_mut(),
            &mut voter,
            poll_id,
            cid,
        )?;

        self.put(votes_key, votes);
        self.commit(poll_key, poll);
        self.commit(candidate_key, candidate);
        self.put(
            voter_key,
            Voter {
                bump: voter_bump,
                ..voter
            },
        );
        Ok(())
    }

    pub fn close_vote(
        &mut self,
        signer: Pubkey,
        owner: Pubkey,
        poll_id: u64,
        cid: u64,
    ) -> Result<()> {
        let (votes_key, _) = address::vote_counter();
        let mut votes: VoteCounter = self.existing(&votes_key)?;
        let (poll_key, _) = address::poll(poll_id);
        let mut poll: Option<Poll> = self.get(&poll_key);
        let (candidate_key, _) = address::candidate(poll_id, cid);
        let mut candidate: Option<Candidate> = self.get(&candidate_key);
        let (voter_key, _) = address::voter(poll_id, &owner);
        let mut voter: Option<Voter> = self.get(&voter_key);

        engine::close_vote(
            &self.call(signer),
            &mut votes,
            poll.as_mut(),
            candidate.as_mut(),
            voter.as_mut(),
            poll_id,
            cid,
        )?;

        self.put(votes_key, votes);
        self.commit(poll_key, poll);
        self.commit(candidate_key, candidate);
        self.commit(voter_key, voter);
        Ok(())
    }

    pub fn close_poll(&mut self, signer: Pubkey, poll_id: u64) -> Result<()> {
        let (counter_key, _) = address::poll_counter();
        let mut counter: PollCounter = self.existing(&counter_key)?;
        let (poll_key, _) = address::poll(poll_id);
        let mut poll: Option<Poll> = self.get(&poll_key);

        engine::close_poll(&self.call(signer), &mut counter, poll.as_mut(), poll_id)?;

        self.put(counter_key, counter);
        self.commit(poll_key, poll);
        Ok(())
    }

    fn commit<T: Stored>(&mut self, address: Pubkey, record: Option<T>) {
        if let Some(record) = record {
            self.put(address, record);
        }
    }

    /// Checks every cross-record invariant of the ledger.
    pub fn assert_invariants(&self) {
        let polls = self.poll_counter();
        let registrations = self.registration_counter();
        let votes = self.vote_counter();
        assert!(polls.active <= polls.total, "poll counter {polls:?}");
        assert!(
            registrations.active <= registrations.total,
            "registration counter {registrations:?}"
        );
        assert!(votes.active <= votes.total, "vote counter {votes:?}");

        let candidates: Vec<&Candidate> = self
            .records
            .values()
            .filter_map(Candidate::peek)
            .collect();
        let voters: Vec<&Voter> = self.records.values().filter_map(Voter::peek).collect();

        for poll in self.records.values().filter_map(Poll::peek) {
            let registered: Vec<&&Candidate> = candidates
                .iter()
                .filter(|candidate| candidate.is_registered_in(poll.id))
                .collect();
            let live_voters = voters
                .iter()
                .filter(|voter| voter.poll_id == poll.id && voter.has_voted)
                .count() as u64;
            let tallied: u64 = registered.iter().map(|candidate| candidate.vote_count).sum();

            assert_eq!(poll.candidate_count, registered.len() as u64, "poll {}", poll.id);
            assert_eq!(poll.vote_count, tallied, "poll {}", poll.id);
            assert_eq!(poll.vote_count, live_voters, "poll {}", poll.id);
        }

        for voter in voters.iter().filter(|voter| voter.has_voted) {
            let candidate = self
                .candidate(voter.poll_id, voter.cid)
                .expect("live vote points at a candidate");
            assert!(candidate.has_registered);
            assert!(candidate.vote_count > 0);
        }

        let registered_total = candidates.iter().filter(|c| c.has_registered).count() as u64;
        assert_eq!(registrations.active, registered_total);
        let live_total = voters.iter().filter(|voter| voter.has_voted).count() as u64;
        assert_eq!(votes.active, live_total);
        let open_polls = self
            .records
            .values()
            .filter_map(Poll::peek)
            .filter(|poll| !poll.closed)
            .count() as u64;
        assert_eq!(polls.active, open_polls);
    }
}

pub fn identity(tag: u8) -> Pubkey {
    Pubkey::new_from_array([tag; 32])
}

pub fn poll_params(title: &str, start: i64, end: i64) -> NewPoll {
    NewPoll {
        title: title.to_owned(),
        description: format!("{title} description"),
        start,
        end,
        allow_candidate_adding: true,
        allow_candidate_withdraw: true,
        allow_vote_closing: true,
    }
}

/// Asserts that `result` failed with the program error `expected`.
pub fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: ErrorCode) {
    let expected: u32 = expected.into();
    match result {
        Err(Error::AnchorError(err)) => assert_eq!(
            err.error_code_number, expected,
            "unexpected error {}",
            err.error_name
        ),
        other => panic!("expected error code {expected}, got {other:?}"),
    }
}
