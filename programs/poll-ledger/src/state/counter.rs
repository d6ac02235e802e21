use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// Lifetime (`total`) and live (`active`) counts for one record kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub total: u64,
    pub active: u64,
}

impl Totals {
    /// Counts after one more record is created and goes live.
    pub fn opened(self) -> Result<Self> {
        Ok(Self {
            total: self.total.checked_add(1).ok_or(ErrorCode::CounterOverflow)?,
            active: self.active.checked_add(1).ok_or(ErrorCode::CounterOverflow)?,
        })
    }

    /// Counts after one live record is withdrawn or closed. `total` keeps history.
    pub fn released(self) -> Result<Self> {
        Ok(Self {
            total: self.total,
            active: self.active.checked_sub(1).ok_or(ErrorCode::CounterUnderflow)?,
        })
    }
}

/// Shared view over the three singleton counter records.
pub trait Tally {
    fn totals(&self) -> Totals;
    fn set_totals(&mut self, totals: Totals);
}

/// Polls ever created / polls not yet closed.
#[account]
#[derive(InitSpace, Debug, Default, PartialEq, Eq)]
pub struct PollCounter {
    /// PDA bump seed
    pub bump: u8,
    pub total: u64,
    pub active: u64,
}

/// Candidacies ever registered / candidacies not withdrawn.
#[account]
#[derive(InitSpace, Debug, Default, PartialEq, Eq)]
pub struct RegistrationCounter {
    /// PDA bump seed
    pub bump: u8,
    pub total: u64,
    pub active: u64,
}

/// Votes ever cast / votes not closed.
#[account]
#[derive(InitSpace, Debug, Default, PartialEq, Eq)]
pub struct VoteCounter {
    /// PDA bump seed
    pub bump: u8,
    pub total: u64,
    pub active: u64,
}

macro_rules! impl_tally {
    ($($record:ty),+) => {
        $(
            impl Tally for $record {
                fn totals(&self) -> Totals {
                    Totals {
                        total: self.total,
                        active: self.active,
                    }
                }

                fn set_totals(&mut self, totals: Totals) {
                    self.total = totals.total;
                    self.active = totals.active;
                }
            }
        )+
    };
}

impl_tally!(PollCounter, RegistrationCounter, VoteCounter);
