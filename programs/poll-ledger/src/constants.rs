// Address labels, one per record kind
pub const POLL_COUNTER_SEED: &[u8] = b"poll_counter";
pub const REGISTRATION_COUNTER_SEED: &[u8] = b"registration_counter";
pub const VOTE_COUNTER_SEED: &[u8] = b"vote_counter";
pub const POLL_SEED: &[u8] = b"poll";
pub const CANDIDATE_SEED: &[u8] = b"candidate";
pub const VOTER_SEED: &[u8] = b"voter";

// Field limits, in bytes
pub const MAX_TITLE_LEN: usize = 30;
pub const MAX_DESCRIPTION_LEN: usize = 200;
pub const MAX_NAME_LEN: usize = 32;

pub const DISCRIMINATOR_SIZE: usize = 8;
