pub mod initialize;
pub use initialize::*;

pub mod create_poll;
pub use create_poll::*;

pub mod register_candidate;
pub use register_candidate::*;

pub mod unregister_candidate;
pub use unregister_candidate::*;

pub mod cast_vote;
pub use cast_vote::*;

pub mod close_vote;
pub use close_vote::*;

pub mod close_poll;
pub use close_poll::*;
