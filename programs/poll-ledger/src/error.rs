use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("The ledger counters have already been initialized")]
    AlreadyInitialized,
    #[msg("Poll start must be earlier than its end")]
    InvalidDates,
    #[msg("Poll title is too long")]
    TitleTooLong,
    #[msg("Poll description is too long")]
    DescriptionTooLong,
    #[msg("Candidate name is too long")]
    NameTooLong,
    #[msg("Poll does not exist")]
    PollNotFound,
    #[msg("Candidate is not registered in this poll")]
    CandidateNotFound,
    #[msg("No live vote found for this voter")]
    VoteNotFound,
    #[msg("Not authorized to perform this action")]
    Unauthorized,
    #[msg("Voter already has a live vote in this poll")]
    AlreadyVoted,
    #[msg("Poll is not accepting this operation right now")]
    PollNotActive,
    #[msg("Candidate still holds live votes")]
    CandidateHasVotes,
    #[msg("Counter would overflow")]
    CounterOverflow,
    #[msg("Counter would drop below zero")]
    CounterUnderflow,
}
