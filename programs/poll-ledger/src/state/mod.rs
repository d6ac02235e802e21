pub mod candidate;
pub mod counter;
pub mod events;
pub mod poll;
pub mod voter;

pub use candidate::*;
pub use counter::*;
pub use events::*;
pub use poll::*;
pub use voter::*;
