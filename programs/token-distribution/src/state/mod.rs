pub mod distribution_state;
pub mod participants;

pub use distribution_state::*;
pub use participants::*;
