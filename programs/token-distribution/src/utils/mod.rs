pub mod allocation;
pub mod digest;
pub mod phase;
pub mod token;
