#![no_std]

pub mod error;
pub mod reward;
pub mod store;
pub mod accumulator;

pub use error::AccumError;
pub use reward::RewardUnit;
pub use store::{AccumPosition, AccumStore};
pub use accumulator::Accumulator;
