pub mod client;
pub mod contracts;
pub mod executor;

pub use client::*;
pub use contracts::*;
pub use executor::*;
