pub mod actions;
pub mod catalog;
pub mod config;
pub mod document;
pub mod persistence;
pub mod reducer;
pub mod state;
pub mod store;

pub use actions::*;
pub use reducer::*;
pub use state::*;

pub use persistence::*;
pub use store::*;
