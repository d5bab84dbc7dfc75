pub mod loader;
pub mod search;
pub mod types;

pub use types::*;
