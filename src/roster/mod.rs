//! Depth chart storage
//!
//! - `models`: Player, key and snapshot types
//! - `store`: The lock-guarded roster store and its operations
//! - `seed`: Fixed sample roster for demos

pub mod models;
pub mod seed;
pub mod store;


pub use models::{DepthChart, Player, RosterKey};
pub use store::RosterStore;
