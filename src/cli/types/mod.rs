//! Type-safe wrappers for sport and team identifiers.

pub mod ids;

pub use ids::{SportId, TeamId};
