//! Command implementations for the depth chart CLI

pub mod serve;
pub mod show;
