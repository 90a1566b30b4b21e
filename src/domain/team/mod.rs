// Team domain module
// A team is an immutable name holder referenced by matches

#![allow(clippy::module_inception)]

pub mod team;

// Re-export main types for convenience
pub use team::Team;
