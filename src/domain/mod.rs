// Domain layer module exports
// Domain is independent of infrastructure concerns; clock and id
// generation reach it only through the provider traits

pub mod live_match;
pub mod providers;
pub mod scoreboard;
pub mod team;
