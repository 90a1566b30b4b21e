use crate::domain::live_match::MatchId;
use thiserror::Error;

/// Errors returned by scoreboard operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreboardError {
    /// The id was never issued by this scoreboard, or its match has ended
    #[error("Match not found: {0}")]
    NotFound(MatchId),
}

pub type ScoreboardResult<T> = Result<T, ScoreboardError>;
