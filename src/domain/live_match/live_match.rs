use super::value_objects::MatchId;
use crate::domain::team::Team;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One ongoing contest between two teams
///
/// Identity, participants and start time are fixed at creation. Only the
/// score pair changes, and it is always replaced as a whole.
///
/// # Invariants
/// - Both scores start at 0
/// - Scores are written together as an absolute pair, never incremented
/// - Total score is derived, never stored
///
/// # Example
/// ```
/// use chrono::Utc;
/// use live_scoreboard::domain::live_match::{Match, MatchId};
/// use live_scoreboard::domain::team::Team;
///
/// let mut game = Match::new(MatchId::new(), Team::new("Spain"), Team::new("Brazil"), Utc::now());
/// game.update_score(10, 2);
///
/// assert_eq!(game.total_score(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    id: MatchId,
    started_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
    home_team: Team,
    away_team: Team,
    home_score: i32,
    away_score: i32,
}

impl Match {
    /// Creates a match at 0-0
    ///
    /// # Arguments
    /// * `id` - Freshly issued identifier
    /// * `home_team` - Home side
    /// * `away_team` - Away side (may equal the home side)
    /// * `started_at` - Instant the match started
    pub fn new(id: MatchId, home_team: Team, away_team: Team, started_at: DateTime<Utc>) -> Self {
        Self {
            id,
            started_at,
            updated_at: None,
            home_team,
            away_team,
            home_score: 0,
            away_score: 0,
        }
    }

    /// Replaces both scores with the given absolute values
    ///
    /// Values are taken as-is; negative or decreasing scores are not
    /// rejected.
    pub fn update_score(&mut self, home_score: i32, away_score: i32) {
        self.home_score = home_score;
        self.away_score = away_score;
    }

    /// Records when the score was last changed
    pub(crate) fn mark_updated(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }

    /// Returns the combined score of both teams
    pub fn total_score(&self) -> i64 {
        i64::from(self.home_score) + i64::from(self.away_score)
    }

    // ===== Getters =====

    /// Returns the match ID
    pub fn id(&self) -> MatchId {
        self.id
    }

    /// Returns the start timestamp
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Returns the timestamp of the last score update, if any
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn home_team(&self) -> &Team {
        &self.home_team
    }

    pub fn away_team(&self) -> &Team {
        &self.away_team
    }

    pub fn home_score(&self) -> i32 {
        self.home_score
    }

    pub fn away_score(&self) -> i32 {
        self.away_score
    }
}
