use super::errors::ScoreboardResult;
use super::scoreboard::Scoreboard;
use crate::domain::live_match::{Match, MatchId};
use crate::domain::providers::{Clock, IdGenerator, SystemClock, UuidGenerator};
use crate::domain::team::Team;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable, thread-safe handle to one scoreboard
///
/// A single mutex guards the whole registry. Every operation holds it for
/// its full duration, so a summary is always a consistent snapshot and never
/// interleaves with a start, update or end.
#[derive(Debug)]
pub struct SharedScoreboard<C = SystemClock, G = UuidGenerator> {
    inner: Arc<Mutex<Scoreboard<C, G>>>,
}

impl<C, G> Clone for SharedScoreboard<C, G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedScoreboard {
    pub fn new() -> Self {
        Self::from_scoreboard(Scoreboard::new())
    }
}

impl Default for SharedScoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, G: IdGenerator> SharedScoreboard<C, G> {
    /// Wraps an existing scoreboard
    pub fn from_scoreboard(scoreboard: Scoreboard<C, G>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(scoreboard)),
        }
    }

    pub fn start_new_match(&self, home_team: Team, away_team: Team) -> Match {
        self.inner.lock().start_new_match(home_team, away_team)
    }

    pub fn update_score(
        &self,
        match_id: MatchId,
        home_score: i32,
        away_score: i32,
    ) -> ScoreboardResult<()> {
        self.inner
            .lock()
            .update_score(match_id, home_score, away_score)
    }

    pub fn end_match(&self, match_id: MatchId) -> ScoreboardResult<()> {
        self.inner.lock().end_match(match_id)
    }

    /// Returns an owned, ranked snapshot of every active match
    pub fn summary(&self) -> Vec<Match> {
        self.inner.lock().summary().into_iter().cloned().collect()
    }

    pub fn get_match(&self, match_id: MatchId) -> Option<Match> {
        self.inner.lock().get_match(match_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}
