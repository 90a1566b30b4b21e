use super::errors::{ScoreboardError, ScoreboardResult};
use crate::domain::live_match::{Match, MatchId};
use crate::domain::providers::{Clock, IdGenerator, SystemClock, UuidGenerator};
use crate::domain::team::Team;
use std::cmp::Ordering;
use std::collections::HashMap;

/// In-memory registry of all active matches
///
/// The scoreboard is the sole owner of its matches. Callers receive copies
/// and refer back to a match only through its [`MatchId`].
///
/// # Invariants
/// - Every stored match is keyed by its own id
/// - An ended match is gone for good; its id is never valid again
/// - Summary order is derived on each call, never stored
///
/// # Example
/// ```
/// use live_scoreboard::domain::scoreboard::Scoreboard;
/// use live_scoreboard::domain::team::Team;
///
/// let mut board = Scoreboard::new();
/// let game = board.start_new_match(Team::new("Spain"), Team::new("Brazil"));
/// board.update_score(game.id(), 10, 2).expect("match is active");
///
/// let summary = board.summary();
/// assert_eq!(summary[0].total_score(), 12);
/// ```
#[derive(Debug)]
pub struct Scoreboard<C = SystemClock, G = UuidGenerator> {
    matches: HashMap<MatchId, Match>,
    clock: C,
    ids: G,
}

impl Scoreboard {
    /// Creates an empty scoreboard on the wall clock with random ids
    pub fn new() -> Self {
        Self::with_providers(SystemClock, UuidGenerator)
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, G: IdGenerator> Scoreboard<C, G> {
    /// Creates an empty scoreboard with injected time and id sources
    pub fn with_providers(clock: C, ids: G) -> Self {
        Self {
            matches: HashMap::new(),
            clock,
            ids,
        }
    }

    /// Starts a match at 0-0 and registers it
    ///
    /// Returns a copy of the stored match; its id is the handle for every
    /// later operation.
    pub fn start_new_match(&mut self, home_team: Team, away_team: Team) -> Match {
        let id = self.ids.next_id();
        let started = Match::new(id, home_team, away_team, self.clock.now());

        tracing::info!(
            match_id = %id,
            home = %started.home_team(),
            away = %started.away_team(),
            "match started"
        );

        self.matches.insert(id, started.clone());
        started
    }

    /// Replaces the score of an active match
    ///
    /// # Errors
    /// * `ScoreboardError::NotFound` - No active match has this id
    pub fn update_score(
        &mut self,
        match_id: MatchId,
        home_score: i32,
        away_score: i32,
    ) -> ScoreboardResult<()> {
        let Some(game) = self.matches.get_mut(&match_id) else {
            tracing::warn!(match_id = %match_id, "score update for unknown match");
            return Err(ScoreboardError::NotFound(match_id));
        };

        game.update_score(home_score, away_score);
        game.mark_updated(self.clock.now());

        tracing::debug!(match_id = %match_id, home_score, away_score, "score updated");
        Ok(())
    }

    /// Ends an active match and removes it from the board
    ///
    /// # Errors
    /// * `ScoreboardError::NotFound` - No active match has this id
    pub fn end_match(&mut self, match_id: MatchId) -> ScoreboardResult<()> {
        match self.matches.remove(&match_id) {
            Some(ended) => {
                tracing::info!(
                    match_id = %match_id,
                    home_score = ended.home_score(),
                    away_score = ended.away_score(),
                    "match ended"
                );
                Ok(())
            }
            None => {
                tracing::warn!(match_id = %match_id, "end requested for unknown match");
                Err(ScoreboardError::NotFound(match_id))
            }
        }
    }

    /// Returns every active match in ranking order
    ///
    /// Highest total score first. Equal totals put the most recently started
    /// match first. Matches that also share a start instant fall back to id
    /// order so the result never depends on map iteration.
    pub fn summary(&self) -> Vec<&Match> {
        let mut ranked: Vec<&Match> = self.matches.values().collect();
        ranked.sort_by(|a, b| rank(a, b));
        ranked
    }

    /// Looks up an active match
    pub fn get_match(&self, match_id: MatchId) -> Option<&Match> {
        self.matches.get(&match_id)
    }

    /// Number of active matches
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

fn rank(a: &Match, b: &Match) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        .then_with(|| b.started_at().cmp(&a.started_at()))
        .then_with(|| a.id().cmp(&b.id()))
}
