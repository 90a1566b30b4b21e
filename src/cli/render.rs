use crate::domain::live_match::{Match, MatchId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::{self, Write};

/// One ranked row of a summary, as written to JSON output
#[derive(Debug, Serialize)]
pub struct SummaryEntry {
    pub rank: usize,
    pub id: MatchId,
    pub home_team: String,
    pub home_score: i32,
    pub away_team: String,
    pub away_score: i32,
    pub total_score: i64,
    pub started_at: DateTime<Utc>,
}

impl SummaryEntry {
    fn new(rank: usize, game: &Match) -> Self {
        Self {
            rank,
            id: game.id(),
            home_team: game.home_team().name().to_string(),
            home_score: game.home_score(),
            away_team: game.away_team().name().to_string(),
            away_score: game.away_score(),
            total_score: game.total_score(),
            started_at: game.started_at(),
        }
    }
}

/// Formats a match as `Home 1 - Away 0`
pub fn score_line(game: &Match) -> String {
    format!(
        "{} {} - {} {}",
        game.home_team(),
        game.home_score(),
        game.away_team(),
        game.away_score()
    )
}

/// Writes a ranked summary as numbered text lines
pub fn write_text_summary<W: Write>(output: &mut W, summary: &[&Match]) -> io::Result<()> {
    if summary.is_empty() {
        return writeln!(output, "no active matches");
    }
    for (index, game) in summary.iter().enumerate() {
        writeln!(output, "{}. {}", index + 1, score_line(game))?;
    }
    Ok(())
}

/// Writes a ranked summary as a single JSON array line
pub fn write_json_summary<W: Write>(output: &mut W, summary: &[&Match]) -> io::Result<()> {
    let entries: Vec<SummaryEntry> = summary
        .iter()
        .enumerate()
        .map(|(index, game)| SummaryEntry::new(index + 1, game))
        .collect();

    serde_json::to_writer(&mut *output, &entries)?;
    writeln!(output)
}
