use super::command::{parse_command, Command};
use super::render::{write_json_summary, write_text_summary};
use crate::config::OutputFormat;
use crate::domain::providers::{Clock, IdGenerator};
use crate::domain::scoreboard::Scoreboard;
use std::io::{self, BufRead, Write};

/// Drives a scoreboard from line-oriented commands
///
/// Each input line is parsed and applied in order. Parse failures and
/// unknown match ids are written to `output` as `error: ...` lines and the
/// session carries on; only I/O failures end it early.
///
/// Returns the number of lines that produced an error.
pub fn run_session<R, W, C, G>(
    input: R,
    output: &mut W,
    scoreboard: &mut Scoreboard<C, G>,
    format: OutputFormat,
) -> io::Result<usize>
where
    R: BufRead,
    W: Write,
    C: Clock,
    G: IdGenerator,
{
    let mut failures = 0;

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                tracing::warn!(line = index + 1, error = %err, "rejected command");
                writeln!(output, "error: {err}")?;
                failures += 1;
                continue;
            }
        };

        let outcome = match command {
            Command::Start { home, away } => {
                let game = scoreboard.start_new_match(home, away);
                writeln!(output, "started {}", game.id())?;
                continue;
            }
            Command::Update {
                match_id,
                home_score,
                away_score,
            } => scoreboard
                .update_score(match_id, home_score, away_score)
                .map(|()| format!("updated {match_id}")),
            Command::End { match_id } => scoreboard
                .end_match(match_id)
                .map(|()| format!("ended {match_id}")),
            Command::Summary => {
                let summary = scoreboard.summary();
                match format {
                    OutputFormat::Text => write_text_summary(output, &summary)?,
                    OutputFormat::Json => write_json_summary(output, &summary)?,
                }
                continue;
            }
        };

        match outcome {
            Ok(message) => writeln!(output, "{message}")?,
            Err(err) => {
                writeln!(output, "error: {err}")?;
                failures += 1;
            }
        }
    }

    Ok(failures)
}
