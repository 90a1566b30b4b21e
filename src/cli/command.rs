use super::errors::{CommandError, CommandResult};
use crate::domain::live_match::MatchId;
use crate::domain::team::Team;

/// One line of session input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `start <home> <away>`
    Start { home: Team, away: Team },
    /// `update <id> <home_score> <away_score>`
    Update {
        match_id: MatchId,
        home_score: i32,
        away_score: i32,
    },
    /// `end <id>`
    End { match_id: MatchId },
    /// `summary`
    Summary,
}

/// Parses a single input line
///
/// Blank lines and `#` comments yield `Ok(None)`. Team names are single
/// tokens with `_` standing in for a space.
///
/// # Example
/// ```
/// use live_scoreboard::cli::{parse_command, Command};
/// use live_scoreboard::domain::team::Team;
///
/// let command = parse_command("start South_Korea Japan").unwrap();
/// assert_eq!(
///     command,
///     Some(Command::Start {
///         home: Team::new("South Korea"),
///         away: Team::new("Japan"),
///     })
/// );
/// ```
pub fn parse_command(line: &str) -> CommandResult<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = line.split_whitespace();
    let Some(verb) = tokens.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = tokens.collect();

    let command = match verb.to_ascii_lowercase().as_str() {
        "start" => {
            expect_arity("start", &args, 2)?;
            Command::Start {
                home: team_from_token(args[0]),
                away: team_from_token(args[1]),
            }
        }
        "update" => {
            expect_arity("update", &args, 3)?;
            Command::Update {
                match_id: parse_match_id(args[0])?,
                home_score: parse_score(args[1])?,
                away_score: parse_score(args[2])?,
            }
        }
        "end" => {
            expect_arity("end", &args, 1)?;
            Command::End {
                match_id: parse_match_id(args[0])?,
            }
        }
        "summary" => {
            expect_arity("summary", &args, 0)?;
            Command::Summary
        }
        _ => return Err(CommandError::UnknownCommand(verb.to_string())),
    };

    Ok(Some(command))
}

fn expect_arity(command: &'static str, args: &[&str], expected: usize) -> CommandResult<()> {
    if args.len() != expected {
        return Err(CommandError::WrongArity {
            command,
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

fn team_from_token(token: &str) -> Team {
    Team::new(token.replace('_', " "))
}

fn parse_match_id(token: &str) -> CommandResult<MatchId> {
    token
        .parse()
        .map_err(|_| CommandError::InvalidMatchId(token.to_string()))
}

fn parse_score(token: &str) -> CommandResult<i32> {
    token
        .parse()
        .map_err(|_| CommandError::InvalidScore(token.to_string()))
}
