use serde::{Deserialize, Serialize};
use std::fmt;

/// Team taking part in a match
///
/// A plain name holder. Two teams with the same name are still two separate
/// values; nothing in the domain enforces uniqueness.
///
/// # Example
/// ```
/// use live_scoreboard::domain::team::Team;
///
/// let team = Team::new("Mexico");
/// assert_eq!(team.name(), "Mexico");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    name: String,
}

impl Team {
    /// Creates a team with the given name
    ///
    /// No validation is applied; an empty name is accepted.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the team's name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for Team {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Team {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
