use crate::domain::live_match::MatchId;
use std::sync::Arc;

/// Issues identifiers for newly started matches
///
/// Implementations must make collisions negligible for the lifetime of a
/// scoreboard; the registry uses the returned id as its key.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh match identifier
    fn next_id(&self) -> MatchId;
}

/// Generator issuing random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> MatchId {
        MatchId::new()
    }
}

impl<T: IdGenerator + ?Sized> IdGenerator for &T {
    fn next_id(&self) -> MatchId {
        (**self).next_id()
    }
}

impl<T: IdGenerator + ?Sized> IdGenerator for Arc<T> {
    fn next_id(&self) -> MatchId {
        (**self).next_id()
    }
}

impl<T: IdGenerator + ?Sized> IdGenerator for Box<T> {
    fn next_id(&self) -> MatchId {
        (**self).next_id()
    }
}
