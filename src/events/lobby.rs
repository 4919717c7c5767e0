//! Enrollment notifications

use serde::{Deserialize, Serialize};

use crate::game::{GameId, PlayerId};

/// A game was opened and is awaiting its second player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameCreated {
    pub game_id: GameId,
    pub creator: PlayerId,
    /// Per-player pledge the joiner must match.
    pub stake: u64,
}

/// The second player enrolled; play begins with the creator's symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameJoined {
    pub game_id: GameId,
    pub joiner: PlayerId,
}
