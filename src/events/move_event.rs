//! Move notifications

use serde::{Deserialize, Serialize};

use crate::game::{GameId, PlayerId, Symbol};

/// An accepted ply. Emitted after the board mutates, before terminal
/// evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePlayed {
    pub game_id: GameId,
    pub player: PlayerId,
    pub row: u8,
    pub col: u8,
    pub symbol: Symbol,
}
