//! Terminal outcome notifications

use serde::{Deserialize, Serialize};

use crate::game::{GameId, LineKind, PlayerId};

/// How a game concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndType {
    Row,
    Column,
    Diagonal,
    Draw,
    TimeOut,
}

impl From<LineKind> for EndType {
    fn from(line: LineKind) -> Self {
        match line {
            LineKind::Row => EndType::Row,
            LineKind::Column => EndType::Column,
            LineKind::Diagonal => EndType::Diagonal,
        }
    }
}

impl std::fmt::Display for EndType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EndType::Row => "Row",
            EndType::Column => "Column",
            EndType::Diagonal => "Diagonal",
            EndType::Draw => "Draw",
            EndType::TimeOut => "TimeOut",
        };
        write!(f, "{label}")
    }
}

/// A game reached a terminal state; its pot was disbursed and its record
/// purged in the same transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConcluded {
    pub game_id: GameId,
    /// `None` on a draw.
    pub winner: Option<PlayerId>,
    pub end_type: EndType,
}
