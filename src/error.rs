//! Error types for the gridstake engine

use thiserror::Error;

use crate::game::{GameId, PlayerId, Symbol};

/// Failure taxonomy for every engine operation.
///
/// Each variant is a distinct, stable reason callers and tooling can branch
/// on. A failed call leaves board, funds and registry entries untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The pledged amount does not match the required stake.
    #[error("invalid stake: expected {expected}, got {offered}")]
    InvalidStake { expected: u64, offered: u64 },

    /// The identity already holds an active game as creator or joiner.
    #[error("player {player} is already enrolled in game {game_id}")]
    AlreadyEnrolled { player: PlayerId, game_id: GameId },

    /// The game already has two enrolled players.
    #[error("game {0} already has two players")]
    GameFull(GameId),

    /// The caller has no right to act on this game.
    #[error("player {player} has no right to act in game {game_id}")]
    Unauthorized { player: PlayerId, game_id: GameId },

    /// The caller's bound symbol is not the one expected to move.
    #[error("game {game_id}: it is not {symbol}'s turn")]
    OutOfTurn { game_id: GameId, symbol: Symbol },

    /// The targeted cell lies outside the 3x3 board.
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: u8, col: u8 },

    /// The targeted cell is already occupied.
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: u8, col: u8 },

    /// The move timeout has not elapsed; the game is still playing.
    #[error("game {game_id} is still playing, {remaining_secs}s until timeout")]
    NotYetTimedOut { game_id: GameId, remaining_secs: u64 },

    /// No active game with this id.
    #[error("game {0} not found")]
    GameNotFound(GameId),
}

/// Type alias for the main result type used throughout the library
pub type GameResult<T> = Result<T, GameError>;
