//! Core data model: identities, seats and game records

pub mod board;

pub use board::{Board, BoardOutcome, LineKind, Symbol};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Participant identity, as authenticated by the hosting environment.
///
/// Rendered as 64 hex characters, the way host addresses usually are. The
/// engine only ever compares identities; it never inspects them.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId([u8; 32]);

impl PlayerId {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Parse from 64 hex characters.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlayerId({})", hex::encode(self.0))
    }
}

impl FromStr for PlayerId {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for PlayerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(de::Error::custom)
    }
}

/// Opaque game handle, monotonically issued by the registry, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(u64);

impl GameId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of the table an identity holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Creator,
    Joiner,
}

impl Seat {
    /// The symbol permanently bound to this seat: the creator opens with
    /// `X`, the joiner answers with `O`. Fixed at join time, never
    /// reassigned.
    pub fn symbol(self) -> Symbol {
        match self {
            Seat::Creator => Symbol::X,
            Seat::Joiner => Symbol::O,
        }
    }

    /// The seat bound to `symbol`.
    pub fn for_symbol(symbol: Symbol) -> Seat {
        match symbol {
            Symbol::X => Seat::Creator,
            Symbol::O => Seat::Joiner,
        }
    }
}

/// Lifecycle of a game record.
///
/// A Finished game is purged in the same transition that disburses its pot,
/// so only Open and Playing records occupy the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Awaiting the second player.
    Open,
    /// Both seats bound, moves being exchanged.
    Playing,
    /// Terminal; the record is disposed of in the same transition.
    Finished,
}

/// A single staked match.
#[derive(Debug, Clone)]
pub struct Game {
    pub id: GameId,
    pub creator: PlayerId,
    pub joiner: Option<PlayerId>,
    /// Per-player pledge, fixed at creation.
    pub stake: u64,
    pub board: Board,
    pub next_symbol: Symbol,
    /// Commit time of the last accepted move (or of join, before any move).
    pub last_move_at: u64,
    pub status: GameStatus,
}

impl Game {
    pub(crate) fn new(id: GameId, creator: PlayerId, stake: u64, created_at: u64) -> Self {
        Self {
            id,
            creator,
            joiner: None,
            stake,
            board: Board::new(),
            next_symbol: Symbol::X,
            last_move_at: created_at,
            status: GameStatus::Open,
        }
    }

    /// Seat held by `player`, if enrolled.
    pub fn seat_of(&self, player: &PlayerId) -> Option<Seat> {
        if *player == self.creator {
            Some(Seat::Creator)
        } else if self.joiner.as_ref() == Some(player) {
            Some(Seat::Joiner)
        } else {
            None
        }
    }

    /// Identity at `seat`, if bound.
    pub fn player_at(&self, seat: Seat) -> Option<PlayerId> {
        match seat {
            Seat::Creator => Some(self.creator),
            Seat::Joiner => self.joiner,
        }
    }

    /// Bind the joiner and start play.
    pub(crate) fn begin(&mut self, joiner: PlayerId, now: u64) {
        self.joiner = Some(joiner);
        self.status = GameStatus::Playing;
        self.last_move_at = now;
    }

    /// Mark the record terminal before disposal.
    pub(crate) fn finish(&mut self) {
        self.status = GameStatus::Finished;
    }
}
