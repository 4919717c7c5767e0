//! Typed notifications emitted on every accepted transition
//!
//! Each mutating call that succeeds emits exactly one notification per
//! state change, so any observer can reconstruct and audit a game's history
//! without trusting the engine's host. Notifications are advisory: the
//! engine's correctness never depends on anyone receiving them.

pub mod lobby;
pub mod move_event;
pub mod outcome;

pub use lobby::{GameCreated, GameJoined};
pub use move_event::MovePlayed;
pub use outcome::{EndType, GameConcluded};

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::config::EventSettings;

/// One notification, tagged for wire transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    GameCreated(GameCreated),
    GameJoined(GameJoined),
    MovePlayed(MovePlayed),
    GameConcluded(GameConcluded),
}

impl GameEvent {
    /// Serialize for hosts that forward notifications verbatim.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// External notification boundary.
///
/// Implementations must not fail the emitting call: delivery problems are
/// the observer's concern, not the engine's.
pub trait Notifier: Send + Sync {
    fn notify(&self, event: &GameEvent);
}

/// Discards every notification.
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: &GameEvent) {}
}

/// Fans notifications out to any number of subscribers over a broadcast
/// channel. Subscribers that fall behind lose the oldest events, never the
/// engine's progress.
#[derive(Debug)]
pub struct BroadcastNotifier {
    sender: broadcast::Sender<GameEvent>,
}

impl BroadcastNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn from_settings(settings: &EventSettings) -> Self {
        Self::new(settings.broadcast_capacity)
    }

    /// New subscription receiving every event emitted from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<GameEvent> {
        self.sender.subscribe()
    }
}

impl Notifier for BroadcastNotifier {
    fn notify(&self, event: &GameEvent) {
        // a send with no live receivers is not an engine error
        let _ = self.sender.send(event.clone());
    }
}
