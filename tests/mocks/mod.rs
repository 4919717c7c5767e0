//! Shared test fixtures

use std::sync::{Arc, Mutex};

use gridstake::{GameEvent, GameRegistry, GameSettings, ManualClock, Notifier, PlayerId};

pub const STAKE: u64 = 100;
pub const TIMEOUT_SECS: u64 = 10;

/// Notifier that records every emitted event for later assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<GameEvent>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of everything emitted so far.
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, event: &GameEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

pub fn player(tag: u8) -> PlayerId {
    PlayerId::new([tag; 32])
}

/// Registry wired to a manual clock and a recording notifier.
pub fn staked_registry() -> (GameRegistry, Arc<ManualClock>, Arc<RecordingNotifier>) {
    let clock = Arc::new(ManualClock::new(1_000));
    let notifier = RecordingNotifier::new();
    let settings = GameSettings {
        required_stake: STAKE,
        move_timeout_secs: TIMEOUT_SECS,
    };
    let registry = GameRegistry::new(settings, clock.clone(), notifier.clone());
    (registry, clock, notifier)
}
