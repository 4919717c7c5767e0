//! Registry of active games: creation, enrollment, moves and forced
//! resolution
//!
//! Every mutating call completes its checks before touching any state, so a
//! failure leaves board, funds and enrollment byte-for-byte unchanged. The
//! hosting environment serializes calls against the same game; calls against
//! different games are independent.


use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::clock::CommitClock;
use crate::config::GameSettings;
use crate::error::{GameError, GameResult};
use crate::escrow::{Payout, StakeEscrow};
use crate::events::{
    EndType, GameConcluded, GameCreated, GameEvent, GameJoined, MovePlayed, Notifier,
};
use crate::game::{Board, BoardOutcome, Game, GameId, GameStatus, PlayerId, Seat, Symbol};

/// Typed result of a resolving transition, mirroring the `GameConcluded`
/// notification emitted for observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub game_id: GameId,
    pub end_type: EndType,
    /// `None` on a draw.
    pub winner: Option<PlayerId>,
    /// Credits the host's settlement layer must execute.
    pub payout: Payout,
}

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The game continues; the other symbol moves next.
    Continuing,
    /// The move ended the game; the pot is disbursed and the record purged.
    Settled(Settlement),
}

/// The table of active games and their enrollment index.
pub struct GameRegistry {
    settings: GameSettings,
    clock: Arc<dyn CommitClock>,
    notifier: Arc<dyn Notifier>,
    escrow: StakeEscrow,
    games: HashMap<GameId, Game>,
    /// Which active game each identity is enrolled in.
    enrollment: HashMap<PlayerId, GameId>,
    next_id: u64,
}

impl GameRegistry {
    pub fn new(
        settings: GameSettings,
        clock: Arc<dyn CommitClock>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let escrow = StakeEscrow::new(settings.required_stake);
        Self {
            settings,
            clock,
            notifier,
            escrow,
            games: HashMap::new(),
            enrollment: HashMap::new(),
            next_id: 0,
        }
    }

    /// Open a new game holding `player`'s pledge.
    pub fn create_game(&mut self, player: PlayerId, pledge: u64) -> GameResult<GameId> {
        self.escrow.check_stake(pledge)?;
        if let Some(active) = self.enrollment.get(&player) {
            return Err(GameError::AlreadyEnrolled {
                player,
                game_id: *active,
            });
        }

        let game_id = GameId::new(self.next_id);
        self.next_id += 1;

        self.escrow.open(game_id, player, pledge)?;
        let created_at = self.clock.now();
        self.games
            .insert(game_id, Game::new(game_id, player, pledge, created_at));
        self.enrollment.insert(player, game_id);

        info!(game_id = %game_id, creator = %player, stake = pledge, "game created");
        self.notifier.notify(&GameEvent::GameCreated(GameCreated {
            game_id,
            creator: player,
            stake: pledge,
        }));
        Ok(game_id)
    }

    /// Enroll `player` as the second participant and start play.
    pub fn join_game(&mut self, game_id: GameId, player: PlayerId, pledge: u64) -> GameResult<()> {
        let game = self
            .games
            .get_mut(&game_id)
            .ok_or(GameError::GameNotFound(game_id))?;
        self.escrow.check_stake(pledge)?;
        if game.joiner.is_some() {
            return Err(GameError::GameFull(game_id));
        }
        if let Some(active) = self.enrollment.get(&player) {
            return Err(GameError::AlreadyEnrolled {
                player,
                game_id: *active,
            });
        }

        self.escrow.fund(game_id, player, pledge)?;
        let now = self.clock.now();
        game.begin(player, now);
        self.enrollment.insert(player, game_id);

        info!(game_id = %game_id, joiner = %player, "game joined, play begins");
        self.notifier
            .notify(&GameEvent::GameJoined(GameJoined { game_id, joiner: player }));
        Ok(())
    }

    /// Apply `player`'s move at `(row, col)` and evaluate termination.
    pub fn play(
        &mut self,
        game_id: GameId,
        player: PlayerId,
        row: u8,
        col: u8,
    ) -> GameResult<PlayOutcome> {
        let game = self
            .games
            .get_mut(&game_id)
            .ok_or(GameError::GameNotFound(game_id))?;
        let seat = game.seat_of(&player).ok_or(GameError::Unauthorized {
            player,
            game_id,
        })?;
        if game.status != GameStatus::Playing {
            // both seats must be bound before either may act
            return Err(GameError::Unauthorized { player, game_id });
        }
        let symbol = seat.symbol();
        if symbol != game.next_symbol {
            return Err(GameError::OutOfTurn { game_id, symbol });
        }

        game.board.place(row, col, symbol)?;
        game.next_symbol = symbol.other();
        game.last_move_at = self.clock.now();
        let outcome = game.board.evaluate();

        debug!(game_id = %game_id, player = %player, row, col, symbol = %symbol, "move accepted");
        self.notifier.notify(&GameEvent::MovePlayed(MovePlayed {
            game_id,
            player,
            row,
            col,
            symbol,
        }));

        match outcome {
            BoardOutcome::Win { line, .. } => {
                // only the symbol just placed can have completed a line
                let payout = self.escrow.settle_win(game_id, player)?;
                let settlement = self.conclude(game_id, EndType::from(line), Some(player), payout);
                Ok(PlayOutcome::Settled(settlement))
            }
            BoardOutcome::Draw => {
                let payout = self.escrow.settle_draw(game_id)?;
                let settlement = self.conclude(game_id, EndType::Draw, None, payout);
                Ok(PlayOutcome::Settled(settlement))
            }
            BoardOutcome::InPlay => Ok(PlayOutcome::Continuing),
        }
    }

    /// Force resolution of a stalled game.
    ///
    /// The claimant must hold the side whose ply is pending; the player who
    /// made the last accepted move may not claim against their own wait.
    pub fn claim_win_by_timeout(
        &mut self,
        game_id: GameId,
        player: PlayerId,
    ) -> GameResult<Settlement> {
        let game = self
            .games
            .get(&game_id)
            .ok_or(GameError::GameNotFound(game_id))?;
        let seat = game.seat_of(&player).ok_or(GameError::Unauthorized {
            player,
            game_id,
        })?;
        if game.status != GameStatus::Playing || seat != Seat::for_symbol(game.next_symbol) {
            return Err(GameError::Unauthorized { player, game_id });
        }

        let elapsed = self.clock.now().saturating_sub(game.last_move_at);
        if elapsed < self.settings.move_timeout_secs {
            return Err(GameError::NotYetTimedOut {
                game_id,
                remaining_secs: self.settings.move_timeout_secs - elapsed,
            });
        }

        let payout = self.escrow.settle_timeout(game_id, player)?;
        Ok(self.conclude(game_id, EndType::TimeOut, Some(player), payout))
    }

    /// Disburse, notify and purge in one transition.
    fn conclude(
        &mut self,
        game_id: GameId,
        end_type: EndType,
        winner: Option<PlayerId>,
        payout: Payout,
    ) -> Settlement {
        if let Some(mut game) = self.games.remove(&game_id) {
            game.finish();
            self.enrollment.remove(&game.creator);
            if let Some(joiner) = game.joiner {
                self.enrollment.remove(&joiner);
            }
        }

        info!(game_id = %game_id, end_type = %end_type, winner = ?winner, "game concluded");
        self.notifier.notify(&GameEvent::GameConcluded(GameConcluded {
            game_id,
            winner,
            end_type,
        }));

        Settlement {
            game_id,
            end_type,
            winner,
            payout,
        }
    }

    /// Number of games currently occupying storage (Open or Playing).
    pub fn active_games(&self) -> usize {
        self.games.len()
    }

    pub fn contains(&self, game_id: GameId) -> bool {
        self.games.contains_key(&game_id)
    }

    /// Status of an active game; finished games are purged and yield `None`.
    pub fn status(&self, game_id: GameId) -> Option<GameStatus> {
        self.games.get(&game_id).map(|game| game.status)
    }

    /// Snapshot of an active game's board.
    pub fn board(&self, game_id: GameId) -> Option<Board> {
        self.games.get(&game_id).map(|game| game.board)
    }

    /// Symbol expected to move next in an active game.
    pub fn turn(&self, game_id: GameId) -> Option<Symbol> {
        self.games.get(&game_id).map(|game| game.next_symbol)
    }

    /// Whether `player` currently holds any active game.
    pub fn is_enrolled(&self, player: &PlayerId) -> bool {
        self.enrollment.contains_key(player)
    }

    pub fn required_stake(&self) -> u64 {
        self.escrow.required_stake()
    }

    /// Balance escrowed for an active game.
    pub fn pot_balance(&self, game_id: GameId) -> Option<u64> {
        self.escrow.pot_balance(game_id)
    }
}
