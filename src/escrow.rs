//! Stake escrow: per-game pots and their single disbursement
//!
//! A pot is removed in the same call that disburses it, so a second
//! settlement of the same game cannot occur. Actual fund movement is the
//! host's job; the escrow returns the credits it must execute.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{GameError, GameResult};
use crate::game::{GameId, PlayerId};

/// Credits the host's settlement layer owes after a game concludes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payout {
    pub game_id: GameId,
    /// `(identity, amount)` pairs; one entry for a win or a timeout claim,
    /// two for a draw.
    pub credits: Vec<(PlayerId, u64)>,
}

impl Payout {
    /// Total value leaving escrow.
    pub fn total(&self) -> u64 {
        self.credits.iter().map(|(_, amount)| amount).sum()
    }
}

/// Holds each game's combined pledges until the single resolution
/// transition.
#[derive(Debug)]
pub struct StakeEscrow {
    required_stake: u64,
    pots: HashMap<GameId, Vec<(PlayerId, u64)>>,
}

impl StakeEscrow {
    pub fn new(required_stake: u64) -> Self {
        Self {
            required_stake,
            pots: HashMap::new(),
        }
    }

    pub fn required_stake(&self) -> u64 {
        self.required_stake
    }

    /// Validate a pledge against the required stake, without mutating
    /// anything.
    pub fn check_stake(&self, pledge: u64) -> GameResult<()> {
        if pledge != self.required_stake {
            return Err(GameError::InvalidStake {
                expected: self.required_stake,
                offered: pledge,
            });
        }
        Ok(())
    }

    /// Open a pot holding the creator's pledge.
    pub fn open(&mut self, game_id: GameId, creator: PlayerId, pledge: u64) -> GameResult<()> {
        self.check_stake(pledge)?;
        self.pots.insert(game_id, vec![(creator, pledge)]);

        debug!(game_id = %game_id, balance = pledge, "pot opened");
        Ok(())
    }

    /// Add the joiner's matching pledge, completing the pot at twice the
    /// stake.
    pub fn fund(&mut self, game_id: GameId, joiner: PlayerId, pledge: u64) -> GameResult<()> {
        self.check_stake(pledge)?;
        let pot = self
            .pots
            .get_mut(&game_id)
            .ok_or(GameError::GameNotFound(game_id))?;
        pot.push((joiner, pledge));

        let balance: u64 = pot.iter().map(|(_, amount)| amount).sum();
        debug!(game_id = %game_id, balance, "pot funded");
        Ok(())
    }

    /// Balance currently escrowed for `game_id`.
    pub fn pot_balance(&self, game_id: GameId) -> Option<u64> {
        self.pots
            .get(&game_id)
            .map(|pot| pot.iter().map(|(_, amount)| amount).sum())
    }

    /// Disburse the entire pot to `winner`.
    pub fn settle_win(&mut self, game_id: GameId, winner: PlayerId) -> GameResult<Payout> {
        let pot = self.take_pot(game_id)?;
        let balance: u64 = pot.iter().map(|(_, amount)| amount).sum();

        debug!(game_id = %game_id, winner = %winner, balance, "pot disbursed to winner");
        Ok(Payout {
            game_id,
            credits: vec![(winner, balance)],
        })
    }

    /// Return each player's own pledge; with equal stakes this splits the
    /// pot evenly.
    pub fn settle_draw(&mut self, game_id: GameId) -> GameResult<Payout> {
        let pot = self.take_pot(game_id)?;

        debug!(game_id = %game_id, "pot split on draw");
        Ok(Payout {
            game_id,
            credits: pot,
        })
    }

    /// Disburse the entire pot to the timeout claimant.
    pub fn settle_timeout(&mut self, game_id: GameId, claimant: PlayerId) -> GameResult<Payout> {
        let pot = self.take_pot(game_id)?;
        let balance: u64 = pot.iter().map(|(_, amount)| amount).sum();

        debug!(game_id = %game_id, claimant = %claimant, balance, "pot forfeited to claimant");
        Ok(Payout {
            game_id,
            credits: vec![(claimant, balance)],
        })
    }

    fn take_pot(&mut self, game_id: GameId) -> GameResult<Vec<(PlayerId, u64)>> {
        self.pots
            .remove(&game_id)
            .ok_or(GameError::GameNotFound(game_id))
    }
}
