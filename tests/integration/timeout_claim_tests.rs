//! Forced resolution of stalled games

use gridstake::{EndType, GameError, GameEvent, Symbol};

use crate::mocks::{player, staked_registry, STAKE, TIMEOUT_SECS};

#[test]
fn test_premature_claim_rejected() {
    let (mut registry, _clock, _notifier) = staked_registry();
    let creator = player(1);
    let joiner = player(2);

    let game_id = registry.create_game(creator, STAKE).unwrap();
    registry.join_game(game_id, joiner, STAKE).unwrap();
    registry.play(game_id, creator, 0, 1).unwrap();

    // immediately after the creator's move, nothing has elapsed
    assert_eq!(
        registry.claim_win_by_timeout(game_id, joiner).unwrap_err(),
        GameError::NotYetTimedOut {
            game_id,
            remaining_secs: TIMEOUT_SECS,
        }
    );

    // the game is untouched by the failed claim
    assert!(registry.contains(game_id));
    assert_eq!(registry.pot_balance(game_id), Some(2 * STAKE));
}

#[test]
fn test_claim_one_second_short_still_rejected() {
    let (mut registry, clock, _notifier) = staked_registry();
    let creator = player(1);
    let joiner = player(2);

    let game_id = registry.create_game(creator, STAKE).unwrap();
    registry.join_game(game_id, joiner, STAKE).unwrap();
    registry.play(game_id, creator, 0, 1).unwrap();

    clock.advance(TIMEOUT_SECS - 1);
    assert_eq!(
        registry.claim_win_by_timeout(game_id, joiner).unwrap_err(),
        GameError::NotYetTimedOut {
            game_id,
            remaining_secs: 1,
        }
    );
}

#[test]
fn test_claim_at_threshold_forfeits_the_pot() {
    let (mut registry, clock, notifier) = staked_registry();
    let creator = player(1);
    let joiner = player(2);

    let game_id = registry.create_game(creator, STAKE).unwrap();
    registry.join_game(game_id, joiner, STAKE).unwrap();
    registry.play(game_id, creator, 0, 1).unwrap();

    // eligibility starts exactly at the threshold
    clock.advance(TIMEOUT_SECS);
    let settlement = registry.claim_win_by_timeout(game_id, joiner).unwrap();

    assert_eq!(settlement.end_type, EndType::TimeOut);
    assert_eq!(settlement.winner, Some(joiner));
    assert_eq!(settlement.payout.credits, vec![(joiner, 2 * STAKE)]);

    match notifier.events().last().unwrap() {
        GameEvent::GameConcluded(concluded) => {
            assert_eq!(concluded.end_type, EndType::TimeOut);
            assert_eq!(concluded.winner, Some(joiner));
        }
        other => panic!("expected GameConcluded, got {other:?}"),
    }

    assert!(!registry.contains(game_id));
    assert_eq!(
        registry.claim_win_by_timeout(game_id, joiner).unwrap_err(),
        GameError::GameNotFound(game_id)
    );
}

#[test]
fn test_last_mover_cannot_claim() {
    let (mut registry, clock, _notifier) = staked_registry();
    let creator = player(1);
    let joiner = player(2);

    let game_id = registry.create_game(creator, STAKE).unwrap();
    registry.join_game(game_id, joiner, STAKE).unwrap();
    registry.play(game_id, creator, 0, 1).unwrap();

    // even long past the threshold, the player who moved last has no claim
    clock.advance(10 * TIMEOUT_SECS);
    assert_eq!(
        registry.claim_win_by_timeout(game_id, creator).unwrap_err(),
        GameError::Unauthorized {
            player: creator,
            game_id,
        }
    );

    // whose ply is pending decides the claimant, move by move
    registry.play(game_id, joiner, 1, 1).unwrap();
    clock.advance(10 * TIMEOUT_SECS);
    assert_eq!(
        registry.claim_win_by_timeout(game_id, joiner).unwrap_err(),
        GameError::Unauthorized {
            player: joiner,
            game_id,
        }
    );
    assert!(registry.claim_win_by_timeout(game_id, creator).is_ok());
}

#[test]
fn test_stranger_cannot_claim() {
    let (mut registry, clock, _notifier) = staked_registry();

    let game_id = registry.create_game(player(1), STAKE).unwrap();
    registry.join_game(game_id, player(2), STAKE).unwrap();

    clock.advance(10 * TIMEOUT_SECS);
    assert_eq!(
        registry.claim_win_by_timeout(game_id, player(3)).unwrap_err(),
        GameError::Unauthorized {
            player: player(3),
            game_id,
        }
    );
}

#[test]
fn test_no_claim_while_awaiting_second_player() {
    let (mut registry, clock, _notifier) = staked_registry();
    let creator = player(1);

    let game_id = registry.create_game(creator, STAKE).unwrap();
    clock.advance(10 * TIMEOUT_SECS);

    assert_eq!(
        registry.claim_win_by_timeout(game_id, creator).unwrap_err(),
        GameError::Unauthorized {
            player: creator,
            game_id,
        }
    );
    assert!(registry.contains(game_id));
}

#[test]
fn test_first_move_window_runs_from_join() {
    let (mut registry, clock, _notifier) = staked_registry();
    let creator = player(1);
    let joiner = player(2);

    let game_id = registry.create_game(creator, STAKE).unwrap();
    clock.advance(5);
    registry.join_game(game_id, joiner, STAKE).unwrap();

    // the opening ply is the creator's, so the creator holds the claim
    clock.advance(TIMEOUT_SECS - 1);
    assert!(matches!(
        registry.claim_win_by_timeout(game_id, creator).unwrap_err(),
        GameError::NotYetTimedOut { .. }
    ));

    clock.advance(1);
    let settlement = registry.claim_win_by_timeout(game_id, creator).unwrap();
    assert_eq!(settlement.winner, Some(creator));
    assert_eq!(settlement.end_type, EndType::TimeOut);
}

#[test]
fn test_claimants_freed_for_new_games_after_forfeit() {
    let (mut registry, clock, _notifier) = staked_registry();
    let creator = player(1);
    let joiner = player(2);

    let game_id = registry.create_game(creator, STAKE).unwrap();
    registry.join_game(game_id, joiner, STAKE).unwrap();
    registry.play(game_id, creator, 2, 2).unwrap();

    clock.advance(TIMEOUT_SECS);
    registry.claim_win_by_timeout(game_id, joiner).unwrap();

    assert!(registry.create_game(creator, STAKE).is_ok());
    assert!(registry.create_game(joiner, STAKE).is_ok());
}

#[test]
fn test_claim_window_is_per_game() {
    let (mut registry, clock, _notifier) = staked_registry();

    let first = registry.create_game(player(1), STAKE).unwrap();
    registry.join_game(first, player(2), STAKE).unwrap();
    registry.play(first, player(1), 0, 0).unwrap();

    clock.advance(TIMEOUT_SECS - 2);

    let second = registry.create_game(player(3), STAKE).unwrap();
    registry.join_game(second, player(4), STAKE).unwrap();
    registry.play(second, player(3), 0, 0).unwrap();

    clock.advance(2);

    // only the first game's window has elapsed
    assert!(registry.claim_win_by_timeout(first, player(2)).is_ok());
    assert!(matches!(
        registry.claim_win_by_timeout(second, player(4)).unwrap_err(),
        GameError::NotYetTimedOut { .. }
    ));

    let symbol = registry.turn(second);
    assert_eq!(symbol, Some(Symbol::O));
}
