//! Rule-edge scenarios: flying, blocked loss, capture protection.
//!
//! These construct mid-game states through the snapshot surface (the
//! same one save-and-resume uses) and then drive the public intent API,
//! so every scenario also exercises `Game::restore`.

use ringmill::{
    Game, GameSnapshot, OwnershipStore, Phase, PlayerId, PlayerPair, PlayerState, Position,
    RuleViolation,
};

/// Build a game in a hand-authored state.
///
/// `remaining` is (player one, player two); on-board counts are derived
/// from `pieces`.
fn game_in_state(
    rings: i32,
    phase: Phase,
    current: PlayerId,
    pieces: &[(Position, PlayerId)],
    remaining: (u32, u32),
) -> Game {
    let mut board = OwnershipStore::new();
    for &(pos, owner) in pieces {
        board.set(pos, owner);
    }

    let max_pieces = 3 * rings as u32;
    let on_board = |id: PlayerId| pieces.iter().filter(|&&(_, o)| o == id).count() as u32;

    let mut player1 = PlayerState::new("Alice", max_pieces);
    player1.pieces_on_board = on_board(PlayerId::ONE);
    player1.remaining_pieces = remaining.0;

    let mut player2 = PlayerState::new("Bob", max_pieces);
    player2.pieces_on_board = on_board(PlayerId::TWO);
    player2.remaining_pieces = remaining.1;

    Game::restore(GameSnapshot {
        ring_count: rings,
        players: PlayerPair::new(player1, player2),
        current,
        phase,
        board,
        selected: None,
        winner: None,
    })
}

// =============================================================================
// Flying
// =============================================================================

/// With three rings, a player down to exactly three pieces may move to
/// any empty intersection, not just adjacent ones.
#[test]
fn test_flying_player_reaches_any_empty_spot() {
    let mut g = game_in_state(
        3,
        Phase::Moving,
        PlayerId::ONE,
        &[
            (Position::new(1, 0), PlayerId::ONE),
            (Position::new(1, 1), PlayerId::ONE),
            (Position::new(0, 1), PlayerId::ONE),
            (Position::new(3, 3), PlayerId::TWO),
            (Position::new(0, 3), PlayerId::TWO),
            (Position::new(3, 0), PlayerId::TWO),
            (Position::new(2, 2), PlayerId::TWO),
        ],
        (0, 0),
    );

    let moves = g.select_piece(Position::new(1, 0)).unwrap();
    assert_eq!(moves.len(), g.topology().len() - 7);
    assert!(moves.contains(&Position::new(-3, -3)));

    // A cross-board relocation is accepted outright.
    g.move_to(Position::new(-3, -3)).unwrap();
    assert_eq!(g.owner_of(Position::new(-3, -3)), Some(PlayerId::ONE));
    assert_eq!(g.owner_of(Position::new(1, 0)), None);
}

/// A fourth piece disables flying: only adjacent empty spots remain.
#[test]
fn test_four_pieces_do_not_fly() {
    let mut g = game_in_state(
        3,
        Phase::Moving,
        PlayerId::ONE,
        &[
            (Position::new(1, 0), PlayerId::ONE),
            (Position::new(1, 1), PlayerId::ONE),
            (Position::new(0, 1), PlayerId::ONE),
            (Position::new(3, 3), PlayerId::ONE),
            (Position::new(0, 3), PlayerId::TWO),
            (Position::new(3, 0), PlayerId::TWO),
            (Position::new(2, 2), PlayerId::TWO),
        ],
        (0, 0),
    );

    let moves = g.select_piece(Position::new(1, 0)).unwrap();
    // (1,0): right to (2,0), down to (1,-1); up and left are occupied.
    assert_eq!(moves.len(), 2);
    assert!(moves.contains(&Position::new(2, 0)));
    assert!(moves.contains(&Position::new(1, -1)));

    assert_eq!(
        g.move_to(Position::new(-3, -3)),
        Err(RuleViolation::IllegalMoveTarget(Position::new(-3, -3)))
    );
}

/// The flying rule never applies on one- and two-ring boards.
#[test]
fn test_no_flying_on_small_boards() {
    let mut g = game_in_state(
        2,
        Phase::Moving,
        PlayerId::ONE,
        &[
            (Position::new(1, 1), PlayerId::ONE),
            (Position::new(0, 1), PlayerId::ONE),
            (Position::new(1, -1), PlayerId::ONE),
            (Position::new(-2, -2), PlayerId::TWO),
            (Position::new(-2, 0), PlayerId::TWO),
            (Position::new(0, -2), PlayerId::TWO),
        ],
        (0, 0),
    );

    let moves = g.select_piece(Position::new(1, 1)).unwrap();
    // Adjacent only, despite the three-piece total.
    assert_eq!(moves, vec![Position::new(1, 0)]);
}

// =============================================================================
// Blocked Loss
// =============================================================================

/// A move that walls in the opponent ends the game immediately,
/// crediting the mover.
#[test]
fn test_blocked_player_loses_on_their_turn() {
    let mut g = game_in_state(
        2,
        Phase::Moving,
        PlayerId::ONE,
        &[
            // Bob's three pieces, each with two escape routes.
            (Position::new(2, 2), PlayerId::TWO),
            (Position::new(1, 1), PlayerId::TWO),
            (Position::new(2, -2), PlayerId::TWO),
            // Alice already covers all but one of those routes.
            (Position::new(0, 2), PlayerId::ONE),
            (Position::new(2, 0), PlayerId::ONE),
            (Position::new(0, 1), PlayerId::ONE),
            (Position::new(0, -2), PlayerId::ONE),
            (Position::new(1, -1), PlayerId::ONE),
        ],
        (0, 0),
    );

    // Sealing the last escape at (1, 0) forms no mill, so the turn
    // passes to Bob, who has nowhere to go.
    g.select_piece(Position::new(1, -1)).unwrap();
    let outcome = g.move_to(Position::new(1, 0)).unwrap();
    assert!(!outcome.mill_formed);

    assert_eq!(g.phase(), Phase::GameOver);
    assert_eq!(g.winner(), Some(PlayerId::ONE));
}

/// The same wall is harmless while the victim still has pieces in hand:
/// placement is always possible, so no blocked check fires.
#[test]
fn test_hand_pieces_shield_from_blocked_loss() {
    let mut g = game_in_state(
        2,
        Phase::Placing,
        PlayerId::ONE,
        &[
            (Position::new(2, 2), PlayerId::TWO),
            (Position::new(1, 1), PlayerId::TWO),
            (Position::new(2, -2), PlayerId::TWO),
            (Position::new(0, 2), PlayerId::ONE),
            (Position::new(2, 0), PlayerId::ONE),
            (Position::new(0, 1), PlayerId::ONE),
            (Position::new(0, -2), PlayerId::ONE),
        ],
        (1, 1),
    );

    g.place_at(Position::new(1, 0)).unwrap();
    assert_eq!(g.phase(), Phase::Placing);
    assert_eq!(g.winner(), None);
}

// =============================================================================
// Capture Protection
// =============================================================================

fn removal_pending_with_loose_piece() -> Game {
    game_in_state(
        3,
        Phase::RemovalPending,
        PlayerId::ONE,
        &[
            // Bob: a complete mill plus one unprotected piece.
            (Position::new(2, 2), PlayerId::TWO),
            (Position::new(2, 0), PlayerId::TWO),
            (Position::new(2, -2), PlayerId::TWO),
            (Position::new(0, 1), PlayerId::TWO),
            // Alice: the mill she just formed.
            (Position::new(-3, 3), PlayerId::ONE),
            (Position::new(-3, 0), PlayerId::ONE),
            (Position::new(-3, -3), PlayerId::ONE),
        ],
        (0, 0),
    )
}

/// Pieces inside an opponent mill are protected while an unprotected
/// piece exists.
#[test]
fn test_mill_pieces_protected_while_loose_piece_exists() {
    let mut g = removal_pending_with_loose_piece();

    for target in [
        Position::new(2, 2),
        Position::new(2, 0),
        Position::new(2, -2),
    ] {
        assert_eq!(
            g.remove_opponent_piece(target),
            Err(RuleViolation::MillProtectedPiece(target))
        );
    }

    // State untouched by the rejections; the loose piece is fair game.
    assert_eq!(g.phase(), Phase::RemovalPending);
    let outcome = g.remove_opponent_piece(Position::new(0, 1)).unwrap();
    assert!(!outcome.game_over);
    assert_eq!(g.owner_of(Position::new(0, 1)), None);
    assert_eq!(g.pieces_on_board(PlayerId::TWO), 3);
}

/// When every opponent piece sits in a mill, the protection is waived
/// and any piece may be taken.
#[test]
fn test_all_in_mills_waives_protection() {
    let mut g = game_in_state(
        3,
        Phase::RemovalPending,
        PlayerId::ONE,
        &[
            (Position::new(2, 2), PlayerId::TWO),
            (Position::new(2, 0), PlayerId::TWO),
            (Position::new(2, -2), PlayerId::TWO),
            (Position::new(-3, 3), PlayerId::ONE),
            (Position::new(-3, 0), PlayerId::ONE),
            (Position::new(-3, -3), PlayerId::ONE),
            (Position::new(1, 1), PlayerId::ONE),
        ],
        (1, 2),
    );

    let outcome = g.remove_opponent_piece(Position::new(2, 0)).unwrap();
    assert!(!outcome.game_over);
    assert_eq!(g.owner_of(Position::new(2, 0)), None);

    // Bob still has two on board and two in hand; play continues in
    // the placing phase since hands are not empty.
    assert_eq!(g.phase(), Phase::Placing);
    assert_eq!(g.current_player(), PlayerId::TWO);
}

/// Capturing the piece that drops the opponent below three total ends
/// the match at once.
#[test]
fn test_capture_below_three_total_wins() {
    let mut g = game_in_state(
        3,
        Phase::RemovalPending,
        PlayerId::ONE,
        &[
            (Position::new(2, 2), PlayerId::TWO),
            (Position::new(2, 0), PlayerId::TWO),
            (Position::new(2, -2), PlayerId::TWO),
            (Position::new(-3, 3), PlayerId::ONE),
            (Position::new(-3, 0), PlayerId::ONE),
            (Position::new(-3, -3), PlayerId::ONE),
        ],
        (0, 0),
    );

    let outcome = g.remove_opponent_piece(Position::new(2, 0)).unwrap();
    assert!(outcome.game_over);
    assert_eq!(outcome.winner, Some(PlayerId::ONE));
    assert_eq!(g.phase(), Phase::GameOver);
    assert_eq!(g.winner(), Some(PlayerId::ONE));
}
