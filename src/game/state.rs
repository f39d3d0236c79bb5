//! The match state machine.
//!
//! Owns the two players, the phase, and the ownership store, and
//! orchestrates placement, movement, mill-triggered capture, turn
//! switching, and win detection. The board topology and mill catalog are
//! supplied at construction — the machine never reaches into globals —
//! and every public operation validates first, mutates second: a
//! rejected intent leaves the state exactly as it was.
//!
//! ## Turn discipline
//!
//! Within one turn at most one mill check runs (on the just-occupied
//! position) and at most one capture is granted. A move that completes
//! two lines at once still answers a single boolean and yields a single
//! capture.

use serde::{Deserialize, Serialize};

use crate::board::{BoardTopology, MillCatalog, OwnershipStore};
use crate::core::{GameSettings, PlayerId, PlayerPair, PlayerState, Position};
use crate::game::error::RuleViolation;
use crate::game::event::GameEvent;
use crate::game::phase::Phase;
use crate::rules::{may_fly, MillDetector, MoveRules};

/// Result of a successful placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaceOutcome {
    /// The placement completed a mill; the game is now awaiting a
    /// capture from the same player.
    pub mill_formed: bool,
}

/// Result of a successful move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move completed a mill at its destination.
    pub mill_formed: bool,
}

/// Result of a successful capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemovalOutcome {
    /// The capture ended the match.
    pub game_over: bool,
    /// The winner, when `game_over` is true.
    pub winner: Option<PlayerId>,
}

/// Serializable image of a match, sufficient to resume play.
///
/// The topology and catalog are derived data and are rebuilt from
/// `ring_count` on restore; the event outbox is not part of the image
/// (pending events belong to the presentation layer that drained them).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub ring_count: i32,
    pub players: PlayerPair<PlayerState>,
    pub current: PlayerId,
    pub phase: Phase,
    pub board: OwnershipStore,
    pub selected: Option<Position>,
    pub winner: Option<PlayerId>,
}

impl GameSnapshot {
    /// Encode to a compact binary image.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Decode from a binary image produced by [`GameSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}

/// Builder for a fresh match.
pub struct GameBuilder {
    ring_count: i32,
    player1_name: String,
    player2_name: String,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            ring_count: 3,
            player1_name: "Player1".to_string(),
            player2_name: "Player2".to_string(),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board size. Non-positive values fall back to the 3-ring default
    /// (see `board::topology`).
    pub fn ring_count(mut self, rings: i32) -> Self {
        self.ring_count = rings;
        self
    }

    pub fn player_names(
        mut self,
        player1: impl Into<String>,
        player2: impl Into<String>,
    ) -> Self {
        self.player1_name = player1.into();
        self.player2_name = player2.into();
        self
    }

    /// Build the match.
    #[must_use]
    pub fn build(self) -> Game {
        let topology = BoardTopology::generate(self.ring_count);
        let catalog = MillCatalog::build(&topology);
        Game::new(topology, catalog, self.player1_name, self.player2_name)
    }
}

/// A running match.
pub struct Game {
    topology: BoardTopology,
    catalog: MillCatalog,
    players: PlayerPair<PlayerState>,
    current: PlayerId,
    phase: Phase,
    board: OwnershipStore,
    selected: Option<Position>,
    winner: Option<PlayerId>,
    events: Vec<GameEvent>,
}

impl Game {
    /// Create a match over a prebuilt topology and catalog.
    ///
    /// The catalog must have been built from the same topology; the
    /// builder guarantees this for the common path.
    #[must_use]
    pub fn new(
        topology: BoardTopology,
        catalog: MillCatalog,
        player1_name: impl Into<String>,
        player2_name: impl Into<String>,
    ) -> Self {
        let allotment = 3 * topology.ring_count() as u32;
        let players = PlayerPair::new(
            PlayerState::new(player1_name, allotment),
            PlayerState::new(player2_name, allotment),
        );

        tracing::debug!(
            ring_count = topology.ring_count(),
            pieces_per_player = allotment,
            "new game"
        );

        Self {
            topology,
            catalog,
            players,
            current: PlayerId::ONE,
            phase: Phase::Placing,
            board: OwnershipStore::new(),
            selected: None,
            winner: None,
            events: Vec::new(),
        }
    }

    /// Create a match from the persisted settings store.
    #[must_use]
    pub fn from_settings(settings: &GameSettings) -> Self {
        GameBuilder::new()
            .ring_count(settings.rings)
            .player_names(settings.player1_name.clone(), settings.player2_name.clone())
            .build()
    }

    // === Queries ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The player whose intent is expected next. During
    /// `RemovalPending` this is still the mill former, who owes a
    /// capture.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// A player's bookkeeping.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id]
    }

    /// The owner of `pos`, or `None` if empty or off the board.
    #[must_use]
    pub fn owner_of(&self, pos: Position) -> Option<PlayerId> {
        self.board.owner_of(pos)
    }

    /// Pieces a player has yet to place.
    #[must_use]
    pub fn remaining_pieces(&self, id: PlayerId) -> u32 {
        self.players[id].remaining_pieces
    }

    /// Pieces a player has standing on the board.
    #[must_use]
    pub fn pieces_on_board(&self, id: PlayerId) -> u32 {
        self.players[id].pieces_on_board
    }

    /// The winner, once the match has ended.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Board size.
    #[must_use]
    pub fn ring_count(&self) -> i32 {
        self.topology.ring_count()
    }

    /// The board geometry (for rendering positions).
    #[must_use]
    pub fn topology(&self) -> &BoardTopology {
        &self.topology
    }

    /// The currently selected piece, if any.
    #[must_use]
    pub fn selected_piece(&self) -> Option<Position> {
        self.selected
    }

    /// Drain the pending outward notifications, oldest first.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Operations ===

    /// Place a piece from the current player's hand.
    ///
    /// Valid only in `Placing`, on an empty intersection. On a mill the
    /// game enters `RemovalPending` without switching players; otherwise
    /// the turn passes.
    pub fn place_at(&mut self, pos: Position) -> Result<PlaceOutcome, RuleViolation> {
        self.require_phase(Phase::Placing)?;
        self.require_on_board(pos)?;
        if self.board.is_occupied(pos) {
            return Err(RuleViolation::OccupiedPosition(pos));
        }
        debug_assert!(
            self.players[self.current].remaining_pieces > 0,
            "Placing phase with an empty hand"
        );

        let player = self.current;
        self.players[player].remaining_pieces -= 1;
        self.players[player].pieces_on_board += 1;
        self.board.set(pos, player);
        self.events.push(GameEvent::PiecePlaced {
            player,
            position: pos,
        });
        tracing::debug!(player = %player, position = %pos, "piece placed");

        let mill_formed = self.detector().is_mill(&self.board, pos, player);
        if mill_formed {
            self.enter_removal_pending(pos);
        } else {
            self.finish_turn();
        }

        Ok(PlaceOutcome { mill_formed })
    }

    /// Select one of the current player's pieces for moving.
    ///
    /// Valid only in `Moving`. Returns the legal destinations; selecting
    /// another piece replaces the previous selection.
    pub fn select_piece(&mut self, pos: Position) -> Result<Vec<Position>, RuleViolation> {
        self.require_phase(Phase::Moving)?;
        self.require_on_board(pos)?;
        match self.board.owner_of(pos) {
            None => return Err(RuleViolation::NoPieceAtPosition(pos)),
            Some(owner) if owner != self.current => {
                return Err(RuleViolation::NotCurrentPlayersPiece(pos))
            }
            Some(_) => {}
        }

        self.selected = Some(pos);
        Ok(self.moves_from(pos))
    }

    /// Move the selected piece.
    ///
    /// Valid only in `Moving`, with a prior selection, to a destination
    /// among the selection's legal moves. Mill handling is as for
    /// placement.
    pub fn move_to(&mut self, pos: Position) -> Result<MoveOutcome, RuleViolation> {
        self.require_phase(Phase::Moving)?;
        self.require_on_board(pos)?;
        let from = self.selected.ok_or(RuleViolation::NoPieceSelected)?;
        if self.board.is_occupied(pos) {
            return Err(RuleViolation::OccupiedPosition(pos));
        }
        if !self.moves_from(from).contains(&pos) {
            return Err(RuleViolation::IllegalMoveTarget(pos));
        }

        let player = self.current;
        self.board.remove(from);
        self.board.set(pos, player);
        self.selected = None;
        self.events.push(GameEvent::PieceMoved {
            player,
            from,
            to: pos,
        });
        tracing::debug!(player = %player, from = %from, to = %pos, "piece moved");

        // A move can form a mill only at its destination; the vacated
        // position is never checked.
        let mill_formed = self.detector().is_mill(&self.board, pos, player);
        if mill_formed {
            self.enter_removal_pending(pos);
        } else {
            self.finish_turn();
        }

        Ok(MoveOutcome { mill_formed })
    }

    /// Capture an opponent piece after a mill.
    ///
    /// Valid only in `RemovalPending`. The target must belong to the
    /// opponent and must not sit in one of the opponent's mills — unless
    /// every opponent piece is in a mill, in which case any piece may be
    /// taken.
    pub fn remove_opponent_piece(
        &mut self,
        pos: Position,
    ) -> Result<RemovalOutcome, RuleViolation> {
        self.require_phase(Phase::RemovalPending)?;
        self.require_on_board(pos)?;

        let opponent = self.current.opponent();
        match self.board.owner_of(pos) {
            None => return Err(RuleViolation::NoPieceAtPosition(pos)),
            Some(owner) if owner != opponent => {
                return Err(RuleViolation::NotOpponentsPiece(pos))
            }
            Some(_) => {}
        }

        let detector = self.detector();
        if detector.is_mill(&self.board, pos, opponent)
            && !detector.all_in_mills(&self.board, opponent)
        {
            return Err(RuleViolation::MillProtectedPiece(pos));
        }

        self.board.remove(pos);
        self.players[opponent].pieces_on_board -= 1;
        self.events.push(GameEvent::PieceRemoved {
            position: pos,
            owner: opponent,
        });
        tracing::debug!(position = %pos, owner = %opponent, "piece removed");

        if self.players[opponent].has_lost_by_count() {
            self.end_game(self.current);
            return Ok(RemovalOutcome {
                game_over: true,
                winner: self.winner,
            });
        }

        // Capture resolved: leave the removal sub-phase and hand the
        // turn over, re-entering Placing while hands are non-empty.
        self.phase = if self.hands_are_empty() {
            Phase::Moving
        } else {
            Phase::Placing
        };
        self.finish_turn();

        Ok(RemovalOutcome {
            game_over: self.phase == Phase::GameOver,
            winner: self.winner,
        })
    }

    // === Internals ===

    fn detector(&self) -> MillDetector<'_> {
        MillDetector::new(&self.catalog)
    }

    fn move_rules(&self) -> MoveRules<'_> {
        MoveRules::new(&self.topology)
    }

    fn flying(&self, player: PlayerId) -> bool {
        may_fly(self.players[player].total_pieces(), self.ring_count())
    }

    fn moves_from(&self, pos: Position) -> Vec<Position> {
        self.move_rules()
            .available_moves(&self.board, pos, self.flying(self.current))
    }

    fn hands_are_empty(&self) -> bool {
        PlayerId::both()
            .iter()
            .all(|&p| self.players[p].remaining_pieces == 0)
    }

    fn require_phase(&self, expected: Phase) -> Result<(), RuleViolation> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(RuleViolation::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn require_on_board(&self, pos: Position) -> Result<(), RuleViolation> {
        if self.topology.contains(pos) {
            Ok(())
        } else {
            Err(RuleViolation::InvalidPosition(pos))
        }
    }

    fn enter_removal_pending(&mut self, formed_at: Position) {
        self.phase = Phase::RemovalPending;
        self.events.push(GameEvent::MillFormed {
            player: self.current,
            position: formed_at,
        });
        tracing::info!(player = %self.current, position = %formed_at, "mill formed");
    }

    /// Advance the phase if hands just emptied, pass the turn, and apply
    /// the blocked-loss rule to the player now due to move.
    fn finish_turn(&mut self) {
        if self.phase == Phase::Placing && self.hands_are_empty() {
            self.phase = Phase::Moving;
            tracing::info!("placement complete, movement begins");
        }

        self.current = self.current.opponent();
        self.selected = None;
        self.events.push(GameEvent::TurnChanged {
            player: self.current,
        });

        // A player due to move with no legal move loses on the spot.
        // Only meaningful in Moving: a non-empty hand can always place.
        if self.phase == Phase::Moving {
            let blocked = !self.move_rules().has_any_legal_move(
                &self.board,
                self.current,
                self.flying(self.current),
            );
            if blocked {
                tracing::info!(player = %self.current, "player is blocked");
                self.end_game(self.current.opponent());
            }
        }
    }

    fn end_game(&mut self, winner: PlayerId) {
        self.phase = Phase::GameOver;
        self.winner = Some(winner);
        self.events.push(GameEvent::GameOver { winner });
        tracing::info!(winner = %winner, "game over");
    }

    // === Snapshots ===

    /// Capture a serializable image of the match.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            ring_count: self.ring_count(),
            players: self.players.clone(),
            current: self.current,
            phase: self.phase,
            board: self.board.clone(),
            selected: self.selected,
            winner: self.winner,
        }
    }

    /// Rebuild a match from a snapshot. The topology and catalog are
    /// regenerated from the recorded ring count; the event outbox starts
    /// empty.
    #[must_use]
    pub fn restore(snapshot: GameSnapshot) -> Self {
        let topology = BoardTopology::generate(snapshot.ring_count);
        let catalog = MillCatalog::build(&topology);

        Self {
            topology,
            catalog,
            players: snapshot.players,
            current: snapshot.current,
            phase: snapshot.phase,
            board: snapshot.board,
            selected: snapshot.selected,
            winner: snapshot.winner,
            events: Vec::new(),
        }
    }
}
