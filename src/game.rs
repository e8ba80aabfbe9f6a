//! Game session: turn order, game state, history and undo.
//!
//! A [`GameSession`] owns the only authoritative board of a game. Front ends
//! hold the session and call into it; search works on copies.

use tracing::info;

use crate::board::{Board, Cell, Color, coords, interior_points};
use crate::rules::{has_any_legal_move, is_legal_move};
use crate::search::{SearchResult, best_move};

/// Who plays whom.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameType {
    /// Two humans alternate at the same board.
    Pvp,
    /// A human (Black) against the engine (White).
    Pve,
}

impl GameType {
    pub fn digit(self) -> u8 {
        match self {
            GameType::Pvp => 1,
            GameType::Pve => 2,
        }
    }

    pub fn from_digit(d: u8) -> Option<GameType> {
        match d {
            1 => Some(GameType::Pvp),
            2 => Some(GameType::Pve),
            _ => None,
        }
    }

    /// Color played by the engine, if any.
    pub fn computer_color(self) -> Option<Color> {
        match self {
            GameType::Pvp => None,
            GameType::Pve => Some(Color::White),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    GameOver,
    Suspended,
}

impl GameState {
    pub fn digit(self) -> u8 {
        match self {
            GameState::Playing => 1,
            GameState::GameOver => 2,
            GameState::Suspended => 3,
        }
    }

    pub fn from_digit(d: u8) -> Option<GameState> {
        match d {
            1 => Some(GameState::Playing),
            2 => Some(GameState::GameOver),
            3 => Some(GameState::Suspended),
            _ => None,
        }
    }
}

/// A single applied placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub x: usize,
    pub y: usize,
    pub color: Color,
}

/// Result of a placement request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaceOutcome {
    Placed,
    IllegalMove,
    NotPlayersTurn,
    GameAlreadyOver,
}

/// Result of letting the engine move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ComputerMove {
    /// The engine played at (x, y).
    Played { x: usize, y: usize },
    /// The engine had no legal move and has lost.
    Resigned,
    /// It is not the engine's turn, or the game is not in progress.
    NotComputersTurn,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    player: Color,
    game_type: GameType,
    state: GameState,
    winner: Option<Color>,
    history: Vec<Move>,
    /// Position the history replays from.
    base: Board,
    base_player: Color,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameType::Pve)
    }
}

impl GameSession {
    /// A fresh game on an empty board, Black to move.
    pub fn new(game_type: GameType) -> Self {
        Self::with_position(Board::new(), game_type, Color::Black, GameState::Playing)
    }

    /// A session starting from an arbitrary position, with empty history.
    ///
    /// A GameOver session attributes the loss to the side to move.
    pub fn with_position(
        board: Board,
        game_type: GameType,
        player: Color,
        state: GameState,
    ) -> Self {
        let winner = (state == GameState::GameOver).then(|| player.opponent());
        Self {
            board,
            player,
            game_type,
            state,
            winner,
            history: Vec::new(),
            base: board,
            base_player: player,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_player(&self) -> Color {
        self.player
    }

    pub fn game_type(&self) -> GameType {
        self.game_type
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.board.get(x, y)
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Plies played since the base position.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Would placing at (x, y) be illegal for the active player?
    ///
    /// Occupied and off-board cells are not reported; they are not
    /// candidate placements in the first place.
    pub fn is_forbidden(&self, x: usize, y: usize) -> bool {
        self.board.get(x, y) == Cell::Empty && !is_legal_move(&self.board, x, y, self.player)
    }

    /// Every empty cell the active player may not play, row-major.
    pub fn forbidden_points(&self) -> Vec<(usize, usize)> {
        interior_points()
            .map(coords)
            .filter(|&(x, y)| self.is_forbidden(x, y))
            .collect()
    }

    /// Place a stone for the active player.
    ///
    /// In a Pve game the human only moves as Black; use
    /// [`play_computer_move`](Self::play_computer_move) for White.
    pub fn place_stone(&mut self, x: usize, y: usize) -> PlaceOutcome {
        let computers_turn = self.game_type.computer_color() == Some(self.player);
        if computers_turn && self.state == GameState::Playing {
            return PlaceOutcome::NotPlayersTurn;
        }
        self.apply(x, y, self.player)
    }

    /// Place a stone for `color`, which must be the active player.
    pub fn place_stone_as(&mut self, x: usize, y: usize, color: Color) -> PlaceOutcome {
        if self.state == GameState::Playing && color != self.player {
            return PlaceOutcome::NotPlayersTurn;
        }
        self.apply(x, y, color)
    }

    /// Search for the active player's best move without playing it.
    pub fn request_computer_move(&self, max_depth: u32) -> SearchResult {
        best_move(&self.board, self.player, max_depth)
    }

    /// Let the engine play for the active player.
    ///
    /// In a Pve game this is only allowed on the engine's turn; in a Pvp
    /// game it acts as a hint that is played immediately.
    pub fn play_computer_move(&mut self, max_depth: u32) -> ComputerMove {
        if self.state != GameState::Playing {
            return ComputerMove::NotComputersTurn;
        }
        if let Some(c) = self.game_type.computer_color() {
            if c != self.player {
                return ComputerMove::NotComputersTurn;
            }
        }

        let result = self.request_computer_move(max_depth);
        if result.is_no_move() {
            self.finish(self.player.opponent());
            return ComputerMove::Resigned;
        }
        match self.apply(result.x, result.y, self.player) {
            PlaceOutcome::Placed => ComputerMove::Played {
                x: result.x,
                y: result.y,
            },
            // The search only returns legal moves.
            _ => ComputerMove::NotComputersTurn,
        }
    }

    /// Take back `n_plies` moves by replaying history from the base
    /// position. Returns the number of plies actually removed; history
    /// never reaches back past a loaded position. A suspended game must be
    /// resumed first.
    pub fn undo(&mut self, n_plies: usize) -> usize {
        let n = n_plies.min(self.history.len());
        if n == 0 || self.state == GameState::Suspended {
            return 0;
        }
        let keep = self.history.len() - n;
        let replay: Vec<Move> = self.history.drain(..).take(keep).collect();

        self.board = self.base;
        self.player = self.base_player;
        self.state = GameState::Playing;
        self.winner = None;
        for mv in replay {
            self.apply(mv.x, mv.y, mv.color);
        }
        n
    }

    /// The "take back" button: one ply in Pvp; in Pve, as many plies as it
    /// takes to give the turn back to the human.
    pub fn retract(&mut self) -> usize {
        match self.game_type.computer_color() {
            None => self.undo(1),
            Some(computer) => {
                let last_is_computer = self.last_move().is_some_and(|m| m.color == computer);
                let plies = if last_is_computer { 2 } else { 1 };
                self.undo(plies)
            }
        }
    }

    /// The per-move clock ran out for `color`: it loses.
    ///
    /// Only a game in progress can be lost on time; returns false and
    /// leaves the session alone otherwise.
    pub fn forfeit_by_timeout(&mut self, color: Color) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        info!(%color, "time limit exceeded");
        self.finish(color.opponent());
        true
    }

    /// Pause a game in progress. Placements are refused until
    /// [`resume`](Self::resume).
    pub fn suspend(&mut self) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        self.state = GameState::Suspended;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state != GameState::Suspended {
            return false;
        }
        self.state = GameState::Playing;
        true
    }

    fn apply(&mut self, x: usize, y: usize, color: Color) -> PlaceOutcome {
        match self.state {
            GameState::GameOver => return PlaceOutcome::GameAlreadyOver,
            GameState::Suspended => return PlaceOutcome::NotPlayersTurn,
            GameState::Playing => {}
        }
        if color != self.player {
            return PlaceOutcome::NotPlayersTurn;
        }
        if !is_legal_move(&self.board, x, y, color) {
            return PlaceOutcome::IllegalMove;
        }

        self.board.place(x, y, color);
        self.history.push(Move { x, y, color });
        self.player = color.opponent();

        if !has_any_legal_move(&self.board, self.player) {
            self.finish(color);
        }
        PlaceOutcome::Placed
    }

    fn finish(&mut self, winner: Color) {
        self.state = GameState::GameOver;
        self.winner = Some(winner);
        info!(%winner, moves = self.history.len(), "game over");
    }
}
