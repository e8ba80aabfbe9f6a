//! NoGo-Rust: a rules engine and alpha-beta player for NoGo.
//!
//! NoGo is played on a Go board, but nothing is ever captured and a move
//! that would leave any group (yours or your opponent's) without liberties
//! is forbidden. The player who has no legal move left loses.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, search and evaluator parameters
//! - [`board`] - Padded board representation
//! - [`group`] - Groups and liberty counting
//! - [`rules`] - Move legality and terminal detection
//! - [`eval`] - Heuristic position evaluation
//! - [`search`] - Minimax with alpha-beta pruning
//! - [`game`] - Game session: turns, history, undo, game over
//! - [`record`] - Saved-game record format
//! - [`protocol`] - GTP-style text protocol
//!
//! ## Example
//!
//! ```
//! use nogo_rust::game::{ComputerMove, GameSession, GameType, PlaceOutcome};
//!
//! // Human (Black) against the engine (White)
//! let mut game = GameSession::new(GameType::Pve);
//! assert_eq!(game.place_stone(5, 5), PlaceOutcome::Placed);
//!
//! // Let the engine reply with a shallow search
//! match game.play_computer_move(1) {
//!     ComputerMove::Played { x, y } => println!("engine plays ({x}, {y})"),
//!     other => println!("{other:?}"),
//! }
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod eval;
pub mod game;
pub mod group;
pub mod protocol;
pub mod record;
pub mod rules;
pub mod search;
