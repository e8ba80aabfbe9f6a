//! Persisted game record.
//!
//! A record is a single line of digits:
//!
//! | position | meaning                                       |
//! |----------|-----------------------------------------------|
//! | 0        | game type: 1 = Pvp, 2 = Pve                   |
//! | 1        | game state: 1 = Playing, 2 = GameOver, 3 = Suspended |
//! | 2        | player to move: 1 = Black, 2 = White          |
//! | 3..      | `W * W` cells: 0 empty, 1 black, 2 white, 3 border |
//!
//! Cells run over the whole padded grid, border included, with `x` as the
//! outer loop and `y` as the inner one. Move history is not stored.

use tracing::warn;

use crate::board::{Board, Cell, Color, coords, interior_points, is_interior};
use crate::constants::W;
use crate::error::RecordError;
use crate::game::{GameSession, GameState, GameType};
use crate::group::group_liberties;

/// Length of a record in characters.
pub const RECORD_LEN: usize = 3 + W * W;

/// Serialize a session.
pub fn to_record(game: &GameSession) -> String {
    let mut s = String::with_capacity(RECORD_LEN);
    s.push(digit_char(game.game_type().digit()));
    s.push(digit_char(game.state().digit()));
    s.push(digit_char(game.active_player().digit()));
    for x in 0..W {
        for y in 0..W {
            s.push(digit_char(game.board().get(x, y).digit()));
        }
    }
    s
}

/// Rebuild a session from a record.
///
/// Trailing whitespace is ignored. Anything else that does not describe a
/// reachable position is rejected rather than loaded half-way.
pub fn from_record(record: &str) -> Result<GameSession, RecordError> {
    parse(record.trim_end()).inspect_err(|e| warn!(error = %e, "rejected game record"))
}

fn parse(record: &str) -> Result<GameSession, RecordError> {
    let found = record.chars().count();
    if found != RECORD_LEN {
        return Err(RecordError::WrongLength {
            expected: RECORD_LEN,
            found,
        });
    }
    let digits = record
        .chars()
        .enumerate()
        .map(|(index, ch)| {
            ch.to_digit(10)
                .map(|d| d as u8)
                .ok_or(RecordError::InvalidDigit { index, ch })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let game_type = GameType::from_digit(digits[0]).ok_or(RecordError::GameType(digits[0]))?;
    let state = GameState::from_digit(digits[1]).ok_or(RecordError::GameState(digits[1]))?;
    let player = Color::from_digit(digits[2]).ok_or(RecordError::Player(digits[2]))?;

    let mut board = Board::new();
    for (i, &digit) in digits[3..].iter().enumerate() {
        let (x, y) = (i / W, i % W);
        let cell = Cell::from_digit(digit).ok_or(RecordError::CellDigit { x, y, digit })?;
        match (is_interior(x, y), cell) {
            (false, Cell::OutOfBounds) => {}
            (false, _) => return Err(RecordError::Border { x, y }),
            (true, Cell::OutOfBounds) => return Err(RecordError::Interior { x, y }),
            (true, c) => board.set_raw(x, y, c),
        }
    }

    for pt in interior_points() {
        let (x, y) = coords(pt);
        if group_liberties(&board, x, y) == Some(0) {
            return Err(RecordError::DeadGroup { x, y });
        }
    }

    Ok(GameSession::with_position(board, game_type, player, state))
}

fn digit_char(d: u8) -> char {
    char::from(b'0' + d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::N;

    #[test]
    fn test_empty_record_layout() {
        let game = GameSession::new(GameType::Pvp);
        let rec = to_record(&game);
        assert_eq!(rec.len(), RECORD_LEN);
        assert!(rec.starts_with("111"));
        // First padded column is all border.
        assert_eq!(&rec[3..3 + W], "3".repeat(W));
        // Second column: border, N empties, border.
        let col = &rec[3 + W..3 + 2 * W];
        assert_eq!(col, format!("3{}3", "0".repeat(N)));
    }

    #[test]
    fn test_x_is_outer_index() {
        let mut game = GameSession::new(GameType::Pve);
        game.place_stone(2, 1);
        let rec = to_record(&game);
        // Pve, Playing, White (computer) to move.
        assert!(rec.starts_with("212"));
        assert_eq!(rec.as_bytes()[3 + 2 * W + 1], b'1');
    }

    #[test]
    fn test_roundtrip() {
        let mut game = GameSession::new(GameType::Pvp);
        game.place_stone(5, 5);
        game.place_stone(1, 9);
        game.place_stone(2, 3);
        let loaded = from_record(&to_record(&game)).unwrap();
        assert_eq!(loaded.board(), game.board());
        assert_eq!(loaded.active_player(), game.active_player());
        assert_eq!(loaded.state(), game.state());
        assert_eq!(loaded.game_type(), game.game_type());
        assert!(loaded.history().is_empty());
    }

    #[test]
    fn test_trailing_newline_accepted() {
        let game = GameSession::new(GameType::Pve);
        let rec = format!("{}\n", to_record(&game));
        assert!(from_record(&rec).is_ok());
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(
            from_record("111"),
            Err(RecordError::WrongLength {
                expected: RECORD_LEN,
                found: 3
            })
        );
    }

    #[test]
    fn test_bad_digits() {
        let good = to_record(&GameSession::new(GameType::Pvp));

        let mut bad = good.clone();
        bad.replace_range(0..1, "7");
        assert_eq!(from_record(&bad), Err(RecordError::GameType(7)));

        let mut bad = good.clone();
        bad.replace_range(1..2, "0");
        assert_eq!(from_record(&bad), Err(RecordError::GameState(0)));

        let mut bad = good.clone();
        bad.replace_range(2..3, "3");
        assert_eq!(from_record(&bad), Err(RecordError::Player(3)));

        let mut bad = good.clone();
        bad.replace_range(10..11, "a");
        assert_eq!(
            from_record(&bad),
            Err(RecordError::InvalidDigit { index: 10, ch: 'a' })
        );

        let mut bad = good.clone();
        let i = 3 + W + 1;
        bad.replace_range(i..i + 1, "5");
        assert_eq!(
            from_record(&bad),
            Err(RecordError::CellDigit { x: 1, y: 1, digit: 5 })
        );
    }

    #[test]
    fn test_border_and_interior_checked() {
        let good = to_record(&GameSession::new(GameType::Pvp));

        let mut bad = good.clone();
        bad.replace_range(3..4, "0");
        assert_eq!(from_record(&bad), Err(RecordError::Border { x: 0, y: 0 }));

        let mut bad = good.clone();
        let i = 3 + 2 * W + 2;
        bad.replace_range(i..i + 1, "3");
        assert_eq!(from_record(&bad), Err(RecordError::Interior { x: 2, y: 2 }));
    }

    #[test]
    fn test_dead_group_rejected() {
        let mut board = Board::new();
        board.place(1, 1, Color::White);
        board.place(2, 1, Color::Black);
        board.place(1, 2, Color::Black);
        let game =
            GameSession::with_position(board, GameType::Pvp, Color::Black, GameState::Playing);
        assert_eq!(
            from_record(&to_record(&game)),
            Err(RecordError::DeadGroup { x: 1, y: 1 })
        );
    }

    #[test]
    fn test_game_over_winner_restored() {
        let mut game = GameSession::new(GameType::Pvp);
        assert!(game.forfeit_by_timeout(Color::Black));
        let loaded = from_record(&to_record(&game)).unwrap();
        assert_eq!(loaded.state(), GameState::GameOver);
        assert_eq!(loaded.winner(), Some(Color::White));
    }
}
