//! Errors reported when rebuilding a game from text.

/// A persisted record or board diagram that cannot be turned into a
/// consistent game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("record has {found} characters, expected {expected}")]
    WrongLength { expected: usize, found: usize },

    #[error("invalid character {ch:?} at position {index}")]
    InvalidDigit { index: usize, ch: char },

    #[error("invalid game type digit {0}")]
    GameType(u8),

    #[error("invalid game state digit {0}")]
    GameState(u8),

    #[error("invalid player digit {0}")]
    Player(u8),

    #[error("cell digit {digit} out of range at ({x}, {y})")]
    CellDigit { x: usize, y: usize, digit: u8 },

    #[error("border cell ({x}, {y}) is not out of bounds")]
    Border { x: usize, y: usize },

    #[error("interior cell ({x}, {y}) is marked out of bounds")]
    Interior { x: usize, y: usize },

    #[error("group at ({x}, {y}) has no liberties")]
    DeadGroup { x: usize, y: usize },

    #[error("diagram has {found} cells, expected {expected}")]
    DiagramLength { expected: usize, found: usize },

    #[error("invalid diagram symbol {0:?}")]
    DiagramSymbol(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_error_display() {
        let err = RecordError::WrongLength {
            expected: 124,
            found: 10,
        };
        assert_eq!(err.to_string(), "record has 10 characters, expected 124");

        let err = RecordError::Border { x: 0, y: 3 };
        assert_eq!(err.to_string(), "border cell (0, 3) is not out of bounds");
    }
}
