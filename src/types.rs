use serde::Serialize;

const BOARD_WIDTH: usize = 8;

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub(crate) fn from_index(pos: usize) -> Self {
        Self {
            row: (pos / BOARD_WIDTH) as u8,
            col: (pos % BOARD_WIDTH) as u8,
        }
    }
}

/// Record of the most recently applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub from: Position,
    pub to: Position,
    /// Square of the jumped piece, when the move was a capture.
    pub captured: Option<Position>,
    pub promoted: bool,
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Flat 64-cell board: 0=empty, 1=red man, 2=black man,
    /// 3=red king, 4=black king.
    pub board: Vec<u8>,
    /// 1 = red, 2 = black.
    pub current_player: u8,
    pub red_count: u8,
    pub black_count: u8,
    /// Contract:
    /// - `Some` while a square is selected, with its legal destinations
    ///   in `targets` for the UI to highlight.
    /// - `None` with empty `targets` otherwise.
    pub selected: Option<Position>,
    pub targets: Vec<Position>,
    pub last_move: Option<MoveRecord>,
    pub moves_played: u32,
}
