//! アプリケーション全体のエラー定義モジュール
//! 盤面操作、着手検証、履歴、着手ソースのエラーを統一管理。

use thiserror::Error;

use crate::game::Player;

/// ゲームロジックに関連するエラー
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: isize, col: isize, size: usize },

    #[error("Invalid move: {reason}")]
    InvalidMove { reason: String },

    #[error("Move history is full ({capacity} moves recorded)")]
    HistoryExhausted { capacity: usize },

    #[error("No history record found")]
    NoHistoryToUndo,

    #[error("Failed to parse input '{input}'")]
    MalformedInput { input: String },

    #[error("Invalid board size {size}: must be even and at least 4")]
    InvalidBoardSize { size: usize },

    #[error("Game already finished")]
    GameFinished,

    #[error("{player:?} was rejected {attempts} times in a row")]
    TooManyRejections { player: Player, attempts: usize },

    #[error("Move source failed: {source}")]
    Player {
        #[from]
        source: PlayerError,
    },
}

/// 着手ソース（人間入力・AI）に関連するエラー
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("No valid moves available")]
    NoValidMoves,

    #[error("Input stream closed")]
    InputClosed,

    #[error("Input I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// ゲームエラーをベースとした結果型
pub type Result<T> = std::result::Result<T, GameError>;
