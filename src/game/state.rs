//! ゲーム状態管理モジュール
//! 盤面、手番、着手履歴を1つの値にまとめ、着手と取り消しを提供する。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use super::board::Board;
use super::history::MoveHistory;
use super::rules::{GameResult, ReversiRules};
use super::types::{MoveRecord, Player, Position};
use crate::error::{GameError, Result};

/// ゲームの進行状態を表すenum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲーム進行中
    InProgress,
    /// ゲーム終了（石数と勝敗を記録）
    Finished { result: GameResult },
}

/// オセロの1局分の状態を保持する構造体
/// 盤面、名目上の手番、着手履歴を全て含む
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub id: Uuid,
    pub board: Board,
    pub current_player: Player,
    pub status: GameStatus,
    history: MoveHistory,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl GameState {
    /// 新しいゲーム状態を作成する
    /// 初期状態：黒の番でゲーム開始
    pub fn new(board_size: usize) -> Result<Self> {
        let board = Board::new(board_size)?;
        Ok(Self::from_board(board))
    }

    /// 指定IDで新しいゲーム状態を作成する
    pub fn new_with_id(id: Uuid, board_size: usize) -> Result<Self> {
        let mut state = Self::new(board_size)?;
        state.id = id;
        Ok(state)
    }

    fn from_board(board: Board) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            history: MoveHistory::new(board.size()),
            board,
            current_player: Player::Dark,
            status: GameStatus::InProgress,
            created_at: now,
            last_updated: now,
        }
    }

    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// 実際に着手するプレイヤーを返す
    /// 名目上の手番に合法手がなければ相手、双方になければNone
    pub fn active_player(&self) -> Option<Player> {
        ReversiRules::resolve_active_player(&self.board, self.current_player)
    }

    /// ゲームが終了しているかチェックする
    pub fn is_finished(&self) -> bool {
        ReversiRules::is_game_over(&self.board)
    }

    /// 指定した位置に手番プレイヤーの石を置く
    /// 盤面更新と履歴記録を行い、名目上の手番を着手者の相手に進める
    pub fn play_move(&mut self, position: Position) -> Result<Vec<Position>> {
        if self.is_finished() {
            return Err(GameError::GameFinished);
        }

        let player = self.active_player().ok_or(GameError::GameFinished)?;

        // 盤面を変更する前に記録できることを確認する
        if self.history.is_full() {
            return Err(GameError::HistoryExhausted {
                capacity: self.history.capacity(),
            });
        }

        let flipped = ReversiRules::apply_move(&mut self.board, position, player)?;
        self.history.record(player, position)?;
        self.current_player = player.opposite();
        self.touch();

        Ok(flipped)
    }

    /// 直前の1手を取り消す
    /// 最新の記録を除いた履歴を初期配置から再生して盤面を作り直し、
    /// 手番を取り消した手の着手者に戻す
    pub fn undo(&mut self) -> Result<MoveRecord> {
        let Some(latest) = self.history.latest() else {
            warn!(game_id = %self.id, "no history record found, nothing to undo");
            return Err(GameError::NoHistoryToUndo);
        };

        let mover = latest.player;
        let rebuilt = self.history.replay(self.board_size(), self.history.len() - 1)?;

        self.current_player = mover;
        let undone = self.history.pop().ok_or(GameError::NoHistoryToUndo)?;
        self.board = rebuilt;
        self.touch();

        info!(
            game_id = %self.id,
            player = ?undone.player,
            row = undone.position.row,
            col = undone.position.col,
            "move undone"
        );

        Ok(undone)
    }

    /// 現在の石数と勝敗を取得する
    pub fn score(&self) -> GameResult {
        ReversiRules::score(&self.board)
    }

    /// これまでの手数を取得する
    pub fn get_move_count(&self) -> usize {
        self.history.len()
    }

    fn touch(&mut self) {
        self.status = if self.is_finished() {
            GameStatus::Finished {
                result: self.score(),
            }
        } else {
            GameStatus::InProgress
        };
        self.last_updated = Utc::now();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::from_board(Board::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Outcome};

    fn pos(row: isize, col: isize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_game_state_new() {
        let game = GameState::new(8).unwrap();

        assert_eq!(game.current_player, Player::Dark);
        assert_eq!(game.status, GameStatus::InProgress);
        assert_eq!(game.get_move_count(), 0);
        assert_eq!(game.board, Board::new(8).unwrap());
        assert_eq!(game.board_size(), 8);
    }

    #[test]
    fn test_game_state_new_with_id() {
        let custom_id = Uuid::new_v4();
        let game = GameState::new_with_id(custom_id, 6).unwrap();

        assert_eq!(game.id, custom_id);
        assert_eq!(game.board_size(), 6);
        assert_eq!(game.history().capacity(), 36);
    }

    #[test]
    fn test_game_state_rejects_odd_size() {
        assert!(matches!(GameState::new(9), Err(GameError::InvalidBoardSize { size: 9 })));
    }

    #[test]
    fn test_play_move_advances_turn() {
        let mut game = GameState::default();

        let flipped = game.play_move(pos(3, 2)).unwrap();
        assert_eq!(flipped, vec![pos(3, 3)]);
        assert_eq!(game.current_player, Player::Light);
        assert_eq!(game.get_move_count(), 1);
        assert_eq!(game.history().latest().map(|r| r.player), Some(Player::Dark));
    }

    #[test]
    fn test_play_invalid_move_leaves_state() {
        let mut game = GameState::default();

        assert!(matches!(game.play_move(pos(0, 0)), Err(GameError::InvalidMove { .. })));
        assert!(matches!(game.play_move(pos(8, 0)), Err(GameError::OutOfBounds { .. })));
        assert_eq!(game.current_player, Player::Dark);
        assert_eq!(game.get_move_count(), 0);
        assert_eq!(game.board, Board::default());
    }

    #[test]
    fn test_play_move_auto_pass() {
        // 白に合法手がない盤面では名目上白の番でも黒が打つ
        let mut game = GameState::new(4).unwrap();
        game.board = Board::filled(4, Cell::Empty).unwrap();
        game.board.set_cell(pos(0, 1), Cell::Light);
        game.board.set_cell(pos(0, 2), Cell::Dark);
        game.board.set_cell(pos(0, 3), Cell::Dark);
        game.current_player = Player::Light;

        assert_eq!(game.active_player(), Some(Player::Dark));
        game.play_move(pos(0, 0)).unwrap();

        assert_eq!(game.history().latest().map(|r| r.player), Some(Player::Dark));
        assert_eq!(game.current_player, Player::Light);
    }

    #[test]
    fn test_play_move_finished_game() {
        let mut game = GameState::default();
        game.board = Board::filled(8, Cell::Dark).unwrap();

        assert!(game.is_finished());
        assert!(matches!(game.play_move(pos(2, 3)), Err(GameError::GameFinished)));
    }

    #[test]
    fn test_status_tracks_finish() {
        let mut game = GameState::new(4).unwrap();
        game.board = Board::filled(4, Cell::Dark).unwrap();
        game.board.set_cell(pos(0, 0), Cell::Empty);
        game.board.set_cell(pos(0, 1), Cell::Light);

        game.play_move(pos(0, 0)).unwrap();

        match game.status {
            GameStatus::Finished { result } => {
                assert_eq!(result.dark, 16);
                assert_eq!(result.outcome, Outcome::Win(Player::Dark));
            }
            GameStatus::InProgress => panic!("Game should be finished"),
        }
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut game = GameState::default();

        assert!(matches!(game.undo(), Err(GameError::NoHistoryToUndo)));
        assert_eq!(game.board, Board::default());
        assert_eq!(game.current_player, Player::Dark);
    }

    #[test]
    fn test_undo_restores_previous_board() {
        let mut game = GameState::default();
        game.play_move(pos(3, 2)).unwrap();
        let after_first = game.board.clone();
        game.play_move(pos(2, 2)).unwrap();

        let undone = game.undo().unwrap();
        assert_eq!(undone.player, Player::Light);
        assert_eq!(undone.position, pos(2, 2));
        assert_eq!(game.board, after_first);
        assert_eq!(game.current_player, Player::Light);
        assert_eq!(game.get_move_count(), 1);

        game.undo().unwrap();
        assert_eq!(game.board, Board::default());
        assert_eq!(game.current_player, Player::Dark);
        assert_eq!(game.get_move_count(), 0);
    }

    #[test]
    fn test_game_state_serialization() {
        let mut game = GameState::default();
        game.play_move(pos(3, 2)).unwrap();

        let json = serde_json::to_string(&game).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.id, game.id);
        assert_eq!(restored.board, game.board);
        assert_eq!(restored.history(), game.history());
    }
}
