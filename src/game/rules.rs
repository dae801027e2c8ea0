//! オセロのルールとゲームロジック実装モジュール
//! 合法手の判定、石のフリップ処理、手番解決、ゲーム終了判定などを担当する。

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::board::Board;
use super::direction::{Direction, DIRECTIONS};
use super::types::{Player, Position};
use crate::error::{GameError, Result};

/// 対局結果の勝敗区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
}

/// 石数と勝敗をまとめた対局結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub dark: usize,
    pub light: usize,
    pub outcome: Outcome,
}

impl GameResult {
    /// 勝者を返す。引き分けの場合はNone
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Outcome::Win(player) => Some(player),
            Outcome::Draw => None,
        }
    }
}

/// オセロのルールを実装する構造体
/// スタティックメソッドのみを提供する
pub struct ReversiRules;

impl ReversiRules {
    /// 指定方向に挟む石（同色の石）を探す
    /// 隣のマスが相手の石で、相手の石の連続の直後に自分の石がある場合のみその位置を返す
    pub fn find_bracketing_piece(
        board: &Board,
        position: Position,
        player: Player,
        direction: Direction,
    ) -> Option<Position> {
        let opponent_cell = player.opposite().to_cell();
        let mut current = direction.step(position);

        // 最低1個は相手の石が必要
        if board.get_cell(current) != Some(opponent_cell) {
            return None;
        }

        while board.get_cell(current) == Some(opponent_cell) {
            current = direction.step(current);
        }

        // 盤外に出た場合や空マスで止まった場合は挟めない
        if board.get_cell(current) == Some(player.to_cell()) {
            Some(current)
        } else {
            None
        }
    }

    /// 指定した位置にプレイヤーが置けるかチェックする
    /// 盤内の空マスで、少なくとも1方向に挟む石がある必要がある
    pub fn is_valid_move(board: &Board, position: Position, player: Player) -> bool {
        if !board.is_empty(position) {
            return false;
        }

        DIRECTIONS
            .iter()
            .any(|&direction| Self::find_bracketing_piece(board, position, player, direction).is_some())
    }

    /// 指定した位置に石を置いた場合にフリップされる石の位置を返す
    pub fn get_flipped_positions(board: &Board, position: Position, player: Player) -> Vec<Position> {
        if !board.is_empty(position) {
            return Vec::new();
        }

        let mut flipped = Vec::new();
        for &direction in &DIRECTIONS {
            if let Some(bracket) = Self::find_bracketing_piece(board, position, player, direction) {
                let mut current = direction.step(position);
                while current != bracket {
                    flipped.push(current);
                    current = direction.step(current);
                }
            }
        }

        flipped
    }

    /// 指定したプレイヤーの合法手を全て取得する
    /// 盤面全体を行優先でスキャンする
    pub fn get_valid_moves(board: &Board, player: Player) -> Vec<Position> {
        board
            .positions()
            .filter(|&position| Self::is_valid_move(board, position, player))
            .collect()
    }

    /// 指定したプレイヤーに合法手があるかチェックする
    /// パス判定と終局判定に使用される
    pub fn has_valid_moves(board: &Board, player: Player) -> bool {
        board
            .positions()
            .any(|position| Self::is_valid_move(board, position, player))
    }

    /// 指定した位置に石を置き、挟んだ石を全てフリップする
    /// 戻り値はフリップされた石の位置リスト
    pub fn apply_move(board: &mut Board, position: Position, player: Player) -> Result<Vec<Position>> {
        if !board.contains(position) {
            return Err(GameError::OutOfBounds {
                row: position.row,
                col: position.col,
                size: board.size(),
            });
        }

        if !Self::is_valid_move(board, position, player) {
            return Err(GameError::InvalidMove {
                reason: format!(
                    "Position ({}, {}) is not a valid move for {:?}",
                    position.row, position.col, player
                ),
            });
        }

        let player_cell = player.to_cell();
        let mut flipped = Vec::new();

        // 方向ごとに独立して挟み判定とフリップを行う
        for &direction in &DIRECTIONS {
            let Some(bracket) = Self::find_bracketing_piece(board, position, player, direction) else {
                continue;
            };

            board.set_cell(position, player_cell);

            let mut current = direction.step(position);
            while current != bracket {
                board.set_cell(current, player_cell);
                flipped.push(current);
                current = direction.step(current);
            }
        }

        debug!(
            ?player,
            row = position.row,
            col = position.col,
            flipped = flipped.len(),
            "move applied"
        );

        Ok(flipped)
    }

    /// 手番の解決
    /// 名目上の手番プレイヤーに合法手がなければ相手に手番が移り、
    /// 双方に合法手がなければNoneを返す
    pub fn resolve_active_player(board: &Board, nominal: Player) -> Option<Player> {
        if Self::has_valid_moves(board, nominal) {
            Some(nominal)
        } else if Self::has_valid_moves(board, nominal.opposite()) {
            Some(nominal.opposite())
        } else {
            None
        }
    }

    /// ゲーム終了判定
    /// 盤面が埋まったか、両プレイヤーとも合法手がない場合に終了
    pub fn is_game_over(board: &Board) -> bool {
        if board.is_full() {
            return true;
        }

        !Self::has_valid_moves(board, Player::Dark) && !Self::has_valid_moves(board, Player::Light)
    }

    /// 最終スコアに基づいて勝者を決定する
    /// 同数の場合はNone（引き分け）を返す
    pub fn determine_winner(board: &Board) -> Option<Player> {
        Self::score(board).winner()
    }

    /// 石数を集計して対局結果を作成する
    pub fn score(board: &Board) -> GameResult {
        let (dark, light) = board.count_pieces();

        let outcome = if dark > light {
            Outcome::Win(Player::Dark)
        } else if light > dark {
            Outcome::Win(Player::Light)
        } else {
            Outcome::Draw
        };

        GameResult { dark, light, outcome }
    }
}
