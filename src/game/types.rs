//! ゲームの基本型定義モジュール
//! オセロで使用される石の状態、プレイヤー、座標、着手記録を定義する。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 盤面の各マスの状態を表現するenum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Dark,
    Light,
}

/// ゲームのプレイヤーを表すenum
/// 先手は黒（Dark）、後手は白（Light）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Dark,
    Light,
}

impl Player {
    /// 相手プレイヤーを返す
    pub fn opposite(self) -> Player {
        match self {
            Player::Dark => Player::Light,
            Player::Light => Player::Dark,
        }
    }

    /// プレイヤーを対応するセル状態に変換する
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Dark => Cell::Dark,
            Player::Light => Cell::Light,
        }
    }
}

impl Cell {
    /// セルの持ち主を返す。空マスはNone
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Dark => Some(Player::Dark),
            Cell::Light => Some(Player::Light),
        }
    }
}

/// 盤面上の座標を表す構造体
/// 範囲チェックは盤面サイズを知る`Board`が行うため、負の値や範囲外の値も保持できる
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: isize,
    pub col: isize,
}

impl Position {
    pub fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }
}

/// 履歴に記録される1手
/// 置いたマスと置いたプレイヤーのみを保持し、盤面は再生で復元する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: Player,
    pub position: Position,
    pub timestamp: DateTime<Utc>,
}

impl MoveRecord {
    /// 新しい着手記録を作成する
    /// タイムスタンプは現在時刻で自動設定される
    pub fn new(player: Player, position: Position) -> Self {
        Self {
            player,
            position,
            timestamp: Utc::now(),
        }
    }
}
