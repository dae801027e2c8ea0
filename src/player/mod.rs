//! 着手ソースの抽象化モジュール
//! 人間入力、ランダムAI、テスト用の台本プレイヤーを統一したインターフェースで扱う。

pub mod notation;
pub mod random;
pub mod console;
pub mod scripted;

pub use notation::*;
pub use random::*;
pub use console::*;
pub use scripted::*;

use crate::error::Result;
use crate::game::{Board, Player, Position};

/// 着手ソースが返す行動
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// 指定マスに石を置く（合法性は呼び出し側で再検証される）
    Place(Position),
    /// 直前の1手を取り消す
    Undo,
}

/// 着手ソースの共通インターフェース
/// 黒と白にそれぞれ独立して割り当てられ、エンジンは実装の種類を知らない
pub trait MoveSource {
    /// 手番プレイヤーと盤面から次の行動を決める
    fn choose_move(&mut self, player: Player, board: &Board) -> Result<PlayerAction>;

    /// ログ表示用の名前を返す
    fn name(&self) -> &str;
}
