//! ランダムに手を選ぶAIプレイヤー
//! 合法手の中から一様に選択する。探索や評価は行わない。

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use super::{MoveSource, PlayerAction};
use crate::error::{PlayerError, Result};
use crate::game::{Board, Player, ReversiRules};

/// 合法手から一様ランダムに選ぶ着手ソース
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
    rng: SmallRng,
}

impl RandomPlayer {
    /// OSのエントロピーで初期化したRandomPlayerを作成する
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// シードを固定したRandomPlayerを作成する
    /// 同じシードと同じ盤面の並びなら同じ手を返す
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MoveSource for RandomPlayer {
    fn choose_move(&mut self, player: Player, board: &Board) -> Result<PlayerAction> {
        let valid_moves = ReversiRules::get_valid_moves(board, player);

        let position = valid_moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(PlayerError::NoValidMoves)?;

        debug!(ai = %self.name, ?player, row = position.row, col = position.col, "AI chose position");
        Ok(PlayerAction::Place(position))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
