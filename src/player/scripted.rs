//! あらかじめ決めた行動を順に返すプレイヤー
//! テストや棋譜の再現に使用する。

use std::collections::VecDeque;

use super::{MoveSource, PlayerAction};
use crate::error::{PlayerError, Result};
use crate::game::{Board, Player, Position};

/// 台本どおりに行動する着手ソース
/// 台本が尽きた場合はInputClosedを返す
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    actions: VecDeque<PlayerAction>,
}

impl ScriptedPlayer {
    pub fn new(actions: impl IntoIterator<Item = PlayerAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    /// 座標の並びから台本を作成する
    pub fn from_positions(positions: impl IntoIterator<Item = Position>) -> Self {
        Self::new(positions.into_iter().map(PlayerAction::Place))
    }

    /// 未消化の行動数
    pub fn remaining(&self) -> usize {
        self.actions.len()
    }
}

impl MoveSource for ScriptedPlayer {
    fn choose_move(&mut self, _player: Player, _board: &Board) -> Result<PlayerAction> {
        Ok(self.actions.pop_front().ok_or(PlayerError::InputClosed)?)
    }

    fn name(&self) -> &str {
        "ScriptedPlayer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;

    #[test]
    fn test_scripted_player_plays_in_order() {
        let board = Board::default();
        let mut player = ScriptedPlayer::new([
            PlayerAction::Place(Position::new(3, 2)),
            PlayerAction::Undo,
        ]);

        assert_eq!(
            player.choose_move(Player::Dark, &board).unwrap(),
            PlayerAction::Place(Position::new(3, 2))
        );
        assert_eq!(player.remaining(), 1);
        assert_eq!(player.choose_move(Player::Dark, &board).unwrap(), PlayerAction::Undo);

        assert!(matches!(
            player.choose_move(Player::Dark, &board),
            Err(GameError::Player { source: PlayerError::InputClosed })
        ));
    }
}
