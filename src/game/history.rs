//! 着手履歴と再生（リプレイ）モジュール
//! 着手を記録順に保持し、初期配置からの再生で任意の手数の盤面を復元する。

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::board::Board;
use super::rules::ReversiRules;
use super::types::{MoveRecord, Player, Position};
use crate::error::{GameError, Result};

/// 着手履歴
/// 容量は盤面のマス数（N×N）で、末尾への追加と末尾の取り消しのみを許す
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
    capacity: usize,
}

impl MoveHistory {
    /// 指定した盤面サイズ用の空の履歴を作成する
    pub fn new(board_size: usize) -> Self {
        let capacity = board_size * board_size;
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// 着手を末尾に記録する
    /// 容量を超える場合はHistoryExhaustedを返す
    pub fn record(&mut self, player: Player, position: Position) -> Result<&MoveRecord> {
        if self.records.len() >= self.capacity {
            return Err(GameError::HistoryExhausted {
                capacity: self.capacity,
            });
        }

        self.records.push(MoveRecord::new(player, position));
        let index = self.records.len() - 1;
        Ok(&self.records[index])
    }

    /// 最新の着手を返す
    pub fn latest(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    /// 最新の着手を履歴から取り除いて返す
    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// 記録順に着手を列挙する
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> + '_ {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[MoveRecord] {
        &self.records
    }

    /// 先頭からcount手を初期配置の盤面に再生する
    /// countが記録数を超える場合は全記録を再生する
    pub fn replay(&self, board_size: usize, count: usize) -> Result<Board> {
        let mut board = Board::new(board_size)?;

        for (index, record) in self.records.iter().take(count).enumerate() {
            ReversiRules::apply_move(&mut board, record.position, record.player)?;
            debug!(index, player = ?record.player, "replayed move");
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    fn pos(row: isize, col: isize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_history_new() {
        let history = MoveHistory::new(8);

        assert!(history.is_empty());
        assert_eq!(history.capacity(), 64);
        assert!(history.latest().is_none());
    }

    #[test]
    fn test_record_appends_in_order() {
        let mut history = MoveHistory::new(8);

        history.record(Player::Dark, pos(3, 2)).unwrap();
        history.record(Player::Light, pos(2, 2)).unwrap();

        let players: Vec<Player> = history.iter().map(|r| r.player).collect();
        assert_eq!(players, vec![Player::Dark, Player::Light]);
        assert_eq!(history.latest().map(|r| r.position), Some(pos(2, 2)));
    }

    #[test]
    fn test_record_fails_when_full() {
        let mut history = MoveHistory::new(4);

        for i in 0..16 {
            history.record(Player::Dark, pos(i / 4, i % 4)).unwrap();
        }
        assert!(history.is_full());

        let result = history.record(Player::Light, pos(0, 0));
        assert!(matches!(result, Err(GameError::HistoryExhausted { capacity: 16 })));
        assert_eq!(history.len(), 16);
    }

    #[test]
    fn test_pop_removes_tail_only() {
        let mut history = MoveHistory::new(8);
        history.record(Player::Dark, pos(3, 2)).unwrap();
        history.record(Player::Light, pos(2, 2)).unwrap();

        let popped = history.pop().unwrap();
        assert_eq!(popped.position, pos(2, 2));
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().map(|r| r.position), Some(pos(3, 2)));
    }

    #[test]
    fn test_replay_prefix() {
        let mut history = MoveHistory::new(8);
        history.record(Player::Dark, pos(3, 2)).unwrap();
        history.record(Player::Light, pos(2, 2)).unwrap();

        assert_eq!(history.replay(8, 0).unwrap(), Board::new(8).unwrap());

        let after_first = history.replay(8, 1).unwrap();
        assert_eq!(after_first.get_cell(pos(3, 2)), Some(Cell::Dark));
        assert_eq!(after_first.get_cell(pos(3, 3)), Some(Cell::Dark));
        assert_eq!(after_first.get_cell(pos(2, 2)), Some(Cell::Empty));

        let after_both = history.replay(8, 10).unwrap();
        assert_eq!(after_both.get_cell(pos(2, 2)), Some(Cell::Light));
        assert_eq!(after_both.get_cell(pos(3, 3)), Some(Cell::Light));
    }

    #[test]
    fn test_replay_rejects_corrupt_log() {
        let mut history = MoveHistory::new(8);
        history.record(Player::Dark, pos(0, 0)).unwrap();

        assert!(matches!(history.replay(8, 1), Err(GameError::InvalidMove { .. })));
    }
}
