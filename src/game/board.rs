//! オセロの盤面状態を管理するモジュール
//! N×Nグリッドの石の配置を保持し、参照・更新・集計のみを提供する。

use super::types::{Cell, Position};
use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};

/// 標準の盤面サイズ
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// N×Nの盤面を表現する構造体
/// 各マスのCell状態を行優先で保持する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// 新しい盤面を作成する
    /// 中央の4マスに初期配置を設定する
    pub fn new(size: usize) -> Result<Self> {
        let mut board = Self::filled(size, Cell::Empty)?;
        board.place_center();
        Ok(board)
    }

    fn place_center(&mut self) {
        let half = (self.size / 2) as isize;
        self.set_cell(Position::new(half - 1, half - 1), Cell::Light);
        self.set_cell(Position::new(half - 1, half), Cell::Dark);
        self.set_cell(Position::new(half, half - 1), Cell::Dark);
        self.set_cell(Position::new(half, half), Cell::Light);
    }

    /// 全マスを同じ状態で埋めた盤面を作成する
    pub fn filled(size: usize, cell: Cell) -> Result<Self> {
        if size < 4 || size % 2 != 0 {
            return Err(GameError::InvalidBoardSize { size });
        }

        let len = size
            .checked_mul(size)
            .ok_or(GameError::InvalidBoardSize { size })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| GameError::InvalidBoardSize { size })?;
        cells.resize(len, cell);

        Ok(Board { size, cells })
    }

    /// 一辺のマス数
    pub fn size(&self) -> usize {
        self.size
    }

    /// 座標が盤面内にあるかチェックする
    pub fn contains(&self, position: Position) -> bool {
        let size = self.size as isize;
        position.row >= 0 && position.row < size && position.col >= 0 && position.col < size
    }

    fn index(&self, position: Position) -> Option<usize> {
        if self.contains(position) {
            Some(position.row as usize * self.size + position.col as usize)
        } else {
            None
        }
    }

    /// 指定した位置のセル状態を取得する
    /// 範囲外の場合はNoneを返す
    pub fn get_cell(&self, position: Position) -> Option<Cell> {
        self.index(position).map(|i| self.cells[i])
    }

    /// 指定した位置にセル状態を設定する
    /// 範囲外の場合はfalseを返す
    pub fn set_cell(&mut self, position: Position, cell: Cell) -> bool {
        match self.index(position) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// 指定した位置が空かチェックする
    pub fn is_empty(&self, position: Position) -> bool {
        matches!(self.get_cell(position), Some(Cell::Empty))
    }

    /// 空マスが1つも残っていないかチェックする
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// 盤面上の黒石と白石の数を数える
    /// 戻り値: (黒石数, 白石数)
    pub fn count_pieces(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(dark, light), cell| match cell {
            Cell::Dark => (dark + 1, light),
            Cell::Light => (dark, light + 1),
            Cell::Empty => (dark, light),
        })
    }

    /// 盤面上の全座標を行優先で列挙する
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size as isize;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// 各行のセルを上から順に返す
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size)
    }
}

impl Default for Board {
    fn default() -> Self {
        let mut board = Board {
            size: DEFAULT_BOARD_SIZE,
            cells: vec![Cell::Empty; DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE],
        };
        board.place_center();
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: isize, col: isize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_board_new_initial_state() {
        let board = Board::new(8).unwrap();

        assert_eq!(board.get_cell(pos(3, 3)), Some(Cell::Light));
        assert_eq!(board.get_cell(pos(3, 4)), Some(Cell::Dark));
        assert_eq!(board.get_cell(pos(4, 3)), Some(Cell::Dark));
        assert_eq!(board.get_cell(pos(4, 4)), Some(Cell::Light));

        let occupied = board.positions().filter(|&p| !board.is_empty(p)).count();
        assert_eq!(occupied, 4);
    }

    #[test]
    fn test_board_new_other_sizes() {
        let board = Board::new(6).unwrap();
        assert_eq!(board.get_cell(pos(2, 3)), Some(Cell::Dark));
        assert_eq!(board.get_cell(pos(3, 2)), Some(Cell::Dark));
        assert_eq!(board.get_cell(pos(2, 2)), Some(Cell::Light));
        assert_eq!(board.get_cell(pos(3, 3)), Some(Cell::Light));
    }

    #[test]
    fn test_board_rejects_bad_sizes() {
        assert!(matches!(Board::new(7), Err(GameError::InvalidBoardSize { size: 7 })));
        assert!(matches!(Board::new(2), Err(GameError::InvalidBoardSize { size: 2 })));
        assert!(matches!(Board::new(0), Err(GameError::InvalidBoardSize { size: 0 })));
    }

    #[test]
    fn test_board_rejects_overflowing_size() {
        let size = usize::MAX - 1;
        assert!(matches!(
            Board::filled(size, Cell::Empty),
            Err(GameError::InvalidBoardSize { size: s }) if s == size
        ));
        assert!(matches!(Board::new(size), Err(GameError::InvalidBoardSize { .. })));
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(Board::default(), Board::new(DEFAULT_BOARD_SIZE).unwrap());
    }

    #[test]
    fn test_board_get_cell_invalid_position() {
        let board = Board::new(8).unwrap();
        assert_eq!(board.get_cell(pos(8, 0)), None);
        assert_eq!(board.get_cell(pos(0, 8)), None);
        assert_eq!(board.get_cell(pos(-1, 0)), None);
    }

    #[test]
    fn test_board_set_cell() {
        let mut board = Board::new(8).unwrap();

        assert!(board.set_cell(pos(0, 0), Cell::Dark));
        assert_eq!(board.get_cell(pos(0, 0)), Some(Cell::Dark));
        assert!(!board.set_cell(pos(0, -1), Cell::Dark));
    }

    #[test]
    fn test_board_is_full() {
        let mut board = Board::filled(8, Cell::Dark).unwrap();
        assert!(board.is_full());

        board.set_cell(pos(7, 7), Cell::Empty);
        assert!(!board.is_full());
        assert!(!Board::new(8).unwrap().is_full());
    }

    #[test]
    fn test_board_count_pieces() {
        let mut board = Board::new(8).unwrap();
        assert_eq!(board.count_pieces(), (2, 2));

        board.set_cell(pos(0, 0), Cell::Dark);
        assert_eq!(board.count_pieces(), (3, 2));
    }

    #[test]
    fn test_rows_shape() {
        let board = Board::new(6).unwrap();
        let rows: Vec<&[Cell]> = board.rows().collect();
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|row| row.len() == 6));
    }
}
