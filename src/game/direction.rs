//! 8方向の移動ベクトル定義モジュール
//! 挟み判定と石の反転はすべてこの定数列に沿って走査する。

use super::types::Position;

/// 盤面上の1方向を表す移動ベクトル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dr: isize,
    pub dc: isize,
}

impl Direction {
    const fn new(dr: isize, dc: isize) -> Self {
        Self { dr, dc }
    }

    /// 指定位置からこの方向へ1マス進んだ位置を返す
    /// 盤面の端での折り返しはなく、範囲チェックは呼び出し側で行う
    pub fn step(self, position: Position) -> Position {
        Position::new(position.row + self.dr, position.col + self.dc)
    }
}

/// 上下左右および斜めの8方向
pub const DIRECTIONS: [Direction; 8] = [
    Direction::new(0, 1),   // 右
    Direction::new(1, 1),   // 右下
    Direction::new(1, 0),   // 下
    Direction::new(1, -1),  // 左下
    Direction::new(0, -1),  // 左
    Direction::new(-1, -1), // 左上
    Direction::new(-1, 0),  // 上
    Direction::new(-1, 1),  // 右上
];
