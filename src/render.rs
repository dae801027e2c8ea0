//! 盤面と結果のテキスト表示モジュール
//! 黒は'X'、白は'O'、空マスは'-'で表現し、列は英字、行は1始まりの数字で表示する。

use crate::game::{Board, Cell, GameResult, Outcome, Player};
use crate::player::notation::{format_col, format_row};

/// プレイヤーの表示記号
pub fn player_symbol(player: Player) -> char {
    match player {
        Player::Dark => 'X',
        Player::Light => 'O',
    }
}

fn cell_symbol(cell: Cell) -> char {
    match cell.owner() {
        Some(player) => player_symbol(player),
        None => '-',
    }
}

/// 列見出し行。行番号の幅に合わせて字下げする
fn header(board: &Board, width: usize) -> String {
    let mut line = " ".repeat(width + 1);
    for col in 0..board.size() as isize {
        line.push_str(&format_col(col));
    }
    line
}

/// 盤面を表示用の文字列に変換する
/// 上下に列見出し、最後に石数のフッターを付ける
pub fn render_board(board: &Board) -> String {
    let mut result = String::new();
    let width = format_row(board.size() as isize - 1).len();
    let header = header(board, width);

    result.push_str(&header);
    result.push('\n');

    for (row_idx, row) in board.rows().enumerate() {
        result.push_str(&format!("{:<width$} ", format_row(row_idx as isize), width = width));
        result.extend(row.iter().map(|&cell| cell_symbol(cell)));
        result.push('\n');
    }

    let (dark, light) = board.count_pieces();
    result.push_str(&header);
    result.push_str("\n\n");
    result.push_str(&format!("Black: {} - White: {}\n", dark, light));

    result
}

/// 対局結果を表示用の文字列に変換する
pub fn render_result(result: &GameResult) -> String {
    match result.outcome {
        Outcome::Win(Player::Dark) => format!(
            "Player '{}' wins ( {} vs {})",
            player_symbol(Player::Dark),
            result.dark,
            result.light
        ),
        Outcome::Win(Player::Light) => format!(
            "Player '{}' wins ( {} vs {})",
            player_symbol(Player::Light),
            result.light,
            result.dark
        ),
        Outcome::Draw => format!("Game even ( {} vs {})", result.dark, result.light),
    }
}
