//! 棋譜表記の変換モジュール
//! 行は1始まりの数字、列は'a'始まりの英字で表す（例: "4c" は (3, 2)）。

use crate::error::{GameError, Result};
use crate::game::Position;

/// 表記できる最大の盤面サイズ（列記号がa-zに収まる範囲）
pub const MAX_NOTATION_SIZE: usize = 26;

/// 列番号を列記号に変換する
pub fn format_col(col: isize) -> String {
    match u8::try_from(col) {
        Ok(c) if (c as usize) < MAX_NOTATION_SIZE => ((b'a' + c) as char).to_string(),
        _ => format!("[{}]", col),
    }
}

/// 行番号を1始まりの表記に変換する
pub fn format_row(row: isize) -> String {
    (row + 1).to_string()
}

/// 座標を "4c" 形式の表記に変換する
pub fn format_position(position: Position) -> String {
    format!("{}{}", format_row(position.row), format_col(position.col))
}

/// "4c" 形式の表記を座標に変換する
/// 数字の後に英字1文字が続かない入力はMalformedInputを返す
/// 盤面の範囲チェックは行わない
pub fn parse_position(input: &str) -> Result<Position> {
    let malformed = || GameError::MalformedInput {
        input: input.to_string(),
    };

    let trimmed = input.trim();
    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(malformed)?;
    let (digits, rest) = trimmed.split_at(split);

    let row: isize = digits.parse().map_err(|_| malformed())?;

    let mut letters = rest.chars();
    let col = match (letters.next(), letters.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => (c.to_ascii_lowercase() as u8 - b'a') as isize,
        _ => return Err(malformed()),
    };

    Ok(Position::new(row - 1, col))
}
