//! コンソールから手を読み込む人間プレイヤー
//! 空白区切りのトークンを1つずつ読み、"u" は取り消し、それ以外は棋譜表記として解釈する。

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use tracing::debug;

use super::notation::parse_position;
use super::{MoveSource, PlayerAction};
use crate::error::{PlayerError, Result};
use crate::game::{Board, Player};
use crate::render::player_symbol;

/// 取り消しを表す入力
pub const UNDO_COMMAND: &str = "u";

/// 任意の入力ストリームから手を読む着手ソース
/// プロンプトは出力ストリームに書き出す
pub struct ConsolePlayer<R, W> {
    name: String,
    reader: R,
    writer: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub fn new(name: impl Into<String>, reader: R, writer: W) -> Self {
        Self {
            name: name.into(),
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    /// 次のトークンを返す
    /// 入力が尽きた場合はInputClosedを返す
    fn next_token(&mut self) -> std::result::Result<String, PlayerError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            // 不正なUTF-8は置換文字になり、棋譜として解釈できない入力として扱われる
            let mut buf = Vec::new();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                return Err(PlayerError::InputClosed);
            }
            let line = String::from_utf8_lossy(&buf);
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsolePlayer<R, W> {
    fn choose_move(&mut self, player: Player, _board: &Board) -> Result<PlayerAction> {
        if self.pending.is_empty() {
            write!(self.writer, "Player '{}' move: ", player_symbol(player)).map_err(PlayerError::from)?;
            self.writer.flush().map_err(PlayerError::from)?;
        }

        let token = self.next_token()?;
        debug!(player = %self.name, input = %token, "read console input");

        if token == UNDO_COMMAND {
            return Ok(PlayerAction::Undo);
        }

        parse_position(&token).map(PlayerAction::Place)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
