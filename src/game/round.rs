//! 1局の進行を管理するモジュール
//! 手番解決、着手ソースへの問い合わせ、検証、適用、取り消しを1ステップずつ行う。

use tracing::{info, warn};

use super::rules::{GameResult, ReversiRules};
use super::state::GameState;
use super::types::{MoveRecord, Player, Position};
use crate::config::SystemLimits;
use crate::error::{GameError, Result};
use crate::player::{MoveSource, PlayerAction};

/// 1ステップの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// 着手が適用された
    Moved {
        player: Player,
        position: Position,
        flipped: Vec<Position>,
    },
    /// 着手が不正で、同じプレイヤーに再度問い合わせる
    Rejected { player: Player, reason: String },
    /// 直前の1手が取り消された
    Undone(MoveRecord),
    /// 履歴がないため取り消しは行われなかった
    UndoIgnored,
    /// ゲーム終了
    Finished(GameResult),
}

/// 黒と白の着手ソースを束ねて1局を進行させる構造体
pub struct Round {
    state: GameState,
    dark: Box<dyn MoveSource>,
    light: Box<dyn MoveSource>,
    limits: SystemLimits,
    rejections: usize,
}

impl Round {
    pub fn new(
        state: GameState,
        dark: Box<dyn MoveSource>,
        light: Box<dyn MoveSource>,
        limits: SystemLimits,
    ) -> Self {
        info!(
            game_id = %state.id,
            size = state.board_size(),
            dark = dark.name(),
            light = light.name(),
            "round started"
        );

        Self {
            state,
            dark,
            light,
            limits,
            rejections: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// 1ステップ進める
    /// 終局していればFinishedを返し、そうでなければ手番プレイヤーに1回だけ問い合わせる
    pub fn step(&mut self) -> Result<TurnOutcome> {
        if self.state.is_finished() {
            let result = self.state.score();
            info!(
                game_id = %self.state.id,
                dark = result.dark,
                light = result.light,
                outcome = ?result.outcome,
                "round finished"
            );
            return Ok(TurnOutcome::Finished(result));
        }

        let player = self.state.active_player().ok_or(GameError::GameFinished)?;
        let source = match player {
            Player::Dark => &mut self.dark,
            Player::Light => &mut self.light,
        };

        let action = match source.choose_move(player, &self.state.board) {
            Ok(action) => action,
            Err(GameError::MalformedInput { input }) => {
                warn!(?player, %input, "failed to parse move input");
                return self.reject(player, format!("Failed to parse input '{}'", input));
            }
            Err(e) => return Err(e),
        };

        match action {
            PlayerAction::Undo => match self.state.undo() {
                Ok(record) => {
                    self.rejections = 0;
                    Ok(TurnOutcome::Undone(record))
                }
                Err(GameError::NoHistoryToUndo) => {
                    self.count_rejection(player)?;
                    Ok(TurnOutcome::UndoIgnored)
                }
                Err(e) => Err(e),
            },
            PlayerAction::Place(position) => {
                if !ReversiRules::is_valid_move(&self.state.board, position, player) {
                    warn!(?player, row = position.row, col = position.col, "invalid move");
                    return self.reject(
                        player,
                        format!("Position ({}, {}) is not a valid move", position.row, position.col),
                    );
                }

                let flipped = self.state.play_move(position)?;
                self.rejections = 0;
                Ok(TurnOutcome::Moved {
                    player,
                    position,
                    flipped,
                })
            }
        }
    }

    /// 終局までステップを繰り返し、対局結果を返す
    pub fn play(&mut self) -> Result<GameResult> {
        loop {
            if let TurnOutcome::Finished(result) = self.step()? {
                return Ok(result);
            }
        }
    }

    fn reject(&mut self, player: Player, reason: String) -> Result<TurnOutcome> {
        self.count_rejection(player)?;
        Ok(TurnOutcome::Rejected { player, reason })
    }

    /// 状態を変えなかった応答を数え、上限に達したらTooManyRejectionsを返す
    fn count_rejection(&mut self, player: Player) -> Result<()> {
        self.rejections += 1;
        if self.rejections >= self.limits.max_consecutive_rejections {
            return Err(GameError::TooManyRejections {
                player,
                attempts: self.rejections,
            });
        }
        Ok(())
    }
}
