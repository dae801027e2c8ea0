//! アプリケーション設定管理モジュール
//! 盤面サイズ、プレイヤー構成、制限値、ログレベルを
//! 設定ファイルと環境変数から読み込んで管理する。

use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path, str::FromStr};

use crate::game::DEFAULT_BOARD_SIZE;
use crate::player::notation::MAX_NOTATION_SIZE;

/// 着手ソースの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    /// コンソール入力の人間プレイヤー
    Human,
    /// 合法手からランダムに選ぶAI
    Random,
}

impl FromStr for PlayerKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "random" | "ai" => Ok(PlayerKind::Random),
            _ => Err(()),
        }
    }
}

/// システムの制限値を定義する構造体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemLimits {
    /// 同じプレイヤーの不正な着手を連続で受け付ける上限
    pub max_consecutive_rejections: usize,
}

impl Default for SystemLimits {
    fn default() -> Self {
        Self {
            max_consecutive_rejections: 64,
        }
    }
}

/// 対局の設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub board_size: usize,
    pub dark: PlayerKind,
    pub light: PlayerKind,
    /// ランダムAIのシード。Noneの場合は毎回異なる対局になる
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            dark: PlayerKind::Human,
            light: PlayerKind::Human,
            seed: None,
        }
    }
}

/// ログ出力の設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// RUST_LOGが未設定の場合に使うフィルタ
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// アプリケーションの全設定を統合するメイン設定構造体
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub limits: SystemLimits,
    pub logging: LoggingConfig,
}

/// 設定関連のエラーを表すenum
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("設定ファイル読み込みエラー: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("設定ファイル解析エラー: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("環境変数エラー: {name} = {value}")]
    EnvVarError { name: String, value: String },

    #[error("設定値が無効です: {field} = {value}")]
    InvalidValue { field: String, value: String },
}

/// 設定ファイルの探索順
const CONFIG_PATHS: [&str; 2] = ["othello.json", "config/othello.json"];

fn parse_env<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::EnvVarError {
                name: name.to_string(),
                value,
            }),
        Err(_) => Ok(None),
    }
}

impl Config {
    /// 指定したファイルパスから設定を読み込む
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 環境変数で設定を上書きする
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Some(size) = parse_env("OTHELLO_BOARD_SIZE")? {
            self.game.board_size = size;
        }

        if let Some(kind) = parse_env("OTHELLO_DARK_PLAYER")? {
            self.game.dark = kind;
        }

        if let Some(kind) = parse_env("OTHELLO_LIGHT_PLAYER")? {
            self.game.light = kind;
        }

        if let Some(seed) = parse_env("OTHELLO_SEED")? {
            self.game.seed = Some(seed);
        }

        if let Some(max) = parse_env("OTHELLO_MAX_REJECTIONS")? {
            self.limits.max_consecutive_rejections = max;
        }

        if let Ok(level) = env::var("OTHELLO_LOG_LEVEL") {
            self.logging.level = level;
        }

        Ok(())
    }

    /// 環境変数から設定を読み込む
    /// デフォルト値をベースに環境変数で上書きする
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env()?;
        Ok(config)
    }

    /// 設定ファイルと環境変数を結合して設定を読み込む
    /// 設定ファイルがなくてもデフォルト値で動作する
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = CONFIG_PATHS
            .iter()
            .find_map(|path| Self::from_file(path).ok())
            .unwrap_or_default();

        config.apply_env()?;
        Ok(config)
    }

    /// 現在の設定を指定したファイルに保存する
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 設定値の妥当性をチェックする
    /// 不正な値がある場合はConfigErrorを返す
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.game.board_size;
        if size < 4 || size % 2 != 0 || size > MAX_NOTATION_SIZE {
            return Err(ConfigError::InvalidValue {
                field: "game.board_size".to_string(),
                value: size.to_string(),
            });
        }

        if self.limits.max_consecutive_rejections == 0 {
            return Err(ConfigError::InvalidValue {
                field: "limits.max_consecutive_rejections".to_string(),
                value: "0".to_string(),
            });
        }

        Ok(())
    }
}
