//! ログ出力の初期化モジュール
//! RUST_LOGが設定されていればそれを優先し、なければ設定ファイルのレベルを使う。

use tracing_subscriber::EnvFilter;

/// tracingのサブスクライバを標準エラー出力に設定する
/// 既に初期化済みの場合は何もしない
pub fn init(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
