pub mod call; // tool-call resolution and direct invocation
pub mod config;
pub mod dice;
pub mod names; // syllabic + legacy fantasy names
pub mod stat_block;
pub mod tools; // LLM-facing tool definitions

pub use config::Config;
pub use names::{ConfigurationError, NameGenerator, generate_fantasy_name};
pub use call::{ToolCallDecision, ToolRegistry, ToolResolution};

use color_eyre::Result;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// Ensure .env is loaded for tests before anything else runs in the test process.
#[cfg(test)]
#[ctor::ctor]
fn load_dotenv_for_tests() {
    let _ = dotenvy::dotenv();
}

/// ファイルへのみログを出す subscriber を初期化する（標準出力は CLI の出力に使う）。
/// 返り値の guard は drop するとログが失われるため、呼び出し側で保持すること。
pub fn init_tracing(log_dir: &Path) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(log_dir, "tabletop_tools.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // ファイルにANSIカラー不要
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;
    Ok(guard)
}
