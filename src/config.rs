//! アプリケーション設定

use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use std::path::PathBuf;

use crate::names::NameGenerator;
use crate::names::tables::{DEFAULT_MAX_SYLLABLES, DEFAULT_MIN_SYLLABLES};
use crate::stat_block::FillOptions;

pub const ENV_MIN_SYLLABLES: &str = "TABLETOP_MIN_SYLLABLES";
pub const ENV_MAX_SYLLABLES: &str = "TABLETOP_MAX_SYLLABLES";
pub const ENV_SHOW_SOURCE: &str = "TABLETOP_SHOW_SOURCE";
pub const ENV_LOG_DIR: &str = "TABLETOP_LOG_DIR";

/// アプリケーション設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 名前の最小音節数
    pub min_syllables: usize,
    /// 名前の最大音節数
    pub max_syllables: usize,
    /// ステータスブロックの各値に出所 (入力/生成) を付けるか
    pub show_source: bool,
    /// ログ出力先ディレクトリ
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_syllables: DEFAULT_MIN_SYLLABLES,
            max_syllables: DEFAULT_MAX_SYLLABLES,
            show_source: true,
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既定値に環境変数を上書きする。`.env` は呼び出し側で先に読み込んでおくこと。
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意のキー参照関数から設定を組み立てる（テスト用に環境変数を介さず渡せる）
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(v) = lookup(ENV_MIN_SYLLABLES) {
            cfg.min_syllables = parse_usize(ENV_MIN_SYLLABLES, &v)?;
        }
        if let Some(v) = lookup(ENV_MAX_SYLLABLES) {
            cfg.max_syllables = parse_usize(ENV_MAX_SYLLABLES, &v)?;
        }
        if let Some(v) = lookup(ENV_SHOW_SOURCE) {
            cfg.show_source = parse_bool(ENV_SHOW_SOURCE, &v)?;
        }
        if let Some(v) = lookup(ENV_LOG_DIR).filter(|v| !v.trim().is_empty()) {
            cfg.log_dir = PathBuf::from(v.trim());
        }
        Ok(cfg)
    }

    /// 設定の音節数範囲で名前生成器を作る。範囲が不正なら起動時にエラーにする。
    pub fn name_generator(&self) -> Result<NameGenerator> {
        NameGenerator::with_syllable_range(self.min_syllables, self.max_syllables)
            .wrap_err("invalid name generator configuration")
    }

    pub fn fill_options(&self) -> FillOptions {
        FillOptions { show_source: self.show_source }
    }
}

fn parse_usize(key: &str, raw: &str) -> Result<usize> {
    raw.trim()
        .parse()
        .wrap_err_with(|| format!("{key} must be a non-negative integer (got '{raw}')"))
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(eyre!("{key} must be a boolean (got '{raw}')")),
    }
}
