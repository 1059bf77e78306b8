//! 実行オプション
//!
//! コマンドライン引数と環境変数 `CHEXT_LOG` からログ設定を組み立てる

use crate::error::ConfigError;
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

/// ログレベルを指定する環境変数
pub const LOG_ENV: &str = "CHEXT_LOG";

/// 既定の標準エラー出力ログレベル
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

pub const USAGE: &str = "Usage: chext [--verbose | --quiet] [--debug-log [PATH]]";

/// 起動時に実行する処理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    #[default]
    Run,
    Help,
    Version,
}

/// 実行オプション
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    pub command: Command,
    /// 標準エラー出力のログレベル（未指定時は `DEFAULT_LOG_LEVEL`）
    pub log_level: Option<LevelFilter>,
    /// JSON Lines 形式のデバッグログ出力先
    pub debug_log_path: Option<PathBuf>,
}

impl RunOptions {
    /// 引数（プログラム名を除く）と環境変数から構築
    pub fn from_env_and_args(args: &[String]) -> Result<Self, ConfigError> {
        let env_level = std::env::var(LOG_ENV).ok();
        let base = Self::from_env_value(env_level.as_deref())?;
        let overrides = Self::parse_args(args)?;
        Ok(base.merged_with(&overrides))
    }

    /// 環境変数の値からオプションを作成
    pub fn from_env_value(value: Option<&str>) -> Result<Self, ConfigError> {
        let log_level = match value.map(str::trim) {
            Some(level) if !level.is_empty() => Some(parse_level(level)?),
            _ => None,
        };
        Ok(Self {
            log_level,
            ..Self::default()
        })
    }

    /// コマンドライン引数を解析
    pub fn parse_args(args: &[String]) -> Result<Self, ConfigError> {
        let mut options = Self::default();

        let mut iter = args.iter().peekable();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-v" | "--verbose" => options.log_level = Some(LevelFilter::Debug),
                "-q" | "--quiet" => options.log_level = Some(LevelFilter::Error),
                "-h" | "--help" => options.command = Command::Help,
                "-V" | "--version" => options.command = Command::Version,
                "--debug-log" => {
                    let path = iter
                        .peek()
                        .filter(|next| !next.starts_with('-'))
                        .map(|next| PathBuf::from(next.as_str()));
                    if path.is_some() {
                        iter.next();
                    }
                    options.debug_log_path =
                        Some(path.unwrap_or_else(default_log_path));
                }
                other => {
                    return Err(ConfigError::UnknownFlag {
                        flag: other.to_string(),
                    })
                }
            }
        }

        Ok(options)
    }

    /// `overrides` で指定された項目を優先して合成
    pub fn merged_with(&self, overrides: &RunOptions) -> RunOptions {
        RunOptions {
            command: if overrides.command != Command::Run {
                overrides.command
            } else {
                self.command
            },
            log_level: overrides.log_level.or(self.log_level),
            debug_log_path: overrides
                .debug_log_path
                .clone()
                .or_else(|| self.debug_log_path.clone()),
        }
    }

    pub fn resolved_log_level(&self) -> LevelFilter {
        self.log_level.unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

fn parse_level(value: &str) -> Result<LevelFilter, ConfigError> {
    LevelFilter::from_str(value).map_err(|_| ConfigError::InvalidLogLevel {
        value: value.to_string(),
    })
}

/// 既定のデバッグログ出力先（`~/.chext-log/debug.log`）
fn default_log_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".chext-log").join("debug.log"))
        .unwrap_or_else(|| PathBuf::from("debug.log"))
}
