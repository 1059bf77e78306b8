//! ロギングシステム
//!
//! `log` ファサードの出力先。標準エラー出力へのテキスト出力と、
//! 任意で JSON Lines 形式のファイル出力を行う。

use crate::config::RunOptions;
use crate::error::Result;
use log::{LevelFilter, Log, Metadata, Record};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// ファイルへ書き出すログ1件
#[derive(Debug, Serialize)]
struct LogLine<'a> {
    tag: &'a str,
    ts: u128,
    level: &'a str,
    target: &'a str,
    message: String,
}

/// ロガー
#[derive(Debug, Clone)]
pub struct Logger {
    level: LevelFilter,
    output_stderr: bool,
    output_file: Option<PathBuf>,
}

impl Logger {
    /// デフォルト構築
    pub fn new(level: LevelFilter) -> Self {
        Self {
            level,
            output_stderr: true,
            output_file: None,
        }
    }

    /// 実行オプションから構築
    pub fn from_options(options: &RunOptions) -> Self {
        let logger = Self::new(options.resolved_log_level());
        match &options.debug_log_path {
            Some(path) => logger.with_file_output(path),
            None => logger,
        }
    }

    /// ファイル出力を設定
    pub fn with_file_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// 標準エラー出力を無効化（テスト向け）
    #[cfg(test)]
    pub fn without_stderr(mut self) -> Self {
        self.output_stderr = false;
        self
    }

    /// ファイル出力時は全レベルを記録するため、実効レベルは最も詳細な方になる
    fn max_level(&self) -> LevelFilter {
        if self.output_file.is_some() {
            LevelFilter::Trace
        } else {
            self.level
        }
    }

    /// グローバルロガーとして登録
    ///
    /// 既に登録済みの場合は何もしない。
    pub fn install(self) -> Result<()> {
        if let Some(path) = &self.output_file {
            ensure_parent_dir(path)?;
        }

        let max_level = self.max_level();
        if log::set_boxed_logger(Box::new(self)).is_ok() {
            log::set_max_level(max_level);
        }
        Ok(())
    }

    fn format_line(&self, record: &Record) -> String {
        format!("{}: {}", record.level(), record.args())
    }

    fn json_line(&self, record: &Record) -> serde_json::Result<String> {
        let level = record.level().as_str();
        serde_json::to_string(&LogLine {
            tag: "chext",
            ts: timestamp_ms(),
            level,
            target: record.target(),
            message: record.args().to_string(),
        })
    }

    fn write_file(&self, path: &Path, line: &str) {
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
            let _ = writeln!(file, "{}", line);
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level()
    }

    fn log(&self, record: &Record) {
        if self.output_stderr && record.level() <= self.level {
            eprintln!("{}", self.format_line(record));
        }

        if let Some(path) = &self.output_file {
            if let Ok(line) = self.json_line(record) {
                self.write_file(path, &line);
            }
        }
    }

    fn flush(&self) {}
}

/// ヘルパー：親ディレクトリを作成
fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn timestamp_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|dur| dur.as_millis())
        .unwrap_or_default()
}
