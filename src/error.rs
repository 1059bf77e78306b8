//! エラーハンドリングシステム
//!
//! chext 全体で使用される統一されたエラー型とユーティリティを定義
//! 一括リネーム中のファイル単位の失敗は `RenameError` としてデータで返し、
//! 対話セッションを中断する失敗のみ `ChextError` として伝播する

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// アプリケーション全体のエラー型
#[derive(Error, Debug)]
pub enum ChextError {
    /// ファイル操作エラー
    #[error(transparent)]
    File(#[from] FileError),

    /// 拡張子エラー
    #[error(transparent)]
    Extension(#[from] ExtensionError),

    /// 設定エラー
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// パスエラー
    #[error("Path error: {0}")]
    Path(String),

    /// 入力エラー
    #[error("Input error: {0}")]
    Input(String),

    /// 標準入出力エラー
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// ファイル操作固有のエラー
#[derive(Error, Debug)]
pub enum FileError {
    #[error("Folder path '{path}' does not exist.")]
    NotFound { path: String },

    #[error("Path '{path}' is not a directory.")]
    NotADirectory { path: String },

    #[error("Error accessing folder path '{path}': {source}")]
    Access {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// 拡張子固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtensionError {
    #[error("Extension cannot be empty")]
    Empty,

    #[error("Invalid extension '{ext}': {reason}")]
    Invalid { ext: String, reason: String },
}

/// 設定固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown option: {flag}")]
    UnknownFlag { flag: String },

    #[error("Invalid log level: {value}")]
    InvalidLogLevel { value: String },
}

/// 一括リネームで発生するエラー
///
/// `Listing` は操作全体が失敗したことを示し、結果の唯一の要素になる。
/// `Rename` はファイル単位の失敗で、他のファイルの処理は継続される。
#[derive(Error, Debug)]
pub enum RenameError {
    #[error("Error reading directory {}: {source}", path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to rename {} to {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RenameError {
    /// 操作全体を中断させたエラーかどうか
    pub fn is_fatal(&self) -> bool {
        matches!(self, RenameError::Listing { .. })
    }

    /// 下位の I/O エラー種別
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            RenameError::Listing { source, .. } | RenameError::Rename { source, .. } => {
                source.kind()
            }
        }
    }
}

/// パニックハンドラの設定
pub fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s
        } else {
            "Unknown panic payload"
        };

        eprintln!("PANIC at {}: {}", location, message);
        std::process::exit(1);
    }));
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, ChextError>;
