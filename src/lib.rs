//! chext - ディレクトリ内のファイル拡張子を一括変更する
//!
//! モジュール構成

// コアモジュール
pub mod error;
pub mod logging;
pub mod config;

// ファイル操作
pub mod file;

// 対話層
pub mod prompt;
pub mod app;

// 公開API
pub use app::{App, Outcome};
pub use config::RunOptions;
pub use error::{ChextError, RenameError, Result};
pub use file::{change_extensions, rename_in_dir, Extension, RenameReport};
