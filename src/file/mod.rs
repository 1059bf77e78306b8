//! ファイル操作モジュール
//!
//! - 対象はディレクトリ直下のみ（再帰なし）
//! - 拡張子は大文字小文字を区別する末尾一致
//! - 一覧順に処理し、並べ替えは行わない
//! - 既存の同名ファイルとの競合解決は行わない（リネームの失敗として報告）

pub mod extension;
pub mod path;
pub mod rename;

pub use extension::Extension;
pub use path::{expand_path, resolve_directory, validate_directory};
pub use rename::{
    change_extensions, rename_in_dir, rename_in_dir_with, DirectoryEntry, FileSystem,
    RenameReport, StdFileSystem,
};
