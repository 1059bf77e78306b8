//! パス処理ユーティリティ
//!
//! 対話入力されたフォルダパスの展開と検証

use crate::error::{ChextError, FileError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// パス展開（`~` → ホームディレクトリ、`$VAR` / `${VAR}` → 環境変数の値）
///
/// 未定義の変数を含む場合は `$` を通常の文字として扱い、`~` のみ展開する。
pub fn expand_path(input: &str) -> Result<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ChextError::Path("folder path cannot be empty".to_string()));
    }

    match shellexpand::full(trimmed) {
        Ok(expanded) => Ok(PathBuf::from(expanded.as_ref())),
        Err(e) => {
            log::debug!("keeping '{}' literally: {}", trimmed, e);
            Ok(PathBuf::from(shellexpand::tilde(trimmed).as_ref()))
        }
    }
}

/// パスが存在するディレクトリであることを確認
pub fn validate_directory<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(FileError::NotFound { path: display }.into());
        }
        Err(e) => {
            return Err(FileError::Access {
                path: display,
                source: e,
            }
            .into());
        }
    };

    if !metadata.is_dir() {
        return Err(FileError::NotADirectory { path: display }.into());
    }

    Ok(())
}

/// 入力を展開して検証済みのディレクトリパスを返す
pub fn resolve_directory(input: &str) -> Result<PathBuf> {
    let path = expand_path(input)?;
    validate_directory(&path)?;
    Ok(path)
}
