//! 拡張子の正規化
//!
//! 入力された拡張子を先頭に区切り文字 `.` がちょうど一つ付いた形に揃える

use crate::error::ExtensionError;
use std::ffi::{OsStr, OsString};
use std::fmt;

/// 拡張子の区切り文字
pub const SEPARATOR: char = '.';

/// 正規化済みの拡張子（例: `.txt`）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Extension(String);

impl Extension {
    /// 文字列から拡張子を生成
    ///
    /// `txt` と `.txt` はどちらも `.txt` になる。前後の空白は除去し、
    /// 先頭に連続する `.` は一つにまとめる。途中の `.` はそのまま残す（`tar.gz` → `.tar.gz`）。
    pub fn parse(input: &str) -> Result<Self, ExtensionError> {
        let trimmed = input.trim();
        let body = trimmed.trim_start_matches(SEPARATOR);

        if body.is_empty() {
            return Err(ExtensionError::Empty);
        }

        if let Some(ch) = body
            .chars()
            .find(|&ch| std::path::is_separator(ch) || ch == '\0')
        {
            return Err(ExtensionError::Invalid {
                ext: trimmed.to_string(),
                reason: format!("contains forbidden character {:?}", ch),
            });
        }

        Ok(Self(format!("{}{}", SEPARATOR, body)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ファイル名がこの拡張子で終わるか（大文字小文字を区別する末尾一致）
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.ends_with(self.as_str())
    }

    /// 末尾の拡張子をちょうど一つ取り除いたベース名
    pub fn strip_from<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        file_name.strip_suffix(self.as_str())
    }

    /// 末尾の拡張子を `target` に置き換えたファイル名
    pub fn replace_with(&self, file_name: &str, target: &Extension) -> Option<String> {
        self.strip_from(file_name)
            .map(|base| format!("{}{}", base, target.as_str()))
    }

    /// ディレクトリエントリ名の末尾の拡張子を置き換える
    ///
    /// Unix ではバイト列のまま比較するため、UTF-8 でない名前も対象になる。
    #[cfg(unix)]
    pub fn replace_in_name(&self, file_name: &OsStr, target: &Extension) -> Option<OsString> {
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let base = file_name.as_bytes().strip_suffix(self.as_str().as_bytes())?;
        let mut bytes = Vec::with_capacity(base.len() + target.as_str().len());
        bytes.extend_from_slice(base);
        bytes.extend_from_slice(target.as_str().as_bytes());
        Some(OsString::from_vec(bytes))
    }

    /// ディレクトリエントリ名の末尾の拡張子を置き換える
    #[cfg(not(unix))]
    pub fn replace_in_name(&self, file_name: &OsStr, target: &Extension) -> Option<OsString> {
        file_name
            .to_str()
            .and_then(|name| self.replace_with(name, target))
            .map(OsString::from)
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
