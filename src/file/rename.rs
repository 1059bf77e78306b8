//! 拡張子の一括変更
//!
//! ディレクトリ直下のエントリを走査し、元の拡張子で終わるファイルを
//! 新しい拡張子へリネームする。ファイル単位の失敗は収集して処理を継続する。

use crate::error::{ExtensionError, RenameError};
use crate::file::extension::Extension;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// ディレクトリ一覧の1エントリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: OsString,
    pub is_dir: bool,
}

impl DirectoryEntry {
    pub fn file<N: Into<OsString>>(name: N) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir<N: Into<OsString>>(name: N) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// リネームが依存するファイルシステム操作のトレイト
pub trait FileSystem {
    /// ディレクトリ直下のエントリを一覧（再帰なし、一覧順を保持）
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>>;

    /// 同一ディレクトリ内でのアトミックなリネーム
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// `std::fs` によるファイルシステム操作の実装
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            // シンボリックリンクは辿らない
            let is_dir = entry.file_type().map(|file_type| file_type.is_dir());
            if let Some(listed) = listed_entry(entry.file_name(), is_dir)? {
                entries.push(listed);
            }
        }
        Ok(entries)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }
}

/// 一覧取得中に消えたエントリは一覧から除外する
fn listed_entry(name: OsString, is_dir: io::Result<bool>) -> io::Result<Option<DirectoryEntry>> {
    match is_dir {
        Ok(is_dir) => Ok(Some(DirectoryEntry { name, is_dir })),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("{:?} vanished while listing", name);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// 一括リネームの結果
///
/// `errors` が空でなくても `renamed` が空とは限らない（部分的な成功）。
/// 一覧取得に失敗した場合のみ、`errors` は致命的な `RenameError::Listing` 一件になる。
#[derive(Debug, Default)]
pub struct RenameReport {
    renamed: Vec<PathBuf>,
    errors: Vec<RenameError>,
}

impl RenameReport {
    fn listing_failure(path: &Path, source: io::Error) -> Self {
        Self {
            renamed: Vec::new(),
            errors: vec![RenameError::Listing {
                path: path.to_path_buf(),
                source,
            }],
        }
    }

    /// リネーム後のパス（処理順）
    pub fn renamed(&self) -> &[PathBuf] {
        &self.renamed
    }

    /// 発生したエラー（処理順）
    pub fn errors(&self) -> &[RenameError] {
        &self.errors
    }

    pub fn renamed_count(&self) -> usize {
        self.renamed.len()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_fatal_error(&self) -> bool {
        self.errors.iter().any(RenameError::is_fatal)
    }

    pub fn into_parts(self) -> (Vec<PathBuf>, Vec<RenameError>) {
        (self.renamed, self.errors)
    }
}

/// 拡張子文字列を受け取って一括リネームを実行
///
/// 拡張子が不正な場合はファイルシステムに触れる前にエラーを返す。
pub fn change_extensions<P: AsRef<Path>>(
    source_ext: &str,
    target_ext: &str,
    dir_path: P,
) -> Result<RenameReport, ExtensionError> {
    let source = Extension::parse(source_ext)?;
    let target = Extension::parse(target_ext)?;
    Ok(rename_in_dir(&source, &target, dir_path.as_ref()))
}

/// 正規化済みの拡張子で一括リネームを実行
pub fn rename_in_dir(source: &Extension, target: &Extension, dir_path: &Path) -> RenameReport {
    rename_in_dir_with(&StdFileSystem, source, target, dir_path)
}

/// 任意のファイルシステム実装で一括リネームを実行
pub fn rename_in_dir_with<F: FileSystem + ?Sized>(
    fs: &F,
    source: &Extension,
    target: &Extension,
    dir_path: &Path,
) -> RenameReport {
    let entries = match fs.read_dir(dir_path) {
        Ok(entries) => entries,
        Err(e) => {
            log::info!("cannot list {}: {}", dir_path.display(), e);
            return RenameReport::listing_failure(dir_path, e);
        }
    };

    let mut report = RenameReport::default();

    for entry in entries {
        if entry.is_dir {
            continue;
        }

        let Some(new_name) = source.replace_in_name(&entry.name, target) else {
            continue;
        };

        let from = dir_path.join(&entry.name);
        let to = dir_path.join(new_name);
        log::debug!("renaming {} -> {}", from.display(), to.display());

        match fs.rename(&from, &to) {
            Ok(()) => report.renamed.push(to),
            Err(e) => {
                log::info!("rename failed {} -> {}: {}", from.display(), to.display(), e);
                report.errors.push(RenameError::Rename {
                    from,
                    to,
                    source: e,
                });
            }
        }
    }

    log::debug!(
        "{}: {} renamed, {} failed ({} -> {})",
        dir_path.display(),
        report.renamed.len(),
        report.errors.len(),
        source,
        target
    );

    report
}
