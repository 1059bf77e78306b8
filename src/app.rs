//! メインアプリケーション構造体
//!
//! 対話入力で対象フォルダと拡張子を受け取り、一括リネームの結果を表示する

use crate::error::{ChextError, FileError, Result};
use crate::file::{self, Extension, RenameReport};
use crate::prompt::Prompt;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const FOLDER_PROMPT: &str =
    "Enter the path to the folder (e.g., /path/to/your/files or . for current directory):";
pub const SOURCE_PROMPT: &str = "Enter original extension (ex=>jpg)";
pub const TARGET_PROMPT: &str = "Enter new extension (ex=>jpeg)";

/// セッションの結果
#[derive(Debug)]
pub enum Outcome {
    /// リネームを実行した（ファイル単位のエラーを含む場合がある）
    Completed(RenameReport),
    /// 入力の検証に失敗し、リネームは実行していない
    InvalidInput,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Completed(_))
    }
}

/// メインアプリケーション構造体
pub struct App<R, W> {
    prompt: Prompt<R, W>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            prompt: Prompt::new(input, output),
        }
    }

    /// 対話セッションを1回実行
    pub fn run(&mut self) -> Result<Outcome> {
        let folder = self.prompt.ask(FOLDER_PROMPT)?;
        let Some(dir) = self.resolve_folder(&folder)? else {
            return Ok(Outcome::InvalidInput);
        };

        let source = self.prompt.ask(SOURCE_PROMPT)?;
        if source.is_empty() {
            return self.reject("Original extension cannot be empty.");
        }

        let target = self.prompt.ask(TARGET_PROMPT)?;
        if target.is_empty() {
            return self.reject("New extension cannot be empty.");
        }

        let (source, target) = match (Extension::parse(&source), Extension::parse(&target)) {
            (Ok(source), Ok(target)) => (source, target),
            (Err(e), _) | (_, Err(e)) => return self.reject(&e.to_string()),
        };

        log::debug!("{} -> {} in {}", source, target, dir.display());
        let report = file::rename_in_dir(&source, &target, &dir);
        self.print_summary(&report)?;

        Ok(Outcome::Completed(report))
    }

    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }

    /// フォルダ入力を展開・検証（不正な場合はメッセージを表示して `None`）
    fn resolve_folder(&mut self, folder: &str) -> Result<Option<PathBuf>> {
        let out = self.prompt.output();
        match file::resolve_directory(folder) {
            Ok(dir) => Ok(Some(dir)),
            Err(ChextError::File(e @ FileError::Access { .. })) => {
                writeln!(out, "{}", e)?;
                Ok(None)
            }
            Err(ChextError::File(e)) => {
                writeln!(out, "Error: {}", e)?;
                Ok(None)
            }
            Err(ChextError::Path(message)) => {
                writeln!(out, "Error: {}", message)?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn reject(&mut self, message: &str) -> Result<Outcome> {
        writeln!(self.prompt.output(), "Error: {}", message)?;
        Ok(Outcome::InvalidInput)
    }

    fn print_summary(&mut self, report: &RenameReport) -> Result<()> {
        let out = self.prompt.output();

        if !report.errors().is_empty() {
            writeln!(out, "Errors encountered:")?;
            for error in report.errors() {
                writeln!(out, "-  {}", error)?;
            }
        }

        if !report.renamed().is_empty() {
            writeln!(out, "Successfully renamed files:")?;
            for path in report.renamed() {
                writeln!(out, "-  {}", path.display())?;
            }
            writeln!(out, "{} file(s) renamed successfully.", report.renamed_count())?;
        }

        if report.renamed().is_empty() && report.errors().is_empty() {
            writeln!(
                out,
                "No files found with the original extension or no files needed renaming."
            )?;
        }

        out.flush()?;
        Ok(())
    }
}
