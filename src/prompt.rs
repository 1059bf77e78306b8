//! プロンプト管理
//!
//! 行単位でユーザーからの入力を受け付ける

use crate::error::{ChextError, Result};
use std::io::{BufRead, Write};

/// 入力元と出力先を束ねたプロンプト
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// メッセージを表示して1行読み込む（前後の空白は除去）
    pub fn ask(&mut self, message: &str) -> Result<String> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(ChextError::Input("unexpected end of input".to_string()));
        }

        Ok(line.trim().to_string())
    }

    /// 出力先への参照（結果表示用）
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
