//! 入力エラー

use std::io;

use thiserror::Error;

use super::input::Field;

#[derive(Error, Debug)]
pub enum InputError {
    /// 数値として解釈できない入力、または入力の終端
    #[error("Invalid input")]
    Invalid {
        field: Field,
        token: Option<String>,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
