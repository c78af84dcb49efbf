//! 描画領域の対話的な読み込み
//!
//! C の `scanf("%lf")` と同じく、空白を読み飛ばしてから数値として読める最長の部分だけを取り込む。
//! 残りの文字は次の読み込みに回るので、`2.5abc` は 2.5 として読まれ、`abc` は次の値で失敗する。

use std::fmt;
use std::io::{BufRead, Write};
use std::num::NonZeroU8;

use lexical_core::{NumberFormatBuilder, ParseFloatOptions};

use super::constants::MAX_TOKEN_LEN;
use super::error::InputError;
use super::render::Region;

/// 16進浮動小数点数（`0x` の後ろ、例: `1.8p3`）の書式
const HEX_FLOAT: u128 = NumberFormatBuilder::new()
    .mantissa_radix(16)
    .exponent_base(NonZeroU8::new(2))
    .exponent_radix(NonZeroU8::new(10))
    .build();

/// 読み込む値の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    MinReal,
    MinImag,
    Size,
}

impl Field {
    pub fn prompt(self) -> &'static str {
        match self {
            Field::MinReal => "Minimum real: ",
            Field::MinImag => "Minimum imaginary: ",
            Field::Size => "Size: ",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::MinReal => write!(f, "minimum real"),
            Field::MinImag => write!(f, "minimum imaginary"),
            Field::Size => write!(f, "size"),
        }
    }
}

/// 文字列の先頭から浮動小数点数として読める最長の部分を解析
///
/// 値と消費したバイト数を返す。先頭が数値でなければ `None`。
pub fn parse_float_prefix(bytes: &[u8]) -> Option<(f64, usize)> {
    if let Some(parsed) = parse_hex_float_prefix(bytes) {
        return Some(parsed);
    }
    match lexical_core::parse_partial::<f64>(bytes) {
        Ok((value, used)) if used > 0 => Some((value, used)),
        _ => None,
    }
}

/// `[+-]0x` で始まる16進浮動小数点数
fn parse_hex_float_prefix(bytes: &[u8]) -> Option<(f64, usize)> {
    let (negative, sign_len) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };
    let rest = bytes.get(sign_len..)?;
    if rest.len() < 3 || rest[0] != b'0' || !matches!(rest[1], b'x' | b'X') {
        return None;
    }
    let digits = &rest[2..];
    if !digits[0].is_ascii_hexdigit() && digits[0] != b'.' {
        return None;
    }

    let options = ParseFloatOptions::builder().exponent(b'p').build().ok()?;
    match lexical_core::parse_partial_with_options::<f64, HEX_FLOAT>(digits, &options) {
        Ok((value, used)) if used > 0 => {
            let value = if negative { -value } else { value };
            Some((value, sign_len + 2 + used))
        }
        _ => None,
    }
}

/// 空白区切りで値を読み出す。解析しきれなかった残りは次の読み込みに回す
struct Scanner<'a, R> {
    input: &'a mut R,
    pending: Vec<u8>,
}

impl<'a, R: BufRead> Scanner<'a, R> {
    fn new(input: &'a mut R) -> Self {
        Self {
            input,
            pending: Vec::new(),
        }
    }

    /// 空白区切りのトークンを1つ読み込む（先頭の空白と改行は読み飛ばす）
    ///
    /// 入力の終端までトークンが見つからなければ `None`。
    /// `MAX_TOKEN_LEN` を超えた分は読まずに残し、長さ `MAX_TOKEN_LEN + 1` で返す。
    fn next_token(&mut self) -> Result<Option<Vec<u8>>, InputError> {
        if !self.pending.is_empty() {
            return Ok(Some(std::mem::take(&mut self.pending)));
        }

        let mut token = Vec::new();
        loop {
            let buf = self.input.fill_buf()?;
            if buf.is_empty() {
                break;
            }

            let mut used = 0;
            let mut done = false;
            for &byte in buf {
                if byte.is_ascii_whitespace() {
                    used += 1;
                    if token.is_empty() {
                        continue;
                    }
                    done = true;
                    break;
                }
                if token.len() > MAX_TOKEN_LEN {
                    done = true;
                    break;
                }
                used += 1;
                token.push(byte);
            }
            self.input.consume(used);

            if done {
                break;
            }
        }

        Ok((!token.is_empty()).then_some(token))
    }

    fn read_f64(&mut self, field: Field) -> Result<f64, InputError> {
        let token = self.next_token()?;
        let parsed = token
            .as_deref()
            .filter(|t| t.len() <= MAX_TOKEN_LEN)
            .and_then(parse_float_prefix);

        match (parsed, token) {
            (Some((value, used)), Some(mut token)) => {
                self.pending = token.split_off(used);
                log::debug!("{field}: {value}");
                Ok(value)
            }
            (_, token) => {
                let token = token.map(|t| String::from_utf8_lossy(&t).into_owned());
                log::warn!("{field} を数値として解釈できません: {token:?}");
                Err(InputError::Invalid { field, token })
            }
        }
    }
}

/// プロンプトを表示して浮動小数点数を1つ読み込む
fn read_value<R: BufRead, W: Write>(
    scanner: &mut Scanner<'_, R>,
    output: &mut W,
    field: Field,
) -> Result<f64, InputError> {
    write!(output, "{}", field.prompt())?;
    output.flush()?;
    scanner.read_f64(field)
}

/// 実部の最小値・虚部の最小値・サイズを順に読み込む
///
/// 最初に失敗した時点で残りのプロンプトは表示せずに返る。
pub fn read_region<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Region, InputError> {
    let mut scanner = Scanner::new(input);
    let min_real = read_value(&mut scanner, output, Field::MinReal)?;
    let min_imag = read_value(&mut scanner, output, Field::MinImag)?;
    let size = read_value(&mut scanner, output, Field::Size)?;
    Ok(Region::new(min_real, min_imag, size))
}
