//! アスキーアートのグリッド描画

use std::io::{self, Write};

use num_complex::Complex;

use super::constants::{HEIGHT, MAX_DWELL, WIDTH};
use super::glyphs::dwell_to_glyph;
use super::mandelbrot::mandelbrot_dwell;

/// 描画する複素平面上の正方形領域（左下の角と一辺の長さ）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub min_real: f64,
    pub min_imag: f64,
    pub size: f64,
}

impl Region {
    pub const fn new(min_real: f64, min_imag: f64, size: f64) -> Self {
        Self {
            min_real,
            min_imag,
            size,
        }
    }

    pub fn x_max(&self) -> f64 {
        self.min_real + self.size
    }

    pub fn y_max(&self) -> f64 {
        self.min_imag + self.size
    }

    /// 列ごとの実部の刻み幅。両端の列が領域の端に一致する
    pub fn x_step(&self) -> f64 {
        self.size / (WIDTH - 1) as f64
    }

    /// 行ごとの虚部の刻み幅
    pub fn y_step(&self) -> f64 {
        self.size / (HEIGHT - 1) as f64
    }

    /// グリッド上の (列, 行) を複素平面上の座標に変換
    ///
    /// 行 0 が虚部の最大値（画面の上端）に対応する。
    /// 加算を積み重ねずに添字から直接計算するので、誤差で端の行や列が欠けることはない。
    pub fn sample(&self, col: usize, row: usize) -> Complex<f64> {
        let cx = self.min_real + col as f64 * self.x_step();
        let cy = self.y_max() - row as f64 * self.y_step();
        Complex::new(cx, cy)
    }
}

/// 1行分（`WIDTH` 文字）を描画
pub fn render_row(region: &Region, row: usize) -> String {
    (0..WIDTH)
        .map(|col| dwell_to_glyph(mandelbrot_dwell(region.sample(col, row), MAX_DWELL)))
        .collect()
}

/// グリッド全体を上の行から順に書き出す（各行は改行で終わる）
pub fn render_grid<W: Write>(region: &Region, out: &mut W) -> io::Result<()> {
    log::debug!(
        "領域: 実部 [{}, {}], 虚部 [{}, {}], 刻み ({}, {})",
        region.min_real,
        region.x_max(),
        region.min_imag,
        region.y_max(),
        region.x_step(),
        region.y_step()
    );

    for row in 0..HEIGHT {
        writeln!(out, "{}", render_row(region, row))?;
    }
    Ok(())
}

/// グリッド全体を文字列として返す
pub fn render_to_string(region: &Region) -> String {
    (0..HEIGHT)
        .map(|row| {
            let mut line = render_row(region, row);
            line.push('\n');
            line
        })
        .collect()
}
