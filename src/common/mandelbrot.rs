//! マンデルブロ集合計算関数

use num_complex::Complex;

use super::constants::ESCAPE_THRESHOLD;

/// マンデルブロ集合の dwell（発散までに生き残った反復回数）を計算
///
/// z = c から開始し、z を更新した直後に発散判定を行う。
/// 発散したステップはカウントしないので、k 回目で発散した点は k - 1 を返す。
/// 最後まで発散しなかった点は `max_dwell` を返す。
pub fn mandelbrot_dwell(c: Complex<f64>, max_dwell: u32) -> u32 {
    let mut z = c;
    let mut dwell = 0;

    while dwell < max_dwell {
        z = z * z + c;
        if z.norm_sqr() > ESCAPE_THRESHOLD {
            break;
        }
        dwell += 1;
    }
    dwell
}
