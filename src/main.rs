//! マンデルブロ集合アスキーアートビューア (コンソール版)
//!
//! 標準入力から描画領域を読み込み、70x35 文字のグリッドとして標準出力に描画する
//!
//! 入力:
//!   - Minimum real: 領域左端の実部
//!   - Minimum imaginary: 領域下端の虚部
//!   - Size: 領域の一辺の長さ
//!
//! RUST_LOG=debug で領域と刻み幅、RUST_LOG=info で描画時間を標準エラーに表示

use std::io::{self, BufWriter, Write};
use std::process;
use std::time::Instant;

use mandelbrot::common::{error::InputError, input::read_region, render::render_grid};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    let region = match read_region(&mut stdin.lock(), &mut stdout) {
        Ok(region) => region,
        Err(err @ InputError::Invalid { .. }) => {
            writeln!(stdout, "{err}")?;
            stdout.flush()?;
            process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    let start = Instant::now();
    let mut out = BufWriter::new(stdout);
    render_grid(&region, &mut out)?;
    out.flush()?;
    log::info!("描画完了: {:.2?}", start.elapsed());

    Ok(())
}
