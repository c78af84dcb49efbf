//! 共通定数

/// 描画グリッドの幅（文字数）
pub const WIDTH: usize = 70;
/// 描画グリッドの高さ（行数）
pub const HEIGHT: usize = 35;

/// 最大反復回数（dwell の上限）
pub const MAX_DWELL: u32 = 90;

/// 発散判定の閾値（|z|^2 がこれを超えたら発散）
pub const ESCAPE_THRESHOLD: f64 = 4.0;

/// 入力1トークンあたりの最大バイト数
pub const MAX_TOKEN_LEN: usize = 1024;
