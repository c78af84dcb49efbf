//! dwell から表示文字への変換

/// dwell の閾値（この値未満）と対応する文字。薄い順に並ぶ
pub const DWELL_LEVELS: [(u32, char); 9] = [
    (10, ' '),
    (20, '.'),
    (30, ':'),
    (40, '-'),
    (50, '='),
    (60, '+'),
    (70, '*'),
    (80, '#'),
    (90, '%'),
];

/// どの閾値にも入らない dwell（発散しなかった点）の文字
pub const DENSEST_GLYPH: char = '@';

/// dwell から文字を選択
pub fn dwell_to_glyph(dwell: u32) -> char {
    DWELL_LEVELS
        .iter()
        .find(|&&(bound, _)| dwell < bound)
        .map_or(DENSEST_GLYPH, |&(_, glyph)| glyph)
}
