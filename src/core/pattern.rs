//! Grid encoding helpers.
//!
//! A pattern body is the flattened board: each row's cells joined into a
//! string of `0`/`1` tokens, rows separated by single spaces. `"010 001 111"`
//! is a glider on a 3x3 board.

/// The board configuration as the simulator hands it to us: rows of cells,
/// 0 = dead, anything else = live.
pub type Grid = Vec<Vec<u8>>;

/// Flattens a grid into the wire encoding the pattern API stores.
pub fn encode_body(grid: &Grid) -> String {
    grid.iter()
        .map(|row| {
            row.iter()
                .map(|cell| if *cell == 0 { '0' } else { '1' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// True if the body holds no live cells.
///
/// Mirrors the check `^([^1])+$`: only a non-empty body made entirely of
/// non-`'1'` tokens counts as lifeless. The empty string does not match and
/// therefore passes.
pub fn is_lifeless(body: &str) -> bool {
    !body.is_empty() && !body.contains('1')
}
