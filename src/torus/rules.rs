//! Transition table for B3/S23.

/// `TABLE[alive][neighbors]`. Counts come from the raw 8-slot enumeration,
/// so they never exceed 8 even on grids where slots repeat.
const TABLE: [[bool; 9]; 2] = build_table();

const fn build_table() -> [[bool; 9]; 2] {
    let mut table = [[false; 9]; 2];
    let mut neighbors = 0;
    while neighbors <= 8 {
        table[0][neighbors] = neighbors == 3;
        table[1][neighbors] = neighbors == 2 || neighbors == 3;
        neighbors += 1;
    }
    table
}

#[inline(always)]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    TABLE[alive as usize][neighbors as usize]
}
