//! Terminal rendering of a solved grid: blocked cells as `█`, open cells
//! as their assigned letter (or a space while unfilled).

use crate::{grid::Grid, solver::Assignment};

/// The per-cell letters a (possibly partial) assignment puts on the
/// grid, row-major.
pub fn letter_grid(grid: &Grid, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
    let mut letters = vec![vec![None; grid.width()]; grid.height()];
    for (slot, word) in assignment {
        for (k, c) in word.chars().enumerate() {
            let (row, col) = slot.cell(k);
            letters[row][col] = Some(c);
        }
    }
    letters
}

pub fn render(grid: &Grid, assignment: &Assignment) -> String {
    let letters = letter_grid(grid, assignment);
    let mut out = String::new();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if grid.is_open(row, col) {
                out.push(letters[row][col].unwrap_or(' '));
            } else {
                out.push('█');
            }
        }
        out.push('\n');
    }
    out
}
