use crate::slot::{Direction, Slot};
use log::debug;
use rustc_hash::FxHashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid structure is empty")]
    Empty,
    #[error("row {row} is {found} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
}

/// The immutable description of a puzzle: which cells are open, the slots
/// derived from them, and the overlap map between every crossing pair.
///
/// Cells marked `*` in the textual structure are blocked; every other
/// character is an open cell. A slot is a maximal run of at least two
/// consecutive open cells in a row or column; a lone open cell forms no
/// slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
    slots: Vec<Slot>,
    overlaps: FxHashMap<(Slot, Slot), (usize, usize)>,
    neighbors: FxHashMap<Slot, Vec<Slot>>,
}

impl Grid {
    pub fn parse(input: &str) -> Result<Grid, GridError> {
        let lines: Vec<&str> = input.lines().collect();
        let first = lines
            .iter()
            .position(|line| !line.is_empty())
            .ok_or(GridError::Empty)?;
        let last = lines
            .iter()
            .rposition(|line| !line.is_empty())
            .ok_or(GridError::Empty)?;
        let rows = &lines[first..=last];

        let width = rows[0].chars().count();
        if width == 0 {
            return Err(GridError::Empty);
        }

        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row,
                    found,
                    expected: width,
                });
            }
            for c in line.chars() {
                cells.push(c != '*');
            }
        }

        let slots = derive_slots(&cells, width, height);
        let (overlaps, neighbors) = derive_overlaps(&slots);

        debug!(
            "parsed {}x{} grid: {} slots, {} crossings",
            width,
            height,
            slots.len(),
            overlaps.len() / 2
        );

        Ok(Grid {
            cells,
            width,
            height,
            slots,
            overlaps,
            neighbors,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.width + col]
    }

    /// All slots, in grid-position order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The character offsets at which `a` and `b` must agree, or `None`
    /// if the slots share no cell. Directional: `overlap(a, b)` and
    /// `overlap(b, a)` both resolve, with the offsets swapped.
    pub fn overlap(&self, a: &Slot, b: &Slot) -> Option<(usize, usize)> {
        self.overlaps.get(&(*a, *b)).copied()
    }

    /// Slots crossing `slot`, in grid-position order.
    pub fn neighbors(&self, slot: &Slot) -> &[Slot] {
        self.neighbors.get(slot).map_or(&[], Vec::as_slice)
    }
}

fn derive_slots(cells: &[bool], width: usize, height: usize) -> Vec<Slot> {
    let mut result = vec![];

    for row in 0..height {
        let mut run_start = None;
        let mut length = 0;
        for col in 0..width {
            if cells[row * width + col] {
                if run_start.is_none() {
                    run_start = Some(col);
                }
                length += 1;
            } else {
                if let Some(start) = run_start.take() {
                    if length >= 2 {
                        result.push(Slot {
                            row,
                            col: start,
                            direction: Direction::Across,
                            length,
                        });
                    }
                }
                length = 0;
            }
        }
        // end of row closes any open run
        if let Some(start) = run_start {
            if length >= 2 {
                result.push(Slot {
                    row,
                    col: start,
                    direction: Direction::Across,
                    length,
                });
            }
        }
    }

    for col in 0..width {
        let mut run_start = None;
        let mut length = 0;
        for row in 0..height {
            if cells[row * width + col] {
                if run_start.is_none() {
                    run_start = Some(row);
                }
                length += 1;
            } else {
                if let Some(start) = run_start.take() {
                    if length >= 2 {
                        result.push(Slot {
                            row: start,
                            col,
                            direction: Direction::Down,
                            length,
                        });
                    }
                }
                length = 0;
            }
        }
        if let Some(start) = run_start {
            if length >= 2 {
                result.push(Slot {
                    row: start,
                    col,
                    direction: Direction::Down,
                    length,
                });
            }
        }
    }

    result.sort();
    result
}

#[allow(clippy::type_complexity)]
fn derive_overlaps(
    slots: &[Slot],
) -> (
    FxHashMap<(Slot, Slot), (usize, usize)>,
    FxHashMap<Slot, Vec<Slot>>,
) {
    let mut overlaps = FxHashMap::default();
    let mut neighbors: FxHashMap<Slot, Vec<Slot>> = FxHashMap::default();

    // Two parallel slots are disjoint by maximality, so only an
    // across/down pair can share a cell.
    for a in slots.iter().filter(|s| s.direction == Direction::Across) {
        for d in slots.iter().filter(|s| s.direction == Direction::Down) {
            let crosses = a.col <= d.col
                && d.col < a.col + a.length
                && d.row <= a.row
                && a.row < d.row + d.length;
            if !crosses {
                continue;
            }

            let offset_in_a = d.col - a.col;
            let offset_in_d = a.row - d.row;

            overlaps.insert((*a, *d), (offset_in_a, offset_in_d));
            overlaps.insert((*d, *a), (offset_in_d, offset_in_a));
            neighbors.entry(*a).or_default().push(*d);
            neighbors.entry(*d).or_default().push(*a);
        }
    }

    for crossing in neighbors.values_mut() {
        crossing.sort();
    }

    (overlaps, neighbors)
}
