//! Fills crossword grids with words from a vocabulary.
//!
//! The grid's maximal open runs become the variables of a constraint
//! satisfaction problem: each slot must take a word of its exact length,
//! crossing slots must agree at their shared cell, and no word may be
//! used twice. [`Solver::solve`] prunes the candidate domains with node
//! consistency and AC-3, then runs a backtracking search guided by the
//! minimum-remaining-values and least-constraining-value heuristics.
//!
//! ```
//! use gridfill::{Grid, Solver, Vocabulary};
//!
//! let grid = Grid::parse("___\n_**\n_**").unwrap();
//! let vocab = Vocabulary::new(["cat", "car", "dog"].iter().map(|w| w.to_string()));
//!
//! let assignment = Solver::new(&grid, &vocab).solve().expect("solvable");
//! assert_eq!(2, assignment.len());
//! ```

pub mod grid;
pub mod render;
pub mod slot;
pub mod solver;
pub mod vocab;

pub use grid::{Grid, GridError};
pub use slot::{Direction, Slot};
pub use solver::{Assignment, Solver};
pub use vocab::Vocabulary;
