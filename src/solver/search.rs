//! Backtracking search over assignments: minimum-remaining-values
//! variable selection with a degree tie-break, least-constraining-value
//! ordering, and chronological backtracking with unconditional undo.

use super::{Assignment, Solver};
use crate::slot::Slot;
use rustc_hash::FxHashSet;
use std::cmp::Reverse;

impl Solver<'_> {
    /// True iff every slot has an assigned word.
    pub fn is_complete(&self, assignment: &Assignment) -> bool {
        self.grid
            .slots()
            .iter()
            .all(|slot| assignment.contains_key(slot))
    }

    /// True iff the partial assignment violates nothing: words are
    /// pairwise distinct, each word fits its slot, and every crossing
    /// pair that is assigned on both sides agrees at the overlap.
    /// Unassigned slots impose no constraint.
    pub fn is_consistent(&self, assignment: &Assignment) -> bool {
        let mut seen = FxHashSet::default();
        for (slot, word) in assignment {
            if word.len() != slot.length {
                return false;
            }
            if !seen.insert(word.as_str()) {
                return false;
            }
        }

        for (slot, word) in assignment {
            for neighbor in self.grid.neighbors(slot) {
                let Some(other) = assignment.get(neighbor) else {
                    continue;
                };
                let Some((i, j)) = self.grid.overlap(slot, neighbor) else {
                    continue;
                };
                // lengths were checked above, and overlap offsets are
                // in bounds by construction
                if word.as_bytes()[i] != other.as_bytes()[j] {
                    return false;
                }
            }
        }
        true
    }

    /// Picks the unassigned slot with the smallest domain; ties go to
    /// the slot with the most crossings, then to grid-position order.
    pub fn select_unassigned_variable(&self, assignment: &Assignment) -> Option<Slot> {
        self.grid
            .slots()
            .iter()
            .copied()
            .filter(|slot| !assignment.contains_key(slot))
            .min_by_key(|slot| {
                (
                    self.domains[slot].len(),
                    Reverse(self.grid.neighbors(slot).len()),
                    *slot,
                )
            })
    }

    /// Orders the domain of `var` ascending by how many candidates each
    /// word would rule out across the domains of `var`'s unassigned
    /// neighbors (least-constraining-value first), lexicographic on
    /// ties.
    pub fn order_domain_values(&self, var: Slot, assignment: &Assignment) -> Vec<String> {
        let mut words: Vec<String> = self.domains[&var].iter().cloned().collect();
        words.sort();

        let unassigned_neighbors: Vec<Slot> = self
            .grid
            .neighbors(&var)
            .iter()
            .copied()
            .filter(|neighbor| !assignment.contains_key(neighbor))
            .collect();
        if unassigned_neighbors.is_empty() {
            return words;
        }

        words.sort_by_cached_key(|word| {
            let mut ruled_out = 0usize;
            for neighbor in &unassigned_neighbors {
                let Some((i, j)) = self.grid.overlap(&var, neighbor) else {
                    continue;
                };
                let ours = word.as_bytes().get(i);
                ruled_out += self.domains[neighbor]
                    .iter()
                    .filter(|theirs| theirs.as_bytes().get(j) != ours)
                    .count();
            }
            ruled_out
        });
        words
    }

    /// Chronological backtracking. On success the assignment is left
    /// complete; on failure it is restored to exactly its state at the
    /// call, every tentative entry undone.
    pub fn backtrack(&self, assignment: &mut Assignment) -> bool {
        if self.is_complete(assignment) {
            return true;
        }
        let Some(var) = self.select_unassigned_variable(assignment) else {
            return false;
        };

        for word in self.order_domain_values(var, assignment) {
            assignment.insert(var, word);
            if self.is_consistent(assignment) && self.backtrack(assignment) {
                return true;
            }
            assignment.remove(&var);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::{Assignment, Solver};
    use crate::{
        grid::Grid,
        slot::{Direction, Slot},
        vocab::Vocabulary,
    };

    fn vocab(words: &[&str]) -> Vocabulary {
        Vocabulary::new(words.iter().map(|w| w.to_string()))
    }

    const CROSSING: &str = "
___
_**
_**
";

    fn crossing_slots(grid: &Grid) -> (Slot, Slot) {
        (grid.slots()[0], grid.slots()[1])
    }

    #[test]
    fn consistency_rejects_reused_words() {
        let grid = Grid::parse(CROSSING).unwrap();
        let vocab = vocab(&["cat"]);
        let solver = Solver::new(&grid, &vocab);
        let (across, down) = crossing_slots(&grid);

        let mut assignment = Assignment::default();
        assignment.insert(across, String::from("cat"));
        assert!(solver.is_consistent(&assignment));

        assignment.insert(down, String::from("cat"));
        assert!(!solver.is_consistent(&assignment));
    }

    #[test]
    fn consistency_rejects_wrong_lengths() {
        let grid = Grid::parse(CROSSING).unwrap();
        let vocab = vocab(&["bird"]);
        let solver = Solver::new(&grid, &vocab);
        let (across, _) = crossing_slots(&grid);

        let mut assignment = Assignment::default();
        assignment.insert(across, String::from("bird"));
        assert!(!solver.is_consistent(&assignment));
    }

    #[test]
    fn consistency_rejects_overlap_disagreement() {
        let grid = Grid::parse(CROSSING).unwrap();
        let vocab = vocab(&["cat", "dog"]);
        let solver = Solver::new(&grid, &vocab);
        let (across, down) = crossing_slots(&grid);

        let mut assignment = Assignment::default();
        assignment.insert(across, String::from("cat"));
        assignment.insert(down, String::from("dog"));
        assert!(!solver.is_consistent(&assignment));

        assignment.insert(down, String::from("car"));
        assert!(solver.is_consistent(&assignment));
    }

    #[test]
    fn empty_assignment_is_consistent_but_incomplete() {
        let grid = Grid::parse(CROSSING).unwrap();
        let vocab = vocab(&["cat"]);
        let solver = Solver::new(&grid, &vocab);

        let assignment = Assignment::default();
        assert!(solver.is_consistent(&assignment));
        assert!(!solver.is_complete(&assignment));
    }

    #[test]
    fn selection_prefers_the_smallest_domain() {
        // a five-cell across slot crossed by two three-cell down slots
        let grid = Grid::parse(
            "
_____
*_*_*
*_*_*
",
        )
        .unwrap();
        let vocab = vocab(&["abcde", "fghij", "klmno", "abc", "def"]);
        let mut solver = Solver::new(&grid, &vocab);
        solver.enforce_node_consistency();

        // down domains have 2 candidates, across has 3
        let selected = solver
            .select_unassigned_variable(&Assignment::default())
            .unwrap();
        assert_eq!(
            Slot {
                row: 0,
                col: 1,
                direction: Direction::Down,
                length: 3,
            },
            selected
        );
    }

    #[test]
    fn selection_breaks_domain_ties_by_degree() {
        let grid = Grid::parse(
            "
_____
*_*_*
*_*_*
",
        )
        .unwrap();
        let vocab = vocab(&["abcde", "fghij", "abc", "def"]);
        let mut solver = Solver::new(&grid, &vocab);
        solver.enforce_node_consistency();

        // all domains hold 2 candidates; the across slot crosses twice
        let selected = solver
            .select_unassigned_variable(&Assignment::default())
            .unwrap();
        assert_eq!(
            Slot {
                row: 0,
                col: 0,
                direction: Direction::Across,
                length: 5,
            },
            selected
        );
    }

    #[test]
    fn selection_breaks_remaining_ties_by_grid_position() {
        let grid = Grid::parse(
            "
_____
*_*_*
*_*_*
",
        )
        .unwrap();
        let vocab = vocab(&["abcde", "fghij", "abc", "def"]);
        let mut solver = Solver::new(&grid, &vocab);
        solver.enforce_node_consistency();

        let across = Slot {
            row: 0,
            col: 0,
            direction: Direction::Across,
            length: 5,
        };
        let mut assignment = Assignment::default();
        assignment.insert(across, String::from("abcde"));

        // the two down slots tie on domain size and degree
        let selected = solver.select_unassigned_variable(&assignment).unwrap();
        assert_eq!(
            Slot {
                row: 0,
                col: 1,
                direction: Direction::Down,
                length: 3,
            },
            selected
        );
    }

    #[test]
    fn values_are_ordered_least_constraining_first() {
        let grid = Grid::parse(CROSSING).unwrap();
        let vocab = vocab(&["cat", "car", "dog"]);
        let mut solver = Solver::new(&grid, &vocab);
        solver.enforce_node_consistency();
        let (across, _) = crossing_slots(&grid);

        // "car"/"cat" each conflict only with "dog" at the shared first
        // letter; "dog" conflicts with both c-words
        assert_eq!(
            vec!["car", "cat", "dog"],
            solver.order_domain_values(across, &Assignment::default())
        );
    }

    #[test]
    fn values_fall_back_to_a_fixed_order_without_unassigned_neighbors() {
        let grid = Grid::parse(CROSSING).unwrap();
        let vocab = vocab(&["dog", "cat", "car"]);
        let mut solver = Solver::new(&grid, &vocab);
        solver.enforce_node_consistency();
        let (across, down) = crossing_slots(&grid);

        let mut assignment = Assignment::default();
        assignment.insert(down, String::from("cat"));
        assert_eq!(
            vec!["car", "cat", "dog"],
            solver.order_domain_values(across, &assignment)
        );
    }

    #[test]
    fn failed_search_restores_the_assignment() {
        let grid = Grid::parse(CROSSING).unwrap();
        let vocab = vocab(&["cat"]);
        let mut solver = Solver::new(&grid, &vocab);
        solver.enforce_node_consistency();
        assert!(solver.ac3());

        let mut assignment = Assignment::default();
        assert!(!solver.backtrack(&mut assignment));
        assert!(assignment.is_empty());
    }

    #[test]
    fn successful_search_returns_without_undoing() {
        let grid = Grid::parse(CROSSING).unwrap();
        let vocab = vocab(&["cat", "car", "dog"]);
        let mut solver = Solver::new(&grid, &vocab);
        solver.enforce_node_consistency();
        assert!(solver.ac3());

        let mut assignment = Assignment::default();
        assert!(solver.backtrack(&mut assignment));
        assert!(solver.is_complete(&assignment));
        assert!(solver.is_consistent(&assignment));
    }
}
