//! The constraint-satisfaction core: one variable per slot, the current
//! candidate words for each variable (the domain store), node and arc
//! consistency over the domains, and a heuristic backtracking search over
//! assignments.

use crate::{grid::Grid, slot::Slot, vocab::Vocabulary};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::Instant;

mod consistency;
mod search;

/// A partial mapping from slots to assigned words. Complete when every
/// slot of the grid is present.
pub type Assignment = FxHashMap<Slot, String>;

/// Owns the domain store for one solve. Domains start as a copy of the
/// full vocabulary per slot and only ever shrink; the search never
/// touches them, it mutates a single [`Assignment`] in place.
pub struct Solver<'g> {
    grid: &'g Grid,
    domains: FxHashMap<Slot, FxHashSet<String>>,
}

impl<'g> Solver<'g> {
    pub fn new(grid: &'g Grid, vocab: &Vocabulary) -> Solver<'g> {
        let domains = grid
            .slots()
            .iter()
            .map(|slot| (*slot, vocab.words().iter().cloned().collect()))
            .collect();

        Solver { grid, domains }
    }

    /// The current candidate words for `slot`, or `None` for a slot the
    /// grid does not contain.
    pub fn domain(&self, slot: &Slot) -> Option<&FxHashSet<String>> {
        self.domains.get(slot)
    }

    /// Removes every candidate whose length differs from its slot's
    /// length. Single pass, no ordering dependency.
    pub fn enforce_node_consistency(&mut self) {
        let mut removed = 0;
        for (slot, domain) in self.domains.iter_mut() {
            let before = domain.len();
            domain.retain(|word| word.len() == slot.length);
            removed += before - domain.len();
        }
        debug!("node consistency removed {} candidates", removed);
    }

    fn has_empty_domain(&self) -> bool {
        self.domains.values().any(FxHashSet::is_empty)
    }

    /// Runs node consistency, AC-3, and backtracking search. Returns a
    /// complete, consistent assignment, or `None` if the instance is
    /// unsatisfiable. Never returns a partially filled result.
    pub fn solve(&mut self) -> Option<Assignment> {
        let start = Instant::now();

        self.enforce_node_consistency();
        // AC-3 only notices a wipeout it causes itself, so a domain
        // already emptied by the length constraint is checked here.
        if self.has_empty_domain() {
            debug!("no candidates of the required length for some slot");
            return None;
        }
        if !self.ac3() {
            return None;
        }

        let mut assignment = Assignment::default();
        let solved = self.backtrack(&mut assignment);
        debug!("search finished in {:?}", start.elapsed());

        if solved {
            Some(assignment)
        } else {
            None
        }
    }
}
