//! Arc revision and AC-3. An arc is a *directed* pair of slots (x, y):
//! revising it prunes from the domain of x every word with no support in
//! the current domain of y at their overlap. Both orientations of each
//! crossing pair are separate arcs, since revision is not symmetric.
//! AC-3 converges to the same maximal arc-consistent domains whatever
//! order the queue is processed in.

use super::Solver;
use crate::slot::Slot;
use log::debug;
use std::collections::VecDeque;

impl Solver<'_> {
    /// Makes `x` arc-consistent with `y`, reading the domain of `y` as
    /// it stands now (it may have shrunk since the arc was enqueued).
    /// Returns whether anything was removed. A pair with no overlap is
    /// left untouched.
    pub fn revise(&mut self, x: Slot, y: Slot) -> bool {
        let Some((xi, yi)) = self.grid.overlap(&x, &y) else {
            return false;
        };

        let domain_y = &self.domains[&y];
        let doomed: Vec<String> = self.domains[&x]
            .iter()
            .filter(|wx| {
                !domain_y
                    .iter()
                    .any(|wy| wx.as_bytes()[xi] == wy.as_bytes()[yi])
            })
            .cloned()
            .collect();

        if doomed.is_empty() {
            return false;
        }
        if let Some(domain_x) = self.domains.get_mut(&x) {
            for word in &doomed {
                domain_x.remove(word);
            }
        }
        true
    }

    /// Enforces arc consistency starting from every arc in the grid.
    /// Returns `false` as soon as a domain is wiped out, `true` once the
    /// queue drains.
    pub fn ac3(&mut self) -> bool {
        let mut arcs = VecDeque::new();
        for x in self.grid.slots() {
            for y in self.grid.neighbors(x) {
                arcs.push_back((*x, *y));
            }
        }
        self.run_ac3(arcs)
    }

    /// Like [`ac3`](Solver::ac3), seeded with an explicit set of arcs.
    pub fn ac3_with(&mut self, arcs: impl IntoIterator<Item = (Slot, Slot)>) -> bool {
        self.run_ac3(arcs.into_iter().collect())
    }

    fn run_ac3(&mut self, mut queue: VecDeque<(Slot, Slot)>) -> bool {
        while let Some((x, y)) = queue.pop_front() {
            if !self.revise(x, y) {
                continue;
            }
            if self.domains[&x].is_empty() {
                debug!("ac3 wiped out the domain of {}", x);
                return false;
            }
            // a shrink of x may break the consistency of every other
            // neighbor against x
            for z in self.grid.neighbors(&x) {
                if *z != y {
                    queue.push_back((*z, x));
                }
            }
        }
        true
    }
}
