//! Randomized backtracking search for a torus containing every pattern.
//!
//! The driver owns the torus, a fixed visiting order over its cells and
//! the set of patterns already placed. At each depth it intersects the
//! grid's candidate mask with the unused patterns, tries the survivors in
//! random order, and undoes each placement on the way back up. The search
//! stops the moment 128 distinct patterns sit on the torus at once, and
//! the winning placement is left in the grid.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::coord::HexCoord;
use crate::error::Result;
use crate::pattern::{codes_in, PatternCode, CODE_COUNT};
use crate::torus::Torus;

/// Steps between progress reports.
const PROGRESS_INTERVAL: u64 = 10_000_000;

/// How a search run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every one of the 128 patterns is on the torus.
    Solved,
    /// The whole space below the seed placement was explored.
    Exhausted,
    /// The step budget ran out first.
    OutOfBudget,
}

/// Depth-first search driver. One instance runs one search.
pub struct Search {
    torus: Torus,
    sequence: Vec<HexCoord>,
    visited: u128,
    steps: u64,
    best: u32,
    max_steps: Option<u64>,
    rng: StdRng,
}

impl Search {
    /// Prepares a search over a fresh `width` × `height` torus.
    ///
    /// Runs with the same seed try candidates in the same order.
    pub fn new(width: i32, height: i32, seed: u64) -> Result<Self> {
        Ok(Self {
            torus: Torus::new(width, height)?,
            sequence: visiting_sequence(width, height),
            visited: 0,
            steps: 0,
            best: 0,
            max_steps: None,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Caps the number of steps before the search gives up.
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Runs the search until it solves, exhausts or hits the step budget.
    ///
    /// On [`Outcome::Solved`] the torus holds the full placement; on
    /// [`Outcome::Exhausted`] only the seed placement remains.
    pub fn run(&mut self) -> Outcome {
        let Some(&first) = self.sequence.first() else {
            return Outcome::Exhausted;
        };

        // seed one random pattern at the first coordinate; it is never
        // reconsidered, only the cells after it backtrack
        let code = PatternCode::ALL[self.rng.gen_range(0..CODE_COUNT)];
        self.torus.set(first, code);
        self.visited |= code.mask();
        self.best = 1;

        match self.dfs(1) {
            Some(outcome) => outcome,
            None => Outcome::Exhausted,
        }
    }

    /// One search frame: try every unused candidate at `sequence[depth]`.
    ///
    /// Returns `None` when the subtree is exhausted, `Some` to unwind the
    /// whole stack. On the way out of a solved or out-of-budget frame the
    /// placement is deliberately not undone.
    fn dfs(&mut self, depth: usize) -> Option<Outcome> {
        if depth >= self.sequence.len() {
            return None;
        }
        let coord = self.sequence[depth];

        self.steps += 1;
        if self.steps % PROGRESS_INTERVAL == 0 {
            debug!(steps = self.steps, best = self.best, "still searching");
        }
        if let Some(max) = self.max_steps {
            if self.steps > max {
                return Some(Outcome::OutOfBudget);
            }
        }

        let mut candidates: Vec<PatternCode> =
            codes_in(self.torus.available(coord) & !self.visited).collect();
        if candidates.is_empty() {
            return None;
        }
        candidates.shuffle(&mut self.rng);

        for code in candidates {
            self.torus.set(coord, code);
            self.visited |= code.mask();

            let coverage = self.visited.count_ones();
            if coverage > self.best {
                self.best = coverage;
                info!(best = coverage, steps = self.steps, "new best coverage");
            }
            if coverage as usize == CODE_COUNT {
                return Some(Outcome::Solved);
            }

            if let Some(outcome) = self.dfs(depth + 1) {
                return Some(outcome);
            }

            // restore the torus and the used set for the next candidate
            self.torus.unset(coord);
            self.visited &= !code.mask();
        }
        None
    }

    /// The torus in its current state.
    pub fn torus(&self) -> &Torus {
        &self.torus
    }

    /// Mask of patterns currently placed.
    pub fn visited(&self) -> u128 {
        self.visited
    }

    /// Search frames entered so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Largest number of distinct patterns seen on the torus at once.
    pub fn best(&self) -> u32 {
        self.best
    }
}

/// Fixed visiting order: per column, even rows first, then odd rows.
fn visiting_sequence(width: i32, height: i32) -> Vec<HexCoord> {
    let mut sequence = Vec::with_capacity((width * height).max(0) as usize);
    for x in 0..width {
        for y in 0..height / 2 {
            sequence.push(HexCoord::new(x, 2 * y));
        }
        for y in 0..height / 2 {
            sequence.push(HexCoord::new(x, 2 * y + 1));
        }
    }
    sequence
}
