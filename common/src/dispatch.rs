use std::time::Instant;

use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::{
    board::Board,
    coord::Geometry,
    solver::{Pruning, SearchStats, Solver},
};

/// The best terminal board over all openings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<'g> {
    /// The hole that was empty at the start of the winning line
    pub start_hole: usize,
    pub best: Board<'g>,
    pub stats: SearchStats,
}

/// Runs one [`Solver`] per opening hole and picks the overall best result.
pub struct Dispatcher<'g> {
    geometry: &'g Geometry,
    pruning: Pruning,
}

impl<'g> Dispatcher<'g> {
    pub fn new(geometry: &'g Geometry) -> Self {
        Self {
            geometry,
            pruning: Pruning::default(),
        }
    }

    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    /// Search the game that opens with only `hole` empty.
    pub fn solve_from(&self, hole: usize) -> Solution<'g> {
        let outcome = Solver::new(Board::with_hole(self.geometry, hole))
            .with_pruning(self.pruning)
            .solve();

        log::debug!(
            "hole {}: best terminal board has {} pegs after {} moves, explored {} positions",
            hole + 1,
            outcome.best.num_pegs(),
            outcome.best.history().len(),
            outcome.stats.explored,
        );

        Solution {
            start_hole: hole,
            best: outcome.best,
            stats: outcome.stats,
        }
    }

    /// Search every opening in parallel.
    ///
    /// The board with strictly more pegs wins, ties go to the lowest opening
    /// hole no matter which search finishes first. The returned stats are
    /// summed over all openings.
    pub fn solve_all(&self) -> Solution<'g> {
        let start = Instant::now();

        // collect keeps the index order of the openings
        let per_hole: Vec<Solution<'g>> = self
            .geometry
            .holes()
            .into_par_iter()
            .map(|hole| self.solve_from(hole))
            .collect();

        let mut per_hole = per_hole.into_iter();
        let mut overall = per_hole
            .next()
            .expect("a geometry always has at least one hole");
        let mut stats = overall.stats;

        for candidate in per_hole {
            stats += candidate.stats;
            if candidate.best.num_pegs() > overall.best.num_pegs() {
                overall = candidate;
            }
        }
        overall.stats = stats;

        log::info!(
            "searched {} openings in {}s. explored {} positions, pruned {}",
            self.geometry.num_holes(),
            start.elapsed().as_secs_f32(),
            stats.explored,
            stats.pruned,
        );

        overall
    }
}
