use std::ops::AddAssign;

use crate::board::Board;

/// Whether the solver may skip boards that can't improve on the best board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Pruning {
    #[default]
    Enabled,
    /// Walk the whole game tree. Slow, only useful to cross-check the pruned
    /// search.
    Disabled,
}

/// Counters collected while walking the game tree.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SearchStats {
    /// boards visited, including the ones that were pruned
    pub explored: u64,
    pub pruned: u64,
    /// terminal boards reached
    pub terminals: u64,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, rhs: Self) {
        self.explored += rhs.explored;
        self.pruned += rhs.pruned;
        self.terminals += rhs.terminals;
    }
}

/// Exhaustive depth-first search for the terminal board with the most pegs
/// left, starting from one board.
///
/// Note that the objective is to *keep* as many pegs as possible, which is
/// the opposite of the usual goal of the game. A board is only expanded while
/// it has strictly more pegs than the best terminal board found so far. Since
/// every jump removes one peg, nothing below such a board can do better.
///
/// Moves are tried in the order of [`Board::moves`] and the first optimum
/// found is kept, which makes the result deterministic.
pub struct Solver<'g> {
    first: Board<'g>,
    pruning: Pruning,
}

/// The best terminal board of one search, and what it took to find it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome<'g> {
    pub best: Board<'g>,
    pub stats: SearchStats,
}

/// Mutable part of a running search.
struct State<'g> {
    best: Board<'g>,
    best_pegs: usize,
    pruning: Pruning,
    stats: SearchStats,
}

impl<'g> Solver<'g> {
    pub fn new(first: Board<'g>) -> Self {
        Self {
            first,
            pruning: Pruning::default(),
        }
    }

    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    /// Run the search to completion.
    ///
    /// If no terminal board with at least one peg is reachable, the returned
    /// board is the empty one without history.
    pub fn solve(self) -> Outcome<'g> {
        let best = Board::empty(self.first.geometry());
        let mut state = State {
            best_pegs: best.num_pegs(),
            best,
            pruning: self.pruning,
            stats: SearchStats::default(),
        };

        search(self.first, &mut state);

        Outcome {
            best: state.best,
            stats: state.stats,
        }
    }
}

fn search<'g>(board: Board<'g>, state: &mut State<'g>) {
    state.stats.explored += 1;

    let count = board.num_pegs();
    if state.pruning == Pruning::Enabled && count <= state.best_pegs {
        state.stats.pruned += 1;
        return;
    }

    if board.is_terminal() {
        state.stats.terminals += 1;
        if count > state.best_pegs {
            state.best_pegs = count;
            state.best = board;
        }
        return;
    }

    for &mv in board.moves() {
        search(board.execute_move(mv), state);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Move, coord::Geometry};

    use super::*;

    fn solve(geometry: &Geometry, hole: usize, pruning: Pruning) -> Outcome<'_> {
        Solver::new(Board::with_hole(geometry, hole))
            .with_pruning(pruning)
            .solve()
    }

    #[test]
    fn test_four_rows_from_the_apex() {
        let geometry = Geometry::new(4).unwrap();
        let outcome = solve(&geometry, 0, Pruning::Enabled);

        let expected: Vec<_> = [(3, 0), (8, 1), (0, 3), (5, 0), (6, 1), (0, 3)]
            .into_iter()
            .map(|(start, end)| Move::new(&geometry, start, end))
            .collect();

        assert!(outcome.best.is_terminal());
        assert_eq!(outcome.best.num_pegs(), 3);
        assert_eq!(outcome.best.history(), expected.as_slice());
        assert_eq!(outcome.best.history()[0].end(), 0);
        assert_eq!(
            outcome.stats,
            SearchStats {
                explored: 119,
                pruned: 47,
                terminals: 1,
            }
        );
    }

    #[test]
    fn test_history_replays_to_the_best_board() {
        let geometry = Geometry::new(4).unwrap();
        for hole in geometry.holes() {
            let outcome = solve(&geometry, hole, Pruning::Enabled);

            let mut board = Board::with_hole(&geometry, hole);
            for &mv in outcome.best.history() {
                assert!(board.moves().contains(&mv));
                let next = board.execute_move(mv);
                assert_eq!(next.num_pegs() + 1, board.num_pegs());
                board = next;
            }
            assert_eq!(board, outcome.best);
        }
    }

    #[test]
    fn test_terminal_opening_is_its_own_best() {
        let geometry = Geometry::new(4).unwrap();
        let outcome = solve(&geometry, 4, Pruning::Enabled);

        assert_eq!(outcome.best, Board::with_hole(&geometry, 4));
        assert_eq!(outcome.best.num_pegs(), 9);
        assert_eq!(outcome.stats.explored, 1);
    }

    #[test]
    // a board that already has a history is searched from where it stands
    fn test_search_continues_from_a_played_board() {
        let geometry = Geometry::new(4).unwrap();
        let first = Move::new(&geometry, 3, 0);
        let board = Board::with_hole(&geometry, 0).execute_move(first);

        let outcome = Solver::new(board).solve();

        assert_eq!(outcome.best.num_pegs(), 3);
        assert_eq!(outcome.best.history().len(), 6);
        assert_eq!(outcome.best.history()[0], first);
        assert_eq!(outcome.best, solve(&geometry, 0, Pruning::Enabled).best);
    }

    #[test]
    fn test_pegless_opening_keeps_the_empty_board() {
        let geometry = Geometry::new(1).unwrap();
        let outcome = solve(&geometry, 0, Pruning::Enabled);

        assert_eq!(outcome.best, Board::empty(&geometry));
        assert!(outcome.best.history().is_empty());
        assert_eq!(outcome.stats.pruned, 1);
    }

    #[test]
    // skipping boards that can't beat the current best must not change the result
    fn test_pruning_is_sound() {
        for size in 3..=4 {
            let geometry = Geometry::new(size).unwrap();
            for hole in geometry.holes() {
                let pruned = solve(&geometry, hole, Pruning::Enabled);
                let full = solve(&geometry, hole, Pruning::Disabled);

                assert_eq!(pruned.best, full.best);
                assert_eq!(full.stats.pruned, 0);
                assert!(pruned.stats.explored <= full.stats.explored);
            }
        }
    }

    #[test]
    fn test_stats_add_up() {
        let mut total = SearchStats::default();
        total += SearchStats {
            explored: 5,
            pruned: 2,
            terminals: 1,
        };
        total += SearchStats {
            explored: 1,
            pruned: 0,
            terminals: 1,
        };
        assert_eq!(
            total,
            SearchStats {
                explored: 6,
                pruned: 2,
                terminals: 2,
            }
        );
    }
}
