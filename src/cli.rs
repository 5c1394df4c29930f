use std::{
    ffi::{OsStr, OsString},
    io::Write,
};

use anyhow::Context;
use clap::Parser;
use colored::Colorize;

use common::{Board, Dispatcher, Geometry, Move, Solution};

pub const USAGE: &str = "Usage: trisolitaire -s [board size]";

#[derive(Parser, Debug)]
#[command(name = "trisolitaire", disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Number of rows of the triangular board
    #[arg(short = 's', value_parser = clap::value_parser!(u16).range(1..))]
    pub size: u16,
}

impl Args {
    /// Parse the arguments after the program name.
    ///
    /// Only the exact form `-s <size>` is accepted. clap on its own also takes
    /// `-s5` and `-s=5`, so the shape is checked before the value is parsed.
    pub fn from_tokens(tokens: &[OsString]) -> Option<Args> {
        let [flag, size] = tokens else {
            return None;
        };
        if flag != "-s" {
            return None;
        }

        let argv = [OsStr::new("trisolitaire"), OsStr::new("-s"), size.as_os_str()];
        Args::try_parse_from(argv).ok()
    }
}

/// Search every opening of a board with `size` rows and print the winning line
/// to stdout.
pub fn run(size: u16) -> anyhow::Result<()> {
    let geometry = Geometry::new(size).context("cannot build the board")?;
    let solution = Dispatcher::new(&geometry).solve_all();

    if log::log_enabled!(log::Level::Debug) {
        log_replay(&solution);
    }

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(format_report(&solution).as_bytes())
        .context("failed to write the result")?;
    stdout.flush()?;
    Ok(())
}

/// The first line holds the 1-based opening hole and the number of moves,
/// followed by one `start, end` line per move, also 1-based.
///
/// When the line has at least one move, the opening hole is where the first
/// move lands.
pub fn format_report(solution: &Solution) -> String {
    let history = solution.best.history();
    let opening = history
        .first()
        .map_or(solution.start_hole, |first| first.end());

    let mut out = format!("{}, {}\n", opening + 1, history.len());
    for mv in history {
        out.push_str(&format!("{}, {}\n", mv.start() + 1, mv.end() + 1));
    }
    out
}

fn log_replay(solution: &Solution) {
    let geometry = solution.best.geometry();
    let mut board = Board::with_hole(geometry, solution.start_hole);
    log::debug!(
        "opening with hole {} empty:\n{}",
        solution.start_hole + 1,
        draw_board(&board, None)
    );

    for &mv in solution.best.history() {
        board = board.execute_move(mv);
        log::debug!("{mv}:\n{}", draw_board(&board, Some(mv)));
    }

    log::debug!(
        "{} pegs left, {} positions explored",
        board.num_pegs(),
        solution.stats.explored
    );
}

/// Draw the board as a triangle. If the board was reached through `jump`, the
/// peg that moved is green and the two holes it emptied are red.
pub fn draw_board(board: &Board, jump: Option<Move>) -> String {
    board.render(|hole, cell| match jump {
        Some(j) if j.end() == hole => cell.green().to_string(),
        Some(j) if j.start() == hole || j.middle() == hole => cell.on_red().to_string(),
        _ => cell.to_string(),
    })
}
