//! Command-line interface: load, solve, print and optionally save a crossword

use crate::algorithm::search::{SearchStatistics, Solver};
use crate::algorithm::solution::Solution;
use crate::io::configuration::NO_SOLUTION_MESSAGE;
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_solution_as_png;
use crate::io::loader::{load_structure, load_words};
use crate::io::progress::{SearchProgress, describe};
use crate::io::render::render_text;
use crate::puzzle::model::Puzzle;
use clap::Parser;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "crossfill")]
#[command(
    author,
    version,
    about = "Fill a crossword structure from a word list"
)]
/// Command-line arguments for the crossword filler
pub struct Cli {
    /// Structure file (`_` for fillable cells, anything else for blocks)
    #[arg(value_name = "STRUCTURE")]
    pub structure: PathBuf,

    /// Word list file with one word per line
    #[arg(value_name = "WORDS")]
    pub words: PathBuf,

    /// Optional PNG file to render the filled grid into
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// What a run produced
#[derive(Debug)]
pub struct RunReport {
    /// The fill, or `None` when the puzzle has no solution
    pub solution: Option<Solution>,
    /// Text printed to stdout
    pub rendered: String,
    /// Search counters
    pub statistics: SearchStatistics,
    /// Wall-clock time spent solving
    pub elapsed: Duration,
}

/// Orchestrates one solve from the command-line arguments
pub struct CrosswordRunner {
    cli: Cli,
}

impl CrosswordRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load inputs, solve, print the grid and save the image if requested
    ///
    /// # Errors
    ///
    /// Returns an error if the output path is not a PNG, an input file cannot
    /// be read or parsed, the puzzle model is defective, or the image cannot be
    /// written
    // Allow print for the solved grid and user feedback on stderr
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    pub fn process(&mut self) -> Result<RunReport> {
        self.validate_output()?;

        let structure = load_structure(&self.cli.structure)?;
        let words = load_words(&self.cli.words)?;
        let puzzle = Puzzle::from_structure(structure)?;

        let start_time = Instant::now();
        let mut progress = if self.cli.should_show_progress() {
            SearchProgress::new()
        } else {
            SearchProgress::hidden()
        };
        let mut solver = Solver::new(&puzzle, &words);
        let outcome = solver.run(&mut progress);
        progress.finish();
        let solution = outcome?;
        let statistics = solver.statistics();
        let elapsed = start_time.elapsed();

        let rendered = solution.as_ref().map_or_else(
            || format!("{NO_SOLUTION_MESSAGE}\n"),
            |solution| render_text(&puzzle, solution),
        );
        print!("{rendered}");

        if let (Some(solution), Some(output)) = (&solution, &self.cli.output) {
            export_solution_as_png(&puzzle, solution, output)?;
        }

        if !self.cli.quiet {
            eprintln!("{} in {:.2?}", describe(&statistics), elapsed);
        }

        Ok(RunReport {
            solution,
            rendered,
            statistics,
            elapsed,
        })
    }

    fn validate_output(&self) -> Result<()> {
        let Some(output) = &self.cli.output else {
            return Ok(());
        };

        let is_png = output
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if is_png {
            Ok(())
        } else {
            Err(invalid_parameter(
                "output",
                &output.display(),
                &"output image must be a .png file",
            ))
        }
    }
}
