// Command-line interface.
// Running with no subcommand fetches every scheduled input.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::driver::Selection;

#[derive(Parser, Debug)]
#[command(name = "aocfetch", version, about)]
pub struct Cli {
    /// Config file to use instead of the default lookup
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download scheduled puzzle inputs into the cache
    Fetch(FetchArgs),
    /// Print a cached puzzle input
    Show(ShowArgs),
    /// Reduce an augmented matrix and classify the linear system
    Solve(SolveArgs),
}

#[derive(Args, Debug, Default)]
pub struct FetchArgs {
    /// Only fetch this year (must be in the schedule)
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Only fetch this day
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=25))]
    pub day: Option<u32>,
}

impl FetchArgs {
    pub fn selection(&self) -> Selection {
        Selection {
            year: self.year,
            day: self.day,
        }
    }
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[arg(short, long)]
    pub year: i32,

    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=25))]
    pub day: u32,
}

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// File holding the augmented matrix; reads stdin when omitted
    pub file: Option<PathBuf>,
}
