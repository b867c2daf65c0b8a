// Entry point for aocfetch.
// Dispatches the fetch, show and solve commands and reports fatal errors.

use std::fs;
use std::io::{self, Read};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use aocfetch::aoc::AocClient;
use aocfetch::cache;
use aocfetch::cli::{Cli, Command, FetchArgs, ShowArgs, SolveArgs};
use aocfetch::config::Config;
use aocfetch::credential;
use aocfetch::driver;
use aocfetch::linalg::{self, Solution};
use aocfetch::logger;
use aocfetch::puzzle::PuzzleId;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    match run(cli).await {
        Ok(_) => process::exit(0),
        Err(err) => {
            for cause in err.chain() {
                eprintln!("{}", cause);
            }
            process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None => fetch(&Config::load(cli.config.as_deref())?, &FetchArgs::default()).await?,
        Some(Command::Fetch(args)) => fetch(&Config::load(cli.config.as_deref())?, &args).await?,
        Some(Command::Show(args)) => show(&Config::load(cli.config.as_deref())?, &args)?,
        Some(Command::Solve(args)) => solve(&args)?,
    }
    Ok(())
}

async fn fetch(config: &Config, args: &FetchArgs) -> Result<()> {
    let ids = driver::plan(&config.schedule, args.selection())?;
    let credential = credential::load_or_prompt(&config.session_file, credential::prompt_stdin)?;
    let client = AocClient::new(&config.base_url, &credential, config.timeout())?;

    let summary = driver::run(&client, &config.input_dir, &ids).await?;
    tracing::info!(
        cached = summary.cached,
        skipped = summary.skipped_exists,
        not_available = summary.not_available,
        "Done"
    );
    Ok(())
}

fn show(config: &Config, args: &ShowArgs) -> Result<()> {
    let id = PuzzleId::new(args.year, args.day)?;
    let path = cache::input_path(&config.input_dir, id);
    match cache::read_input(&path)? {
        Some(text) => print!("{}", text),
        None => tracing::warn!(puzzle = %id, path = %path.display(), "No cached input"),
    }
    Ok(())
}

fn solve(args: &SolveArgs) -> Result<()> {
    let text = match &args.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Error reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Error reading matrix from stdin")?;
            buf
        }
    };

    let augmented = linalg::parse_augmented(&text).context("Error parsing matrix")?;
    let reduced = linalg::solve_augmented(&augmented).context("Error reducing matrix")?;

    print!("{}", reduced.rref);
    println!("pivots: {:?}", reduced.pivots);
    match reduced.solution {
        Solution::Unique(x) => println!("unique: {}", join(&x)),
        Solution::Underdetermined { particular, free } => {
            println!("underdetermined, free variables {:?}", free);
            println!("particular: {}", join(&particular));
        }
        Solution::Inconsistent => println!("inconsistent: no solution"),
    }
    Ok(())
}

fn join(values: &[linalg::Rational]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
