// Fetch driver.
// Walks the schedule in order, fetching and caching each day's input one at a time.

use std::path::Path;

use crate::aoc::AocClient;
use crate::cache::{self, WriteOutcome};
use crate::config::YearSchedule;
use crate::error::{AocError, Result};
use crate::puzzle::PuzzleId;

/// Something that can produce a puzzle's input.
///
/// `Ok(None)` means the input is not available (yet); errors abort the run.
#[allow(async_fn_in_trait)]
pub trait InputSource {
    async fn fetch_input(&self, id: PuzzleId) -> Result<Option<String>>;
}

impl InputSource for AocClient {
    async fn fetch_input(&self, id: PuzzleId) -> Result<Option<String>> {
        AocClient::fetch_input(self, id).await
    }
}

/// What happened to a single puzzle during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Cached,
    SkippedExists,
    NotAvailable,
}

/// Counts of outcomes for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub cached: usize,
    pub skipped_exists: usize,
    pub not_available: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Cached => self.cached += 1,
            Outcome::SkippedExists => self.skipped_exists += 1,
            Outcome::NotAvailable => self.not_available += 1,
        }
    }
}

/// Optional narrowing of the schedule to one year and/or one day.
#[derive(Debug, Clone, Copy, Default)]
pub struct Selection {
    pub year: Option<i32>,
    pub day: Option<u32>,
}

/// Expand a schedule into the ordered list of puzzles to fetch.
pub fn plan(schedule: &[YearSchedule], selection: Selection) -> Result<Vec<PuzzleId>> {
    let entries: Vec<&YearSchedule> = schedule
        .iter()
        .filter(|entry| selection.year.is_none_or(|year| entry.year == year))
        .collect();

    if let Some(year) = selection.year {
        if entries.is_empty() {
            return Err(AocError::Config(format!(
                "year {} is not in the schedule",
                year
            )));
        }
    }

    let mut ids = Vec::new();
    for entry in entries {
        match selection.day {
            Some(day) if day > entry.last_day => {
                tracing::debug!(year = entry.year, day, "Day beyond configured range");
            }
            Some(day) => ids.push(PuzzleId::new(entry.year, day)?),
            None => {
                for day in 1..=entry.last_day {
                    ids.push(PuzzleId::new(entry.year, day)?);
                }
            }
        }
    }

    if let Some(day) = selection.day {
        if ids.is_empty() {
            return Err(AocError::Config(format!(
                "day {} is beyond the last configured day of every selected year",
                day
            )));
        }
    }
    Ok(ids)
}

/// Fetch and cache a single puzzle input.
pub async fn fetch_one<S: InputSource>(
    source: &S,
    input_dir: &Path,
    id: PuzzleId,
) -> Result<Outcome> {
    let path = cache::input_path(input_dir, id);

    if cache::exists(&path) {
        tracing::info!(puzzle = %id, path = %path.display(), "Already cached, skipping");
        return Ok(Outcome::SkippedExists);
    }

    let Some(text) = source.fetch_input(id).await? else {
        return Ok(Outcome::NotAvailable);
    };

    match cache::write_if_absent(&path, &text)? {
        WriteOutcome::Written => {
            tracing::info!(
                puzzle = %id,
                path = %path.display(),
                bytes = text.len(),
                "Cached input"
            );
            Ok(Outcome::Cached)
        }
        WriteOutcome::AlreadyExists => {
            tracing::info!(puzzle = %id, path = %path.display(), "Already cached, skipping");
            Ok(Outcome::SkippedExists)
        }
    }
}

/// Fetch every planned puzzle in order. The first fatal error stops the run.
pub async fn run<S: InputSource>(
    source: &S,
    input_dir: &Path,
    ids: &[PuzzleId],
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    for &id in ids {
        let outcome = fetch_one(source, input_dir, id).await?;
        summary.record(outcome);
    }
    Ok(summary)
}
