// Cache path utilities.
// Builds the <base>/<year>/day_<DD>.txt layout for cached puzzle inputs.

use std::path::{Path, PathBuf};

use crate::puzzle::PuzzleId;

/// Default base directory for cached inputs, relative to the working directory.
pub const DEFAULT_INPUT_DIR: &str = "input";

/// Path to a year's directory.
pub fn year_dir(base: &Path, year: i32) -> PathBuf {
    base.join(year.to_string())
}

/// File name for a day's input, with the day zero-padded to two digits.
pub fn day_file_name(day: u32) -> String {
    format!("day_{:02}.txt", day)
}

/// Path to a puzzle's cached input file.
pub fn input_path(base: &Path, id: PuzzleId) -> PathBuf {
    year_dir(base, id.year()).join(day_file_name(id.day()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_file_name_is_zero_padded() {
        assert_eq!(day_file_name(1), "day_01.txt");
        assert_eq!(day_file_name(12), "day_12.txt");
    }

    #[test]
    fn test_input_path() {
        let id = PuzzleId::new(2024, 1).unwrap();
        let path = input_path(Path::new(DEFAULT_INPUT_DIR), id);
        assert_eq!(path, Path::new("input/2024/day_01.txt"));

        let id = PuzzleId::new(2025, 12).unwrap();
        let path = input_path(Path::new("/tmp/aoc"), id);
        assert!(path.ends_with("2025/day_12.txt"));
    }
}
