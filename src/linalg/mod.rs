// Linear system solving over exact rationals.
// Reduces an augmented matrix to RREF and classifies the solution set.

pub mod matrix;
pub mod rational;

pub use matrix::Matrix;
pub use rational::Rational;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LinalgError {
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("target has {target} entries but the matrix has {rows} rows")]
    Dimension { rows: usize, target: usize },

    #[error("line {line}: {value:?} is not an integer")]
    Parse { line: usize, value: String },

    #[error("augmented matrix needs at least two columns")]
    TooNarrow,

    #[error("no matrix rows found")]
    Empty,

    #[error("intermediate value does not fit in 128 bits")]
    Overflow,
}

/// Classification of `A x = b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    /// Exactly one solution.
    Unique(Vec<Rational>),
    /// Infinitely many solutions. `particular` sets every free variable to zero.
    Underdetermined {
        particular: Vec<Rational>,
        free: Vec<usize>,
    },
    /// No solution.
    Inconsistent,
}

/// A reduced system together with its classification.
#[derive(Debug, Clone)]
pub struct Reduced {
    pub rref: Matrix,
    pub pivots: Vec<usize>,
    pub solution: Solution,
}

/// Solve `a x = target`.
pub fn solve(a: &Matrix, target: &[i64]) -> Result<Reduced, LinalgError> {
    let augmented = a.augment(target)?;
    solve_augmented(&augmented)
}

/// Solve a system given as `[A | b]`, where the last column is the target.
pub fn solve_augmented(augmented: &Matrix) -> Result<Reduced, LinalgError> {
    let (rref, pivots) = augmented.rref()?;
    let vars = augmented.cols().saturating_sub(1);

    let solution = if pivots.last() == Some(&vars) {
        Solution::Inconsistent
    } else {
        let mut particular = vec![Rational::ZERO; vars];
        for (row, &col) in pivots.iter().enumerate() {
            particular[col] = rref.get(row, vars);
        }
        let free: Vec<usize> = (0..vars).filter(|c| !pivots.contains(c)).collect();
        if free.is_empty() {
            Solution::Unique(particular)
        } else {
            Solution::Underdetermined { particular, free }
        }
    };

    Ok(Reduced {
        rref,
        pivots,
        solution,
    })
}

/// Parse an augmented matrix: one row per line, integers separated by
/// whitespace, commas or `|`. Blank lines and `#` comments are ignored.
pub fn parse_augmented(text: &str) -> Result<Matrix, LinalgError> {
    let mut rows = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let row = line
            .split(|c: char| c == ',' || c == '|' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<i64>().map_err(|_| LinalgError::Parse {
                    line: idx + 1,
                    value: s.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(LinalgError::Empty);
    }
    let matrix = Matrix::from_rows(&rows)?;
    if matrix.cols() < 2 {
        return Err(LinalgError::TooNarrow);
    }
    Ok(matrix)
}
