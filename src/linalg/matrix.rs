// Dense rational matrix and reduced row-echelon form.

use std::fmt;

use super::LinalgError;
use super::rational::Rational;

/// Row-major matrix of exact rationals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Rational>,
}

impl Matrix {
    /// Build a matrix from integer rows. All rows must have the same length.
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, LinalgError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(LinalgError::Ragged {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend(row.iter().map(|&v| Rational::from(v)));
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Rational {
        self.data[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, value: Rational) {
        self.data[row * self.cols + col] = value;
    }

    pub fn row(&self, row: usize) -> &[Rational] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Append `column` as a new rightmost column.
    pub fn augment(&self, column: &[i64]) -> Result<Self, LinalgError> {
        if column.len() != self.rows {
            return Err(LinalgError::Dimension {
                rows: self.rows,
                target: column.len(),
            });
        }
        let cols = self.cols + 1;
        let mut data = Vec::with_capacity(self.rows * cols);
        for (r, &value) in column.iter().enumerate() {
            data.extend_from_slice(self.row(r));
            data.push(Rational::from(value));
        }
        Ok(Self {
            rows: self.rows,
            cols,
            data,
        })
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for c in 0..self.cols {
            self.data.swap(a * self.cols + c, b * self.cols + c);
        }
    }

    /// Reduced row-echelon form and the pivot column of each non-zero row.
    pub fn rref(&self) -> Result<(Matrix, Vec<usize>), LinalgError> {
        let mut m = self.clone();
        let mut pivots = Vec::new();
        let mut pivot_row = 0;

        for col in 0..m.cols {
            if pivot_row == m.rows {
                break;
            }
            let Some(found) = (pivot_row..m.rows).find(|&r| !m.get(r, col).is_zero()) else {
                continue;
            };
            m.swap_rows(pivot_row, found);

            let scale = m.get(pivot_row, col).recip().ok_or(LinalgError::Overflow)?;
            for c in col..m.cols {
                let v = m
                    .get(pivot_row, c)
                    .checked_mul(scale)
                    .ok_or(LinalgError::Overflow)?;
                m.set(pivot_row, c, v);
            }

            for r in 0..m.rows {
                if r == pivot_row {
                    continue;
                }
                let factor = m.get(r, col);
                if factor.is_zero() {
                    continue;
                }
                for c in col..m.cols {
                    let v = factor
                        .checked_mul(m.get(pivot_row, c))
                        .and_then(|p| m.get(r, c).checked_sub(p))
                        .ok_or(LinalgError::Overflow)?;
                    m.set(r, c, v);
                }
            }

            pivots.push(col);
            pivot_row += 1;
        }

        Ok((m, pivots))
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.data.iter().map(|v| v.to_string()).collect();
        let width = cells.iter().map(|s| s.len()).max().unwrap_or(0);
        for r in 0..self.rows {
            let row = &cells[r * self.cols..(r + 1) * self.cols];
            let line: Vec<String> = row.iter().map(|s| format!("{:>width$}", s)).collect();
            writeln!(f, "[{}]", line.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(m: &Matrix) -> Vec<Vec<i128>> {
        (0..m.rows())
            .map(|r| {
                m.row(r)
                    .iter()
                    .map(|v| {
                        assert!(v.is_integer(), "non-integer entry {v}");
                        v.numer()
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_rref_full_rank() {
        let m = Matrix::from_rows(&[
            [1i64, 0, 1, 1, 0, 7],
            [0, 0, 0, 1, 1, 5],
            [1, 1, 0, 1, 1, 12],
            [1, 1, 0, 0, 1, 7],
            [1, 0, 0, 0, 1, 2],
        ])
        .unwrap();

        let (reduced, pivots) = m.rref().unwrap();

        assert_eq!(pivots, vec![0, 1, 2, 3, 4]);
        assert_eq!(
            ints(&reduced),
            vec![
                vec![1, 0, 0, 0, 0, 2],
                vec![0, 1, 0, 0, 0, 5],
                vec![0, 0, 1, 0, 0, 0],
                vec![0, 0, 0, 1, 0, 5],
                vec![0, 0, 0, 0, 1, 0],
            ]
        );
    }

    #[test]
    fn test_rref_rank_deficient() {
        let m = Matrix::from_rows(&[
            [1i64, 1, 1, 0, 0, 10],
            [0, 0, 0, 1, 1, 11],
            [1, 0, 1, 1, 0, 11],
            [1, 1, 0, 0, 0, 5],
            [1, 1, 1, 0, 0, 10],
            [0, 0, 1, 0, 0, 5],
        ])
        .unwrap();

        let (reduced, pivots) = m.rref().unwrap();

        assert_eq!(pivots, vec![0, 1, 2, 3]);
        assert_eq!(
            ints(&reduced),
            vec![
                vec![1, 0, 0, 0, -1, -5],
                vec![0, 1, 0, 0, 1, 10],
                vec![0, 0, 1, 0, 0, 5],
                vec![0, 0, 0, 1, 1, 11],
                vec![0, 0, 0, 0, 0, 0],
                vec![0, 0, 0, 0, 0, 0],
            ]
        );
    }

    #[test]
    fn test_rref_fractions() {
        let m = Matrix::from_rows(&[[2i64, 1], [4, 3]]).unwrap();
        let (reduced, _) = m.rref().unwrap();
        assert_eq!(reduced.get(0, 0), Rational::ONE);
        assert_eq!(reduced.get(0, 1), Rational::ZERO);

        let m = Matrix::from_rows(&[[2i64, 1]]).unwrap();
        let (reduced, _) = m.rref().unwrap();
        assert_eq!(reduced.get(0, 1), Rational::new(1, 2));
    }

    #[test]
    fn test_rref_large_entries_stay_exact() {
        let m = Matrix::from_rows(&[[3037000500i64, 1, 1], [1, 3037000500, 2]]).unwrap();
        let (reduced, pivots) = m.rref().unwrap();
        assert_eq!(pivots, vec![0, 1]);
        assert_eq!(reduced.get(0, 0), Rational::ONE);
        assert_eq!(reduced.get(1, 1), Rational::ONE);
        assert!(reduced.get(0, 1).is_zero());
    }

    #[test]
    fn test_rref_overflow_is_an_error() {
        let big = i64::MAX;
        let m = Matrix::from_rows(&[[big, 1, 0], [1, big, 1], [0, 1, big]]).unwrap();
        assert_eq!(m.rref().unwrap_err(), LinalgError::Overflow);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let rows: Vec<Vec<i64>> = vec![vec![1, 2], vec![3]];
        assert!(matches!(
            Matrix::from_rows(&rows),
            Err(LinalgError::Ragged { row: 1, .. })
        ));
    }

    #[test]
    fn test_augment_dimension_mismatch() {
        let m = Matrix::from_rows(&[[1i64, 2], [3, 4]]).unwrap();
        assert!(matches!(
            m.augment(&[1]),
            Err(LinalgError::Dimension { rows: 2, target: 1 })
        ));
    }
}
