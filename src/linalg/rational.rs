// Exact rational numbers for row reduction.
// Arithmetic is checked: every operation returns None instead of overflowing.

use std::fmt;

/// A fraction over `i128`, always stored in lowest terms with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    num: i128,
    den: i128,
}

fn gcd(a: i128, b: i128) -> u128 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl Rational {
    pub const ZERO: Rational = Rational { num: 0, den: 1 };
    #[cfg(test)]
    pub(crate) const ONE: Rational = Rational { num: 1, den: 1 };

    /// Build `num / den` from machine integers. Panics if `den` is zero.
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "rational with zero denominator");
        let (num, den) = (i128::from(num), i128::from(den));
        // Both operands fit in i64, so the gcd is at most 2^63.
        let g = gcd(num, den) as i128;
        let sign = den.signum();
        Self {
            num: sign * num / g,
            den: sign * den / g,
        }
    }

    /// Normalize `num / den`, or None if `den` is zero or the result does not fit.
    fn reduce(num: i128, den: i128) -> Option<Self> {
        if den == 0 {
            return None;
        }
        let g = i128::try_from(gcd(num, den)).ok()?;
        let (num, den) = (num / g, den / g);
        if den < 0 {
            Some(Self {
                num: num.checked_neg()?,
                den: den.checked_neg()?,
            })
        } else {
            Some(Self { num, den })
        }
    }

    #[cfg(test)]
    pub(crate) fn numer(&self) -> i128 {
        self.num
    }

    #[cfg(test)]
    pub(crate) fn is_integer(&self) -> bool {
        self.den == 1
    }

    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    /// `1 / self`, or None for zero.
    pub fn recip(&self) -> Option<Self> {
        Self::reduce(self.den, self.num)
    }

    pub fn checked_neg(self) -> Option<Self> {
        Some(Self {
            num: self.num.checked_neg()?,
            den: self.den,
        })
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        // Work over the lcm of the denominators.
        let g = i128::try_from(gcd(self.den, rhs.den)).ok()?;
        let num = self
            .num
            .checked_mul(rhs.den / g)?
            .checked_add(rhs.num.checked_mul(self.den / g)?)?;
        Self::reduce(num, (self.den / g).checked_mul(rhs.den)?)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.checked_add(rhs.checked_neg()?)
    }

    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        // Cross-reduce first so products stay as small as possible.
        let g1 = i128::try_from(gcd(self.num, rhs.den)).ok()?.max(1);
        let g2 = i128::try_from(gcd(rhs.num, self.den)).ok()?.max(1);
        let num = (self.num / g1).checked_mul(rhs.num / g2)?;
        let den = (self.den / g2).checked_mul(rhs.den / g1)?;
        Self::reduce(num, den)
    }

    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        self.checked_mul(rhs.recip()?)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self {
            num: i128::from(value),
            den: 1,
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}
