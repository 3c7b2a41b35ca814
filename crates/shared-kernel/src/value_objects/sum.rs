// crates/shared-kernel/src/value_objects/sum.rs
use std::iter;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Running total of accepted values.
///
/// Individual values are 32-bit; the total is widened to `i64` so it cannot
/// overflow for any realistic number of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sum(i64);

impl Sum {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl Default for Sum {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add<i32> for Sum {
    type Output = Self;

    fn add(self, rhs: i32) -> Self::Output {
        Self(self.0 + i64::from(rhs))
    }
}

impl From<i32> for Sum {
    fn from(value: i32) -> Self {
        Self(i64::from(value))
    }
}

impl iter::Sum<i32> for Sum {
    fn sum<I: Iterator<Item = i32>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl PartialEq<i64> for Sum {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

mod display {
    use std::fmt;

    use super::Sum;

    impl fmt::Display for Sum {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
