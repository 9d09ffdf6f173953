// crates/shared-kernel/src/value_objects/counts.rs
use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

/// Number of `<route>` elements, either for one file or summed over a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteCount(usize);

impl RouteCount {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Default for RouteCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for RouteCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<usize> for RouteCount {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl AddAssign for RouteCount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl AddAssign<usize> for RouteCount {
    fn add_assign(&mut self, rhs: usize) {
        self.0 += rhs;
    }
}

impl Sum for RouteCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a RouteCount> for RouteCount {
    fn sum<I: Iterator<Item = &'a RouteCount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<usize> for RouteCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<RouteCount> for usize {
    fn from(value: RouteCount) -> Self {
        value.0
    }
}

impl PartialEq<usize> for RouteCount {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

mod display {
    use std::fmt;

    use super::RouteCount;

    impl fmt::Display for RouteCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
