#[cfg(test)]
#[path = "../../tests/unit/models/weight_test.rs"]
mod weight_test;

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::ops::Add;

/// Represents an integral cost of an edge, a path or a bound.
pub type Cost = i64;

/// A cost which can also be infinite: a missing edge, a masked matrix cell or a vertex which is
/// not reached yet. Every finite value is less than `Infinite`. Operators never overflow: a sum
/// out of `Cost` range is `Infinite`, use [`Weight::checked_add`] to tell it apart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "Option<Cost>")]
pub enum Weight {
    /// A finite value.
    Finite(Cost),
    /// An infinite value, absorbs everything added to it.
    #[default]
    Infinite,
}

impl Weight {
    /// Returns true if the weight is finite.
    pub fn is_finite(&self) -> bool {
        matches!(self, Weight::Finite(_))
    }

    /// Returns the finite value, if any.
    pub fn finite(&self) -> Option<Cost> {
        match self {
            Weight::Finite(value) => Some(*value),
            Weight::Infinite => None,
        }
    }

    /// Adds a finite cost, returns `None` when the sum does not fit into `Cost`.
    pub fn checked_add(self, rhs: Cost) -> Option<Weight> {
        match self {
            Weight::Finite(value) => value.checked_add(rhs).map(Weight::Finite),
            Weight::Infinite => Some(Weight::Infinite),
        }
    }
}

impl From<Cost> for Weight {
    fn from(value: Cost) -> Self {
        Weight::Finite(value)
    }
}

impl From<Option<Cost>> for Weight {
    fn from(value: Option<Cost>) -> Self {
        value.map_or(Weight::Infinite, Weight::Finite)
    }
}

impl From<Weight> for Option<Cost> {
    fn from(value: Weight) -> Self {
        value.finite()
    }
}

impl Add<Cost> for Weight {
    type Output = Weight;

    fn add(self, rhs: Cost) -> Self::Output {
        match self {
            Weight::Finite(value) => value.checked_add(rhs).map_or(Weight::Infinite, Weight::Finite),
            Weight::Infinite => Weight::Infinite,
        }
    }
}

impl Add for Weight {
    type Output = Weight;

    fn add(self, rhs: Weight) -> Self::Output {
        match (self, rhs) {
            (left, Weight::Finite(right)) => left + right,
            _ => Weight::Infinite,
        }
    }
}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Weight::Finite(left), Weight::Finite(right)) => left.cmp(right),
            (Weight::Finite(_), Weight::Infinite) => Ordering::Less,
            (Weight::Infinite, Weight::Finite(_)) => Ordering::Greater,
            (Weight::Infinite, Weight::Infinite) => Ordering::Equal,
        }
    }
}

impl Display for Weight {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Weight::Finite(value) => write!(f, "{value}"),
            Weight::Infinite => write!(f, "∞"),
        }
    }
}
