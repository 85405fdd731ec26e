#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use rand::prelude::*;
use rand::rngs::SmallRng;
use std::cell::RefCell;

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i64, max: i64) -> i64;

    /// Tests probability value in (0., 1.) range.
    fn is_hit(&self, probability: f64) -> bool;
}

/// A default random implementation backed by a small, fast generator.
pub struct DefaultRandom {
    rng: RefCell<SmallRng>,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` with repeatable behavior.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { rng: RefCell::new(SmallRng::seed_from_u64(seed)) }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: RefCell::new(SmallRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i64, max: i64) -> i64 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.rng.borrow_mut().gen_range(min..=max)
    }

    fn is_hit(&self, probability: f64) -> bool {
        if probability.is_nan() {
            return false;
        }

        self.rng.borrow_mut().gen_bool(probability.clamp(0., 1.))
    }
}
