use std::fmt::Debug;
use std::ops::Range;

use rand::Rng;
use rand::SeedableRng;

use crate::kleur_assert_moderate;

/// Abstraction for randomness, in order to swap out different sources of randomness.
///
/// Local search draws all of its random choices through this trait; tests provide a scripted
/// implementation so that the random walk of the search is reproducible.
pub trait Random: Debug {
    /// Generates a random usize in the provided range with equal probability; this can be seen as
    /// sampling from a uniform distribution in the range `[range.start, range.end)`
    ///
    /// # Example
    /// ```rust
    /// # use kleur_core::rand::rngs::SmallRng;
    /// # use kleur_core::rand::SeedableRng;
    /// # use kleur_core::Random;
    /// let mut rng = SmallRng::seed_from_u64(42);
    /// let palette = ["red", "green", "blue"];
    /// let selected_index = rng.generate_usize_in_range(0..palette.len());
    /// assert!(selected_index < palette.len());
    /// ```
    fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize;
}

// Any "regular" random generator can be used where an implementation of `Random` is expected.
impl<T> Random for T
where
    T: SeedableRng + Rng + Debug,
{
    fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize {
        kleur_assert_moderate!(!range.is_empty(), "cannot sample from the empty range {range:?}");

        self.gen_range(range)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::ops::Range;

    use super::Random;
    use crate::kleur_assert_simple;

    /// A test "random" generator which returns the provided `usize`s in order. Asking for more
    /// values than were provided results in a panic.
    #[derive(Debug, Default)]
    pub(crate) struct TestRandom {
        pub(crate) usizes: Vec<usize>,
    }

    impl TestRandom {
        pub(crate) fn with_usizes(usizes: impl IntoIterator<Item = usize>) -> Self {
            TestRandom {
                usizes: usizes.into_iter().collect(),
            }
        }

        pub(crate) fn is_exhausted(&self) -> bool {
            self.usizes.is_empty()
        }
    }

    impl Random for TestRandom {
        fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize {
            let selected = self.usizes.remove(0);
            kleur_assert_simple!(
                range.contains(&selected),
                "The selected element by `TestRandom` ({selected}) is not in the provided range ({range:?}), please ensure that your test cases are correctly defined"
            );
            selected
        }
    }
}
