//! Graded assertions for the internal invariants of the solver.
//!
//! The level is fixed at compile time. Simple checks are always active, the more expensive ones
//! are enabled by the `debug-checks` feature (and in tests).

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const KLEUR_ASSERT_LEVEL_DEFINITION: u8 = KLEUR_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const KLEUR_ASSERT_LEVEL_DEFINITION: u8 = KLEUR_ASSERT_ADVANCED;

pub const KLEUR_ASSERT_SIMPLE: u8 = 1;
pub const KLEUR_ASSERT_MODERATE: u8 = 2;
pub const KLEUR_ASSERT_ADVANCED: u8 = 3;

#[macro_export]
#[doc(hidden)]
macro_rules! kleur_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::KLEUR_ASSERT_LEVEL_DEFINITION >= $crate::asserts::KLEUR_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! kleur_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::KLEUR_ASSERT_LEVEL_DEFINITION >= $crate::asserts::KLEUR_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! kleur_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::KLEUR_ASSERT_LEVEL_DEFINITION >= $crate::asserts::KLEUR_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! kleur_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::KLEUR_ASSERT_LEVEL_DEFINITION >= $crate::asserts::KLEUR_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}
