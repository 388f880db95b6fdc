//! # Listmark Testing
//!
//! Testing utilities and helpers for Listmark.
//!
//! This crate provides:
//! - Deterministic implementations of Environment traits
//! - A Given-When-Then builder for reducers
//!
//! ## Example
//!
//! ```ignore
//! use listmark_testing::{test_clock, ReducerTest};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(TodoEnvironment::new(Arc::new(test_clock())))
//!     .given_state(TodoState::new())
//!     .when_action(TodoAction::CreateList { .. })
//!     .then_state(|state| assert_eq!(state.lists.len(), 1))
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use listmark_core::environment::Clock;


/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};
    use chrono::FixedOffset;
    use listmark_core::environment::{Calendar, DayBoundary};
    use std::sync::Arc;

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use listmark_testing::mocks::FixedClock;
    /// use listmark_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }

    /// Calendar on [`test_clock`] with a UTC day boundary, so "today" is
    /// always 2025-01-01 regardless of the host timezone.
    ///
    /// # Panics
    ///
    /// Never in practice; a zero offset is always valid.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_calendar() -> Calendar {
        let utc = FixedOffset::east_opt(0).expect("zero offset is valid");
        Calendar::new(Arc::new(test_clock()), DayBoundary::Offset(utc))
    }
}

// Re-export commonly used items
pub use mocks::{test_calendar, test_clock, FixedClock};
pub use reducer_test::ReducerTest;
