//! # Listmark Core
//!
//! Core traits and types shared by every Listmark crate.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state owned by a `Store`
//! - **Action**: All possible inputs to a reducer (commands and events)
//! - **Reducer**: `(State, Action, Environment) → Result<Event, Error>`
//! - **Environment**: Injected dependencies (the [`environment::Clock`])
//! - **Calendar**: Turns the clock's instant into the calendar date used for
//!   "due today" and "overdue" decisions
//!
//! ## Example
//!
//! ```ignore
//! use listmark_core::reducer::Reducer;
//!
//! impl Reducer for TodoReducer {
//!     type State = TodoState;
//!     type Action = TodoAction;
//!     type Environment = TodoEnvironment;
//!     type Error = TodoError;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut TodoState,
//!         action: TodoAction,
//!         env: &TodoEnvironment,
//!     ) -> Result<TodoAction, TodoError> {
//!         // Validate, build the event, apply it
//!     }
//! }
//! ```

/// Reducer module - the core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → Event`.
/// They hold all validation and state transitions and never perform I/O.
pub mod reducer {
    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes (commands and events)
    /// - `Environment`: The injected dependencies this reducer needs
    /// - `Error`: Why a command was rejected
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// The rejection type for invalid commands
        type Error;

        /// Reduce an action into a state change
        ///
        /// 1. Validates the action against the current state
        /// 2. Builds the resulting event
        /// 3. Applies the event to state in place
        ///
        /// Returns the applied event. Events passed in directly (replay)
        /// are applied as-is and returned.
        ///
        /// # Errors
        ///
        /// Returns `Self::Error` when a command fails validation. State is
        /// left untouched in that case.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Result<Self::Action, Self::Error>;
    }
}

/// Environment module - dependency injection traits
///
/// All sources of nondeterminism (time, the local timezone) sit behind
/// these types so reducers and views stay testable.
pub mod environment {
    use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};
    use serde::{Deserialize, Serialize};
    use std::fmt;
    use std::str::FromStr;
    use std::sync::Arc;
    use thiserror::Error;

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // Test - fixed time for deterministic tests
    /// struct FixedClock { time: DateTime<Utc> }
    /// impl Clock for FixedClock {
    ///     fn now(&self) -> DateTime<Utc> {
    ///         self.time
    ///     }
    /// }
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// Which timezone decides where one calendar day ends.
    ///
    /// Parsed from `local`, `utc` or a `±HH:MM` offset.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    #[serde(into = "String", try_from = "String")]
    pub enum DayBoundary {
        /// The executing process's local timezone
        #[default]
        Local,
        /// A fixed offset from UTC
        Offset(FixedOffset),
    }

    /// Error returned when a day boundary cannot be parsed
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    #[error("invalid day boundary '{0}': expected 'local', 'utc' or an offset like '+02:00'")]
    pub struct DayBoundaryError(pub String);

    impl DayBoundary {
        /// Calendar date of `now` on this boundary.
        #[must_use]
        pub fn date_of(&self, now: DateTime<Utc>) -> NaiveDate {
            match self {
                Self::Local => now.with_timezone(&Local).date_naive(),
                Self::Offset(offset) => now.with_timezone(offset).date_naive(),
            }
        }
    }

    impl FromStr for DayBoundary {
        type Err = DayBoundaryError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let trimmed = s.trim();
            match trimmed.to_ascii_lowercase().as_str() {
                "local" | "" => Ok(Self::Local),
                "utc" | "z" => FixedOffset::east_opt(0)
                    .map(Self::Offset)
                    .ok_or_else(|| DayBoundaryError(s.to_string())),
                _ => trimmed
                    .parse::<FixedOffset>()
                    .map(Self::Offset)
                    .map_err(|_| DayBoundaryError(s.to_string())),
            }
        }
    }

    impl fmt::Display for DayBoundary {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Local => write!(f, "local"),
                Self::Offset(offset) => write!(f, "{offset}"),
            }
        }
    }

    impl From<DayBoundary> for String {
        fn from(boundary: DayBoundary) -> Self {
            boundary.to_string()
        }
    }

    impl TryFrom<String> for DayBoundary {
        type Error = DayBoundaryError;

        fn try_from(value: String) -> Result<Self, Self::Error> {
            value.parse()
        }
    }

    /// Source of "today" for date comparisons.
    ///
    /// Combines a [`Clock`] with a [`DayBoundary`] so the reference date is
    /// explicit instead of whatever the host happens to be configured with.
    #[derive(Clone)]
    pub struct Calendar {
        clock: Arc<dyn Clock>,
        boundary: DayBoundary,
    }

    impl Calendar {
        /// Creates a calendar reading time from `clock`
        #[must_use]
        pub fn new(clock: Arc<dyn Clock>, boundary: DayBoundary) -> Self {
            Self { clock, boundary }
        }

        /// The current calendar date
        #[must_use]
        pub fn today(&self) -> NaiveDate {
            self.boundary.date_of(self.clock.now())
        }
    }

    impl fmt::Debug for Calendar {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("Calendar")
                .field("boundary", &self.boundary)
                .finish_non_exhaustive()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::environment::{Calendar, Clock, DayBoundary};
    use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
    use std::sync::Arc;

    struct At(DateTime<Utc>);

    impl Clock for At {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn late_evening_utc() -> Arc<dyn Clock> {
        Arc::new(At(DateTime::parse_from_rfc3339("2024-01-05T23:30:00Z")
            .unwrap()
            .with_timezone(&Utc)))
    }

    #[test]
    fn parses_day_boundaries() {
        assert_eq!("local".parse::<DayBoundary>().unwrap(), DayBoundary::Local);
        assert_eq!("".parse::<DayBoundary>().unwrap(), DayBoundary::Local);
        assert_eq!(
            "UTC".parse::<DayBoundary>().unwrap(),
            DayBoundary::Offset(FixedOffset::east_opt(0).unwrap())
        );
        assert_eq!(
            "+02:00".parse::<DayBoundary>().unwrap(),
            DayBoundary::Offset(FixedOffset::east_opt(7200).unwrap())
        );
        assert!("tomorrow".parse::<DayBoundary>().is_err());
    }

    #[test]
    fn offset_moves_the_calendar_date() {
        let utc = Calendar::new(late_evening_utc(), "utc".parse().unwrap());
        assert_eq!(utc.today(), NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());

        let ahead = Calendar::new(late_evening_utc(), "+02:00".parse().unwrap());
        assert_eq!(ahead.today(), NaiveDate::from_ymd_opt(2024, 1, 6).unwrap());

        let behind = Calendar::new(late_evening_utc(), "-05:00".parse().unwrap());
        assert_eq!(behind.today(), NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn day_boundary_display_parses_back() {
        let boundary: DayBoundary = "-03:30".parse().unwrap();
        assert_eq!(boundary.to_string().parse::<DayBoundary>().unwrap(), boundary);
    }
}
