//! # Admin Console Testing
//!
//! Testing utilities for the admin console reducers and services.
//!
//! This crate provides:
//! - In-memory implementations of the API service traits
//! - A deterministic clock
//! - The [`ReducerTest`] Given-When-Then harness
//! - Project fixtures
//!
//! ## Example
//!
//! ```ignore
//! use admin_console_testing::{InMemoryProjectsApi, test_tracing};
//! use admin_console_runtime::Store;
//!
//! #[tokio::test(start_paused = true)]
//! async fn loads_first_page() {
//!     test_tracing();
//!     let api = InMemoryProjectsApi::seeded(25);
//!     let store = Store::new(ProjectsState::default(), ProjectsReducer, env(api.clone()));
//!
//!     store.send(ProjectsAction::Load).await?.wait().await;
//!
//!     assert_eq!(store.state(|s| s.items.len()).await, 10);
//!     assert_eq!(api.last_query().unwrap().skip, 0);
//! }
//! ```

use admin_console_core::environment::Clock;
use chrono::{DateTime, Utc};

pub mod api_mocks;
mod reducer_test;

/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use admin_console_testing::mocks::FixedClock;
    /// use admin_console_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
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
}

/// Test helpers and utilities
pub mod helpers {
    use tracing_subscriber::EnvFilter;

    /// Install a test-friendly tracing subscriber
    ///
    /// Honors `RUST_LOG` and defaults to `debug` for the console crates. Safe
    /// to call from every test; only the first call installs.
    pub fn test_tracing() {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("admin_console=debug,admin_console_api=debug"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }
}

// Re-export commonly used items
pub use api_mocks::{InMemoryProjectsApi, StaticDashboardApi, project_fixture};
pub use helpers::test_tracing;
pub use mocks::{FixedClock, test_clock};
pub use reducer_test::{ReducerTest, assertions};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        let time1 = clock.now();
        let time2 = clock.now();
        assert_eq!(time1, time2);
    }

    #[test]
    fn test_tracing_is_idempotent() {
        test_tracing();
        test_tracing();
    }
}
