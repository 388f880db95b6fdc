//! # Listmark Runtime
//!
//! The [`Store`] owns domain state and runs a reducer over it.
//!
//! Every action is reduced under the state's write lock, so mutations are
//! serialized. [`Store::send_and_read`] keeps that lock while the caller
//! derives its response, which means whatever is computed from the state
//! (such as a list's incomplete count) observes exactly the post-mutation
//! snapshot.
//!
//! ## Example
//!
//! ```ignore
//! use listmark_runtime::Store;
//!
//! let store = Store::new(TodoState::new(), TodoReducer::new(), env);
//!
//! // Mutate and read the committed state in one critical section
//! let remaining = store
//!     .send_and_read(TodoAction::ToggleTodo { id }, |state, _event| {
//!         state.incomplete_count(&list_id)
//!     })
//!     .await?;
//!
//! // Read state
//! let lists = store.state(|s| s.lists.len()).await;
//! ```

use listmark_core::reducer::Reducer;
use std::fmt::Display;
use std::sync::Arc;
use tokio::sync::RwLock;

pub use store::Store;

/// The Store runtime
pub mod store {
    use super::{Arc, Display, Reducer, RwLock};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock` for concurrent access)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: R,
        environment: E,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
        R::Error: Display,
        A: Send + 'static,
        S: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
            }
        }

        /// Send an action through the reducer
        ///
        /// Returns the event the reducer applied.
        ///
        /// # Errors
        ///
        /// Returns the reducer's error when the action is rejected. State is
        /// unchanged in that case.
        #[tracing::instrument(skip_all, name = "store_send")]
        pub async fn send(&self, action: A) -> Result<A, R::Error> {
            let mut state = self.state.write().await;
            tracing::trace!("Acquired write lock on state");
            self.reduce_locked(&mut state, action)
        }

        /// Send an action and read the resulting state before the lock is released
        ///
        /// `f` receives the post-mutation state and the applied event. Nothing
        /// else can mutate the state between the reducer finishing and `f`
        /// returning.
        ///
        /// # Errors
        ///
        /// Returns the reducer's error when the action is rejected; `f` is not
        /// called then.
        #[tracing::instrument(skip_all, name = "store_send_and_read")]
        pub async fn send_and_read<F, T>(&self, action: A, f: F) -> Result<T, R::Error>
        where
            F: FnOnce(&S, &A) -> T,
        {
            let mut state = self.state.write().await;
            tracing::trace!("Acquired write lock on state");
            let event = self.reduce_locked(&mut state, action)?;
            Ok(f(&state, &event))
        }

        /// Read current state via a closure
        ///
        /// Access state through a closure to ensure the lock is released promptly:
        ///
        /// ```ignore
        /// let todo_count = store.state(|s| s.todos.len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&state)
        }

        fn reduce_locked(&self, state: &mut S, action: A) -> Result<A, R::Error> {
            metrics::counter!("store.commands.total").increment(1);

            let span = tracing::debug_span!("reducer_execution");
            let _enter = span.enter();

            let start = std::time::Instant::now();
            let result = self.reducer.reduce(state, action, &self.environment);
            metrics::histogram!("store.reducer.duration_seconds")
                .record(start.elapsed().as_secs_f64());

            match &result {
                Ok(_) => tracing::trace!("Reducer applied event"),
                Err(error) => {
                    metrics::counter!("store.commands.rejected").increment(1);
                    tracing::debug!(error = %error, "Reducer rejected action");
                }
            }

            result
        }
    }
}
