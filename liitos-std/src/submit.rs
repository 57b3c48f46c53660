//! # Submission Lifecycle
//!
//! One outstanding request per form action: `loading` goes up before the
//! request starts and is cleared by a guaranteed-run finalizer when it
//! settles, however it settles. A failure settles into `errors` exactly
//! once, as an [`Errors`] tree; view code reads both fields reactively
//! instead of catching anything.
//!
//! The engine does not block concurrent submission — submit controls are
//! expected to disable themselves while `loading()` is true. What it does
//! guard against is a *stale* settle: each run takes a generation token,
//! and a response that settles after a newer run began (the user
//! resubmitted, or navigated and submitted elsewhere) applies nothing.

use crate::lock;
use liitos_core::{ErrorResponse, Errors, errors_from_response};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct State {
    loading: bool,
    errors: Option<Errors>,
    generation: u64,
}

/// Tracks one form action's request lifecycle.
///
/// Cloning yields another handle to the same state, so the submit button
/// and the form body can both watch it.
#[derive(Default)]
pub struct Submit {
    state: Arc<Mutex<State>>,
}

impl Clone for Submit {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl Submit {
    /// Idle, no errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a request is in flight.
    pub fn loading(&self) -> bool {
        lock(&self.state).loading
    }

    /// The error tree from the last settled failure, if any.
    pub fn errors(&self) -> Option<Errors> {
        lock(&self.state).errors.clone()
    }

    /// Run one request to settlement.
    ///
    /// Sets `loading`, clears previous errors, awaits the caller-supplied
    /// request future, and applies the outcome — unless a newer run began
    /// in the meantime, in which case the stale settle changes nothing.
    /// `loading` is cleared even if the future is dropped mid-flight.
    ///
    /// The failure is also returned so the immediate caller can chain on
    /// it; view code normally ignores the return value and reads
    /// [`Submit::errors`] instead.
    pub async fn run<T, F>(&self, request: F) -> Result<T, ErrorResponse>
    where
        F: Future<Output = Result<T, ErrorResponse>>,
    {
        let token = {
            let mut state = lock(&self.state);
            state.generation += 1;
            state.loading = true;
            state.errors = None;
            state.generation
        };
        let _finish = Finish {
            state: Arc::clone(&self.state),
            token,
        };

        let result = request.await;

        if let Err(response) = &result {
            let mut state = lock(&self.state);
            if state.generation == token {
                #[cfg(feature = "tracing")]
                tracing::debug!(code = response.code, "submission failed");
                state.errors = errors_from_response(response);
            }
        }

        result
    }
}

/// Clears `loading` when the run settles or its future is dropped,
/// unless a newer run owns the state by now.
struct Finish {
    state: Arc<Mutex<State>>,
    token: u64,
}

impl Drop for Finish {
    fn drop(&mut self) {
        let mut state = lock(&self.state);
        if state.generation == self.token {
            state.loading = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liitos_core::ErrorValue;
    use serde_json::json;

    #[tokio::test]
    async fn success_settles_clean() {
        let submit = Submit::new();
        let result = submit.run(async { Ok::<_, ErrorResponse>(42) }).await;

        assert_eq!(result.unwrap(), 42);
        assert!(!submit.loading());
        assert!(submit.errors().is_none());
    }

    #[tokio::test]
    async fn loading_is_set_while_in_flight() {
        let submit = Submit::new();
        let watcher = submit.clone();

        let result = submit
            .run(async {
                assert!(watcher.loading());
                Ok::<_, ErrorResponse>(())
            })
            .await;
        assert!(result.is_ok());
        assert!(!submit.loading());
    }

    #[tokio::test]
    async fn validation_failure_settles_into_errors() {
        let submit = Submit::new();
        let response = ErrorResponse::new(422, "Unprocessable Entity")
            .with_payload(ErrorValue::from(json!({"name": "required"})));

        let result = submit.run(async { Err::<(), _>(response) }).await;
        assert!(result.is_err());

        let errors = submit.errors().expect("errors settled");
        assert_eq!(errors.field("name").unwrap().as_string(), Some("required"));
        assert!(!submit.loading());
    }

    #[tokio::test]
    async fn next_run_clears_previous_errors() {
        let submit = Submit::new();
        let _ = submit
            .run(async { Err::<(), _>(ErrorResponse::new(500, "Internal Server Error")) })
            .await;
        assert!(submit.errors().is_some());

        let _ = submit.run(async { Ok::<_, ErrorResponse>(()) }).await;
        assert!(submit.errors().is_none());
    }

    #[tokio::test]
    async fn dropped_request_still_clears_loading() {
        let submit = Submit::new();
        let mut run = Box::pin(submit.run(std::future::pending::<Result<(), ErrorResponse>>()));
        poll_once(run.as_mut()).await;
        assert!(submit.loading());

        drop(run);
        assert!(!submit.loading());
    }

    #[tokio::test]
    async fn stale_settle_does_not_clobber_newer_run() {
        let submit = Submit::new();

        // start a run, then let it settle only after a newer run finished
        let stale = submit.clone();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let stale_run = tokio::spawn(async move {
            stale
                .run(async {
                    let _ = rx.await;
                    Err::<(), _>(ErrorResponse::new(500, "Internal Server Error"))
                })
                .await
        });
        tokio::task::yield_now().await;

        let _ = submit.run(async { Ok::<_, ErrorResponse>(()) }).await;
        assert!(!submit.loading());

        let _ = tx.send(());
        let stale_result = stale_run.await.expect("stale task ran");
        assert!(stale_result.is_err());

        // the stale failure must not have resurfaced
        assert!(submit.errors().is_none());
        assert!(!submit.loading());
    }

    async fn poll_once<F: Future + Unpin>(mut future: F) {
        std::future::poll_fn(|cx| {
            let _ = std::pin::Pin::new(&mut future).poll(cx);
            std::task::Poll::Ready(())
        })
        .await;
    }
}
