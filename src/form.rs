use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, info};

use crate::api::{FormSnapshot, RecipeResponse};
use crate::backend::RecipeBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The response was stored and is now displayed.
    Applied,
    /// The call succeeded but a newer submission had been issued meanwhile.
    Superseded,
    /// The call failed; state is unchanged apart from the in-flight flag.
    Failed,
}

#[derive(Default)]
struct FormState {
    query: String,
    response: Option<RecipeResponse>,
    pending: usize,
    issued: u64,
}

/// Holds the query text, the last recipe shown and whether a call is
/// outstanding. The lock is never held across an await point.
pub struct QueryForm {
    backend: RecipeBackend,
    state: Mutex<FormState>,
}

impl QueryForm {
    pub fn new(backend: RecipeBackend) -> Self {
        Self {
            backend,
            state: Mutex::new(FormState::default()),
        }
    }

    pub fn update_query(&self, text: impl Into<String>) {
        self.lock().query = text.into();
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let state = self.lock();
        FormSnapshot {
            query: state.query.clone(),
            in_flight: state.pending > 0,
            response: state.response.clone(),
        }
    }

    pub fn in_flight(&self) -> bool {
        self.lock().pending > 0
    }

    /// Sends the current query to the backend and stores the answer.
    ///
    /// Failures are logged and swallowed. A successful answer is only applied
    /// when no later submission was issued while this one was outstanding.
    /// The in-flight flag is released when the call settles, including when
    /// this future is dropped before completion.
    pub async fn submit(&self) -> SubmitOutcome {
        let call = self.begin();
        self.run(call).await
    }

    /// Like [`submit`](Self::submit), but returns `None` without calling the
    /// backend when a call is already outstanding. The check and the claim of
    /// the in-flight slot happen under one lock.
    pub async fn try_submit(&self) -> Option<SubmitOutcome> {
        let call = {
            let mut state = self.lock();
            if state.pending > 0 {
                return None;
            }
            self.claim(&mut state)
        };
        Some(self.run(call).await)
    }

    fn begin(&self) -> Call<'_> {
        let mut state = self.lock();
        self.claim(&mut state)
    }

    fn claim<'a>(&'a self, state: &mut FormState) -> Call<'a> {
        state.issued += 1;
        state.pending += 1;
        Call {
            seq: state.issued,
            query: state.query.clone(),
            _in_flight: InFlight { form: self },
        }
    }

    async fn run(&self, call: Call<'_>) -> SubmitOutcome {
        let seq = call.seq;
        debug!(seq, query = %call.query, "submitting recipe query");
        match self.backend.fetch_recipe(&call.query).await {
            Ok(response) => {
                let mut state = self.lock();
                if state.issued != seq {
                    debug!(seq, latest = state.issued, "discarding superseded recipe");
                    return SubmitOutcome::Superseded;
                }
                info!(seq, recipe = %response.details.recipe_name, "recipe received");
                state.response = Some(response);
                SubmitOutcome::Applied
            }
            Err(err) => {
                error!(seq, error = %err, "recipe query failed");
                SubmitOutcome::Failed
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

struct Call<'a> {
    seq: u64,
    query: String,
    _in_flight: InFlight<'a>,
}

struct InFlight<'a> {
    form: &'a QueryForm,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut state = self.form.lock();
        state.pending = state.pending.saturating_sub(1);
    }
}
