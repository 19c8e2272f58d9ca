//! Diagram render lifecycle.
//!
//! [`DiagramRenderer`] turns diagram sources into [`RenderState`] updates for
//! a single consumer. Every call to [`DiagramRenderer::render`] opens a new
//! generation; a completed render is applied only while its generation is
//! still the latest one and the consumer is still attached. Older results are
//! dropped on arrival, since the engine offers no way to cancel a call in
//! flight.

use crate::domain::{EngineError, RenderError};
use crate::infra::diagram::engine::{Artifact, RenderEngine, RenderId};
use crate::infra::diagram::readiness::{ReadyWait, RetryPolicy};
use crate::infra::diagram::theme::ThemeOptions;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// What the display layer shows for the current diagram.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RenderState {
    #[default]
    Idle,
    Pending,
    Rendered(Artifact),
    /// Display-safe failure message.
    Failed(String),
}

impl RenderState {
    /// True once a request has produced a visible result.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Rendered(_) | Self::Failed(_))
    }

    pub fn artifact(&self) -> Option<&Artifact> {
        match self {
            Self::Rendered(artifact) => Some(artifact),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// What happened to the result of one render request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The result became the current state.
    Applied,
    /// A newer request was issued first; the result was dropped.
    Superseded,
    /// The consumer detached first; the result was dropped.
    Detached,
    /// The request task ended without reporting, e.g. the runtime shut down.
    Aborted,
}

#[derive(Debug, Clone)]
pub struct RendererOptions {
    pub retry: RetryPolicy,
    pub theme: ThemeOptions,
    /// Upper bound for a single engine call. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            theme: ThemeOptions::default(),
            timeout: None,
        }
    }
}

/// Handle to one issued render request.
#[derive(Debug)]
pub struct RenderTicket {
    generation: u64,
    source: Arc<str>,
    task: JoinHandle<RenderOutcome>,
}

impl RenderTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Waits for the request to finish and reports whether it was applied.
    ///
    /// A request stuck waiting on an engine that never answers never finishes.
    pub async fn outcome(self) -> RenderOutcome {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(err) => {
                log::error!("Render task for generation {} failed: {err}", self.generation);
                RenderOutcome::Aborted
            }
        }
    }
}

struct Session {
    generation: u64,
    detached: bool,
    active: Option<CancellationToken>,
}

struct Shared {
    session: Mutex<Session>,
    state: watch::Sender<RenderState>,
    root: CancellationToken,
}

impl Shared {
    /// Publishes `result` if `generation` is still current.
    ///
    /// Runs under the session lock, the same lock `render` takes to issue a
    /// generation, so a stale result cannot land after a newer `Pending`.
    fn apply(&self, generation: u64, result: Result<Artifact, RenderError>) -> RenderOutcome {
        let session = self.session.lock();
        if session.detached {
            log::debug!("Dropping diagram result for generation {generation}: consumer detached");
            return RenderOutcome::Detached;
        }
        if session.generation != generation {
            log::debug!(
                "Dropping stale diagram result for generation {generation} (latest is {})",
                session.generation
            );
            return RenderOutcome::Superseded;
        }

        let next = match result {
            Ok(artifact) => RenderState::Rendered(artifact),
            Err(err) => {
                log::error!("Diagram render failed: {err}");
                RenderState::Failed(err.user_message().to_string())
            }
        };
        self.state.send_replace(next);
        RenderOutcome::Applied
    }

    fn discarded(&self, generation: u64) -> RenderOutcome {
        if self.session.lock().detached {
            RenderOutcome::Detached
        } else {
            log::debug!("Render request for generation {generation} superseded while waiting");
            RenderOutcome::Superseded
        }
    }
}

pub struct DiagramRenderer {
    engine: Arc<dyn RenderEngine>,
    options: Arc<RendererOptions>,
    shared: Arc<Shared>,
}

impl DiagramRenderer {
    pub fn new(engine: Arc<dyn RenderEngine>, options: RendererOptions) -> Self {
        let (state, _rx) = watch::channel(RenderState::Idle);
        Self {
            engine,
            options: Arc::new(options),
            shared: Arc::new(Shared {
                session: Mutex::new(Session {
                    generation: 0,
                    detached: false,
                    active: None,
                }),
                state,
                root: CancellationToken::new(),
            }),
        }
    }

    /// Starts rendering `source`, superseding any earlier request.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn render(&self, source: impl Into<Arc<str>>) -> RenderTicket {
        let source: Arc<str> = source.into();

        let (generation, cancel) = {
            let mut session = self.shared.session.lock();
            session.generation += 1;
            // Older requests stop waiting for readiness; calls already in the
            // engine run to completion and are dropped in `apply`.
            if let Some(previous) = session.active.take() {
                previous.cancel();
            }
            let token = self.shared.root.child_token();
            session.active = Some(token.clone());
            if !session.detached {
                self.shared.state.send_replace(RenderState::Pending);
            }
            (session.generation, token)
        };

        let task = tokio::spawn(run_request(
            self.shared.clone(),
            self.engine.clone(),
            self.options.clone(),
            generation,
            source.clone(),
            cancel,
        ));

        RenderTicket {
            generation,
            source,
            task,
        }
    }

    /// Stops applying results. Requests still in flight are dropped on arrival.
    pub fn detach(&self) {
        let mut session = self.shared.session.lock();
        if session.detached {
            return;
        }
        session.detached = true;
        session.active = None;
        self.shared.root.cancel();
        log::debug!(
            "Diagram renderer detached at generation {}",
            session.generation
        );
    }

    pub fn is_detached(&self) -> bool {
        self.shared.session.lock().detached
    }

    /// Latest generation issued, 0 before the first request.
    pub fn generation(&self) -> u64 {
        self.shared.session.lock().generation
    }

    pub fn state(&self) -> RenderState {
        self.shared.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<RenderState> {
        self.shared.state.subscribe()
    }

    /// Waits until the current state is `Rendered` or `Failed`.
    pub async fn settled(&self) -> RenderState {
        let mut rx = self.subscribe();
        // The sender lives in `self.shared`, so the channel stays open.
        match rx.wait_for(RenderState::is_settled).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        }
    }
}

impl Drop for DiagramRenderer {
    fn drop(&mut self) {
        self.detach();
    }
}

async fn run_request(
    shared: Arc<Shared>,
    engine: Arc<dyn RenderEngine>,
    options: Arc<RendererOptions>,
    generation: u64,
    source: Arc<str>,
    cancel: CancellationToken,
) -> RenderOutcome {
    match engine.readiness().wait_ready(&options.retry, &cancel).await {
        ReadyWait::Ready { .. } => {}
        ReadyWait::Cancelled => return shared.discarded(generation),
        ReadyWait::GaveUp { attempts } => {
            return shared.apply(generation, Err(RenderError::EngineUnavailable { attempts }));
        }
    }

    engine.configure(&options.theme);

    let id = RenderId::generate();
    log::debug!("Rendering diagram {id} for generation {generation}");

    // A panic in the engine comes back as a `JoinError`; aborting on timeout
    // drops the engine future along with any child process it owns.
    let call = tokio::spawn(async move { engine.render(&id, &source).await });
    let abort = call.abort_handle();

    let joined = match options.timeout {
        Some(limit) => match tokio::time::timeout(limit, call).await {
            Ok(joined) => joined,
            Err(_) => {
                abort.abort();
                return shared.apply(generation, Err(RenderError::TimedOut(limit)));
            }
        },
        None => call.await,
    };

    let result = match joined {
        Ok(result) => result.map_err(RenderError::from),
        Err(err) => Err(RenderError::from(EngineError::Internal(format!(
            "render task failed: {err}"
        )))),
    };

    shared.apply(generation, result)
}
