//! The store: single owner of a feature's state.

use std::any::type_name;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tracing::Instrument;
use uuid::Uuid;

use crate::config::StoreConfig;

use super::command::{Command, Dispatch, Patch};
use super::error::StoreError;
use super::feature::Feature;
use super::scope::Upstream;

/// Runtime container owning one live state value and mediating every
/// transition for it.
///
/// A `Store` is a cheap handle; clones refer to the same state and queue.
/// Actions are reduced one at a time, in the order they were sent, by a
/// worker task spawned on construction. The worker exits once every handle
/// (including child scopes) has been dropped and the queue is drained.
///
/// The queue is unbounded: `send` never blocks and never drops an action.
/// A warning is logged when the backlog of unreduced actions reaches the
/// configured threshold.
pub struct Store<F: Feature> {
    id: Uuid,
    pub(super) backlog_warning: usize,
    commands: mpsc::UnboundedSender<Command<F::State, F::Action>>,
    pending: Arc<AtomicUsize>,
    pub(super) state: Arc<watch::Sender<F::State>>,
}

impl<F: Feature> Clone for Store<F> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            backlog_warning: self.backlog_warning,
            commands: self.commands.clone(),
            pending: Arc::clone(&self.pending),
            state: Arc::clone(&self.state),
        }
    }
}

impl<F: Feature> Store<F> {
    /// Create a store with the default store settings.
    ///
    /// # Panics
    /// Must be called from within a Tokio runtime.
    pub fn new(feature: F, initial_state: F::State) -> Self {
        Self::with_config(feature, initial_state, &StoreConfig::default())
    }

    /// Create a store using the given store settings.
    ///
    /// # Panics
    /// Must be called from within a Tokio runtime.
    pub fn with_config(feature: F, initial_state: F::State, config: &StoreConfig) -> Self {
        Self::spawn(feature, initial_state, config.backlog_warning, None)
    }

    pub(super) fn spawn(
        feature: F,
        initial_state: F::State,
        backlog_warning: usize,
        upstream: Option<Box<dyn Upstream<F>>>,
    ) -> Self {
        let backlog_warning = backlog_warning.max(1);
        let id = Uuid::new_v4();
        let (commands, receiver) = mpsc::unbounded_channel();
        let pending = Arc::new(AtomicUsize::new(0));
        let (state, _) = watch::channel(initial_state);
        let state = Arc::new(state);

        let worker = Worker {
            feature,
            commands: receiver,
            pending: Arc::clone(&pending),
            state: Arc::clone(&state),
            upstream,
        };
        let span = tracing::info_span!("store", feature = type_name::<F>(), id = %id);
        tokio::spawn(worker.run().instrument(span));

        Self {
            id,
            backlog_warning,
            commands,
            pending,
            state,
        }
    }

    /// Identifier used to correlate log lines for this store.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Snapshot of the currently published state.
    pub fn state(&self) -> F::State {
        self.state.borrow().clone()
    }

    /// Subscribe to state publications.
    ///
    /// The receiver is notified once per completed reduction (and once per
    /// binding write or scope sync applied to this store).
    pub fn subscribe(&self) -> watch::Receiver<F::State> {
        self.state.subscribe()
    }

    /// Whether the worker has stopped accepting actions.
    pub fn is_closed(&self) -> bool {
        self.commands.is_closed()
    }

    /// Queue an action for reduction.
    ///
    /// Returns immediately. Actions are reduced in the order `send` was
    /// called, whether or not the returned [`Dispatch`] is awaited.
    pub fn send(&self, action: F::Action) -> Dispatch {
        let (command, receiver) = Command::reduce(action);
        self.enqueue(command, receiver)
    }

    pub(super) fn send_patched(&self, patch: Patch<F::State>, action: F::Action) -> Dispatch {
        let (command, receiver) = Command::patched(patch, action);
        self.enqueue(command, receiver)
    }

    /// Queue a command, then wait for its completion.
    pub(super) async fn forward(
        &self,
        command: Command<F::State, F::Action>,
        receiver: oneshot::Receiver<Result<(), StoreError>>,
    ) -> Result<(), StoreError> {
        self.push(command)?;
        receiver.await.map_err(|_| StoreError::Interrupted)?
    }

    fn enqueue(
        &self,
        command: Command<F::State, F::Action>,
        receiver: oneshot::Receiver<Result<(), StoreError>>,
    ) -> Dispatch {
        match self.push(command) {
            Ok(()) => Dispatch::queued(receiver),
            Err(error) => Dispatch::rejected(error),
        }
    }

    fn push(&self, command: Command<F::State, F::Action>) -> Result<(), StoreError> {
        // Counted before sending so the worker never decrements first.
        let backlog = self.pending.fetch_add(1, Ordering::Relaxed) + 1;
        if let Err(mpsc::error::SendError(command)) = self.commands.send(command) {
            self.pending.fetch_sub(1, Ordering::Relaxed);
            tracing::warn!(
                store = %self.id,
                action = ?command.action,
                "Store closed, dropping action"
            );
            return Err(StoreError::Closed);
        }

        if backlog == self.backlog_warning {
            tracing::warn!(
                store = %self.id,
                backlog,
                "Action backlog reached warning threshold"
            );
        }
        Ok(())
    }
}

/// Sole writer of a store's state: drains the queue one command at a time.
struct Worker<F: Feature> {
    feature: F,
    commands: mpsc::UnboundedReceiver<Command<F::State, F::Action>>,
    pending: Arc<AtomicUsize>,
    state: Arc<watch::Sender<F::State>>,
    upstream: Option<Box<dyn Upstream<F>>>,
}

impl<F: Feature> Worker<F> {
    async fn run(mut self) {
        tracing::debug!("Store worker started");
        while let Some(command) = self.commands.recv().await {
            self.pending.fetch_sub(1, Ordering::Relaxed);
            let Command {
                patch,
                action,
                respond_to,
            } = command;
            let outcome = self.process(patch, action).await;
            if let Some(respond_to) = respond_to {
                if respond_to.send(outcome).is_err() {
                    tracing::trace!("Store: completion dropped (receiver gone)");
                }
            }
        }
        tracing::debug!("Store worker stopped");
    }

    async fn process(
        &self,
        patch: Option<Patch<F::State>>,
        action: F::Action,
    ) -> Result<(), StoreError> {
        let mut current = self.state.borrow().clone();
        if let Some(patch) = patch {
            patch(&mut current);
            self.state.send_replace(current.clone());
        }

        tracing::debug!(?action, "Reducing action");
        let forwarded = self.upstream.is_some().then(|| action.clone());
        let next = self.feature.reduce(current, action).await;

        match (&self.upstream, forwarded) {
            (Some(upstream), Some(action)) => {
                self.state.send_replace(next.clone());
                upstream.propagate(next, action).await
            }
            _ => {
                self.state.send_replace(next);
                Ok(())
            }
        }
    }
}
