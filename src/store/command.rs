//! Queue entries consumed by a store worker and the handle returned to senders.

use std::fmt;
use std::future::{Future, IntoFuture};
use std::pin::Pin;

use tokio::sync::oneshot;

use super::error::StoreError;

/// A write applied to the state before the command's action is reduced.
pub(crate) type Patch<S> = Box<dyn FnOnce(&mut S) + Send>;

pub(crate) type Completion = oneshot::Sender<Result<(), StoreError>>;

/// One unit of work for a store worker.
pub(crate) struct Command<S, A> {
    pub patch: Option<Patch<S>>,
    pub action: A,
    pub respond_to: Option<Completion>,
}

impl<S, A> Command<S, A> {
    pub fn reduce(action: A) -> (Self, oneshot::Receiver<Result<(), StoreError>>) {
        let (respond_to, receiver) = oneshot::channel();
        let command = Self {
            patch: None,
            action,
            respond_to: Some(respond_to),
        };
        (command, receiver)
    }

    pub fn patched(
        patch: Patch<S>,
        action: A,
    ) -> (Self, oneshot::Receiver<Result<(), StoreError>>) {
        let (mut command, receiver) = Self::reduce(action);
        command.patch = Some(patch);
        (command, receiver)
    }
}

/// Handle for an action handed to [`Store::send`](super::Store::send).
///
/// Dropping it is fire-and-forget: the action is already queued and will be
/// reduced in order. Awaiting it resolves once the reduction (and, for a
/// scope, the parent's reduction) has completed.
pub struct Dispatch {
    outcome: Outcome,
}

enum Outcome {
    Queued(oneshot::Receiver<Result<(), StoreError>>),
    Rejected(StoreError),
}

impl Dispatch {
    pub(crate) fn queued(receiver: oneshot::Receiver<Result<(), StoreError>>) -> Self {
        Self {
            outcome: Outcome::Queued(receiver),
        }
    }

    pub(crate) fn rejected(error: StoreError) -> Self {
        Self {
            outcome: Outcome::Rejected(error),
        }
    }

    /// Whether the action made it into the queue.
    pub fn is_queued(&self) -> bool {
        matches!(self.outcome, Outcome::Queued(_))
    }
}

impl fmt::Debug for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Queued(_) => f.write_str("Dispatch::Queued"),
            Outcome::Rejected(error) => write!(f, "Dispatch::Rejected({error})"),
        }
    }
}

impl IntoFuture for Dispatch {
    type Output = Result<(), StoreError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move {
            match self.outcome {
                Outcome::Queued(receiver) => match receiver.await {
                    Ok(result) => result,
                    Err(_) => Err(StoreError::Interrupted),
                },
                Outcome::Rejected(error) => Err(error),
            }
        })
    }
}
