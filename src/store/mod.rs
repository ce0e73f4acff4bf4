//! Unidirectional state container primitives.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Store queue ──→ Feature::reduce ──→ State ──→ View
//!    ↑                                             │
//!    └─────────────────────────────────────────────┘
//! ```
//!
//! - **Feature**: state/action types plus the reduction rule
//! - **Store**: owns the state, reduces queued actions one at a time in
//!   FIFO order, publishes every result
//! - **Scope**: a store over a slice of a parent's state that writes back
//!   and forwards its actions to the parent after each reduction
//! - **Binding**: two-way access to a single state field

mod binding;
mod command;
mod error;
mod feature;
mod lens;
mod runtime;
mod scope;

pub use binding::Binding;
pub use command::Dispatch;
pub use error::StoreError;
pub use feature::{Action, BindableAction, Feature, FeatureState};
pub use lens::Lens;
pub use runtime::Store;
