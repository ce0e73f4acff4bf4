//! Unidirectional state management for interactive UIs.
//!
//! A [`Store`] owns one feature's state and reduces [`Feature`] actions one
//! at a time; [`Store::scope`] derives child stores bound to a slice of a
//! parent's state and [`Store::binding`] gives two-way access to a field.

pub mod config;
pub mod dependency;
pub mod features;
pub mod logging;
pub mod store;

pub use store::{BindableAction, Binding, Dispatch, Feature, Lens, Store, StoreError};
