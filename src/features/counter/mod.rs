//! Counter feature.
//!
//! - `state.rs` - counter, text field and derived length
//! - `action.rs` - user, binding and delegate actions
//! - `feature.rs` - state transitions

mod action;
mod feature;
mod state;

pub use action::{CounterAction, CounterBinding, CounterDelegate};
pub use feature::CounterFeature;
pub use state::CounterState;
