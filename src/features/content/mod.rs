//! Content feature: the root screen that presents the counter.

mod action;
mod feature;
mod state;

pub use action::{ContentAction, ContentBinding};
pub use feature::ContentFeature;
pub use state::ContentState;
