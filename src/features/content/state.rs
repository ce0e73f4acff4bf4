use serde::Serialize;

use crate::features::counter::CounterState;

/// State of the content screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContentState {
    pub count: i64,
    /// Sub-state owned by the counter scope while it is presented.
    pub counter: CounterState,
    pub is_counter_presented: bool,
}
