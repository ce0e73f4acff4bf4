use crate::store::BindableAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
    Binding(CounterBinding),
    /// Signals for the presenting feature; no effect on counter state.
    Delegate(CounterDelegate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterBinding {
    TextChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterDelegate {
    Dismiss,
}

impl BindableAction for CounterAction {
    type Binding = CounterBinding;

    fn binding(action: CounterBinding) -> Self {
        CounterAction::Binding(action)
    }
}
