use crate::features::counter::CounterAction;
use crate::store::BindableAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentAction {
    Increment,
    Decrement,
    PresentCounter,
    /// Forwarded from the counter scope after it has reduced the action.
    Counter(CounterAction),
    Binding(ContentBinding),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentBinding {
    /// The presentation flag was written by navigation chrome.
    CounterPresentation,
}

impl BindableAction for ContentAction {
    type Binding = ContentBinding;

    fn binding(action: ContentBinding) -> Self {
        ContentAction::Binding(action)
    }
}
