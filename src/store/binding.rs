//! Two-way accessors connecting an input field to a state field.

use super::command::{Dispatch, Patch};
use super::feature::{BindableAction, Feature};
use super::lens::Lens;
use super::runtime::Store;

type BindingAction<F> = <<F as Feature>::Action as BindableAction>::Binding;

/// Read/write access to one field of a store's state.
///
/// Writing a value equal to the current one does nothing. Writing a new
/// value publishes it immediately and queues the feature's binding action
/// so the reducer can derive dependent fields.
pub struct Binding<F, T>
where
    F: Feature,
    F::Action: BindableAction,
{
    store: Store<F>,
    lens: Lens<F::State, T>,
    action: BindingAction<F>,
}

impl<F, T> Clone for Binding<F, T>
where
    F: Feature,
    F::Action: BindableAction,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            lens: self.lens.clone(),
            action: self.action.clone(),
        }
    }
}

impl<F, T> Binding<F, T>
where
    F: Feature,
    F::Action: BindableAction,
    T: PartialEq + Clone + Send + 'static,
{
    /// Current value of the bound field.
    pub fn get(&self) -> T {
        self.lens.get(&*self.store.state.borrow())
    }

    /// Write a new value.
    ///
    /// Returns `None` when the value is unchanged and nothing was dispatched,
    /// otherwise the dispatch of the binding action.
    ///
    /// A reduction already in flight may briefly publish the old field value
    /// before the queued binding command writes the new one again.
    pub fn set(&self, value: T) -> Option<Dispatch> {
        let lens = &self.lens;
        let changed = self.store.state.send_if_modified(|state| {
            if lens.get(state) == value {
                return false;
            }
            lens.set(state, value.clone());
            true
        });

        if !changed {
            tracing::trace!(store = %self.store.id(), "Binding write unchanged, nothing dispatched");
            return None;
        }

        // The queued write re-applies the value in case a reduction already
        // in flight publishes over it.
        let lens = self.lens.clone();
        let write: Patch<F::State> = Box::new(move |state| lens.set(state, value));
        let action = <F::Action as BindableAction>::binding(self.action.clone());
        Some(self.store.send_patched(write, action))
    }
}

impl<F> Store<F>
where
    F: Feature,
    F::Action: BindableAction,
{
    /// Two-way accessor for the field reached by `lens`.
    ///
    /// Each effective write dispatches `action` wrapped as the feature's
    /// binding action.
    pub fn binding<T>(&self, lens: Lens<F::State, T>, action: BindingAction<F>) -> Binding<F, T>
    where
        T: PartialEq + Clone + Send + 'static,
    {
        Binding {
            store: self.clone(),
            lens,
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Form {
        name: String,
        name_len: usize,
        bindings_seen: usize,
        touches: usize,
    }

    #[derive(Debug, Clone)]
    enum FormAction {
        Binding(FormBinding),
        SlowTouch,
    }

    #[derive(Debug, Clone)]
    enum FormBinding {
        NameChanged,
    }

    impl BindableAction for FormAction {
        type Binding = FormBinding;

        fn binding(action: FormBinding) -> Self {
            FormAction::Binding(action)
        }
    }

    struct FormFeature;

    #[async_trait]
    impl Feature for FormFeature {
        type State = Form;
        type Action = FormAction;

        async fn reduce(&self, mut state: Form, action: FormAction) -> Form {
            match action {
                FormAction::Binding(FormBinding::NameChanged) => {
                    state.name_len = state.name.len();
                    state.bindings_seen += 1;
                }
                FormAction::SlowTouch => {
                    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
                    state.touches += 1;
                }
            }
            state
        }
    }

    fn name_lens() -> Lens<Form, String> {
        Lens::new(|f: &Form| f.name.clone(), |f: &mut Form, name: String| f.name = name)
    }

    #[tokio::test]
    async fn write_is_visible_before_the_reduction_runs() {
        let store = Store::new(FormFeature, Form::default());
        let name = store.binding(name_lens(), FormBinding::NameChanged);

        let dispatch = name.set("abc".to_string()).expect("changed value dispatches");

        assert_eq!(name.get(), "abc");
        assert_eq!(store.state().name_len, 0);
        dispatch.await.unwrap();
        assert_eq!(store.state().name_len, 3);
    }

    #[tokio::test]
    async fn unchanged_write_dispatches_nothing() {
        let store = Store::new(
            FormFeature,
            Form {
                name: "same".to_string(),
                ..Form::default()
            },
        );
        let name = store.binding(name_lens(), FormBinding::NameChanged);

        assert!(name.set("same".to_string()).is_none());
        name.set("other".to_string()).unwrap().await.unwrap();
        assert!(name.set("other".to_string()).is_none());

        assert_eq!(store.state().bindings_seen, 1);
    }

    #[tokio::test]
    async fn write_survives_a_reduction_in_flight() {
        let store = Store::new(FormFeature, Form::default());
        let name = store.binding(name_lens(), FormBinding::NameChanged);

        let slow = store.send(FormAction::SlowTouch);
        // Let the worker start the slow reduction from the old state.
        tokio::task::yield_now().await;

        let dispatch = name.set("abc".to_string()).expect("changed value dispatches");
        slow.await.unwrap();
        dispatch.await.unwrap();

        let state = store.state();
        assert_eq!(state.name, "abc");
        assert_eq!(state.name_len, 3);
        assert_eq!(state.touches, 1);
        assert_eq!(state.bindings_seen, 1);
    }
}
