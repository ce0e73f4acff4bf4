//! Child stores bound to a slice of a parent store's state.
//!
//! A scope reduces its own actions like any other store. After each local
//! reduction it hands the parent a single command that
//!
//! 1. overwrites the parent's sub-state with the scope's new state, then
//! 2. reduces the translated action in the parent,
//!
//! and waits for that command to complete before reporting its own
//! completion. Because both steps travel through the parent's queue, the
//! write always happens before the parent's reduction and never races with
//! another reduction in flight on the parent.

use std::any::type_name;

use async_trait::async_trait;

use super::command::{Command, Patch};
use super::error::StoreError;
use super::feature::Feature;
use super::lens::Lens;
use super::runtime::Store;

/// Where a store sends its state and actions after each reduction.
#[async_trait]
pub(crate) trait Upstream<F: Feature>: Send + Sync {
    async fn propagate(&self, state: F::State, action: F::Action) -> Result<(), StoreError>;
}

type Translate<C, P> = Box<dyn Fn(<C as Feature>::Action) -> <P as Feature>::Action + Send + Sync>;

struct ParentLink<P: Feature, C: Feature> {
    parent: Store<P>,
    lens: Lens<P::State, C::State>,
    translate: Translate<C, P>,
}

#[async_trait]
impl<P: Feature, C: Feature> Upstream<C> for ParentLink<P, C> {
    async fn propagate(&self, state: C::State, action: C::Action) -> Result<(), StoreError> {
        let lens = self.lens.clone();
        let write: Patch<P::State> = Box::new(move |parent_state| lens.set(parent_state, state));
        let (command, receiver) = Command::patched(write, (self.translate)(action));
        self.parent.forward(command, receiver).await
    }
}

impl<F: Feature> Store<F> {
    /// Create a child store for the part of this store's state reached by
    /// `lens`.
    ///
    /// The child starts from a copy of the current sub-state. Each child
    /// action is forwarded to this store through `translate` once the child
    /// has reduced it, so awaiting the child's dispatch also awaits this
    /// store's reduction. All later writes to the sub-state are expected to
    /// go through the child.
    pub fn scope<C, T>(&self, lens: Lens<F::State, C::State>, translate: T, feature: C) -> Store<C>
    where
        C: Feature,
        T: Fn(C::Action) -> F::Action + Send + Sync + 'static,
    {
        let initial_state = lens.get(&*self.state.borrow());
        tracing::debug!(
            parent = %self.id(),
            child = type_name::<C>(),
            "Scoping child store"
        );

        let upstream: Box<dyn Upstream<C>> = Box::new(ParentLink::<F, C> {
            parent: self.clone(),
            lens,
            translate: Box::new(translate),
        });
        Store::spawn(feature, initial_state, self.backlog_warning, Some(upstream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Parent {
        child: Child,
        log: Vec<String>,
        saw_child_value: Vec<i32>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Child {
        value: i32,
    }

    #[derive(Debug, Clone)]
    enum ParentAction {
        Child(ChildAction),
        Note(&'static str),
    }

    #[derive(Debug, Clone)]
    enum ChildAction {
        Bump,
        Ping,
    }

    struct ParentFeature;

    #[async_trait]
    impl Feature for ParentFeature {
        type State = Parent;
        type Action = ParentAction;

        async fn reduce(&self, mut state: Parent, action: ParentAction) -> Parent {
            match action {
                ParentAction::Child(action) => {
                    // Records what the sub-state looked like when the
                    // forwarded action arrived.
                    state.saw_child_value.push(state.child.value);
                    state.log.push(format!("child:{action:?}"));
                }
                ParentAction::Note(note) => state.log.push(note.to_string()),
            }
            state
        }
    }

    struct ChildFeature;

    #[async_trait]
    impl Feature for ChildFeature {
        type State = Child;
        type Action = ChildAction;

        async fn reduce(&self, mut state: Child, action: ChildAction) -> Child {
            if let ChildAction::Bump = action {
                state.value += 1;
            }
            state
        }
    }

    fn child_lens() -> Lens<Parent, Child> {
        Lens::new(|p: &Parent| p.child.clone(), |p: &mut Parent, c: Child| p.child = c)
    }

    #[tokio::test]
    async fn scope_starts_from_parent_sub_state() {
        let parent = Store::new(
            ParentFeature,
            Parent {
                child: Child { value: 4 },
                ..Parent::default()
            },
        );
        let child = parent.scope(child_lens(), ParentAction::Child, ChildFeature);
        assert_eq!(child.state(), Child { value: 4 });
    }

    #[tokio::test]
    async fn child_state_is_written_before_parent_reduces() {
        let parent = Store::new(ParentFeature, Parent::default());
        let child = parent.scope(child_lens(), ParentAction::Child, ChildFeature);

        child.send(ChildAction::Bump).await.unwrap();

        let state = parent.state();
        assert_eq!(state.child, child.state());
        assert_eq!(state.saw_child_value, vec![1]);
        assert_eq!(state.log, vec!["child:Bump".to_string()]);
    }

    #[tokio::test]
    async fn no_op_child_action_still_reaches_parent() {
        let parent = Store::new(ParentFeature, Parent::default());
        let child = parent.scope(child_lens(), ParentAction::Child, ChildFeature);

        child.send(ChildAction::Ping).await.unwrap();

        assert_eq!(child.state(), Child::default());
        assert_eq!(parent.state().log, vec!["child:Ping".to_string()]);
    }

    #[tokio::test]
    async fn parent_and_child_actions_interleave_in_order() {
        let parent = Store::new(ParentFeature, Parent::default());
        let child = parent.scope(child_lens(), ParentAction::Child, ChildFeature);

        parent.send(ParentAction::Note("first")).await.unwrap();
        child.send(ChildAction::Bump).await.unwrap();
        parent.send(ParentAction::Note("last")).await.unwrap();

        assert_eq!(
            parent.state().log,
            vec![
                "first".to_string(),
                "child:Bump".to_string(),
                "last".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn nested_scopes_propagate_to_the_root() {
        #[derive(Debug, Clone, Default, PartialEq)]
        struct Root {
            parent: Parent,
            forwarded: usize,
        }

        struct RootFeature;

        #[async_trait]
        impl Feature for RootFeature {
            type State = Root;
            type Action = ParentAction;

            async fn reduce(&self, mut state: Root, _action: ParentAction) -> Root {
                state.forwarded += 1;
                state
            }
        }

        let root = Store::new(RootFeature, Root::default());
        let parent = root.scope(
            Lens::new(|r: &Root| r.parent.clone(), |r: &mut Root, p: Parent| r.parent = p),
            |action: ParentAction| action,
            ParentFeature,
        );
        let child = parent.scope(child_lens(), ParentAction::Child, ChildFeature);

        child.send(ChildAction::Bump).await.unwrap();

        let root_state = root.state();
        assert_eq!(root_state.forwarded, 1);
        assert_eq!(root_state.parent.child.value, 1);
        assert_eq!(root_state.parent, parent.state());
    }
}
