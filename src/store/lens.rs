//! Getter/setter pairs focusing on a part of a larger value.

use std::fmt;
use std::sync::Arc;

/// Read/write access to a `T` stored inside an `S`.
///
/// Used by scopes to reach a child's state inside the parent state and by
/// bindings to reach a single field.
pub struct Lens<S, T> {
    get: Arc<dyn Fn(&S) -> T + Send + Sync>,
    set: Arc<dyn Fn(&mut S, T) + Send + Sync>,
}

impl<S, T> Lens<S, T> {
    pub fn new<G, W>(get: G, set: W) -> Self
    where
        G: Fn(&S) -> T + Send + Sync + 'static,
        W: Fn(&mut S, T) + Send + Sync + 'static,
    {
        Self {
            get: Arc::new(get),
            set: Arc::new(set),
        }
    }

    pub fn get(&self, whole: &S) -> T {
        (self.get)(whole)
    }

    pub fn set(&self, whole: &mut S, part: T) {
        (self.set)(whole, part)
    }
}

impl<S, T> Clone for Lens<S, T> {
    fn clone(&self) -> Self {
        Self {
            get: Arc::clone(&self.get),
            set: Arc::clone(&self.set),
        }
    }
}

impl<S, T> fmt::Debug for Lens<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lens").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Outer {
        name: String,
        inner: Inner,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Inner {
        value: i64,
    }

    fn inner_lens() -> Lens<Outer, Inner> {
        Lens::new(|o: &Outer| o.inner.clone(), |o: &mut Outer, i: Inner| o.inner = i)
    }

    #[test]
    fn get_reads_the_focused_part() {
        let outer = Outer {
            name: "a".to_string(),
            inner: Inner { value: 7 },
        };
        assert_eq!(inner_lens().get(&outer), Inner { value: 7 });
    }

    #[test]
    fn set_leaves_the_rest_untouched() {
        let mut outer = Outer {
            name: "a".to_string(),
            inner: Inner::default(),
        };
        inner_lens().set(&mut outer, Inner { value: 3 });
        assert_eq!(outer.inner.value, 3);
        assert_eq!(outer.name, "a");
    }

    #[test]
    fn clones_share_accessors() {
        let lens = inner_lens();
        let copy = lens.clone();
        let mut outer = Outer::default();
        copy.set(&mut outer, Inner { value: 1 });
        assert_eq!(lens.get(&outer).value, 1);
    }
}
