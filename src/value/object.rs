use std::{
    fmt,
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering},
};

use super::{Array, Value};

// Identity tokens are never reused, so a dropped instance can't alias a
// live one inside a hash set.
static NEXT_IDENTITY: AtomicU64 = AtomicU64::new(1);

fn next_identity() -> u64 {
    NEXT_IDENTITY.fetch_add(1, Ordering::Relaxed)
}

/// A dynamically callable value.
///
/// Operators invoked through [`dispatch`](crate::dispatch) call it with
/// `[value]`, or `[accumulator, value]` when it is a reducer. Comparators
/// get `[left, right]` and answer with a number whose sign orders the pair.
#[derive(Clone)]
pub struct Func(Rc<dyn Fn(&[Value]) -> Value>);

impl Func {
    pub fn new(f: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Self(Rc::new(f))
    }

    #[inline]
    pub fn call(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Func@{:p}", Rc::as_ptr(&self.0).cast::<()>())
    }
}

/// A shared object reference.
///
/// Equality is identity: clones of one `ObjectRef` are equal, while two
/// objects built from identical properties are not.
#[derive(Clone)]
pub struct ObjectRef(Rc<Object>);

struct Object {
    identity: u64,
    class: String,
    props: Array,
    traversable: bool,
    invoke: Option<Func>,
}

impl ObjectRef {
    /// A plain object: neither traversable nor invocable.
    pub fn new(class: impl Into<String>, props: Array) -> Self {
        ObjectBuilder::new(class).props(props).build()
    }

    pub fn builder(class: impl Into<String>) -> ObjectBuilder {
        ObjectBuilder::new(class)
    }

    /// Process-unique identity token.
    #[inline]
    pub fn identity(&self) -> u64 {
        self.0.identity
    }

    #[inline]
    pub fn class(&self) -> &str {
        &self.0.class
    }

    #[inline]
    pub fn props(&self) -> &Array {
        &self.0.props
    }

    /// Whether the object can be iterated as a sequence of its properties.
    #[inline]
    pub fn is_traversable(&self) -> bool {
        self.0.traversable
    }

    #[inline]
    pub fn invoker(&self) -> Option<&Func> {
        self.0.invoke.as_ref()
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{} ", self.class(), self.identity())?;
        fmt::Debug::fmt(self.props(), f)
    }
}

/// Builds an [`ObjectRef`] with optional capabilities.
#[derive(Debug)]
pub struct ObjectBuilder {
    class: String,
    props: Array,
    traversable: bool,
    invoke: Option<Func>,
}

impl ObjectBuilder {
    fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            props: Array::new(),
            traversable: false,
            invoke: None,
        }
    }

    pub fn props(mut self, props: Array) -> Self {
        self.props = props;
        self
    }

    pub fn traversable(mut self) -> Self {
        self.traversable = true;
        self
    }

    pub fn invocable(mut self, f: Func) -> Self {
        self.invoke = Some(f);
        self
    }

    pub fn build(self) -> ObjectRef {
        ObjectRef(Rc::new(Object {
            identity: next_identity(),
            class: self.class,
            props: self.props,
            traversable: self.traversable,
            invoke: self.invoke,
        }))
    }
}

/// An opaque external handle. Never hashable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    identity: u64,
    kind: String,
}

impl Resource {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            identity: next_identity(),
            kind: kind.into(),
        }
    }

    #[inline]
    pub fn identity(&self) -> u64 {
        self.identity
    }

    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;

    #[test]
    fn identity_not_structure() {
        let a = ObjectRef::new("Point", array! { "x" => 1 });
        let b = ObjectRef::new("Point", array! { "x" => 1 });

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn capabilities() {
        let obj = ObjectRef::builder("Both")
            .props(array![1, 2])
            .traversable()
            .invocable(Func::new(|_| Value::Null))
            .build();

        assert!(obj.is_traversable());
        assert!(obj.invoker().is_some());
        assert!(!ObjectRef::new("Plain", Array::new()).is_traversable());
    }
}
