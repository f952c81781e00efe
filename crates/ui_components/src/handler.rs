//! Cloneable event handlers for component models.

use std::fmt;
use std::rc::Rc;

/// Shared single-threaded handler invoked with one argument.
///
/// Handlers compare equal only when they are clones of the same closure, which keeps
/// rendered element trees comparable without inspecting closures.
pub struct Handler<T>(Rc<dyn Fn(T)>);

impl<T> Handler<T> {
    /// Wraps a closure.
    pub fn new(handler: impl Fn(T) + 'static) -> Self {
        Self(Rc::new(handler))
    }

    /// Invokes the handler. Panics inside the closure propagate to the caller.
    pub fn call(&self, arg: T) {
        (self.0)(arg)
    }
}

impl<T> Clone for Handler<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> PartialEq for Handler<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

impl<T, F> From<F> for Handler<T>
where
    F: Fn(T) + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}
