//! Lexical-scope environment chain.
//!
//! A frame is a mapping from name to value plus an optional link to an
//! outer frame; lookup walks outward until the name is found or the
//! chain is exhausted. Frames are reference-counted rather than
//! arena-indexed: a function value holds a clone of the `Env` active
//! at its definition site, and a recursive binding (`let f = fn(){f()}`)
//! closes a cycle through that same `Rc`. The cycle is never collected,
//! which is an accepted leak rather than a bug — see the design notes
//! on frame lifetime.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::value::Value;

/// Shared handle to an [`Environment`]. Cloning bumps the reference
/// count; the underlying frame is never copied.
pub type Env = Rc<RefCell<Environment>>;

#[derive(Debug)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Env>,
}

impl Environment {
    pub fn new() -> Env {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: None,
        }))
    }

    /// A new frame whose outer link is `outer`. Used both for function
    /// calls (outer = the captured defining frame) and for any other
    /// nested scope that needs its own bindings.
    pub fn enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: Some(Rc::clone(outer)),
        }))
    }

    /// Walks the frame chain outward until `name` is found.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.borrow().get(name))
    }

    /// Unconditional write into this frame only. A `let` that rebinds
    /// a name already in scope shadows it going forward; it never
    /// reaches out to mutate an outer frame's binding.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_walks_outward_through_the_chain() {
        let outer = Environment::new();
        outer.borrow_mut().set("x", Value::Integer(1));
        let inner = Environment::enclosed(&outer);

        assert_eq!(inner.borrow().get("x"), Some(Value::Integer(1)));
    }

    #[test]
    fn set_only_writes_the_current_frame() {
        let outer = Environment::new();
        outer.borrow_mut().set("x", Value::Integer(1));
        let inner = Environment::enclosed(&outer);
        inner.borrow_mut().set("x", Value::Integer(2));

        assert_eq!(inner.borrow().get("x"), Some(Value::Integer(2)));
        assert_eq!(outer.borrow().get("x"), Some(Value::Integer(1)));
    }

    #[test]
    fn missing_name_returns_none() {
        let env = Environment::new();
        assert_eq!(env.borrow().get("missing"), None);
    }

    #[test]
    fn rebinding_in_the_same_frame_is_visible_to_earlier_closures() {
        // A closure captures the frame by reference (Rc), not by value,
        // so a later `let x = ...` in that same frame is visible to it.
        let env = Environment::new();
        env.borrow_mut().set("x", Value::Integer(1));
        let captured = Rc::clone(&env);

        env.borrow_mut().set("x", Value::Integer(2));

        assert_eq!(captured.borrow().get("x"), Some(Value::Integer(2)));
    }
}
