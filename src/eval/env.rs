//! The environment chain: name-to-value frames with outer links.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::value::Value;

/// A shared handle to an environment frame.
///
/// Closures and their enclosing scopes share frames by reference; a frame
/// lives as long as any closure still holding it.
pub type Env = Rc<RefCell<Environment>>;

/// A single environment frame: a mapping from names to values plus an
/// optional link to the enclosing frame.
///
/// Frames are created in exactly two places: once at program start, and
/// once per function call (enclosing the function's captured
/// environment). Blocks do not create frames, so a `let` inside an `if`
/// body writes to the surrounding function scope.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates a fresh top-level environment.
    pub fn new() -> Env {
        Rc::new(RefCell::new(Environment::default()))
    }

    /// Creates an environment enclosed by `outer`.
    ///
    /// Lookups that miss the new frame continue in `outer`; definitions
    /// always land in the new frame.
    pub fn new_enclosed(outer: Env) -> Env {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }))
    }

    /// Looks up a name, walking the chain of outer frames.
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self
                .outer
                .as_ref()
                .and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds a name in this frame.
    ///
    /// Only the innermost frame is ever written; bindings in outer frames
    /// are shadowed, not replaced.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }
}
