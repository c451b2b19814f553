//! Named route callbacks.
//!
//! Routes declare their callback by name; the registry is the only way a name
//! becomes something callable. Handlers are registered up front by the
//! application and looked up by exact name at dispatch time.

use std::collections::HashMap;
use std::fmt;

use crate::error::{DispatchError, DispatchResult};

/// A handler invoked with the resolved URL of a matched route.
pub trait RouteCallback {
    fn call(&mut self, resolved_url: &str);
}

impl<F> RouteCallback for F
where
    F: FnMut(&str),
{
    fn call(&mut self, resolved_url: &str) {
        self(resolved_url)
    }
}

/// Maps callback names to handlers.
#[derive(Default)]
pub struct CallbackRegistry {
    handlers: HashMap<String, Box<dyn RouteCallback>>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under `name`. A later registration replaces an earlier one.
    pub fn register<C>(&mut self, name: impl Into<String>, handler: C)
    where
        C: RouteCallback + 'static,
    {
        let name = name.into();
        if self.handlers.insert(name.clone(), Box::new(handler)).is_some() {
            tracing::debug!(callback = %name, "Callback handler replaced");
        }
    }

    /// Look up the handler registered under `name`.
    pub fn resolve(&mut self, name: &str) -> Option<&mut (dyn RouteCallback + 'static)> {
        self.handlers.get_mut(name).map(|h| h.as_mut())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Call the handler registered under `name` with `resolved_url`.
    ///
    /// An unknown name is reported as an error and nothing is called. Routes
    /// without a callback name are caught by the dispatcher before this.
    pub fn invoke(&mut self, name: &str, resolved_url: &str) -> DispatchResult<()> {
        let handler = self
            .resolve(name)
            .ok_or_else(|| DispatchError::UnknownCallback {
                name: name.to_string(),
            })?;
        handler.call(resolved_url);
        Ok(())
    }
}

impl fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.handlers.keys().collect();
        names.sort();
        f.debug_struct("CallbackRegistry")
            .field("handlers", &names)
            .finish()
    }
}
