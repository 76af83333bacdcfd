//! Named entry points the host page can call.
//!
//! Some widgets are driven from inline page markup (`onclick="setState('one')"`).
//! Instead of writing globals, each live widget registers its controls here;
//! the browser glue publishes every registered name on `window` and forwards
//! calls through [`ControlRegistry::invoke`].

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::BTreeMap;

type Control = Box<dyn FnMut(&str)>;

/// Name → callback table. Names are unique; re-registering replaces.
#[derive(Default)]
pub struct ControlRegistry {
    controls: BTreeMap<String, Control>,
}

impl ControlRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `control` under `name`, replacing any previous registration.
    pub fn register(&mut self, name: &str, control: impl FnMut(&str) + 'static) {
        if self.controls.insert(name.to_owned(), Box::new(control)).is_some() {
            log::debug!("control {name} re-registered");
        }
    }

    /// Call the control `name` with `arg`. Returns `false` if nothing is registered.
    pub fn invoke(&mut self, name: &str, arg: &str) -> bool {
        match self.controls.get_mut(name) {
            Some(control) => {
                control(arg);
                true
            }
            None => {
                log::debug!("control {name} not registered");
                false
            }
        }
    }

    /// Registered names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.controls.keys().map(String::as_str).collect()
    }
}
