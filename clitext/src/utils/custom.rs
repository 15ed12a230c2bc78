//! # Custom Types
//!
//! A registry of caller-defined answer types. Each entry pairs a validator with
//! the help text shown for that type. A [`crate::utils::Terminal`] receives the
//! registry when it is built and only ever reads from it.
//!
//! A validator receives the raw line and returns `Some(value)` to accept it or
//! `None` to have the user asked again.
//!
//! ```rust
//! use clitext::utils::CustomTypes;
//!
//! let mut types = CustomTypes::new();
//! types.register("port", "Enter a port between 1 and 65535", |raw| {
//!     raw.parse::<u16>().ok().filter(|port| *port != 0)
//! });
//!
//! assert!(types.contains("port"));
//! assert_eq!(types.help("port"), Some("Enter a port between 1 and 65535"));
//! ```
use std::any::Any;
use std::collections::HashMap;
use std::fmt::Debug;

/// A value produced by a custom validator.
pub type CustomValue = Box<dyn Any + Send>;

type Validator = Box<dyn Fn(&str) -> Option<CustomValue>>;

struct CustomType {
    validator: Validator,
    help: String,
}

#[derive(Default)]
pub struct CustomTypes {
    entries: HashMap<String, CustomType>,
}

impl CustomTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name`, replacing any earlier entry with the same name.
    pub fn register<T, F>(&mut self, name: impl Into<String>, help: impl Into<String>, validator: F)
    where
        T: Any + Send,
        F: Fn(&str) -> Option<T> + 'static,
    {
        let boxed: Validator =
            Box::new(move |raw: &str| validator(raw).map(|value| Box::new(value) as CustomValue));

        self.entries.insert(
            name.into(),
            CustomType {
                validator: boxed,
                help: help.into(),
            },
        );
    }

    /// Builder flavour of [`CustomTypes::register`].
    pub fn with<T, F>(mut self, name: impl Into<String>, help: impl Into<String>, validator: F) -> Self
    where
        T: Any + Send,
        F: Fn(&str) -> Option<T> + 'static,
    {
        self.register(name, help, validator);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn help(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|entry| entry.help.as_str())
    }

    /// Runs the validator registered under `name`.
    ///
    /// Returns `None` when the type is unknown, use [`CustomTypes::contains`]
    /// to tell that apart from a refused input.
    pub fn validate(&self, name: &str, raw: &str) -> Option<CustomValue> {
        self.entries
            .get(name)
            .and_then(|entry| (entry.validator)(raw))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Debug for CustomTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}
