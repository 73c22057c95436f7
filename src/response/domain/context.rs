//! Conversational contexts carried between turns.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A named bag of parameters that persists across conversational turns.
///
/// # Examples
///
/// ```
/// use palaver::response::domain::Context;
/// use serde_json::json;
///
/// let context = Context::new("booking")
///     .with_parameter("guests", json!(4))
///     .with_lifespan(3);
/// assert_eq!(context.parameter("guests"), Some(&json!(4)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    /// Context name; lookups match on this.
    #[serde(default)]
    pub name: String,
    /// Parameter values keyed by parameter name.
    #[serde(default)]
    pub parameters: Map<String, Value>,
    /// Number of turns the platform keeps the context alive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifespan: Option<u32>,
}

impl Context {
    /// Creates a context with no parameters.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Map::new(),
            lifespan: None,
        }
    }

    /// Sets a parameter.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: Value) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }

    /// Sets the lifespan in turns.
    #[must_use]
    pub const fn with_lifespan(mut self, lifespan: u32) -> Self {
        self.lifespan = Some(lifespan);
        self
    }

    /// Returns a parameter value, if set.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }

    /// Returns `true` if this is the placeholder returned for a missing
    /// context: no name and no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.parameters.is_empty()
    }
}

/// The ordered contexts attached to a reply.
///
/// Names are not required to be unique; every lookup returns the first
/// match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextStore(Vec<Context>);

impl ContextStore {
    /// Returns the first context named `name`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Context> {
        self.0.iter().find(|context| context.name == name)
    }

    /// Returns the first context named `name`, or an empty placeholder.
    #[must_use]
    pub fn get(&self, name: &str) -> Cow<'_, Context> {
        self.find(name)
            .map_or_else(|| Cow::Owned(Context::default()), Cow::Borrowed)
    }

    /// Returns a mutable reference to the first context named `name`.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Context> {
        self.0.iter_mut().find(|context| context.name == name)
    }

    /// Sets `parameter` on the first context named `name`, appending a new
    /// context when none exists.
    ///
    /// Returns `true` if the context was created.
    pub fn set_parameter(
        &mut self,
        name: &str,
        parameter: impl Into<String>,
        value: Value,
    ) -> bool {
        if let Some(context) = self.find_mut(name) {
            context.parameters.insert(parameter.into(), value);
            return false;
        }
        self.0.push(Context::new(name).with_parameter(parameter, value));
        true
    }

    /// Appends a context.
    pub fn push(&mut self, context: Context) {
        self.0.push(context);
    }

    /// Replaces every context.
    pub fn replace(&mut self, contexts: Vec<Context>) {
        self.0 = contexts;
    }

    /// Returns the contexts in order.
    #[must_use]
    pub fn as_slice(&self) -> &[Context] {
        &self.0
    }

    /// Returns `true` if no contexts are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
