//! Configuration for response documents.
//!
//! None of these values appear in the wire form directly; they control the
//! fixed strings the builder emits and the names used for session state.

/// Default placeholder prompt for account-linking sign-in requests.
pub const DEFAULT_SIGN_IN_PROMPT: &str = "PLACEHOLDER_FOR_SIGN_IN";

/// Default speech used for an intentionally empty reply.
pub const DEFAULT_SILENCE_MARKER: &str = r#"<break time="1ms"/>"#;

/// Default name of the context that carries session state.
pub const DEFAULT_STATE_CONTEXT: &str = "session";

/// Default name of the state parameter within the state context.
pub const DEFAULT_STATE_PARAMETER: &str = "STATE";

/// Configuration for a [`ResponseDocument`](crate::response::domain::ResponseDocument).
///
/// # Examples
///
/// ```
/// use palaver::response::config::ResponseConfig;
///
/// let config = ResponseConfig::default();
/// assert_eq!(config.state_context, "session");
///
/// let custom = ResponseConfig::default().with_state("dialog", "PHASE");
/// assert_eq!(custom.state_parameter, "PHASE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseConfig {
    /// Prompt text attached to account-linking sign-in requests.
    pub sign_in_prompt: String,
    /// Speech emitted by `empty_response` and matched by `is_empty_response`.
    pub silence_marker: String,
    /// Context holding session state.
    pub state_context: String,
    /// Parameter within `state_context` holding the state value.
    pub state_parameter: String,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            sign_in_prompt: DEFAULT_SIGN_IN_PROMPT.to_owned(),
            silence_marker: DEFAULT_SILENCE_MARKER.to_owned(),
            state_context: DEFAULT_STATE_CONTEXT.to_owned(),
            state_parameter: DEFAULT_STATE_PARAMETER.to_owned(),
        }
    }
}

impl ResponseConfig {
    /// Sets the account-linking prompt text.
    #[must_use]
    pub fn with_sign_in_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.sign_in_prompt = prompt.into();
        self
    }

    /// Sets the speech used for empty replies.
    #[must_use]
    pub fn with_silence_marker(mut self, marker: impl Into<String>) -> Self {
        self.silence_marker = marker.into();
        self
    }

    /// Sets the context and parameter names used for session state.
    #[must_use]
    pub fn with_state(
        mut self,
        context: impl Into<String>,
        parameter: impl Into<String>,
    ) -> Self {
        self.state_context = context.into();
        self.state_parameter = parameter.into();
        self
    }
}
