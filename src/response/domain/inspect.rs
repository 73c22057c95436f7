//! Read-only predicates over a [`ResponseDocument`].
//!
//! Every predicate is total: a missing item, field or context yields
//! `false` rather than an error or a panic. Each one guards its own
//! structural accesses, so a malformed or half-built document can be
//! queried without pre-checks.

use serde_json::Value;

use super::{BasicCard, Permission, ResponseDocument, ResponseItem, SIGN_IN_INTENT, speech};

/// The needle(s) for [`ResponseDocument::speech_text_contains`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechQuery {
    /// Matches when the speech text contains this substring.
    Single(String),
    /// Matches when the speech text contains any of these substrings.
    /// An empty list never matches.
    Any(Vec<String>),
}

impl From<&str> for SpeechQuery {
    fn from(text: &str) -> Self {
        Self::Single(text.to_owned())
    }
}

impl From<String> for SpeechQuery {
    fn from(text: String) -> Self {
        Self::Single(text)
    }
}

impl From<Vec<String>> for SpeechQuery {
    fn from(texts: Vec<String>) -> Self {
        Self::Any(texts)
    }
}

impl From<&[&str]> for SpeechQuery {
    fn from(texts: &[&str]) -> Self {
        Self::Any(texts.iter().map(|text| (*text).to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for SpeechQuery {
    fn from(texts: [&str; N]) -> Self {
        Self::Any(texts.into_iter().map(str::to_owned).collect())
    }
}

impl SpeechQuery {
    fn matches(&self, haystack: &str) -> bool {
        match self {
            Self::Single(needle) => haystack.contains(needle.as_str()),
            Self::Any(needles) => needles
                .iter()
                .any(|needle| haystack.contains(needle.as_str())),
        }
    }
}

impl ResponseDocument {
    /// Returns `true` if the turn ends the conversation and, when
    /// `expected_speech` is given, both `speech` and the leading spoken
    /// line equal its enveloped form.
    #[must_use]
    pub fn is_tell(&self, expected_speech: Option<&str>) -> bool {
        !self.expect_user_response() && self.speech_matches(expected_speech)
    }

    /// Returns `true` if the turn keeps the conversation open and the
    /// given speech and reprompt match.
    ///
    /// The reprompt is compared verbatim, as stored by
    /// [`ask`](Self::ask).
    #[must_use]
    pub fn is_ask(&self, expected_speech: Option<&str>, expected_reprompt: Option<&str>) -> bool {
        self.expect_user_response()
            && self.speech_matches(expected_speech)
            && expected_reprompt.is_none_or(|reprompt| {
                self.reprompt_items()
                    .first()
                    .is_some_and(|item| item.ssml == reprompt)
            })
    }

    /// Returns `true` if the turn ends by playing `audio_url` with
    /// `fallback_text`.
    #[must_use]
    pub fn is_play(&self, audio_url: &str, fallback_text: &str) -> bool {
        self.is_tell(Some(speech::audio(audio_url, fallback_text).as_str()))
    }

    /// Returns `true` if the turn ends with the configured silence marker.
    #[must_use]
    pub fn is_empty_response(&self) -> bool {
        self.is_tell(Some(self.config.silence_marker.as_str()))
    }

    fn speech_matches(&self, expected_speech: Option<&str>) -> bool {
        let Some(expected) = expected_speech else {
            return true;
        };
        let ssml = speech::wrap(expected);
        self.speech() == ssml
            && self
                .items()
                .first()
                .and_then(ResponseItem::ssml)
                .is_some_and(|head| head == ssml)
    }

    /// Returns `true` if a card exists and the first card's title and body
    /// text equal the given values.
    #[must_use]
    pub fn has_basic_card(&self, title: Option<&str>, text: Option<&str>) -> bool {
        self.first_card().is_some_and(|card| {
            field_matches(card.title.as_deref(), title)
                && field_matches(card.formatted_text.as_deref(), text)
        })
    }

    /// Returns `true` if [`has_basic_card`](Self::has_basic_card) holds and
    /// the first card's image matches the given URL and accessibility text.
    #[must_use]
    pub fn has_image_card(
        &self,
        title: Option<&str>,
        text: Option<&str>,
        image_url: Option<&str>,
        accessibility_text: Option<&str>,
    ) -> bool {
        if !self.has_basic_card(title, text) {
            return false;
        }
        self.first_card()
            .and_then(|card| card.image.as_ref())
            .is_some_and(|image| {
                field_matches(Some(image.url.as_str()), image_url)
                    && field_matches(
                        Some(image.accessibility_text.as_str()),
                        accessibility_text,
                    )
            })
    }

    fn first_card(&self) -> Option<&BasicCard> {
        self.items().iter().find_map(ResponseItem::as_basic_card)
    }

    /// Returns `true` if a context named `name` is attached.
    #[must_use]
    pub fn has_context(&self, name: &str) -> bool {
        self.find_context(name).is_some()
    }

    /// Returns `true` if the context named `name` holds `value` under
    /// `parameter`.
    ///
    /// A parameter that was never set matches nothing.
    #[must_use]
    pub fn has_context_parameter(&self, name: &str, parameter: &str, value: &Value) -> bool {
        self.find_context(name)
            .and_then(|context| context.parameter(parameter))
            .is_some_and(|stored| stored == value)
    }

    /// Returns `true` if the session-state parameter equals `state`.
    #[must_use]
    pub fn has_state(&self, state: &str) -> bool {
        self.has_context_parameter(
            &self.config.state_context,
            &self.config.state_parameter,
            &Value::from(state),
        )
    }

    /// Returns `true` if the leading spoken line contains the query.
    ///
    /// # Examples
    ///
    /// ```
    /// use palaver::response::domain::ResponseDocument;
    ///
    /// let mut reply = ResponseDocument::new();
    /// reply.tell("Your table is booked for seven.");
    /// assert!(reply.speech_text_contains("booked"));
    /// assert!(reply.speech_text_contains(["cancelled", "seven"]));
    /// assert!(!reply.speech_text_contains(["cancelled", "eight"]));
    /// ```
    #[must_use]
    pub fn speech_text_contains(&self, query: impl Into<SpeechQuery>) -> bool {
        query.into().matches(&self.speech_text())
    }

    /// Returns `true` if `permission` has been requested.
    #[must_use]
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.payload().permissions_request.contains(permission)
    }

    /// Returns `true` if a suggestion chip labelled `title` exists.
    #[must_use]
    pub fn has_suggestion(&self, title: &str) -> bool {
        self.suggestions()
            .iter()
            .any(|suggestion| suggestion.title == title)
    }

    /// Returns `true` if a list selection is attached and, when given, its
    /// title equals `title`.
    #[must_use]
    pub fn has_list(&self, title: Option<&str>) -> bool {
        self.system_intent()
            .and_then(|intent| intent.as_list())
            .is_some_and(|list| field_matches(list.title.as_deref(), title))
    }

    /// Returns `true` if a carousel selection is attached.
    #[must_use]
    pub fn has_carousel(&self) -> bool {
        self.system_intent()
            .and_then(|intent| intent.as_carousel())
            .is_some()
    }

    /// Returns `true` if an account-linking sign-in request is attached.
    #[must_use]
    pub fn has_account_linking(&self) -> bool {
        self.expected_inputs()
            .iter()
            .any(|input| input.expects_intent(SIGN_IN_INTENT))
    }
}

// `None` for `expected` means "don't care".
fn field_matches(actual: Option<&str>, expected: Option<&str>) -> bool {
    expected.is_none_or(|wanted| actual == Some(wanted))
}
