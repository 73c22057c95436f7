//! System intents and expected inputs.
//!
//! A system intent tells the platform that the next user utterance is a
//! selection from a list or carousel. Expected inputs carry platform
//! helper requests such as account-linking sign-in.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Carousel, OptionList};

/// Intent name for list and carousel selection.
pub const OPTION_INTENT: &str = "actions.intent.OPTION";

/// Type tag of the selection payload.
pub const OPTION_VALUE_SPEC_TYPE: &str = "type.googleapis.com/google.actions.v2.OptionValueSpec";

/// Intent name for account-linking sign-in.
pub const SIGN_IN_INTENT: &str = "actions.intent.SIGN_IN";

/// The selection directive attached to a reply. Lists and carousels are
/// mutually exclusive.
///
/// Serialises as:
///
/// ```json
/// {
///   "intent": "actions.intent.OPTION",
///   "data": {
///     "@type": "type.googleapis.com/google.actions.v2.OptionValueSpec",
///     "listSelect": { "title": "...", "items": [] }
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "SystemIntentWire", try_from = "SystemIntentWire")]
pub enum SystemIntent {
    /// A titled list selection.
    List(OptionList),
    /// A carousel selection.
    Carousel(Carousel),
}

impl SystemIntent {
    /// Returns the list payload, if this is a list selection.
    #[must_use]
    pub const fn as_list(&self) -> Option<&OptionList> {
        match self {
            Self::List(list) => Some(list),
            Self::Carousel(_) => None,
        }
    }

    /// Returns the carousel payload, if this is a carousel selection.
    #[must_use]
    pub const fn as_carousel(&self) -> Option<&Carousel> {
        match self {
            Self::Carousel(carousel) => Some(carousel),
            Self::List(_) => None,
        }
    }

    /// Returns the wire name of the variant's payload key.
    #[must_use]
    pub const fn payload_key(&self) -> &'static str {
        match self {
            Self::List(_) => "listSelect",
            Self::Carousel(_) => "carouselSelect",
        }
    }
}

#[derive(Serialize, Deserialize)]
struct SystemIntentWire {
    intent: String,
    data: OptionValueSpec,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OptionValueSpec {
    #[serde(rename = "@type")]
    type_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    list_select: Option<OptionList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    carousel_select: Option<Carousel>,
}

impl From<SystemIntent> for SystemIntentWire {
    fn from(intent: SystemIntent) -> Self {
        let (list_select, carousel_select) = match intent {
            SystemIntent::List(list) => (Some(list), None),
            SystemIntent::Carousel(carousel) => (None, Some(carousel)),
        };
        Self {
            intent: OPTION_INTENT.to_owned(),
            data: OptionValueSpec {
                type_url: OPTION_VALUE_SPEC_TYPE.to_owned(),
                list_select,
                carousel_select,
            },
        }
    }
}

impl TryFrom<SystemIntentWire> for SystemIntent {
    type Error = String;

    fn try_from(wire: SystemIntentWire) -> Result<Self, Self::Error> {
        match (wire.data.list_select, wire.data.carousel_select) {
            (Some(list), _) => Ok(Self::List(list)),
            (None, Some(carousel)) => Ok(Self::Carousel(carousel)),
            (None, None) => Err(format!(
                "system intent '{}' carries neither listSelect nor carouselSelect",
                wire.intent
            )),
        }
    }
}

/// A spoken prompt inside an [`InputPrompt`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpokenPrompt {
    /// Plain text to be spoken.
    pub text_to_speech: String,
}

/// Prompts played while the platform waits for the expected input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputPrompt {
    /// Prompts spoken first.
    #[serde(default)]
    pub initial_prompts: Vec<SpokenPrompt>,
    /// Prompts spoken when the user says nothing.
    #[serde(default)]
    pub no_input_prompts: Vec<SpokenPrompt>,
}

/// An intent the platform may resolve the next input to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedIntent {
    /// Intent name, e.g. [`SIGN_IN_INTENT`].
    pub intent: String,
    /// Intent-specific payload.
    #[serde(default)]
    pub input_value_data: Map<String, Value>,
}

/// A platform input request appended to a reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedInput {
    /// What the platform says while waiting.
    #[serde(default)]
    pub input_prompt: InputPrompt,
    /// Intents the input may resolve to.
    #[serde(default)]
    pub possible_intents: Vec<ExpectedIntent>,
}

impl ExpectedInput {
    /// Creates an account-linking sign-in request with the given prompt.
    #[must_use]
    pub fn sign_in(prompt: impl Into<String>) -> Self {
        Self {
            input_prompt: InputPrompt {
                initial_prompts: vec![SpokenPrompt {
                    text_to_speech: prompt.into(),
                }],
                no_input_prompts: Vec::new(),
            },
            possible_intents: vec![ExpectedIntent {
                intent: SIGN_IN_INTENT.to_owned(),
                input_value_data: Map::new(),
            }],
        }
    }

    /// Returns `true` if `intent` is among the possible intents.
    #[must_use]
    pub fn expects_intent(&self, intent: &str) -> bool {
        self.possible_intents
            .iter()
            .any(|expected| expected.intent == intent)
    }
}
