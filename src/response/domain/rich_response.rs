//! Displayable and speakable units of a reply.
//!
//! Item kinds and fields this crate does not model are kept as raw JSON so
//! a rehydrated document encodes back to what it was decoded from.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::BasicCard;

/// A spoken line in speech markup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeechItem {
    /// Speech markup text.
    #[serde(default)]
    pub ssml: String,
    /// Fields not modelled here, such as `displayText`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SpeechItem {
    /// Creates a speech item holding `ssml` as given.
    #[must_use]
    pub fn new(ssml: impl Into<String>) -> Self {
        Self {
            ssml: ssml.into(),
            extra: Map::new(),
        }
    }
}

/// One element of `richResponse.items`.
///
/// Serialised with the variant name as the sole key:
///
/// ```json
/// { "simpleResponse": { "ssml": "<speak>Hi</speak>" } }
/// { "basicCard": { "title": "..." } }
/// ```
///
/// Any other item kind (e.g. `mediaResponse`) decodes to
/// [`ResponseItem::Other`] and is written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResponseItem {
    /// A spoken line.
    #[serde(rename = "simpleResponse")]
    SimpleSpeech(SpeechItem),
    /// A visual card.
    #[serde(rename = "basicCard")]
    BasicCard(BasicCard),
    /// An item kind this crate does not build, kept as raw JSON.
    #[serde(untagged)]
    Other(Value),
}

impl ResponseItem {
    /// Returns the speech markup, if this is a spoken line.
    #[must_use]
    pub fn ssml(&self) -> Option<&str> {
        match self {
            Self::SimpleSpeech(item) => Some(item.ssml.as_str()),
            Self::BasicCard(_) | Self::Other(_) => None,
        }
    }

    /// Returns the card, if this is a visual card.
    #[must_use]
    pub const fn as_basic_card(&self) -> Option<&BasicCard> {
        match self {
            Self::BasicCard(card) => Some(card),
            Self::SimpleSpeech(_) | Self::Other(_) => None,
        }
    }
}

/// A suggestion chip shown below the reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Chip label.
    pub title: String,
}

/// A chip that opens an external destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkOutSuggestion {
    /// Name of the destination shown on the chip.
    pub destination_name: String,
    /// Destination address.
    pub url: String,
}

/// The `richResponse` block: items, chips and the link-out chip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichResponse {
    /// Spoken lines and cards in display order.
    #[serde(default)]
    pub items: Vec<ResponseItem>,
    /// Suggestion chips.
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
    /// At most one link-out chip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_out_suggestion: Option<LinkOutSuggestion>,
    /// Fields not modelled here.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
