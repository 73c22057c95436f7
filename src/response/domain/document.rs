//! The `ResponseDocument` aggregate root: one conversational turn's reply.
//!
//! Builder operations mutate the document in place and return `&mut Self`
//! so calls can be chained. Validating builders return
//! `Result<&mut Self, ValidationError>` and leave the document untouched
//! on failure.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::{
    BasicCard, Carousel, Context, ContextStore, ExpectedInput, Image, LinkOutSuggestion,
    OptionList, Permission, PermissionSet, ResponseItem, RichResponse, SelectionCollection,
    SpeechItem, Suggestion, SystemIntent, speech,
};
use crate::response::{
    config::ResponseConfig,
    error::{ContextError, ValidationError},
};

/// Platform-specific payload wrapper (`data`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformData {
    /// The voice platform's payload.
    #[serde(default)]
    pub google: GooglePayload,
    /// Payloads for other platforms, kept as raw JSON.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The voice platform's payload (`data.google`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GooglePayload {
    /// `true` keeps the session open for a reply; `false` ends it.
    #[serde(default)]
    pub expect_user_response: bool,
    /// Spoken lines, cards and chips.
    #[serde(default)]
    pub rich_response: RichResponse,
    /// Reprompts spoken when the user says nothing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub no_input_prompts: Vec<SpeechItem>,
    /// List or carousel selection directive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_intent: Option<SystemIntent>,
    /// Requested permissions.
    #[serde(
        rename = "permissions_request",
        default,
        skip_serializing_if = "PermissionSet::is_empty"
    )]
    pub permissions_request: PermissionSet,
    /// Platform input requests such as sign-in.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expected_inputs: Vec<ExpectedInput>,
    /// Fields not modelled here, kept when a document is rehydrated.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single turn's reply to the voice platform.
///
/// # Invariants
///
/// - `speech` is always wrapped in exactly one speech envelope after a
///   `tell`, `ask` or `play`.
/// - After those calls the newest spoken line sits at `items()[0]` and
///   `speech()` equals its markup.
/// - A document carries at most one system intent; the latest call wins.
/// - Permissions are duplicate-free in first-request order.
/// - Decoding is pass-through: unknown item kinds and fields survive a
///   decode-then-encode round trip.
///
/// # Examples
///
/// ```
/// use palaver::response::domain::{Permission, ResponseDocument};
///
/// let mut reply = ResponseDocument::new();
/// reply
///     .ask("Where should I deliver?", "Please tell me an address.")
///     .request_permission(Permission::DevicePreciseLocation)
///     .add_suggestion_chips(["Home", "Work"]);
///
/// assert!(reply.is_ask(Some("Where should I deliver?"), Some("Please tell me an address.")));
/// assert_eq!(reply.speech_text(), "Where should I deliver?");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseDocument {
    #[serde(default)]
    pub(crate) speech: String,
    #[serde(default)]
    pub(crate) data: PlatformData,
    #[serde(rename = "contextOut", default)]
    pub(crate) contexts: ContextStore,
    #[serde(flatten)]
    pub(crate) extra: Map<String, Value>,
    #[serde(skip)]
    pub(crate) config: ResponseConfig,
}

impl ResponseDocument {
    /// Creates an empty document with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty document with the given configuration.
    #[must_use]
    pub fn with_config(config: ResponseConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    // ------------------------------------------------------------------
    // Speech
    // ------------------------------------------------------------------

    /// Speaks `speech` and ends the conversation.
    pub fn tell(&mut self, speech: &str) -> &mut Self {
        self.data.google.expect_user_response = false;
        self.push_speech(speech);
        self
    }

    /// Speaks `speech` and keeps the conversation open.
    ///
    /// `reprompt` replaces any earlier reprompt and is stored exactly as
    /// given; it is not wrapped in a speech envelope.
    pub fn ask(&mut self, speech: &str, reprompt: &str) -> &mut Self {
        self.data.google.expect_user_response = true;
        self.push_speech(speech);
        self.data.google.no_input_prompts = vec![SpeechItem::new(reprompt)];
        self
    }

    /// Plays the clip at `audio_url` and ends the conversation.
    ///
    /// `fallback_text` is spoken if the clip cannot be played.
    pub fn play(&mut self, audio_url: &str, fallback_text: &str) -> &mut Self {
        self.tell(&speech::audio(audio_url, fallback_text))
    }

    /// Ends the conversation with the configured silence marker.
    pub fn empty_response(&mut self) -> &mut Self {
        let marker = self.config.silence_marker.clone();
        self.tell(&marker)
    }

    fn push_speech(&mut self, text: &str) {
        let ssml = speech::wrap(text);
        self.speech.clone_from(&ssml);
        self.data
            .google
            .rich_response
            .items
            .insert(0, ResponseItem::SimpleSpeech(SpeechItem::new(ssml)));
    }

    /// Returns the text of the leading spoken line without its envelope.
    ///
    /// Returns an empty string when there are no items, the first item is
    /// not a spoken line, or its markup is empty.
    #[must_use]
    pub fn speech_text(&self) -> String {
        self.items()
            .first()
            .and_then(ResponseItem::ssml)
            .filter(|ssml| !ssml.is_empty())
            .map(speech::unwrap)
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Contexts
    // ------------------------------------------------------------------

    /// Returns the first context named `name`, or an empty context.
    #[must_use]
    pub fn get_context(&self, name: &str) -> Cow<'_, Context> {
        self.contexts.get(name)
    }

    /// Returns the first context named `name`, if attached.
    #[must_use]
    pub fn find_context(&self, name: &str) -> Option<&Context> {
        self.contexts.find(name)
    }

    /// Replaces every attached context.
    pub fn set_contexts(&mut self, contexts: Vec<Context>) -> &mut Self {
        self.contexts.replace(contexts);
        self
    }

    /// Attaches a context after any existing ones.
    pub fn add_context(&mut self, context: Context) -> &mut Self {
        self.contexts.push(context);
        self
    }

    /// Sets a parameter on the first context named `name`.
    ///
    /// A context that does not exist yet is created and attached first.
    pub fn set_context_parameter(
        &mut self,
        name: &str,
        parameter: &str,
        value: impl Into<Value>,
    ) -> &mut Self {
        if self.contexts.set_parameter(name, parameter, value.into()) {
            debug!(context = name, parameter, "created context to hold parameter");
        }
        self
    }

    /// Returns a parameter of the context named `name`.
    ///
    /// The inner `None` means the context exists but the parameter was
    /// never set.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::NotFound` if no context named `name` exists.
    pub fn get_context_parameter(
        &self,
        name: &str,
        parameter: &str,
    ) -> Result<Option<&Value>, ContextError> {
        self.contexts
            .find(name)
            .map(|context| context.parameter(parameter))
            .ok_or_else(|| ContextError::NotFound(name.to_owned()))
    }

    /// Records `state` in the configured session-state context.
    pub fn set_state(&mut self, state: &str) -> &mut Self {
        let context = self.config.state_context.clone();
        let parameter = self.config.state_parameter.clone();
        self.set_context_parameter(&context, &parameter, state)
    }

    // ------------------------------------------------------------------
    // Permissions
    // ------------------------------------------------------------------

    /// Requests `permission`; repeated requests are ignored.
    pub fn request_permission(&mut self, permission: Permission) -> &mut Self {
        if !self.data.google.permissions_request.insert(permission) {
            debug!(%permission, "permission already requested");
        }
        self
    }

    /// Requests the user's name.
    pub fn request_name_permission(&mut self) -> &mut Self {
        self.request_permission(Permission::Name)
    }

    /// Requests coarse device location.
    pub fn request_device_coarse_location_permission(&mut self) -> &mut Self {
        self.request_permission(Permission::DeviceCoarseLocation)
    }

    /// Requests precise device location.
    pub fn request_device_precise_location_permission(&mut self) -> &mut Self {
        self.request_permission(Permission::DevicePreciseLocation)
    }

    // ------------------------------------------------------------------
    // Cards, chips and intents
    // ------------------------------------------------------------------

    /// Appends a card with a title and body text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if `title` or `text` is empty.
    pub fn add_basic_card(
        &mut self,
        title: &str,
        text: &str,
    ) -> Result<&mut Self, ValidationError> {
        let card = BasicCard::new()
            .with_title(title)?
            .with_formatted_text(text)?;
        Ok(self.add_card(card))
    }

    /// Appends a card with a title, body text and image.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if any argument is empty.
    pub fn add_image_card(
        &mut self,
        title: &str,
        text: &str,
        image_url: &str,
        accessibility_text: &str,
    ) -> Result<&mut Self, ValidationError> {
        let card = BasicCard::new()
            .with_title(title)?
            .with_formatted_text(text)?
            .with_image(Image::new(image_url, accessibility_text)?);
        Ok(self.add_card(card))
    }

    /// Appends a prebuilt card after any existing items.
    pub fn add_card(&mut self, card: BasicCard) -> &mut Self {
        self.data
            .google
            .rich_response
            .items
            .push(ResponseItem::BasicCard(card));
        self
    }

    /// Appends an account-linking sign-in request.
    pub fn add_account_linking_card(&mut self) -> &mut Self {
        let input = ExpectedInput::sign_in(self.config.sign_in_prompt.as_str());
        self.data.google.expected_inputs.push(input);
        self
    }

    /// Replaces the suggestion chips, one per label.
    pub fn add_suggestion_chips<I>(&mut self, chips: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.data.google.rich_response.suggestions = chips
            .into_iter()
            .map(|chip| Suggestion { title: chip.into() })
            .collect();
        self
    }

    /// Sets the link-out chip, replacing any earlier one.
    pub fn add_link_out_suggestion(&mut self, destination_name: &str, url: &str) -> &mut Self {
        self.data.google.rich_response.link_out_suggestion = Some(LinkOutSuggestion {
            destination_name: destination_name.to_owned(),
            url: url.to_owned(),
        });
        self
    }

    /// Attaches a list selection, replacing any list or carousel.
    pub fn add_list(&mut self, list: OptionList) -> &mut Self {
        if let Err(error) = list.validate() {
            warn!(%error, "list attached before it was complete");
        }
        self.set_system_intent(SystemIntent::List(list))
    }

    /// Attaches a carousel selection, replacing any list or carousel.
    pub fn add_carousel(&mut self, carousel: Carousel) -> &mut Self {
        self.set_system_intent(SystemIntent::Carousel(carousel))
    }

    fn set_system_intent(&mut self, intent: SystemIntent) -> &mut Self {
        if let Some(previous) = self.data.google.system_intent.replace(intent) {
            debug!(
                replaced = previous.payload_key(),
                "system intent replaced by a later selection"
            );
        }
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the enveloped primary utterance.
    #[must_use]
    pub fn speech(&self) -> &str {
        &self.speech
    }

    /// Returns `true` if the turn keeps the session open.
    #[must_use]
    pub const fn expect_user_response(&self) -> bool {
        self.data.google.expect_user_response
    }

    /// Returns the spoken lines and cards in display order.
    #[must_use]
    pub fn items(&self) -> &[ResponseItem] {
        &self.data.google.rich_response.items
    }

    /// Returns the reprompts.
    #[must_use]
    pub fn reprompt_items(&self) -> &[SpeechItem] {
        &self.data.google.no_input_prompts
    }

    /// Returns the suggestion chips.
    #[must_use]
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.data.google.rich_response.suggestions
    }

    /// Returns the link-out chip, if set.
    #[must_use]
    pub const fn link_out_suggestion(&self) -> Option<&LinkOutSuggestion> {
        self.data.google.rich_response.link_out_suggestion.as_ref()
    }

    /// Returns the list or carousel selection, if set.
    #[must_use]
    pub const fn system_intent(&self) -> Option<&SystemIntent> {
        self.data.google.system_intent.as_ref()
    }

    /// Returns the requested permissions in request order.
    #[must_use]
    pub fn permissions(&self) -> &[Permission] {
        self.data.google.permissions_request.as_slice()
    }

    /// Returns the platform input requests.
    #[must_use]
    pub fn expected_inputs(&self) -> &[ExpectedInput] {
        &self.data.google.expected_inputs
    }

    /// Returns the attached contexts in order.
    #[must_use]
    pub fn contexts(&self) -> &[Context] {
        self.contexts.as_slice()
    }

    /// Returns the platform payload.
    #[must_use]
    pub const fn payload(&self) -> &GooglePayload {
        &self.data.google
    }

    /// Returns top-level fields carried over from a rehydrated document.
    #[must_use]
    pub const fn extra_fields(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ResponseConfig {
        &self.config
    }
}
