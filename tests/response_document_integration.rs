//! Behavioural integration tests for building and inspecting replies.
//!
//! These tests exercise end-to-end turns: a document is built through the
//! public builder API, checked with the predicates, and encoded to the
//! platform's JSON contract.

use eyre::{Result, eyre};
use palaver::response::{
    domain::{
        BasicCard, Carousel, Context, Image, OptionItem, OptionList, Permission,
        ResponseDocument,
    },
    error::{ContextError, ResponseError, ValidationError},
};
use serde_json::json;

fn option(title: &str, key: &str, synonyms: &[&str]) -> Result<OptionItem, ValidationError> {
    synonyms
        .iter()
        .try_fold(OptionItem::new().with_title(title)?.with_key(key)?, |item, synonym| {
            item.add_synonym(*synonym)
        })
}

// ============================================================================
// Scenario: A closing turn with a card
// ============================================================================

/// When the action says goodbye and shows a summary card, the reply ends
/// the session and carries both the speech and the card.
#[test]
fn closing_turn_with_card() -> Result<()> {
    // Arrange
    let mut reply = ResponseDocument::new();

    // Act
    reply
        .tell("Your order is on its way.")
        .add_basic_card("Order #42", "Arriving in 20 minutes")?;

    // Assert
    assert!(reply.is_tell(Some("Your order is on its way.")));
    assert!(reply.has_basic_card(Some("Order #42"), Some("Arriving in 20 minutes")));
    assert!(!reply.has_basic_card(Some("Order #43"), None));
    assert_eq!(reply.speech_text(), "Your order is on its way.");
    Ok(())
}

// ============================================================================
// Scenario: A question turn with selection list and state
// ============================================================================

/// When the action asks the user to choose from a list, the reply keeps
/// the session open, carries the list and remembers the dialog state.
#[test]
fn question_turn_with_list_and_state() -> Result<()> {
    // Arrange
    let list = OptionList::new()
        .with_title("Pizzas")?
        .add_item(option("Margherita", "MARGHERITA", &["plain", "cheese"])?)
        .add_item(option("Diavola", "DIAVOLA", &["spicy"])?);
    let mut reply = ResponseDocument::new();

    // Act
    reply
        .ask("Which pizza would you like?", "Margherita or Diavola?")
        .add_list(list)
        .add_suggestion_chips(["Margherita", "Diavola"])
        .set_state("CHOOSING_PIZZA");

    // Assert
    assert!(reply.is_ask(
        Some("Which pizza would you like?"),
        Some("Margherita or Diavola?")
    ));
    assert!(reply.has_list(Some("Pizzas")));
    assert!(reply.has_state("CHOOSING_PIZZA"));

    let wire = reply.to_json()?;
    let items = &wire["data"]["google"]["systemIntent"]["data"]["listSelect"]["items"];
    assert_eq!(items[0]["optionInfo"]["synonyms"], json!(["plain", "cheese"]));
    assert_eq!(wire["data"]["google"]["noInputPrompts"][0]["ssml"], json!("Margherita or Diavola?"));
    Ok(())
}

// ============================================================================
// Scenario: Location permission request
// ============================================================================

/// When the action needs the user's location twice over, the permission
/// is requested once and serialised under `permissions_request`.
#[test]
fn repeated_permission_requests_are_deduplicated() -> Result<()> {
    let mut reply = ResponseDocument::new();

    reply
        .ask("To find a store near you, I need your location.", "OK?")
        .request_device_precise_location_permission()
        .request_permission(Permission::DevicePreciseLocation)
        .request_name_permission();

    assert_eq!(
        reply.permissions(),
        [Permission::DevicePreciseLocation, Permission::Name]
    );
    let wire = reply.to_json()?;
    assert_eq!(
        wire["data"]["google"]["permissions_request"]["permissions"],
        json!(["DEVICE_PRECISE_LOCATION", "NAME"])
    );
    Ok(())
}

// ============================================================================
// Scenario: Context carried across turns
// ============================================================================

/// When a previous turn's contexts are restored and updated, lookups see
/// the update and missing contexts are reported distinctly.
#[test]
fn contexts_survive_rehydration_and_update() -> Result<()> {
    // Arrange
    let mut previous = ResponseDocument::new();
    previous.add_context(Context::new("booking").with_parameter("guests", json!(2)));
    let mut reply = ResponseDocument::from_json(previous.to_json()?)?;

    // Act
    reply.set_context_parameter("booking", "guests", 3);

    // Assert
    let guests = reply
        .get_context_parameter("booking", "guests")?
        .ok_or_else(|| eyre!("guests should be set"))?;
    assert_eq!(guests, &json!(3));
    assert!(matches!(
        reply.get_context_parameter("payment", "method"),
        Err(ContextError::NotFound(name)) if name == "payment"
    ));
    assert!(reply.get_context("payment").is_empty());
    Ok(())
}

// ============================================================================
// Scenario: Invalid elements are rejected
// ============================================================================

/// When a card or option item is given an empty required field, the
/// builder fails and identifies the field.
#[test]
fn empty_required_fields_are_rejected() {
    let card = BasicCard::new().with_subtitle("");
    let item = OptionItem::new().with_title("Valid").and_then(|i| i.add_synonym(""));
    let image = Image::new("", "alt");

    let errors: Vec<ResponseError> = [card.map(|_| ()), item.map(|_| ()), image.map(|_| ())]
        .into_iter()
        .filter_map(Result::err)
        .map(ResponseError::from)
        .collect();

    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        [
            "basic card subtitle cannot be empty",
            "option item synonym cannot be empty",
            "image url cannot be empty",
        ]
    );
}

// ============================================================================
// Scenario: Carousel replaces list, audio ends the turn
// ============================================================================

/// When both a list and a carousel are attached, only the later survives;
/// an audio reply always ends the session.
#[test]
fn carousel_overrides_list_and_audio_ends_turn() -> Result<()> {
    let mut reply = ResponseDocument::new();
    let list = OptionList::new().with_title("Old")?;
    let carousel = Carousel::new().add_item(option("Jazz", "JAZZ", &[])?);

    reply
        .add_list(list)
        .add_carousel(carousel)
        .play("https://example.com/jazz.mp3", "some jazz");

    assert!(reply.has_carousel());
    assert!(!reply.has_list(None));
    assert!(reply.is_play("https://example.com/jazz.mp3", "some jazz"));
    assert!(!reply.expect_user_response());
    Ok(())
}
