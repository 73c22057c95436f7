//! Unit tests for cards, images and option items.

use crate::response::{
    domain::{BasicCard, Button, Image, OptionItem},
    error::ValidationError,
};
use rstest::rstest;
use serde_json::json;

// ============================================================================
// Image tests
// ============================================================================

#[rstest]
fn image_without_dimensions_omits_them() {
    let image = Image::new("https://example.com/i.png", "alt").expect("valid image");
    assert_eq!(
        serde_json::to_value(&image).expect("serialize"),
        json!({"url": "https://example.com/i.png", "accessibilityText": "alt"})
    );
}

#[rstest]
fn image_includes_only_provided_dimensions() {
    let image = Image::new("https://example.com/i.png", "alt")
        .expect("valid image")
        .with_height(80);
    let value = serde_json::to_value(&image).expect("serialize");
    assert_eq!(value["height"], json!(80));
    assert!(value.get("width").is_none());
}

#[rstest]
#[case("", "alt", "url")]
#[case("https://example.com/i.png", "", "accessibilityText")]
fn image_rejects_empty_fields(#[case] url: &str, #[case] alt: &str, #[case] field: &str) {
    let err = Image::new(url, alt).expect_err("empty field should be rejected");
    assert_eq!(err.field(), field);
}

// ============================================================================
// BasicCard tests
// ============================================================================

#[rstest]
fn basic_card_setters_populate_fields() {
    let card = BasicCard::new()
        .with_title("Title")
        .and_then(|card| card.with_subtitle("Sub"))
        .and_then(|card| card.with_formatted_text("Body"))
        .expect("valid card");
    assert_eq!(card.title.as_deref(), Some("Title"));
    assert_eq!(card.subtitle.as_deref(), Some("Sub"));
    assert_eq!(card.formatted_text.as_deref(), Some("Body"));
    assert!(card.image.is_none());
    assert!(card.buttons.is_empty());
}

#[rstest]
#[case::title(BasicCard::new().with_title(""), "title")]
#[case::subtitle(BasicCard::new().with_subtitle(""), "subtitle")]
#[case::text(BasicCard::new().with_formatted_text(""), "formattedText")]
#[case::button_title(BasicCard::new().add_button("", "https://example.com"), "title")]
#[case::button_url(BasicCard::new().add_button("Open", ""), "url")]
fn basic_card_rejects_empty_fields(
    #[case] result: Result<BasicCard, ValidationError>,
    #[case] field: &str,
) {
    let err = result.expect_err("empty field should be rejected");
    assert_eq!(err.field(), field);
}

#[rstest]
fn basic_card_error_message_names_component_and_field() {
    let err = BasicCard::new()
        .with_title("")
        .expect_err("empty title should be rejected");
    assert_eq!(err.to_string(), "basic card title cannot be empty");
}

#[rstest]
#[case::space(" ")]
#[case::tab("\t")]
fn basic_card_accepts_whitespace_only_text(#[case] title: &str) {
    let card = BasicCard::new()
        .with_title(title)
        .expect("whitespace is not an empty value");
    assert_eq!(card.title.as_deref(), Some(title));
}

#[rstest]
fn basic_card_buttons_serialize_with_open_url_action() {
    let card = BasicCard::new()
        .add_button("Docs", "https://example.com/docs")
        .expect("valid button");
    assert_eq!(
        serde_json::to_value(&card).expect("serialize"),
        json!({"buttons": [{"title": "Docs", "openUrlAction": {"url": "https://example.com/docs"}}]})
    );
}

#[rstest]
#[case(None, None, json!({"url": "https://x/i.png", "accessibilityText": "alt"}))]
#[case(Some(64), None, json!({"url": "https://x/i.png", "accessibilityText": "alt", "width": 64}))]
#[case(None, Some(48), json!({"url": "https://x/i.png", "accessibilityText": "alt", "height": 48}))]
#[case(
    Some(64),
    Some(48),
    json!({"url": "https://x/i.png", "accessibilityText": "alt", "width": 64, "height": 48})
)]
fn image_size_setters_emit_only_given_dimensions(
    #[case] width: Option<u32>,
    #[case] height: Option<u32>,
    #[case] expected: serde_json::Value,
) {
    let card = BasicCard::new()
        .with_image_size("https://x/i.png", "alt", width, height)
        .expect("valid card image");
    let item = OptionItem::new()
        .with_image_size("https://x/i.png", "alt", width, height)
        .expect("valid item image");
    let card_json = serde_json::to_value(&card).expect("serialize");
    let item_json = serde_json::to_value(&item).expect("serialize");
    assert_eq!(card_json["image"], expected);
    assert_eq!(item_json["image"], expected);
}

#[rstest]
fn image_size_setters_reject_empty_parts() {
    let card = BasicCard::new().with_image_size("", "alt", Some(1), None);
    let item = OptionItem::new().with_image_size("https://x/i.png", "", None, Some(1));
    assert_eq!(card.expect_err("empty url").field(), "url");
    assert_eq!(item.expect_err("empty alt").field(), "accessibilityText");
}

#[rstest]
fn button_exposes_url() {
    let button = Button::new("Go", "https://example.com").expect("valid button");
    assert_eq!(button.url(), "https://example.com");
}

// ============================================================================
// OptionItem tests
// ============================================================================

#[rstest]
fn option_item_defaults_to_empty_key_and_synonyms() {
    let item = OptionItem::new();
    assert_eq!(item.key(), "");
    assert!(item.option_info.synonyms.is_empty());
}

#[rstest]
fn option_item_rejects_empty_title() {
    let err = OptionItem::new()
        .with_title("")
        .expect_err("empty title should be rejected");
    assert_eq!(
        err,
        ValidationError::EmptyField {
            component: "option item",
            field: "title"
        }
    );
}

#[rstest]
#[case::description(OptionItem::new().with_description(""), "description")]
#[case::key(OptionItem::new().with_key(""), "key")]
#[case::synonym(OptionItem::new().add_synonym(""), "synonym")]
fn option_item_rejects_empty_fields(
    #[case] result: Result<OptionItem, ValidationError>,
    #[case] field: &str,
) {
    let err = result.expect_err("empty field should be rejected");
    assert_eq!(err.field(), field);
}

#[rstest]
fn option_item_synonyms_append_in_order() {
    let item = OptionItem::new()
        .with_title("x")
        .and_then(|item| item.with_key("k"))
        .and_then(|item| item.add_synonym("s1"))
        .and_then(|item| item.add_synonym("s2"))
        .expect("valid option item");
    assert_eq!(item.option_info.synonyms, ["s1", "s2"]);
    assert_eq!(item.key(), "k");
}

#[rstest]
fn option_item_key_is_replaced_not_appended() {
    let item = OptionItem::new()
        .with_key("first")
        .and_then(|item| item.with_key("second"))
        .expect("valid keys");
    assert_eq!(item.key(), "second");
}

#[rstest]
fn option_item_serializes_option_info() {
    let item = OptionItem::new()
        .with_title("Red")
        .and_then(|item| item.with_description("A warm colour"))
        .and_then(|item| item.with_key("RED"))
        .and_then(|item| item.add_synonym("crimson"))
        .expect("valid option item")
        .with_image(Image::new("https://example.com/red.png", "Red swatch").expect("valid image"));
    assert_eq!(
        serde_json::to_value(&item).expect("serialize"),
        json!({
            "optionInfo": {"key": "RED", "synonyms": ["crimson"]},
            "title": "Red",
            "description": "A warm colour",
            "image": {"url": "https://example.com/red.png", "accessibilityText": "Red swatch"}
        })
    );
}
