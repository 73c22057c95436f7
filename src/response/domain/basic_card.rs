//! Visual cards shown alongside spoken replies.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Image;
use crate::response::{error::ValidationError, validation::require_text};

const COMPONENT: &str = "basic card";

/// Target of a card button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenUrlAction {
    /// Destination opened when the button is pressed.
    pub url: String,
}

/// A button on a [`BasicCard`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    /// Button label.
    pub title: String,
    /// Link opened by the button.
    pub open_url_action: OpenUrlAction,
}

impl Button {
    /// Creates a button linking to `url`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if `title` or `url` is empty.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            title: require_text("button", "title", title)?,
            open_url_action: OpenUrlAction {
                url: require_text("button", "url", url)?,
            },
        })
    }

    /// Returns the destination URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.open_url_action.url
    }
}

/// A card with optional title, subtitle, body text, image and buttons.
///
/// Every setter rejects empty values with [`ValidationError`]; unset
/// fields are omitted from the wire form.
///
/// # Examples
///
/// ```
/// use palaver::response::domain::{BasicCard, Image};
///
/// let card = BasicCard::new()
///     .with_title("Forecast")?
///     .with_formatted_text("Sunny, 24°C")?
///     .with_image(Image::new("https://example.com/sun.png", "Sun")?)
///     .add_button("Details", "https://example.com/forecast")?;
/// assert_eq!(card.buttons.len(), 1);
/// # Ok::<(), palaver::response::error::ValidationError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicCard {
    /// Card heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Secondary heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_text: Option<String>,
    /// Card image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// Link buttons in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
    /// Fields not modelled here, kept when a card is rehydrated.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BasicCard {
    /// Creates an empty card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if `title` is empty.
    pub fn with_title(mut self, title: impl Into<String>) -> Result<Self, ValidationError> {
        self.title = Some(require_text(COMPONENT, "title", title)?);
        Ok(self)
    }

    /// Sets the subtitle.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if `subtitle` is empty.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Result<Self, ValidationError> {
        self.subtitle = Some(require_text(COMPONENT, "subtitle", subtitle)?);
        Ok(self)
    }

    /// Sets the body text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if `text` is empty.
    pub fn with_formatted_text(mut self, text: impl Into<String>) -> Result<Self, ValidationError> {
        self.formatted_text = Some(require_text(COMPONENT, "formattedText", text)?);
        Ok(self)
    }

    /// Sets the image.
    #[must_use]
    pub fn with_image(mut self, image: Image) -> Self {
        self.image = Some(image);
        self
    }

    /// Sets the image from its parts; each dimension is emitted only when
    /// given.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if `url` or
    /// `accessibility_text` is empty.
    pub fn with_image_size(
        self,
        url: impl Into<String>,
        accessibility_text: impl Into<String>,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Result<Self, ValidationError> {
        let image = Image::new(url, accessibility_text)?.with_dimensions(width, height);
        Ok(self.with_image(image))
    }

    /// Appends a link button.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if `title` or `url` is empty.
    pub fn add_button(
        mut self,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        self.buttons.push(Button::new(title, url)?);
        Ok(self)
    }
}
