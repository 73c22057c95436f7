//! Selectable entries for lists and carousels.

use serde::{Deserialize, Serialize};

use super::Image;
use crate::response::{error::ValidationError, validation::require_text};

const COMPONENT: &str = "option item";

/// Routing information the platform echoes back when an item is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionInfo {
    /// Key identifying the selected item. Empty until set.
    #[serde(default)]
    pub key: String,
    /// Alternative phrases that also select this item, in insertion order.
    #[serde(default)]
    pub synonyms: Vec<String>,
}

/// A single selectable entry in an [`OptionList`](super::OptionList) or
/// [`Carousel`](super::Carousel).
///
/// Every setter rejects empty values with [`ValidationError`].
///
/// # Examples
///
/// ```
/// use palaver::response::domain::OptionItem;
///
/// let item = OptionItem::new()
///     .with_title("Margherita")?
///     .with_key("pizza_margherita")?
///     .add_synonym("plain pizza")?
///     .add_synonym("cheese pizza")?;
/// assert_eq!(item.option_info.synonyms, ["plain pizza", "cheese pizza"]);
/// # Ok::<(), palaver::response::error::ValidationError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionItem {
    /// Selection routing key and synonyms.
    #[serde(default)]
    pub option_info: OptionInfo,
    /// Display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Display description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

impl OptionItem {
    /// Creates an item with an empty key and no synonyms.
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

    /// Sets the description.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if `description` is empty.
    pub fn with_description(
        mut self,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        self.description = Some(require_text(COMPONENT, "description", description)?);
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

    /// Sets the selection key, replacing any previous key.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if `key` is empty.
    pub fn with_key(mut self, key: impl Into<String>) -> Result<Self, ValidationError> {
        self.option_info.key = require_text(COMPONENT, "key", key)?;
        Ok(self)
    }

    /// Appends a synonym after any existing ones.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if `synonym` is empty.
    pub fn add_synonym(mut self, synonym: impl Into<String>) -> Result<Self, ValidationError> {
        self.option_info
            .synonyms
            .push(require_text(COMPONENT, "synonym", synonym)?);
        Ok(self)
    }

    /// Returns the selection key (empty when never set).
    #[must_use]
    pub fn key(&self) -> &str {
        &self.option_info.key
    }
}
