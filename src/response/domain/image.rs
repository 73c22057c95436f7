//! Images shown on cards and option items.

use serde::{Deserialize, Serialize};

use crate::response::{error::ValidationError, validation::require_text};

/// An image with its accessibility text and optional pixel dimensions.
///
/// Dimensions are only serialised when set; there are no defaults.
///
/// # Examples
///
/// ```
/// use palaver::response::domain::Image;
///
/// let image = Image::new("https://example.com/map.png", "City map")
///     .expect("valid image")
///     .with_width(640);
/// assert_eq!(image.width, Some(640));
/// assert!(image.height.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Location of the image.
    pub url: String,
    /// Text read to users who cannot see the image.
    pub accessibility_text: String,
    /// Width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Image {
    /// Creates an image without dimensions.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if `url` or
    /// `accessibility_text` is empty.
    pub fn new(
        url: impl Into<String>,
        accessibility_text: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            url: require_text("image", "url", url)?,
            accessibility_text: require_text("image", "accessibilityText", accessibility_text)?,
            width: None,
            height: None,
        })
    }

    /// Sets the width in pixels.
    #[must_use]
    pub const fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the height in pixels.
    #[must_use]
    pub const fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets whichever dimensions are given, leaving the others untouched.
    #[must_use]
    pub const fn with_dimensions(mut self, width: Option<u32>, height: Option<u32>) -> Self {
        if width.is_some() {
            self.width = width;
        }
        if height.is_some() {
            self.height = height;
        }
        self
    }
}
