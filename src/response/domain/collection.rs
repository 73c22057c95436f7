//! Ordered collections of option items: lists and carousels.
//!
//! Both variants embed an [`OptionCollection`] and differ only in their
//! completeness rule, expressed through [`SelectionCollection::validate`].

use serde::{Deserialize, Serialize};

use super::OptionItem;
use crate::response::{error::ValidationError, validation::require_text};

/// The ordered items shared by every selection variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionCollection {
    /// Items in display order.
    #[serde(default)]
    pub items: Vec<OptionItem>,
}

impl OptionCollection {
    /// Appends an item.
    pub fn push(&mut self, item: OptionItem) {
        self.items.push(item);
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the collection holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Finds the first item with the given selection key.
    #[must_use]
    pub fn find_by_key(&self, key: &str) -> Option<&OptionItem> {
        self.items.iter().find(|item| item.key() == key)
    }
}

/// Behaviour shared by lists and carousels.
pub trait SelectionCollection {
    /// Returns the embedded collection.
    fn collection(&self) -> &OptionCollection;

    /// Checks the variant-specific completeness rule.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming the missing field.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Returns the items in display order.
    fn items(&self) -> &[OptionItem] {
        &self.collection().items
    }

    /// Returns `true` when [`validate`](Self::validate) passes.
    fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

/// A titled vertical list of selectable items.
///
/// The title is required before the list is complete, but the rule is
/// enforced by [`with_title`](Self::with_title) rather than at construction.
///
/// # Examples
///
/// ```
/// use palaver::response::domain::{OptionItem, OptionList, SelectionCollection};
///
/// let list = OptionList::new()
///     .with_title("Toppings")?
///     .add_item(OptionItem::new().with_title("Basil")?.with_key("basil")?);
/// assert!(list.is_complete());
/// assert_eq!(list.items().len(), 1);
/// # Ok::<(), palaver::response::error::ValidationError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionList {
    /// List heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Items in display order.
    #[serde(flatten)]
    pub collection: OptionCollection,
}

impl OptionList {
    /// Creates an empty, untitled list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the list heading.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if `title` is empty.
    pub fn with_title(mut self, title: impl Into<String>) -> Result<Self, ValidationError> {
        self.title = Some(require_text("list", "title", title)?);
        Ok(self)
    }

    /// Appends an item.
    #[must_use]
    pub fn add_item(mut self, item: OptionItem) -> Self {
        self.collection.push(item);
        self
    }

    /// Appends every item from `items`.
    #[must_use]
    pub fn with_items(mut self, items: impl IntoIterator<Item = OptionItem>) -> Self {
        self.collection.items.extend(items);
        self
    }
}

impl SelectionCollection for OptionList {
    fn collection(&self) -> &OptionCollection {
        &self.collection
    }

    fn validate(&self) -> Result<(), ValidationError> {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => Ok(()),
            _ => Err(ValidationError::empty_field("list", "title")),
        }
    }
}

/// A horizontally scrolling set of selectable items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carousel {
    /// Items in display order.
    #[serde(flatten)]
    pub collection: OptionCollection,
}

impl Carousel {
    /// Creates an empty carousel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item.
    #[must_use]
    pub fn add_item(mut self, item: OptionItem) -> Self {
        self.collection.push(item);
        self
    }

    /// Appends every item from `items`.
    #[must_use]
    pub fn with_items(mut self, items: impl IntoIterator<Item = OptionItem>) -> Self {
        self.collection.items.extend(items);
        self
    }
}

impl SelectionCollection for Carousel {
    fn collection(&self) -> &OptionCollection {
        &self.collection
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
