//! Shared fixtures for response tests.

use crate::response::domain::{OptionItem, OptionList, ResponseDocument};
use rstest::fixture;

#[fixture]
pub fn reply() -> ResponseDocument {
    ResponseDocument::new()
}

/// An option item with title, key and a single synonym.
pub fn option(title: &str, key: &str) -> OptionItem {
    OptionItem::new()
        .with_title(title)
        .and_then(|item| item.with_key(key))
        .and_then(|item| item.add_synonym(format!("{title} please")))
        .expect("test option item should build")
}

#[fixture]
pub fn size_list() -> OptionList {
    OptionList::new()
        .with_title("Sizes")
        .expect("test list title should be accepted")
        .add_item(option("Small", "S"))
        .add_item(option("Large", "L"))
}
