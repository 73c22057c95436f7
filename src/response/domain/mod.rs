//! Domain types for the response subsystem.
//!
//! Pure data and builder logic with no I/O. Every type serialises to its
//! slice of the platform's response contract via serde.

mod basic_card;
mod collection;
mod context;
mod document;
mod image;
mod inspect;
mod intent;
mod option_item;
mod permission;
mod rich_response;
pub mod speech;

pub use basic_card::{BasicCard, Button, OpenUrlAction};
pub use collection::{Carousel, OptionCollection, OptionList, SelectionCollection};
pub use context::{Context, ContextStore};
pub use document::{GooglePayload, PlatformData, ResponseDocument};
pub use image::Image;
pub use inspect::SpeechQuery;
pub use intent::{
    ExpectedInput, ExpectedIntent, InputPrompt, OPTION_INTENT, OPTION_VALUE_SPEC_TYPE,
    SIGN_IN_INTENT, SpokenPrompt, SystemIntent,
};
pub use option_item::{OptionInfo, OptionItem};
pub use permission::{ParsePermissionError, Permission, PermissionSet};
pub use rich_response::{LinkOutSuggestion, ResponseItem, RichResponse, SpeechItem, Suggestion};
