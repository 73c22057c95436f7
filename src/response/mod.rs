//! Reply documents for a voice-assistant platform.
//!
//! This module builds and inspects the response a voice action returns
//! for one conversational turn: speech, cards, selection lists, permission
//! requests and conversational contexts.
//!
//! # Layout
//!
//! - **Domain**: pure types and builder logic ([`domain::ResponseDocument`],
//!   [`domain::BasicCard`], [`domain::OptionList`], ...)
//! - **Validation**: field rules enforced by the builders
//! - **Config**: fixed strings and session-state names
//! - **Wire**: JSON encoding of the platform contract
//!
//! # Example
//!
//! ```
//! use palaver::response::domain::{OptionItem, OptionList, ResponseDocument};
//!
//! let list = OptionList::new()
//!     .with_title("Pick a size")?
//!     .add_item(OptionItem::new().with_title("Small")?.with_key("S")?)
//!     .add_item(OptionItem::new().with_title("Large")?.with_key("L")?);
//!
//! let mut reply = ResponseDocument::new();
//! reply
//!     .ask("Which size would you like?", "Small or large?")
//!     .add_list(list)
//!     .set_state("choosing_size");
//!
//! assert!(reply.has_list(Some("Pick a size")));
//! assert!(reply.has_state("choosing_size"));
//!
//! let wire = reply.to_json()?;
//! assert_eq!(wire["data"]["google"]["systemIntent"]["intent"], "actions.intent.OPTION");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod validation;
pub mod wire;

#[cfg(test)]
mod tests;
