//! Palaver: reply builder for voice-assistant actions.
//!
//! This crate builds the conversational-response document a voice action
//! returns to the platform for a single turn, and provides total predicates
//! for asserting on such documents in tests.
//!
//! # Modules
//!
//! - [`response`]: response document, UI elements, validation and wire format

pub mod response;
