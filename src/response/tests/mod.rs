//! Unit tests for the response module.
//!
//! Tests are organised by domain concept, covering builders, predicates
//! and the wire contract.

mod card_tests;
mod fixtures;
mod permission_tests;
