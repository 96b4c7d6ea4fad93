//! Core use-case services.
//!
//! # Responsibility
//! - Turn presentation-layer intents into store and filter updates.
//! - Keep UI/FFI layers decoupled from derivation details.

pub mod catalog_session;
