//! In-memory article store.
//!
//! # Responsibility
//! - Own the seeded article collection for one session.
//! - Apply the bookmark toggle, the only content mutation in core.
//!
//! # Invariants
//! - Articles are never added or removed after seeding.
//! - Article ids are unique for the store lifetime.

pub mod article_store;
