//! Derived read views over the article store.
//!
//! # Responsibility
//! - Derive the filtered catalog view and the bookmark subview.
//!
//! # Invariants
//! - Views borrow from the store; they never copy bookmark state.
//! - Views preserve store order; nothing is sorted.

pub mod catalog;
