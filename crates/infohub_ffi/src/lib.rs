//! Flutter-facing FFI surface for the Information Hub catalog core.

pub mod api;
