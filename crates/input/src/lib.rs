//! Input mapping: logical keys to camera actions.
//!
//! # Invariants
//! - The frame loop consumes actions, never raw window events, so key
//!   bindings stay data-driven and testable without a window.

pub mod action;

pub use action::{Action, Bindings, Key};
