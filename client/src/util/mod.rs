//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate pure board logic (grouping, export) and browser
//! concerns (download) from page and component code to improve reuse and
//! testability.

pub mod color;
pub mod download;
pub mod export;
pub mod grouping;
