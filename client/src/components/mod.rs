//! Reusable UI components for the board pages.

pub mod board_display;
pub mod edit_controls;
pub mod group_card;
pub mod property_item;
pub mod toast;
