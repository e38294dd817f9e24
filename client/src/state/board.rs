//! Board state: the editable board, the active theme, and request flags.
//!
//! DESIGN
//! ======
//! The mutation helpers (`rename_group`, `recolor_group`, `rename_property`)
//! are pure replace-on-match functions: they take the previous group list and
//! return a fresh one, so the signal always swaps whole snapshots and an
//! unknown id is a no-op rather than an error. Stale ids from a view that
//! outlived a board replacement therefore cannot corrupt state.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use serde::{Deserialize, Serialize};

/// A single named board space belonging to one group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub name: String,
}

/// A named, colored cluster of properties. `id` is fixed at creation;
/// `name` and `color` are user-editable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyGroup {
    pub id: String,
    pub name: String,
    pub color: String,
    pub properties: Vec<Property>,
}

/// The full set of property groups for one theme, in first-seen order.
pub type Board = Vec<PropertyGroup>;

/// Board-level state: the current board (if any), the theme it was
/// generated for, and the loading/error flags of the generation call.
///
/// `board` is `None` before the first generation and after a reset; an
/// empty successful generation stores `Some(vec![])`, which is a valid
/// (empty) board, not a missing one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardState {
    pub board: Option<Board>,
    pub theme: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl BoardState {
    /// Replace the board and theme together. The loading and error flags
    /// are left untouched.
    pub fn replace(&mut self, board: Board, theme: String) {
        self.board = Some(board);
        self.theme = Some(theme);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Set or clear the error message. Setting an error does not clear the
    /// board; the previous board stays visible behind the error panel.
    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Discard the board entirely, e.g. when starting a new theme.
    pub fn clear(&mut self) {
        self.board = None;
        self.theme = None;
        self.error = None;
    }
}

/// Rename the group with `group_id`, leaving its color, id, and
/// properties untouched. Unknown ids return an identical snapshot.
#[must_use]
pub fn rename_group(board: &[PropertyGroup], group_id: &str, new_name: &str) -> Board {
    board
        .iter()
        .map(|group| {
            if group.id == group_id {
                PropertyGroup { name: new_name.to_owned(), ..group.clone() }
            } else {
                group.clone()
            }
        })
        .collect()
}

/// Recolor the group with `group_id`. The caller validates the color
/// string before calling; this function stores whatever it is given.
#[must_use]
pub fn recolor_group(board: &[PropertyGroup], group_id: &str, new_color: &str) -> Board {
    board
        .iter()
        .map(|group| {
            if group.id == group_id {
                PropertyGroup { color: new_color.to_owned(), ..group.clone() }
            } else {
                group.clone()
            }
        })
        .collect()
}

/// Rename a property, looked up within the named group only so a stale
/// property id can never match in some other group. Unknown group or
/// property ids return an identical snapshot.
#[must_use]
pub fn rename_property(
    board: &[PropertyGroup],
    group_id: &str,
    property_id: &str,
    new_name: &str,
) -> Board {
    board
        .iter()
        .map(|group| {
            if group.id != group_id {
                return group.clone();
            }
            PropertyGroup {
                properties: group
                    .properties
                    .iter()
                    .map(|property| {
                        if property.id == property_id {
                            Property { id: property.id.clone(), name: new_name.to_owned() }
                        } else {
                            property.clone()
                        }
                    })
                    .collect(),
                ..group.clone()
            }
        })
        .collect()
}
