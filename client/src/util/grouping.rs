//! Grouping transformer: flat generated list → editable board.

#[cfg(test)]
#[path = "grouping_test.rs"]
mod grouping_test;

use uuid::Uuid;

use crate::net::types::GeneratedProperty;
use crate::state::board::{Board, Property, PropertyGroup};

/// Group color applied when the generator omits one.
pub const DEFAULT_GROUP_COLOR: &str = "#CCCCCC";

struct GroupDraft {
    name: String,
    color: String,
    properties: Vec<String>,
}

/// Build an editable board from the flat generated property list.
///
/// Groups are keyed by the `group` string verbatim (case-sensitive, no
/// trimming) and ordered by first appearance. The first entry of a group
/// fixes its color; colors on later entries of the same group are ignored.
/// Property order within a group follows input order. Every call assigns
/// fresh ids, so ids are never comparable across boards.
///
/// Malformed entries (empty names) pass through unchanged; the generator
/// is not fully trusted and the board must stay editable regardless.
#[must_use]
pub fn build_board(properties: &[GeneratedProperty]) -> Board {
    let mut drafts: Vec<GroupDraft> = Vec::new();

    for entry in properties {
        match drafts.iter_mut().find(|draft| draft.name == entry.group) {
            Some(draft) => draft.properties.push(entry.name.clone()),
            None => drafts.push(GroupDraft {
                name: entry.group.clone(),
                color: if entry.color.is_empty() {
                    DEFAULT_GROUP_COLOR.to_owned()
                } else {
                    entry.color.clone()
                },
                properties: vec![entry.name.clone()],
            }),
        }
    }

    drafts
        .into_iter()
        .map(|draft| PropertyGroup {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            color: draft.color,
            properties: draft
                .properties
                .into_iter()
                .map(|name| Property { id: Uuid::new_v4().to_string(), name })
                .collect(),
        })
        .collect()
}
