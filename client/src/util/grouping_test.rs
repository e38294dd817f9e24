use std::collections::HashSet;

use super::*;

fn entry(name: &str, group: &str, color: &str) -> GeneratedProperty {
    GeneratedProperty { name: name.into(), group: group.into(), color: color.into() }
}

#[test]
fn empty_input_yields_empty_board() {
    assert!(build_board(&[]).is_empty());
}

#[test]
fn one_group_per_distinct_group_name_in_first_seen_order() {
    let input = vec![
        entry("Baltic Ave", "Brown", "#8B4513"),
        entry("Oriental Ave", "Light Blue", "#ADD8E6"),
        entry("Mediterranean Ave", "Brown", "#8B4513"),
        entry("Vermont Ave", "Light Blue", "#ADD8E6"),
    ];
    let board = build_board(&input);
    let names: Vec<&str> = board.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["Brown", "Light Blue"]);
}

#[test]
fn group_names_merge_case_sensitively_and_verbatim() {
    let input = vec![
        entry("A", "Brown", "#8B4513"),
        entry("B", "brown", "#8B4513"),
        entry("C", "Brown ", "#8B4513"),
    ];
    let board = build_board(&input);
    assert_eq!(board.len(), 3);
}

#[test]
fn first_entry_color_wins_for_the_group() {
    let input = vec![
        entry("Baltic Ave", "Brown", "#8B4513"),
        entry("Mediterranean Ave", "Brown", "#FF0000"),
    ];
    let board = build_board(&input);
    assert_eq!(board[0].color, "#8B4513");
}

#[test]
fn empty_color_on_first_entry_falls_back_to_default() {
    let input = vec![entry("Baltic Ave", "Brown", ""), entry("Mediterranean Ave", "Brown", "#FF0000")];
    let board = build_board(&input);
    assert_eq!(board[0].color, DEFAULT_GROUP_COLOR);
}

#[test]
fn property_order_within_group_follows_input_order() {
    let input = vec![
        entry("Boardwalk", "Dark Blue", "#00008B"),
        entry("Park Place", "Dark Blue", "#00008B"),
    ];
    let board = build_board(&input);
    let names: Vec<&str> = board[0].properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Boardwalk", "Park Place"]);
}

#[test]
fn property_counts_match_input_entries() {
    let input = vec![
        entry("A", "One", "#111111"),
        entry("B", "Two", "#222222"),
        entry("C", "One", "#111111"),
        entry("D", "One", "#111111"),
    ];
    let board = build_board(&input);
    assert_eq!(board[0].properties.len(), 3);
    assert_eq!(board[1].properties.len(), 1);
}

#[test]
fn all_ids_in_one_board_are_distinct() {
    let input = vec![
        entry("A", "One", "#111111"),
        entry("B", "Two", "#222222"),
        entry("C", "One", "#111111"),
    ];
    let board = build_board(&input);
    let mut ids = HashSet::new();
    for group in &board {
        assert!(ids.insert(group.id.clone()));
        for property in &group.properties {
            assert!(ids.insert(property.id.clone()));
        }
    }
}

#[test]
fn empty_property_names_pass_through() {
    let board = build_board(&[entry("", "Brown", "#8B4513")]);
    assert_eq!(board[0].properties[0].name, "");
}
