use super::*;
use crate::state::board::{Board, Property};

fn two_group_board() -> Board {
    vec![
        PropertyGroup {
            id: "g1".into(),
            name: "G1".into(),
            color: "#AAAAAA".into(),
            properties: vec![Property { id: "p1".into(), name: "Park Place".into() }],
        },
        PropertyGroup {
            id: "g2".into(),
            name: "G2".into(),
            color: "#BBBBBB".into(),
            properties: vec![
                Property { id: "p2".into(), name: "Boardwalk".into() },
                Property { id: "p3".into(), name: "Marvin Gardens".into() },
            ],
        },
    ]
}

// =============================================================
// filenames
// =============================================================

#[test]
fn filenames_collapse_whitespace_runs() {
    assert_eq!(csv_filename("Kansas   City"), "Kansas_City_monopoly_board.csv");
    assert_eq!(json_filename("Kansas   City"), "Kansas_City_monopoly_board.json");
}

#[test]
fn filenames_fall_back_when_theme_is_empty() {
    assert_eq!(csv_filename(""), "monopoly_board_monopoly_board.csv");
}

#[test]
fn filenames_replace_tabs_and_leading_whitespace() {
    assert_eq!(csv_filename("Deep\tSpace"), "Deep_Space_monopoly_board.csv");
    assert_eq!(csv_filename(" Rome "), "_Rome__monopoly_board.csv");
}

// =============================================================
// CSV codec
// =============================================================

#[test]
fn csv_output_matches_expected_rows_exactly() {
    let expected = "Group Name,Property Name,Group Color\r\n\
                    \"G1\",\"Park Place\",\"#AAAAAA\"\r\n\
                    \"G2\",\"Boardwalk\",\"#BBBBBB\"\r\n\
                    \"G2\",\"Marvin Gardens\",\"#BBBBBB\"\r\n";
    assert_eq!(to_csv(&two_group_board()), expected);
}

#[test]
fn csv_escapes_embedded_double_quotes_by_doubling() {
    let board = vec![PropertyGroup {
        id: "g1".into(),
        name: "Say \"Go\"".into(),
        color: "#AAAAAA".into(),
        properties: vec![Property { id: "p1".into(), name: "The \"Works\"".into() }],
    }];
    let csv = to_csv(&board);
    assert!(csv.contains("\"Say \"\"Go\"\"\",\"The \"\"Works\"\"\",\"#AAAAAA\"\r\n"));
}

#[test]
fn csv_skips_groups_without_properties() {
    let board = vec![PropertyGroup {
        id: "g1".into(),
        name: "Empty".into(),
        color: "#AAAAAA".into(),
        properties: Vec::new(),
    }];
    assert_eq!(to_csv(&board), "Group Name,Property Name,Group Color\r\n");
}

#[test]
fn csv_of_empty_board_is_header_only() {
    assert_eq!(to_csv(&[]), "Group Name,Property Name,Group Color\r\n");
}

// =============================================================
// JSON codec
// =============================================================

#[test]
fn json_round_trips_names_colors_and_properties() {
    let board = two_group_board();
    let json = to_json(&board).unwrap();
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0]["name"], "G1");
    assert_eq!(parsed[0]["color"], "#AAAAAA");
    assert_eq!(parsed[1]["properties"][0]["name"], "Boardwalk");
    assert_eq!(parsed[1]["properties"][1]["name"], "Marvin Gardens");
    // Ids are opaque but present.
    assert!(parsed[0]["id"].is_string());
    assert!(parsed[0]["properties"][0]["id"].is_string());
}

#[test]
fn json_is_pretty_printed_with_two_space_indent() {
    let json = to_json(&two_group_board()).unwrap();
    assert!(json.starts_with("[\n  {\n    \"id\""));
}

#[test]
fn json_of_empty_board_is_an_empty_array() {
    assert_eq!(to_json(&[]).unwrap(), "[]");
}
