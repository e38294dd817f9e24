use super::*;

#[test]
fn board_tools_defines_only_submit_board() {
    let tools = board_tools();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].name, SUBMIT_BOARD_TOOL);
}

#[test]
fn submit_board_schema_requires_the_property_fields() {
    let tools = board_tools();
    let schema = &tools[0].input_schema;
    assert_eq!(schema["required"][0], "properties");

    let item = &schema["properties"]["properties"]["items"];
    let required: Vec<&str> = item["required"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(required, ["name", "group", "color"]);
}
