//! Wire types shared with the generation endpoint.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One entry of the generated flat list: a property name plus the group it
/// belongs to and that group's color.
///
/// Entries are not unique and arrive in model output order. `color` may be
/// empty when the model omits it; the grouping transformer substitutes a
/// default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedProperty {
    pub name: String,
    pub group: String,
    #[serde(default)]
    pub color: String,
}

/// Body for `POST /api/generate`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub theme: String,
}

/// Success body from `POST /api/generate`. `properties` may be empty.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub properties: Vec<GeneratedProperty>,
}
