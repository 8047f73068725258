//! Wire model for per-index fetch responses.

use serde::Deserialize;

/// Payload returned by `GET /api/numbers/{dataset}/{axis}/{index}`.
///
/// All fields are optional on the wire; missing fields take their
/// defaults. A payload without an explicit `Success: true` counts as a
/// rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub(crate) struct FetchResponse {
    pub value: Vec<i64>,
    pub cause: Option<String>,
    pub success: bool,
}
