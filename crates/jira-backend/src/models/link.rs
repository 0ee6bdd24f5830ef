use serde::{Deserialize, Serialize};

/// Issue link type from `GET /issueLinkType`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraIssueLinkType {
    pub id: String,
    /// Link type name (e.g., "Blocks", "Relates")
    pub name: String,
    /// Inward description (e.g., "is blocked by")
    pub inward: String,
    /// Outward description (e.g., "blocks")
    pub outward: String,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraLinkTypesResponse {
    pub issue_link_types: Vec<JiraIssueLinkType>,
}
