use serde::{Deserialize, Serialize};

/// Field definition from `GET /field`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraField {
    /// Field ID (e.g., "summary", "customfield_10011")
    pub id: String,
    pub key: Option<String>,
    pub name: String,
    pub schema: Option<JiraFieldSchema>,
}

/// Schema block shared by `/field`, createmeta and editmeta
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraFieldSchema {
    #[serde(rename = "type", default)]
    pub field_type: String,
    pub items: Option<String>,
    pub system: Option<String>,
    pub custom: Option<String>,
    pub custom_id: Option<u64>,
}

/// Field entry of a create or edit screen
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraFieldMeta {
    /// Present on createmeta, absent on editmeta (the map key is used instead)
    pub field_id: Option<String>,
    pub key: Option<String>,
    pub name: String,
    #[serde(default)]
    pub schema: JiraFieldSchema,
    #[serde(default)]
    pub required: bool,
    pub allowed_values: Option<Vec<serde_json::Value>>,
    pub auto_complete_url: Option<String>,
}
