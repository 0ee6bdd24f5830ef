use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::meta::JiraIssueType;
use super::project::JiraProjectRef;

/// Issue as returned by `GET /issue/{key}?expand=renderedFields`
///
/// Field values stay raw; only `project` and `issuetype` are read structurally.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraIssue {
    pub id: String,
    pub key: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
    pub rendered_fields: Option<Map<String, Value>>,
}

impl JiraIssue {
    pub fn project(&self) -> Option<JiraProjectRef> {
        self.typed_field("project")
    }

    pub fn issue_type(&self) -> Option<JiraIssueType> {
        self.typed_field("issuetype")
    }

    /// Rendered value of a field; Jira reports `null` for fields without a rendering
    pub fn rendered(&self, key: &str) -> Option<&Value> {
        self.rendered_fields
            .as_ref()?
            .get(key)
            .filter(|v| !v.is_null())
    }

    pub fn value(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }

    fn typed_field<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        serde_json::from_value(self.value(key)?.clone()).ok()
    }
}
