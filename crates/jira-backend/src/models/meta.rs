use screen_core::Page;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::field::JiraFieldMeta;

/// Issue type entry of `GET /issue/createmeta/{project}/issuetypes`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraIssueType {
    pub id: String,
    pub name: String,
    pub icon_url: Option<String>,
    #[serde(default)]
    pub subtask: bool,
}

/// One page of createmeta issue types
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraIssueTypesPage {
    pub start_at: Option<usize>,
    pub total: Option<usize>,
    // Older Cloud deployments return "values"
    #[serde(alias = "values", default)]
    pub issue_types: Vec<JiraIssueType>,
}

/// One page of createmeta fields for an issue type
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraFieldsPage {
    pub start_at: Option<usize>,
    pub total: Option<usize>,
    #[serde(alias = "values", default)]
    pub fields: Vec<JiraFieldMeta>,
}

impl JiraIssueTypesPage {
    /// `requested` stands in for a missing `startAt`
    pub fn into_page(self, requested: usize) -> Page<JiraIssueType> {
        Page::new(self.start_at.unwrap_or(requested), self.total, self.issue_types)
    }
}

impl JiraFieldsPage {
    pub fn into_page(self, requested: usize) -> Page<JiraFieldMeta> {
        Page::new(self.start_at.unwrap_or(requested), self.total, self.fields)
    }
}

/// Response of `GET /issue/{key}/editmeta`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JiraEditMeta {
    #[serde(default)]
    pub fields: HashMap<String, JiraFieldMeta>,
}

/// Issue type with its full create screen
#[derive(Debug, Clone)]
pub struct JiraIssueTypeFields {
    pub issue_type: JiraIssueType,
    pub fields: Vec<JiraFieldMeta>,
}
