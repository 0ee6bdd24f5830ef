//! Renderable projection of field metadata and the transformer results

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{IssueLinkType, IssueType};

/// UI fields keyed by field key
pub type FieldUiMap = BTreeMap<String, FieldUi>;

/// Rendering category of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiType {
    Input,
    Textarea,
    Checkbox,
    Radio,
    Date,
    DateTime,
    User,
    Select,
    IssueLink,
    Timetracking,
    Worklog,
    // Display-only categories
    Attachment,
    Comments,
    Subtasks,
    Votes,
    Watches,
    NonEditable,
}

impl UiType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UiType::Input => "input",
            UiType::Textarea => "textarea",
            UiType::Checkbox => "checkbox",
            UiType::Radio => "radio",
            UiType::Date => "date",
            UiType::DateTime => "datetime",
            UiType::User => "user",
            UiType::Select => "select",
            UiType::IssueLink => "issuelink",
            UiType::Timetracking => "timetracking",
            UiType::Worklog => "worklog",
            UiType::Attachment => "attachment",
            UiType::Comments => "comments",
            UiType::Subtasks => "subtasks",
            UiType::Votes => "votes",
            UiType::Watches => "watches",
            UiType::NonEditable => "noneditable",
        }
    }
}

impl std::fmt::Display for UiType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Primitive value kind of an `Input` field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputValueType {
    #[default]
    String,
    Number,
    Url,
}

impl std::fmt::Display for InputValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InputValueType::String => "string",
            InputValueType::Number => "number",
            InputValueType::Url => "url",
        };
        write!(f, "{}", s)
    }
}

/// A field the UI knows how to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldUi {
    pub key: String,
    pub name: String,
    pub required: bool,
    /// Hidden behind the "show more" disclosure
    pub advanced: bool,
    #[serde(flatten)]
    pub kind: FieldKind,
}

/// Category-specific attributes, tagged by `ui_type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "ui_type", rename_all = "lowercase")]
pub enum FieldKind {
    Input {
        value_type: InputValueType,
    },
    Textarea,
    Checkbox {
        allowed_values: Vec<serde_json::Value>,
    },
    Radio {
        allowed_values: Vec<serde_json::Value>,
    },
    Date,
    DateTime,
    User {
        is_multi: bool,
    },
    Select {
        allowed_values: Vec<serde_json::Value>,
        is_multi: bool,
        is_cascading: bool,
        is_createable: bool,
        auto_complete_url: String,
        auto_complete_jql: String,
    },
    IssueLink {
        allowed_values: Vec<IssueLinkType>,
        is_createable: bool,
        is_multi: bool,
    },
    Timetracking,
    Worklog,
    Attachment,
    Comments,
    Subtasks,
    Votes,
    Watches,
    NonEditable,
}

impl FieldUi {
    pub fn ui_type(&self) -> UiType {
        match &self.kind {
            FieldKind::Input { .. } => UiType::Input,
            FieldKind::Textarea => UiType::Textarea,
            FieldKind::Checkbox { .. } => UiType::Checkbox,
            FieldKind::Radio { .. } => UiType::Radio,
            FieldKind::Date => UiType::Date,
            FieldKind::DateTime => UiType::DateTime,
            FieldKind::User { .. } => UiType::User,
            FieldKind::Select { .. } => UiType::Select,
            FieldKind::IssueLink { .. } => UiType::IssueLink,
            FieldKind::Timetracking => UiType::Timetracking,
            FieldKind::Worklog => UiType::Worklog,
            FieldKind::Attachment => UiType::Attachment,
            FieldKind::Comments => UiType::Comments,
            FieldKind::Subtasks => UiType::Subtasks,
            FieldKind::Votes => UiType::Votes,
            FieldKind::Watches => UiType::Watches,
            FieldKind::NonEditable => UiType::NonEditable,
        }
    }
}

/// A field that could not be rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldProblem {
    pub key: String,
    pub name: String,
    pub required: bool,
    pub message: String,
    /// Offending schema identifier, or "unknown schema"
    pub schema: String,
}

/// Output of one field transform
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldTransformerResult {
    pub fields: FieldUiMap,
    pub non_renderable_fields: Vec<FieldProblem>,
    pub has_require_non_renderables: bool,
}

/// Renderable create screen of one issue type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueTypeUi {
    pub id: String,
    pub name: String,
    pub icon_url: String,
    pub fields: FieldUiMap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueTypeProblem {
    pub issue_type: IssueType,
    /// False when the issue type cannot be offered at all
    pub is_renderable: bool,
    pub message: String,
    pub non_renderable_fields: Vec<FieldProblem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateMetaTransformerResult {
    /// `None` only when the project has no issue types
    pub selected_issue_type: Option<IssueType>,
    pub issue_type_uis: BTreeMap<String, IssueTypeUi>,
    pub problems: BTreeMap<String, IssueTypeProblem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditMetaTransformerResult {
    pub issue_key: String,
    pub issue_type: IssueType,
    pub fields: FieldUiMap,
    /// Current values of the rendered fields that have one
    pub field_values: BTreeMap<String, serde_json::Value>,
    pub problem: Option<IssueTypeProblem>,
}
