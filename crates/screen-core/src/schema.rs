//! Schema classifier: static lookup tables from field schema identifiers to UI categories

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::models::{FieldSchema, SchemaId};
use crate::ui::{InputValueType, UiType};

/// Full identifier of a built-in Jira custom field type
macro_rules! custom {
    ($suffix:literal) => {
        concat!("com.atlassian.jira.plugin.system.customfieldtypes:", $suffix)
    };
}

pub const CUSTOM_TEXTFIELD: &str = custom!("textfield");
pub const CUSTOM_SELECT: &str = custom!("select");
pub const CUSTOM_MULTISELECT: &str = custom!("multiselect");
pub const CUSTOM_CASCADING_SELECT: &str = custom!("cascadingselect");
pub const CUSTOM_MULTI_USER_PICKER: &str = custom!("multiuserpicker");
pub const EPIC_LINK_SCHEMA: &str = "com.pyxis.greenhopper.jira:gh-epic-link";
pub const EPIC_NAME_SCHEMA: &str = "com.pyxis.greenhopper.jira:gh-epic-label";
pub const SPRINT_SCHEMA: &str = "com.pyxis.greenhopper.jira:gh-sprint";

static SYSTEM_UI_TYPES: LazyLock<HashMap<&'static str, UiType>> = LazyLock::new(|| {
    HashMap::from([
        ("summary", UiType::Input),
        ("description", UiType::Textarea),
        ("environment", UiType::Textarea),
        ("duedate", UiType::Date),
        ("assignee", UiType::User),
        ("reporter", UiType::User),
        ("creator", UiType::User),
        ("priority", UiType::Select),
        ("components", UiType::Select),
        ("fixVersions", UiType::Select),
        ("versions", UiType::Select),
        ("labels", UiType::Select),
        ("security", UiType::Select),
        ("resolution", UiType::Select),
        ("issuetype", UiType::Select),
        ("project", UiType::Select),
        ("issuelinks", UiType::IssueLink),
        ("timetracking", UiType::Timetracking),
        ("worklog", UiType::Worklog),
        ("attachment", UiType::Attachment),
        ("comment", UiType::Comments),
        ("subtasks", UiType::Subtasks),
        ("votes", UiType::Votes),
        ("watches", UiType::Watches),
        ("status", UiType::NonEditable),
        ("created", UiType::NonEditable),
        ("updated", UiType::NonEditable),
        ("resolutiondate", UiType::NonEditable),
        ("lastViewed", UiType::NonEditable),
        ("statuscategorychangedate", UiType::NonEditable),
    ])
});

static CUSTOM_UI_TYPES: LazyLock<HashMap<&'static str, UiType>> = LazyLock::new(|| {
    HashMap::from([
        (custom!("textfield"), UiType::Input),
        (custom!("float"), UiType::Input),
        (custom!("url"), UiType::Input),
        (custom!("textarea"), UiType::Textarea),
        (custom!("multicheckboxes"), UiType::Checkbox),
        (custom!("radiobuttons"), UiType::Radio),
        (custom!("datepicker"), UiType::Date),
        (custom!("datetime"), UiType::DateTime),
        (custom!("userpicker"), UiType::User),
        (custom!("multiuserpicker"), UiType::User),
        (custom!("select"), UiType::Select),
        (custom!("multiselect"), UiType::Select),
        (custom!("cascadingselect"), UiType::Select),
        (custom!("labels"), UiType::Select),
        (custom!("version"), UiType::Select),
        (custom!("multiversion"), UiType::Select),
        (custom!("project"), UiType::Select),
        (custom!("grouppicker"), UiType::Select),
        (custom!("multigrouppicker"), UiType::Select),
        (custom!("readonlyfield"), UiType::NonEditable),
        (EPIC_NAME_SCHEMA, UiType::Input),
        (EPIC_LINK_SCHEMA, UiType::Select),
        (SPRINT_SCHEMA, UiType::Select),
    ])
});

static VALUE_TYPES: LazyLock<HashMap<&'static str, InputValueType>> = LazyLock::new(|| {
    HashMap::from([
        ("summary", InputValueType::String),
        (custom!("textfield"), InputValueType::String),
        (custom!("float"), InputValueType::Number),
        (custom!("url"), InputValueType::Url),
        (EPIC_NAME_SCHEMA, InputValueType::String),
    ])
});

static MULTI_SELECT_SCHEMAS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "components",
        "fixVersions",
        "versions",
        "labels",
        "issuelinks",
        custom!("multiselect"),
        custom!("multiuserpicker"),
        custom!("multiversion"),
        custom!("labels"),
        custom!("multigrouppicker"),
        custom!("multicheckboxes"),
    ])
});

static CREATEABLE_SELECT_SCHEMAS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "components",
        "fixVersions",
        "versions",
        "labels",
        custom!("labels"),
        custom!("version"),
        custom!("multiversion"),
    ])
});

/// Rendering category of a schema; unknown schemas default to `Input`
pub fn classify(schema: &FieldSchema) -> UiType {
    schema
        .system
        .as_deref()
        .and_then(|system| SYSTEM_UI_TYPES.get(system))
        .or_else(|| {
            schema
                .custom
                .as_deref()
                .and_then(|custom| CUSTOM_UI_TYPES.get(custom))
        })
        .copied()
        .unwrap_or(UiType::Input)
}

/// Value kind of an `Input` field; defaults to `String`
pub fn value_type(schema: &FieldSchema) -> InputValueType {
    lookup_id(schema)
        .and_then(|id| VALUE_TYPES.get(id))
        .copied()
        .unwrap_or_default()
}

pub fn is_multi_select(schema: &FieldSchema) -> bool {
    lookup_id(schema).is_some_and(|id| MULTI_SELECT_SCHEMAS.contains(id))
}

pub fn is_createable_select(schema: &FieldSchema) -> bool {
    lookup_id(schema).is_some_and(|id| CREATEABLE_SELECT_SCHEMAS.contains(id))
}

pub fn is_cascading_select(schema: &FieldSchema) -> bool {
    schema.custom.as_deref() == Some(CUSTOM_CASCADING_SELECT)
}

pub fn is_multi_user(schema: &FieldSchema) -> bool {
    schema.custom.as_deref() == Some(CUSTOM_MULTI_USER_PICKER)
}

/// Whether the UI has an editor or display for this schema identifier
pub fn is_known_schema(id: SchemaId<'_>) -> bool {
    match id {
        SchemaId::System(system) => SYSTEM_UI_TYPES.contains_key(system),
        SchemaId::Custom(custom) => CUSTOM_UI_TYPES.contains_key(custom),
        SchemaId::Unknown => false,
    }
}

fn lookup_id(schema: &FieldSchema) -> Option<&str> {
    match schema.id() {
        SchemaId::System(id) | SchemaId::Custom(id) => Some(id),
        SchemaId::Unknown => None,
    }
}
