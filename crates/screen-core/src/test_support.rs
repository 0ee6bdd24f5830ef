//! Builders shared by the unit tests

use crate::models::*;
use crate::schema::{EPIC_LINK_SCHEMA, EPIC_NAME_SCHEMA};
use crate::transformer::SiteContext;

pub const EPIC_NAME_ID: &str = "customfield_10011";
pub const EPIC_LINK_ID: &str = "customfield_10014";

pub fn epic_fields() -> EpicFieldInfo {
    EpicFieldInfo {
        epic_link: EpicField {
            id: EPIC_LINK_ID.to_string(),
            name: "Epic Link".to_string(),
            cfid: "10014".to_string(),
        },
        epic_name: EpicField {
            id: EPIC_NAME_ID.to_string(),
            name: "Epic Name".to_string(),
            cfid: "10011".to_string(),
        },
        epics_enabled: true,
    }
}

pub fn link_types() -> Vec<IssueLinkType> {
    vec![
        IssueLinkType {
            id: "10000".to_string(),
            name: "Blocks".to_string(),
            inward: "is blocked by".to_string(),
            outward: "blocks".to_string(),
        },
        IssueLinkType {
            id: "10003".to_string(),
            name: "Relates".to_string(),
            inward: "relates to".to_string(),
            outward: "relates to".to_string(),
        },
    ]
}

pub fn epic_site() -> SiteContext {
    SiteContext::new(epic_fields(), link_types())
}

pub fn strings(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

pub fn field_map(fields: impl IntoIterator<Item = FieldMeta>) -> FieldMetaMap {
    fields.into_iter().map(|f| (f.key.clone(), f)).collect()
}

pub fn summary() -> FieldMeta {
    FieldMeta::new("summary", "Summary", FieldSchema::system("summary", "string")).required()
}

pub fn description() -> FieldMeta {
    FieldMeta::new("description", "Description", FieldSchema::system("description", "string"))
}

pub fn reporter() -> FieldMeta {
    FieldMeta::new("reporter", "Reporter", FieldSchema::system("reporter", "user")).required()
}

pub fn labels() -> FieldMeta {
    FieldMeta::new("labels", "Labels", FieldSchema::system("labels", "array"))
}

pub fn issue_links() -> FieldMeta {
    FieldMeta::new("issuelinks", "Linked Issues", FieldSchema::system("issuelinks", "array"))
}

pub fn epic_name() -> FieldMeta {
    FieldMeta::new(EPIC_NAME_ID, "Epic Name", FieldSchema::custom(EPIC_NAME_SCHEMA, "string"))
        .required()
}

pub fn epic_link() -> FieldMeta {
    FieldMeta::new(EPIC_LINK_ID, "Epic Link", FieldSchema::custom(EPIC_LINK_SCHEMA, "any"))
}

pub fn widget(required: bool) -> FieldMeta {
    let field = FieldMeta::new(
        "customfield_999",
        "Widget",
        FieldSchema::custom("unknown.plugin:widget", "any"),
    );
    if required {
        field.required()
    } else {
        field
    }
}

pub fn issue_type_meta(id: &str, name: &str, fields: Vec<FieldMeta>) -> IssueTypeMeta {
    IssueTypeMeta {
        id: id.to_string(),
        name: name.to_string(),
        icon_url: None,
        subtask: false,
        fields: Some(field_map(fields)),
    }
}

pub fn project(issue_types: Vec<IssueTypeMeta>) -> ProjectCreateMeta {
    ProjectCreateMeta {
        project: ProjectRef {
            id: "10000".to_string(),
            key: "PROJ".to_string(),
            name: Some("Project".to_string()),
        },
        issue_types,
    }
}
