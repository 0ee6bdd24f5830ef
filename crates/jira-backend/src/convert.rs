//! Model conversions from Jira types to screen-core types

use screen_core::schema::{EPIC_LINK_SCHEMA, EPIC_NAME_SCHEMA};
use screen_core::{
    EpicField, EpicFieldInfo, FieldMeta, FieldMetaMap, FieldSchema, IssueLinkType, IssueTypeMeta,
    ProjectRef,
};
use tracing::debug;

use crate::models::*;

impl From<JiraFieldSchema> for FieldSchema {
    fn from(s: JiraFieldSchema) -> Self {
        Self {
            field_type: s.field_type,
            system: s.system,
            custom: s.custom,
            custom_id: s.custom_id,
            items: s.items,
        }
    }
}

impl From<JiraIssueLinkType> for IssueLinkType {
    fn from(l: JiraIssueLinkType) -> Self {
        Self {
            id: l.id,
            name: l.name,
            inward: l.inward,
            outward: l.outward,
        }
    }
}

impl From<JiraProject> for ProjectRef {
    fn from(p: JiraProject) -> Self {
        Self {
            id: p.id,
            key: p.key,
            name: Some(p.name),
        }
    }
}

impl From<JiraIssueTypeFields> for IssueTypeMeta {
    fn from(t: JiraIssueTypeFields) -> Self {
        let fields: FieldMetaMap = t
            .fields
            .into_iter()
            .map(|f| {
                let key = f.key.clone().or_else(|| f.field_id.clone()).unwrap_or_default();
                let meta = field_meta(&key, f);
                (key, meta)
            })
            .collect();

        Self {
            id: t.issue_type.id,
            name: t.issue_type.name,
            icon_url: t.issue_type.icon_url,
            subtask: t.issue_type.subtask,
            fields: Some(fields),
        }
    }
}

impl From<JiraIssueType> for screen_core::IssueType {
    fn from(t: JiraIssueType) -> Self {
        Self {
            id: t.id,
            name: t.name,
            icon_url: t.icon_url.unwrap_or_default(),
            subtask: t.subtask,
        }
    }
}

/// Build core field metadata; `key` is used when the entry carries none
pub fn field_meta(key: &str, f: JiraFieldMeta) -> FieldMeta {
    let key = f.key.unwrap_or_else(|| key.to_string());
    FieldMeta {
        id: f.field_id.unwrap_or_else(|| key.clone()),
        key,
        name: f.name,
        schema: f.schema.into(),
        required: f.required,
        allowed_values: f.allowed_values,
        auto_complete_url: f.auto_complete_url,
        current_value: None,
        rendered_value: None,
    }
}

/// Convert an editmeta response, attaching the issue's current and rendered values
pub fn edit_fields(meta: JiraEditMeta, issue: &JiraIssue) -> FieldMetaMap {
    meta.fields
        .into_iter()
        .map(|(key, f)| {
            let mut field = field_meta(&key, f);
            field.current_value = issue.value(&field.key).cloned();
            field.rendered_value = issue.rendered(&field.key).cloned();
            (field.key.clone(), field)
        })
        .collect()
}

/// Locate the epic link and epic name fields among the site's fields
///
/// Epics count as enabled only when both are present.
pub fn epic_fields_from(fields: &[JiraField]) -> EpicFieldInfo {
    let find = |custom: &str| {
        fields.iter().find_map(|f| {
            let schema = f.schema.as_ref()?;
            (schema.custom.as_deref() == Some(custom)).then(|| EpicField {
                id: f.id.clone(),
                name: f.name.clone(),
                cfid: schema.custom_id.map(|id| id.to_string()).unwrap_or_default(),
            })
        })
    };

    match (find(EPIC_LINK_SCHEMA), find(EPIC_NAME_SCHEMA)) {
        (Some(epic_link), Some(epic_name)) => {
            debug!(epic_link = %epic_link.id, epic_name = %epic_name.id, "epic fields found");
            EpicFieldInfo {
                epic_link,
                epic_name,
                epics_enabled: true,
            }
        }
        _ => {
            debug!("epic fields not found, epics disabled");
            EpicFieldInfo::disabled()
        }
    }
}
