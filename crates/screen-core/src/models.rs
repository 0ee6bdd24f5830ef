use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field metadata keyed by field key, as returned for one issue type screen
pub type FieldMetaMap = BTreeMap<String, FieldMeta>;

/// Type description of a single field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Primitive kind (e.g. "array", "string", "number", "user")
    #[serde(rename = "type", default)]
    pub field_type: String,
    /// Built-in field identifier (e.g. "summary", "fixVersions")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// Plugin-defined field type (e.g. "com.atlassian.jira.plugin.system.customfieldtypes:select")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<String>,
    /// Numeric id of a custom field (the `10011` in `customfield_10011`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<u64>,
    /// Element type for arrays
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<String>,
}

/// The identifier a schema is classified by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaId<'a> {
    System(&'a str),
    Custom(&'a str),
    Unknown,
}

impl SchemaId<'_> {
    /// Text recorded in field problems for this identifier
    pub fn describe(&self) -> String {
        match self {
            SchemaId::System(id) | SchemaId::Custom(id) => id.to_string(),
            SchemaId::Unknown => "unknown schema".to_string(),
        }
    }
}

impl FieldSchema {
    pub fn system(system: &str, field_type: &str) -> Self {
        Self {
            field_type: field_type.to_string(),
            system: Some(system.to_string()),
            ..Self::default()
        }
    }

    pub fn custom(custom: &str, field_type: &str) -> Self {
        Self {
            field_type: field_type.to_string(),
            custom: Some(custom.to_string()),
            ..Self::default()
        }
    }

    /// `system` wins over `custom`; neither yields `Unknown`
    pub fn id(&self) -> SchemaId<'_> {
        match (&self.system, &self.custom) {
            (Some(system), _) => SchemaId::System(system),
            (None, Some(custom)) => SchemaId::Custom(custom),
            (None, None) => SchemaId::Unknown,
        }
    }
}

/// Metadata for one field on an issue screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMeta {
    pub id: String,
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub schema: FieldSchema,
    #[serde(default)]
    pub required: bool,
    /// Option objects exactly as Jira returns them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_complete_url: Option<String>,
    /// Current raw value (edit screens only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<serde_json::Value>,
    /// Current rendered (HTML) value (edit screens only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rendered_value: Option<serde_json::Value>,
}

impl FieldMeta {
    pub fn new(key: &str, name: &str, schema: FieldSchema) -> Self {
        Self {
            id: key.to_string(),
            key: key.to_string(),
            name: name.to_string(),
            schema,
            required: false,
            allowed_values: None,
            auto_complete_url: None,
            current_value: None,
            rendered_value: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Issue link type configured on the site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueLinkType {
    pub id: String,
    pub name: String,
    /// e.g. "is blocked by"
    pub inward: String,
    /// e.g. "blocks"
    pub outward: String,
}

/// One of the two site-specific epic custom fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpicField {
    /// Field id, e.g. "customfield_10011"
    pub id: String,
    pub name: String,
    /// Numeric custom field id used in JQL as `cf[<cfid>]`
    pub cfid: String,
}

/// Epic configuration of a site
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpicFieldInfo {
    pub epic_link: EpicField,
    pub epic_name: EpicField,
    pub epics_enabled: bool,
}

impl EpicFieldInfo {
    /// Site without epic support
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn epic_name_id(&self) -> Option<&str> {
        self.epics_enabled.then_some(self.epic_name.id.as_str())
    }

    pub fn epic_link_id(&self) -> Option<&str> {
        self.epics_enabled.then_some(self.epic_link.id.as_str())
    }
}

/// Issue type without field metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon_url: String,
    #[serde(default)]
    pub subtask: bool,
}

/// Issue type with the fields of its create screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueTypeMeta {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub subtask: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldMetaMap>,
}

impl IssueTypeMeta {
    pub fn issue_type(&self) -> IssueType {
        IssueType {
            id: self.id.clone(),
            name: self.name.clone(),
            icon_url: self.icon_url.clone().unwrap_or_default(),
            subtask: self.subtask,
        }
    }
}

/// Reference to a project (minimal fields)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: String,
    pub key: String,
    pub name: Option<String>,
}

/// Create metadata of a project: every issue type with its fields, in Jira order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCreateMeta {
    pub project: ProjectRef,
    #[serde(default)]
    pub issue_types: Vec<IssueTypeMeta>,
}

/// Edit metadata of an existing issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditMeta {
    pub issue_key: String,
    pub project_key: String,
    pub issue_type: IssueType,
    #[serde(default)]
    pub fields: FieldMetaMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_id_prefers_system() {
        let schema = FieldSchema {
            field_type: "array".to_string(),
            system: Some("labels".to_string()),
            custom: Some("com.atlassian.jira.plugin.system.customfieldtypes:labels".to_string()),
            ..FieldSchema::default()
        };
        assert_eq!(schema.id(), SchemaId::System("labels"));
    }

    #[test]
    fn schema_id_unknown_when_empty() {
        let schema = FieldSchema::default();
        assert_eq!(schema.id(), SchemaId::Unknown);
        assert_eq!(schema.id().describe(), "unknown schema");
    }

    #[test]
    fn field_meta_deserializes_from_fixture_json() {
        let json = serde_json::json!({
            "id": "customfield_10020",
            "key": "customfield_10020",
            "name": "Team",
            "schema": {
                "type": "option",
                "custom": "com.atlassian.jira.plugin.system.customfieldtypes:select",
                "custom_id": 10020
            },
            "required": true,
            "allowed_values": [{"id": "1", "value": "Core"}]
        });
        let field: FieldMeta = serde_json::from_value(json).unwrap();
        assert!(field.required);
        assert_eq!(field.schema.custom_id, Some(10020));
        assert_eq!(field.allowed_values.unwrap().len(), 1);
        assert!(field.current_value.is_none());
    }

    #[test]
    fn disabled_epics_have_no_ids() {
        let info = EpicFieldInfo::disabled();
        assert_eq!(info.epic_name_id(), None);
        assert_eq!(info.epic_link_id(), None);
    }

    #[test]
    fn issue_type_icon_defaults_to_empty() {
        let meta = IssueTypeMeta {
            id: "10001".to_string(),
            name: "Task".to_string(),
            icon_url: None,
            subtask: false,
            fields: None,
        };
        assert_eq!(meta.issue_type().icon_url, "");
    }
}
