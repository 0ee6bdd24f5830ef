use std::collections::BTreeMap;

use tracing::debug;

use super::{common_fields, screen_filter_keys, NON_RENDERABLE_ISSUE_TYPE_MESSAGE};
use crate::models::EditMeta;
use crate::transformer::{FieldTransformer, SiteContext};
use crate::ui::{EditMetaTransformerResult, FieldTransformerResult, IssueTypeProblem};

/// Fields an existing issue shows outside the disclosure, on top of the defaults
pub const EDIT_COMMON_FIELDS: &[&str] = &[
    "assignee",
    "reporter",
    "issuelinks",
    "subtasks",
    "priority",
    "status",
    "issuetype",
    "attachment",
    "comment",
    "environment",
];

/// Fields an edit screen never shows
pub const DEFAULT_EDIT_FILTER_FIELDS: &[&str] = &[
    "votes",
    "creator",
    "project",
    "statuscategorychangedate",
    "lastViewed",
];

/// Builds the edit screen of one existing issue
pub struct EditScreenTransformer {
    fields: FieldTransformer,
    extra_filter_fields: Vec<String>,
}

impl EditScreenTransformer {
    pub fn new(site: SiteContext) -> Self {
        Self {
            fields: FieldTransformer::new(site),
            extra_filter_fields: Vec::new(),
        }
    }

    pub fn with_filter_fields(mut self, keys: &[String]) -> Self {
        self.extra_filter_fields.extend_from_slice(keys);
        self
    }

    /// Rendered fields are returned even when a required field is non-renderable;
    /// `problem.is_renderable` tells the caller whether the screen is complete.
    pub fn transform_edit_meta(&self, meta: &EditMeta) -> EditMetaTransformerResult {
        let epics = &self.fields.site().epic_fields;
        let common = common_fields(EDIT_COMMON_FIELDS, epics);
        let filter = screen_filter_keys(
            DEFAULT_EDIT_FILTER_FIELDS,
            &self.extra_filter_fields,
            &meta.fields,
            epics,
        );

        let FieldTransformerResult {
            fields,
            non_renderable_fields,
            has_require_non_renderables,
        } = self
            .fields
            .transform_fields(&meta.fields, &meta.project_key, &filter, &common);

        let field_values: BTreeMap<String, serde_json::Value> = fields
            .keys()
            .filter_map(|key| {
                let value = meta.fields.get(key)?.current_value.clone()?;
                Some((key.clone(), value))
            })
            .collect();

        let problem = (!non_renderable_fields.is_empty()).then(|| IssueTypeProblem {
            issue_type: meta.issue_type.clone(),
            is_renderable: !has_require_non_renderables,
            message: NON_RENDERABLE_ISSUE_TYPE_MESSAGE.to_string(),
            non_renderable_fields,
        });

        debug!(
            issue = %meta.issue_key,
            rendered = fields.len(),
            has_problem = problem.is_some(),
            "transformed edit screen"
        );

        EditMetaTransformerResult {
            issue_key: meta.issue_key.clone(),
            issue_type: meta.issue_type.clone(),
            fields,
            field_values,
            problem,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FieldMeta, FieldSchema, IssueType};
    use crate::test_support::*;

    fn edit_meta(fields: Vec<FieldMeta>) -> EditMeta {
        EditMeta {
            issue_key: "PROJ-7".to_string(),
            project_key: "PROJ".to_string(),
            issue_type: IssueType {
                id: "1".to_string(),
                name: "Task".to_string(),
                icon_url: String::new(),
                subtask: false,
            },
            fields: field_map(fields),
        }
    }

    fn transformer() -> EditScreenTransformer {
        EditScreenTransformer::new(epic_site())
    }

    #[test]
    fn edit_keeps_reporter_but_drops_creator() {
        let creator = FieldMeta::new("creator", "Creator", FieldSchema::system("creator", "user"));
        let meta = edit_meta(vec![summary(), reporter(), creator]);
        let result = transformer().transform_edit_meta(&meta);

        assert!(result.fields.contains_key("reporter"));
        assert!(!result.fields.contains_key("creator"));
        assert!(result.problem.is_none());
    }

    #[test]
    fn edit_common_fields_are_not_advanced() {
        let assignee =
            FieldMeta::new("assignee", "Assignee", FieldSchema::system("assignee", "user"));
        let duedate = FieldMeta::new("duedate", "Due date", FieldSchema::system("duedate", "date"));
        let meta = edit_meta(vec![assignee, duedate, issue_links()]);
        let result = transformer().transform_edit_meta(&meta);

        assert!(!result.fields["assignee"].advanced);
        assert!(!result.fields["issuelinks"].advanced);
        assert!(result.fields["duedate"].advanced);
    }

    #[test]
    fn current_values_are_collected_for_rendered_fields() {
        let mut summary = summary();
        summary.current_value = Some(serde_json::json!("Fix login"));
        let mut hidden = widget(false);
        hidden.current_value = Some(serde_json::json!("ignored"));

        let meta = edit_meta(vec![summary, description(), hidden]);
        let result = transformer().transform_edit_meta(&meta);

        assert_eq!(result.field_values.len(), 1);
        assert_eq!(result.field_values["summary"], "Fix login");
    }

    #[test]
    fn required_non_renderable_keeps_other_fields() {
        let result = transformer().transform_edit_meta(&edit_meta(vec![summary(), widget(true)]));

        assert!(result.fields.contains_key("summary"));
        let problem = result.problem.unwrap();
        assert!(!problem.is_renderable);
        assert_eq!(problem.issue_type.id, "1");
        assert_eq!(problem.non_renderable_fields.len(), 1);
    }

    #[test]
    fn epic_edit_screen_drops_epic_link() {
        let meta = edit_meta(vec![summary(), epic_name(), epic_link()]);
        let result = transformer().transform_edit_meta(&meta);
        assert!(!result.fields.contains_key(EPIC_LINK_ID));
        assert!(result.fields.contains_key(EPIC_NAME_ID));
    }
}
