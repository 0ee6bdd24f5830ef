//! Field transformer: filter and classify one screen's field metadata into UI fields

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::filter::{filter_field, ProblemCollector};
use crate::models::{EpicFieldInfo, FieldMeta, FieldMetaMap, IssueLinkType};
use crate::schema::{
    classify, is_cascading_select, is_createable_select, is_multi_select, is_multi_user,
    value_type,
};
use crate::traits::MetadataSource;
use crate::ui::{FieldKind, FieldTransformerResult, FieldUi, FieldUiMap, UiType};

const ISSUE_LINKS_KEY: &str = "issuelinks";

/// Site-wide collaborators resolved once and shared by every transform
#[derive(Debug, Clone, Default, Serialize)]
pub struct SiteContext {
    pub epic_fields: EpicFieldInfo,
    pub issue_link_types: Vec<IssueLinkType>,
}

impl SiteContext {
    pub fn new(epic_fields: EpicFieldInfo, issue_link_types: Vec<IssueLinkType>) -> Self {
        Self {
            epic_fields,
            issue_link_types,
        }
    }

    /// Resolve both collaborators from a metadata source.
    ///
    /// Epic field resolution errors propagate. Failing to list issue link types
    /// only disables issue links.
    pub fn resolve(source: &dyn MetadataSource) -> Result<Self> {
        let epic_fields = source.get_epic_fields()?;
        let issue_link_types = source.list_issue_link_types().unwrap_or_else(|e| {
            warn!(error = %e, "could not list issue link types, issue links will be filtered");
            Vec::new()
        });

        debug!(
            epics_enabled = epic_fields.epics_enabled,
            link_types = issue_link_types.len(),
            "resolved site context"
        );
        Ok(Self::new(epic_fields, issue_link_types))
    }
}

pub struct FieldTransformer {
    site: SiteContext,
}

impl FieldTransformer {
    pub fn new(site: SiteContext) -> Self {
        Self { site }
    }

    pub fn site(&self) -> &SiteContext {
        &self.site
    }

    /// Transform one screen's fields.
    ///
    /// * `filter_field_keys` - keys excluded without recording a problem
    /// * `common_fields` - keys shown outside the "advanced" disclosure
    pub fn transform_fields(
        &self,
        fields: &FieldMetaMap,
        project_key: &str,
        filter_field_keys: &[String],
        common_fields: &[String],
    ) -> FieldTransformerResult {
        let mut filter_keys: Vec<&str> = filter_field_keys.iter().map(String::as_str).collect();
        if self.site.issue_link_types.is_empty() {
            filter_keys.push(ISSUE_LINKS_KEY);
        }

        let epic_name_id = self.site.epic_fields.epic_name_id();
        let mut collector = ProblemCollector::new();
        let mut ui_fields = FieldUiMap::new();

        for field in fields.values() {
            if !collector.fold(filter_field(field, &filter_keys)) {
                continue;
            }

            let is_common = common_fields.iter().any(|k| *k == field.key)
                || epic_name_id == Some(field.key.as_str());

            ui_fields.insert(
                field.key.clone(),
                FieldUi {
                    key: field.key.clone(),
                    name: field.name.clone(),
                    required: field.required,
                    advanced: !is_common && !field.required,
                    kind: self.field_kind(field, project_key),
                },
            );
        }

        let has_require_non_renderables = collector.has_require_non_renderables();
        let non_renderable_fields = collector.into_problems();
        debug!(
            project = project_key,
            rendered = ui_fields.len(),
            non_renderable = non_renderable_fields.len(),
            "transformed fields"
        );

        FieldTransformerResult {
            fields: ui_fields,
            non_renderable_fields,
            has_require_non_renderables,
        }
    }

    fn field_kind(&self, field: &FieldMeta, project_key: &str) -> FieldKind {
        let schema = &field.schema;
        let allowed_values = || field.allowed_values.clone().unwrap_or_default();

        match classify(schema) {
            UiType::Input => FieldKind::Input {
                value_type: value_type(schema),
            },
            UiType::Textarea => FieldKind::Textarea,
            UiType::Checkbox => FieldKind::Checkbox {
                allowed_values: allowed_values(),
            },
            UiType::Radio => FieldKind::Radio {
                allowed_values: allowed_values(),
            },
            UiType::Date => FieldKind::Date,
            UiType::DateTime => FieldKind::DateTime,
            UiType::User => FieldKind::User {
                is_multi: is_multi_user(schema),
            },
            UiType::Select => FieldKind::Select {
                allowed_values: allowed_values(),
                is_multi: is_multi_select(schema),
                is_cascading: is_cascading_select(schema),
                is_createable: is_createable_select(schema),
                auto_complete_url: field.auto_complete_url.clone().unwrap_or_default(),
                auto_complete_jql: self.epic_link_jql(field, project_key).unwrap_or_default(),
            },
            UiType::IssueLink => FieldKind::IssueLink {
                allowed_values: self.site.issue_link_types.clone(),
                is_createable: true,
                is_multi: is_multi_select(schema),
            },
            UiType::Timetracking => FieldKind::Timetracking,
            UiType::Worklog => FieldKind::Worklog,
            UiType::Attachment => FieldKind::Attachment,
            UiType::Comments => FieldKind::Comments,
            UiType::Subtasks => FieldKind::Subtasks,
            UiType::Votes => FieldKind::Votes,
            UiType::Watches => FieldKind::Watches,
            UiType::NonEditable => FieldKind::NonEditable,
        }
    }

    /// Epic picker query: open epics of the current project
    fn epic_link_jql(&self, field: &FieldMeta, project_key: &str) -> Option<String> {
        let epics = &self.site.epic_fields;
        if epics.epic_link_id() != Some(field.key.as_str()) {
            return None;
        }
        Some(format!(
            "project = \"{}\" and cf[{}] != \"\" and resolution = EMPTY",
            project_key, epics.epic_name.cfid
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::NON_RENDERABLE_MESSAGE;
    use crate::models::FieldSchema;
    use crate::schema::{CUSTOM_MULTISELECT, CUSTOM_MULTI_USER_PICKER};
    use crate::test_support::*;

    fn transform(
        site: SiteContext,
        fields: &FieldMetaMap,
        filter: &[&str],
    ) -> FieldTransformerResult {
        let common = strings(&["summary"]);
        FieldTransformer::new(site).transform_fields(fields, "PROJ", &strings(filter), &common)
    }

    #[test]
    fn unknown_schema_goes_to_non_renderable_fields() {
        let fields = field_map([summary(), widget(false)]);
        let result = transform(epic_site(), &fields, &[]);

        assert!(result.fields.contains_key("summary"));
        assert!(!result.fields.contains_key("customfield_999"));
        assert_eq!(result.non_renderable_fields.len(), 1);
        let problem = &result.non_renderable_fields[0];
        assert_eq!(problem.key, "customfield_999");
        assert_eq!(problem.message, NON_RENDERABLE_MESSAGE);
        assert_eq!(problem.schema, "unknown.plugin:widget");
        assert!(!result.has_require_non_renderables);
    }

    #[test]
    fn required_unknown_schema_sets_flag() {
        let fields = field_map([summary(), widget(true)]);
        let result = transform(epic_site(), &fields, &[]);
        assert!(result.has_require_non_renderables);
    }

    #[test]
    fn filtered_keys_are_absent_everywhere() {
        let fields = field_map([summary(), widget(true), reporter()]);
        let result = transform(epic_site(), &fields, &["customfield_999", "reporter"]);

        assert_eq!(result.fields.len(), 1);
        assert!(result.non_renderable_fields.is_empty());
        assert!(!result.has_require_non_renderables);
    }

    #[test]
    fn transform_is_idempotent() {
        let fields = field_map([summary(), widget(false), epic_link(), labels(), description()]);
        let transformer = FieldTransformer::new(epic_site());
        let common = strings(&["summary"]);
        let first = transformer.transform_fields(&fields, "PROJ", &[], &common);
        let second = transformer.transform_fields(&fields, "PROJ", &[], &common);
        assert_eq!(first, second);
    }

    #[test]
    fn advanced_unless_required_or_common() {
        let mut optional_epic_name = epic_name();
        optional_epic_name.required = false;
        let fields = field_map([
            summary(),
            description(),
            optional_epic_name,
            FieldMeta::new("duedate", "Due date", FieldSchema::system("duedate", "date"))
                .required(),
        ]);
        let result = transform(epic_site(), &fields, &[]);

        assert!(!result.fields["summary"].advanced);
        assert!(result.fields["description"].advanced);
        assert!(!result.fields[EPIC_NAME_ID].advanced, "epic name is always common");
        assert!(!result.fields["duedate"].advanced);
    }

    #[test]
    fn epic_link_gets_scoped_autocomplete_jql() {
        let fields = field_map([epic_link()]);
        let result = transform(epic_site(), &fields, &[]);

        let FieldKind::Select { auto_complete_jql, .. } = &result.fields[EPIC_LINK_ID].kind else {
            panic!("epic link should be a select");
        };
        assert_eq!(
            auto_complete_jql,
            "project = \"PROJ\" and cf[10011] != \"\" and resolution = EMPTY"
        );
    }

    #[test]
    fn epic_link_without_epics_enabled_has_no_jql() {
        let site = SiteContext::new(EpicFieldInfo::disabled(), link_types());
        let result = transform(site, &field_map([epic_link()]), &[]);
        let FieldKind::Select { auto_complete_jql, .. } = &result.fields[EPIC_LINK_ID].kind else {
            panic!("epic link should be a select");
        };
        assert!(auto_complete_jql.is_empty());
    }

    #[test]
    fn multiselect_custom_field_is_multi_select() {
        let field = FieldMeta::new(
            "customfield_10050",
            "Platforms",
            FieldSchema::custom(CUSTOM_MULTISELECT, "array"),
        );
        let result = transform(epic_site(), &field_map([field]), &[]);

        let ui = &result.fields["customfield_10050"];
        assert_eq!(ui.ui_type(), UiType::Select);
        let FieldKind::Select {
            is_multi,
            is_cascading,
            is_createable,
            allowed_values,
            auto_complete_url,
            ..
        } = &ui.kind
        else {
            panic!("expected select");
        };
        assert!(*is_multi);
        assert!(!*is_cascading);
        assert!(!*is_createable);
        assert!(allowed_values.is_empty());
        assert!(auto_complete_url.is_empty());
    }

    #[test]
    fn issue_links_need_link_types() {
        let fields = field_map([issue_links()]);

        let without = transform(SiteContext::new(epic_fields(), Vec::new()), &fields, &[]);
        assert!(without.fields.is_empty());
        assert!(without.non_renderable_fields.is_empty());

        let with = transform(epic_site(), &fields, &[]);
        let FieldKind::IssueLink {
            allowed_values,
            is_createable,
            is_multi,
        } = &with.fields["issuelinks"].kind
        else {
            panic!("expected issue link");
        };
        assert_eq!(allowed_values, &link_types());
        assert!(*is_createable);
        assert!(*is_multi);
    }

    #[test]
    fn user_and_checkbox_attributes() {
        let watchers = FieldMeta::new(
            "customfield_10060",
            "Reviewers",
            FieldSchema::custom(CUSTOM_MULTI_USER_PICKER, "array"),
        );
        let checkboxes = FieldMeta::new(
            "customfield_10070",
            "Flags",
            FieldSchema::custom(
                "com.atlassian.jira.plugin.system.customfieldtypes:multicheckboxes",
                "array",
            ),
        );
        let result = transform(epic_site(), &field_map([watchers, checkboxes]), &[]);

        assert_eq!(result.fields["customfield_10060"].kind, FieldKind::User { is_multi: true });
        assert_eq!(
            result.fields["customfield_10070"].kind,
            FieldKind::Checkbox {
                allowed_values: Vec::new()
            }
        );
    }
}
