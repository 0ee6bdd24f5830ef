use std::collections::HashSet;

use tracing::{debug, warn};

use super::{
    add_issue_type_problem, common_fields, screen_filter_keys, NON_RENDERABLE_ISSUE_TYPE_MESSAGE,
    NO_FIELDS_MESSAGE,
};
use crate::error::{Result, ScreenError};
use crate::models::{IssueTypeMeta, ProjectCreateMeta};
use crate::transformer::{FieldTransformer, SiteContext};
use crate::ui::{CreateMetaTransformerResult, FieldTransformerResult, IssueTypeProblem, IssueTypeUi};

/// Fields a create screen never shows
pub const DEFAULT_CREATE_FILTER_FIELDS: &[&str] = &[
    "issuetype",
    "project",
    "reporter",
    "statuscategorychangedate",
    "lastViewed",
];

/// Builds the create screens of every issue type in a project
pub struct CreateScreenTransformer {
    fields: FieldTransformer,
    extra_filter_fields: Vec<String>,
}

impl CreateScreenTransformer {
    pub fn new(site: SiteContext) -> Self {
        Self {
            fields: FieldTransformer::new(site),
            extra_filter_fields: Vec::new(),
        }
    }

    /// Additional field keys to exclude from every screen
    pub fn with_filter_fields(mut self, keys: &[String]) -> Self {
        self.extra_filter_fields.extend_from_slice(keys);
        self
    }

    pub fn transform_issue_screens(
        &self,
        project: &ProjectCreateMeta,
    ) -> Result<CreateMetaTransformerResult> {
        let project_key = project.project.key.as_str();

        let mut result = CreateMetaTransformerResult::default();
        let Some(first_issue_type) = project.issue_types.first() else {
            debug!(project = project_key, "project has no issue types");
            return Ok(result);
        };

        let mut seen: HashSet<&str> = HashSet::new();
        let mut renderable: Vec<&IssueTypeMeta> = Vec::new();

        for issue_type in &project.issue_types {
            // Later entries reusing an id are dropped so UI and problem agree
            if !seen.insert(issue_type.id.as_str()) {
                warn!(
                    project = project_key,
                    issue_type = %issue_type.id,
                    "skipping duplicate issue type id"
                );
                continue;
            }

            let (ui, problem) = self.transform_issue_type(project_key, issue_type);
            if let Some(problem) = problem {
                add_issue_type_problem(&mut result.problems, problem);
            }
            if let Some(ui) = ui {
                result.issue_type_uis.insert(ui.id.clone(), ui);
                renderable.push(issue_type);
            }
        }

        // Never default to an issue type the UI cannot render
        let selected = if renderable.iter().any(|it| it.id == first_issue_type.id) {
            first_issue_type
        } else {
            renderable
                .first()
                .copied()
                .ok_or_else(|| ScreenError::NoRenderableIssueTypes(project_key.to_string()))?
        };

        debug!(
            project = project_key,
            selected = %selected.name,
            renderable = renderable.len(),
            problems = result.problems.len(),
            "transformed create screens"
        );
        result.selected_issue_type = Some(selected.issue_type());
        Ok(result)
    }

    /// Create screen of a single issue type.
    ///
    /// The UI is `None` when the issue type has no fields or a required field
    /// cannot be rendered; the problem explains why.
    pub fn transform_issue_type(
        &self,
        project_key: &str,
        issue_type: &IssueTypeMeta,
    ) -> (Option<IssueTypeUi>, Option<IssueTypeProblem>) {
        let fields = match &issue_type.fields {
            Some(fields) if !fields.is_empty() => fields,
            _ => {
                let problem = IssueTypeProblem {
                    issue_type: issue_type.issue_type(),
                    is_renderable: false,
                    message: NO_FIELDS_MESSAGE.to_string(),
                    non_renderable_fields: Vec::new(),
                };
                return (None, Some(problem));
            }
        };

        let epics = &self.fields.site().epic_fields;
        let common = common_fields(&[], epics);
        let filter = screen_filter_keys(
            DEFAULT_CREATE_FILTER_FIELDS,
            &self.extra_filter_fields,
            fields,
            epics,
        );
        let FieldTransformerResult {
            fields: ui_fields,
            non_renderable_fields,
            has_require_non_renderables,
        } = self
            .fields
            .transform_fields(fields, project_key, &filter, &common);

        let problem = (!non_renderable_fields.is_empty()).then(|| IssueTypeProblem {
            issue_type: issue_type.issue_type(),
            is_renderable: !has_require_non_renderables,
            message: NON_RENDERABLE_ISSUE_TYPE_MESSAGE.to_string(),
            non_renderable_fields,
        });

        let ui = (!has_require_non_renderables).then(|| {
            let it = issue_type.issue_type();
            IssueTypeUi {
                id: it.id,
                name: it.name,
                icon_url: it.icon_url,
                fields: ui_fields,
            }
        });
        (ui, problem)
    }
}
