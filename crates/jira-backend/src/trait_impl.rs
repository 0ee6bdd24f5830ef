//! Implementation of the screen-core metadata source for JiraClient

use screen_core::{
    fetch_all_pages, EditMeta, EpicFieldInfo, IssueLinkType, IssueTypeMeta, MetadataSource,
    ProjectCreateMeta, Result, ScreenError,
};
use tracing::debug;

use crate::client::JiraClient;
use crate::convert::{edit_fields, epic_fields_from};
use crate::models::JiraIssueTypeFields;

/// Requested createmeta page size; Jira may serve fewer per page
const CREATEMETA_PAGE_SIZE: usize = 50;

impl MetadataSource for JiraClient {
    fn get_epic_fields(&self) -> Result<EpicFieldInfo> {
        self.list_fields()
            .map(|fields| epic_fields_from(&fields))
            .map_err(ScreenError::from)
    }

    fn list_issue_link_types(&self) -> Result<Vec<IssueLinkType>> {
        self.list_link_types()
            .map(|types| types.into_iter().map(Into::into).collect())
            .map_err(ScreenError::from)
    }

    fn get_create_meta(&self, project_key: &str) -> Result<ProjectCreateMeta> {
        let project = self.get_project(project_key)?;

        let issue_types = fetch_all_pages(
            |start_at, max_results| {
                self.get_create_issue_types_page(&project.key, start_at, max_results)
                    .map(|page| page.into_page(start_at))
                    .map_err(ScreenError::from)
            },
            CREATEMETA_PAGE_SIZE,
        )?;

        let mut metas: Vec<IssueTypeMeta> = Vec::with_capacity(issue_types.len());
        for issue_type in issue_types {
            let fields = fetch_all_pages(
                |start_at, max_results| {
                    self.get_create_fields_page(&project.key, &issue_type.id, start_at, max_results)
                        .map(|page| page.into_page(start_at))
                        .map_err(ScreenError::from)
                },
                CREATEMETA_PAGE_SIZE,
            )?;
            debug!(issue_type = %issue_type.name, fields = fields.len(), "fetched create fields");
            metas.push(JiraIssueTypeFields { issue_type, fields }.into());
        }

        Ok(ProjectCreateMeta {
            project: project.into(),
            issue_types: metas,
        })
    }

    fn get_edit_meta(&self, issue_key: &str) -> Result<EditMeta> {
        let meta = self.get_edit_meta(issue_key)?;
        let issue = self.get_issue_with_rendered(issue_key)?;

        let project = issue.project().ok_or_else(|| {
            ScreenError::Parse(format!("issue {} has no project field", issue_key))
        })?;
        let issue_type = issue.issue_type().ok_or_else(|| {
            ScreenError::Parse(format!("issue {} has no issuetype field", issue_key))
        })?;

        Ok(EditMeta {
            issue_key: issue.key.clone(),
            project_key: project.key,
            issue_type: issue_type.into(),
            fields: edit_fields(meta, &issue),
        })
    }
}
