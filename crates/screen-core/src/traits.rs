use crate::error::Result;
use crate::models::*;

/// Source of the raw field metadata the screen transformers work on
///
/// Each backend (the Jira REST client, the fixture-backed mock) provides its own
/// implementation. Implementations must be safe to call repeatedly.
pub trait MetadataSource: Send + Sync {
    /// Resolve the site's epic link / epic name custom fields
    fn get_epic_fields(&self) -> Result<EpicFieldInfo>;

    /// List the issue link types configured on the site
    fn list_issue_link_types(&self) -> Result<Vec<IssueLinkType>> {
        Ok(Vec::new())
    }

    /// Create metadata for every issue type of a project, in Jira order
    fn get_create_meta(&self, project_key: &str) -> Result<ProjectCreateMeta>;

    /// Edit metadata of an existing issue, with current values attached
    fn get_edit_meta(&self, issue_key: &str) -> Result<EditMeta>;
}
