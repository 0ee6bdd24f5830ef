//! Issue screen transformers built on top of the field transformer

mod create;
mod edit;

pub use create::CreateScreenTransformer;
pub use edit::EditScreenTransformer;

use std::collections::BTreeMap;

use crate::models::{EpicFieldInfo, FieldMetaMap};
use crate::ui::IssueTypeProblem;

/// Fields shown outside the disclosure on every screen
pub const DEFAULT_COMMON_FIELDS: &[&str] =
    &["summary", "description", "fixVersions", "components", "labels"];

pub const NON_RENDERABLE_ISSUE_TYPE_MESSAGE: &str = "Issue Type contains non-renderable fields";
pub const NO_FIELDS_MESSAGE: &str = "No fields found in issue type";

/// Default common fields plus the site's epic name field
fn common_fields(extra: &[&str], epics: &EpicFieldInfo) -> Vec<String> {
    DEFAULT_COMMON_FIELDS
        .iter()
        .chain(extra)
        .copied()
        .chain(epics.epic_name_id())
        .map(str::to_string)
        .collect()
}

/// Filter keys for one screen. An epic cannot belong to another epic, so screens
/// carrying the epic name field also drop the epic link field.
fn screen_filter_keys(
    defaults: &[&str],
    extra: &[String],
    fields: &FieldMetaMap,
    epics: &EpicFieldInfo,
) -> Vec<String> {
    let mut keys: Vec<String> = defaults.iter().map(|k| k.to_string()).collect();
    keys.extend(extra.iter().cloned());

    if let (Some(name_id), Some(link_id)) = (epics.epic_name_id(), epics.epic_link_id()) {
        if fields.contains_key(name_id) {
            keys.push(link_id.to_string());
        }
    }
    keys
}

/// First problem recorded for an issue type wins
fn add_issue_type_problem(
    problems: &mut BTreeMap<String, IssueTypeProblem>,
    problem: IssueTypeProblem,
) {
    problems
        .entry(problem.issue_type.id.clone())
        .or_insert(problem);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IssueType;
    use crate::test_support::*;

    fn problem(id: &str, is_renderable: bool, message: &str) -> IssueTypeProblem {
        IssueTypeProblem {
            issue_type: IssueType {
                id: id.to_string(),
                name: "Bug".to_string(),
                icon_url: String::new(),
                subtask: false,
            },
            is_renderable,
            message: message.to_string(),
            non_renderable_fields: Vec::new(),
        }
    }

    #[test]
    fn first_issue_type_problem_wins() {
        let partial = NON_RENDERABLE_ISSUE_TYPE_MESSAGE;
        let mut problems = BTreeMap::new();
        add_issue_type_problem(&mut problems, problem("2", false, NO_FIELDS_MESSAGE));
        add_issue_type_problem(&mut problems, problem("2", true, partial));
        add_issue_type_problem(&mut problems, problem("3", true, partial));

        assert_eq!(problems.len(), 2);
        assert_eq!(problems["2"].message, NO_FIELDS_MESSAGE);
        assert!(!problems["2"].is_renderable);
        assert!(problems["3"].is_renderable);
    }

    #[test]
    fn common_fields_include_epic_name() {
        let common = common_fields(&[], &epic_fields());
        assert!(common.contains(&EPIC_NAME_ID.to_string()));
        assert_eq!(common.len(), DEFAULT_COMMON_FIELDS.len() + 1);

        let without_epics = common_fields(&["assignee"], &EpicFieldInfo::disabled());
        assert_eq!(without_epics.len(), DEFAULT_COMMON_FIELDS.len() + 1);
        assert!(without_epics.contains(&"assignee".to_string()));
    }

    #[test]
    fn epic_screens_filter_epic_link() {
        let epic = field_map([summary(), epic_name(), epic_link()]);
        let keys = screen_filter_keys(&["project"], &[], &epic, &epic_fields());
        assert!(keys.contains(&EPIC_LINK_ID.to_string()));

        let story = field_map([summary(), epic_link()]);
        let keys =
            screen_filter_keys(&["project"], &strings(&["labels"]), &story, &epic_fields());
        assert_eq!(keys, strings(&["project", "labels"]));
    }
}
