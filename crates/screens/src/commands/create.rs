use crate::cli::OutputFormat;
use crate::output::output_result;
use anyhow::{anyhow, Context, Result};
use screen_core::{
    CreateMetaTransformerResult, CreateScreenTransformer, MetadataSource, ProjectCreateMeta,
    SiteContext,
};
use serde::Serialize;
use tracing::info;

/// Create screens of one project
#[derive(Debug, Serialize)]
pub struct CreateScreens {
    pub project: String,
    #[serde(flatten)]
    pub result: CreateMetaTransformerResult,
}

pub fn handle_create(
    source: &dyn MetadataSource,
    site: SiteContext,
    project: &str,
    issue_type: Option<&str>,
    filter_fields: &[String],
    format: OutputFormat,
) -> Result<()> {
    let meta = source
        .get_create_meta(project)
        .with_context(|| format!("Failed to fetch create metadata for project '{}'", project))?;
    info!(
        project = %meta.project.key,
        issue_types = meta.issue_types.len(),
        "fetched create metadata"
    );

    let transformer = CreateScreenTransformer::new(site).with_filter_fields(filter_fields);
    let result = match issue_type {
        Some(wanted) => single_issue_type(&transformer, &meta, wanted).ok_or_else(|| {
            anyhow!("Issue type '{}' not found in project {}", wanted, meta.project.key)
        })?,
        None => transformer.transform_issue_screens(&meta)?,
    };

    output_result(
        &CreateScreens {
            project: meta.project.key,
            result,
        },
        format,
    );
    Ok(())
}

/// Screen of one issue type matched by ID or case-insensitive name.
///
/// Other issue types are not transformed, so an unrenderable project still
/// reports the requested type's problem.
fn single_issue_type(
    transformer: &CreateScreenTransformer,
    meta: &ProjectCreateMeta,
    wanted: &str,
) -> Option<CreateMetaTransformerResult> {
    let issue_type = meta
        .issue_types
        .iter()
        .find(|it| it.id == wanted || it.name.eq_ignore_ascii_case(wanted))?;

    let (ui, problem) = transformer.transform_issue_type(&meta.project.key, issue_type);
    let mut result = CreateMetaTransformerResult::default();
    if let Some(problem) = problem {
        result.problems.insert(issue_type.id.clone(), problem);
    }
    if let Some(ui) = ui {
        result.selected_issue_type = Some(issue_type.issue_type());
        result.issue_type_uis.insert(ui.id.clone(), ui);
    }
    Some(result)
}
