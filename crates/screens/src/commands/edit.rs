use crate::cli::OutputFormat;
use crate::output::output_result;
use anyhow::{Context, Result};
use screen_core::{EditScreenTransformer, MetadataSource, SiteContext};
use tracing::info;

pub fn handle_edit(
    source: &dyn MetadataSource,
    site: SiteContext,
    issue: &str,
    filter_fields: &[String],
    format: OutputFormat,
) -> Result<()> {
    let meta = source
        .get_edit_meta(issue)
        .with_context(|| format!("Failed to fetch edit metadata for issue '{}'", issue))?;
    info!(issue = %meta.issue_key, fields = meta.fields.len(), "fetched edit metadata");

    let result = EditScreenTransformer::new(site)
        .with_filter_fields(filter_fields)
        .transform_edit_meta(&meta);

    output_result(&result, format);
    Ok(())
}
