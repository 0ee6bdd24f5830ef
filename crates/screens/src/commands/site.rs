use crate::cli::OutputFormat;
use crate::output::output_result;
use anyhow::Result;
use screen_core::SiteContext;

pub fn handle_site(site: &SiteContext, format: OutputFormat) -> Result<()> {
    output_result(site, format);
    Ok(())
}
