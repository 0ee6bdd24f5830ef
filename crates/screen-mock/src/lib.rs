//! Fixture-backed metadata source for jira-screens
//!
//! This crate provides a `MetadataSource` that reads screen metadata from JSON
//! fixture files instead of calling Jira. It is used by the CLI integration tests
//! and for trying out filter settings without a site.
//!
//! # Usage
//!
//! Set the `JIRA_SCREENS_MOCK_DIR` environment variable to a fixture directory:
//!
//! ```bash
//! JIRA_SCREENS_MOCK_DIR=./fixtures/basic jira-screens create PROJ
//! ```
//!
//! # Fixture Structure
//!
//! ```text
//! fixtures/basic/
//! ├── epic_fields.json          # EpicFieldInfo (missing = epics disabled)
//! ├── issue_link_types.json     # [IssueLinkType] (missing = no link types)
//! ├── createmeta_PROJ.json      # ProjectCreateMeta for project PROJ
//! └── editmeta_PROJ-1.json      # EditMeta for issue PROJ-1
//! ```

mod source;

pub use source::MockSource;

/// Environment variable to enable mock mode
pub const MOCK_DIR_ENV: &str = "JIRA_SCREENS_MOCK_DIR";

/// Get the mock directory from environment, if set
pub fn get_mock_dir() -> Option<std::path::PathBuf> {
    std::env::var(MOCK_DIR_ENV)
        .ok()
        .map(std::path::PathBuf::from)
}
