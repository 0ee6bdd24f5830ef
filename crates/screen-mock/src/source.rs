//! Mock source implementing MetadataSource
//!
//! Reads metadata from fixture files instead of making HTTP requests.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

use screen_core::{
    EditMeta, EpicFieldInfo, IssueLinkType, MetadataSource, ProjectCreateMeta, Result,
    ScreenError,
};

/// A metadata source that reads fixtures from a directory
pub struct MockSource {
    fixture_dir: PathBuf,
}

impl MockSource {
    pub fn new(fixture_dir: impl AsRef<Path>) -> Result<Self> {
        let fixture_dir = fixture_dir.as_ref().to_path_buf();
        if !fixture_dir.is_dir() {
            return Err(ScreenError::Io(format!(
                "Mock fixture directory not found: {}",
                fixture_dir.display()
            )));
        }
        Ok(Self { fixture_dir })
    }

    fn fixture_path(&self, filename: &str) -> PathBuf {
        self.fixture_dir.join(filename)
    }

    /// Load a fixture, `None` when the file does not exist
    fn load_fixture<T: DeserializeOwned>(&self, filename: &str) -> Result<Option<T>> {
        let path = self.fixture_path(filename);
        if !path.exists() {
            debug!(fixture = filename, "mock fixture missing");
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            ScreenError::Io(format!(
                "Failed to read mock fixture {}: {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| {
                ScreenError::Parse(format!("Failed to parse mock fixture {}: {}", filename, e))
            })
    }
}

impl MetadataSource for MockSource {
    fn get_epic_fields(&self) -> Result<EpicFieldInfo> {
        Ok(self
            .load_fixture("epic_fields.json")?
            .unwrap_or_else(EpicFieldInfo::disabled))
    }

    fn list_issue_link_types(&self) -> Result<Vec<IssueLinkType>> {
        Ok(self
            .load_fixture("issue_link_types.json")?
            .unwrap_or_default())
    }

    fn get_create_meta(&self, project_key: &str) -> Result<ProjectCreateMeta> {
        self.load_fixture(&format!("createmeta_{}.json", project_key))?
            .ok_or_else(|| ScreenError::ProjectNotFound(project_key.to_string()))
    }

    fn get_edit_meta(&self, issue_key: &str) -> Result<EditMeta> {
        self.load_fixture(&format!("editmeta_{}.json", issue_key))?
            .ok_or_else(|| ScreenError::IssueNotFound(issue_key.to_string()))
    }
}
