use thiserror::Error;

/// Errors shared by metadata sources and the screen transformers
#[derive(Error, Debug)]
pub enum ScreenError {
    #[error("Authentication failed")]
    Unauthorized,

    #[error("Issue not found: {0}")]
    IssueNotFound(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(String),

    /// Every issue type of the project has a required field the UI cannot render
    #[error("No renderable issue types for project {0}")]
    NoRenderableIssueTypes(String),
}

pub type Result<T> = std::result::Result<T, ScreenError>;
