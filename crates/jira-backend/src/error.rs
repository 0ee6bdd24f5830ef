use screen_core::ScreenError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JiraError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Issue not found: {0}")]
    IssueNotFound(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl JiraError {
    /// Turn a 404 into the given not-found error, keep anything else
    pub(crate) fn or_not_found(self, not_found: impl FnOnce() -> JiraError) -> JiraError {
        match self {
            JiraError::Api { status: 404, .. } => not_found(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, JiraError>;

impl From<JiraError> for ScreenError {
    fn from(err: JiraError) -> Self {
        match err {
            JiraError::Http(e) => ScreenError::Http(e.to_string()),
            JiraError::Parse(e) => ScreenError::Parse(e.to_string()),
            JiraError::Io(e) => ScreenError::Io(e.to_string()),
            JiraError::IssueNotFound(id) => ScreenError::IssueNotFound(id),
            JiraError::ProjectNotFound(id) => ScreenError::ProjectNotFound(id),
            JiraError::Unauthorized => ScreenError::Unauthorized,
            JiraError::Api { status, message } => ScreenError::Api { status, message },
        }
    }
}
