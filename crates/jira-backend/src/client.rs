use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::de::DeserializeOwned;
use tracing::debug;
use ureq::Agent;

use crate::error::{JiraError, Result};
use crate::models::*;

/// Jira REST API client, read-only: it only fetches screen metadata
pub struct JiraClient {
    agent: Agent,
    base_url: String,
    auth_header: String,
}

impl JiraClient {
    /// Create a new Jira client with Basic Auth
    ///
    /// For Jira Cloud, use your email and an API token.
    /// For Jira Server, use your username and password.
    pub fn new(base_url: &str, email: &str, api_token: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            // Status codes are mapped by check_response
            .http_status_as_error(false)
            .build()
            .into();

        let encoded = STANDARD.encode(format!("{}:{}", email, api_token));
        let auth_header = format!("Basic {}", encoded);

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/rest/api/3{}", self.base_url, path)
    }

    /// Handle transport errors
    fn handle_error(&self, err: ureq::Error) -> JiraError {
        match &err {
            ureq::Error::StatusCode(401) => JiraError::Unauthorized,
            ureq::Error::StatusCode(status) => JiraError::Api {
                status: *status,
                message: format!("HTTP {}", status),
            },
            _ => JiraError::Http(err),
        }
    }

    /// Check response status and return error if not successful
    fn check_response(
        &self,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<ureq::http::Response<ureq::Body>> {
        let status = response.status().as_u16();

        if (200..300).contains(&status) {
            return Ok(response);
        }

        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());

        if status == 401 {
            return Err(JiraError::Unauthorized);
        }

        Err(JiraError::Api {
            status,
            message: error_message(status, body),
        })
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url, "GET");
        let response = self
            .agent
            .get(url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .call()
            .map_err(|e| self.handle_error(e))?;

        let mut response = self.check_response(response)?;
        let value: T = response.body_mut().read_json()?;
        Ok(value)
    }

    // ==================== Site Operations ====================

    /// List every field defined on the site
    pub fn list_fields(&self) -> Result<Vec<JiraField>> {
        self.get_json(&self.api_url("/field"))
    }

    /// List all issue link types
    pub fn list_link_types(&self) -> Result<Vec<JiraIssueLinkType>> {
        let result: JiraLinkTypesResponse = self.get_json(&self.api_url("/issueLinkType"))?;
        Ok(result.issue_link_types)
    }

    /// Get a project by key or ID
    pub fn get_project(&self, key: &str) -> Result<JiraProject> {
        let url = self.api_url(&format!("/project/{}", urlencoding::encode(key)));
        self.get_json(&url)
            .map_err(|e| e.or_not_found(|| JiraError::ProjectNotFound(key.to_string())))
    }

    // ==================== Create Metadata ====================

    /// One page of the issue types a user can create in a project
    pub fn get_create_issue_types_page(
        &self,
        project_key: &str,
        start_at: usize,
        max_results: usize,
    ) -> Result<JiraIssueTypesPage> {
        let url = format!(
            "{}?startAt={}&maxResults={}",
            self.api_url(&format!(
                "/issue/createmeta/{}/issuetypes",
                urlencoding::encode(project_key)
            )),
            start_at,
            max_results
        );
        self.get_json(&url)
            .map_err(|e| e.or_not_found(|| JiraError::ProjectNotFound(project_key.to_string())))
    }

    /// One page of the create screen fields of an issue type
    pub fn get_create_fields_page(
        &self,
        project_key: &str,
        issue_type_id: &str,
        start_at: usize,
        max_results: usize,
    ) -> Result<JiraFieldsPage> {
        let url = format!(
            "{}?startAt={}&maxResults={}",
            self.api_url(&format!(
                "/issue/createmeta/{}/issuetypes/{}",
                urlencoding::encode(project_key),
                urlencoding::encode(issue_type_id)
            )),
            start_at,
            max_results
        );
        self.get_json(&url)
            .map_err(|e| e.or_not_found(|| JiraError::ProjectNotFound(project_key.to_string())))
    }

    // ==================== Edit Metadata ====================

    /// Edit screen of an existing issue
    pub fn get_edit_meta(&self, issue_key: &str) -> Result<JiraEditMeta> {
        let url = self.api_url(&format!("/issue/{}/editmeta", urlencoding::encode(issue_key)));
        self.get_json(&url)
            .map_err(|e| e.or_not_found(|| JiraError::IssueNotFound(issue_key.to_string())))
    }

    /// Get an issue with every field value and its rendered form
    pub fn get_issue_with_rendered(&self, issue_key: &str) -> Result<JiraIssue> {
        let url = format!(
            "{}?expand=renderedFields",
            self.api_url(&format!("/issue/{}", urlencoding::encode(issue_key)))
        );
        self.get_json(&url)
            .map_err(|e| e.or_not_found(|| JiraError::IssueNotFound(issue_key.to_string())))
    }
}

/// Fold a Jira error body (`{"errorMessages":[...], "errors":{...}}`) into one message
fn error_message(status: u16, body: String) -> String {
    let Ok(error_response) = serde_json::from_str::<serde_json::Value>(&body) else {
        return if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            body
        };
    };

    let mut messages = Vec::new();

    if let Some(errors) = error_response
        .get("errorMessages")
        .and_then(|e| e.as_array())
    {
        messages.extend(errors.iter().filter_map(|e| e.as_str()).map(String::from));
    }

    if let Some(errors) = error_response.get("errors").and_then(|e| e.as_object()) {
        for (field, msg) in errors {
            if let Some(s) = msg.as_str() {
                messages.push(format!("{}: {}", field, s));
            }
        }
    }

    if messages.is_empty() {
        body
    } else {
        messages.join("; ")
    }
}
