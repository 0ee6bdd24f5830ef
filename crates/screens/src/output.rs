use crate::cli::OutputFormat;
use crate::commands::classify::Classification;
use crate::commands::create::CreateScreens;
use colored::Colorize;
use screen_core::{
    EditMetaTransformerResult, FieldKind, FieldProblem, FieldUi, FieldUiMap, IssueLinkType,
    IssueTypeProblem, SiteContext,
};
use serde::Serialize;

pub fn output_result<T: Serialize + Displayable>(result: &T, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(result) {
                println!("{}", json);
            }
        }
        OutputFormat::Text => {
            println!("{}", result.display());
        }
    }
}

#[derive(Serialize)]
pub struct JsonError {
    pub error: bool,
    pub code: String,
    pub message: String,
}

pub fn output_error(err: &anyhow::Error, format: OutputFormat) {
    let message = match format {
        OutputFormat::Json => {
            let json_err = JsonError {
                error: true,
                code: error_code(err).to_string(),
                message: format!("{:#}", err),
            };
            serde_json::to_string_pretty(&json_err).unwrap_or_else(|_| {
                format!(r#"{{"error": true, "message": "{}"}}"#, err)
            })
        }
        OutputFormat::Text => format!("{}: {:#}", "Error".red().bold(), err),
    };
    eprintln!("{}", message);
}

fn error_code(err: &anyhow::Error) -> &'static str {
    use screen_core::ScreenError;

    match err.downcast_ref::<ScreenError>() {
        Some(ScreenError::Unauthorized) => "unauthorized",
        Some(ScreenError::ProjectNotFound(_)) => "project_not_found",
        Some(ScreenError::IssueNotFound(_)) => "issue_not_found",
        Some(ScreenError::NoRenderableIssueTypes(_)) => "no_renderable_issue_types",
        _ => "error",
    }
}

pub trait Displayable {
    fn display(&self) -> String;
}

impl Displayable for CreateScreens {
    fn display(&self) -> String {
        let result = &self.result;
        let mut output = format!("{} {}", "Project".dimmed(), self.project.cyan().bold());

        match &result.selected_issue_type {
            Some(selected) => output.push_str(&format!(
                "\n{} {}",
                "Selected issue type:".dimmed(),
                selected.name.white().bold()
            )),
            None if result.issue_type_uis.is_empty() && result.problems.is_empty() => {
                output.push_str(&format!("\n{}", "No issue types".dimmed()));
            }
            None => {}
        }

        for ui in result.issue_type_uis.values() {
            output.push_str(&format!(
                "\n\n{} ({})",
                ui.name.white().bold(),
                ui.id.dimmed()
            ));
            output.push_str(&display_fields(&ui.fields));
        }

        if !result.problems.is_empty() {
            output.push_str(&format!("\n\n{}", "Problems:".yellow().bold()));
            for problem in result.problems.values() {
                output.push_str(&format!("\n  {}", problem.display()));
            }
        }

        output
    }
}

impl Displayable for EditMetaTransformerResult {
    fn display(&self) -> String {
        let mut output = format!(
            "{} ({})",
            self.issue_key.cyan().bold(),
            self.issue_type.name.white().bold()
        );
        output.push_str(&display_fields(&self.fields));

        let with_values: Vec<_> = self
            .field_values
            .iter()
            .filter_map(|(key, value)| Some((self.fields.get(key)?, value)))
            .collect();
        if !with_values.is_empty() {
            output.push_str(&format!("\n  {}:", "Current values".dimmed()));
            for (field, value) in with_values {
                output.push_str(&format!(
                    "\n    {}: {}",
                    field.name,
                    display_value(value)
                ));
            }
        }

        if let Some(problem) = &self.problem {
            output.push_str(&format!("\n\n{}", "Problems:".yellow().bold()));
            output.push_str(&format!("\n  {}", problem.display()));
        }

        output
    }
}

/// Common fields first, then the ones behind the disclosure
fn display_fields(fields: &FieldUiMap) -> String {
    let (advanced, common): (Vec<&FieldUi>, Vec<&FieldUi>) =
        fields.values().partition(|f| f.advanced);

    let mut output = String::new();
    for field in common {
        output.push_str(&format!("\n  {}", field.display()));
    }
    if !advanced.is_empty() {
        output.push_str(&format!("\n  {}:", "Advanced".dimmed()));
        for field in advanced {
            output.push_str(&format!("\n    {}", field.display()));
        }
    }
    output
}

fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        // Option and user objects
        serde_json::Value::Object(map) => ["displayName", "value", "name", "key"]
            .iter()
            .find_map(|k| map.get(*k).and_then(|v| v.as_str()))
            .map(String::from)
            .unwrap_or_else(|| value.to_string()),
        other => other.to_string(),
    }
}

impl Displayable for FieldUi {
    fn display(&self) -> String {
        let required = if self.required {
            " (required)".yellow().to_string()
        } else {
            String::new()
        };
        let attributes = kind_attributes(&self.kind);
        let attributes = if attributes.is_empty() {
            String::new()
        } else {
            format!(" {}", attributes.join(", ").dimmed())
        };

        format!(
            "{} ({}) [{}]{}{}",
            self.name.white().bold(),
            self.key.dimmed(),
            self.ui_type().to_string().cyan(),
            required,
            attributes
        )
    }
}

fn kind_attributes(kind: &FieldKind) -> Vec<String> {
    let mut attrs = Vec::new();
    match kind {
        FieldKind::Input { value_type } => attrs.push(value_type.to_string()),
        FieldKind::Checkbox { allowed_values } | FieldKind::Radio { allowed_values } => {
            attrs.push(format!("{} options", allowed_values.len()));
        }
        FieldKind::User { is_multi } => {
            if *is_multi {
                attrs.push("multi".to_string());
            }
        }
        FieldKind::Select {
            allowed_values,
            is_multi,
            is_cascading,
            is_createable,
            auto_complete_url,
            auto_complete_jql,
        } => {
            if !allowed_values.is_empty() {
                attrs.push(format!("{} options", allowed_values.len()));
            }
            for (flag, name) in [
                (*is_multi, "multi"),
                (*is_cascading, "cascading"),
                (*is_createable, "createable"),
            ] {
                if flag {
                    attrs.push(name.to_string());
                }
            }
            if !auto_complete_url.is_empty() {
                attrs.push("autocomplete".to_string());
            }
            if !auto_complete_jql.is_empty() {
                attrs.push(format!("jql: {}", auto_complete_jql));
            }
        }
        FieldKind::IssueLink {
            allowed_values,
            is_multi,
            ..
        } => {
            attrs.push(format!("{} link types", allowed_values.len()));
            if *is_multi {
                attrs.push("multi".to_string());
            }
        }
        _ => {}
    }
    attrs
}

impl Displayable for IssueTypeProblem {
    fn display(&self) -> String {
        let status = if self.is_renderable {
            "partially renderable".yellow()
        } else {
            "not renderable".red()
        };
        let mut output = format!(
            "{} ({}) {}: {}",
            self.issue_type.name.white().bold(),
            self.issue_type.id.dimmed(),
            status,
            self.message
        );
        for field in &self.non_renderable_fields {
            output.push_str(&format!("\n    {}", field.display()));
        }
        output
    }
}

impl Displayable for FieldProblem {
    fn display(&self) -> String {
        let message = if self.required {
            self.message.red().to_string()
        } else {
            self.message.to_string()
        };
        format!(
            "{} ({}): {} [{}]",
            self.name,
            self.key.dimmed(),
            message,
            self.schema.dimmed()
        )
    }
}

impl Displayable for SiteContext {
    fn display(&self) -> String {
        let epics = &self.epic_fields;
        let mut output = if epics.epics_enabled {
            let mut s = format!("{} {}", "Epics:".dimmed(), "enabled".green());
            let fields = [("Epic Link", &epics.epic_link), ("Epic Name", &epics.epic_name)];
            for (label, field) in fields {
                s.push_str(&format!(
                    "\n  {}: {} ({}, cf[{}])",
                    label.dimmed(),
                    field.name.white().bold(),
                    field.id,
                    field.cfid
                ));
            }
            s
        } else {
            format!("{} {}", "Epics:".dimmed(), "disabled".yellow())
        };

        output.push_str(&format!("\n{}", "Issue link types:".dimmed()));
        if self.issue_link_types.is_empty() {
            output.push_str(&format!(
                "\n  {}",
                "none (issue links are hidden)".yellow()
            ));
        }
        for link_type in &self.issue_link_types {
            output.push_str(&format!("\n  {}", link_type.display()));
        }
        output
    }
}

impl Displayable for IssueLinkType {
    fn display(&self) -> String {
        format!(
            "{} ({}): {} / {}",
            self.name.white().bold(),
            self.id.dimmed(),
            self.outward,
            self.inward
        )
    }
}

impl Displayable for Classification {
    fn display(&self) -> String {
        let renderable = if self.renderable {
            "renderable".green()
        } else {
            "non-renderable".red()
        };
        let mut output = format!(
            "{} [{}] {}",
            self.schema.white().bold(),
            self.ui_type.to_string().cyan(),
            renderable
        );
        if let Some(value_type) = self.value_type {
            output.push_str(&format!("\n  {}: {}", "Value type".dimmed(), value_type));
        }
        for (flag, name) in [
            (self.is_multi_select, "multi select"),
            (self.is_createable_select, "createable select"),
            (self.is_cascading_select, "cascading select"),
            (self.is_multi_user, "multi user"),
        ] {
            if flag {
                output.push_str(&format!("\n  {}", name));
            }
        }
        output
    }
}
