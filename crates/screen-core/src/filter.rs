//! Field filter: decides per field whether it reaches the UI

use crate::models::FieldMeta;
use crate::schema::is_known_schema;
use crate::ui::FieldProblem;

pub const NON_RENDERABLE_MESSAGE: &str = "field contains non-renderable schema";
pub const REQUIRED_NON_RENDERABLE_MESSAGE: &str = "required field contains non-renderable schema";

/// Outcome of filtering one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterDecision {
    Include,
    /// Explicitly filtered by the caller; not a problem
    Exclude,
    /// Excluded because the UI cannot render its schema
    NonRenderable(FieldProblem),
}

/// Filter a single field against the caller's exclusions and the known-schema allow-list
pub fn filter_field<S: AsRef<str>>(field: &FieldMeta, filter_field_keys: &[S]) -> FilterDecision {
    if filter_field_keys.iter().any(|k| k.as_ref() == field.key) {
        return FilterDecision::Exclude;
    }

    let schema_id = field.schema.id();
    if is_known_schema(schema_id) {
        return FilterDecision::Include;
    }

    let message = if field.required {
        REQUIRED_NON_RENDERABLE_MESSAGE
    } else {
        NON_RENDERABLE_MESSAGE
    };

    FilterDecision::NonRenderable(FieldProblem {
        key: field.key.clone(),
        name: field.name.clone(),
        required: field.required,
        message: message.to_string(),
        schema: schema_id.describe(),
    })
}

/// Accumulates field problems across one transform call
#[derive(Debug, Clone, Default)]
pub struct ProblemCollector {
    problems: Vec<FieldProblem>,
    has_require_non_renderables: bool,
}

impl ProblemCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one decision in; returns whether the field should be rendered
    pub fn fold(&mut self, decision: FilterDecision) -> bool {
        match decision {
            FilterDecision::Include => true,
            FilterDecision::Exclude => false,
            FilterDecision::NonRenderable(problem) => {
                self.add(problem);
                false
            }
        }
    }

    /// At most one problem per field key is kept; a required one always raises the flag
    pub fn add(&mut self, problem: FieldProblem) {
        if problem.required {
            self.has_require_non_renderables = true;
        }
        if !self.problems.iter().any(|p| p.key == problem.key) {
            self.problems.push(problem);
        }
    }

    pub fn has_require_non_renderables(&self) -> bool {
        self.has_require_non_renderables
    }

    pub fn into_problems(self) -> Vec<FieldProblem> {
        self.problems
    }
}
