use crate::cli::OutputFormat;
use crate::output::output_result;
use anyhow::Result;
use screen_core::schema::{
    classify, is_cascading_select, is_createable_select, is_known_schema, is_multi_select,
    is_multi_user, value_type,
};
use screen_core::{FieldSchema, InputValueType, UiType};
use serde::Serialize;

/// How a single schema identifier would render
#[derive(Debug, Serialize)]
pub struct Classification {
    pub schema: String,
    /// False when fields with this schema are reported as non-renderable
    pub renderable: bool,
    pub ui_type: UiType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<InputValueType>,
    pub is_multi_select: bool,
    pub is_createable_select: bool,
    pub is_cascading_select: bool,
    pub is_multi_user: bool,
}

impl Classification {
    pub fn of(schema: &FieldSchema) -> Self {
        let ui_type = classify(schema);
        Self {
            schema: schema.id().describe(),
            renderable: is_known_schema(schema.id()),
            ui_type,
            value_type: (ui_type == UiType::Input).then(|| value_type(schema)),
            is_multi_select: is_multi_select(schema),
            is_createable_select: is_createable_select(schema),
            is_cascading_select: is_cascading_select(schema),
            is_multi_user: is_multi_user(schema),
        }
    }
}

pub fn handle_classify(
    system: Option<&str>,
    custom: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let schema = FieldSchema {
        system: system.map(String::from),
        custom: custom.map(String::from),
        ..FieldSchema::default()
    };

    output_result(&Classification::of(&schema), format);
    Ok(())
}
