//! JSON Schema generation for option documents.
//!
//! Uses schemars to generate a JSON Schema that can be used for
//! IDE autocomplete and validation of option files.

use crate::error::Result;
use crate::options::{FormatOptions, ParseOptions};
use schemars::{JsonSchema, Schema, generate::SchemaSettings};
use serde::{Deserialize, Serialize};

/// An option file: format and parse settings side by side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OptionsDocument {
    /// Optional JSON Schema URL for IDE autocomplete support.
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Settings for formatting byte counts.
    pub format: FormatOptions,

    /// Settings for parsing size strings.
    pub parse: ParseOptions,
}

impl OptionsDocument {
    /// Decode a (possibly partial) options document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Generate the JSON Schema for [`OptionsDocument`].
pub fn schema() -> Schema {
    SchemaSettings::default()
        .into_generator()
        .into_root_schema_for::<OptionsDocument>()
}

/// Generate the JSON Schema as a pretty-printed JSON string.
pub fn schema_json_pretty() -> Result<String> {
    Ok(serde_json::to_string_pretty(&schema())?)
}
