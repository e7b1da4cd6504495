//! Customization payloads shared by attribute, block, and element kinds.
//!
//! These types describe user-supplied overrides and hand-written snippets that
//! the generator splices into its output verbatim:
//!
//! - [`CustomType`] - replaces the generated wrapper type of an attribute
//! - [`AssociatedExternalType`] - links an attribute to an API type it must
//!   convert to and from
//! - [`Validator`], [`PlanModifier`] - schema definitions with their imports
//! - [`DefaultValue`], [`CustomDefault`] - static or custom default values

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A Go import referenced by generated code.
///
/// ## Examples
///
/// ```
/// use framegen_define::Import;
///
/// let import: Import = serde_json::from_str(r#"{"path": "example.com/apisdk"}"#).unwrap();
/// assert_eq!(import.path, "example.com/apisdk");
/// assert!(import.alias.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Import {
    /// Import path (e.g., `github.com/org/module/pkg`).
    pub path: String,
    /// Optional package alias.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl Import {
    /// Creates an import without an alias.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: None,
        }
    }
}

/// A user-supplied replacement for the generated wrapper type.
///
/// `type` is the expression placed in the schema's `CustomType` clause and
/// `value_type` is the type used for the record field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<Import>,
    #[serde(rename = "type")]
    pub type_: String,
    pub value_type: String,
}

/// An API type that an attribute's generated value must interconvert with.
///
/// ## Examples
///
/// ```
/// use framegen_define::AssociatedExternalType;
///
/// let json = r#"{"import": {"path": "example.com/apisdk"}, "type": "*apisdk.Config"}"#;
/// let ext: AssociatedExternalType = serde_json::from_str(json).unwrap();
/// assert_eq!(ext.type_, "*apisdk.Config");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssociatedExternalType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<Import>,
    #[serde(rename = "type")]
    pub type_: String,
}

/// Hand-written Go code spliced into the schema, with the imports it needs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomCode {
    #[serde(default)]
    pub imports: Vec<Import>,
    pub schema_definition: String,
}

/// A validator entry (`{"custom": {...}}`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Validator {
    pub custom: CustomCode,
}

/// A plan modifier entry (`{"custom": {...}}`). Only meaningful for resources.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanModifier {
    pub custom: CustomCode,
}

/// Default value for a scalar attribute.
///
/// ## Examples
///
/// ```
/// use framegen_define::DefaultValue;
///
/// let static_default: DefaultValue<bool> = serde_json::from_str(r#"{"static": true}"#).unwrap();
/// assert_eq!(static_default, DefaultValue::Static(true));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultValue<T> {
    /// A literal value of the attribute's own type.
    Static(T),
    /// A hand-written default implementation.
    Custom(CustomCode),
}

/// Default value for a non-scalar attribute; only custom defaults exist.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomDefault {
    pub custom: CustomCode,
}

/// Whether an attribute is required, optional, computed, or both computed
/// and optional.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use framegen_define::ComputedOptionalRequired;
///
/// let parsed = ComputedOptionalRequired::from_str("computed_optional").unwrap();
/// assert_eq!(parsed, ComputedOptionalRequired::ComputedOptional);
/// assert_eq!(ComputedOptionalRequired::Required.to_string(), "required");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ComputedOptionalRequired {
    Required,
    #[default]
    Optional,
    Computed,
    ComputedOptional,
}
