//! Customization descriptors attached to nodes.
//!
//! - [`TypeOverride`] - a user-supplied wrapper type replacing the generated one
//! - [`ExternalType`] - a link to an API type the node must convert to and from
//! - [`CodeSnippet`] - hand-written validators, plan modifiers, and defaults
//! - [`AttributeDefault`] - static or custom default values

use framegen_define as define;
use framegen_define::Import;
use heck::ToUpperCamelCase;

use crate::imports::{ImportSet, MATH_BIG_IMPORT, default_import};
use crate::naming::quote_go_string;

/// A user override of the generated wrapper type.
///
/// ## Examples
///
/// ```
/// use framegen_gen::customization::TypeOverride;
///
/// let custom = TypeOverride::new("my.BoolType{}", "my.BoolValue");
/// assert_eq!(custom.value_type, "my.BoolValue");
/// assert!(custom.imports().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeOverride {
    pub import: Option<Import>,
    /// Expression placed in the schema's `CustomType` clause.
    pub type_expr: String,
    /// Type used for the record field.
    pub value_type: String,
}

impl TypeOverride {
    pub fn new(type_expr: impl Into<String>, value_type: impl Into<String>) -> Self {
        Self {
            import: None,
            type_expr: type_expr.into(),
            value_type: value_type.into(),
        }
    }

    pub fn imports(&self) -> ImportSet {
        let mut imports = ImportSet::new();
        if let Some(import) = &self.import {
            imports.add_import(import);
        }
        imports
    }
}

impl From<&define::CustomType> for TypeOverride {
    fn from(custom: &define::CustomType) -> Self {
        Self {
            import: custom.import.clone(),
            type_expr: custom.type_.clone(),
            value_type: custom.value_type.clone(),
        }
    }
}

/// A link to an externally supplied API type.
///
/// ## Examples
///
/// ```
/// use framegen_gen::customization::ExternalType;
///
/// let ext = ExternalType::new("*apisdk.Config");
/// assert_eq!(ext.type_reference(), "apisdk.Config");
/// assert_eq!(ext.pointer_type(), "*apisdk.Config");
/// assert_eq!(ext.to_pascal_case(), "ApisdkConfig");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalType {
    pub import: Option<Import>,
    /// The type as written in the specification, e.g. `*apisdk.Config`.
    pub type_: String,
}

impl ExternalType {
    pub fn new(type_: impl Into<String>) -> Self {
        Self {
            import: None,
            type_: type_.into(),
        }
    }

    /// The type without a leading pointer.
    pub fn type_reference(&self) -> &str {
        self.type_.strip_prefix('*').unwrap_or(&self.type_)
    }

    /// The pointer form of [`type_reference`](Self::type_reference).
    pub fn pointer_type(&self) -> String {
        format!("*{}", self.type_reference())
    }

    /// Identifier fragment used in conversion function names
    /// (`To<Pascal>` / `From<Pascal>`).
    pub fn to_pascal_case(&self) -> String {
        let words: String = self
            .type_reference()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        words.to_upper_camel_case()
    }

    pub fn imports(&self) -> ImportSet {
        let mut imports = ImportSet::new();
        if let Some(import) = &self.import {
            imports.add_import(import);
        }
        imports
    }
}

impl From<&define::AssociatedExternalType> for ExternalType {
    fn from(ext: &define::AssociatedExternalType) -> Self {
        Self {
            import: ext.import.clone(),
            type_: ext.type_.clone(),
        }
    }
}

/// Hand-written Go code placed verbatim in a schema clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSnippet {
    pub imports: Vec<Import>,
    pub definition: String,
}

impl CodeSnippet {
    pub fn new(definition: impl Into<String>) -> Self {
        Self {
            imports: Vec::new(),
            definition: definition.into(),
        }
    }

    pub fn imports(&self) -> ImportSet {
        let mut imports = ImportSet::new();
        for import in &self.imports {
            imports.add_import(import);
        }
        imports
    }
}

impl From<&define::CustomCode> for CodeSnippet {
    fn from(code: &define::CustomCode) -> Self {
        Self {
            imports: code.imports.clone(),
            definition: code.schema_definition.clone(),
        }
    }
}

impl From<&define::Validator> for CodeSnippet {
    fn from(validator: &define::Validator) -> Self {
        (&validator.custom).into()
    }
}

impl From<&define::PlanModifier> for CodeSnippet {
    fn from(modifier: &define::PlanModifier) -> Self {
        (&modifier.custom).into()
    }
}

/// A literal default value for a scalar attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum StaticDefault {
    Bool(bool),
    Float64(f64),
    Int64(i64),
    Number(f64),
    String(String),
}

/// The `Default` clause of an attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeDefault {
    Static(StaticDefault),
    Custom(CodeSnippet),
}

impl AttributeDefault {
    /// Converts a specification default, using `wrap` to tag the static value.
    pub fn from_spec<T: Clone>(
        default: &define::DefaultValue<T>,
        wrap: impl Fn(T) -> StaticDefault,
    ) -> Self {
        match default {
            define::DefaultValue::Static(value) => AttributeDefault::Static(wrap(value.clone())),
            define::DefaultValue::Custom(code) => AttributeDefault::Custom(code.into()),
        }
    }

    /// The Go expression for the clause value.
    ///
    /// ## Examples
    ///
    /// ```
    /// use framegen_gen::customization::{AttributeDefault, StaticDefault};
    ///
    /// let default = AttributeDefault::Static(StaticDefault::String("us-east-1".into()));
    /// assert_eq!(default.expression(), r#"stringdefault.StaticString("us-east-1")"#);
    /// ```
    pub fn expression(&self) -> String {
        match self {
            AttributeDefault::Static(StaticDefault::Bool(v)) => {
                format!("booldefault.StaticBool({})", v)
            }
            AttributeDefault::Static(StaticDefault::Float64(v)) => {
                format!("float64default.StaticFloat64({})", v)
            }
            AttributeDefault::Static(StaticDefault::Int64(v)) => {
                format!("int64default.StaticInt64({})", v)
            }
            AttributeDefault::Static(StaticDefault::Number(v)) => {
                format!("numberdefault.StaticBigFloat(big.NewFloat({}))", v)
            }
            AttributeDefault::Static(StaticDefault::String(v)) => {
                format!("stringdefault.StaticString({})", quote_go_string(v))
            }
            AttributeDefault::Custom(code) => code.definition.clone(),
        }
    }

    pub fn imports(&self) -> ImportSet {
        let mut imports = ImportSet::new();
        match self {
            AttributeDefault::Static(StaticDefault::Bool(_)) => {
                imports.add(&default_import("Bool"))
            }
            AttributeDefault::Static(StaticDefault::Float64(_)) => {
                imports.add(&default_import("Float64"))
            }
            AttributeDefault::Static(StaticDefault::Int64(_)) => {
                imports.add(&default_import("Int64"))
            }
            AttributeDefault::Static(StaticDefault::Number(_)) => {
                imports.add(MATH_BIG_IMPORT);
                imports.add(&default_import("Number"));
            }
            AttributeDefault::Static(StaticDefault::String(_)) => {
                imports.add(&default_import("String"))
            }
            AttributeDefault::Custom(code) => imports.merge(&code.imports()),
        }
        imports
    }
}
