//! Conversion plans between generated values and external API types.
//!
//! A [`ConversionPlan`] names how one node maps to its external type and back:
//!
//! - scalars unwrap to a pointer and wrap it again (`ValueStringPointer` /
//!   `types.StringPointerValue`)
//! - collections wrap an element conversion in `ElementsAs` / `types.ListValueFrom`
//! - objects map each member name to that member's plan
//! - nested collections delegate to the conversion functions of their object

use std::collections::BTreeMap;

use strum::{Display, EnumIter, EnumString};

use crate::customization::ExternalType;

/// The primitive kinds of the framework.
///
/// ## Examples
///
/// ```
/// use framegen_gen::conversion::ScalarKind;
///
/// assert_eq!(ScalarKind::Float64.to_string(), "float64");
/// assert_eq!(ScalarKind::Float64.type_name(), "Float64");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ScalarKind {
    Bool,
    Float64,
    Int64,
    Number,
    String,
}

impl ScalarKind {
    /// The framework's type name, used in `types.<Name>` and friends.
    pub fn type_name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "Bool",
            ScalarKind::Float64 => "Float64",
            ScalarKind::Int64 => "Int64",
            ScalarKind::Number => "Number",
            ScalarKind::String => "String",
        }
    }

    /// The record field type, e.g. `types.Bool`.
    pub fn value_type(self) -> String {
        format!("types.{}", self.type_name())
    }

    /// The element type expression, e.g. `types.BoolType`.
    pub fn type_expr(self) -> String {
        format!("types.{}Type", self.type_name())
    }

    /// The Go type of the external field holding this kind.
    pub fn external_type(self) -> &'static str {
        match self {
            ScalarKind::Bool => "*bool",
            ScalarKind::Float64 => "*float64",
            ScalarKind::Int64 => "*int64",
            ScalarKind::Number => "*big.Float",
            ScalarKind::String => "*string",
        }
    }
}

/// The fixed conversion pair for one scalar kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarConversion {
    pub kind: ScalarKind,
}

impl ScalarConversion {
    pub fn new(kind: ScalarKind) -> Self {
        Self { kind }
    }

    /// Method called on a generated value to unwrap it.
    ///
    /// ## Examples
    ///
    /// ```
    /// use framegen_gen::conversion::{ScalarConversion, ScalarKind};
    ///
    /// let conversion = ScalarConversion::new(ScalarKind::Bool);
    /// assert_eq!(conversion.to_method(), "ValueBoolPointer");
    /// assert_eq!(conversion.from_function(), "types.BoolPointerValue");
    /// ```
    pub fn to_method(&self) -> &'static str {
        match self.kind {
            ScalarKind::Bool => "ValueBoolPointer",
            ScalarKind::Float64 => "ValueFloat64Pointer",
            ScalarKind::Int64 => "ValueInt64Pointer",
            ScalarKind::Number => "ValueBigFloat",
            ScalarKind::String => "ValueStringPointer",
        }
    }

    /// Function wrapping an external value into a generated one.
    pub fn from_function(&self) -> &'static str {
        match self.kind {
            ScalarKind::Bool => "types.BoolPointerValue",
            ScalarKind::Float64 => "types.Float64PointerValue",
            ScalarKind::Int64 => "types.Int64PointerValue",
            ScalarKind::Number => "types.NumberValue",
            ScalarKind::String => "types.StringPointerValue",
        }
    }

    /// The `basetypes` value a collection element is asserted to.
    pub fn base_value(&self) -> String {
        format!("basetypes.{}Value", self.kind.type_name())
    }
}

/// The three collection shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum CollectionKind {
    List,
    Map,
    Set,
}

impl CollectionKind {
    pub fn type_name(self) -> &'static str {
        match self {
            CollectionKind::List => "List",
            CollectionKind::Map => "Map",
            CollectionKind::Set => "Set",
        }
    }

    /// The record field type, e.g. `types.List`.
    pub fn value_type(self) -> String {
        format!("types.{}", self.type_name())
    }

    /// Constructor turning a Go slice or map into a generated collection.
    pub fn value_from(self) -> String {
        format!("types.{}ValueFrom", self.type_name())
    }

    /// The external Go container type over `element`.
    pub fn external_container(self, element: &str) -> String {
        match self {
            CollectionKind::List | CollectionKind::Set => format!("[]{}", element),
            CollectionKind::Map => format!("map[string]{}", element),
        }
    }
}

/// How one node converts to and from its external type.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionPlan {
    Scalar(ScalarConversion),
    Collection {
        collection: CollectionKind,
        element: ScalarConversion,
    },
    /// Member name to member plan; every member resolved.
    Object {
        members: BTreeMap<String, ConversionPlan>,
    },
    /// Elements convert through the nested object's own functions.
    Nested {
        collection: CollectionKind,
        external: ExternalType,
    },
}

impl ConversionPlan {
    /// Names the generated-to-external operation.
    ///
    /// ## Examples
    ///
    /// ```
    /// use framegen_gen::conversion::{CollectionKind, ConversionPlan, ScalarConversion, ScalarKind};
    ///
    /// let plan = ConversionPlan::Collection {
    ///     collection: CollectionKind::List,
    ///     element: ScalarConversion::new(ScalarKind::String),
    /// };
    /// assert_eq!(plan.to(), "ElementsAs");
    /// assert_eq!(plan.from(), "types.ListValueFrom");
    /// ```
    pub fn to(&self) -> String {
        match self {
            ConversionPlan::Scalar(scalar) => scalar.to_method().to_string(),
            ConversionPlan::Collection { .. } => "ElementsAs".to_string(),
            ConversionPlan::Object { .. } => "Attributes".to_string(),
            ConversionPlan::Nested { external, .. } => format!("To{}", external.to_pascal_case()),
        }
    }

    /// Names the external-to-generated operation.
    pub fn from(&self) -> String {
        match self {
            ConversionPlan::Scalar(scalar) => scalar.from_function().to_string(),
            ConversionPlan::Collection { collection, .. } => collection.value_from(),
            ConversionPlan::Object { .. } => "types.ObjectValue".to_string(),
            ConversionPlan::Nested { external, .. } => {
                format!("From{}", external.to_pascal_case())
            }
        }
    }
}
