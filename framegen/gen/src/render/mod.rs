//! The rendering collaborator.
//!
//! Nodes describe leaf text as a [`Fragment`]: a named template plus the data
//! it needs. A [`Renderer`] turns fragments into bytes. The engine never
//! formats wrapper types or conversion functions itself, so a caller can
//! swap in a different renderer (or a failing one in tests).
//!
//! - [`GoRenderer`] - built-in templates for the target framework
//! - [`reindent`] - brace-depth re-indentation of assembled Go text

mod format;
mod go;

pub use format::reindent;
pub use go::GoRenderer;

use thiserror::Error;

use crate::conversion::{CollectionKind, ScalarConversion};
use crate::customization::ExternalType;

/// Errors raised by a [`Renderer`].
#[derive(Debug, Error)]
pub enum RenderError {
    /// A template rejected its data.
    #[error("Template '{template}' failed: {reason}")]
    Template { template: String, reason: String },

    /// Rendered output was not valid UTF-8.
    #[error("Rendered output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Renders one fragment to bytes.
pub trait Renderer {
    fn render(&self, fragment: &Fragment) -> Result<Vec<u8>, RenderError>;

    /// Renders a fragment and decodes it as UTF-8.
    fn render_string(&self, fragment: &Fragment) -> Result<String, RenderError> {
        Ok(String::from_utf8(self.render(fragment)?)?)
    }
}

/// One attribute of a generated object wrapper value.
#[derive(Debug, Clone, PartialEq)]
pub struct WrapperAttribute {
    /// Exported Go field name.
    pub field: String,
    pub wire_key: String,
    /// Value token, e.g. `basetypes.StringValue`.
    pub value_type: String,
    /// Type token, e.g. `basetypes.StringType{}`.
    pub attr_type: String,
}

/// One scalar member of an object converted inline.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectMember {
    pub field: String,
    pub wire_key: String,
    pub conversion: ScalarConversion,
}

/// How one child field of a linked nested object converts.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldConversion {
    /// A scalar child converted with its fixed conversion pair.
    Scalar {
        field: String,
        conversion: ScalarConversion,
    },
    /// A list, map, or set of scalars.
    Collection {
        field: String,
        collection: CollectionKind,
        element_type: String,
    },
    /// An object of scalars, held by value in the external struct.
    Object {
        field: String,
        members: Vec<ObjectMember>,
        attr_types: String,
    },
    /// A child with its own conversion functions.
    Delegate {
        field: String,
        value_type: String,
        external: ExternalType,
    },
    /// A nested collection whose elements have their own conversion functions.
    NestedCollection {
        field: String,
        collection: CollectionKind,
        value_type: String,
        external: ExternalType,
    },
    /// A child without a conversion; it is always set to `null_expr`.
    Null { field: String, null_expr: String },
}

impl FieldConversion {
    pub fn field(&self) -> &str {
        match self {
            FieldConversion::Scalar { field, .. }
            | FieldConversion::Collection { field, .. }
            | FieldConversion::Object { field, .. }
            | FieldConversion::Delegate { field, .. }
            | FieldConversion::NestedCollection { field, .. }
            | FieldConversion::Null { field, .. } => field,
        }
    }
}

/// A template request.
///
/// `name` is always the Pascal-case stem of the generated `<name>Type` /
/// `<name>Value` pair.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// Type/value pair for nested objects with per-attribute fields.
    ObjectWrapper {
        name: String,
        attributes: Vec<WrapperAttribute>,
    },
    /// Type/value pair embedding a framework base type such as `Bool` or `List`.
    PrimitiveWrapper { name: String, base: String },
    ScalarToFrom {
        name: String,
        external: ExternalType,
        conversion: ScalarConversion,
    },
    CollectionToFrom {
        name: String,
        external: ExternalType,
        collection: CollectionKind,
        element_type: String,
    },
    ObjectToFrom {
        name: String,
        external: ExternalType,
        members: Vec<ObjectMember>,
        attr_types: String,
    },
    NestedToFrom {
        name: String,
        external: ExternalType,
        fields: Vec<FieldConversion>,
    },
}

impl Fragment {
    /// The template this fragment renders through.
    ///
    /// ## Examples
    ///
    /// ```
    /// use framegen_gen::render::Fragment;
    ///
    /// let fragment = Fragment::PrimitiveWrapper { name: "Enabled".into(), base: "Bool".into() };
    /// assert_eq!(fragment.template_name(), "primitive_wrapper");
    /// ```
    pub fn template_name(&self) -> &'static str {
        match self {
            Fragment::ObjectWrapper { .. } => "object_wrapper",
            Fragment::PrimitiveWrapper { .. } => "primitive_wrapper",
            Fragment::ScalarToFrom { .. } => "to_from_scalar",
            Fragment::CollectionToFrom { .. } => "to_from_collection",
            Fragment::ObjectToFrom { .. } => "to_from_object",
            Fragment::NestedToFrom { .. } => "to_from_nested",
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Fragment::ObjectWrapper { name, .. }
            | Fragment::PrimitiveWrapper { name, .. }
            | Fragment::ScalarToFrom { name, .. }
            | Fragment::CollectionToFrom { name, .. }
            | Fragment::ObjectToFrom { name, .. }
            | Fragment::NestedToFrom { name, .. } => name,
        }
    }
}
