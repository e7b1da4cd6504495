//! Element types of collections and object members.

use std::collections::BTreeMap;

use crate::conversion::{CollectionKind, ScalarConversion, ScalarKind};
use crate::customization::TypeOverride;
use crate::errors::GeneratorError;
use crate::imports::{ATTR_IMPORT, ImportSet, TYPES_IMPORT};
use crate::naming::quote_go_string;

/// A recursive element type, assembled from a specification element.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementType {
    Scalar {
        kind: ScalarKind,
        custom_type: Option<TypeOverride>,
    },
    Collection {
        collection: CollectionKind,
        element_type: Box<ElementType>,
        custom_type: Option<TypeOverride>,
    },
    Object {
        attribute_types: BTreeMap<String, ElementType>,
        custom_type: Option<TypeOverride>,
    },
}

impl ElementType {
    pub fn scalar(kind: ScalarKind) -> Self {
        ElementType::Scalar {
            kind,
            custom_type: None,
        }
    }

    pub fn collection(collection: CollectionKind, element_type: ElementType) -> Self {
        ElementType::Collection {
            collection,
            element_type: Box::new(element_type),
            custom_type: None,
        }
    }

    pub fn object(attribute_types: BTreeMap<String, ElementType>) -> Self {
        ElementType::Object {
            attribute_types,
            custom_type: None,
        }
    }

    /// The element's kind tag, e.g. `string` or `list`.
    pub fn kind(&self) -> String {
        match self {
            ElementType::Scalar { kind, .. } => kind.to_string(),
            ElementType::Collection { collection, .. } => collection.to_string(),
            ElementType::Object { .. } => "object".to_string(),
        }
    }

    fn custom_type(&self) -> Option<&TypeOverride> {
        match self {
            ElementType::Scalar { custom_type, .. }
            | ElementType::Collection { custom_type, .. }
            | ElementType::Object { custom_type, .. } => custom_type.as_ref(),
        }
    }

    /// The Go expression describing this element type.
    ///
    /// ## Examples
    ///
    /// ```
    /// use framegen_gen::conversion::{CollectionKind, ScalarKind};
    /// use framegen_gen::element::ElementType;
    ///
    /// let element = ElementType::collection(
    ///     CollectionKind::List,
    ///     ElementType::scalar(ScalarKind::String),
    /// );
    /// assert_eq!(element.type_expr(), "types.ListType{\nElemType: types.StringType,\n}");
    /// ```
    pub fn type_expr(&self) -> String {
        if let Some(custom) = self.custom_type() {
            return custom.type_expr.clone();
        }
        match self {
            ElementType::Scalar { kind, .. } => kind.type_expr(),
            ElementType::Collection {
                collection,
                element_type,
                ..
            } => format!(
                "types.{}Type{{\nElemType: {},\n}}",
                collection.type_name(),
                element_type.type_expr()
            ),
            ElementType::Object {
                attribute_types, ..
            } => format!("types.ObjectType{{\nAttrTypes: {},\n}}", attr_types_map(attribute_types)),
        }
    }

    /// Imports needed by [`type_expr`](Self::type_expr), recursively.
    pub fn imports(&self) -> ImportSet {
        let mut imports = ImportSet::new();
        match self.custom_type() {
            Some(custom) => imports.merge(&custom.imports()),
            None => imports.add(TYPES_IMPORT),
        }
        match self {
            ElementType::Scalar { .. } => {}
            ElementType::Collection { element_type, .. } => imports.merge(&element_type.imports()),
            ElementType::Object {
                attribute_types, ..
            } => {
                imports.add(ATTR_IMPORT);
                for member in attribute_types.values() {
                    imports.merge(&member.imports());
                }
            }
        }
        imports
    }

    /// The scalar conversion for this element.
    ///
    /// Only scalar elements convert; anything else reports its own kind.
    pub fn conversion(&self) -> Result<ScalarConversion, GeneratorError> {
        match self {
            ElementType::Scalar { kind, .. } => Ok(ScalarConversion::new(*kind)),
            other => Err(GeneratorError::UnresolvedElementConversion {
                element_kind: other.kind(),
            }),
        }
    }
}

/// Renders `map[string]attr.Type{...}` for object members, in name order.
pub(crate) fn attr_types_map(members: &BTreeMap<String, ElementType>) -> String {
    let mut out = String::from("map[string]attr.Type{\n");
    for (name, member) in members {
        out.push_str(&format!("{}: {},\n", quote_go_string(name), member.type_expr()));
    }
    out.push('}');
    out
}
