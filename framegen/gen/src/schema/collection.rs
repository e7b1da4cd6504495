//! List, map, and set attributes.

use super::NodeKind;
use super::common::{AttributeCommon, Clauses};
use crate::conversion::{CollectionKind, ConversionPlan};
use crate::customization::AttributeDefault;
use crate::element::ElementType;
use crate::errors::GeneratorError;
use crate::field::{FieldDescriptor, wrapper_type_name, wrapper_value_name};
use crate::imports::{ImportSet, TYPES_IMPORT, wrapper_imports};
use crate::naming::to_pascal_case;
use crate::render::{Fragment, Renderer};

/// A collection attribute. The collection kind comes from the node variant.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionAttribute {
    pub common: AttributeCommon,
    pub element_type: ElementType,
    pub default: Option<AttributeDefault>,
}

impl CollectionAttribute {
    pub fn imports(&self) -> ImportSet {
        let mut imports = self.common.imports();
        imports.merge(&self.element_type.imports());
        if self.common.custom_type.is_none() {
            imports.add(TYPES_IMPORT);
        }
        if self.common.is_wrapped() {
            imports.merge(&wrapper_imports());
        }
        if let Some(default) = &self.default {
            imports.merge(&default.imports());
        }
        imports
    }

    /// `basetypes.ListType{ElemType: ...}` for this collection.
    fn base_type(&self, collection: CollectionKind) -> String {
        format!(
            "basetypes.{}Type{{\nElemType: {},\n}}",
            collection.type_name(),
            self.element_type.type_expr()
        )
    }

    /// The generated wrapper type expression, used when the node is linked.
    fn wrapper_type(&self, collection: CollectionKind, name: &str) -> String {
        format!(
            "{}{{\n{}Type: {},\n}}",
            wrapper_type_name(name),
            collection.type_name(),
            self.base_type(collection)
        )
    }

    pub fn schema_fragment(&self, kind: NodeKind, collection: CollectionKind, name: &str) -> String {
        let custom_type = match (&self.common.custom_type, &self.common.external_type) {
            (Some(custom), _) => Some(custom.type_expr.clone()),
            (None, Some(_)) => Some(self.wrapper_type(collection, name)),
            (None, None) => None,
        };
        Clauses::open(name, kind.schema_type())
            .custom_type(custom_type)
            .raw(&format!("ElementType: {},\n", self.element_type.type_expr()))
            .behavior(self.common.behavior)
            .sensitive(self.common.sensitive)
            .description(self.common.description.as_deref())
            .deprecation(self.common.deprecation_message.as_deref())
            .validators(kind.validator_type(), &self.common.validators)
            .plan_modifiers(kind.validator_type(), &self.common.plan_modifiers)
            .default(self.default.as_ref())
            .finish()
    }

    pub fn field_descriptor(&self, collection: CollectionKind, name: &str) -> FieldDescriptor {
        FieldDescriptor::for_linked(
            name,
            self.common.custom_type.as_ref(),
            self.common.external_type.as_ref(),
            collection.value_type(),
        )
    }

    pub fn custom_type_and_value(
        &self,
        collection: CollectionKind,
        name: &str,
        renderer: &dyn Renderer,
    ) -> Result<String, GeneratorError> {
        if !self.common.is_wrapped() {
            return Ok(String::new());
        }
        let fragment = Fragment::PrimitiveWrapper {
            name: to_pascal_case(name),
            base: collection.type_name().to_string(),
        };
        Ok(renderer.render_string(&fragment)?)
    }

    pub fn to_from_functions(
        &self,
        collection: CollectionKind,
        name: &str,
        renderer: &dyn Renderer,
    ) -> Result<String, GeneratorError> {
        let Some(external) = self.common.wrapped_external() else {
            return Ok(String::new());
        };
        self.conversion_plan(collection)?;
        let fragment = Fragment::CollectionToFrom {
            name: to_pascal_case(name),
            external: external.clone(),
            collection,
            element_type: self.element_type.type_expr(),
        };
        Ok(renderer.render_string(&fragment)?)
    }

    pub fn attr_type(&self, collection: CollectionKind, name: &str) -> String {
        match (&self.common.custom_type, &self.common.external_type) {
            (Some(custom), _) => custom.type_expr.clone(),
            (None, Some(_)) => self.wrapper_type(collection, name),
            (None, None) => self.base_type(collection),
        }
    }

    pub fn attr_value(&self, collection: CollectionKind, name: &str) -> String {
        match (&self.common.custom_type, &self.common.external_type) {
            (Some(custom), _) => custom.value_type.clone(),
            (None, Some(_)) => wrapper_value_name(name),
            (None, None) => format!("basetypes.{}Value", collection.type_name()),
        }
    }

    /// The element conversion wrapped in the collection conversion.
    ///
    /// Fails with [`GeneratorError::UnresolvedElementConversion`] unless the
    /// element is a scalar.
    pub fn conversion_plan(
        &self,
        collection: CollectionKind,
    ) -> Result<ConversionPlan, GeneratorError> {
        Ok(ConversionPlan::Collection {
            collection,
            element: self.element_type.conversion()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::ScalarKind;
    use crate::customization::ExternalType;
    use crate::render::GoRenderer;

    /// Helper to build a list of the given element type.
    fn list_of(element_type: ElementType) -> CollectionAttribute {
        CollectionAttribute {
            common: AttributeCommon::default(),
            element_type,
            default: None,
        }
    }

    #[test]
    fn list_fragment_carries_element_type() {
        let fragment = list_of(ElementType::scalar(ScalarKind::String)).schema_fragment(
            NodeKind::List,
            CollectionKind::List,
            "tags",
        );

        assert_eq!(
            fragment,
            "\"tags\": schema.ListAttribute{\nElementType: types.StringType,\nOptional: true,\n},\n"
        );
    }

    #[test]
    fn linked_list_uses_generated_custom_type() {
        let attribute = CollectionAttribute {
            common: AttributeCommon {
                external_type: Some(ExternalType::new("[]*string")),
                ..Default::default()
            },
            ..list_of(ElementType::scalar(ScalarKind::String))
        };

        let fragment = attribute.schema_fragment(NodeKind::List, CollectionKind::List, "tags");
        assert!(
            fragment.contains(
                "CustomType: TagsType{\nListType: basetypes.ListType{\nElemType: types.StringType,\n},\n},"
            ),
            "{}",
            fragment
        );
        assert_eq!(
            attribute.field_descriptor(CollectionKind::List, "tags").value_type,
            "TagsValue"
        );
    }

    #[test]
    fn list_of_lists_has_no_conversion() {
        let attribute = CollectionAttribute {
            common: AttributeCommon {
                external_type: Some(ExternalType::new("[][]string")),
                ..Default::default()
            },
            ..list_of(ElementType::collection(
                CollectionKind::List,
                ElementType::scalar(ScalarKind::String),
            ))
        };

        let err = attribute
            .to_from_functions(CollectionKind::List, "matrix", &GoRenderer::new())
            .unwrap_err();
        assert!(
            matches!(err, GeneratorError::UnresolvedElementConversion { ref element_kind } if element_kind == "list"),
            "{:?}",
            err
        );
    }

    #[test]
    fn map_tokens_for_parent_wrappers() {
        let attribute = list_of(ElementType::scalar(ScalarKind::Int64));

        assert_eq!(attribute.attr_value(CollectionKind::Map, "ports"), "basetypes.MapValue");
        assert_eq!(
            attribute.attr_type(CollectionKind::Map, "ports"),
            "basetypes.MapType{\nElemType: types.Int64Type,\n}"
        );
    }
}
