//! Nested blocks.
//!
//! Blocks mirror nested attributes with two differences: they emit no
//! behavior or sensitivity clauses, and their object levels may hold further
//! blocks next to attributes.

use super::common::{BlockCommon, Clauses};
use super::nested::{
    NestedObject, attributes_clause, blocks_clause, children_imports, generated_object_attr_type,
    generated_object_type, object_to_from, object_wrapper,
};
use super::{NodeKind, NodeMap};
use crate::conversion::CollectionKind;
use crate::errors::GeneratorError;
use crate::field::{FieldDescriptor, wrapper_value_name};
use crate::imports::{ImportSet, TYPES_IMPORT, wrapper_imports};
use crate::render::Renderer;

/// A `single_nested` block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SingleNestedBlock {
    pub common: BlockCommon,
    pub attributes: NodeMap,
    pub blocks: NodeMap,
}

/// A `list_nested` or `set_nested` block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NestedCollectionBlock {
    pub common: BlockCommon,
    pub nested_object: NestedObject,
}

impl SingleNestedBlock {
    pub fn imports(&self) -> ImportSet {
        let mut imports = self.common.imports();
        if self.common.custom_type.is_none() {
            imports.merge(&wrapper_imports());
        }
        imports.merge(&children_imports(&self.attributes, &self.blocks));
        imports
    }

    pub fn schema_fragment(&self, name: &str) -> String {
        let custom_type = match &self.common.custom_type {
            Some(custom) => custom.type_expr.clone(),
            None => generated_object_type(name),
        };
        Clauses::open(name, "SingleNestedBlock")
            .custom_type(Some(custom_type))
            .raw(&attributes_clause(&self.attributes))
            .raw(&blocks_clause(&self.blocks))
            .description(self.common.description.as_deref())
            .deprecation(self.common.deprecation_message.as_deref())
            .validators("Object", &self.common.validators)
            .plan_modifiers("Object", &self.common.plan_modifiers)
            .finish()
    }

    pub fn field_descriptor(&self, name: &str) -> FieldDescriptor {
        FieldDescriptor::resolve(
            name,
            self.common.custom_type.as_ref(),
            true,
            "types.Object".to_string(),
        )
    }

    pub fn custom_type_and_value(
        &self,
        name: &str,
        renderer: &dyn Renderer,
    ) -> Result<String, GeneratorError> {
        object_wrapper(
            name,
            self.common.custom_type.is_some(),
            &self.attributes,
            &self.blocks,
            renderer,
        )
    }

    pub fn to_from_functions(
        &self,
        name: &str,
        renderer: &dyn Renderer,
    ) -> Result<String, GeneratorError> {
        object_to_from(
            name,
            self.common.wrapped_external(),
            &self.attributes,
            &self.blocks,
            renderer,
        )
    }

    pub fn attr_type(&self, name: &str) -> String {
        match &self.common.custom_type {
            Some(custom) => custom.type_expr.clone(),
            None => generated_object_attr_type(name),
        }
    }

    pub fn attr_value(&self, name: &str) -> String {
        match &self.common.custom_type {
            Some(custom) => custom.value_type.clone(),
            None => wrapper_value_name(name),
        }
    }
}

impl NestedCollectionBlock {
    pub fn imports(&self) -> ImportSet {
        let mut imports = self.common.imports();
        imports.merge(&self.nested_object.imports());
        if self.common.custom_type.is_none() {
            imports.add(TYPES_IMPORT);
        }
        imports
    }

    pub fn schema_fragment(&self, kind: NodeKind, name: &str) -> String {
        Clauses::open(name, kind.schema_type())
            .custom_type(self.common.custom_type.as_ref().map(|c| c.type_expr.clone()))
            .raw(&self.nested_object.schema_clause("NestedBlockObject", name))
            .description(self.common.description.as_deref())
            .deprecation(self.common.deprecation_message.as_deref())
            .validators(kind.validator_type(), &self.common.validators)
            .plan_modifiers(kind.validator_type(), &self.common.plan_modifiers)
            .finish()
    }

    pub fn field_descriptor(&self, collection: CollectionKind, name: &str) -> FieldDescriptor {
        FieldDescriptor::resolve(
            name,
            self.common.custom_type.as_ref(),
            false,
            collection.value_type(),
        )
    }

    pub fn custom_type_and_value(
        &self,
        name: &str,
        renderer: &dyn Renderer,
    ) -> Result<String, GeneratorError> {
        self.nested_object.custom_type_and_value(name, renderer)
    }

    pub fn to_from_functions(
        &self,
        name: &str,
        renderer: &dyn Renderer,
    ) -> Result<String, GeneratorError> {
        self.nested_object.to_from_functions(name, renderer)
    }

    pub fn attr_type(&self, collection: CollectionKind, name: &str) -> String {
        match &self.common.custom_type {
            Some(custom) => custom.type_expr.clone(),
            None => format!(
                "basetypes.{}Type{{\nElemType: {},\n}}",
                collection.type_name(),
                self.nested_object.element_type(name)
            ),
        }
    }

    pub fn attr_value(&self, collection: CollectionKind) -> String {
        match &self.common.custom_type {
            Some(custom) => custom.value_type.clone(),
            None => format!("basetypes.{}Value", collection.type_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::GoRenderer;
    use crate::schema::Node;
    use crate::test_utils::{node_map, string_node};
    use framegen_define::ComputedOptionalRequired;

    /// Helper to build a list-nested block holding one string attribute and
    /// one inner single-nested block.
    fn rules_block() -> Node {
        let inner = Node::SingleNestedBlock(SingleNestedBlock {
            attributes: node_map(vec![(
                "cidr",
                string_node(ComputedOptionalRequired::Required),
            )]),
            ..Default::default()
        });
        Node::ListNestedBlock(NestedCollectionBlock {
            common: BlockCommon {
                description: Some("Firewall rules".to_string()),
                ..Default::default()
            },
            nested_object: NestedObject {
                attributes: node_map(vec![(
                    "port",
                    string_node(ComputedOptionalRequired::Optional),
                )]),
                blocks: node_map(vec![("source", inner)]),
                ..Default::default()
            },
        })
    }

    #[test]
    fn block_fragment_has_no_behavior() {
        let fragment = rules_block().schema_fragment("rules");

        assert!(
            fragment.starts_with(
                "\"rules\": schema.ListNestedBlock{\nNestedObject: schema.NestedBlockObject{\n"
            ),
            "{}",
            fragment
        );
        assert!(
            fragment.contains("Blocks: map[string]schema.Block{\n\"source\": schema.SingleNestedBlock{"),
            "{}",
            fragment
        );
        assert!(
            fragment.ends_with("Description: \"Firewall rules\",\nMarkdownDescription: \"Firewall rules\",\n},\n"),
            "{}",
            fragment
        );
    }

    #[test]
    fn wrappers_cover_inner_blocks() {
        let code = rules_block()
            .custom_type_and_value("rules", &GoRenderer::new())
            .unwrap();

        assert!(code.contains("type RulesValue struct {"), "{}", code);
        assert!(code.contains("type SourceValue struct {"), "{}", code);
        assert!(code.contains("Source SourceValue `tfsdk:\"source\"`"), "{}", code);
    }

    #[test]
    fn set_block_field_defaults_to_set() {
        let node = Node::SetNestedBlock(NestedCollectionBlock::default());

        assert_eq!(node.field_descriptor("items").value_type, "types.Set");
        assert_eq!(node.attr_value("items"), "basetypes.SetValue");
    }
}
