//! Shared test utilities for framegen-gen tests.
//!
//! Helpers here build both sides of the pipeline: specification entries
//! (`*_spec`) as a user would write them, and assembled nodes (`*_node`) for
//! tests that exercise one node operation directly.

use framegen_define as define;
use framegen_define::ComputedOptionalRequired;

use crate::customization::ExternalType;
use crate::render::{Fragment, RenderError, Renderer};
use crate::schema::{
    AttributeCommon, NestedCollectionAttribute, NestedObject, Node, NodeMap, ScalarAttribute,
    SingleNestedAttribute,
};

/// Creates a bool node with the given behavior and no customization.
pub fn bool_node(behavior: ComputedOptionalRequired) -> Node {
    Node::Bool(ScalarAttribute {
        common: AttributeCommon {
            behavior,
            ..Default::default()
        },
        default: None,
    })
}

/// Creates a string node with the given behavior and no customization.
pub fn string_node(behavior: ComputedOptionalRequired) -> Node {
    Node::String(ScalarAttribute {
        common: AttributeCommon {
            behavior,
            ..Default::default()
        },
        default: None,
    })
}

/// Collects `(name, node)` pairs into a child map.
pub fn node_map(entries: Vec<(&str, Node)>) -> NodeMap {
    entries
        .into_iter()
        .map(|(name, node)| (name.to_string(), node))
        .collect()
}

/// Creates an optional single-nested node, linked when `external` is set.
pub fn single_nested_node(children: Vec<(&str, Node)>, external: Option<&str>) -> Node {
    Node::SingleNested(SingleNestedAttribute {
        common: AttributeCommon {
            external_type: external.map(ExternalType::new),
            ..Default::default()
        },
        attributes: node_map(children),
        default: None,
    })
}

/// Creates an optional list-nested node whose nested object is linked when
/// `external` is set.
pub fn list_nested_node(children: Vec<(&str, Node)>, external: Option<&str>) -> Node {
    Node::ListNested(NestedCollectionAttribute {
        common: AttributeCommon::default(),
        nested_object: NestedObject {
            attributes: node_map(children),
            external_type: external.map(ExternalType::new),
            ..Default::default()
        },
        default: None,
    })
}

/// Creates a string attribute entry.
pub fn string_spec(name: &str, behavior: ComputedOptionalRequired) -> define::Attribute {
    define::Attribute {
        string: Some(define::StringAttribute {
            computed_optional_required: behavior,
            ..Default::default()
        }),
        ..define::Attribute::named(name)
    }
}

/// Creates a bool attribute entry.
pub fn bool_spec(name: &str, behavior: ComputedOptionalRequired) -> define::Attribute {
    define::Attribute {
        bool: Some(define::BoolAttribute {
            computed_optional_required: behavior,
            ..Default::default()
        }),
        ..define::Attribute::named(name)
    }
}

/// Creates an optional single-nested attribute entry.
pub fn single_nested_spec(
    name: &str,
    children: Vec<define::Attribute>,
    external: Option<&str>,
) -> define::Attribute {
    define::Attribute {
        single_nested: Some(define::SingleNestedAttribute {
            computed_optional_required: ComputedOptionalRequired::Optional,
            attributes: children,
            associated_external_type: external.map(external_spec),
            ..Default::default()
        }),
        ..define::Attribute::named(name)
    }
}

/// Creates an optional list-nested attribute entry.
pub fn list_nested_spec(
    name: &str,
    children: Vec<define::Attribute>,
    external: Option<&str>,
) -> define::Attribute {
    define::Attribute {
        list_nested: Some(define::NestedCollectionAttribute {
            computed_optional_required: ComputedOptionalRequired::Optional,
            nested_object: define::NestedAttributeObject {
                attributes: children,
                associated_external_type: external.map(external_spec),
                ..Default::default()
            },
            ..Default::default()
        }),
        ..define::Attribute::named(name)
    }
}

/// Creates an external type link without an import.
pub fn external_spec(type_: &str) -> define::AssociatedExternalType {
    define::AssociatedExternalType {
        import: None,
        type_: type_.to_string(),
    }
}

/// Wraps attribute entries in a resource specification.
pub fn resource_spec(name: &str, attributes: Vec<define::Attribute>) -> define::Specification {
    define::Specification {
        version: "0.1".to_string(),
        resources: vec![define::Resource {
            name: name.to_string(),
            schema: define::Schema {
                attributes,
                ..Default::default()
            },
        }],
        ..Default::default()
    }
}

/// A renderer whose every template fails.
#[derive(Debug, Default)]
pub struct FailingRenderer;

impl Renderer for FailingRenderer {
    fn render(&self, fragment: &Fragment) -> Result<Vec<u8>, RenderError> {
        Err(RenderError::Template {
            template: fragment.template_name().to_string(),
            reason: "renderer unavailable".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_helpers_populate_one_kind() {
        assert_eq!(
            string_spec("name", ComputedOptionalRequired::Required).kinds(),
            vec!["string"]
        );
        assert_eq!(
            single_nested_spec("configuration", vec![], None).kinds(),
            vec!["single_nested"]
        );
        assert_eq!(list_nested_spec("rules", vec![], None).kinds(), vec!["list_nested"]);
    }

    #[test]
    fn resource_spec_yields_one_item() {
        let spec = resource_spec("thing", vec![bool_spec("enabled", ComputedOptionalRequired::Optional)]);
        assert_eq!(spec.items().count(), 1);
    }
}
