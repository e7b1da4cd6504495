//! Schema-tree assembly.
//!
//! Turns specification entries into [`Node`]s. Each entry must populate
//! exactly one kind payload; nested kinds assemble their children first, and
//! the first failure at any depth aborts the whole assembly with that error.
//!
//! ## Examples
//!
//! ```
//! use framegen_define::{Attribute, BoolAttribute, ComputedOptionalRequired};
//! use framegen_gen::assemble::assemble_attributes;
//! use framegen_gen::schema::NodeKind;
//!
//! let attributes = vec![Attribute {
//!     bool: Some(BoolAttribute {
//!         computed_optional_required: ComputedOptionalRequired::Computed,
//!         ..Default::default()
//!     }),
//!     ..Attribute::named("bool_attribute")
//! }];
//!
//! let nodes = assemble_attributes(&attributes).unwrap();
//! assert_eq!(nodes["bool_attribute"].kind(), NodeKind::Bool);
//! ```

use std::collections::BTreeMap;

use framegen_define as define;
use tracing::{instrument, trace, warn};

use crate::conversion::{CollectionKind, ScalarKind};
use crate::customization::{
    AttributeDefault, CodeSnippet, ExternalType, StaticDefault, TypeOverride,
};
use crate::element::ElementType;
use crate::errors::GeneratorError;
use crate::schema::{
    AttributeCommon, BlockCommon, CollectionAttribute, NestedCollectionAttribute,
    NestedCollectionBlock, NestedObject, Node, NodeMap, ObjectAttribute, ScalarAttribute,
    SingleNestedAttribute, SingleNestedBlock,
};

/// The assembled attributes and blocks of one provider, resource, or data source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaTree {
    pub attributes: NodeMap,
    pub blocks: NodeMap,
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
}

impl SchemaTree {
    /// Deep structural equality with another tree.
    pub fn equals(&self, other: &SchemaTree) -> bool {
        self == other
    }
}

/// Builds the common modifiers of an attribute payload.
///
/// Every attribute payload names these fields the same way; `$external` is
/// passed separately because nested collections carry their link on the
/// nested object.
macro_rules! attribute_common {
    ($payload:expr, $external:expr) => {
        AttributeCommon {
            behavior: $payload.computed_optional_required,
            custom_type: $payload.custom_type.as_ref().map(TypeOverride::from),
            external_type: $external,
            sensitive: $payload.sensitive.unwrap_or(false),
            description: $payload.description.clone(),
            deprecation_message: $payload.deprecation_message.clone(),
            validators: snippets(&$payload.validators),
            plan_modifiers: snippets(&$payload.plan_modifiers),
        }
    };
}

/// Same as `attribute_common!` for block payloads.
macro_rules! block_common {
    ($payload:expr, $external:expr) => {
        BlockCommon {
            custom_type: $payload.custom_type.as_ref().map(TypeOverride::from),
            external_type: $external,
            description: $payload.description.clone(),
            deprecation_message: $payload.deprecation_message.clone(),
            validators: snippets(&$payload.validators),
            plan_modifiers: snippets(&$payload.plan_modifiers),
        }
    };
}

fn snippets<'a, T>(items: &'a [T]) -> Vec<CodeSnippet>
where
    CodeSnippet: From<&'a T>,
{
    items.iter().map(CodeSnippet::from).collect()
}

fn external(link: Option<&define::AssociatedExternalType>) -> Option<ExternalType> {
    link.map(ExternalType::from)
}

fn custom_default(default: Option<&define::CustomDefault>) -> Option<AttributeDefault> {
    default.map(|d| AttributeDefault::Custom(CodeSnippet::from(&d.custom)))
}

/// Assembles the attributes and blocks of one schema.
#[instrument(skip_all, fields(attributes = schema.attributes.len(), blocks = schema.blocks.len()))]
pub fn assemble_schema(schema: &define::Schema) -> Result<SchemaTree, GeneratorError> {
    let (attributes, blocks) = assemble_level(&schema.attributes, &schema.blocks)?;
    Ok(SchemaTree {
        attributes,
        blocks,
        description: schema.description.clone(),
        deprecation_message: schema.deprecation_message.clone(),
    })
}

/// Assembles the attributes and blocks of one object level.
///
/// Both become fields of the same Go struct, so a name may appear on only
/// one side.
fn assemble_level(
    attributes: &[define::Attribute],
    blocks: &[define::Block],
) -> Result<(NodeMap, NodeMap), GeneratorError> {
    let attributes = assemble_attributes(attributes)?;
    let blocks = assemble_blocks(blocks)?;
    if let Some(name) = blocks.keys().find(|name| attributes.contains_key(*name)) {
        return Err(GeneratorError::NameClash { name: name.clone() });
    }
    Ok((attributes, blocks))
}

/// Assembles attribute entries into a name-keyed map.
///
/// ## Errors
///
/// Returns [`GeneratorError::UnknownKind`] for the first entry, at any
/// depth, that does not populate exactly one kind.
pub fn assemble_attributes(attributes: &[define::Attribute]) -> Result<NodeMap, GeneratorError> {
    let mut nodes = NodeMap::new();
    for attribute in attributes {
        let node = assemble_attribute(attribute)?;
        if nodes.insert(attribute.name.clone(), node).is_some() {
            warn!(name = %attribute.name, "Duplicate attribute name; the later entry wins");
        }
    }
    Ok(nodes)
}

/// Assembles block entries into a name-keyed map.
pub fn assemble_blocks(blocks: &[define::Block]) -> Result<NodeMap, GeneratorError> {
    let mut nodes = NodeMap::new();
    for block in blocks {
        let node = assemble_block(block)?;
        if nodes.insert(block.name.clone(), node).is_some() {
            warn!(name = %block.name, "Duplicate block name; the later entry wins");
        }
    }
    Ok(nodes)
}

/// Assembles one attribute entry.
pub fn assemble_attribute(attribute: &define::Attribute) -> Result<Node, GeneratorError> {
    let kinds = attribute.kinds();
    if kinds.len() != 1 {
        return Err(GeneratorError::unknown_kind(&attribute.name, &kinds));
    }
    trace!(name = %attribute.name, kind = kinds[0], "Assembling attribute");
    let name = attribute.name.as_str();

    if let Some(p) = &attribute.bool {
        return Ok(Node::Bool(scalar(p, StaticDefault::Bool)));
    }
    if let Some(p) = &attribute.float64 {
        return Ok(Node::Float64(scalar(p, StaticDefault::Float64)));
    }
    if let Some(p) = &attribute.int64 {
        return Ok(Node::Int64(scalar(p, StaticDefault::Int64)));
    }
    if let Some(p) = &attribute.number {
        return Ok(Node::Number(scalar(p, StaticDefault::Number)));
    }
    if let Some(p) = &attribute.string {
        return Ok(Node::String(scalar(p, StaticDefault::String)));
    }
    if let Some(p) = &attribute.list {
        return Ok(Node::List(collection(name, p)?));
    }
    if let Some(p) = &attribute.map {
        return Ok(Node::Map(collection(name, p)?));
    }
    if let Some(p) = &attribute.set {
        return Ok(Node::Set(collection(name, p)?));
    }
    if let Some(p) = &attribute.object {
        return Ok(Node::Object(ObjectAttribute {
            common: attribute_common!(p, external(p.associated_external_type.as_ref())),
            attribute_types: object_members(name, &p.attribute_types)?,
            default: custom_default(p.default.as_ref()),
        }));
    }
    if let Some(p) = &attribute.single_nested {
        return Ok(Node::SingleNested(SingleNestedAttribute {
            common: attribute_common!(p, external(p.associated_external_type.as_ref())),
            attributes: assemble_attributes(&p.attributes)?,
            default: custom_default(p.default.as_ref()),
        }));
    }
    if let Some(p) = &attribute.list_nested {
        return Ok(Node::ListNested(nested_collection(p)?));
    }
    if let Some(p) = &attribute.set_nested {
        return Ok(Node::SetNested(nested_collection(p)?));
    }
    if let Some(p) = &attribute.map_nested {
        return Ok(Node::MapNested(nested_collection(p)?));
    }
    Err(GeneratorError::unknown_kind(name, &kinds))
}

/// Assembles one block entry.
pub fn assemble_block(block: &define::Block) -> Result<Node, GeneratorError> {
    let kinds = block.kinds();
    if kinds.len() != 1 {
        return Err(GeneratorError::unknown_kind(&block.name, &kinds));
    }
    trace!(name = %block.name, kind = kinds[0], "Assembling block");

    if let Some(p) = &block.list_nested {
        return Ok(Node::ListNestedBlock(nested_collection_block(p)?));
    }
    if let Some(p) = &block.set_nested {
        return Ok(Node::SetNestedBlock(nested_collection_block(p)?));
    }
    if let Some(p) = &block.single_nested {
        let (attributes, blocks) = assemble_level(&p.attributes, &p.blocks)?;
        return Ok(Node::SingleNestedBlock(SingleNestedBlock {
            common: block_common!(p, external(p.associated_external_type.as_ref())),
            attributes,
            blocks,
        }));
    }
    Err(GeneratorError::unknown_kind(&block.name, &kinds))
}

/// Assembles an element type; `entry` names the enclosing attribute for errors.
pub fn assemble_element_type(
    entry: &str,
    element: &define::ElementType,
) -> Result<ElementType, GeneratorError> {
    let kinds = element.kinds();
    if kinds.len() != 1 {
        return Err(GeneratorError::unknown_kind(entry, &kinds));
    }

    let scalars = [
        (ScalarKind::Bool, &element.bool),
        (ScalarKind::Float64, &element.float64),
        (ScalarKind::Int64, &element.int64),
        (ScalarKind::Number, &element.number),
        (ScalarKind::String, &element.string),
    ];
    for (kind, payload) in scalars {
        if let Some(p) = payload {
            return Ok(ElementType::Scalar {
                kind,
                custom_type: p.custom_type.as_ref().map(TypeOverride::from),
            });
        }
    }

    let collections = [
        (CollectionKind::List, &element.list),
        (CollectionKind::Map, &element.map),
        (CollectionKind::Set, &element.set),
    ];
    for (collection, payload) in collections {
        if let Some(p) = payload {
            return Ok(ElementType::Collection {
                collection,
                element_type: Box::new(assemble_element_type(entry, &p.element_type)?),
                custom_type: p.custom_type.as_ref().map(TypeOverride::from),
            });
        }
    }

    if let Some(p) = &element.object {
        return Ok(ElementType::Object {
            attribute_types: object_members(entry, &p.attribute_types)?,
            custom_type: p.custom_type.as_ref().map(TypeOverride::from),
        });
    }
    Err(GeneratorError::unknown_kind(entry, &kinds))
}

fn scalar<T: Clone>(
    payload: &define::ScalarAttribute<T>,
    wrap: impl Fn(T) -> StaticDefault,
) -> ScalarAttribute {
    ScalarAttribute {
        common: attribute_common!(payload, external(payload.associated_external_type.as_ref())),
        default: payload
            .default
            .as_ref()
            .map(|default| AttributeDefault::from_spec(default, wrap)),
    }
}

fn collection(
    name: &str,
    payload: &define::CollectionAttribute,
) -> Result<CollectionAttribute, GeneratorError> {
    Ok(CollectionAttribute {
        common: attribute_common!(payload, external(payload.associated_external_type.as_ref())),
        element_type: assemble_element_type(name, &payload.element_type)?,
        default: custom_default(payload.default.as_ref()),
    })
}

fn object_members(
    entry: &str,
    members: &[define::ObjectAttributeType],
) -> Result<BTreeMap<String, ElementType>, GeneratorError> {
    members
        .iter()
        .map(|member| {
            Ok((
                member.name.clone(),
                assemble_element_type(entry, &member.element_type)?,
            ))
        })
        .collect()
}

fn nested_collection(
    payload: &define::NestedCollectionAttribute,
) -> Result<NestedCollectionAttribute, GeneratorError> {
    let object = &payload.nested_object;
    Ok(NestedCollectionAttribute {
        common: attribute_common!(payload, None),
        nested_object: NestedObject {
            attributes: assemble_attributes(&object.attributes)?,
            blocks: NodeMap::new(),
            custom_type: object.custom_type.as_ref().map(TypeOverride::from),
            external_type: external(object.associated_external_type.as_ref()),
            validators: snippets(&object.validators),
            plan_modifiers: snippets(&object.plan_modifiers),
        },
        default: custom_default(payload.default.as_ref()),
    })
}

fn nested_collection_block(
    payload: &define::NestedCollectionBlock,
) -> Result<NestedCollectionBlock, GeneratorError> {
    let object = &payload.nested_object;
    let (attributes, blocks) = assemble_level(&object.attributes, &object.blocks)?;
    Ok(NestedCollectionBlock {
        common: block_common!(payload, None),
        nested_object: NestedObject {
            attributes,
            blocks,
            custom_type: object.custom_type.as_ref().map(TypeOverride::from),
            external_type: external(object.associated_external_type.as_ref()),
            validators: snippets(&object.validators),
            plan_modifiers: snippets(&object.plan_modifiers),
        },
    })
}
