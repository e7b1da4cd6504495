//! The attribute/block node model.
//!
//! A [`Node`] is one assembled schema construct. Nested kinds own a
//! [`NodeMap`] of children, so the tree is recursive to any depth; a
//! `BTreeMap` keeps children in name order, which makes every generated
//! fragment deterministic.
//!
//! Every kind answers the same set of questions:
//!
//! | Operation | Result |
//! |-----------|--------|
//! | [`Node::kind`] | Discriminator tag |
//! | [`Node::imports`] | Go imports of everything the node emits |
//! | [`Node::equals`] | Deep structural equality |
//! | [`Node::schema_fragment`] | Entry of the schema expression |
//! | [`Node::field_descriptor`] | Field of the record struct |
//! | [`Node::custom_type_and_value`] | Wrapper type/value definitions |
//! | [`Node::to_from_functions`] | Conversion functions for external types |
//! | [`Node::attr_type`] / [`Node::attr_value`] | Tokens used by a parent wrapper |
//! | [`Node::conversion_plan`] | Shape of the external conversion |

pub mod block;
pub mod collection;
pub mod common;
pub mod nested;
pub mod object;
pub mod scalar;

use std::collections::BTreeMap;

use strum::{Display, EnumIter, EnumString};

pub use block::{NestedCollectionBlock, SingleNestedBlock};
pub use collection::CollectionAttribute;
pub use common::{AttributeCommon, BlockCommon};
pub use nested::{NestedCollectionAttribute, NestedObject, SingleNestedAttribute};
pub use object::ObjectAttribute;
pub use scalar::ScalarAttribute;

use crate::conversion::{CollectionKind, ConversionPlan, ScalarConversion, ScalarKind};
use crate::customization::ExternalType;
use crate::errors::GeneratorError;
use crate::element::attr_types_map;
use crate::field::{FieldDescriptor, wrapper_value_name};
use crate::imports::ImportSet;
use crate::render::{FieldConversion, Renderer};

/// Children of a nested node, keyed and ordered by name.
pub type NodeMap = BTreeMap<String, Node>;

/// Discriminator tag of a [`Node`].
///
/// ## Examples
///
/// ```
/// use framegen_gen::schema::NodeKind;
///
/// assert_eq!(NodeKind::ListNestedBlock.to_string(), "list_nested_block");
/// assert_eq!(NodeKind::ListNestedBlock.schema_type(), "ListNestedBlock");
/// assert_eq!(NodeKind::SingleNested.validator_type(), "Object");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum NodeKind {
    Bool,
    Float64,
    Int64,
    Number,
    String,
    List,
    Map,
    Set,
    Object,
    SingleNested,
    ListNested,
    SetNested,
    MapNested,
    ListNestedBlock,
    SetNestedBlock,
    SingleNestedBlock,
}

impl NodeKind {
    /// The framework schema type, e.g. `ListNestedAttribute`.
    pub fn schema_type(self) -> &'static str {
        match self {
            NodeKind::Bool => "BoolAttribute",
            NodeKind::Float64 => "Float64Attribute",
            NodeKind::Int64 => "Int64Attribute",
            NodeKind::Number => "NumberAttribute",
            NodeKind::String => "StringAttribute",
            NodeKind::List => "ListAttribute",
            NodeKind::Map => "MapAttribute",
            NodeKind::Set => "SetAttribute",
            NodeKind::Object => "ObjectAttribute",
            NodeKind::SingleNested => "SingleNestedAttribute",
            NodeKind::ListNested => "ListNestedAttribute",
            NodeKind::SetNested => "SetNestedAttribute",
            NodeKind::MapNested => "MapNestedAttribute",
            NodeKind::ListNestedBlock => "ListNestedBlock",
            NodeKind::SetNestedBlock => "SetNestedBlock",
            NodeKind::SingleNestedBlock => "SingleNestedBlock",
        }
    }

    /// The type name used by `validator.<T>` and `planmodifier.<T>`.
    pub fn validator_type(self) -> &'static str {
        match self {
            NodeKind::Bool => "Bool",
            NodeKind::Float64 => "Float64",
            NodeKind::Int64 => "Int64",
            NodeKind::Number => "Number",
            NodeKind::String => "String",
            NodeKind::List | NodeKind::ListNested | NodeKind::ListNestedBlock => "List",
            NodeKind::Map | NodeKind::MapNested => "Map",
            NodeKind::Set | NodeKind::SetNested | NodeKind::SetNestedBlock => "Set",
            NodeKind::Object | NodeKind::SingleNested | NodeKind::SingleNestedBlock => "Object",
        }
    }

    pub fn is_block(self) -> bool {
        matches!(
            self,
            NodeKind::ListNestedBlock | NodeKind::SetNestedBlock | NodeKind::SingleNestedBlock
        )
    }
}

/// One assembled attribute or block.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Bool(ScalarAttribute),
    Float64(ScalarAttribute),
    Int64(ScalarAttribute),
    Number(ScalarAttribute),
    String(ScalarAttribute),
    List(CollectionAttribute),
    Map(CollectionAttribute),
    Set(CollectionAttribute),
    Object(ObjectAttribute),
    SingleNested(SingleNestedAttribute),
    ListNested(NestedCollectionAttribute),
    SetNested(NestedCollectionAttribute),
    MapNested(NestedCollectionAttribute),
    ListNestedBlock(NestedCollectionBlock),
    SetNestedBlock(NestedCollectionBlock),
    SingleNestedBlock(SingleNestedBlock),
}

/// A scalar, collection, or nested view of a node with its kind parameter.
enum Shape<'a> {
    Scalar(ScalarKind, &'a ScalarAttribute),
    Collection(CollectionKind, &'a CollectionAttribute),
    Object(&'a ObjectAttribute),
    SingleNested(&'a SingleNestedAttribute),
    NestedCollection(CollectionKind, &'a NestedCollectionAttribute),
    NestedCollectionBlock(CollectionKind, &'a NestedCollectionBlock),
    SingleNestedBlock(&'a SingleNestedBlock),
}

impl Node {
    fn shape(&self) -> Shape<'_> {
        match self {
            Node::Bool(a) => Shape::Scalar(ScalarKind::Bool, a),
            Node::Float64(a) => Shape::Scalar(ScalarKind::Float64, a),
            Node::Int64(a) => Shape::Scalar(ScalarKind::Int64, a),
            Node::Number(a) => Shape::Scalar(ScalarKind::Number, a),
            Node::String(a) => Shape::Scalar(ScalarKind::String, a),
            Node::List(a) => Shape::Collection(CollectionKind::List, a),
            Node::Map(a) => Shape::Collection(CollectionKind::Map, a),
            Node::Set(a) => Shape::Collection(CollectionKind::Set, a),
            Node::Object(a) => Shape::Object(a),
            Node::SingleNested(a) => Shape::SingleNested(a),
            Node::ListNested(a) => Shape::NestedCollection(CollectionKind::List, a),
            Node::SetNested(a) => Shape::NestedCollection(CollectionKind::Set, a),
            Node::MapNested(a) => Shape::NestedCollection(CollectionKind::Map, a),
            Node::ListNestedBlock(b) => Shape::NestedCollectionBlock(CollectionKind::List, b),
            Node::SetNestedBlock(b) => Shape::NestedCollectionBlock(CollectionKind::Set, b),
            Node::SingleNestedBlock(b) => Shape::SingleNestedBlock(b),
        }
    }

    /// The node's discriminator tag.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Bool(_) => NodeKind::Bool,
            Node::Float64(_) => NodeKind::Float64,
            Node::Int64(_) => NodeKind::Int64,
            Node::Number(_) => NodeKind::Number,
            Node::String(_) => NodeKind::String,
            Node::List(_) => NodeKind::List,
            Node::Map(_) => NodeKind::Map,
            Node::Set(_) => NodeKind::Set,
            Node::Object(_) => NodeKind::Object,
            Node::SingleNested(_) => NodeKind::SingleNested,
            Node::ListNested(_) => NodeKind::ListNested,
            Node::SetNested(_) => NodeKind::SetNested,
            Node::MapNested(_) => NodeKind::MapNested,
            Node::ListNestedBlock(_) => NodeKind::ListNestedBlock,
            Node::SetNestedBlock(_) => NodeKind::SetNestedBlock,
            Node::SingleNestedBlock(_) => NodeKind::SingleNestedBlock,
        }
    }

    /// Every import the node's generated code needs, children included.
    pub fn imports(&self) -> ImportSet {
        match self.shape() {
            Shape::Scalar(_, a) => a.imports(),
            Shape::Collection(_, a) => a.imports(),
            Shape::Object(a) => a.imports(),
            Shape::SingleNested(a) => a.imports(),
            Shape::NestedCollection(_, a) => a.imports(),
            Shape::NestedCollectionBlock(_, b) => b.imports(),
            Shape::SingleNestedBlock(b) => b.imports(),
        }
    }

    /// Deep structural equality, children and customizations included.
    pub fn equals(&self, other: &Node) -> bool {
        self == other
    }

    /// The node's entry in the schema expression, e.g.
    /// `"name": schema.StringAttribute{...},`.
    pub fn schema_fragment(&self, name: &str) -> String {
        let kind = self.kind();
        match self.shape() {
            Shape::Scalar(scalar, a) => a.schema_fragment(scalar, name),
            Shape::Collection(collection, a) => a.schema_fragment(kind, collection, name),
            Shape::Object(a) => a.schema_fragment(name),
            Shape::SingleNested(a) => a.schema_fragment(name),
            Shape::NestedCollection(_, a) => a.schema_fragment(kind, name),
            Shape::NestedCollectionBlock(_, b) => b.schema_fragment(kind, name),
            Shape::SingleNestedBlock(b) => b.schema_fragment(name),
        }
    }

    /// The record field for this node.
    pub fn field_descriptor(&self, name: &str) -> FieldDescriptor {
        match self.shape() {
            Shape::Scalar(scalar, a) => a.field_descriptor(scalar, name),
            Shape::Collection(collection, a) => a.field_descriptor(collection, name),
            Shape::Object(a) => a.field_descriptor(name),
            Shape::SingleNested(a) => a.field_descriptor(name),
            Shape::NestedCollection(collection, a) => a.field_descriptor(collection, name),
            Shape::NestedCollectionBlock(collection, b) => b.field_descriptor(collection, name),
            Shape::SingleNestedBlock(b) => b.field_descriptor(name),
        }
    }

    /// Wrapper type/value definitions for this node and its descendants.
    ///
    /// Returns an empty string when nothing needs a wrapper.
    pub fn custom_type_and_value(
        &self,
        name: &str,
        renderer: &dyn Renderer,
    ) -> Result<String, GeneratorError> {
        match self.shape() {
            Shape::Scalar(scalar, a) => a.custom_type_and_value(scalar, name, renderer),
            Shape::Collection(collection, a) => {
                a.custom_type_and_value(collection, name, renderer)
            }
            Shape::Object(a) => a.custom_type_and_value(name, renderer),
            Shape::SingleNested(a) => a.custom_type_and_value(name, renderer),
            Shape::NestedCollection(_, a) => a.custom_type_and_value(name, renderer),
            Shape::NestedCollectionBlock(_, b) => b.custom_type_and_value(name, renderer),
            Shape::SingleNestedBlock(b) => b.custom_type_and_value(name, renderer),
        }
    }

    /// Conversion functions for this node and its linked descendants.
    ///
    /// Returns an empty string when nothing carries an external link.
    pub fn to_from_functions(
        &self,
        name: &str,
        renderer: &dyn Renderer,
    ) -> Result<String, GeneratorError> {
        match self.shape() {
            Shape::Scalar(scalar, a) => a.to_from_functions(scalar, name, renderer),
            Shape::Collection(collection, a) => a.to_from_functions(collection, name, renderer),
            Shape::Object(a) => a.to_from_functions(name, renderer),
            Shape::SingleNested(a) => a.to_from_functions(name, renderer),
            Shape::NestedCollection(_, a) => a.to_from_functions(name, renderer),
            Shape::NestedCollectionBlock(_, b) => b.to_from_functions(name, renderer),
            Shape::SingleNestedBlock(b) => b.to_from_functions(name, renderer),
        }
    }

    /// The type token a parent wrapper uses for this node.
    pub fn attr_type(&self, name: &str) -> String {
        match self.shape() {
            Shape::Scalar(scalar, a) => a.attr_type(scalar, name),
            Shape::Collection(collection, a) => a.attr_type(collection, name),
            Shape::Object(a) => a.attr_type(name),
            Shape::SingleNested(a) => a.attr_type(name),
            Shape::NestedCollection(collection, a) => a.attr_type(collection, name),
            Shape::NestedCollectionBlock(collection, b) => b.attr_type(collection, name),
            Shape::SingleNestedBlock(b) => b.attr_type(name),
        }
    }

    /// The value token a parent wrapper uses for this node.
    pub fn attr_value(&self, name: &str) -> String {
        match self.shape() {
            Shape::Scalar(scalar, a) => a.attr_value(scalar, name),
            Shape::Collection(collection, a) => a.attr_value(collection, name),
            Shape::Object(a) => a.attr_value(name),
            Shape::SingleNested(a) => a.attr_value(name),
            Shape::NestedCollection(collection, a) => a.attr_value(collection),
            Shape::NestedCollectionBlock(collection, b) => b.attr_value(collection),
            Shape::SingleNestedBlock(b) => b.attr_value(name),
        }
    }

    /// How this node converts to and from an external type.
    ///
    /// Single-nested attributes and blocks report
    /// [`GeneratorError::Unimplemented`].
    pub fn conversion_plan(&self) -> Result<ConversionPlan, GeneratorError> {
        match self.shape() {
            Shape::Scalar(scalar, _) => Ok(ConversionPlan::Scalar(ScalarConversion::new(scalar))),
            Shape::Collection(collection, a) => a.conversion_plan(collection),
            Shape::Object(a) => a.conversion_plan(),
            Shape::NestedCollection(collection, a) => {
                a.nested_object.conversion_plan(collection)
            }
            Shape::NestedCollectionBlock(collection, b) => {
                b.nested_object.conversion_plan(collection)
            }
            Shape::SingleNested(_) | Shape::SingleNestedBlock(_) => {
                Err(GeneratorError::Unimplemented {
                    kind: self.kind().to_string(),
                })
            }
        }
    }

    /// Names the generated-to-external operation of [`conversion_plan`](Self::conversion_plan).
    pub fn to(&self) -> Result<String, GeneratorError> {
        self.conversion_plan().map(|plan| plan.to())
    }

    /// Names the external-to-generated operation of [`conversion_plan`](Self::conversion_plan).
    pub fn from(&self) -> Result<String, GeneratorError> {
        self.conversion_plan().map(|plan| plan.from())
    }

    /// The node's own external-type link, if any.
    ///
    /// Nested collections carry their link on the nested object instead.
    pub fn external_type(&self) -> Option<&ExternalType> {
        match self.shape() {
            Shape::Scalar(_, a) => a.common.external_type.as_ref(),
            Shape::Collection(_, a) => a.common.external_type.as_ref(),
            Shape::Object(a) => a.common.external_type.as_ref(),
            Shape::SingleNested(a) => a.common.external_type.as_ref(),
            Shape::SingleNestedBlock(b) => b.common.external_type.as_ref(),
            Shape::NestedCollection(_, a) => a.nested_object.external_type.as_ref(),
            Shape::NestedCollectionBlock(_, b) => b.nested_object.external_type.as_ref(),
        }
    }

    pub fn is_block(&self) -> bool {
        self.kind().is_block()
    }

    /// Whether a type override replaces the generated field or element type.
    pub fn is_overridden(&self) -> bool {
        match self.shape() {
            Shape::Scalar(_, a) => a.common.custom_type.is_some(),
            Shape::Collection(_, a) => a.common.custom_type.is_some(),
            Shape::Object(a) => a.common.custom_type.is_some(),
            Shape::SingleNested(a) => a.common.custom_type.is_some(),
            Shape::SingleNestedBlock(b) => b.common.custom_type.is_some(),
            Shape::NestedCollection(_, a) => {
                a.common.custom_type.is_some() || a.nested_object.custom_type.is_some()
            }
            Shape::NestedCollectionBlock(_, b) => {
                b.common.custom_type.is_some() || b.nested_object.custom_type.is_some()
            }
        }
    }

    /// Every wrapper value this node and its descendants generate, paired
    /// with the dotted path of the node that generates it.
    pub fn generated_wrappers(&self, path: &str) -> Vec<(String, String)> {
        let leaf = path.rsplit('.').next().unwrap_or(path);
        let own = match self.shape() {
            Shape::Scalar(_, a) => a.common.is_wrapped(),
            Shape::Collection(_, a) => a.common.is_wrapped(),
            Shape::Object(a) => a.common.is_wrapped(),
            Shape::SingleNested(a) => a.common.custom_type.is_none(),
            Shape::SingleNestedBlock(b) => b.common.custom_type.is_none(),
            Shape::NestedCollection(_, a) => a.nested_object.custom_type.is_none(),
            Shape::NestedCollectionBlock(_, b) => b.nested_object.custom_type.is_none(),
        };

        let mut wrappers = Vec::new();
        if own {
            wrappers.push((wrapper_value_name(leaf), path.to_string()));
        }
        for children in self.children() {
            for (child_name, child) in children {
                wrappers.extend(child.generated_wrappers(&format!("{}.{}", path, child_name)));
            }
        }
        wrappers
    }

    /// How a linked parent converts this child field.
    ///
    /// An overridden child has no generated conversion and reports
    /// [`GeneratorError::Unimplemented`].
    pub(crate) fn field_conversion(&self, name: &str) -> Result<FieldConversion, GeneratorError> {
        if self.is_overridden() {
            return Err(GeneratorError::Unimplemented {
                kind: self.kind().to_string(),
            });
        }

        let field = self.field_descriptor(name);
        let linked = matches!(
            self.shape(),
            Shape::Scalar(..)
                | Shape::Collection(..)
                | Shape::Object(_)
                | Shape::SingleNested(_)
                | Shape::SingleNestedBlock(_)
        );
        if linked && let Some(external) = self.external_type() {
            return Ok(FieldConversion::Delegate {
                field: field.name,
                value_type: field.value_type,
                external: external.clone(),
            });
        }

        match (self.shape(), self.conversion_plan()?) {
            (_, ConversionPlan::Scalar(conversion)) => Ok(FieldConversion::Scalar {
                field: field.name,
                conversion,
            }),
            (Shape::Collection(_, a), ConversionPlan::Collection { collection, .. }) => {
                Ok(FieldConversion::Collection {
                    field: field.name,
                    collection,
                    element_type: a.element_type.type_expr(),
                })
            }
            (Shape::Object(a), ConversionPlan::Object { .. }) => Ok(FieldConversion::Object {
                field: field.name,
                members: a.object_members()?,
                attr_types: attr_types_map(&a.attribute_types),
            }),
            (Shape::NestedCollection(_, a), ConversionPlan::Nested { collection, external }) => {
                Ok(FieldConversion::NestedCollection {
                    field: field.name,
                    collection,
                    value_type: a.nested_object.element_value(name),
                    external,
                })
            }
            (
                Shape::NestedCollectionBlock(_, b),
                ConversionPlan::Nested {
                    collection,
                    external,
                },
            ) => Ok(FieldConversion::NestedCollection {
                field: field.name,
                collection,
                value_type: b.nested_object.element_value(name),
                external,
            }),
            _ => Err(GeneratorError::Unimplemented {
                kind: self.kind().to_string(),
            }),
        }
    }

    /// The value a linked parent stores for this child when it cannot convert it.
    pub(crate) fn null_value(&self, name: &str) -> String {
        let field = self.field_descriptor(name);
        if field.value_type == wrapper_value_name(name) {
            format!("New{}Null()", field.value_type)
        } else {
            format!("{}{{}}", field.value_type)
        }
    }

    /// Child maps of nested kinds: attributes first, then blocks.
    pub fn children(&self) -> Vec<&NodeMap> {
        match self {
            Node::SingleNested(a) => vec![&a.attributes],
            Node::ListNested(a) | Node::SetNested(a) | Node::MapNested(a) => {
                vec![&a.nested_object.attributes]
            }
            Node::ListNestedBlock(b) | Node::SetNestedBlock(b) => {
                vec![&b.nested_object.attributes, &b.nested_object.blocks]
            }
            Node::SingleNestedBlock(b) => vec![&b.attributes, &b.blocks],
            _ => Vec::new(),
        }
    }

    /// A copy of this node with every child map emptied.
    pub fn without_children(&self) -> Node {
        let mut node = self.clone();
        match &mut node {
            Node::SingleNested(a) => a.attributes.clear(),
            Node::ListNested(a) | Node::SetNested(a) | Node::MapNested(a) => {
                a.nested_object.attributes.clear()
            }
            Node::ListNestedBlock(b) | Node::SetNestedBlock(b) => {
                b.nested_object.attributes.clear();
                b.nested_object.blocks.clear();
            }
            Node::SingleNestedBlock(b) => {
                b.attributes.clear();
                b.blocks.clear();
            }
            _ => {}
        }
        node
    }
}

/// Attributes and blocks of one object level, merged and ordered by name.
pub(crate) fn ordered_children<'a>(
    attributes: &'a NodeMap,
    blocks: &'a NodeMap,
) -> Vec<(&'a String, &'a Node)> {
    let mut children: Vec<_> = attributes.iter().chain(blocks.iter()).collect();
    children.sort_by(|a, b| a.0.cmp(b.0));
    children
}
