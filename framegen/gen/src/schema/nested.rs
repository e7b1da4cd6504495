//! Nested attributes and the object-level helpers shared with nested blocks.
//!
//! Every nested kind owns a generated object wrapper named after the node
//! (`<Name>Type` / `<Name>Value`), whose fields are the node's children. When
//! the nested object is linked to an external type, the wrapper value also
//! gets a `To<External>` / `From<External>` pair built from each child's
//! field conversion.

use tracing::debug;

use super::common::{AttributeCommon, Clauses, customization_imports};
use super::{NodeKind, NodeMap, ordered_children};
use crate::conversion::{CollectionKind, ConversionPlan};
use crate::customization::{AttributeDefault, CodeSnippet, ExternalType, TypeOverride};
use crate::errors::GeneratorError;
use crate::field::{FieldDescriptor, wrapper_type_name, wrapper_value_name};
use crate::imports::{ImportSet, TYPES_IMPORT, wrapper_imports};
use crate::naming::to_pascal_case;
use crate::render::{FieldConversion, Fragment, Renderer, WrapperAttribute};

/// A `single_nested` attribute.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SingleNestedAttribute {
    pub common: AttributeCommon,
    pub attributes: NodeMap,
    pub default: Option<AttributeDefault>,
}

/// The object nested inside list/set/map-nested attributes and blocks.
///
/// `blocks` is always empty for attributes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NestedObject {
    pub attributes: NodeMap,
    pub blocks: NodeMap,
    pub custom_type: Option<TypeOverride>,
    pub external_type: Option<ExternalType>,
    pub validators: Vec<CodeSnippet>,
    pub plan_modifiers: Vec<CodeSnippet>,
}

/// A `list_nested`, `set_nested`, or `map_nested` attribute.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NestedCollectionAttribute {
    pub common: AttributeCommon,
    pub nested_object: NestedObject,
    pub default: Option<AttributeDefault>,
}

/// `Attributes: map[string]schema.Attribute{...},` over every child.
pub(crate) fn attributes_clause(attributes: &NodeMap) -> String {
    let mut out = String::from("Attributes: map[string]schema.Attribute{\n");
    for (name, node) in attributes {
        out.push_str(&node.schema_fragment(name));
    }
    out.push_str("},\n");
    out
}

/// `Blocks: map[string]schema.Block{...},`, omitted when there are none.
pub(crate) fn blocks_clause(blocks: &NodeMap) -> String {
    if blocks.is_empty() {
        return String::new();
    }
    let mut out = String::from("Blocks: map[string]schema.Block{\n");
    for (name, node) in blocks {
        out.push_str(&node.schema_fragment(name));
    }
    out.push_str("},\n");
    out
}

pub(crate) fn children_imports(attributes: &NodeMap, blocks: &NodeMap) -> ImportSet {
    let mut imports = ImportSet::new();
    for (_, child) in ordered_children(attributes, blocks) {
        imports.merge(&child.imports());
    }
    imports
}

/// The `CustomType` expression of a generated object wrapper.
///
/// ## Examples
///
/// ```
/// use framegen_gen::schema::nested::generated_object_type;
///
/// assert_eq!(
///     generated_object_type("configuration"),
///     "ConfigurationType{\nObjectType: types.ObjectType{\nAttrTypes: ConfigurationValue{}.AttributeTypes(ctx),\n},\n}"
/// );
/// ```
pub fn generated_object_type(name: &str) -> String {
    format!(
        "{}{{\nObjectType: types.ObjectType{{\nAttrTypes: {}{{}}.AttributeTypes(ctx),\n}},\n}}",
        wrapper_type_name(name),
        wrapper_value_name(name)
    )
}

/// The attr-type token of a generated object wrapper.
pub(crate) fn generated_object_attr_type(name: &str) -> String {
    format!(
        "{}{{\nObjectType: basetypes.ObjectType{{\nAttrTypes: {}{{}}.AttributeTypes(ctx),\n}},\n}}",
        wrapper_type_name(name),
        wrapper_value_name(name)
    )
}

/// Renders the object wrapper for `name`, then every descendant's wrappers.
///
/// An overridden level renders no wrapper of its own; its children still
/// need theirs because the schema names them.
pub(crate) fn object_wrapper(
    name: &str,
    overridden: bool,
    attributes: &NodeMap,
    blocks: &NodeMap,
    renderer: &dyn Renderer,
) -> Result<String, GeneratorError> {
    let children = ordered_children(attributes, blocks);
    let mut out = String::new();

    if !overridden {
        let wrapper_attributes = children
            .iter()
            .map(|(child_name, child)| WrapperAttribute {
                field: to_pascal_case(child_name),
                wire_key: (*child_name).clone(),
                value_type: child.attr_value(child_name),
                attr_type: child.attr_type(child_name),
            })
            .collect();
        out = renderer.render_string(&Fragment::ObjectWrapper {
            name: to_pascal_case(name),
            attributes: wrapper_attributes,
        })?;
    }
    for (child_name, child) in children {
        let code = child.custom_type_and_value(child_name, renderer)?;
        if !code.is_empty() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&code);
        }
    }
    Ok(out)
}

/// Renders the conversion pair of a linked object level, then recurses.
///
/// Children whose conversion is unimplemented are set to their null value
/// instead of failing their siblings; any other child error aborts.
pub(crate) fn object_to_from(
    name: &str,
    external: Option<&ExternalType>,
    attributes: &NodeMap,
    blocks: &NodeMap,
    renderer: &dyn Renderer,
) -> Result<String, GeneratorError> {
    let children = ordered_children(attributes, blocks);
    let mut out = String::new();

    if let Some(external) = external {
        let mut fields = Vec::with_capacity(children.len());
        for (child_name, child) in &children {
            match child.field_conversion(child_name) {
                Ok(conversion) => fields.push(conversion),
                Err(err) if err.is_unimplemented() => {
                    debug!(
                        parent = name,
                        child = child_name.as_str(),
                        kind = %child.kind(),
                        "Conversion not implemented for child; it converts to null"
                    );
                    fields.push(FieldConversion::Null {
                        field: to_pascal_case(child_name),
                        null_expr: child.null_value(child_name),
                    });
                }
                Err(err) => return Err(err),
            }
        }
        out.push_str(&renderer.render_string(&Fragment::NestedToFrom {
            name: to_pascal_case(name),
            external: external.clone(),
            fields,
        })?);
    }

    for (child_name, child) in children {
        let code = child.to_from_functions(child_name, renderer)?;
        if !code.is_empty() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&code);
        }
    }
    Ok(out)
}

impl SingleNestedAttribute {
    pub fn imports(&self) -> ImportSet {
        let mut imports = self.common.imports();
        if self.common.custom_type.is_none() {
            imports.merge(&wrapper_imports());
        }
        imports.merge(&children_imports(&self.attributes, &NodeMap::new()));
        if let Some(default) = &self.default {
            imports.merge(&default.imports());
        }
        imports
    }

    pub fn schema_fragment(&self, name: &str) -> String {
        let custom_type = match &self.common.custom_type {
            Some(custom) => custom.type_expr.clone(),
            None => generated_object_type(name),
        };
        Clauses::open(name, "SingleNestedAttribute")
            .custom_type(Some(custom_type))
            .raw(&attributes_clause(&self.attributes))
            .behavior(self.common.behavior)
            .sensitive(self.common.sensitive)
            .description(self.common.description.as_deref())
            .deprecation(self.common.deprecation_message.as_deref())
            .validators("Object", &self.common.validators)
            .plan_modifiers("Object", &self.common.plan_modifiers)
            .default(self.default.as_ref())
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
            &NodeMap::new(),
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
            &NodeMap::new(),
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

impl NestedObject {
    pub fn imports(&self) -> ImportSet {
        let mut imports = customization_imports(
            self.custom_type.as_ref(),
            self.external_type.as_ref(),
            &self.validators,
            &self.plan_modifiers,
        );
        if self.custom_type.is_none() {
            imports.merge(&wrapper_imports());
        }
        imports.merge(&children_imports(&self.attributes, &self.blocks));
        imports
    }

    /// The `NestedObject: schema.<schema_type>{...},` clause.
    pub(crate) fn schema_clause(&self, schema_type: &str, name: &str) -> String {
        let custom_type = match &self.custom_type {
            Some(custom) => custom.type_expr.clone(),
            None => generated_object_type(name),
        };
        Clauses::open_field("NestedObject", schema_type)
            .raw(&attributes_clause(&self.attributes))
            .raw(&blocks_clause(&self.blocks))
            .custom_type(Some(custom_type))
            .validators("Object", &self.validators)
            .plan_modifiers("Object", &self.plan_modifiers)
            .finish()
    }

    /// The external link, unless an override replaces the generated object.
    pub(crate) fn wrapped_external(&self) -> Option<&ExternalType> {
        match self.custom_type {
            Some(_) => None,
            None => self.external_type.as_ref(),
        }
    }

    /// Value type of one collection element.
    pub(crate) fn element_value(&self, name: &str) -> String {
        match &self.custom_type {
            Some(custom) => custom.value_type.clone(),
            None => wrapper_value_name(name),
        }
    }

    /// `ElemType` expression of the enclosing collection.
    pub(crate) fn element_type(&self, name: &str) -> String {
        match &self.custom_type {
            Some(custom) => custom.type_expr.clone(),
            None => format!("{}{{}}.Type(ctx)", wrapper_value_name(name)),
        }
    }

    /// Elements convert through the object's own functions, so the object
    /// must be linked.
    pub(crate) fn conversion_plan(
        &self,
        collection: CollectionKind,
    ) -> Result<ConversionPlan, GeneratorError> {
        match &self.external_type {
            Some(external) => Ok(ConversionPlan::Nested {
                collection,
                external: external.clone(),
            }),
            None => Err(GeneratorError::UnresolvedElementConversion {
                element_kind: "object".to_string(),
            }),
        }
    }

    pub(crate) fn custom_type_and_value(
        &self,
        name: &str,
        renderer: &dyn Renderer,
    ) -> Result<String, GeneratorError> {
        object_wrapper(
            name,
            self.custom_type.is_some(),
            &self.attributes,
            &self.blocks,
            renderer,
        )
    }

    pub(crate) fn to_from_functions(
        &self,
        name: &str,
        renderer: &dyn Renderer,
    ) -> Result<String, GeneratorError> {
        object_to_from(
            name,
            self.wrapped_external(),
            &self.attributes,
            &self.blocks,
            renderer,
        )
    }
}

impl NestedCollectionAttribute {
    pub fn imports(&self) -> ImportSet {
        let mut imports = self.common.imports();
        imports.merge(&self.nested_object.imports());
        if self.common.custom_type.is_none() {
            imports.add(TYPES_IMPORT);
        }
        if let Some(default) = &self.default {
            imports.merge(&default.imports());
        }
        imports
    }

    pub fn schema_fragment(&self, kind: NodeKind, name: &str) -> String {
        Clauses::open(name, kind.schema_type())
            .custom_type(self.common.custom_type.as_ref().map(|c| c.type_expr.clone()))
            .raw(&self.nested_object.schema_clause("NestedAttributeObject", name))
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
