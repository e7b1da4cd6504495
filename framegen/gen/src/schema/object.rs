//! Object attributes with typed members.

use std::collections::BTreeMap;

use super::common::{AttributeCommon, Clauses};
use crate::conversion::ConversionPlan;
use crate::customization::AttributeDefault;
use crate::element::{ElementType, attr_types_map};
use crate::errors::GeneratorError;
use crate::field::{FieldDescriptor, wrapper_type_name, wrapper_value_name};
use crate::imports::{ATTR_IMPORT, ImportSet, TYPES_IMPORT, wrapper_imports};
use crate::naming::to_pascal_case;
use crate::render::{Fragment, ObjectMember, Renderer};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectAttribute {
    pub common: AttributeCommon,
    pub attribute_types: BTreeMap<String, ElementType>,
    pub default: Option<AttributeDefault>,
}

impl ObjectAttribute {
    pub fn imports(&self) -> ImportSet {
        let mut imports = self.common.imports();
        imports.add(ATTR_IMPORT);
        for member in self.attribute_types.values() {
            imports.merge(&member.imports());
        }
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

    fn base_type(&self) -> String {
        format!(
            "basetypes.ObjectType{{\nAttrTypes: {},\n}}",
            attr_types_map(&self.attribute_types)
        )
    }

    fn wrapper_type(&self, name: &str) -> String {
        format!(
            "{}{{\nObjectType: {},\n}}",
            wrapper_type_name(name),
            self.base_type()
        )
    }

    pub fn schema_fragment(&self, name: &str) -> String {
        let custom_type = match (&self.common.custom_type, &self.common.external_type) {
            (Some(custom), _) => Some(custom.type_expr.clone()),
            (None, Some(_)) => Some(self.wrapper_type(name)),
            (None, None) => None,
        };
        Clauses::open(name, "ObjectAttribute")
            .custom_type(custom_type)
            .raw(&format!(
                "AttributeTypes: {},\n",
                attr_types_map(&self.attribute_types)
            ))
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
        FieldDescriptor::for_linked(
            name,
            self.common.custom_type.as_ref(),
            self.common.external_type.as_ref(),
            "types.Object".to_string(),
        )
    }

    pub fn custom_type_and_value(
        &self,
        name: &str,
        renderer: &dyn Renderer,
    ) -> Result<String, GeneratorError> {
        if !self.common.is_wrapped() {
            return Ok(String::new());
        }
        let fragment = Fragment::PrimitiveWrapper {
            name: to_pascal_case(name),
            base: "Object".to_string(),
        };
        Ok(renderer.render_string(&fragment)?)
    }

    pub fn to_from_functions(
        &self,
        name: &str,
        renderer: &dyn Renderer,
    ) -> Result<String, GeneratorError> {
        let Some(external) = self.common.wrapped_external() else {
            return Ok(String::new());
        };
        let fragment = Fragment::ObjectToFrom {
            name: to_pascal_case(name),
            external: external.clone(),
            members: self.object_members()?,
            attr_types: attr_types_map(&self.attribute_types),
        };
        Ok(renderer.render_string(&fragment)?)
    }

    pub fn attr_type(&self, name: &str) -> String {
        match (&self.common.custom_type, &self.common.external_type) {
            (Some(custom), _) => custom.type_expr.clone(),
            (None, Some(_)) => self.wrapper_type(name),
            (None, None) => self.base_type(),
        }
    }

    pub fn attr_value(&self, name: &str) -> String {
        match (&self.common.custom_type, &self.common.external_type) {
            (Some(custom), _) => custom.value_type.clone(),
            (None, Some(_)) => wrapper_value_name(name),
            (None, None) => "basetypes.ObjectValue".to_string(),
        }
    }

    /// Member name to member conversion.
    ///
    /// The first member without a conversion fails the whole object with
    /// that member's own error.
    pub fn conversion_plan(&self) -> Result<ConversionPlan, GeneratorError> {
        let mut members = BTreeMap::new();
        for (name, member) in &self.attribute_types {
            members.insert(name.clone(), ConversionPlan::Scalar(member.conversion()?));
        }
        Ok(ConversionPlan::Object { members })
    }

    /// Members in name order, ready for a conversion template.
    pub(crate) fn object_members(&self) -> Result<Vec<ObjectMember>, GeneratorError> {
        self.attribute_types
            .iter()
            .map(|(name, member)| {
                Ok(ObjectMember {
                    field: to_pascal_case(name),
                    wire_key: name.clone(),
                    conversion: member.conversion()?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::{CollectionKind, ScalarKind};

    /// Helper to build an object attribute from `(name, element)` pairs.
    fn object(members: Vec<(&str, ElementType)>) -> ObjectAttribute {
        ObjectAttribute {
            attribute_types: members
                .into_iter()
                .map(|(name, element)| (name.to_string(), element))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn every_scalar_member_resolves() {
        let attribute = object(vec![
            ("enabled", ElementType::scalar(ScalarKind::Bool)),
            ("name", ElementType::scalar(ScalarKind::String)),
        ]);

        match attribute.conversion_plan().unwrap() {
            ConversionPlan::Object { members } => {
                assert_eq!(members.keys().collect::<Vec<_>>(), vec!["enabled", "name"]);
            }
            other => panic!("expected object plan, got {:?}", other),
        }
    }

    #[test]
    fn failing_member_error_propagates_unchanged() {
        let attribute = object(vec![
            ("enabled", ElementType::scalar(ScalarKind::Bool)),
            (
                "labels",
                ElementType::collection(CollectionKind::Map, ElementType::scalar(ScalarKind::String)),
            ),
        ]);

        match attribute.conversion_plan() {
            Err(GeneratorError::UnresolvedElementConversion { element_kind }) => {
                assert_eq!(element_kind, "map")
            }
            other => panic!("expected member error, got {:?}", other),
        }
    }

    #[test]
    fn fragment_lists_attribute_types() {
        let fragment = object(vec![("port", ElementType::scalar(ScalarKind::Int64))])
            .schema_fragment("endpoint");

        assert!(
            fragment.contains("AttributeTypes: map[string]attr.Type{\n\"port\": types.Int64Type,\n},"),
            "{}",
            fragment
        );
    }
}
