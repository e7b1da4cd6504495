//! Bool, float64, int64, number, and string attributes.

use super::common::{AttributeCommon, Clauses};
use crate::conversion::{ScalarConversion, ScalarKind};
use crate::customization::AttributeDefault;
use crate::errors::GeneratorError;
use crate::field::{FieldDescriptor, wrapper_type_name, wrapper_value_name};
use crate::imports::{ImportSet, TYPES_IMPORT, wrapper_imports};
use crate::naming::to_pascal_case;
use crate::render::{Fragment, Renderer};

/// A scalar attribute. The scalar kind comes from the enclosing node variant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScalarAttribute {
    pub common: AttributeCommon,
    pub default: Option<AttributeDefault>,
}

impl ScalarAttribute {
    pub fn imports(&self) -> ImportSet {
        let mut imports = self.common.imports();
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

    fn custom_type_expr(&self, name: &str) -> Option<String> {
        match (&self.common.custom_type, &self.common.external_type) {
            (Some(custom), _) => Some(custom.type_expr.clone()),
            (None, Some(_)) => Some(format!("{}{{}}", wrapper_type_name(name))),
            (None, None) => None,
        }
    }

    pub fn schema_fragment(&self, kind: ScalarKind, name: &str) -> String {
        let schema_type = format!("{}Attribute", kind.type_name());
        Clauses::open(name, &schema_type)
            .custom_type(self.custom_type_expr(name))
            .behavior(self.common.behavior)
            .sensitive(self.common.sensitive)
            .description(self.common.description.as_deref())
            .deprecation(self.common.deprecation_message.as_deref())
            .validators(kind.type_name(), &self.common.validators)
            .plan_modifiers(kind.type_name(), &self.common.plan_modifiers)
            .default(self.default.as_ref())
            .finish()
    }

    pub fn field_descriptor(&self, kind: ScalarKind, name: &str) -> FieldDescriptor {
        FieldDescriptor::for_linked(
            name,
            self.common.custom_type.as_ref(),
            self.common.external_type.as_ref(),
            kind.value_type(),
        )
    }

    pub fn custom_type_and_value(
        &self,
        kind: ScalarKind,
        name: &str,
        renderer: &dyn Renderer,
    ) -> Result<String, GeneratorError> {
        if !self.common.is_wrapped() {
            return Ok(String::new());
        }
        let fragment = Fragment::PrimitiveWrapper {
            name: to_pascal_case(name),
            base: kind.type_name().to_string(),
        };
        Ok(renderer.render_string(&fragment)?)
    }

    pub fn to_from_functions(
        &self,
        kind: ScalarKind,
        name: &str,
        renderer: &dyn Renderer,
    ) -> Result<String, GeneratorError> {
        let Some(external) = self.common.wrapped_external() else {
            return Ok(String::new());
        };
        let fragment = Fragment::ScalarToFrom {
            name: to_pascal_case(name),
            external: external.clone(),
            conversion: ScalarConversion::new(kind),
        };
        Ok(renderer.render_string(&fragment)?)
    }

    pub fn attr_type(&self, kind: ScalarKind, name: &str) -> String {
        match (&self.common.custom_type, &self.common.external_type) {
            (Some(custom), _) => custom.type_expr.clone(),
            (None, Some(_)) => format!("{}{{}}", wrapper_type_name(name)),
            (None, None) => format!("basetypes.{}Type{{}}", kind.type_name()),
        }
    }

    pub fn attr_value(&self, kind: ScalarKind, name: &str) -> String {
        match (&self.common.custom_type, &self.common.external_type) {
            (Some(custom), _) => custom.value_type.clone(),
            (None, Some(_)) => wrapper_value_name(name),
            (None, None) => format!("basetypes.{}Value", kind.type_name()),
        }
    }
}
