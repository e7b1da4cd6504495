//! Record field descriptors.

use crate::customization::{ExternalType, TypeOverride};
use crate::naming::to_pascal_case;

/// One field of a generated record struct.
///
/// ## Examples
///
/// ```
/// use framegen_gen::field::FieldDescriptor;
///
/// let field = FieldDescriptor::resolve("bool_attribute", None, false, "types.Bool".into());
/// assert_eq!(field.name, "BoolAttribute");
/// assert_eq!(field.to_go_field(), "BoolAttribute types.Bool `tfsdk:\"bool_attribute\"`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Exported Go field name.
    pub name: String,
    /// Key used in state and configuration.
    pub wire_key: String,
    /// Go type of the field.
    pub value_type: String,
}

impl FieldDescriptor {
    /// Resolves the value type in priority order: override, then the
    /// generated wrapper value when `wrapped`, then `default`.
    pub fn resolve(
        wire_key: &str,
        custom_type: Option<&TypeOverride>,
        wrapped: bool,
        default: String,
    ) -> Self {
        let name = to_pascal_case(wire_key);
        let value_type = match custom_type {
            Some(custom) => custom.value_type.clone(),
            None if wrapped => wrapper_value_name(wire_key),
            None => default,
        };
        Self {
            name,
            wire_key: wire_key.to_string(),
            value_type,
        }
    }

    /// Field descriptor for a node that may carry an external link.
    pub fn for_linked(
        wire_key: &str,
        custom_type: Option<&TypeOverride>,
        external: Option<&ExternalType>,
        default: String,
    ) -> Self {
        Self::resolve(wire_key, custom_type, external.is_some(), default)
    }

    /// The struct field line, tagged with its wire key.
    pub fn to_go_field(&self) -> String {
        format!("{} {} `tfsdk:\"{}\"`", self.name, self.value_type, self.wire_key)
    }
}

/// Name of the generated wrapper type for `name`, e.g. `ConfigurationType`.
pub fn wrapper_type_name(name: &str) -> String {
    format!("{}Type", to_pascal_case(name))
}

/// Name of the generated wrapper value for `name`, e.g. `ConfigurationValue`.
pub fn wrapper_value_name(name: &str) -> String {
    format!("{}Value", to_pascal_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_beats_external_link() {
        let custom = TypeOverride::new("my.TagsType{}", "my.TagsValue");
        let external = ExternalType::new("*apisdk.Tags");

        let field = FieldDescriptor::for_linked(
            "tags",
            Some(&custom),
            Some(&external),
            "types.List".to_string(),
        );

        assert_eq!(field.value_type, "my.TagsValue");
    }

    #[test]
    fn external_link_selects_wrapper_value() {
        let external = ExternalType::new("*apisdk.Tags");
        let field =
            FieldDescriptor::for_linked("tags", None, Some(&external), "types.List".to_string());

        assert_eq!(field.value_type, "TagsValue");
    }

    #[test]
    fn wrapper_names_follow_wire_key() {
        assert_eq!(wrapper_type_name("list_nested_two"), "ListNestedTwoType");
        assert_eq!(wrapper_value_name("list_nested_two"), "ListNestedTwoValue");
    }
}
