//! Attribute definitions.
//!
//! An [`Attribute`] is a named entry with exactly one kind payload populated.
//! The payload types mirror the framework's attribute kinds; nested kinds hold
//! further attributes, so the structure is recursive.

use serde::{Deserialize, Serialize};

use crate::custom::{
    AssociatedExternalType, ComputedOptionalRequired, CustomDefault, CustomType, DefaultValue,
    PlanModifier, Validator,
};
use crate::element::{ElementType, ObjectAttributeType};

/// Payload shared by the scalar kinds; `T` is the type of a static default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScalarAttribute<T> {
    pub computed_optional_required: ComputedOptionalRequired,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue<T>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
}

pub type BoolAttribute = ScalarAttribute<bool>;
pub type Float64Attribute = ScalarAttribute<f64>;
pub type Int64Attribute = ScalarAttribute<i64>;
pub type NumberAttribute = ScalarAttribute<f64>;
pub type StringAttribute = ScalarAttribute<String>;

/// Payload of the `list`, `map`, and `set` kinds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CollectionAttribute {
    pub computed_optional_required: ComputedOptionalRequired,
    pub element_type: ElementType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<CustomDefault>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
}

/// Payload of the `object` kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ObjectAttribute {
    pub computed_optional_required: ComputedOptionalRequired,
    #[serde(default)]
    pub attribute_types: Vec<ObjectAttributeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<CustomDefault>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
}

/// Payload of the `single_nested` attribute kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SingleNestedAttribute {
    pub computed_optional_required: ComputedOptionalRequired,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<CustomDefault>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
}

/// The object nested inside a `list_nested`, `set_nested`, or `map_nested`
/// attribute. The external-type link of a nested collection lives here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NestedAttributeObject {
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
}

/// Payload of the `list_nested`, `set_nested`, and `map_nested` attribute kinds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NestedCollectionAttribute {
    pub computed_optional_required: ComputedOptionalRequired,
    pub nested_object: NestedAttributeObject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<CustomDefault>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
}

/// A named schema attribute.
///
/// Exactly one kind payload must be populated; the generator rejects any
/// other cardinality when it assembles the schema tree.
///
/// ## Examples
///
/// ```
/// use framegen_define::{Attribute, ComputedOptionalRequired};
///
/// let json = r#"{"name": "enabled", "bool": {"computed_optional_required": "computed"}}"#;
/// let attribute: Attribute = serde_json::from_str(json).unwrap();
///
/// assert_eq!(attribute.name, "enabled");
/// assert_eq!(attribute.kinds(), vec!["bool"]);
/// assert_eq!(
///     attribute.bool.unwrap().computed_optional_required,
///     ComputedOptionalRequired::Computed
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bool: Option<BoolAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub float64: Option<Float64Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub int64: Option<Int64Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<NumberAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string: Option<StringAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<CollectionAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<CollectionAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<CollectionAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<ObjectAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_nested: Option<SingleNestedAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_nested: Option<NestedCollectionAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_nested: Option<NestedCollectionAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_nested: Option<NestedCollectionAttribute>,
}

impl Attribute {
    /// Creates an attribute with only a name; callers fill in one payload.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Names of every populated kind payload, in declaration order.
    pub fn kinds(&self) -> Vec<&'static str> {
        let mut kinds = Vec::new();
        if self.bool.is_some() {
            kinds.push("bool");
        }
        if self.float64.is_some() {
            kinds.push("float64");
        }
        if self.int64.is_some() {
            kinds.push("int64");
        }
        if self.number.is_some() {
            kinds.push("number");
        }
        if self.string.is_some() {
            kinds.push("string");
        }
        if self.list.is_some() {
            kinds.push("list");
        }
        if self.map.is_some() {
            kinds.push("map");
        }
        if self.set.is_some() {
            kinds.push("set");
        }
        if self.object.is_some() {
            kinds.push("object");
        }
        if self.single_nested.is_some() {
            kinds.push("single_nested");
        }
        if self.list_nested.is_some() {
            kinds.push("list_nested");
        }
        if self.set_nested.is_some() {
            kinds.push("set_nested");
        }
        if self.map_nested.is_some() {
            kinds.push("map_nested");
        }
        kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::custom::DefaultValue;

    #[test]
    fn parses_list_nested_attribute() {
        let json = r#"{
            "name": "rules",
            "list_nested": {
                "computed_optional_required": "optional",
                "nested_object": {
                    "attributes": [
                        {"name": "port", "int64": {"computed_optional_required": "required"}}
                    ],
                    "associated_external_type": {"type": "*apisdk.Rule"}
                }
            }
        }"#;
        let attribute: Attribute = serde_json::from_str(json).unwrap();
        let nested = attribute.list_nested.expect("list_nested payload");

        assert_eq!(nested.nested_object.attributes.len(), 1);
        assert_eq!(nested.nested_object.attributes[0].kinds(), vec!["int64"]);
        assert_eq!(
            nested
                .nested_object
                .associated_external_type
                .map(|ext| ext.type_),
            Some("*apisdk.Rule".to_string())
        );
    }

    #[test]
    fn parses_static_string_default() {
        let json = r#"{
            "name": "region",
            "string": {
                "computed_optional_required": "computed_optional",
                "default": {"static": "us-east-1"}
            }
        }"#;
        let attribute: Attribute = serde_json::from_str(json).unwrap();
        let string = attribute.string.expect("string payload");

        assert_eq!(
            string.default,
            Some(DefaultValue::Static("us-east-1".to_string()))
        );
    }

    #[test]
    fn missing_payload_parses_but_has_no_kinds() {
        let attribute: Attribute = serde_json::from_str(r#"{"name": "orphan"}"#).unwrap();
        assert!(attribute.kinds().is_empty());
    }

    #[test]
    fn serializes_only_populated_payload() {
        let attribute = Attribute {
            string: Some(StringAttribute::default()),
            ..Attribute::named("name")
        };
        let json = serde_json::to_value(&attribute).unwrap();

        assert!(json.get("string").is_some());
        assert!(json.get("bool").is_none());
    }
}
