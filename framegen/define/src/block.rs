//! Block definitions.
//!
//! Blocks nest attributes and further blocks. Unlike attributes they carry no
//! required/optional/computed behavior and cannot be sensitive.

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::custom::{AssociatedExternalType, CustomType, PlanModifier, Validator};

/// The object nested inside a `list_nested` or `set_nested` block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NestedBlockObject {
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
}

/// Payload of the `list_nested` and `set_nested` block kinds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NestedCollectionBlock {
    pub nested_object: NestedBlockObject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
}

/// Payload of the `single_nested` block kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SingleNestedBlock {
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
}

/// A named schema block with exactly one kind payload populated.
///
/// ## Examples
///
/// ```
/// use framegen_define::Block;
///
/// let json = r#"{
///     "name": "timeouts",
///     "single_nested": {
///         "attributes": [{"name": "create", "string": {"computed_optional_required": "optional"}}]
///     }
/// }"#;
/// let block: Block = serde_json::from_str(json).unwrap();
///
/// assert_eq!(block.kinds(), vec!["single_nested"]);
/// assert_eq!(block.single_nested.unwrap().attributes[0].name, "create");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Block {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_nested: Option<NestedCollectionBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_nested: Option<NestedCollectionBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_nested: Option<SingleNestedBlock>,
}

impl Block {
    /// Creates a block with only a name; callers fill in one payload.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Names of every populated kind payload, in declaration order.
    pub fn kinds(&self) -> Vec<&'static str> {
        let mut kinds = Vec::new();
        if self.list_nested.is_some() {
            kinds.push("list_nested");
        }
        if self.set_nested.is_some() {
            kinds.push("set_nested");
        }
        if self.single_nested.is_some() {
            kinds.push("single_nested");
        }
        kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_blocks_recursively() {
        let json = r#"{
            "name": "outer",
            "list_nested": {
                "nested_object": {
                    "blocks": [
                        {"name": "inner", "set_nested": {"nested_object": {}}}
                    ]
                }
            }
        }"#;
        let block: Block = serde_json::from_str(json).unwrap();
        let outer = block.list_nested.expect("list_nested payload");

        assert_eq!(outer.nested_object.blocks.len(), 1);
        assert_eq!(outer.nested_object.blocks[0].kinds(), vec!["set_nested"]);
    }

    #[test]
    fn block_kinds_ignore_attribute_only_kinds() {
        // A block payload named after an attribute kind is simply unknown to serde.
        let block: Block = serde_json::from_str(r#"{"name": "b", "bool": {}}"#).unwrap();
        assert!(block.kinds().is_empty());
    }
}
