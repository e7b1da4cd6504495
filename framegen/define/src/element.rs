//! Element type definitions for collection and object attributes.
//!
//! An [`ElementType`] is a JSON object in which exactly one kind key is
//! populated. Kinds nest: a list element may itself be a list, and an object
//! element lists named [`ObjectAttributeType`] members.

use serde::{Deserialize, Serialize};

use crate::custom::CustomType;

/// A scalar element (`bool`, `float64`, `int64`, `number`, `string`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScalarElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
}

/// A collection element (`list`, `map`, `set`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollectionElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    pub element_type: Box<ElementType>,
}

/// An object element with named members.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ObjectElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default)]
    pub attribute_types: Vec<ObjectAttributeType>,
}

/// A named member of an object attribute or object element.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ObjectAttributeType {
    pub name: String,
    #[serde(flatten)]
    pub element_type: ElementType,
}

/// The type of the elements of a list, map, or set, or of an object member.
///
/// ## Examples
///
/// ```
/// use framegen_define::ElementType;
///
/// let json = r#"{"list": {"element_type": {"string": {}}}}"#;
/// let element: ElementType = serde_json::from_str(json).unwrap();
/// assert_eq!(element.kinds(), vec!["list"]);
/// assert_eq!(element, ElementType::list_of(ElementType::string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bool: Option<ScalarElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub float64: Option<ScalarElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub int64: Option<ScalarElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<ScalarElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string: Option<ScalarElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<CollectionElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<CollectionElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<CollectionElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<ObjectElement>,
}

impl ElementType {
    /// A plain `bool` element.
    pub fn bool() -> Self {
        Self {
            bool: Some(ScalarElement::default()),
            ..Default::default()
        }
    }

    /// A plain `float64` element.
    pub fn float64() -> Self {
        Self {
            float64: Some(ScalarElement::default()),
            ..Default::default()
        }
    }

    /// A plain `int64` element.
    pub fn int64() -> Self {
        Self {
            int64: Some(ScalarElement::default()),
            ..Default::default()
        }
    }

    /// A plain `number` element.
    pub fn number() -> Self {
        Self {
            number: Some(ScalarElement::default()),
            ..Default::default()
        }
    }

    /// A plain `string` element.
    pub fn string() -> Self {
        Self {
            string: Some(ScalarElement::default()),
            ..Default::default()
        }
    }

    /// A `list` element whose own elements are `inner`.
    pub fn list_of(inner: ElementType) -> Self {
        Self {
            list: Some(CollectionElement {
                custom_type: None,
                element_type: Box::new(inner),
            }),
            ..Default::default()
        }
    }

    /// A `map` element whose values are `inner`.
    pub fn map_of(inner: ElementType) -> Self {
        Self {
            map: Some(CollectionElement {
                custom_type: None,
                element_type: Box::new(inner),
            }),
            ..Default::default()
        }
    }

    /// A `set` element whose own elements are `inner`.
    pub fn set_of(inner: ElementType) -> Self {
        Self {
            set: Some(CollectionElement {
                custom_type: None,
                element_type: Box::new(inner),
            }),
            ..Default::default()
        }
    }

    /// An `object` element with the given members.
    pub fn object_of(members: Vec<ObjectAttributeType>) -> Self {
        Self {
            object: Some(ObjectElement {
                custom_type: None,
                attribute_types: members,
            }),
            ..Default::default()
        }
    }

    /// Names of every populated kind key, in declaration order.
    ///
    /// A well-formed element type returns exactly one name.
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
        kinds
    }
}

impl ObjectAttributeType {
    /// Creates a named object member.
    pub fn new(name: impl Into<String>, element_type: ElementType) -> Self {
        Self {
            name: name.into(),
            element_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_members_flatten_kind_keys() {
        let json = r#"{
            "object": {
                "attribute_types": [
                    {"name": "enabled", "bool": {}},
                    {"name": "tags", "list": {"element_type": {"string": {}}}}
                ]
            }
        }"#;
        let element: ElementType = serde_json::from_str(json).unwrap();
        let object = element.object.expect("object element");

        assert_eq!(object.attribute_types[0].name, "enabled");
        assert_eq!(object.attribute_types[0].element_type, ElementType::bool());
        assert_eq!(
            object.attribute_types[1].element_type,
            ElementType::list_of(ElementType::string())
        );
    }

    #[test]
    fn empty_element_has_no_kinds() {
        let element: ElementType = serde_json::from_str("{}").unwrap();
        assert!(element.kinds().is_empty());
    }

    #[test]
    fn ambiguous_element_reports_every_kind() {
        let json = r#"{"bool": {}, "string": {}}"#;
        let element: ElementType = serde_json::from_str(json).unwrap();
        assert_eq!(element.kinds(), vec!["bool", "string"]);
    }
}
