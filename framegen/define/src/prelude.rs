//! Convenient re-exports for working with framegen definitions.
//!
//! ## Examples
//!
//! ```
//! use framegen_define::prelude::*;
//!
//! let resource = Resource {
//!     name: "thing".to_string(),
//!     schema: Schema {
//!         attributes: vec![Attribute {
//!             list: Some(CollectionAttribute {
//!                 computed_optional_required: ComputedOptionalRequired::Optional,
//!                 element_type: ElementType::string(),
//!                 ..Default::default()
//!             }),
//!             ..Attribute::named("tags")
//!         }],
//!         ..Default::default()
//!     },
//! };
//!
//! assert_eq!(resource.schema.attributes[0].kinds(), vec!["list"]);
//! ```

pub use crate::attribute::{
    Attribute, BoolAttribute, CollectionAttribute, Float64Attribute, Int64Attribute,
    NestedAttributeObject, NestedCollectionAttribute, NumberAttribute, ObjectAttribute,
    SingleNestedAttribute, StringAttribute,
};
pub use crate::block::{Block, NestedBlockObject, NestedCollectionBlock, SingleNestedBlock};
pub use crate::custom::{
    AssociatedExternalType, ComputedOptionalRequired, CustomCode, CustomDefault, CustomType,
    DefaultValue, Import, PlanModifier, Validator,
};
pub use crate::element::{ElementType, ObjectAttributeType};
pub use crate::spec::{DataSource, Provider, Resource, Schema, Specification, Target};
