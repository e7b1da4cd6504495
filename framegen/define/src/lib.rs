//! Framegen Definition Library
//!
//! This crate provides the input types of the `framegen` schema generator: a
//! declarative description of the attributes and blocks of a provider,
//! resource, or data source. The generator assembles these definitions into
//! a typed node tree and emits schema, record, wrapper-type, and conversion
//! code from it.
//!
//! ## Core Types
//!
//! - [`Specification`] - A whole document: provider, resources, data sources
//! - [`Schema`] - The attributes and blocks of one item
//! - [`Attribute`] - A named entry with exactly one kind payload
//! - [`Block`] - A named nesting construct with exactly one kind payload
//! - [`ElementType`] - Element types of collections and object members
//! - [`CustomType`], [`AssociatedExternalType`] - Customization descriptors
//!
//! ## Examples
//!
//! ```
//! use framegen_define::{Attribute, BoolAttribute, ComputedOptionalRequired, Schema};
//!
//! let schema = Schema {
//!     attributes: vec![Attribute {
//!         bool: Some(BoolAttribute {
//!             computed_optional_required: ComputedOptionalRequired::Computed,
//!             ..Default::default()
//!         }),
//!         ..Attribute::named("bool_attribute")
//!     }],
//!     ..Default::default()
//! };
//!
//! assert_eq!(schema.attributes[0].kinds(), vec!["bool"]);
//! ```

pub mod attribute;
pub mod block;
pub mod custom;
pub mod element;
pub mod prelude;
pub mod spec;

// Re-export main types at crate root
pub use attribute::{
    Attribute, BoolAttribute, CollectionAttribute, Float64Attribute, Int64Attribute,
    NestedAttributeObject, NestedCollectionAttribute, NumberAttribute, ObjectAttribute,
    ScalarAttribute, SingleNestedAttribute, StringAttribute,
};
pub use block::{Block, NestedBlockObject, NestedCollectionBlock, SingleNestedBlock};
pub use custom::{
    AssociatedExternalType, ComputedOptionalRequired, CustomCode, CustomDefault, CustomType,
    DefaultValue, Import, PlanModifier, Validator,
};
pub use element::{
    CollectionElement, ElementType, ObjectAttributeType, ObjectElement, ScalarElement,
};
pub use spec::{DataSource, Provider, Resource, Schema, Specification, Target};
