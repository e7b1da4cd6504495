//! Framegen code generator library.
//!
//! This crate turns `framegen-define` specifications into Go source for the
//! Terraform plugin framework. For every provider, resource, and data source
//! it emits:
//!
//! - A schema function returning the declarative `schema.Schema`
//! - A `<Name>Model` record struct with one field per attribute and block
//! - Wrapper type/value pairs for nested kinds and externally linked kinds
//! - `To<External>` / `From<External>` conversion functions for linked kinds
//!
//! ## Modules
//!
//! - [`assemble`] - Specification entries to the node tree
//! - [`schema`] - The node model and its generation operations
//! - [`element`] - Element types of collections and objects
//! - [`conversion`] - Conversion plans between generated and external types
//! - [`render`] - The rendering collaborator and Go templates
//! - [`output`] - File assembly, atomic writing, per-item reporting
//! - [`diff`] - Structural comparison of assembled trees
//! - [`imports`] - Insertion-ordered Go import sets
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```
//! use framegen_define::Specification;
//! use framegen_gen::output::generate_item;
//! use framegen_gen::render::GoRenderer;
//!
//! let spec = Specification::from_json(r#"{
//!     "resources": [{
//!         "name": "thing",
//!         "schema": {
//!             "attributes": [{"name": "bool_attribute", "bool": {"computed_optional_required": "computed"}}]
//!         }
//!     }]
//! }"#).unwrap();
//!
//! let (target, name, schema) = spec.items().next().unwrap();
//! let code = generate_item(target, name, schema, &GoRenderer::new()).unwrap();
//! assert!(code.contains("BoolAttribute types.Bool `tfsdk:\"bool_attribute\"`"));
//! ```

pub mod assemble;
pub mod conversion;
pub mod customization;
pub mod diff;
pub mod element;
pub mod errors;
pub mod field;
pub mod imports;
pub mod naming;
pub mod output;
pub mod render;
pub mod schema;

#[cfg(test)]
pub(crate) mod test_utils;
