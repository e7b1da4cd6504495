//! Insertion-ordered, deduplicating Go import sets.
//!
//! Every node contributes the imports its generated code needs; parents merge
//! their children's sets bottom-up so a whole tree yields one stable list.
//!
//! ## Examples
//!
//! ```
//! use framegen_gen::imports::{ImportSet, TYPES_IMPORT};
//!
//! let mut left = ImportSet::new();
//! left.add("context");
//! left.add(TYPES_IMPORT);
//!
//! let mut right = ImportSet::new();
//! right.add(TYPES_IMPORT);
//! right.add("fmt");
//!
//! left.merge(&right);
//! assert_eq!(left.all(), vec!["context", TYPES_IMPORT, "fmt"]);
//! ```

use framegen_define::{Import, Target};
use indexmap::IndexMap;

pub const CONTEXT_IMPORT: &str = "context";
pub const FMT_IMPORT: &str = "fmt";
pub const MATH_BIG_IMPORT: &str = "math/big";

pub const ATTR_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/attr";
pub const BASETYPES_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/types/basetypes";
pub const DIAG_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/diag";
pub const TYPES_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/types";
pub const VALIDATOR_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/schema/validator";
pub const PLANMODIFIER_IMPORT: &str =
    "github.com/hashicorp/terraform-plugin-framework/resource/schema/planmodifier";
pub const TFTYPES_IMPORT: &str = "github.com/hashicorp/terraform-plugin-go/tftypes";

pub const PROVIDER_SCHEMA_IMPORT: &str =
    "github.com/hashicorp/terraform-plugin-framework/provider/schema";
pub const RESOURCE_SCHEMA_IMPORT: &str =
    "github.com/hashicorp/terraform-plugin-framework/resource/schema";
pub const DATASOURCE_SCHEMA_IMPORT: &str =
    "github.com/hashicorp/terraform-plugin-framework/datasource/schema";

const RESOURCE_SCHEMA_DEFAULTS_PREFIX: &str =
    "github.com/hashicorp/terraform-plugin-framework/resource/schema";

/// Returns the schema package import for a target.
pub fn schema_import(target: Target) -> &'static str {
    match target {
        Target::Provider => PROVIDER_SCHEMA_IMPORT,
        Target::Resource => RESOURCE_SCHEMA_IMPORT,
        Target::DataSource => DATASOURCE_SCHEMA_IMPORT,
    }
}

/// Returns the static-default package for a scalar type name such as `Bool`.
///
/// ## Examples
///
/// ```
/// use framegen_gen::imports::default_import;
///
/// assert_eq!(
///     default_import("Bool"),
///     "github.com/hashicorp/terraform-plugin-framework/resource/schema/booldefault"
/// );
/// ```
pub fn default_import(type_name: &str) -> String {
    format!(
        "{}/{}default",
        RESOURCE_SCHEMA_DEFAULTS_PREFIX,
        type_name.to_lowercase()
    )
}

/// An ordered set of Go imports keyed by path.
///
/// Duplicate paths collapse to their first occurrence (including its alias),
/// and empty paths are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    entries: IndexMap<String, Option<String>>,
}

impl ImportSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an import path without an alias.
    pub fn add(&mut self, path: &str) {
        self.add_aliased(path, None);
    }

    /// Adds a specification import, keeping its alias.
    pub fn add_import(&mut self, import: &Import) {
        self.add_aliased(&import.path, import.alias.as_deref());
    }

    fn add_aliased(&mut self, path: &str, alias: Option<&str>) {
        if path.is_empty() {
            return;
        }
        self.entries
            .entry(path.to_string())
            .or_insert_with(|| alias.map(str::to_string));
    }

    /// Appends every path of `other` not already present, in `other`'s order.
    pub fn merge(&mut self, other: &ImportSet) {
        for (path, alias) in &other.entries {
            self.add_aliased(path, alias.as_deref());
        }
    }

    /// Returns every path in first-seen order.
    pub fn all(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Returns `true` when the path has been added.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the Go `import (...)` block; empty sets render nothing.
    pub fn to_go_block(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        let mut out = String::from("import (\n");
        for (path, alias) in &self.entries {
            match alias {
                Some(alias) => out.push_str(&format!("{} \"{}\"\n", alias, path)),
                None => out.push_str(&format!("\"{}\"\n", path)),
            }
        }
        out.push_str(")\n");
        out
    }
}

impl FromIterator<&'static str> for ImportSet {
    fn from_iter<I: IntoIterator<Item = &'static str>>(iter: I) -> Self {
        let mut set = ImportSet::new();
        for path in iter {
            set.add(path);
        }
        set
    }
}

/// Imports needed by generated wrapper type/value definitions.
pub fn wrapper_imports() -> ImportSet {
    [
        CONTEXT_IMPORT,
        FMT_IMPORT,
        ATTR_IMPORT,
        BASETYPES_IMPORT,
        DIAG_IMPORT,
        TFTYPES_IMPORT,
        TYPES_IMPORT,
    ]
    .into_iter()
    .collect()
}

/// Imports needed by conversion-function scaffolding.
pub fn conversion_imports() -> ImportSet {
    [CONTEXT_IMPORT, ATTR_IMPORT, BASETYPES_IMPORT, DIAG_IMPORT, TYPES_IMPORT]
        .into_iter()
        .collect()
}
