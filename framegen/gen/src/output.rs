//! File assembly and writing.
//!
//! Each provider, resource, and data source becomes one Go file:
//!
//! ```text
//! <output>/
//! ├── provider_example/example_provider_gen.go
//! ├── resource_thing/thing_resource_gen.go
//! └── datasource_thing/thing_datasource_gen.go
//! ```
//!
//! A file holds the generated-code header, the package clause, the merged
//! imports, the schema function, the model struct, and then every node's
//! wrapper definitions and conversion functions in name order. The whole
//! text is re-indented before it is returned.
//!
//! Items are generated independently: a failing item is reported by name
//! and the remaining items are still written.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use framegen_define::{Schema, Specification, Target};
use tracing::{debug, info, instrument, warn};

use crate::assemble::{SchemaTree, assemble_schema};
use crate::errors::GeneratorError;
use crate::imports::{CONTEXT_IMPORT, ImportSet, schema_import};
use crate::naming::{quote_go_string, to_pascal_case, to_snake_case};
use crate::render::{Renderer, reindent};
use crate::schema::nested::{attributes_clause, blocks_clause};
use crate::schema::{Node, ordered_children};

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// Code generated by framegen DO NOT EDIT.";

/// Options of one generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Print files instead of writing them.
    pub dry_run: bool,
    /// Only generate the item with this label, e.g. `resource/thing`.
    pub only: Option<String>,
}

/// A successfully generated file.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub item: String,
    pub path: PathBuf,
    pub content: String,
}

/// An item whose file could not be generated or written.
#[derive(Debug)]
pub struct ItemFailure {
    pub item: String,
    pub error: GeneratorError,
}

/// Outcome of a whole run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub generated: Vec<GeneratedFile>,
    pub failures: Vec<ItemFailure>,
}

impl GeneratedFile {
    /// Replaces the item's file on disk, creating its package directory.
    ///
    /// The content is staged in a `.go.tmp` sibling and renamed over the
    /// target, so an interrupted run leaves the previous file intact.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::WriteError`] naming whichever path failed.
    pub fn write(&self) -> Result<(), GeneratorError> {
        let staged = self.path.with_extension("go.tmp");
        if let Some(package_dir) = self.path.parent() {
            fs::create_dir_all(package_dir).map_err(write_error(package_dir))?;
        }
        fs::write(&staged, &self.content).map_err(write_error(&staged))?;
        fs::rename(&staged, &self.path).map_err(write_error(&self.path))
    }
}

fn write_error(path: &Path) -> impl FnOnce(std::io::Error) -> GeneratorError + use<> {
    let path = path.display().to_string();
    move |source| GeneratorError::WriteError { path, source }
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The `<target>/<name>` label used in reports and `--only`.
///
/// ## Examples
///
/// ```
/// use framegen_define::Target;
/// use framegen_gen::output::item_label;
///
/// assert_eq!(item_label(Target::DataSource, "thing"), "datasource/thing");
/// ```
pub fn item_label(target: Target, name: &str) -> String {
    format!("{}/{}", target, name)
}

/// Go package of an item, e.g. `resource_thing`.
pub fn package_name(target: Target, name: &str) -> String {
    format!("{}_{}", target, to_snake_case(name))
}

/// Path of an item's generated file below `output_dir`.
///
/// ## Examples
///
/// ```
/// use std::path::Path;
/// use framegen_define::Target;
/// use framegen_gen::output::output_path;
///
/// assert_eq!(
///     output_path(Path::new("internal"), Target::Resource, "thing"),
///     Path::new("internal/resource_thing/thing_resource_gen.go")
/// );
/// ```
pub fn output_path(output_dir: &Path, target: Target, name: &str) -> PathBuf {
    let name = to_snake_case(name);
    output_dir
        .join(package_name(target, &name))
        .join(format!("{}_{}_gen.go", name, target))
}

fn target_suffix(target: Target) -> &'static str {
    match target {
        Target::Provider => "Provider",
        Target::Resource => "Resource",
        Target::DataSource => "DataSource",
    }
}

/// Assembles the complete Go file for one assembled schema.
///
/// Unimplemented conversions are skipped; any other error aborts the file.
pub fn assemble_file(
    target: Target,
    name: &str,
    tree: &SchemaTree,
    renderer: &dyn Renderer,
) -> Result<String, GeneratorError> {
    let children = ordered_children(&tree.attributes, &tree.blocks);
    check_wrapper_names(&children)?;

    let mut imports = ImportSet::new();
    imports.add(CONTEXT_IMPORT);
    imports.add(schema_import(target));
    for (_, node) in &children {
        imports.merge(&node.imports());
    }

    let mut out = format!(
        "{}\n\npackage {}\n\n{}\n",
        GENERATED_HEADER,
        package_name(target, name),
        imports.to_go_block()
    );

    out.push_str(&format!(
        "func {}{}Schema(ctx context.Context) schema.Schema {{\nreturn schema.Schema{{\n",
        to_pascal_case(name),
        target_suffix(target)
    ));
    out.push_str(&attributes_clause(&tree.attributes));
    out.push_str(&blocks_clause(&tree.blocks));
    if let Some(description) = &tree.description {
        let quoted = quote_go_string(description);
        out.push_str(&format!("Description: {},\n", quoted));
        out.push_str(&format!("MarkdownDescription: {},\n", quoted));
    }
    if let Some(message) = &tree.deprecation_message {
        out.push_str(&format!("DeprecationMessage: {},\n", quote_go_string(message)));
    }
    out.push_str("}\n}\n\n");

    out.push_str(&format!("type {}Model struct {{\n", to_pascal_case(name)));
    for (child_name, node) in &children {
        out.push_str(&node.field_descriptor(child_name).to_go_field());
        out.push('\n');
    }
    out.push_str("}\n");

    for (child_name, node) in &children {
        let code = node.custom_type_and_value(child_name, renderer)?;
        if !code.is_empty() {
            out.push('\n');
            out.push_str(&code);
        }
    }

    for (child_name, node) in &children {
        match node.to_from_functions(child_name, renderer) {
            Ok(code) if !code.is_empty() => {
                out.push('\n');
                out.push_str(&code);
            }
            Ok(_) => {}
            Err(err) if err.is_unimplemented() => {
                debug!(node = child_name.as_str(), %err, "Skipping conversion functions");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(reindent(&out))
}

/// Rejects a file whose nodes would declare the same wrapper type twice.
///
/// Wrapper names come from the leaf name alone, so two nested `config`
/// children under different parents collide.
fn check_wrapper_names(children: &[(&String, &Node)]) -> Result<(), GeneratorError> {
    let mut seen: BTreeMap<String, String> = BTreeMap::new();
    for (child_name, node) in children {
        for (wrapper, path) in node.generated_wrappers(child_name) {
            if let Some(first) = seen.get(&wrapper) {
                return Err(GeneratorError::DuplicateWrapper {
                    wrapper,
                    first: first.clone(),
                    second: path,
                });
            }
            seen.insert(wrapper, path);
        }
    }
    Ok(())
}

/// Assembles and renders one item's file.
#[instrument(skip(schema, renderer))]
pub fn generate_item(
    target: Target,
    name: &str,
    schema: &Schema,
    renderer: &dyn Renderer,
) -> Result<String, GeneratorError> {
    let tree = assemble_schema(schema)?;
    assemble_file(target, name, &tree, renderer)
}

/// Loads a JSON specification document.
///
/// ## Errors
///
/// Returns [`GeneratorError::ParseError`] naming the file when it cannot be
/// read or is not a valid specification.
pub fn load_specification(path: &Path) -> Result<Specification, GeneratorError> {
    let parse_error = |reason: String| GeneratorError::ParseError {
        path: path.display().to_string(),
        reason,
    };
    let json = fs::read_to_string(path).map_err(|e| parse_error(e.to_string()))?;
    Specification::from_json(&json).map_err(|e| parse_error(e.to_string()))
}

/// Generates every item of a specification.
///
/// Never aborts early: each failing item lands in
/// [`GenerationReport::failures`] and the run continues.
#[instrument(skip(spec, renderer, options), fields(dry_run = options.dry_run))]
pub fn generate_all(
    spec: &Specification,
    output_dir: &Path,
    options: &GenerateOptions,
    renderer: &dyn Renderer,
) -> GenerationReport {
    let mut report = GenerationReport::default();

    for (target, name, schema) in spec.items() {
        let item = item_label(target, name);
        if options.only.as_ref().is_some_and(|only| *only != item) {
            continue;
        }

        let content = match generate_item(target, name, schema, renderer) {
            Ok(content) => content,
            Err(error) => {
                warn!(%item, %error, "Skipping item");
                report.failures.push(ItemFailure { item, error });
                continue;
            }
        };

        let file = GeneratedFile {
            path: output_path(output_dir, target, name),
            item,
            content,
        };
        if options.dry_run {
            println!("=== {} ===\n{}", file.path.display(), file.content);
        } else if let Err(error) = file.write() {
            warn!(item = %file.item, %error, "Failed to write item");
            report.failures.push(ItemFailure {
                item: file.item,
                error,
            });
            continue;
        } else {
            info!(item = %file.item, path = %file.path.display(), "Wrote generated file");
        }

        report.generated.push(file);
    }

    report
}
